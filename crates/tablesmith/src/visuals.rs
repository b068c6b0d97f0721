//! Cell-content helpers: sparklines and heatmap colors.
//!
//! Both produce values that go straight into cells. A sparkline is plain
//! text; a heat color is a style tag for [`Cell::color`](crate::Cell::color),
//! so it follows the table's color switch like any other cell color.
//!
//! ```rust
//! use tablesmith::{heat_color, sparkline, Cell, HeatScale};
//!
//! assert_eq!(sparkline(&[1.0, 4.0, 8.0], None, None), " ▄█");
//! let cell = Cell::new(92).color(heat_color(92.0, 0.0, 100.0, HeatScale::Text));
//! assert_eq!(cell.color.as_deref(), Some("green"));
//! ```

use console::Style;

const BARS: [char; 8] = [' ', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders `values` as one bar glyph each.
///
/// The scale runs from `min` to `max`, defaulting to the smallest and
/// largest value. Values outside it are clamped. A flat scale draws every
/// value at the lowest bar. Non-finite values draw as the lowest bar too.
pub fn sparkline(values: &[f64], min: Option<f64>, max: Option<f64>) -> String {
    let finite = || values.iter().copied().filter(|v| v.is_finite());
    let low = min.unwrap_or_else(|| finite().fold(f64::INFINITY, f64::min));
    let mut high = max.unwrap_or_else(|| finite().fold(f64::NEG_INFINITY, f64::max));
    if low.is_nan() || high.is_nan() || high <= low {
        high = low + 1.0;
    }
    let range = high - low;
    let top = (BARS.len() - 1) as f64;

    values
        .iter()
        .map(|&v| {
            if !v.is_finite() || !range.is_finite() {
                return BARS[0];
            }
            let index = ((v.clamp(low, high) - low) * top / range).floor() as usize;
            BARS[index.min(BARS.len() - 1)]
        })
        .collect()
}

/// Which part of the cell a heat color paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeatScale {
    /// Red, yellow, green text across the low, middle and high thirds.
    #[default]
    Text,
    /// Red or green background, split at the midpoint.
    Background,
}

/// Style tag for `value` on the `min..=max` scale; low is red, high green.
///
/// A flat scale puts every value at the midpoint.
pub fn heat_color(value: f64, min: f64, max: f64, scale: HeatScale) -> &'static str {
    let range = max - min;
    let normalized = if range == 0.0 {
        0.5
    } else {
        (value - min) / range
    };

    match scale {
        HeatScale::Text if normalized < 0.33 => "red",
        HeatScale::Text if normalized < 0.66 => "yellow",
        HeatScale::Text => "green",
        HeatScale::Background if normalized < 0.5 => "on_red",
        HeatScale::Background => "on_green",
    }
}

/// The value as text, painted with its heat color.
pub fn heatmap(value: f64, min: f64, max: f64, scale: HeatScale) -> String {
    Style::from_dotted_str(heat_color(value, min, max, scale))
        .force_styling(true)
        .apply_to(value)
        .to_string()
}

/// Paints each value on the scale spanned by the whole slice.
pub fn heatmap_auto(values: &[f64]) -> Vec<String> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|&v| heatmap(v, min, max, HeatScale::Text))
        .collect()
}
