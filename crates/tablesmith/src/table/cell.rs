use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::column::{Align, VAlign};

/// A single logical cell: content plus span and presentation overrides.
///
/// Content is any JSON scalar (or structure) and is rendered through
/// [`Cell::text`]. Spans are at least one; a zero read from data is
/// treated as one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default)]
    pub content: Value,
    #[serde(default = "one", alias = "col_span")]
    pub col_span: usize,
    #[serde(default = "one", alias = "row_span")]
    pub row_span: usize,
    /// Absorbed into a vertical span of the cell above. Merged cells take
    /// no grid position.
    #[serde(default)]
    pub merged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, alias = "v_align", skip_serializing_if = "Option::is_none")]
    pub v_align: Option<VAlign>,
    /// Per-cell color; beats the column color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn one() -> usize {
    1
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new(Value::Null)
    }
}

impl Cell {
    pub fn new(content: impl Into<Value>) -> Self {
        Cell {
            content: content.into(),
            col_span: 1,
            row_span: 1,
            merged: false,
            align: None,
            v_align: None,
            color: None,
        }
    }

    /// An empty cell.
    pub fn empty() -> Self {
        Cell::new(Value::String(String::new()))
    }

    pub fn col_span(mut self, span: usize) -> Self {
        self.col_span = span.max(1);
        self
    }

    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span.max(1);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn v_align(mut self, v_align: VAlign) -> Self {
        self.v_align = Some(v_align);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The content as display text. Null renders as the empty string.
    ///
    /// ```rust
    /// use tablesmith::Cell;
    ///
    /// assert_eq!(Cell::new("Alice").text(), "Alice");
    /// assert_eq!(Cell::new(42).text(), "42");
    /// assert_eq!(Cell::default().text(), "");
    /// ```
    pub fn text(&self) -> String {
        value_text(&self.content)
    }

    /// Effective column span, never zero.
    pub fn cols(&self) -> usize {
        self.col_span.max(1)
    }

    /// Effective row span, never zero.
    pub fn rows(&self) -> usize {
        self.row_span.max(1)
    }
}

/// Coerces a JSON value into display text.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Value> for Cell {
    /// Objects carrying a `content` key are read as cell declarations,
    /// anything else becomes the cell's content.
    fn from(value: Value) -> Self {
        let is_declaration = matches!(&value, Value::Object(map) if map.contains_key("content"));
        if is_declaration {
            if let Ok(cell) = serde_json::from_value::<Cell>(value.clone()) {
                return cell;
            }
        }
        Cell::new(value)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::new(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::new(s)
    }
}

impl From<&String> for Cell {
    fn from(s: &String) -> Self {
        Cell::new(s.as_str())
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::new(b)
    }
}

macro_rules! cell_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Cell {
                fn from(n: $t) -> Self {
                    Cell::new(n)
                }
            }
        )*
    };
}

cell_from_number!(i32, i64, u32, u64, usize, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_coercion() {
        assert_eq!(Cell::new(3.5).text(), "3.5");
        assert_eq!(Cell::new(true).text(), "true");
        assert_eq!(Cell::new(Value::Null).text(), "");
        assert_eq!(Cell::empty().text(), "");
    }

    #[test]
    fn declaration_objects_become_cell_options() {
        let cell = Cell::from(json!({"content": "Full Span", "colSpan": 3}));
        assert_eq!(cell.text(), "Full Span");
        assert_eq!(cell.col_span, 3);
        assert_eq!(cell.row_span, 1);

        let cell = Cell::from(json!({"content": 7, "row_span": 2, "align": "right"}));
        assert_eq!(cell.row_span, 2);
        assert_eq!(cell.align, Some(Align::Right));
    }

    #[test]
    fn plain_objects_stay_content() {
        let cell = Cell::from(json!({"a": 1}));
        assert_eq!(cell.col_span, 1);
        assert_eq!(cell.text(), r#"{"a":1}"#);
    }

    #[test]
    fn spans_are_never_zero() {
        let cell = Cell::new("x").col_span(0).row_span(0);
        assert_eq!(cell.col_span, 1);
        assert_eq!(cell.row_span, 1);

        let cell = Cell::from(json!({"content": "x", "colSpan": 0}));
        assert_eq!(cell.cols(), 1);
    }
}
