//! Column width resolution.

use super::grid::Grid;
use crate::table::Column;
use crate::theme::Theme;
use crate::util::{display_width, strip_ansi};

/// Text outside the grid that still needs room: header groups and footers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measure {
    pub x: usize,
    pub span: usize,
    pub text: String,
}

impl Measure {
    pub fn new(x: usize, span: usize, text: impl Into<String>) -> Self {
        Measure {
            x,
            span: span.max(1),
            text: text.into(),
        }
    }
}

/// Computes the content width of every column.
///
/// Each column starts at `max(min_width, width or header width)`, capped
/// by `max_width`. Single-column cells then widen non-fixed columns up to
/// their cap. Finally spanning cells that still lack room grow their
/// non-fixed member columns in rounds of equal shares; a share is
/// `ceil(deficit / candidates)`, clamped to each column's remaining cap
/// and to what is still missing, so earlier columns absorb the rounding.
pub fn resolve_widths(
    columns: &[Column],
    grid: &Grid<'_>,
    extra: &[Measure],
    theme: &Theme,
) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(base_width).collect();
    let n = widths.len();

    let singles = grid
        .origins()
        .filter(|g| g.col_span == 1)
        .map(|g| (g.x, g.text()))
        .chain(extra.iter().filter(|m| m.span == 1).map(|m| (m.x, m.text.clone())));

    for (x, text) in singles {
        if x >= n || columns[x].is_fixed() {
            continue;
        }
        let col = &columns[x];
        let mut w = widths[x];
        for line in strip_ansi(&text).split('\n') {
            w = w.max(display_width(line)).max(col.min_width);
        }
        if let Some(max) = col.max_width {
            w = w.min(max);
        }
        widths[x] = w;
    }

    let join = theme.body_join_width();
    let spans = grid
        .origins()
        .filter(|g| g.col_span > 1)
        .map(|g| (g.x, g.col_span, g.text()))
        .chain(extra.iter().filter(|m| m.span > 1).map(|m| (m.x, m.span, m.text.clone())));

    for (start, span, text) in spans {
        if start + span > n {
            continue;
        }
        grow_span(columns, &mut widths, start, span, &text, join);
    }

    widths
}

/// Starting width before any content is seen.
pub(crate) fn base_width(col: &Column) -> usize {
    let natural = col.width.unwrap_or_else(|| display_width(&col.name));
    let w = col.min_width.max(natural);
    match col.max_width {
        Some(max) => w.min(max),
        None => w,
    }
}

fn grow_span(columns: &[Column], widths: &mut [usize], start: usize, span: usize, text: &str, join: usize) {
    let desired = strip_ansi(text)
        .split('\n')
        .map(display_width)
        .max()
        .unwrap_or(0)
        .max(1);
    let current: usize = widths[start..start + span].iter().sum::<usize>() + join * (span - 1);
    let mut remaining = desired.saturating_sub(current);

    let mut candidates: Vec<usize> = (start..start + span)
        .filter(|&i| !columns[i].is_fixed())
        .collect();

    while remaining > 0 && !candidates.is_empty() {
        let per = remaining.div_ceil(candidates.len());
        let mut next = Vec::with_capacity(candidates.len());

        for &i in &candidates {
            if remaining == 0 {
                break;
            }
            let max_add = match columns[i].max_width {
                Some(max) => max.saturating_sub(widths[i]),
                None => per,
            };
            let applied = per.min(max_add).min(remaining);
            widths[i] += applied;
            remaining -= applied;

            if columns[i].max_width.map_or(true, |max| widths[i] < max) {
                next.push(i);
            }
        }
        candidates = next;
    }
}

/// Total rendered width: content, padding, joins and side borders.
pub fn table_width(columns: &[Column], widths: &[usize], theme: &Theme) -> usize {
    if widths.is_empty() {
        return 0;
    }
    let content: usize = widths.iter().sum();
    let padding: usize = columns.iter().map(Column::padding_total).sum();
    let joins = theme.body_join_width() * widths.len().saturating_sub(1);
    content + padding + joins + theme.body_edges_width()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::layout::grid::layout;
    use crate::table::{Cell, Row};

    fn resolve(columns: &[Column], data: Vec<Vec<Cell>>) -> Vec<usize> {
        let rows: Vec<Arc<Row>> = data.into_iter().map(|c| Arc::new(Row::new(c))).collect();
        let grid = layout(&rows, Some(columns.len())).unwrap();
        resolve_widths(columns, &grid, &[], &Theme::rounded())
    }

    #[test]
    fn header_sets_the_floor() {
        let cols = vec![Column::new("Name"), Column::new("ID")];
        assert_eq!(resolve(&cols, vec![vec![Cell::new("Al"), Cell::new("7")]]), vec![4, 2]);
    }

    #[test]
    fn content_grows_until_cap() {
        let cols = vec![Column::new("a"), Column::new("b").max_width(5)];
        let widths = resolve(
            &cols,
            vec![vec![Cell::new("hello world"), Cell::new("a much longer value")]],
        );
        assert_eq!(widths, vec![11, 5]);
    }

    #[test]
    fn multiline_content_uses_widest_line() {
        let cols = vec![Column::new("a")];
        assert_eq!(resolve(&cols, vec![vec![Cell::new("ab\nabcdef\nx")]]), vec![6]);
    }

    #[test]
    fn fixed_width_ignores_content() {
        let cols = vec![Column::new("Description").width(5)];
        assert_eq!(resolve(&cols, vec![vec![Cell::new("Looooong text here")]]), vec![5]);
    }

    #[test]
    fn min_width_applies() {
        let cols = vec![Column::new("a").min_width(6)];
        assert_eq!(resolve(&cols, vec![vec![Cell::new("x")]]), vec![6]);
    }

    #[test]
    fn span_deficit_shared_evenly() {
        // 1 + 1 + 1 + two joins = 5, need 12: shares of 3 until 7 is used up.
        let cols = vec![Column::new("a"), Column::new("b"), Column::new("c")];
        let widths = resolve(&cols, vec![vec![Cell::new("abcdefghijkl").col_span(3)]]);
        assert_eq!(widths, vec![4, 4, 2]);
    }

    #[test]
    fn span_growth_skips_fixed_and_respects_caps() {
        let cols = vec![
            Column::new("a").width(1),
            Column::new("b").max_width(2),
            Column::new("c"),
        ];
        let widths = resolve(&cols, vec![vec![Cell::new("abcdefghijkl").col_span(3)]]);
        // deficit 7: round one gives b +1 (cap) and c +4, round two gives c +2.
        assert_eq!(widths, vec![1, 2, 7]);
    }

    #[test]
    fn span_that_already_fits_changes_nothing() {
        let cols = vec![Column::new("aaaa"), Column::new("bbbb")];
        let widths = resolve(&cols, vec![vec![Cell::new("short").col_span(2)]]);
        assert_eq!(widths, vec![4, 4]);
    }

    #[test]
    fn extra_measures_count() {
        let cols = vec![Column::new("a"), Column::new("b")];
        let rows: Vec<Arc<Row>> = Vec::new();
        let grid = layout(&rows, Some(2)).unwrap();
        let extra = vec![Measure::new(1, 1, "total: 100"), Measure::new(0, 2, "x")];
        let widths = resolve_widths(&cols, &grid, &extra, &Theme::rounded());
        assert_eq!(widths, vec![1, 10]);
    }

    #[test]
    fn total_width_counts_borders() {
        let cols = vec![Column::new("ID"), Column::new("Name")];
        // 2 + 4 content, 4 padding, one join, two edges.
        assert_eq!(table_width(&cols, &[2, 4], &Theme::rounded()), 13);
        assert_eq!(table_width(&cols, &[2, 4], &Theme::void()), 12);
        assert_eq!(table_width(&[], &[], &Theme::rounded()), 0);
    }
}

#[cfg(test)]
mod proptests {
    use std::sync::Arc;

    use super::*;
    use crate::layout::grid::layout;
    use crate::table::{Cell, Row};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fixed_widths_are_exact(
            fixed in 1usize..30,
            content in "[a-z ]{0,80}",
        ) {
            let cols = vec![Column::new("Col").width(fixed), Column::new("Other")];
            let rows = vec![Arc::new(Row::new(vec![Cell::new(content.clone()), Cell::new(content)]))];
            let grid = layout(&rows, Some(2)).unwrap();
            let widths = resolve_widths(&cols, &grid, &[], &Theme::rounded());
            prop_assert_eq!(widths[0], fixed);
        }

        #[test]
        fn spans_get_enough_room_when_uncapped(
            len in 1usize..60,
            span in 2usize..5,
        ) {
            let cols: Vec<Column> = (0..span).map(|i| Column::new(format!("{i}"))).collect();
            let rows = vec![Arc::new(Row::new(vec![Cell::new("x".repeat(len)).col_span(span)]))];
            let grid = layout(&rows, Some(span)).unwrap();
            let widths = resolve_widths(&cols, &grid, &[], &Theme::rounded());
            let available: usize = widths.iter().sum::<usize>() + (span - 1);
            prop_assert!(available >= len);
        }
    }
}
