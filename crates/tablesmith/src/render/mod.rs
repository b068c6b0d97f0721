//! Turning a table into text.
//!
//! [`render`] is a pure function of the table: layout and widths are
//! recomputed on every call and nothing is written until the whole grid
//! has been placed, so a layout error never comes with partial output.
//! [`StreamRenderer`] draws rows chunk by chunk against widths fixed up
//! front.

mod lines;
mod stream;

use tracing::trace;

pub use stream::StreamRenderer;

use crate::error::Result;
use crate::layout::{fit, Fitted};
use crate::table::Table;
use crate::theme::Border;
use lines::{footer_slots, grid_slots, group_slots, header_slots, Painter};

/// Renders `table` to a newline-joined string without a trailing newline.
///
/// A table with no columns and no rows renders as the empty string.
pub fn render(table: &Table) -> Result<String> {
    if table.columns().is_empty() && table.is_empty() {
        return Ok(String::new());
    }

    let view = match fit(table)? {
        Fitted::Stacked(stacked) => return render(&stacked),
        Fitted::Horizontal(view) => view,
    };
    if view.columns.is_empty() {
        return Ok(String::new());
    }

    let theme = table.get_theme();
    let measured = view.measure(theme)?;
    trace!(
        columns = view.columns.len(),
        rows = measured.grid.height(),
        width = measured.total_width,
        "layout resolved"
    );

    let painter = Painter::new(theme, &view.columns, &measured.widths, table.colors_enabled());
    let separator = painter.rule(Border::Join);
    let mut out: Vec<String> = Vec::new();

    out.extend(painter.rule(Border::Top));

    if !view.header_groups.is_empty() {
        let slots = group_slots(&view.header_groups, view.columns.len());
        out.extend(painter.row(&slots, None, false));
        if !table.is_compact() {
            out.extend(separator.clone());
        }
    }

    if view.show_header {
        out.extend(painter.row(&header_slots(&view.columns), table.get_header_color(), false));
        if measured.grid.height() > 0 {
            out.extend(separator.clone());
        }
    }

    let height = measured.grid.height();
    for (y, row) in measured.grid.rows.iter().enumerate() {
        let dim = table.is_zebra() && y % 2 == 1;
        out.extend(painter.row(&grid_slots(row), None, dim));
        if !table.is_compact() && y + 1 < height {
            out.extend(separator.clone());
        }
    }

    if let Some(footer) = &view.footer {
        out.extend(separator.clone());
        out.extend(painter.row(&footer_slots(footer, &view.columns), None, false));
    }

    out.extend(painter.rule(Border::Bottom));

    Ok(out.join("\n"))
}

impl Table {
    /// Renders the table. See [`render`].
    ///
    /// ```rust
    /// use tablesmith::Table;
    ///
    /// let mut table = Table::new().with_columns(["ID", "Name"]);
    /// table.add_row(["1", "Alice"]);
    /// let text = table.render().unwrap();
    /// assert!(text.starts_with("╭────┬───────╮"));
    /// ```
    pub fn render(&self) -> Result<String> {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use console::Style;

    use super::*;
    use crate::table::{Cell, Column, HeaderGroup, ResponsiveMode};
    use crate::theme::Theme;

    fn ascii(columns: &[&str]) -> Table {
        Table::new()
            .with_columns(columns.iter().copied())
            .theme(Theme::ascii())
    }

    #[test]
    fn rounded_two_by_one() {
        let mut table = Table::new().with_columns(["ID", "Name"]);
        table.add_row(["1", "Alice"]);
        assert_eq!(
            table.render().unwrap(),
            [
                "╭────┬───────╮",
                "│ ID │ Name  │",
                "├────┼───────┤",
                "│ 1  │ Alice │",
                "╰────┴───────╯",
            ]
            .join("\n")
        );
    }

    #[test]
    fn rows_are_separated_unless_compact() {
        let mut table = ascii(&["a", "b"]);
        table.add_rows([["x", "y"], ["z", "w"]]);
        let loose = table.render().unwrap();
        assert_eq!(loose.lines().filter(|l| *l == "+---+---+").count(), 4);

        let compact = table.clone().compact(true).render().unwrap();
        assert_eq!(
            compact,
            ["+---+---+", "| a | b |", "+---+---+", "| x | y |", "| z | w |", "+---+---+"].join("\n")
        );
    }

    #[test]
    fn void_theme_has_no_rules() {
        let mut table = Table::new().with_columns(["a", "b"]).theme(Theme::void());
        table.add_row(["x", "y"]);
        assert_eq!(table.render().unwrap(), " a    b \n x    y ");
    }

    #[test]
    fn footer_follows_a_separator() {
        let mut table = ascii(&["a", "b"]).footer(vec!["T", "3"]);
        table.add_row(["1", "2"]);
        let text = table.render().unwrap();
        assert!(text.ends_with("| 1 | 2 |\n+---+---+\n| T | 3 |\n+---+---+"));
    }

    #[test]
    fn header_groups_are_centered_over_their_columns() {
        let mut table = ascii(&["a", "b"]).header_groups([HeaderGroup::new("AB", 2)]);
        table.add_row(["x", "y"]);
        let rendered = table.render().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "|  AB   |");
        assert_eq!(lines[2], "+---+---+");
        assert_eq!(lines[3], "| a | b |");
    }

    #[test]
    fn header_color_leaves_group_titles_plain() {
        let mut table = ascii(&["a", "b"])
            .header_groups([HeaderGroup::new("AB", 2)])
            .header_color("red");
        table.add_row(["x", "y"]);
        let text = table.render().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "|  AB   |");
        assert!(lines[3].contains("\x1b["));
    }

    #[test]
    fn spanning_row_is_drawn_once_without_joins() {
        let mut table = ascii(&["a", "b", "c"]);
        table.add_row(vec![Cell::new("Full Span").col_span(3)]);
        let text = table.render().unwrap();
        assert_eq!(text.matches("Full Span").count(), 1);
        let line = text.lines().find(|l| l.contains("Full Span")).unwrap();
        assert_eq!(line.matches('|').count(), 2);
    }

    #[test]
    fn header_only_table_has_no_trailing_separator() {
        let table = ascii(&["a"]);
        assert_eq!(table.render().unwrap(), "+---+\n| a |\n+---+");
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(Table::new().render().unwrap(), "");
    }

    #[test]
    fn inferred_columns_draw_no_header() {
        let mut table = Table::new().theme(Theme::ascii());
        table.add_row(["x", "y"]);
        assert_eq!(table.render().unwrap(), "+---+---+\n| x | y |\n+---+---+");
    }

    #[test]
    fn layout_errors_surface() {
        let mut table = ascii(&["a"]);
        table.add_row(["1", "2"]);
        assert!(table.render().unwrap_err().is_layout());
    }

    #[test]
    fn zebra_dims_odd_rows() {
        let mut table = ascii(&["a"]).zebra(true);
        table.add_rows([["0"], ["1"], ["2"]]);
        let text = table.render().unwrap();
        let dimmed: Vec<&str> = text.lines().filter(|l| l.starts_with("\x1b[2m")).collect();
        assert_eq!(dimmed.len(), 1);
        assert!(dimmed[0].contains("| 1 |"));
    }

    #[test]
    fn header_color_overrides_column_color() {
        let mut table = Table::new()
            .with_columns([Column::new("a").color("green")])
            .theme(Theme::ascii())
            .header_color("red");
        table.add_row(["x"]);
        let text = table.render().unwrap();
        let red = Style::from_dotted_str("red").force_styling(true).apply_to("a").to_string();
        let green = Style::from_dotted_str("green").force_styling(true).apply_to("x").to_string();
        assert!(text.contains(&red));
        assert!(text.contains(&green));
    }

    #[test]
    fn stack_mode_renders_field_value_pairs() {
        let mut table = Table::new()
            .with_columns(["Name", "Description"])
            .responsive(ResponsiveMode::Stack)
            .terminal_width(20);
        table.add_row(["Alice", "A rather long description"]);
        let text = table.render().unwrap();
        assert!(text.contains("Field"));
        assert!(text.contains("Row 1"));
        assert!(text.contains("│ Description │"));
    }

    #[test]
    fn render_is_repeatable() {
        let mut table = Table::new().with_columns(["a", "b"]).zebra(true);
        table.add_rows([["1", "2"], ["3", "4"]]);
        assert_eq!(table.render().unwrap(), table.render().unwrap());
    }
}
