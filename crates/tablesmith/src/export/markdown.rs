//! GitHub-flavored Markdown pipe tables.

use super::{cell_text, visible};
use crate::table::{Align, Table};

/// Header row, alignment rule and body rows. Literal `|` in text is
/// escaped as `\|`.
pub fn to_markdown(table: &Table) -> String {
    let columns = visible(table);

    let header = pipe_row(columns.iter().map(|(_, c)| c.name.clone()));
    let rule = format!(
        "| {} |",
        columns
            .iter()
            .map(|(_, c)| align_marker(c.align))
            .collect::<Vec<_>>()
            .join(" | ")
    );
    let body: Vec<String> = table
        .rows()
        .iter()
        .map(|row| pipe_row(columns.iter().map(|(i, _)| cell_text(row, *i))))
        .collect();

    let mut lines = vec![header, rule];
    lines.extend(body);
    lines.join("\n")
}

fn pipe_row(cells: impl Iterator<Item = String>) -> String {
    let cells: Vec<String> = cells.map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |", cells.join(" | "))
}

fn align_marker(align: Align) -> &'static str {
    match align {
        Align::Left => ":---",
        Align::Center => ":---:",
        Align::Right => "---:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn header_rule_and_body() {
        let mut table = Table::new().with_columns([
            Column::new("Item"),
            Column::new("Qty").right(),
            Column::new("Note").center(),
        ]);
        table.add_row(["pipe", "2", "a|b"]);
        assert_eq!(
            to_markdown(&table),
            "| Item | Qty | Note |\n| :--- | ---: | :---: |\n| pipe | 2 | a\\|b |"
        );
    }

    #[test]
    fn no_rows_keeps_header_and_rule() {
        let table = Table::new().with_columns(["a"]);
        assert_eq!(to_markdown(&table), "| a |\n| :--- |");
    }
}
