//! Minimal HTML table fragment.

use quick_xml::escape::escape;

use super::{cell_text, visible};
use crate::table::Table;

/// A single `<table>` with `<thead>` and `<tbody>`, no whitespace and no
/// styling. Text is entity-escaped.
pub fn to_html(table: &Table) -> String {
    let columns = visible(table);
    let mut out = String::from("<table><thead><tr>");

    for (_, column) in &columns {
        out.push_str("<th>");
        out.push_str(&escape(column.name.as_str()));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");

    for row in table.rows() {
        out.push_str("<tr>");
        for (i, _) in &columns {
            out.push_str("<td>");
            out.push_str(&escape(cell_text(row, *i).as_str()));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}
