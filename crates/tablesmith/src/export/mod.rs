//! Exporting tables to other text formats.
//!
//! Exporters read the visible columns and the raw per-row cells directly.
//! They skip grid layout, so spans are not resolved: a spanning cell is
//! exported once at its declared index and the cells after it keep their
//! declared positions. Tables that use spans should be flattened first.
//!
//! ```rust
//! use tablesmith::{ExportFormat, ExportOptions, Table};
//!
//! let mut table = Table::new().with_columns(["Name", "Note"]);
//! table.add_row(["Charlie, Jr.", "ok"]);
//!
//! let csv = table.export(ExportFormat::Csv, &ExportOptions::default()).unwrap();
//! assert_eq!(csv, "Name,Note\n\"Charlie, Jr.\",ok");
//!
//! let md = table.export_as("md").unwrap();
//! assert!(md.starts_with("| Name | Note |\n| :--- | :--- |"));
//! ```

mod delimited;
mod html;
mod json;
mod markdown;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TableError};
use crate::table::{Cell, Column, Row, Table};

pub use delimited::to_csv;
pub use html::to_html;
pub use json::to_json;
pub use markdown::to_markdown;

/// Supported export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
    Html,
    Markdown,
}

impl FromStr for ExportFormat {
    type Err = TableError;

    /// Accepts `csv`, `json`, `html`, `md` and `markdown`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            _ => Err(TableError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Options for delimited output. Other formats ignore them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub delimiter: char,
    pub quote: char,
    pub header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            delimiter: ',',
            quote: '"',
            header: true,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl Table {
    pub fn export(&self, format: ExportFormat, options: &ExportOptions) -> Result<String> {
        match format {
            ExportFormat::Csv => to_csv(self, options),
            ExportFormat::Json => to_json(self),
            ExportFormat::Html => Ok(to_html(self)),
            ExportFormat::Markdown => Ok(to_markdown(self)),
        }
    }

    /// Exports with default options to a format given by name.
    pub fn export_as(&self, format: &str) -> Result<String> {
        self.export(format.parse()?, &ExportOptions::default())
    }
}

/// Visible columns with their declared indices.
fn visible(table: &Table) -> Vec<(usize, &Column)> {
    table.visible_columns().collect()
}

fn cell_at(row: &Row, index: usize) -> Option<&Cell> {
    row.cells.get(index)
}

fn cell_text(row: &Row, index: usize) -> String {
    cell_at(row, index).map(Cell::text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!(ExportFormat::Html.to_string(), "html");
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = Table::new().export_as("xml").unwrap_err();
        assert!(matches!(err, TableError::UnknownFormat(ref f) if f == "xml"));
    }

    #[test]
    fn options_builder() {
        let opts = ExportOptions::new().delimiter(';').quote('\'').header(false);
        assert_eq!(opts.delimiter, ';');
        assert_eq!(opts.quote, '\'');
        assert!(!opts.header);
    }
}
