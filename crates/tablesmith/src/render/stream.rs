//! Incremental output for data that arrives in chunks.

use std::sync::Arc;

use super::lines::{grid_slots, header_slots, Painter};
use crate::error::Result;
use crate::layout::{base_width, layout, project};
use crate::table::{Column, Row, RowData, Table};
use crate::theme::Border;

/// Draws a table header once and then rows chunk by chunk.
///
/// Widths are fixed from header labels and declared widths when the
/// renderer is created and never change afterwards; content wider than its
/// column is wrapped or truncated to that width. Streams that need stable
/// columns should declare `width` on every column.
///
/// ```rust
/// use tablesmith::{Column, StreamRenderer, Table, Theme};
///
/// let table = Table::new()
///     .with_columns([Column::new("id").width(3), Column::new("event").width(8)])
///     .theme(Theme::ascii());
/// let mut stream = StreamRenderer::new(&table);
///
/// let first = stream.render_rows([["1", "start"]]).unwrap();
/// assert!(first.starts_with("+-----+----------+\n| id  | event    |"));
/// let next = stream.render_rows([["2", "stop"]]).unwrap();
/// assert_eq!(next, "| 2   | stop     |");
/// assert_eq!(stream.render_footer(), "+-----+----------+");
/// ```
#[derive(Debug)]
pub struct StreamRenderer<'t> {
    table: &'t Table,
    keep: Vec<usize>,
    columns: Vec<Column>,
    widths: Vec<usize>,
    header_rendered: bool,
}

impl<'t> StreamRenderer<'t> {
    pub fn new(table: &'t Table) -> Self {
        let (keep, columns): (Vec<usize>, Vec<Column>) = table
            .visible_columns()
            .map(|(i, c)| (i, c.clone()))
            .unzip();
        let widths = columns.iter().map(base_width).collect();
        StreamRenderer {
            table,
            keep,
            columns,
            widths,
            header_rendered: false,
        }
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn header_rendered(&self) -> bool {
        self.header_rendered
    }

    /// Top border, header row and separator. Empty after the first call.
    pub fn render_header(&mut self) -> String {
        if self.header_rendered {
            return String::new();
        }
        self.header_rendered = true;

        let painter = self.painter();
        let mut out: Vec<String> = Vec::new();
        out.extend(painter.rule(Border::Top));
        out.extend(painter.row(
            &header_slots(&self.columns),
            self.table.get_header_color(),
            false,
        ));
        out.extend(painter.rule(Border::Join));
        out.join("\n")
    }

    /// Draws a chunk of rows without separators between them, preceded by
    /// the header if it has not been drawn yet.
    ///
    /// Keyed rows are matched against the table's columns. The chunk is
    /// laid out as a whole, so a bad span fails before anything is drawn.
    pub fn render_rows<I, R>(&mut self, rows: I) -> Result<String>
    where
        I: IntoIterator<Item = R>,
        R: Into<RowData>,
    {
        let rows: Vec<Arc<Row>> = rows
            .into_iter()
            .map(|data| {
                Arc::new(match data.into() {
                    RowData::Positional(cells) => Row::new(cells),
                    RowData::Keyed(record) => Row::from_keyed(&record, self.table.columns()),
                })
            })
            .collect();
        let rows = if self.keep.len() == self.table.columns().len() {
            rows
        } else {
            project(&rows, self.table.columns().len(), &self.keep)?
        };
        let grid = layout(&rows, Some(self.columns.len()))?;

        let mut out = Vec::new();
        if !self.header_rendered {
            out.push(self.render_header());
        }
        let painter = self.painter();
        for row in &grid.rows {
            out.extend(painter.row(&grid_slots(row), None, false));
        }
        Ok(out.join("\n"))
    }

    /// The bottom border, or empty when the theme has none.
    pub fn render_footer(&self) -> String {
        self.painter().rule(Border::Bottom).unwrap_or_default()
    }

    fn painter(&self) -> Painter<'_> {
        Painter::new(
            self.table.get_theme(),
            &self.columns,
            &self.widths,
            self.table.colors_enabled(),
        )
    }
}
