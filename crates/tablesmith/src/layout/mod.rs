//! Layout: span placement, width resolution and responsive fitting.
//!
//! Rendering runs three stages, recomputed from the table on every call:
//!
//! 1. [`fit`] picks what to draw: the visible columns, a narrower set of
//!    columns, or a stacked Field/Value table.
//! 2. [`layout`] places every cell into a dense [`Grid`], failing on
//!    overflowing rows and overlapping spans before anything is drawn.
//! 3. [`resolve_widths`] sizes each column from headers, content and spans.

mod grid;
mod responsive;
mod widths;

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;

pub use grid::{layout, Grid, GridCell};
pub(crate) use responsive::project;
pub use responsive::{fit, stack, Fitted};
pub(crate) use widths::base_width;
pub use widths::{resolve_widths, table_width, Measure};

use crate::error::Result;
use crate::table::{Column, Footer, HeaderGroup, Row, Table};
use crate::theme::Theme;

/// The part of a table that gets drawn: visible columns with their rows
/// projected onto them.
#[derive(Clone, Debug)]
pub struct View {
    pub columns: Vec<Column>,
    pub rows: Vec<Arc<Row>>,
    pub footer: Option<Footer>,
    pub header_groups: Vec<HeaderGroup>,
    /// False when the table declares no columns and they were inferred.
    pub show_header: bool,
}

/// A view's grid with its resolved widths.
#[derive(Clone, Debug)]
pub struct Measured<'v> {
    pub grid: Grid<'v>,
    pub widths: Vec<usize>,
    pub total_width: usize,
}

impl View {
    /// Builds the view of `table` without its hidden columns and without
    /// the column indices in `dropped`.
    pub fn of(table: &Table, dropped: &HashSet<usize>) -> Result<View> {
        let footer = table.get_footer().cloned();
        let header_groups = table.get_header_groups().to_vec();

        if table.columns().is_empty() {
            let inferred = layout(table.rows(), None)?.column_count;
            return Ok(View {
                columns: (0..inferred).map(|_| Column::new("")).collect(),
                rows: table.rows().to_vec(),
                footer,
                header_groups,
                show_header: false,
            });
        }

        let keep: Vec<usize> = table
            .visible_columns()
            .map(|(i, _)| i)
            .filter(|i| !dropped.contains(i))
            .collect();
        let columns = keep.iter().map(|&i| table.columns()[i].clone()).collect();

        if keep.len() == table.columns().len() {
            return Ok(View {
                columns,
                rows: table.rows().to_vec(),
                footer,
                header_groups,
                show_header: true,
            });
        }

        let footer = footer.map(|f| match f {
            Footer::Positional(values) => Footer::Positional(
                keep.iter()
                    .map(|&i| values.get(i).cloned().unwrap_or(Value::Null))
                    .collect(),
            ),
            keyed => keyed,
        });

        Ok(View {
            columns,
            rows: project(table.rows(), table.columns().len(), &keep)?,
            footer,
            header_groups,
            show_header: true,
        })
    }

    /// Lays out the grid and resolves widths.
    pub fn measure(&self, theme: &Theme) -> Result<Measured<'_>> {
        let grid = layout(&self.rows, Some(self.columns.len()))?;
        let extra = self.extra_measures();
        let widths = resolve_widths(&self.columns, &grid, &extra, theme);
        let total_width = table_width(&self.columns, &widths, theme);
        Ok(Measured {
            grid,
            widths,
            total_width,
        })
    }

    /// Header group titles and footer texts, which also need room.
    fn extra_measures(&self) -> Vec<Measure> {
        let n = self.columns.len();
        let mut extra = Vec::new();

        let mut cursor = 0;
        for group in &self.header_groups {
            if cursor >= n {
                break;
            }
            let span = group.col_span.max(1).min(n - cursor);
            extra.push(Measure::new(cursor, span, group.title.clone()));
            cursor += span;
        }

        if let Some(footer) = &self.footer {
            for (i, col) in self.columns.iter().enumerate() {
                extra.push(Measure::new(i, 1, footer.text_for(col, i)));
            }
        }
        extra
    }
}
