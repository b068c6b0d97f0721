//! Span placement: sparse rows of cells into a dense grid.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Result, TableError};
use crate::table::{Cell, Row};

/// One position of the resolved grid.
///
/// Origin positions carry the cell and its real spans. Positions covered by
/// a span from elsewhere are `hidden` and point at the covering cell when
/// it was placed in the same pass. Empty positions have no cell.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell<'a> {
    pub cell: Option<&'a Cell>,
    pub x: usize,
    pub y: usize,
    pub col_span: usize,
    pub row_span: usize,
    pub hidden: bool,
}

impl<'a> GridCell<'a> {
    fn empty(x: usize, y: usize, hidden: bool) -> Self {
        GridCell {
            cell: None,
            x,
            y,
            col_span: 1,
            row_span: 1,
            hidden,
        }
    }

    /// True for the visible origin of a cell.
    pub fn is_origin(&self) -> bool {
        !self.hidden && self.cell.is_some()
    }

    /// Display text; empty for placeholders.
    pub fn text(&self) -> String {
        self.cell.map(Cell::text).unwrap_or_default()
    }
}

/// The dense grid for a set of rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<'a> {
    pub rows: Vec<Vec<GridCell<'a>>>,
    pub column_count: usize,
}

impl<'a> Grid<'a> {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Origin cells in row-major order.
    pub fn origins(&self) -> impl Iterator<Item = &GridCell<'a>> {
        self.rows.iter().flatten().filter(|g| g.is_origin())
    }
}

/// Places every cell of `rows` into a grid.
///
/// With `declared_columns` set, that count is authoritative and a row that
/// runs past it fails with [`TableError::ColumnOverflow`]. Without it the
/// width is the furthest any row reaches. Overlapping span footprints fail
/// with [`TableError::SpanConflict`]. Cells marked `merged` are skipped.
///
/// Rows reaching further down than the last row through `row_span` extend
/// the grid with extra lines.
pub fn layout<'a>(rows: &'a [Arc<Row>], declared_columns: Option<usize>) -> Result<Grid<'a>> {
    let mut occupied: HashSet<(usize, usize)> = HashSet::new();
    let mut placed: Vec<Vec<Option<GridCell<'a>>>> = Vec::with_capacity(rows.len());
    let mut max_columns = 0;

    for (y, row) in rows.iter().enumerate() {
        let mut cursor = 0;

        for cell in &row.cells {
            while occupied.contains(&(cursor, y)) {
                cursor += 1;
            }
            if cell.merged {
                continue;
            }

            let col_span = cell.cols();
            let row_span = cell.rows();

            if let Some(limit) = declared_columns {
                if cursor + col_span > limit {
                    return Err(TableError::ColumnOverflow {
                        row: y,
                        columns: limit,
                    });
                }
            }

            for dy in 0..row_span {
                for dx in 0..col_span {
                    if occupied.contains(&(cursor + dx, y + dy)) {
                        return Err(TableError::SpanConflict {
                            row: y + dy,
                            col: cursor + dx,
                        });
                    }
                }
            }

            for dy in 0..row_span {
                for dx in 0..col_span {
                    let (gx, gy) = (cursor + dx, y + dy);
                    occupied.insert((gx, gy));
                    let slot = slot_mut(&mut placed, gx, gy);
                    *slot = Some(GridCell {
                        cell: Some(cell),
                        x: gx,
                        y: gy,
                        col_span,
                        row_span,
                        hidden: dx != 0 || dy != 0,
                    });
                }
            }

            cursor += col_span;
            max_columns = max_columns.max(cursor);
        }
    }

    let column_count = declared_columns.unwrap_or(max_columns);
    let height = placed.len().max(rows.len());
    let mut grid_rows = Vec::with_capacity(height);

    for y in 0..height {
        let line = placed.get_mut(y).map(std::mem::take).unwrap_or_default();
        let mut out = Vec::with_capacity(column_count);
        let mut line = line.into_iter();
        for x in 0..column_count {
            match line.next().flatten() {
                Some(g) => out.push(g),
                None => out.push(GridCell::empty(x, y, occupied.contains(&(x, y)))),
            }
        }
        grid_rows.push(out);
    }

    Ok(Grid {
        rows: grid_rows,
        column_count,
    })
}

fn slot_mut<'s, 'a>(
    placed: &'s mut Vec<Vec<Option<GridCell<'a>>>>,
    x: usize,
    y: usize,
) -> &'s mut Option<GridCell<'a>> {
    if placed.len() <= y {
        placed.resize_with(y + 1, Vec::new);
    }
    let line = &mut placed[y];
    if line.len() <= x {
        line.resize_with(x + 1, || None);
    }
    &mut line[x]
}
