//! Fitting a table into a target width.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use super::{layout, View};
use crate::error::Result;
use crate::table::{Align, Cell, Column, ResponsiveMode, Row, Table};

/// What the renderer should draw.
#[derive(Debug)]
pub enum Fitted {
    /// The table itself, possibly with columns hidden.
    Horizontal(View),
    /// A Field/Value transposition of the table.
    Stacked(Box<Table>),
}

/// Chooses the presentation for a table given its responsive mode and
/// target width.
///
/// Without a target width, or in [`ResponsiveMode::None`], the visible
/// columns are drawn as they are. Otherwise, when the natural layout is too
/// wide, `Hide` drops columns by descending priority (ties keep column
/// order), re-measuring after each, until the table fits or one column is
/// left. `Stack` transposes the whole table instead.
pub fn fit(table: &Table) -> Result<Fitted> {
    let natural = View::of(table, &HashSet::new())?;

    let limit = match (table.responsive_mode(), table.effective_terminal_width()) {
        (ResponsiveMode::None, _) | (_, None) => return Ok(Fitted::Horizontal(natural)),
        (_, Some(limit)) => limit,
    };

    let width = natural.measure(table.get_theme())?.total_width;
    trace!(width, limit, "natural table width");
    if width <= limit {
        return Ok(Fitted::Horizontal(natural));
    }

    if table.responsive_mode() == ResponsiveMode::Stack {
        debug!(width, limit, "table too wide, stacking rows");
        return Ok(Fitted::Stacked(Box::new(stack(table)?)));
    }

    let mut order: Vec<(usize, &Column)> = table.visible_columns().collect();
    order.sort_by_key(|(_, c)| Reverse(c.priority));

    let mut remaining = order.len();
    let mut hidden = HashSet::new();
    let mut view = natural;

    for (index, column) in order {
        if remaining <= 1 {
            break;
        }
        hidden.insert(index);
        remaining -= 1;
        debug!(column = %column.name, priority = column.priority, "hiding column");

        view = View::of(table, &hidden)?;
        let width = view.measure(table.get_theme())?.total_width;
        if width <= limit {
            debug!(width, limit, hidden = hidden.len(), "table fits");
            return Ok(Fitted::Horizontal(view));
        }
    }

    debug!(limit, "no column subset fits, using narrowest layout");
    Ok(Fitted::Horizontal(view))
}

/// Transposes every row into a block of Field/Value rows headed by a
/// centered `Row n` title.
///
/// Values are read from the resolved grid, so a field covered by a span
/// shows the spanning cell's value. Fails on the same layout errors as
/// rendering the table itself.
pub fn stack(table: &Table) -> Result<Table> {
    let visible: Vec<(usize, &Column)> = table.visible_columns().collect();
    let declared = (!table.columns().is_empty()).then(|| table.columns().len());
    let grid = layout(table.rows(), declared)?;

    let mut stacked = Table::new()
        .with_columns([Column::new("Field"), Column::new("Value")])
        .theme(table.get_theme().clone())
        .compact(table.is_compact())
        .colors(table.colors_enabled());

    for (y, line) in grid.rows.iter().take(table.len()).enumerate() {
        stacked.add_row(vec![Cell::new(format!("Row {}", y + 1))
            .col_span(2)
            .align(Align::Center)]);

        for (x, column) in &visible {
            let value = line[*x]
                .cell
                .map(|c| Cell::new(c.content.clone()))
                .unwrap_or_else(Cell::empty);
            stacked.add_row(vec![Cell::new(column.name.as_str()), value]);
        }
    }
    Ok(stacked)
}

/// Projects rows onto the kept column indices through their resolved grid.
///
/// Each cell keeps its row span and is narrowed to the kept columns its
/// footprint still covers. Cells covering none of them are dropped, and
/// kept positions nothing covers get empty cells.
pub(crate) fn project(
    rows: &[Arc<Row>],
    columns: usize,
    keep: &[usize],
) -> Result<Vec<Arc<Row>>> {
    let grid = layout(rows, Some(columns))?;
    let slot: HashMap<usize, usize> = keep.iter().enumerate().map(|(p, &x)| (x, p)).collect();

    let mut origins: Vec<BTreeMap<usize, Cell>> = (0..rows.len()).map(|_| BTreeMap::new()).collect();
    let mut covered: HashSet<(usize, usize)> = HashSet::new();

    for origin in grid.origins() {
        let Some(cell) = origin.cell else { continue };
        let kept: Vec<usize> = (origin.x..origin.x + origin.col_span)
            .filter_map(|x| slot.get(&x).copied())
            .collect();
        let (Some(&first), Some(line)) = (kept.first(), origins.get_mut(origin.y)) else {
            continue;
        };
        for dy in 0..origin.row_span {
            covered.extend(kept.iter().map(|&p| (p, origin.y + dy)));
        }
        let mut cell = cell.clone();
        cell.col_span = kept.len();
        line.insert(first, cell);
    }

    Ok(origins
        .into_iter()
        .enumerate()
        .map(|(y, mut line)| {
            let mut cells = Vec::new();
            let mut p = 0;
            while p < keep.len() {
                if let Some(cell) = line.remove(&p) {
                    p += cell.col_span;
                    cells.push(cell);
                } else {
                    if !covered.contains(&(p, y)) {
                        cells.push(Cell::empty());
                    }
                    p += 1;
                }
            }
            Arc::new(Row::new(cells))
        })
        .collect())
}
