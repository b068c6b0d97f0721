//! Paged data sources.
//!
//! Browsers and pagers pull rows page by page from a [`DataSource`] and
//! feed them to a table. The table only needs the rows to be valid
//! [`RowData`]; sorting and filtering are the source's business.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::table::{compare_values, value_text, Cell, RowData, SortOrder, Table};

/// A source of rows that can be read a slice at a time.
pub trait DataSource {
    /// Total number of rows currently available.
    fn count(&self) -> Result<usize>;

    /// Up to `limit` rows starting at `offset` (0-based).
    fn rows(&self, offset: usize, limit: usize) -> Result<Vec<RowData>>;

    /// Reorders the source. Sources that cannot sort ignore this.
    fn sort(&mut self, _column: &str, _order: SortOrder) {}

    /// Narrows the source to rows matching `query`; an empty query clears
    /// the filter. Sources that cannot filter ignore this.
    fn filter(&mut self, _query: &str) {}
}

/// An in-memory source over a list of rows.
///
/// Sorting looks values up by key in keyed rows and by numeric index in
/// positional rows. Filtering keeps rows with any value containing the
/// query, ignoring case.
///
/// ```rust
/// use tablesmith::{DataSource, RowData, SortOrder, VecSource};
///
/// let mut source = VecSource::new(vec![
///     RowData::keyed([("name", "bo")]),
///     RowData::keyed([("name", "Al")]),
/// ]);
/// source.sort("name", SortOrder::Asc);
/// assert_eq!(source.rows(0, 1).unwrap(), vec![RowData::keyed([("name", "Al")])]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    rows: Vec<RowData>,
    visible: Vec<usize>,
}

impl VecSource {
    pub fn new(rows: Vec<RowData>) -> Self {
        let visible = (0..rows.len()).collect();
        VecSource { rows, visible }
    }

    fn value<'a>(row: &'a RowData, column: &str) -> Option<&'a Value> {
        match row {
            RowData::Keyed(map) => map.get(column),
            RowData::Positional(cells) => column
                .parse::<usize>()
                .ok()
                .and_then(|i| cells.get(i))
                .map(|c| &c.content),
        }
    }

    fn matches(row: &RowData, needle: &str) -> bool {
        let hit = |v: &Value| value_text(v).to_lowercase().contains(needle);
        match row {
            RowData::Keyed(map) => map.values().any(hit),
            RowData::Positional(cells) => cells.iter().map(|c: &Cell| &c.content).any(hit),
        }
    }
}

impl<R: Into<RowData>> FromIterator<R> for VecSource {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        VecSource::new(iter.into_iter().map(Into::into).collect())
    }
}

impl DataSource for VecSource {
    fn count(&self) -> Result<usize> {
        Ok(self.visible.len())
    }

    fn rows(&self, offset: usize, limit: usize) -> Result<Vec<RowData>> {
        Ok(self
            .visible
            .iter()
            .skip(offset)
            .take(limit)
            .map(|&i| self.rows[i].clone())
            .collect())
    }

    fn sort(&mut self, column: &str, order: SortOrder) {
        let rows = &self.rows;
        self.visible.sort_by(|&a, &b| {
            compare_values(
                Self::value(&rows[a], column),
                Self::value(&rows[b], column),
                order,
            )
        });
    }

    fn filter(&mut self, query: &str) {
        let needle = query.trim().to_lowercase();
        self.visible = (0..self.rows.len())
            .filter(|&i| needle.is_empty() || Self::matches(&self.rows[i], &needle))
            .collect();
    }
}

impl Table {
    /// Replaces the rows with one slice read from `source`.
    pub fn load_page(
        &mut self,
        source: &dyn DataSource,
        offset: usize,
        limit: usize,
    ) -> Result<&mut Self> {
        let rows = source.rows(offset, limit)?;
        debug!(offset, limit, fetched = rows.len(), "loaded page from source");
        self.clear_rows();
        Ok(self.add_rows(rows))
    }
}
