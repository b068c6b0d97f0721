use serde_json::{Map, Value};

use super::cell::Cell;
use super::column::Column;
use crate::error::{Result, TableError};

/// An ordered sequence of cells, one per logical column position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Builds a row from a keyed record, one cell per column key.
    /// Missing keys produce null cells.
    pub fn from_keyed(record: &Map<String, Value>, columns: &[Column]) -> Self {
        let cells = columns
            .iter()
            .map(|col| {
                record
                    .get(col.key_name())
                    .cloned()
                    .map(Cell::from)
                    .unwrap_or_default()
            })
            .collect();
        Row { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Row input as accepted by [`Table::add_row`](crate::Table::add_row).
///
/// Positional rows are taken as-is. Keyed rows are matched against column
/// keys; when the table has no columns yet the record's keys define them.
#[derive(Clone, Debug, PartialEq)]
pub enum RowData {
    Positional(Vec<Cell>),
    Keyed(Map<String, Value>),
}

impl RowData {
    /// Builds a keyed row from `(key, value)` pairs.
    pub fn keyed<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        RowData::Keyed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<T: Into<Cell>> From<Vec<T>> for RowData {
    fn from(cells: Vec<T>) -> Self {
        RowData::Positional(cells.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Cell>, const N: usize> From<[T; N]> for RowData {
    fn from(cells: [T; N]) -> Self {
        RowData::Positional(cells.into_iter().map(Into::into).collect())
    }
}

impl From<Map<String, Value>> for RowData {
    fn from(map: Map<String, Value>) -> Self {
        RowData::Keyed(map)
    }
}

impl From<Row> for RowData {
    fn from(row: Row) -> Self {
        RowData::Positional(row.cells)
    }
}

impl TryFrom<Value> for RowData {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(RowData::Positional(
                items.into_iter().map(Cell::from).collect(),
            )),
            Value::Object(map) => Ok(RowData::Keyed(map)),
            other => Err(TableError::InvalidRow(format!(
                "expected an array or object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
