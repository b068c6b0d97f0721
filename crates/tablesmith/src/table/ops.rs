//! Whole-table operations: aggregation, sorting, paging and reshaping.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use tracing::debug;

use super::cell::value_text;
use super::column::Column;
use super::row::RowData;
use super::{Footer, Table};

/// Footer aggregation used by [`Table::summarize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    #[default]
    Sum,
    /// Mean rounded to two decimals; zero for an empty column.
    Avg,
    /// Number of numeric values.
    Count,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// A node for [`Table::add_tree`]: a record plus nested children.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(fields: Map<String, Value>) -> Self {
        TreeNode {
            fields,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }
}

impl Table {
    /// Index of the column whose name or key is `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name || c.key_name() == name)
    }

    /// Writes an aggregate of each named column into a keyed footer.
    ///
    /// Non-numeric cells are ignored. Entries already in a keyed footer are
    /// kept; a positional footer is replaced. Unknown columns are skipped.
    pub fn summarize(&mut self, columns: &[&str], op: Aggregate) -> &mut Self {
        let mut footer = match self.footer.take() {
            Some(Footer::Keyed(map)) => map,
            _ => Map::new(),
        };

        for name in columns {
            let Some(index) = self.column_index(name) else {
                continue;
            };
            let values: Vec<f64> = self
                .rows
                .iter()
                .filter_map(|row| row.cells.get(index))
                .filter_map(|cell| numeric(&cell.content))
                .collect();

            let result = match op {
                Aggregate::Count => Value::from(values.len()),
                Aggregate::Sum => number_value(values.iter().sum()),
                Aggregate::Avg if values.is_empty() => Value::from(0),
                Aggregate::Avg => {
                    let mean = values.iter().sum::<f64>() / values.len() as f64;
                    number_value((mean * 100.0).round() / 100.0)
                }
            };
            footer.insert((*name).to_string(), result);
        }

        self.footer = Some(Footer::Keyed(footer));
        self
    }

    /// Stable sort by one column.
    ///
    /// Two numeric values compare as numbers, anything else compares as
    /// lowercase text. Nulls go last in both directions. An unknown column
    /// leaves the order untouched.
    pub fn sort(&mut self, column: &str, order: SortOrder) -> &mut Self {
        let Some(index) = self.column_index(column) else {
            return self;
        };

        self.rows.sort_by(|a, b| {
            let va = a.cells.get(index).map(|c| &c.content);
            let vb = b.cells.get(index).map(|c| &c.content);
            compare_values(va, vb, order)
        });
        self
    }

    /// One page of rows (1-based) as a new table sharing the row handles.
    pub fn paginate(&self, page: usize, page_size: usize) -> Table {
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(self.rows.len());

        let mut next = self.empty_like();
        if start < end {
            next.rows = self.rows[start..end].to_vec();
        }
        debug!(page, page_size, rows = next.rows.len(), "paginated");
        next
    }

    /// Every page of `page_size` rows. Empty for a zero page size.
    pub fn pages(&self, page_size: usize) -> Vec<Table> {
        if page_size == 0 {
            return Vec::new();
        }
        let total = self.rows.len().div_ceil(page_size);
        (1..=total).map(|p| self.paginate(p, page_size)).collect()
    }

    /// A two-column Key/Value table listing the record's entries in order.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use tablesmith::Table;
    ///
    /// let record = json!({"host": "db-1", "port": 5432});
    /// let table = Table::from_vertical(record.as_object().unwrap());
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.row(1).unwrap().cells[1].text(), "5432");
    /// ```
    pub fn from_vertical(record: &Map<String, Value>) -> Table {
        let mut table = Table::new().with_columns([
            Column::new("Key").key("key"),
            Column::new("Value").key("value"),
        ]);
        for (key, value) in record {
            table.add_row(RowData::keyed([
                ("key", Value::String(key.clone())),
                ("value", value.clone()),
            ]));
        }
        table
    }

    /// Flattens a tree into rows, depth first, indenting the label column.
    ///
    /// Children are prefixed with `├─ ` after `(depth - 1) * indent` spaces.
    pub fn add_tree(&mut self, label_column: &str, nodes: &[TreeNode], indent: usize) -> &mut Self {
        for node in nodes {
            self.add_tree_node(label_column, node, 0, indent);
        }
        self
    }

    fn add_tree_node(&mut self, label_column: &str, node: &TreeNode, depth: usize, indent: usize) {
        let mut record = node.fields.clone();
        if depth > 0 {
            if let Some(label) = record.get_mut(label_column) {
                let text = value_text(label);
                if !text.is_empty() {
                    let prefix = " ".repeat((depth - 1) * indent);
                    *label = Value::String(format!("{prefix}├─ {text}"));
                }
            }
        }
        self.add_row(RowData::Keyed(record));

        for child in &node.children {
            self.add_tree_node(label_column, child, depth + 1, indent);
        }
    }

    /// Merges runs of equal content down each column into one tall cell.
    ///
    /// The first cell of a run grows its `row_span`, the rest are marked
    /// `merged` and take no grid position. `None` merges every column.
    /// Run this before rendering and do not combine it with explicit spans
    /// in the same columns.
    pub fn merge_adjacent(&mut self, columns: Option<&[&str]>) -> &mut Self {
        let indices: Vec<usize> = match columns {
            Some(names) => names.iter().filter_map(|n| self.column_index(n)).collect(),
            None => (0..self.columns.len()).collect(),
        };

        for col in indices {
            let mut origin = self
                .rows
                .first()
                .and_then(|r| r.cells.get(col))
                .map(|_| 0usize);

            for i in 1..self.rows.len() {
                let current = self.rows[i].cells.get(col).map(|c| c.content.clone());
                let same = match (origin, &current) {
                    (Some(o), Some(content)) => self.rows[o].cells[col].content == *content,
                    _ => false,
                };

                if same {
                    if let Some(cell) = origin
                        .and_then(|o| self.row_mut(o))
                        .and_then(|r| r.cells.get_mut(col))
                    {
                        cell.row_span = cell.rows() + 1;
                    }
                    if let Some(cell) = self.row_mut(i).and_then(|r| r.cells.get_mut(col)) {
                        cell.merged = true;
                    }
                } else {
                    origin = current.map(|_| i);
                }
            }
        }
        self
    }

    /// Colors every cell of one row. The row is copied first when another
    /// table shares it, so only this table shows the highlight.
    pub fn highlight_row(&mut self, index: usize, color: &str) -> bool {
        match self.row_mut(index) {
            Some(row) => {
                for cell in &mut row.cells {
                    cell.color = Some(color.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// True when this table and `other` hold the same row handle at `index`.
    pub fn shares_row_with(&self, other: &Table, index: usize) -> bool {
        match (self.rows.get(index), other.rows.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Numeric reading of a cell value: numbers, or strings that parse as one.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Whole results become integers so `12` does not print as `12.0`.
fn number_value(x: f64) -> Value {
    if x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
        Value::from(x as i64)
    } else {
        Number::from_f64(x).map(Value::Number).unwrap_or(Value::Null)
    }
}

pub(crate) fn compare_values(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    let is_null = |v: Option<&Value>| matches!(v, Some(Value::Null));
    match (is_null(a), is_null(b)) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let a = a.cloned().unwrap_or_else(|| Value::String(String::new()));
    let b = b.cloned().unwrap_or_else(|| Value::String(String::new()));

    let ordering = match (numeric(&a), numeric(&b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => value_text(&a)
            .to_lowercase()
            .cmp(&value_text(&b).to_lowercase()),
    };

    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
