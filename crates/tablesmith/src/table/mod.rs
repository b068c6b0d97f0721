//! The logical table model.
//!
//! A [`Table`] owns its [`Column`]s and a list of shared [`Row`] handles.
//! Rows are reference-counted so derived tables (pages, sorted copies)
//! can reuse them without a deep copy; any mutation goes through
//! [`Table::row_mut`], which clones a shared row before touching it.
//!
//! Nothing here knows about layout. Rendering recomputes the grid and
//! widths from scratch on every call.

mod cell;
mod column;
mod ops;
mod row;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub use cell::Cell;
pub(crate) use cell::value_text;
pub use column::{Align, Column, VAlign};
pub(crate) use ops::compare_values;
pub use ops::{Aggregate, SortOrder, TreeNode};
pub use row::{Row, RowData};

use crate::error::Result;
use crate::terminal::WidthProbe;
use crate::theme::Theme;

/// How a table adapts when it is wider than the target width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveMode {
    /// Render at natural width.
    #[default]
    None,
    /// Hide columns, highest priority value first, until the table fits.
    Hide,
    /// Transpose every row into Field/Value pairs.
    Stack,
}

/// A title spanning several header columns, drawn above the header row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderGroup {
    pub title: String,
    #[serde(default = "single_span", alias = "col_span")]
    pub col_span: usize,
}

fn single_span() -> usize {
    1
}

impl HeaderGroup {
    pub fn new(title: impl Into<String>, col_span: usize) -> Self {
        HeaderGroup {
            title: title.into(),
            col_span: col_span.max(1),
        }
    }
}

/// Footer contents: a record matched by column key, or values by position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Footer {
    Positional(Vec<Value>),
    Keyed(Map<String, Value>),
}

impl Footer {
    /// Text shown under `column`, which sits at `index` among the
    /// footer's columns. Keyed footers try the key, then the label.
    pub fn text_for(&self, column: &Column, index: usize) -> String {
        let value = match self {
            Footer::Keyed(map) => map
                .get(column.key_name())
                .or_else(|| map.get(&column.name)),
            Footer::Positional(values) => values.get(index),
        };
        value.map(value_text).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Footer {
    fn from(map: Map<String, Value>) -> Self {
        Footer::Keyed(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Footer {
    fn from(values: Vec<T>) -> Self {
        Footer::Positional(values.into_iter().map(Into::into).collect())
    }
}

/// A table: columns, rows and presentation options.
///
/// ```rust
/// use tablesmith::Table;
///
/// let mut table = Table::new().with_columns(["ID", "Name"]);
/// table.add_row(["1", "Alice"]);
///
/// let out = table.render().unwrap();
/// assert!(out.contains("Alice"));
/// assert!(out.starts_with('╭'));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Arc<Row>>,
    theme: Theme,
    compact: bool,
    zebra: bool,
    responsive: ResponsiveMode,
    terminal_width: Option<usize>,
    width_probe: Option<WidthProbe>,
    header_groups: Vec<HeaderGroup>,
    footer: Option<Footer>,
    header_color: Option<String>,
    colors: bool,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            columns: Vec::new(),
            rows: Vec::new(),
            theme: Theme::rounded(),
            compact: false,
            zebra: false,
            responsive: ResponsiveMode::None,
            terminal_width: None,
            width_probe: None,
            header_groups: Vec::new(),
            footer: None,
            header_color: None,
            colors: true,
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Configuration (consuming builders) ---

    pub fn with_columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Suppresses separator rules between data rows.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Dims every second data row.
    pub fn zebra(mut self, zebra: bool) -> Self {
        self.zebra = zebra;
        self
    }

    pub fn responsive(mut self, mode: ResponsiveMode) -> Self {
        self.responsive = mode;
        self
    }

    /// Target output width. Beats the width probe.
    pub fn terminal_width(mut self, width: usize) -> Self {
        self.terminal_width = Some(width);
        self
    }

    pub fn width_probe(mut self, probe: WidthProbe) -> Self {
        self.width_probe = Some(probe);
        self
    }

    pub fn header_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = HeaderGroup>,
    {
        self.header_groups = groups.into_iter().collect();
        self
    }

    /// Color applied to every header label, beating column colors.
    pub fn header_color(mut self, color: impl Into<String>) -> Self {
        self.header_color = Some(color.into());
        self
    }

    /// Enables or disables all color output (default on).
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn footer(mut self, footer: impl Into<Footer>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    // --- Mutation ---

    /// Replaces the column list. Existing rows are kept as they are.
    pub fn set_columns<I, C>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one column after the existing ones.
    pub fn add_column(&mut self, column: impl Into<Column>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    pub fn set_footer(&mut self, footer: impl Into<Footer>) -> &mut Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn clear_footer(&mut self) -> &mut Self {
        self.footer = None;
        self
    }

    pub fn clear_rows(&mut self) -> &mut Self {
        self.rows.clear();
        self
    }

    /// Appends a row given positionally or as a keyed record.
    ///
    /// A keyed record added to a table without columns defines the columns,
    /// in the record's key order.
    pub fn add_row(&mut self, row: impl Into<RowData>) -> &mut Self {
        let row = match row.into() {
            RowData::Positional(cells) => Row::new(cells),
            RowData::Keyed(record) => {
                if self.columns.is_empty() {
                    self.columns = record.keys().map(|k| Column::new(k.as_str())).collect();
                    debug!(columns = self.columns.len(), "inferred columns from keyed row");
                }
                Row::from_keyed(&record, &self.columns)
            }
        };
        self.rows.push(Arc::new(row));
        self
    }

    pub fn add_rows<I, R>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RowData>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    /// Appends any serializable value: sequences become positional rows,
    /// maps and structs become keyed rows.
    pub fn add_serialized<T: Serialize>(&mut self, value: &T) -> Result<&mut Self> {
        let data = RowData::try_from(serde_json::to_value(value)?)?;
        Ok(self.add_row(data))
    }

    /// Appends a shared row handle without copying it.
    pub fn push_shared(&mut self, row: Arc<Row>) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Mutable access to a row. A row shared with another table is copied
    /// first, so the other table never sees the change.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index).map(Arc::make_mut)
    }

    /// Replaces the content of one cell. Returns false when out of range.
    pub fn set_cell(&mut self, row: usize, col: usize, content: impl Into<Value>) -> bool {
        match self.row_mut(row).and_then(|r| r.cells.get_mut(col)) {
            Some(cell) => {
                cell.content = content.into();
                true
            }
            None => false,
        }
    }

    // --- Accessors ---

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index).map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_zebra(&self) -> bool {
        self.zebra
    }

    pub fn responsive_mode(&self) -> ResponsiveMode {
        self.responsive
    }

    pub fn get_header_groups(&self) -> &[HeaderGroup] {
        &self.header_groups
    }

    pub fn get_footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    pub fn get_header_color(&self) -> Option<&str> {
        self.header_color.as_deref()
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// The explicit terminal width, else whatever the probe reports.
    pub fn effective_terminal_width(&self) -> Option<usize> {
        self.terminal_width
            .or_else(|| self.width_probe.as_ref().and_then(WidthProbe::width))
    }

    /// Columns that are not hidden, with their index in the full list.
    pub fn visible_columns(&self) -> impl Iterator<Item = (usize, &Column)> + '_ {
        self.columns.iter().enumerate().filter(|(_, c)| !c.hidden)
    }

    /// A table with the same columns and options and no rows.
    pub(crate) fn empty_like(&self) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: Vec::new(),
            theme: self.theme.clone(),
            compact: self.compact,
            zebra: self.zebra,
            responsive: self.responsive,
            terminal_width: self.terminal_width,
            width_probe: self.width_probe.clone(),
            header_groups: self.header_groups.clone(),
            footer: self.footer.clone(),
            header_color: self.header_color.clone(),
            colors: self.colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_column_appends_and_keys_rows() {
        let mut table = Table::new().with_columns(["name"]);
        table
            .add_column(Column::new("Age").key("age").right())
            .add_column("city");
        let names: Vec<_> = table.columns().iter().map(|c| c.key_name()).collect();
        assert_eq!(names, vec!["name", "age", "city"]);

        table.add_row(RowData::keyed([("city", json!("Oslo")), ("age", json!(41))]));
        let row = table.row(0).unwrap();
        assert_eq!(row.cells[1].text(), "41");
        assert_eq!(row.cells[2].text(), "Oslo");
    }

    #[test]
    fn keyed_rows_infer_columns_in_key_order() {
        let mut table = Table::new();
        table.add_row(RowData::keyed([("name", json!("Alice")), ("age", json!(30))]));
        table.add_row(RowData::keyed([("age", json!(25)), ("name", json!("Bob"))]));

        let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(table.row(1).unwrap().cells[0].text(), "Bob");
        assert_eq!(table.row(1).unwrap().cells[1].text(), "25");
    }

    #[test]
    fn keyed_rows_use_declared_keys() {
        let mut table = Table::new().with_columns([Column::new("Full Name").key("name")]);
        table.add_row(RowData::keyed([("name", "Carol")]));
        assert_eq!(table.row(0).unwrap().cells[0].text(), "Carol");
    }

    #[test]
    fn add_serialized_struct_and_tuple() {
        #[derive(Serialize)]
        struct Person {
            name: &'static str,
            age: u32,
        }

        let mut table = Table::new();
        table.add_serialized(&Person { name: "Dana", age: 41 }).unwrap();
        table.add_serialized(&("Eve", 29)).unwrap();
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.row(0).unwrap().cells[1].text(), "41");
        assert_eq!(table.row(1).unwrap().cells[0].text(), "Eve");

        assert!(table.add_serialized(&"scalar").is_err());
    }

    #[test]
    fn row_mut_copies_shared_rows() {
        let mut source = Table::new().with_columns(["a"]);
        source.add_row(["x"]);

        let mut derived = source.empty_like();
        derived.push_shared(source.rows()[0].clone());
        assert!(derived.set_cell(0, 0, "changed"));

        assert_eq!(source.row(0).unwrap().cells[0].text(), "x");
        assert_eq!(derived.row(0).unwrap().cells[0].text(), "changed");
        assert!(!derived.set_cell(5, 0, "nope"));
    }

    #[test]
    fn explicit_width_beats_probe() {
        let table = Table::new().width_probe(WidthProbe::fixed(50));
        assert_eq!(table.effective_terminal_width(), Some(50));

        let table = table.terminal_width(30);
        assert_eq!(table.effective_terminal_width(), Some(30));
    }

    #[test]
    fn footer_lookup() {
        let col = Column::new("Total").key("total");
        let keyed = Footer::Keyed(json!({"total": 12}).as_object().unwrap().clone());
        assert_eq!(keyed.text_for(&col, 0), "12");

        let by_label = Footer::Keyed(json!({"Total": "sum"}).as_object().unwrap().clone());
        assert_eq!(by_label.text_for(&col, 0), "sum");

        let positional = Footer::from(vec!["a", "b"]);
        assert_eq!(positional.text_for(&col, 1), "b");
        assert_eq!(positional.text_for(&col, 2), "");
    }

    #[test]
    fn responsive_mode_serde() {
        let mode: ResponsiveMode = serde_json::from_str(r#""stack""#).unwrap();
        assert_eq!(mode, ResponsiveMode::Stack);
    }
}
