//! Column definitions: labels, data keys, width constraints and alignment.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Split the gap, extra space on the right.
    Center,
    /// Pad on the left.
    Right,
}

/// Vertical placement of a cell's lines within a taller row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Configuration for a single table column.
///
/// The data `key` defaults to the display `name` and cannot be changed once
/// the column is built; rows given as keyed records are matched against it.
///
/// ```rust
/// use tablesmith::{Align, Column};
///
/// let col = Column::new("Amount").key("amount").width(10).align(Align::Right);
/// assert_eq!(col.key_name(), "amount");
/// assert_eq!(col.width, Some(10));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ColumnRaw", into = "ColumnRaw")]
pub struct Column {
    /// Header label.
    pub name: String,
    key: String,
    /// Fixed content width. Fixed columns never grow with content.
    pub width: Option<usize>,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub align: Align,
    pub v_align: VAlign,
    pub padding_left: usize,
    pub padding_right: usize,
    /// Suffix appended when a line is truncated (word wrap off).
    pub truncate: String,
    pub wrap_word: bool,
    /// Higher values are hidden first when the table must shrink.
    pub priority: i32,
    pub hidden: bool,
    /// A dotted `console` style string such as `"cyan"` or `"red.bold"`.
    pub color: Option<String>,
}

impl Column {
    /// Creates a column whose key equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Column {
            key: name.clone(),
            name,
            width: None,
            min_width: 1,
            max_width: None,
            align: Align::Left,
            v_align: VAlign::Top,
            padding_left: 1,
            padding_right: 1,
            truncate: "...".to_string(),
            wrap_word: true,
            priority: 100,
            hidden: false,
            color: None,
        }
    }

    /// The key used to look up values in keyed rows.
    pub fn key_name(&self) -> &str {
        &self.key
    }

    /// Sets the data key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Shorthand for `.align(Align::Center)`.
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    pub fn v_align(mut self, v_align: VAlign) -> Self {
        self.v_align = v_align;
        self
    }

    /// Sets left and right padding together.
    pub fn padding(mut self, left: usize, right: usize) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    pub fn truncate(mut self, suffix: impl Into<String>) -> Self {
        self.truncate = suffix.into();
        self
    }

    pub fn wrap_word(mut self, wrap: bool) -> Self {
        self.wrap_word = wrap;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True when the column has a fixed width.
    pub fn is_fixed(&self) -> bool {
        self.width.is_some()
    }

    /// Total horizontal padding around the content area.
    pub fn padding_total(&self) -> usize {
        self.padding_left + self.padding_right
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

/// Serialized form of a column: either a bare name or a full record.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColumnRaw {
    Name(String),
    Full(ColumnFields),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnFields {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<usize>,
    #[serde(default = "default_min_width", alias = "min_width")]
    min_width: usize,
    #[serde(default, alias = "max_width", skip_serializing_if = "Option::is_none")]
    max_width: Option<usize>,
    #[serde(default)]
    align: Align,
    #[serde(default, alias = "v_align")]
    v_align: VAlign,
    #[serde(default = "default_padding", alias = "padding_left")]
    padding_left: usize,
    #[serde(default = "default_padding", alias = "padding_right")]
    padding_right: usize,
    #[serde(default = "default_truncate")]
    truncate: String,
    #[serde(default = "default_wrap_word", alias = "wrap_word")]
    wrap_word: bool,
    #[serde(default = "default_priority")]
    priority: i32,
    #[serde(default)]
    hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

fn default_min_width() -> usize {
    1
}

fn default_padding() -> usize {
    1
}

fn default_truncate() -> String {
    "...".to_string()
}

fn default_wrap_word() -> bool {
    true
}

fn default_priority() -> i32 {
    100
}

impl From<ColumnRaw> for Column {
    fn from(raw: ColumnRaw) -> Self {
        match raw {
            ColumnRaw::Name(name) => Column::new(name),
            ColumnRaw::Full(f) => Column {
                key: f.key.unwrap_or_else(|| f.name.clone()),
                name: f.name,
                width: f.width,
                min_width: f.min_width,
                max_width: f.max_width,
                align: f.align,
                v_align: f.v_align,
                padding_left: f.padding_left,
                padding_right: f.padding_right,
                truncate: f.truncate,
                wrap_word: f.wrap_word,
                priority: f.priority,
                hidden: f.hidden,
                color: f.color,
            },
        }
    }
}

impl From<Column> for ColumnRaw {
    fn from(col: Column) -> Self {
        let key = (col.key != col.name).then_some(col.key);
        ColumnRaw::Full(ColumnFields {
            name: col.name,
            key,
            width: col.width,
            min_width: col.min_width,
            max_width: col.max_width,
            align: col.align,
            v_align: col.v_align,
            padding_left: col.padding_left,
            padding_right: col.padding_right,
            truncate: col.truncate,
            wrap_word: col.wrap_word,
            priority: col.priority,
            hidden: col.hidden,
            color: col.color,
        })
    }
}
