//! # Tablesmith - Span-Aware Terminal Tables
//!
//! `tablesmith` lays out tabular data as bordered, aligned, optionally
//! colored text for terminals, and exports the same tables to CSV, JSON,
//! HTML and Markdown.
//!
//! ## Core Concepts
//!
//! - [`Table`]: columns, shared rows and presentation options
//! - [`Column`]: label, data key, width constraints, alignment, priority
//! - [`Cell`]: any JSON value, with optional column and row spans
//! - [`Theme`]: a set of border glyphs; see [`BUILTIN_THEMES`]
//! - [`render`]: the pure `Table -> String` entry point
//! - [`StreamRenderer`]: header, row chunks and footer drawn separately
//! - [`TableConfig`]: table options loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use tablesmith::{Cell, Column, Table, Theme};
//!
//! let mut table = Table::new()
//!     .with_columns([Column::new("ID").right(), Column::new("Name")])
//!     .theme(Theme::ascii());
//! table.add_row(["1", "Alice"]);
//! table.add_row(vec![Cell::new("no data").col_span(2)]);
//!
//! assert_eq!(
//!     table.render().unwrap(),
//!     "+----+-------+\n\
//!      | ID | Name  |\n\
//!      +----+-------+\n\
//!      |  1 | Alice |\n\
//!      +----+-------+\n\
//!      |    no data |\n\
//!      +----+-------+"
//! );
//! ```
//!
//! ## Rendering Pipeline
//!
//! Rows are placed into a dense grid (spans resolved, conflicts reported),
//! column widths are resolved from headers, content and spans, and lines
//! are drawn from the theme. With a target width and a responsive mode the
//! table first drops columns by priority or transposes into Field/Value
//! pairs. See the [`layout`] module for details.
//!
//! Rendering never emits partial output: row overflow and overlapping spans
//! are [`TableError`]s raised before the first line is composed.
//!
//! ## Keyed Rows
//!
//! Rows may be records matched against column keys. A table without
//! columns takes them from its first keyed row:
//!
//! ```rust
//! use serde_json::json;
//! use tablesmith::Table;
//!
//! let mut table = Table::new();
//! table.add_serialized(&json!({"host": "db-1", "port": 5432})).unwrap();
//! assert_eq!(table.columns()[1].name, "port");
//! ```

mod config;
mod error;
pub mod export;
pub mod layout;
pub mod render;
mod source;
mod table;
mod terminal;
pub mod theme;
mod util;
mod visuals;

// Error type
pub use error::{Result, TableError};

// Model exports
pub use table::{
    Aggregate, Align, Cell, Column, Footer, HeaderGroup, ResponsiveMode, Row, RowData, SortOrder,
    Table, TreeNode, VAlign,
};

// Theme exports
pub use theme::{Border, RuleGlyphs, Theme, BUILTIN_THEMES};

// Render exports
pub use render::{render, StreamRenderer};

// Export exports
pub use export::{ExportFormat, ExportOptions};

// Configuration and collaborators
pub use config::{TableConfig, ThemeSpec};
pub use source::{DataSource, VecSource};
pub use terminal::WidthProbe;

// Utility exports
pub use util::{display_width, pad_center, pad_left, pad_right, strip_ansi, truncate_end, wrap_cell};

// Cell-content helpers
pub use visuals::{heat_color, heatmap, heatmap_auto, sparkline, HeatScale};
