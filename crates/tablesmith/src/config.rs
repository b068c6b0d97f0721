//! Declarative table configuration.
//!
//! A [`TableConfig`] carries everything about a table except its rows and
//! loads from YAML or JSON. Field names are camelCase; snake_case aliases
//! are accepted.
//!
//! ```yaml
//! theme: double_line
//! compact: true
//! responsiveMode: hide
//! columns:
//!   - ID
//!   - name: Description
//!     key: desc
//!     maxWidth: 30
//!     priority: 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{Column, Footer, HeaderGroup, ResponsiveMode, Table};
use crate::theme::Theme;

/// A theme given by preset name or spelled out glyph by glyph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeSpec {
    Named(String),
    Inline(Theme),
}

impl ThemeSpec {
    pub fn resolve(&self) -> Result<Theme> {
        match self {
            ThemeSpec::Named(name) => Theme::builtin(name),
            ThemeSpec::Inline(theme) => Ok(theme.clone()),
        }
    }
}

/// Table options and columns as read from a configuration file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub columns: Vec<Column>,
    pub theme: Option<ThemeSpec>,
    pub compact: bool,
    pub zebra: bool,
    #[serde(alias = "responsive_mode", alias = "responsive")]
    pub responsive_mode: ResponsiveMode,
    #[serde(alias = "terminal_width")]
    pub terminal_width: Option<usize>,
    #[serde(alias = "header_groups")]
    pub header_groups: Vec<HeaderGroup>,
    #[serde(alias = "header_color")]
    pub header_color: Option<String>,
    /// Defaults to on.
    pub colors: Option<bool>,
    pub footer: Option<Footer>,
}

impl TableConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a `.json` file as JSON and anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Builds an empty table with these settings. Fails when the theme
    /// names an unknown preset.
    pub fn into_table(self) -> Result<Table> {
        let theme = match &self.theme {
            Some(spec) => spec.resolve()?,
            None => Theme::rounded(),
        };

        let mut table = Table::new()
            .with_columns(self.columns)
            .theme(theme)
            .compact(self.compact)
            .zebra(self.zebra)
            .responsive(self.responsive_mode)
            .header_groups(self.header_groups)
            .colors(self.colors.unwrap_or(true));

        if let Some(width) = self.terminal_width {
            table = table.terminal_width(width);
        }
        if let Some(color) = self.header_color {
            table = table.header_color(color);
        }
        if let Some(footer) = self.footer {
            table = table.footer(footer);
        }
        Ok(table)
    }
}

impl Table {
    /// Builds an empty table from a configuration.
    pub fn from_config(config: TableConfig) -> Result<Table> {
        config.into_table()
    }
}
