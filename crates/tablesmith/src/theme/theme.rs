//! Border glyph sets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::display_width;

/// A set of border and join glyphs.
///
/// Any glyph may be empty. An empty `*_body` glyph suppresses the whole
/// corresponding border line, and a theme file missing a field simply
/// leaves it empty.
///
/// Layout of the glyphs on a rendered table:
///
/// ```text
/// top_left  top_body  top_join  top_body  top_right
/// body_left  cell     body_join   cell    body_right
/// join_left join_body join_join join_body join_right
/// bottom_left ...                         bottom_right
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(alias = "top_left")]
    pub top_left: String,
    #[serde(alias = "top_body")]
    pub top_body: String,
    #[serde(alias = "top_join")]
    pub top_join: String,
    #[serde(alias = "top_right")]
    pub top_right: String,

    #[serde(alias = "bottom_left")]
    pub bottom_left: String,
    #[serde(alias = "bottom_body")]
    pub bottom_body: String,
    #[serde(alias = "bottom_join")]
    pub bottom_join: String,
    #[serde(alias = "bottom_right")]
    pub bottom_right: String,

    #[serde(alias = "body_left")]
    pub body_left: String,
    #[serde(alias = "body_right")]
    pub body_right: String,
    #[serde(alias = "body_join")]
    pub body_join: String,

    #[serde(alias = "join_left")]
    pub join_left: String,
    #[serde(alias = "join_body")]
    pub join_body: String,
    #[serde(alias = "join_join")]
    pub join_join: String,
    #[serde(alias = "join_right")]
    pub join_right: String,
}

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    Top,
    Join,
    Bottom,
}

/// The three glyphs making up a horizontal rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleGlyphs<'a> {
    pub left: &'a str,
    pub body: &'a str,
    pub join: &'a str,
    pub right: &'a str,
}

impl Theme {
    /// Builds a theme from glyph rows: `[body, join, left, right]` for the
    /// top and bottom rules, `[left, right, join]` for body lines and
    /// `[body, left, right, join]` for the separator rule.
    pub(crate) fn from_glyphs(
        name: &str,
        top: [&str; 4],
        bottom: [&str; 4],
        body: [&str; 3],
        join: [&str; 4],
    ) -> Self {
        Theme {
            name: Some(name.to_string()),
            top_body: top[0].into(),
            top_join: top[1].into(),
            top_left: top[2].into(),
            top_right: top[3].into(),
            bottom_body: bottom[0].into(),
            bottom_join: bottom[1].into(),
            bottom_left: bottom[2].into(),
            bottom_right: bottom[3].into(),
            body_left: body[0].into(),
            body_right: body[1].into(),
            body_join: body[2].into(),
            join_body: join[0].into(),
            join_left: join[1].into(),
            join_right: join[2].into(),
            join_join: join[3].into(),
        }
    }

    /// Parses a theme from YAML. Missing glyphs default to empty.
    ///
    /// ```rust
    /// use tablesmith::Theme;
    ///
    /// let theme = Theme::from_yaml("bodyLeft: '|'\nbodyRight: '|'\nbodyJoin: '|'\n").unwrap();
    /// assert_eq!(theme.body_join, "|");
    /// assert!(theme.top_body.is_empty());
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme from a YAML file. The file stem becomes the name
    /// unless the file sets one.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut theme = Self::from_yaml(&content)?;
        if theme.name.is_none() {
            theme.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string());
        }
        Ok(theme)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Glyphs for a horizontal rule, or `None` when its body glyph is empty.
    pub fn rule(&self, border: Border) -> Option<RuleGlyphs<'_>> {
        let glyphs = match border {
            Border::Top => RuleGlyphs {
                left: &self.top_left,
                body: &self.top_body,
                join: &self.top_join,
                right: &self.top_right,
            },
            Border::Join => RuleGlyphs {
                left: &self.join_left,
                body: &self.join_body,
                join: &self.join_join,
                right: &self.join_right,
            },
            Border::Bottom => RuleGlyphs {
                left: &self.bottom_left,
                body: &self.bottom_body,
                join: &self.bottom_join,
                right: &self.bottom_right,
            },
        };
        (!glyphs.body.is_empty()).then_some(glyphs)
    }

    pub fn has_join_rule(&self) -> bool {
        !self.join_body.is_empty()
    }

    pub(crate) fn body_join_width(&self) -> usize {
        display_width(&self.body_join)
    }

    /// Width of the left and right body borders together.
    pub(crate) fn body_edges_width(&self) -> usize {
        display_width(&self.body_left) + display_width(&self.body_right)
    }
}
