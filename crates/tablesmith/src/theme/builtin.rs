//! Built-in glyph presets.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::theme::Theme;
use crate::error::{Result, TableError};

/// Preset names in registry order.
pub const BUILTIN_THEMES: &[&str] = &[
    "default",
    "honeywell",
    "norc",
    "ramac",
    "void",
    "rounded",
    "double_line",
    "bold_box",
    "dots",
    "double_header",
    "thin_rounded",
];

static REGISTRY: Lazy<HashMap<String, Theme>> = Lazy::new(|| {
    BUILTIN_THEMES
        .iter()
        .filter_map(|name| preset(name).map(|t| (lookup_key(name), t)))
        .collect()
});

fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn preset(name: &str) -> Option<Theme> {
    let theme = match name {
        "default" => Theme::ascii(),
        "honeywell" => Theme::from_glyphs(
            name,
            ["═", "╤", "╔", "╗"],
            ["═", "╧", "╚", "╝"],
            ["║", "║", "│"],
            ["─", "╟", "╢", "┼"],
        ),
        "norc" => Theme::from_glyphs(
            name,
            ["─", "┬", "┌", "┐"],
            ["─", "┴", "└", "┘"],
            ["│", "│", "│"],
            ["─", "├", "┤", "┼"],
        ),
        "ramac" => Theme::from_glyphs(
            name,
            ["━", "┳", "┏", "┓"],
            ["━", "┻", "┗", "┛"],
            ["┃", "┃", "│"],
            ["─", "┣", "┫", "╋"],
        ),
        "void" => Theme::void(),
        "rounded" => Theme::rounded(),
        "double_line" => Theme::from_glyphs(
            name,
            ["═", "╦", "╔", "╗"],
            ["═", "╩", "╚", "╝"],
            ["║", "║", "║"],
            ["═", "╠", "╣", "╬"],
        ),
        "bold_box" => Theme::from_glyphs(
            name,
            ["━", "┳", "┏", "┓"],
            ["━", "┻", "┗", "┛"],
            ["┃", "┃", "┃"],
            ["━", "┣", "┫", "╋"],
        ),
        "dots" => Theme::from_glyphs(
            name,
            ["·", "·", "·", "·"],
            ["·", "·", "·", "·"],
            [":", ":", ":"],
            ["·", ":", ":", ":"],
        ),
        "double_header" => Theme::from_glyphs(
            name,
            ["═", "╤", "╒", "╕"],
            ["-", "+", "+", "+"],
            ["|", "|", "|"],
            ["═", "╞", "╡", "╪"],
        ),
        "thin_rounded" => Theme::rounded().with_name(name),
        _ => return None,
    };
    Some(theme)
}

impl Theme {
    /// Plain ASCII: `+`, `-` and `|`.
    pub fn ascii() -> Self {
        Theme::from_glyphs(
            "default",
            ["-", "+", "+", "+"],
            ["-", "+", "+", "+"],
            ["|", "|", "|"],
            ["-", "+", "+", "+"],
        )
    }

    /// Light box drawing with rounded corners. The table default.
    pub fn rounded() -> Self {
        Theme::from_glyphs(
            "rounded",
            ["─", "┬", "╭", "╮"],
            ["─", "┴", "╰", "╯"],
            ["│", "│", "│"],
            ["─", "├", "┤", "┼"],
        )
    }

    /// No borders; columns separated by two spaces.
    pub fn void() -> Self {
        Theme {
            name: Some("void".to_string()),
            body_join: "  ".to_string(),
            ..Theme::default()
        }
    }

    /// Looks up a preset by name. `double_line`, `double-line` and
    /// `doubleLine` all name the same preset.
    ///
    /// ```rust
    /// use tablesmith::Theme;
    ///
    /// assert_eq!(Theme::builtin("doubleLine").unwrap().top_left, "╔");
    /// assert!(Theme::builtin("neon").is_err());
    /// ```
    pub fn builtin(name: &str) -> Result<Self> {
        REGISTRY
            .get(&lookup_key(name))
            .cloned()
            .ok_or_else(|| TableError::UnknownTheme(name.to_string()))
    }
}
