//! Border themes: the glyphs that frame a table.
//!
//! A [`Theme`] holds fifteen glyph strings covering the top rule, the
//! separator rule between rows, the bottom rule, and the vertical borders
//! on each content line. Empty glyphs are allowed everywhere; a theme with
//! an empty body glyph for a rule simply never draws that rule, which is
//! how the borderless `void` preset works.
//!
//! Presets are available by name through [`Theme::builtin`], and custom
//! themes load from YAML:
//!
//! ```yaml
//! topBody: "-"
//! topJoin: "+"
//! topLeft: "+"
//! topRight: "+"
//! bodyLeft: "|"
//! bodyRight: "|"
//! bodyJoin: "|"
//! ```

mod builtin;
#[allow(clippy::module_inception)]
mod theme;

pub use builtin::BUILTIN_THEMES;
pub use theme::{Border, RuleGlyphs, Theme};
