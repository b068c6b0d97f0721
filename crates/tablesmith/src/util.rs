//! ANSI-aware text measurement, truncation, padding and cell wrapping.
//!
//! Widths are display columns: escape sequences count as zero and wide
//! characters (CJK, most emoji) count as two.

use std::borrow::Cow;

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use tablesmith::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Removes ANSI escape sequences, borrowing when there are none.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if s.contains('\x1b') || s.contains('\u{9b}') {
        Cow::Owned(console::strip_ansi_codes(s).into_owned())
    } else {
        Cow::Borrowed(s)
    }
}

/// Truncates a string from the end so it fits in `max_width` columns,
/// appending `suffix` when anything was cut.
///
/// When the width cannot even hold the suffix, the suffix itself is cut.
///
/// ```rust
/// use tablesmith::truncate_end;
///
/// assert_eq!(truncate_end("Looooong text here", 5, "..."), "Lo...");
/// assert_eq!(truncate_end("Short", 10, "..."), "Short");
/// assert_eq!(truncate_end("Hello", 2, "..."), "..");
/// ```
pub fn truncate_end(s: &str, max_width: usize, suffix: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let suffix_width = measure_text_width(suffix);
    if max_width <= suffix_width {
        return truncate_to_display_width(suffix, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - suffix_width);
    result.push_str(suffix);
    result
}

/// Pads on the left (right-aligns) to reach the target width.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads on the right (left-aligns) to reach the target width.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Centers within the target width. An odd gap puts the extra space on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Shapes cell text into the physical lines drawn inside a cell.
///
/// Escape sequences are stripped first. Existing newlines always break.
/// With `wrap_word`, whitespace-separated tokens are packed greedily into
/// lines of at most `width` columns; a token wider than the whole line is
/// hard-split into chunks of up to `max(1, width / 2)` columns, and a
/// character too wide for the line ends its token with `suffix`. Without
/// it, each over-long line is truncated with `suffix`.
///
/// ```rust
/// use tablesmith::wrap_cell;
///
/// assert_eq!(wrap_cell("hello world foo", 11, true, "..."), vec!["hello world", "foo"]);
/// assert_eq!(wrap_cell("hello world", 8, false, "..."), vec!["hello..."]);
/// ```
pub fn wrap_cell(text: &str, width: usize, wrap_word: bool, suffix: &str) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let clean = strip_ansi(text);
    let mut lines = Vec::new();

    for raw in clean.split('\n') {
        if measure_text_width(raw) <= width {
            lines.push(raw.to_string());
        } else if wrap_word {
            wrap_words(raw, width, suffix, &mut lines);
        } else {
            lines.push(truncate_end(raw, width, suffix));
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// --- Internal helpers ---

fn wrap_words(line: &str, width: usize, suffix: &str, out: &mut Vec<String>) {
    let step = (width / 2).max(1);
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for part in split_keep_whitespace(line) {
        let part_width = measure_text_width(part);
        if chunk_width + part_width <= width {
            chunk.push_str(part);
            chunk_width += part_width;
            continue;
        }

        flush_chunk(&mut chunk, out);
        chunk_width = 0;

        // Whitespace that overflows never starts the next line.
        if part.trim().is_empty() {
            continue;
        }

        let mut rest = part;
        while measure_text_width(rest) > width {
            let (head, tail) = split_at_width(rest, step, width);
            if head.is_empty() {
                out.push(truncate_end(rest, width, suffix));
                rest = "";
                break;
            }
            out.push(head.to_string());
            rest = tail;
        }
        chunk.push_str(rest);
        chunk_width = measure_text_width(rest);
    }

    flush_chunk(&mut chunk, out);
}

fn flush_chunk(chunk: &mut String, out: &mut Vec<String>) {
    if !chunk.trim().is_empty() {
        out.push(chunk.trim_end().to_string());
    }
    chunk.clear();
}

/// Splits into alternating runs of whitespace and non-whitespace.
fn split_keep_whitespace(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let ws = c.is_whitespace();
        match current {
            Some(prev) if prev != ws => {
                parts.push(&s[start..i]);
                start = i;
            }
            _ => {}
        }
        current = Some(ws);
    }
    if start < s.len() {
        parts.push(&s[start..]);
    }
    parts
}

/// Splits after the longest prefix of at most `step` columns. A leading
/// character wider than `step` is taken alone when it fits in `width`;
/// when it does not, the head is empty.
fn split_at_width(s: &str, step: usize, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > step {
            if used == 0 && w <= width {
                return s.split_at(i + c.len_utf8());
            }
            return s.split_at(i);
        }
        used += w;
    }
    (s, "")
}

/// Keeps characters from the start while they fit in `max_width` columns.
/// Escape sequences are carried through without counting.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }
        if in_escape {
            result.push(c);
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
