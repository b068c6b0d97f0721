//! Physical line composition: rules, cell text shaping and row lines.

use console::Style;

use crate::layout::GridCell;
use crate::table::{Align, Column, Footer, HeaderGroup, VAlign};
use crate::theme::{Border, Theme};
use crate::util::{display_width, pad_center, pad_left, pad_right, wrap_cell};

/// A piece of text placed on a row, starting at column `x`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Slot {
    pub x: usize,
    pub span: usize,
    pub text: String,
    pub align: Option<Align>,
    pub v_align: Option<VAlign>,
    pub color: Option<String>,
}

impl Slot {
    fn plain(x: usize, text: String) -> Self {
        Slot {
            x,
            span: 1,
            text,
            ..Default::default()
        }
    }
}

/// Slots for the origin cells of one grid row.
pub(crate) fn grid_slots(row: &[GridCell<'_>]) -> Vec<Slot> {
    row.iter()
        .filter(|g| g.is_origin())
        .filter_map(|g| {
            g.cell.map(|cell| Slot {
                x: g.x,
                span: g.col_span,
                text: cell.text(),
                align: cell.align,
                v_align: cell.v_align,
                color: cell.color.clone(),
            })
        })
        .collect()
}

pub(crate) fn header_slots(columns: &[Column]) -> Vec<Slot> {
    columns
        .iter()
        .enumerate()
        .map(|(x, c)| Slot::plain(x, c.name.clone()))
        .collect()
}

/// Group titles laid left to right, centered, clipped to the column count.
pub(crate) fn group_slots(groups: &[HeaderGroup], column_count: usize) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(groups.len());
    let mut cursor = 0;
    for group in groups {
        if cursor >= column_count {
            break;
        }
        let span = group.col_span.max(1).min(column_count - cursor);
        slots.push(Slot {
            x: cursor,
            span,
            text: group.title.clone(),
            align: Some(Align::Center),
            ..Default::default()
        });
        cursor += span;
    }
    slots
}

pub(crate) fn footer_slots(footer: &Footer, columns: &[Column]) -> Vec<Slot> {
    columns
        .iter()
        .enumerate()
        .map(|(x, c)| Slot::plain(x, footer.text_for(c, x)))
        .collect()
}

/// Draws rules and rows for one set of resolved widths.
pub(crate) struct Painter<'a> {
    theme: &'a Theme,
    columns: &'a [Column],
    widths: &'a [usize],
    colors: bool,
}

struct Shaped {
    span: usize,
    lines: Vec<String>,
    content_width: usize,
    pad_left: usize,
    pad_right: usize,
    align: Align,
    v_align: VAlign,
    color: Option<String>,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme, columns: &'a [Column], widths: &'a [usize], colors: bool) -> Self {
        Painter {
            theme,
            columns,
            widths,
            colors,
        }
    }

    /// A horizontal rule, or `None` when the theme leaves it out.
    ///
    /// Each column contributes its width plus padding in body glyphs, at
    /// least one.
    pub fn rule(&self, border: Border) -> Option<String> {
        let glyphs = self.theme.rule(border)?;
        let segments: Vec<String> = self
            .widths
            .iter()
            .zip(self.columns)
            .map(|(w, c)| glyphs.body.repeat((w + c.padding_total()).max(1)))
            .collect();
        Some(format!(
            "{}{}{}",
            glyphs.left,
            segments.join(glyphs.join),
            glyphs.right
        ))
    }

    /// Lines for one logical row. Slots must be ordered by `x`; positions
    /// no slot covers are drawn blank.
    ///
    /// `override_color` beats cell and column colors. `dim` wraps every
    /// finished line in the dim style.
    pub fn row(&self, slots: &[Slot], override_color: Option<&str>, dim: bool) -> Vec<String> {
        let n = self.widths.len().min(self.columns.len());
        let mut shaped: Vec<Option<Shaped>> = (0..n).map(|_| None).collect();
        let mut covered_until = 0;

        for slot in slots {
            if slot.x >= n || slot.x < covered_until {
                continue;
            }
            let span = slot.span.max(1).min(n - slot.x);
            let column = &self.columns[slot.x];
            let (content_width, pad_left, pad_right) = self.span_metrics(slot.x, span);
            let color = override_color
                .map(str::to_string)
                .or_else(|| slot.color.clone())
                .or_else(|| column.color.clone());

            shaped[slot.x] = Some(Shaped {
                span,
                lines: wrap_cell(&slot.text, content_width, column.wrap_word, &column.truncate),
                content_width,
                pad_left,
                pad_right,
                align: slot.align.unwrap_or(column.align),
                v_align: slot.v_align.unwrap_or(column.v_align),
                color,
            });
            covered_until = slot.x + span;
        }

        let height = shaped
            .iter()
            .flatten()
            .map(|s| s.lines.len())
            .max()
            .unwrap_or(1)
            .max(1);

        (0..height)
            .map(|line_index| {
                let line = self.compose_line(&shaped, line_index, height);
                if dim && self.colors {
                    Style::new().dim().force_styling(true).apply_to(line).to_string()
                } else {
                    line
                }
            })
            .collect()
    }

    fn compose_line(&self, shaped: &[Option<Shaped>], line_index: usize, height: usize) -> String {
        let n = shaped.len();
        let mut line = self.theme.body_left.clone();
        let mut x = 0;

        while x < n {
            match &shaped[x] {
                Some(cell) => {
                    let offset = vertical_offset(cell.v_align, height, cell.lines.len());
                    let text = line_index
                        .checked_sub(offset)
                        .and_then(|i| cell.lines.get(i))
                        .map(String::as_str)
                        .unwrap_or("");
                    let aligned = align_text(text, cell.content_width, cell.align);
                    let painted = match &cell.color {
                        Some(tag) if self.colors => paint(&aligned, tag),
                        _ => aligned,
                    };
                    line.push_str(&" ".repeat(cell.pad_left));
                    line.push_str(&painted);
                    line.push_str(&" ".repeat(cell.pad_right));
                    x += cell.span;
                }
                None => {
                    let column = &self.columns[x];
                    line.push_str(&" ".repeat(column.padding_total() + self.widths[x]));
                    x += 1;
                }
            }
            if x < n {
                line.push_str(&self.theme.body_join);
            }
        }

        line.push_str(&self.theme.body_right);
        line
    }

    /// Content width and outer paddings of a run of columns. Inner
    /// paddings and join glyphs become content room.
    fn span_metrics(&self, start: usize, span: usize) -> (usize, usize, usize) {
        let last = start + span - 1;
        let mut content = self.theme.body_join_width() * (span - 1);
        for i in start..=last {
            content += self.widths[i];
            if i != start {
                content += self.columns[i].padding_left;
            }
            if i != last {
                content += self.columns[i].padding_right;
            }
        }
        (
            content,
            self.columns[start].padding_left,
            self.columns[last].padding_right,
        )
    }
}

fn vertical_offset(v_align: VAlign, row_height: usize, cell_height: usize) -> usize {
    let diff = row_height.saturating_sub(cell_height);
    match v_align {
        VAlign::Top => 0,
        VAlign::Center => diff / 2,
        VAlign::Bottom => diff,
    }
}

/// Pads `text` to `width`. Center puts the odd space on the right.
fn align_text(text: &str, width: usize, align: Align) -> String {
    if display_width(text) >= width {
        return text.to_string();
    }
    match align {
        Align::Left => pad_right(text, width),
        Align::Center => pad_center(text, width),
        Align::Right => pad_left(text, width),
    }
}

fn paint(text: &str, tag: &str) -> String {
    Style::from_dotted_str(tag)
        .force_styling(true)
        .apply_to(text)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painter_fixture() -> (Theme, Vec<Column>, Vec<usize>) {
        (
            Theme::rounded(),
            vec![Column::new("a"), Column::new("b"), Column::new("c")],
            vec![3, 2, 4],
        )
    }

    #[test]
    fn rules_follow_widths_and_padding() {
        let (theme, cols, widths) = painter_fixture();
        let p = Painter::new(&theme, &cols, &widths, false);
        assert_eq!(p.rule(Border::Top).unwrap(), "╭─────┬────┬──────╮");
        assert_eq!(p.rule(Border::Join).unwrap(), "├─────┼────┼──────┤");
        assert_eq!(p.rule(Border::Bottom).unwrap(), "╰─────┴────┴──────╯");
    }

    #[test]
    fn void_theme_draws_no_rules() {
        let (_, cols, widths) = painter_fixture();
        let theme = Theme::void();
        let p = Painter::new(&theme, &cols, &widths, false);
        assert!(p.rule(Border::Top).is_none());
    }

    #[test]
    fn row_pads_and_joins() {
        let (theme, cols, widths) = painter_fixture();
        let p = Painter::new(&theme, &cols, &widths, false);
        let lines = p.row(&header_slots(&cols), None, false);
        assert_eq!(lines, vec!["│ a   │ b  │ c    │"]);
    }

    #[test]
    fn missing_positions_are_blank() {
        let (theme, cols, widths) = painter_fixture();
        let p = Painter::new(&theme, &cols, &widths, false);
        let lines = p.row(&[Slot::plain(1, "x".into())], None, false);
        assert_eq!(lines, vec!["│     │ x  │      │"]);
    }

    #[test]
    fn span_has_no_inner_join() {
        let (theme, cols, widths) = painter_fixture();
        let p = Painter::new(&theme, &cols, &widths, false);
        let slot = Slot {
            x: 0,
            span: 3,
            text: "Full Span".into(),
            ..Default::default()
        };
        let lines = p.row(&[slot], None, false);
        // 3 + 2 + 4 content, 4 inner padding, 2 joins = 15 columns of room.
        assert_eq!(lines, vec![format!("│ {:<15} │", "Full Span")]);
    }

    #[test]
    fn alignment_and_vertical_offset() {
        let theme = Theme::ascii();
        let cols = vec![
            Column::new("l").wrap_word(true),
            Column::new("r").right().v_align(VAlign::Bottom),
            Column::new("c").center().v_align(VAlign::Center),
        ];
        let widths = vec![5, 3, 4];
        let p = Painter::new(&theme, &cols, &widths, false);
        let slots = vec![
            Slot::plain(0, "aa bb cc".into()),
            Slot::plain(1, "1".into()),
            Slot::plain(2, "x".into()),
        ];
        let lines = p.row(&slots, None, false);
        assert_eq!(
            lines,
            vec![
                "| aa bb |     |  x   |",
                "| cc    |   1 |      |",
            ]
        );
    }

    #[test]
    fn colors_apply_by_precedence() {
        let theme = Theme::ascii();
        let cols = vec![Column::new("a").color("red")];
        let widths = vec![1];
        let p = Painter::new(&theme, &cols, &widths, true);

        let column_colored = p.row(&[Slot::plain(0, "x".into())], None, false);
        assert_eq!(column_colored[0], format!("| {} |", paint("x", "red")));

        let cell = Slot {
            color: Some("green".into()),
            ..Slot::plain(0, "x".into())
        };
        assert_eq!(p.row(&[cell.clone()], None, false)[0], format!("| {} |", paint("x", "green")));
        assert_eq!(p.row(&[cell], Some("blue"), false)[0], format!("| {} |", paint("x", "blue")));
    }

    #[test]
    fn colors_off_means_plain_text() {
        let theme = Theme::ascii();
        let cols = vec![Column::new("a").color("red")];
        let widths = vec![1];
        let p = Painter::new(&theme, &cols, &widths, false);
        assert_eq!(p.row(&[Slot::plain(0, "x".into())], Some("blue"), true), vec!["| x |"]);
    }

    #[test]
    fn dim_wraps_whole_line() {
        let theme = Theme::ascii();
        let cols = vec![Column::new("a")];
        let widths = vec![1];
        let p = Painter::new(&theme, &cols, &widths, true);
        let line = &p.row(&[Slot::plain(0, "x".into())], None, true)[0];
        assert!(line.starts_with("\x1b[2m| x |"));
        assert_eq!(console::strip_ansi_codes(line), "| x |");
    }

    #[test]
    fn group_slots_clip_to_columns() {
        let groups = vec![HeaderGroup::new("A", 2), HeaderGroup::new("B", 5)];
        let slots = group_slots(&groups, 3);
        assert_eq!(slots.len(), 2);
        assert_eq!((slots[1].x, slots[1].span), (2, 1));
    }
}
