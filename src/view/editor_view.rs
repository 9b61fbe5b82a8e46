//! Document area rendering: line numbers, text, selection and cursor
//!
//! Long lines are not wrapped. The view scrolls horizontally instead, so the
//! cursor column is always on screen.

use crate::model::document::DocumentBuffer;
use crate::view::theme::Theme;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Columns kept visible left and right of the cursor when scrolling sideways
pub const HORIZONTAL_MARGIN: usize = 4;

/// First visible line and first visible screen column of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    pub top: usize,
    pub left: usize,
}

/// Columns a character occupies when it starts at screen column `x`.
/// Tabs advance to the next tab stop; other control characters (such as
/// the `\r` of CRLF files) are hidden.
fn char_width(c: char, x: usize, tab_size: usize) -> usize {
    match c {
        '\t' => {
            let tab_size = tab_size.max(1);
            tab_size - x % tab_size
        }
        c if c.is_control() => 0,
        c => c.width().unwrap_or(0),
    }
}

/// Screen column of byte offset `col` within `line`
pub fn display_column(line: &str, col: usize, tab_size: usize) -> usize {
    line[..col.min(line.len())]
        .chars()
        .fold(0, |x, c| x + char_width(c, x, tab_size))
}

/// Width of the line-number gutter, including its trailing space
pub fn gutter_width(line_count: usize) -> usize {
    line_count.to_string().len().max(3) + 1
}

/// Adjust `scroll_top` so the cursor row stays visible with `offset` rows of
/// context where possible. Works the same for columns.
pub fn ensure_visible(scroll_top: usize, cursor_row: usize, height: usize, offset: usize) -> usize {
    if height == 0 {
        return scroll_top;
    }
    let offset = offset.min(height.saturating_sub(1) / 2);
    if cursor_row < scroll_top + offset {
        cursor_row.saturating_sub(offset)
    } else if cursor_row + offset >= scroll_top + height {
        cursor_row + offset + 1 - height
    } else {
        scroll_top
    }
}

/// Builds the spans for one line, clipped to a window of screen columns
struct LineClip<'a> {
    left: usize,
    right: usize,
    spans: Vec<Span<'a>>,
    run: String,
    run_style: Style,
}

impl<'a> LineClip<'a> {
    fn new(left: usize, width: usize, style: Style) -> Self {
        Self {
            left,
            right: left + width,
            spans: Vec::new(),
            run: String::new(),
            run_style: style,
        }
    }

    /// Emit a glyph covering columns `x..x + width`. Glyphs cut by the
    /// window edge are drawn as blanks so later columns stay aligned.
    fn push(&mut self, x: usize, width: usize, glyph: char, style: Style) {
        let start = x.max(self.left);
        let end = (x + width).min(self.right);
        if start >= end {
            return;
        }
        if style != self.run_style && !self.run.is_empty() {
            self.spans
                .push(Span::styled(std::mem::take(&mut self.run), self.run_style));
        }
        self.run_style = style;
        if start == x && end == x + width && glyph != '\t' {
            self.run.push(glyph);
        } else {
            self.run.extend(std::iter::repeat(' ').take(end - start));
        }
    }

    fn finish(mut self) -> Vec<Span<'a>> {
        if !self.run.is_empty() {
            self.spans.push(Span::styled(self.run, self.run_style));
        }
        self.spans
    }
}

/// Render the active document and place the terminal cursor
pub fn render_document(
    frame: &mut Frame,
    area: Rect,
    buffer: &DocumentBuffer,
    scroll: ScrollPosition,
    line_numbers: bool,
    tab_size: usize,
    theme: &Theme,
) {
    let text_style = Style::default().fg(theme.editor_fg).bg(theme.editor_bg);
    let gutter_style = Style::default()
        .fg(theme.line_number_fg)
        .bg(theme.line_number_bg);
    let selection_style = text_style.bg(theme.selection_bg);

    let gutter = if line_numbers {
        gutter_width(buffer.line_count())
    } else {
        0
    };
    let text_width = (area.width as usize).saturating_sub(gutter);
    let selection = buffer.selection_range();

    let mut lines = Vec::with_capacity(area.height as usize);
    for (row, line) in buffer
        .lines()
        .iter()
        .enumerate()
        .skip(scroll.top)
        .take(area.height as usize)
    {
        let mut spans = Vec::new();
        if line_numbers {
            spans.push(Span::styled(
                format!("{:>width$} ", row + 1, width = gutter - 1),
                gutter_style,
            ));
        }

        // Selected bytes on this row, and whether the line break is selected
        let (selected, break_selected): (Range<usize>, bool) = match selection {
            Some(((start_row, start_col), (end_row, end_col)))
                if (start_row..=end_row).contains(&row) =>
            {
                let from = if row == start_row { start_col } else { 0 };
                let to = if row == end_row { end_col } else { line.len() };
                (from..to, row != end_row)
            }
            _ => (0..0, false),
        };

        let mut clip = LineClip::new(scroll.left, text_width, text_style);
        let mut x = 0;
        for (byte, c) in line.char_indices() {
            let width = char_width(c, x, tab_size);
            if width > 0 {
                let style = if selected.contains(&byte) {
                    selection_style
                } else {
                    text_style
                };
                clip.push(x, width, c, style);
            }
            x += width;
        }
        if break_selected {
            clip.push(x, 1, ' ', selection_style);
        }
        spans.extend(clip.finish());
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(text_style), area);

    let (cursor_row, cursor_col) = buffer.cursor();
    if cursor_row >= scroll.top && cursor_row < scroll.top + area.height as usize {
        let column = display_column(&buffer.lines()[cursor_row], cursor_col, tab_size);
        if column >= scroll.left && column - scroll.left < text_width {
            let x = area.x as usize + gutter + (column - scroll.left);
            let y = area.y as usize + (cursor_row - scroll.top);
            frame.set_cursor_position(Position::new(x as u16, y as u16));
        }
    }
}

/// Placeholder shown when no document is open
pub fn render_empty(frame: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
    let style = Style::default().fg(theme.hint_fg).bg(theme.editor_bg);
    let mut lines = vec![Line::default(); (area.height / 2) as usize];
    lines.push(Line::from(Span::styled(hint.to_string(), style)).centered());
    frame.render_widget(Paragraph::new(lines).style(style), area);
}
