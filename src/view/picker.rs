//! Path picker overlay

use crate::app::file_picker::{FilePicker, PickerMode};
use crate::view::status_bar::{truncate_end, truncate_path};
use crate::view::theme::Theme;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Centered popup area for the picker
fn popup_area(screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(4).min(72);
    let height = screen.height.saturating_sub(2).min(18);
    Rect {
        x: screen.x + (screen.width - width) / 2,
        y: screen.y + (screen.height - height) / 2,
        width,
        height,
    }
}

/// Part of `input` that fits in `width` columns with the cursor on screen,
/// plus the cursor's column within it. Leading text scrolls off first.
fn input_window(input: &str, cursor: usize, width: usize) -> (String, usize) {
    let mut start = 0;
    // Leave one column for the cursor past the last character
    while input[start..cursor].width() >= width {
        match input[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in input[start..].chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        visible.push(c);
        used += w;
    }
    (visible, input[start..cursor].width())
}

/// Render the picker as a bordered popup over the rest of the screen
pub fn render_picker(frame: &mut Frame, screen: Rect, picker: &FilePicker, theme: &Theme) {
    let area = popup_area(screen);
    if area.width < 10 || area.height < 5 {
        return;
    }

    let block = Block::default()
        .title(format!(" {} ", picker.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.popup_border_fg))
        .style(Style::default().fg(theme.popup_text_fg).bg(theme.popup_bg));
    let inner = block.inner(area);
    let inner_width = inner.width as usize;

    let text_style = Style::default().fg(theme.popup_text_fg);
    let dir_style = Style::default().fg(theme.popup_dir_fg);

    // Fixed rows: directory, filter, message, input
    let mut footer: Vec<Line> = Vec::new();
    if picker.mode() == PickerMode::Save {
        let filter = picker.active_filter().display();
        let cycle = if picker.filters().len() > 1 {
            "  (Ctrl+F)"
        } else {
            ""
        };
        footer.push(Line::from(Span::styled(
            truncate_end(&format!("Filter: {filter}{cycle}"), inner_width),
            text_style,
        )));
    }
    if let Some(message) = picker.message() {
        footer.push(Line::from(Span::styled(
            truncate_end(message, inner_width),
            Style::default().fg(theme.popup_message_fg),
        )));
    }
    let prompt = match picker.mode() {
        PickerMode::Open => "Open: ",
        PickerMode::Save => "Save as: ",
    };
    let field_width = inner_width.saturating_sub(prompt.len()).max(1);
    let (visible_input, cursor_column) =
        input_window(picker.input(), picker.cursor(), field_width);
    footer.push(Line::from(vec![
        Span::styled(prompt, text_style.add_modifier(Modifier::BOLD)),
        Span::styled(visible_input, text_style),
    ]));

    let dir_line = Line::from(Span::styled(
        truncate_path(picker.dir(), inner_width).to_string_plain(),
        dir_style,
    ));

    let list_height = (inner.height as usize).saturating_sub(1 + footer.len());
    let suggestions = picker.suggestions();

    // Keep the selection on screen
    let selected = picker.selected();
    let first = match selected {
        Some(index) if index >= list_height => index + 1 - list_height,
        _ => 0,
    };

    let mut lines = vec![dir_line];
    for (index, entry) in suggestions.iter().enumerate().skip(first).take(list_height) {
        let mut name = entry.name.clone();
        if entry.is_dir() {
            name.push('/');
        }
        let style = if Some(index) == selected {
            Style::default()
                .fg(theme.popup_text_fg)
                .bg(theme.popup_selection_bg)
        } else if entry.is_dir() {
            dir_style
        } else {
            text_style
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_end(&name, inner_width.saturating_sub(2))),
            style,
        )));
    }
    while lines.len() < 1 + list_height {
        lines.push(Line::default());
    }
    let input_row = (inner.y + (lines.len() + footer.len()) as u16 - 1)
        .min(inner.y + inner.height.saturating_sub(1));
    lines.extend(footer);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    let cursor_x = inner.x as usize + prompt.len() + cursor_column;
    if cursor_x < (inner.x + inner.width) as usize {
        frame.set_cursor_position(Position::new(cursor_x as u16, input_row));
    }
}
