//! Menu bar and File dropdown rendering

use crate::app::menu::{MenuEntry, MenuState, FILE_MENU};
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// One File menu row as displayed
#[derive(Debug, Clone)]
pub struct MenuRow {
    pub label: &'static str,
    pub hint: Option<String>,
    pub enabled: bool,
}

/// Render the one-line menu bar with its single "File" menu
pub fn render_menu_bar(
    frame: &mut Frame,
    area: Rect,
    menu: &MenuState,
    menu_hint: Option<&str>,
    theme: &Theme,
) {
    let base = Style::default().fg(theme.menu_fg).bg(theme.menu_bg);
    let title_style = if menu.is_open() {
        Style::default()
            .fg(theme.menu_active_fg)
            .bg(theme.menu_active_bg)
    } else {
        base
    };

    let width = area.width as usize;
    let title = " File ";
    let right = menu_hint.map(|hint| format!("{hint} menu ")).unwrap_or_default();
    let gap = width.saturating_sub(title.len() + right.width());

    let line = Line::from(vec![
        Span::styled(title, title_style),
        Span::styled(" ".repeat(gap), base),
        Span::styled(right, base),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the dropped-down File menu below the menu bar.
///
/// `rows` has one entry per `MenuEntry::Item` in `FILE_MENU`, in order.
pub fn render_menu_dropdown(
    frame: &mut Frame,
    menu_bar: Rect,
    screen: Rect,
    menu: &MenuState,
    rows: &[MenuRow],
    theme: &Theme,
) {
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let hint_width = rows
        .iter()
        .filter_map(|r| r.hint.as_ref().map(|h| h.width()))
        .max()
        .unwrap_or(0);
    let inner_width = label_width + hint_width + 4;

    let area = Rect {
        x: menu_bar.x,
        y: menu_bar.y + 1,
        width: (inner_width as u16 + 2).min(screen.width),
        height: (FILE_MENU.len() as u16 + 2).min(screen.height.saturating_sub(1)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.menu_border_fg))
        .style(
            Style::default()
                .fg(theme.menu_dropdown_fg)
                .bg(theme.menu_dropdown_bg),
        );

    let mut rows_iter = rows.iter();
    let mut lines = Vec::with_capacity(FILE_MENU.len());
    for (index, entry) in FILE_MENU.iter().enumerate() {
        match entry {
            MenuEntry::Separator => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(inner_width),
                    Style::default().fg(theme.menu_separator_fg),
                )));
            }
            MenuEntry::Item(_) => {
                let Some(row) = rows_iter.next() else {
                    break;
                };
                let hint = row.hint.as_deref().unwrap_or("");
                let text = format!(
                    " {:<label_width$}  {:>hint_width$} ",
                    row.label,
                    hint,
                    label_width = label_width,
                    hint_width = hint_width
                );
                let style = if index == menu.highlighted() && row.enabled {
                    Style::default()
                        .fg(theme.menu_highlight_fg)
                        .bg(theme.menu_highlight_bg)
                } else if index == menu.highlighted() {
                    Style::default()
                        .fg(theme.menu_disabled_fg)
                        .bg(theme.menu_highlight_bg)
                } else if row.enabled {
                    Style::default().fg(theme.menu_dropdown_fg)
                } else {
                    Style::default().fg(theme.menu_disabled_fg)
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
