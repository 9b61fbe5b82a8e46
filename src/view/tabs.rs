//! Tab bar rendering

use crate::model::tabs::{DocumentPath, TabRegistry};
use crate::view::status_bar::truncate_path;
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Longest caption a single tab gets before its path is shortened
const MAX_TAB_LABEL: usize = 32;

/// Caption for one tab
pub fn tab_caption(path: &DocumentPath) -> String {
    match path.as_path() {
        Some(p) => truncate_path(p, MAX_TAB_LABEL).to_string_plain(),
        None => path.label(),
    }
}

/// Render the tab bar. When the tabs don't fit, leading tabs are scrolled
/// off so the active one stays visible.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, tabs: &TabRegistry, theme: &Theme) {
    let width = area.width as usize;
    let active = tabs.active_tab();

    let captions: Vec<(String, bool)> = tabs
        .iter()
        .map(|tab| (format!(" {} ", tab_caption(&tab.path)), Some(tab.id) == active))
        .collect();

    // Each tab is followed by a one-column separator
    let active_index = captions.iter().position(|(_, is_active)| *is_active).unwrap_or(0);
    let mut first = 0;
    while first < active_index {
        let span_width: usize = captions[first..=active_index]
            .iter()
            .map(|(caption, _)| caption.width() + 1)
            .sum();
        if span_width <= width {
            break;
        }
        first += 1;
    }

    let mut spans = Vec::new();
    let mut used = 0;
    for (caption, is_active) in &captions[first..] {
        if used >= width {
            break;
        }
        let style = if *is_active {
            Style::default()
                .fg(theme.tab_active_fg)
                .bg(theme.tab_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.tab_inactive_fg)
                .bg(theme.tab_inactive_bg)
        };
        used += caption.width() + 1;
        spans.push(Span::styled(caption.clone(), style));
        spans.push(Span::styled(" ", Style::default().bg(theme.tab_separator_bg)));
    }
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(theme.tab_separator_bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
