//! Status bar rendering and path shortening for narrow displays

use std::path::Path;

use crate::app::{StatusLevel, StatusMessage};
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Result of truncating a path for display
#[derive(Debug, Clone)]
pub struct TruncatedPath {
    /// The first component of the path (e.g., "/home")
    pub prefix: String,
    /// Whether components were dropped between prefix and suffix
    pub truncated: bool,
    /// The last components of the path (e.g., "/project/notes.txt")
    pub suffix: String,
}

impl TruncatedPath {
    pub fn to_string_plain(&self) -> String {
        if self.truncated {
            format!("{}/[...]{}", self.prefix, self.suffix)
        } else {
            format!("{}{}", self.prefix, self.suffix)
        }
    }
}

/// Shorten a path to roughly `max_len` columns, keeping the first component
/// and as many trailing components as fit.
///
/// `/home/me/projects/quill/notes/todo.txt` at 28 columns becomes
/// `/home/[...]/notes/todo.txt`.
pub fn truncate_path(path: &Path, max_len: usize) -> TruncatedPath {
    let path_str = path.to_string_lossy();

    if path_str.width() <= max_len {
        return TruncatedPath {
            prefix: String::new(),
            truncated: false,
            suffix: path_str.to_string(),
        };
    }

    let components: Vec<&str> = path_str.split('/').filter(|s| !s.is_empty()).collect();
    let Some(first) = components.first() else {
        return TruncatedPath {
            prefix: "/".to_string(),
            truncated: false,
            suffix: String::new(),
        };
    };

    let prefix = if path_str.starts_with('/') {
        format!("/{first}")
    } else {
        first.to_string()
    };

    let available_for_suffix = max_len.saturating_sub(prefix.width() + "/[...]".len());

    if available_for_suffix < 5 || components.len() <= 1 {
        return TruncatedPath {
            prefix: String::new(),
            truncated: false,
            suffix: truncate_end(&path_str, max_len),
        };
    }

    let mut suffix_parts: Vec<&str> = Vec::new();
    let mut suffix_len = 0;
    for component in components.iter().skip(1).rev() {
        let component_len = component.width() + 1;
        if suffix_len + component_len > available_for_suffix {
            break;
        }
        suffix_parts.push(component);
        suffix_len += component_len;
    }
    suffix_parts.reverse();

    let suffix = if suffix_parts.is_empty() {
        // Not even the file name fits; clip it
        let last = components.last().copied().unwrap_or_default();
        format!("/{}", truncate_end(last, available_for_suffix.saturating_sub(1)))
    } else {
        format!("/{}", suffix_parts.join("/"))
    };

    TruncatedPath {
        prefix,
        truncated: true,
        suffix,
    }
}

/// Clip `s` to `max_len` columns, ending in "..." when clipped
pub fn truncate_end(s: &str, max_len: usize) -> String {
    if s.width() <= max_len {
        return s.to_string();
    }
    let budget = max_len.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}

/// Everything the status bar shows
pub struct StatusBarContent<'a> {
    pub label: Option<&'a str>,
    /// 1-based (line, column)
    pub position: Option<(usize, usize)>,
    pub message: Option<&'a StatusMessage>,
}

/// Render the one-line status bar: active label, cursor position, notification
pub fn render_status_bar(frame: &mut Frame, area: Rect, content: &StatusBarContent, theme: &Theme) {
    let base_style = Style::default().fg(theme.status_bar_fg).bg(theme.status_bar_bg);
    let width = area.width as usize;

    let mut left = String::from(" ");
    if let Some(label) = content.label {
        left.push_str(&truncate_path(Path::new(label), width / 2).to_string_plain());
    }
    if let Some((line, col)) = content.position {
        left.push_str(&format!(" | Ln {line}, Col {col}"));
    }

    let mut spans = vec![Span::styled(left.clone(), base_style)];
    let mut used = left.width();

    if let Some(message) = content.message {
        let style = match message.level {
            StatusLevel::Info => base_style,
            StatusLevel::Error => Style::default()
                .fg(theme.status_error_fg)
                .bg(theme.status_error_bg),
        };
        let text = format!(" {} ", message.text);
        let room = width.saturating_sub(used + 3);
        let text = truncate_end(&text, room);
        spans.push(Span::styled(" | ", base_style));
        used += 3 + text.width();
        spans.push(Span::styled(text, style));
    }

    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), base_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
