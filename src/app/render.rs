use super::menu::{MenuEntry, FILE_MENU};
use super::Editor;
use crate::input::keybindings::Action;
use crate::view::editor_view::{
    self, display_column, ensure_visible, gutter_width, ScrollPosition, HORIZONTAL_MARGIN,
};
use crate::view::menu::{self, MenuRow};
use crate::view::picker;
use crate::view::status_bar::{self, StatusBarContent};
use crate::view::tabs;
use crate::view::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

impl Editor {
    /// Draw the whole screen: menu bar, tab bar, document, status bar, and
    /// any open menu or picker on top.
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = Theme::default();
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // menu bar
                Constraint::Length(1), // tab bar
                Constraint::Min(0),    // document
                Constraint::Length(1), // status bar
            ])
            .split(size);
        let (menu_area, tab_area, doc_area, status_area) =
            (chunks[0], chunks[1], chunks[2], chunks[3]);

        let menu_hint = self.keybindings.accelerator_hint(Action::OpenMenu);
        menu::render_menu_bar(frame, menu_area, &self.menu, menu_hint.as_deref(), &theme);
        tabs::render_tab_bar(frame, tab_area, &self.tabs, &theme);

        self.viewport_height = doc_area.height as usize;
        let line_numbers = self.config.editor.line_numbers;
        let scroll_offset = self.config.editor.scroll_offset;
        let tab_size = self.config.editor.tab_size;

        let mut position = None;
        match self.tabs.active_entry() {
            Some(entry) => {
                let (row, col) = entry.buffer.cursor();
                let column = display_column(&entry.buffer.lines()[row], col, tab_size);
                let gutter = if line_numbers {
                    gutter_width(entry.buffer.line_count())
                } else {
                    0
                };
                let text_width = (doc_area.width as usize).saturating_sub(gutter);

                let previous = self.scroll.get(&entry.id).copied().unwrap_or_default();
                let scroll = ScrollPosition {
                    top: ensure_visible(previous.top, row, self.viewport_height, scroll_offset),
                    left: ensure_visible(previous.left, column, text_width, HORIZONTAL_MARGIN),
                };
                self.scroll.insert(entry.id, scroll);
                editor_view::render_document(
                    frame,
                    doc_area,
                    &entry.buffer,
                    scroll,
                    line_numbers,
                    tab_size,
                    &theme,
                );
                position = Some((row + 1, column + 1));
            }
            None => {
                let hint = self.empty_hint();
                editor_view::render_empty(frame, doc_area, &hint, &theme);
            }
        }

        let label = self.tabs.active_entry().map(|entry| entry.label());
        let content = StatusBarContent {
            label: label.as_deref(),
            position,
            message: self.status.as_ref(),
        };
        status_bar::render_status_bar(frame, status_area, &content, &theme);

        if self.menu.is_open() {
            let rows = self.menu_rows();
            menu::render_menu_dropdown(frame, menu_area, size, &self.menu, &rows, &theme);
        }

        if let Some(pending) = &self.picker {
            picker::render_picker(frame, size, &pending.picker, &theme);
        }
    }

    fn menu_rows(&self) -> Vec<MenuRow> {
        FILE_MENU
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(command) => Some(MenuRow {
                    label: command.label(),
                    hint: self.keybindings.accelerator_hint(command.action()),
                    enabled: self.is_enabled(*command),
                }),
                MenuEntry::Separator => None,
            })
            .collect()
    }

    fn empty_hint(&self) -> String {
        let create = self.keybindings.accelerator_hint(Action::Create);
        let open = self.keybindings.accelerator_hint(Action::Open);
        match (create, open) {
            (Some(create), Some(open)) => {
                format!("No document open. {create} to create, {open} to open.")
            }
            _ => "No document open.".to_string(),
        }
    }
}
