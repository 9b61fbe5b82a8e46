//! Application shell: owns the tabs, the File menu, the path picker and the
//! status notification, and routes every key event to one of them.

pub mod commands;
pub mod file_picker;
pub mod menu;
mod render;

use crate::config::Config;
use crate::input::keybindings::{editing_action, Action, KeybindingResolver};
use crate::model::filesystem::FileSystem;
use crate::model::tabs::{TabId, TabRegistry};
use crate::view::editor_view::ScrollPosition;
use commands::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use file_picker::{FilePicker, PickerOutcome};
use menu::MenuState;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// What an open picker will be used for once it resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickPurpose {
    Open,
    /// Save As for the tab that was active when the command started
    SaveAs(TabId),
}

/// A picker on screen together with its purpose
#[derive(Debug)]
pub(crate) struct PendingPick {
    pub(crate) picker: FilePicker,
    pub(crate) purpose: PickPurpose,
}

/// Severity of a status-bar notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Latest notification shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// The editor application
pub struct Editor {
    tabs: TabRegistry,
    config: Config,
    fs: Arc<dyn FileSystem>,
    /// Directory pickers start in and relative paths resolve against
    working_dir: PathBuf,
    home_dir: Option<PathBuf>,
    picker: Option<PendingPick>,
    menu: MenuState,
    status: Option<StatusMessage>,
    keybindings: KeybindingResolver,
    should_quit: bool,
    /// First visible line and column per tab
    scroll: HashMap<TabId, ScrollPosition>,
    /// Editor area height at the last render, used for paging
    viewport_height: usize,
}

impl Editor {
    pub fn new(config: Config, fs: Arc<dyn FileSystem>, working_dir: PathBuf) -> Self {
        let keybindings = KeybindingResolver::new(&config.keybindings);
        tracing::debug!("Editor created in {}", working_dir.display());
        Self {
            tabs: TabRegistry::new(),
            config,
            fs,
            working_dir,
            home_dir: dirs::home_dir(),
            picker: None,
            menu: MenuState::default(),
            status: None,
            keybindings,
            should_quit: false,
            scroll: HashMap::new(),
            viewport_height: 20,
        }
    }

    /// Override the directory `~` expands to in the picker
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabRegistry {
        &mut self.tabs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn picker(&self) -> Option<&FilePicker> {
        self.picker.as_ref().map(|pending| &pending.picker)
    }

    pub fn is_picking(&self) -> bool {
        self.picker.is_some()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn status_is_error(&self) -> bool {
        matches!(
            self.status,
            Some(StatusMessage {
                level: StatusLevel::Error,
                ..
            })
        )
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Info,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Error,
        });
    }

    /// Route a key: picker first, then the open menu, then global
    /// bindings, then the active buffer.
    pub fn handle_key(&mut self, event: KeyEvent) {
        if event.kind == KeyEventKind::Release {
            return;
        }

        if let Some(pending) = self.picker.as_mut() {
            let outcome = pending.picker.handle_key(&event, self.fs.as_ref());
            if outcome != PickerOutcome::Pending {
                if let Some(pending) = self.picker.take() {
                    self.finish_pick(pending.purpose, outcome);
                }
            }
            return;
        }

        if self.menu.is_open() {
            self.handle_menu_key(&event);
            return;
        }

        if let Some(action) = self.keybindings.resolve(&event) {
            self.handle_action(action);
            return;
        }

        if let Some(action) = editing_action(&event) {
            self.apply_edit(action);
        }
    }

    /// Bracketed paste: text goes to the picker input or the active buffer
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        if let Some(pending) = self.picker.as_mut() {
            for c in text.chars().filter(|c| !c.is_control()) {
                let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
                pending.picker.handle_key(&event, self.fs.as_ref());
            }
            return;
        }
        if self.menu.is_open() {
            return;
        }
        if let Some(entry) = self.tabs.active_entry_mut() {
            entry.buffer.insert_str(&text);
        }
    }

    fn handle_action(&mut self, action: Action) {
        if let Some(command) = Command::from_action(action) {
            self.dispatch(command);
            return;
        }
        match action {
            Action::OpenMenu => self.menu.open(),
            Action::NextTab => self.tabs.activate_next(),
            Action::PrevTab => self.tabs.activate_prev(),
            other => self.apply_edit(other),
        }
    }

    fn handle_menu_key(&mut self, event: &KeyEvent) {
        match event.code {
            KeyCode::Esc | KeyCode::F(10) => self.menu.close(),
            KeyCode::Up => self.menu.prev(),
            KeyCode::Down => self.menu.next(),
            KeyCode::Enter => {
                if let Some(command) = self.menu.highlighted_command() {
                    if self.is_enabled(command) {
                        self.menu.close();
                        self.dispatch(command);
                    }
                }
            }
            _ => {
                // Accelerators still work with the menu down
                let command = self
                    .keybindings
                    .resolve(event)
                    .and_then(Command::from_action);
                if let Some(command) = command {
                    self.menu.close();
                    self.dispatch(command);
                }
            }
        }
    }

    /// Apply an editing action to the active buffer; ignored with no tabs
    fn apply_edit(&mut self, action: Action) {
        let tab_size = self.config.editor.tab_size;
        let insert_spaces = self.config.editor.insert_spaces;
        let page = self.viewport_height.saturating_sub(1).max(1);
        let Some(entry) = self.tabs.active_entry_mut() else {
            return;
        };
        let buffer = &mut entry.buffer;

        match action {
            Action::InsertChar(c) => buffer.insert_char(c),
            Action::InsertNewline => buffer.insert_char('\n'),
            Action::InsertTab if insert_spaces => buffer.insert_str(&" ".repeat(tab_size)),
            Action::InsertTab => buffer.insert_char('\t'),
            Action::DeleteBackward => buffer.backspace(),
            Action::DeleteForward => buffer.delete(),

            Action::MoveLeft => buffer.move_left(),
            Action::MoveRight => buffer.move_right(),
            Action::MoveUp => buffer.move_up(),
            Action::MoveDown => buffer.move_down(),
            Action::MoveWordLeft => buffer.move_word_left(),
            Action::MoveWordRight => buffer.move_word_right(),
            Action::MoveLineStart => buffer.move_home(),
            Action::MoveLineEnd => buffer.move_end(),
            Action::MovePageUp => buffer.move_page_up(page),
            Action::MovePageDown => buffer.move_page_down(page),
            Action::MoveDocumentStart => buffer.move_document_start(),
            Action::MoveDocumentEnd => buffer.move_document_end(),

            Action::SelectLeft => buffer.select_left(),
            Action::SelectRight => buffer.select_right(),
            Action::SelectUp => buffer.select_up(),
            Action::SelectDown => buffer.select_down(),
            Action::SelectWordLeft => buffer.select_word_left(),
            Action::SelectWordRight => buffer.select_word_right(),
            Action::SelectLineStart => buffer.select_home(),
            Action::SelectLineEnd => buffer.select_end(),
            Action::SelectAll => buffer.select_all(),

            Action::Open
            | Action::Create
            | Action::Save
            | Action::SaveAs
            | Action::Quit
            | Action::OpenMenu
            | Action::NextTab
            | Action::PrevTab => {}
        }
    }
}
