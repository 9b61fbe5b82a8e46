//! File commands: Open, Create, Save, Save As, Quit
//!
//! Open and Save As go through the path picker. The picker is captured
//! together with what it was opened for (`PickPurpose`), so a Save As always
//! writes the tab that was active when the command started.

use super::file_picker::{FileFilter, FilePicker, PickerOutcome};
use super::{Editor, PendingPick, PickPurpose};
use crate::input::keybindings::Action;
use crate::model::filesystem::{self, FileIoError};
use crate::model::tabs::{DocumentPath, TabId};
use std::path::{Path, PathBuf};

/// A file-menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Create,
    Save,
    SaveAs,
    Quit,
}

impl Command {
    pub fn from_action(action: Action) -> Option<Self> {
        Some(match action {
            Action::Open => Self::Open,
            Action::Create => Self::Create,
            Action::Save => Self::Save,
            Action::SaveAs => Self::SaveAs,
            Action::Quit => Self::Quit,
            _ => return None,
        })
    }

    pub fn action(self) -> Action {
        match self {
            Self::Open => Action::Open,
            Self::Create => Action::Create,
            Self::Save => Action::Save,
            Self::SaveAs => Action::SaveAs,
            Self::Quit => Action::Quit,
        }
    }

    /// Menu caption
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Create => "Create",
            Self::Save => "Save",
            Self::SaveAs => "Save As",
            Self::Quit => "Quit",
        }
    }
}

impl Editor {
    /// Whether a command can run right now (Save / Save As need a document)
    pub fn is_enabled(&self, command: Command) -> bool {
        match command {
            Command::Save | Command::SaveAs => !self.tabs.is_empty(),
            Command::Open | Command::Create | Command::Quit => true,
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        tracing::debug!("Dispatching {:?}", command);
        match command {
            Command::Open => self.start_open(),
            Command::Create => {
                self.create_document();
            }
            Command::Save => self.save_active(),
            Command::SaveAs => self.start_save_as(),
            Command::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn start_open(&mut self) {
        let picker = FilePicker::open(self.working_dir.clone())
            .with_home_dir(self.home_dir.clone())
            .with_hidden(self.config.file_dialog.show_hidden);
        self.begin_pick(picker, PickPurpose::Open);
    }

    /// Add an empty untitled tab and make it active
    pub fn create_document(&mut self) -> TabId {
        let id = self.tabs.add_tab(DocumentPath::Untitled, "");
        tracing::info!("Created untitled document {}", id);
        id
    }

    fn save_active(&mut self) {
        let Some(id) = self.tabs.active_tab() else {
            self.set_status("No document to save");
            return;
        };
        match self.tabs.path(id).and_then(DocumentPath::as_path) {
            Some(path) => {
                let path = path.to_path_buf();
                // Saving to the tab's own path; the label is already right
                self.write_tab(id, &path);
            }
            None => {
                tracing::debug!("{} is untitled, saving as", id);
                self.start_save_as();
            }
        }
    }

    fn start_save_as(&mut self) {
        let Some(id) = self.tabs.active_tab() else {
            self.set_status("No document to save");
            return;
        };

        // Start next to the current file, with its name filled in
        let (start_dir, seed) = match self.tabs.path(id).and_then(DocumentPath::as_path) {
            Some(current) => (
                current
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.working_dir.clone()),
                current
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            None => (self.working_dir.clone(), String::new()),
        };

        let dialog = &self.config.file_dialog;
        let filters = dialog.filters.iter().map(FileFilter::from).collect();
        let picker = FilePicker::save(start_dir, &dialog.default_extension, filters)
            .with_home_dir(self.home_dir.clone())
            .with_hidden(dialog.show_hidden)
            .with_input(&seed);

        self.begin_pick(picker, PickPurpose::SaveAs(id));
    }

    fn begin_pick(&mut self, mut picker: FilePicker, purpose: PickPurpose) {
        picker.refresh(self.fs.as_ref());
        tracing::debug!("{} picker opened for {:?}", picker.title(), purpose);
        self.menu.close();
        self.picker = Some(PendingPick { picker, purpose });
    }

    /// Apply the picker's final answer
    pub(super) fn finish_pick(&mut self, purpose: PickPurpose, outcome: PickerOutcome) {
        let path = match outcome {
            PickerOutcome::Pending => return,
            PickerOutcome::Cancelled => {
                tracing::debug!("Picker for {:?} canceled", purpose);
                self.set_status("Canceled");
                return;
            }
            PickerOutcome::Picked(path) => path,
        };

        match purpose {
            PickPurpose::Open => {
                let _ = self.open_file(&path);
            }
            PickPurpose::SaveAs(id) => {
                if self.write_tab(id, &path) {
                    self.tabs.set_path(id, DocumentPath::Path(path));
                }
            }
        }
    }

    /// Read `path` into a new active tab.
    ///
    /// On failure no tab is added and the error is shown in the status bar.
    pub fn open_file(&mut self, path: &Path) -> Result<TabId, FileIoError> {
        let path = self.absolute(path);
        match filesystem::read_all(self.fs.as_ref(), &path) {
            Ok(content) => {
                let id = self.tabs.add_tab(DocumentPath::Path(path.clone()), &content);
                tracing::info!("Opened {} as {}", path.display(), id);
                self.set_status(format!("Opened {}", path.display()));
                Ok(id)
            }
            Err(e) => {
                tracing::warn!("Open failed: {}", e);
                self.set_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Write a tab's content to `path`, reporting the result in the status
    /// bar. Returns whether the file was written.
    fn write_tab(&mut self, id: TabId, path: &Path) -> bool {
        let Some(content) = self.tabs.content(id) else {
            tracing::warn!("Save target {} no longer exists", id);
            return false;
        };
        match filesystem::write_all(self.fs.as_ref(), path, &content) {
            Ok(()) => {
                tracing::info!("Saved {} to {} ({} bytes)", id, path.display(), content.len());
                self.set_status(format!("Saved {}", path.display()));
                true
            }
            Err(e) => {
                tracing::warn!("Save failed for {}: {}", id, e);
                self.set_error(e.to_string());
                false
            }
        }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}
