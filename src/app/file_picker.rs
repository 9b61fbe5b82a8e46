//! In-terminal path picker used by Open and Save As.
//!
//! The picker is a small state machine. Each key either edits it and leaves
//! it `Pending`, or resolves it to `Picked(path)` / `Cancelled`. It never
//! touches document content; it only lists directories.

use crate::config::FileFilterConfig;
use crate::model::filesystem::{DirEntry, FileSystem};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};

/// Which dialog the picker is standing in for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    /// Choose an existing file to read
    Open,
    /// Choose a destination to write, existing or not
    Save,
}

/// Result of feeding a key to the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Pending,
    Picked(PathBuf),
    Cancelled,
}

/// A named glob such as `Text files (*.txt)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn all_files() -> Self {
        Self::new("All files", "*.*")
    }

    /// `*` and `*.*` match everything; `*.ext` matches by suffix, ignoring case
    pub fn matches(&self, file_name: &str) -> bool {
        match self.pattern.as_str() {
            "*" | "*.*" | "" => true,
            pattern => match pattern.strip_prefix('*') {
                Some(suffix) => file_name
                    .to_lowercase()
                    .ends_with(&suffix.to_lowercase()),
                None => file_name.eq_ignore_ascii_case(pattern),
            },
        }
    }

    /// Caption for the overlay, e.g. "Text files (*.txt)"
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.pattern)
    }
}

impl From<&FileFilterConfig> for FileFilter {
    fn from(config: &FileFilterConfig) -> Self {
        Self::new(config.name.clone(), config.pattern.clone())
    }
}

/// Interactive path chooser
#[derive(Debug, Clone)]
pub struct FilePicker {
    mode: PickerMode,
    /// Directory relative input is resolved against
    dir: PathBuf,
    input: String,
    /// Byte offset into `input`
    cursor: usize,
    suggestions: Vec<DirEntry>,
    /// Suggestion highlighted with Up/Down; `None` until the user navigates
    selected: Option<usize>,
    filters: Vec<FileFilter>,
    active_filter: usize,
    default_extension: String,
    home_dir: Option<PathBuf>,
    show_hidden: bool,
    /// Inline problem shown in the overlay (e.g. "File not found")
    message: Option<String>,
}

impl FilePicker {
    /// Picker for an existing file (the open dialog)
    pub fn open(start_dir: PathBuf) -> Self {
        Self::new(PickerMode::Open, start_dir, String::new(), vec![FileFilter::all_files()])
    }

    /// Picker for a save destination (the save dialog)
    pub fn save(start_dir: PathBuf, default_extension: &str, filters: Vec<FileFilter>) -> Self {
        let filters = if filters.is_empty() {
            vec![FileFilter::all_files()]
        } else {
            filters
        };
        Self::new(
            PickerMode::Save,
            start_dir,
            default_extension.to_string(),
            filters,
        )
    }

    fn new(
        mode: PickerMode,
        dir: PathBuf,
        default_extension: String,
        filters: Vec<FileFilter>,
    ) -> Self {
        Self {
            mode,
            dir,
            input: String::new(),
            cursor: 0,
            suggestions: Vec::new(),
            selected: None,
            filters,
            active_filter: 0,
            default_extension,
            home_dir: None,
            show_hidden: false,
            message: None,
        }
    }

    /// Directory that `~` expands to
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    pub fn with_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Seed the input, e.g. with the current file name for Save As
    pub fn with_input(mut self, input: &str) -> Self {
        self.input = input.to_string();
        self.cursor = self.input.len();
        self
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            PickerMode::Open => "Open",
            PickerMode::Save => "Save As",
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn suggestions(&self) -> &[DirEntry] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn active_filter(&self) -> &FileFilter {
        &self.filters[self.active_filter]
    }

    pub fn filters(&self) -> &[FileFilter] {
        &self.filters
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Feed one key. The caller keeps the picker open while `Pending`.
    pub fn handle_key(&mut self, event: &KeyEvent, fs: &dyn FileSystem) -> PickerOutcome {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = event.modifiers.contains(KeyModifiers::ALT);
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);

        match event.code {
            KeyCode::Enter => return self.confirm(fs),
            KeyCode::Esc => return PickerOutcome::Cancelled,

            KeyCode::Char('f') if ctrl => {
                if self.mode == PickerMode::Save {
                    self.active_filter = (self.active_filter + 1) % self.filters.len();
                    self.refresh(fs);
                }
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                self.cursor = 0;
                self.refresh(fs);
            }
            KeyCode::Char(_) if ctrl || alt => {}
            KeyCode::Char(c) => {
                let c = if shift { c.to_ascii_uppercase() } else { c };
                self.input.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                self.refresh(fs);
            }

            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_boundary(&self.input, self.cursor);
                    self.input.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                } else if self.input.is_empty() {
                    // Empty input: go up a level
                    if let Some(parent) = self.dir.parent() {
                        self.dir = parent.to_path_buf();
                    }
                }
                self.refresh(fs);
            }
            KeyCode::Delete => {
                if self.cursor < self.input.len() {
                    let next = next_boundary(&self.input, self.cursor);
                    self.input.replace_range(self.cursor..next, "");
                    self.refresh(fs);
                }
            }
            KeyCode::Left => self.cursor = prev_boundary(&self.input, self.cursor),
            KeyCode::Right => self.cursor = next_boundary(&self.input, self.cursor),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.len(),

            KeyCode::Up => {
                if !self.suggestions.is_empty() {
                    self.selected = Some(match self.selected {
                        None | Some(0) => self.suggestions.len() - 1,
                        Some(i) => i - 1,
                    });
                }
            }
            KeyCode::Down => {
                if !self.suggestions.is_empty() {
                    self.selected = Some(match self.selected {
                        Some(i) if i + 1 < self.suggestions.len() => i + 1,
                        Some(_) => 0,
                        None => 0,
                    });
                }
            }
            KeyCode::Tab => self.complete(fs),
            _ => {}
        }
        PickerOutcome::Pending
    }

    /// Re-list the directory the input currently points into
    pub fn refresh(&mut self, fs: &dyn FileSystem) {
        self.selected = None;
        self.message = None;

        let (listing_dir, prefix) = self.listing_target();
        let entries = match fs.read_dir(&listing_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Picker cannot list {}: {}", listing_dir.display(), e);
                self.suggestions.clear();
                return;
            }
        };

        let prefix_lower = prefix.to_lowercase();
        let show_hidden = self.show_hidden || prefix.starts_with('.');
        let filter = &self.filters[self.active_filter];

        let mut suggestions: Vec<DirEntry> = entries
            .into_iter()
            .filter(|entry| show_hidden || !entry.is_hidden())
            .filter(|entry| entry.name.to_lowercase().starts_with(&prefix_lower))
            .filter(|entry| entry.is_dir() || filter.matches(&entry.name))
            .collect();
        suggestions.sort_by(|a, b| {
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        self.suggestions = suggestions;
    }

    /// Split the input into the directory to list and the name prefix typed so far
    fn listing_target(&self) -> (PathBuf, String) {
        match self.input.rfind('/') {
            Some(idx) => {
                let dir_part = &self.input[..=idx];
                let prefix = self.input[idx + 1..].to_string();
                (self.resolve(dir_part), prefix)
            }
            None if self.input == "~" => (self.resolve("~/"), String::new()),
            None => (self.dir.clone(), self.input.clone()),
        }
    }

    /// Resolve input text to a path: `~` expands to home, relative is against `dir`
    pub fn resolve(&self, input: &str) -> PathBuf {
        if input == "~" || input.starts_with("~/") {
            if let Some(home) = &self.home_dir {
                let rest = input[1..].trim_start_matches('/');
                return if rest.is_empty() {
                    home.clone()
                } else {
                    home.join(rest)
                };
            }
        }
        let path = Path::new(input);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }

    /// Tab: fill in the highlighted (or first) suggestion
    fn complete(&mut self, fs: &dyn FileSystem) {
        let index = self.selected.unwrap_or(0);
        let Some(entry) = self.suggestions.get(index).cloned() else {
            return;
        };
        let keep = self.input.rfind('/').map(|idx| idx + 1).unwrap_or(0);
        self.input.truncate(keep);
        self.input.push_str(&entry.name);
        if entry.is_dir() {
            self.input.push('/');
        }
        self.cursor = self.input.len();
        self.refresh(fs);
    }

    fn descend(&mut self, dir: PathBuf, fs: &dyn FileSystem) {
        tracing::debug!("Picker entering {}", dir.display());
        self.dir = dir;
        self.input.clear();
        self.cursor = 0;
        self.refresh(fs);
    }

    fn confirm(&mut self, fs: &dyn FileSystem) -> PickerOutcome {
        let target = match self.selected.and_then(|i| self.suggestions.get(i)) {
            Some(entry) => entry.path.clone(),
            None if self.input.trim().is_empty() => {
                self.message = Some("Enter a file name".to_string());
                return PickerOutcome::Pending;
            }
            None => self.resolve(&self.input),
        };

        if fs.is_dir(&target) {
            self.descend(target, fs);
            return PickerOutcome::Pending;
        }

        match self.mode {
            PickerMode::Open => {
                if !fs.exists(&target) {
                    self.message = Some(format!("File not found: {}", target.display()));
                    return PickerOutcome::Pending;
                }
                PickerOutcome::Picked(target)
            }
            PickerMode::Save => PickerOutcome::Picked(self.with_default_extension(target)),
        }
    }

    fn with_default_extension(&self, mut path: PathBuf) -> PathBuf {
        if self.default_extension.is_empty() || path.extension().is_some() {
            return path;
        }
        if let Some(name) = path.file_name() {
            let mut name = name.to_os_string();
            name.push(&self.default_extension);
            path.set_file_name(name);
        }
        path
    }
}

fn prev_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}
