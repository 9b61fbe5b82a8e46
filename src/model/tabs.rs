//! Tab registry: the ordered set of open documents and the active one
//!
//! Each tab owns its `DocumentBuffer` and carries an explicit save state
//! (`DocumentPath`). Buffers are looked up by `TabId`, never by walking the
//! rendered UI.

use super::document::DocumentBuffer;
use std::fmt;
use std::path::{Path, PathBuf};

/// Caption shown for a tab that has never been bound to a file
pub const UNTITLED_LABEL: &str = "Untitled";

/// Stable handle to a tab. Handles are never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub usize);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// Where a document is saved, if anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentPath {
    /// Created in the editor and never saved or opened from disk
    Untitled,
    /// Bound to a file on disk; Save writes here
    Path(PathBuf),
}

impl DocumentPath {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            DocumentPath::Untitled => None,
            DocumentPath::Path(path) => Some(path),
        }
    }

    pub fn is_untitled(&self) -> bool {
        matches!(self, DocumentPath::Untitled)
    }

    /// Display caption: the sentinel for untitled documents, otherwise the path
    pub fn label(&self) -> String {
        match self {
            DocumentPath::Untitled => UNTITLED_LABEL.to_string(),
            DocumentPath::Path(path) => path.display().to_string(),
        }
    }
}

/// One open document
#[derive(Debug, Clone)]
pub struct TabEntry {
    pub id: TabId,
    pub path: DocumentPath,
    pub buffer: DocumentBuffer,
}

impl TabEntry {
    pub fn label(&self) -> String {
        self.path.label()
    }
}

/// Ordered tabs plus the active selection.
///
/// Invariant: `active` is `None` exactly when `tabs` is empty, and otherwise
/// names a member of `tabs`.
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: Vec<TabEntry>,
    active: Option<TabId>,
    next_id: usize,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab seeded with `initial_content` and make it active
    pub fn add_tab(&mut self, path: DocumentPath, initial_content: &str) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        tracing::debug!("Adding {} ({})", id, path.label());
        self.tabs.push(TabEntry {
            id,
            path,
            buffer: DocumentBuffer::with_text(initial_content),
        });
        self.active = Some(id);
        id
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_entry(&self) -> Option<&TabEntry> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_entry_mut(&mut self) -> Option<&mut TabEntry> {
        let id = self.active?;
        self.get_mut(id)
    }

    pub fn get(&self, id: TabId) -> Option<&TabEntry> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut TabEntry> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    pub fn label(&self, id: TabId) -> Option<String> {
        self.get(id).map(TabEntry::label)
    }

    pub fn path(&self, id: TabId) -> Option<&DocumentPath> {
        self.get(id).map(|tab| &tab.path)
    }

    /// Rebind a tab to a new path; its caption changes with it.
    /// Returns false if the tab does not exist.
    pub fn set_path(&mut self, id: TabId, path: DocumentPath) -> bool {
        match self.get_mut(id) {
            Some(tab) => {
                tracing::debug!("Relabeling {}: {} -> {}", id, tab.path.label(), path.label());
                tab.path = path;
                true
            }
            None => false,
        }
    }

    pub fn content(&self, id: TabId) -> Option<String> {
        self.get(id).map(|tab| tab.buffer.content())
    }

    pub fn buffer(&self, id: TabId) -> Option<&DocumentBuffer> {
        self.get(id).map(|tab| &tab.buffer)
    }

    pub fn buffer_mut(&mut self, id: TabId) -> Option<&mut DocumentBuffer> {
        self.get_mut(id).map(|tab| &mut tab.buffer)
    }

    /// Make `id` the active tab. Returns false if it is not a member.
    pub fn activate(&mut self, id: TabId) -> bool {
        if self.position(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    pub fn activate_next(&mut self) {
        self.cycle(1);
    }

    pub fn activate_prev(&mut self) {
        self.cycle(self.tabs.len().saturating_sub(1));
    }

    fn cycle(&mut self, step: usize) {
        let Some(current) = self.active.and_then(|id| self.position(id)) else {
            return;
        };
        let next = (current + step) % self.tabs.len();
        self.active = Some(self.tabs[next].id);
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabEntry> {
        self.tabs.iter()
    }
}
