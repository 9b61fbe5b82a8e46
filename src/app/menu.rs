//! File menu state

use super::commands::Command;

/// A row in the File menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(Command),
    Separator,
}

/// Rows of the File menu, top to bottom
pub const FILE_MENU: [MenuEntry; 6] = [
    MenuEntry::Item(Command::Open),
    MenuEntry::Item(Command::Create),
    MenuEntry::Item(Command::Save),
    MenuEntry::Item(Command::SaveAs),
    MenuEntry::Separator,
    MenuEntry::Item(Command::Quit),
];

/// Whether the File menu is dropped down, and which row is highlighted
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: bool,
    highlighted: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.highlighted = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Command under the highlight (never a separator)
    pub fn highlighted_command(&self) -> Option<Command> {
        match FILE_MENU.get(self.highlighted)? {
            MenuEntry::Item(command) => Some(*command),
            MenuEntry::Separator => None,
        }
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(FILE_MENU.len() - 1);
    }

    /// Move the highlight, skipping separators and wrapping
    fn step(&mut self, delta: usize) {
        let mut index = self.highlighted;
        for _ in 0..FILE_MENU.len() {
            index = (index + delta) % FILE_MENU.len();
            if matches!(FILE_MENU[index], MenuEntry::Item(_)) {
                self.highlighted = index;
                return;
            }
        }
    }
}
