//! Terminal setup and teardown
//!
//! Quill switches the terminal into a handful of modes while it runs and
//! must give every one of them back on exit, including after a panic.
//! Keyboard enhancement matters most: without it Ctrl+S and Ctrl+Shift+S
//! arrive as the same key on many terminals.

use anyhow::Result;
use crossterm::{
    cursor::SetCursorStyle,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use std::io::{self, stdout, Write};

/// Flags requested from terminals that speak the kitty keyboard protocol
pub fn keyboard_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
}

/// A terminal mode that is on while the editor runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Raw,
    KeyboardEnhancement,
    AlternateScreen,
    BracketedPaste,
}

impl Mode {
    /// Teardown order. Raw mode is dropped before leaving the alternate
    /// screen so the restored screen is not drawn in raw mode.
    pub const RESTORE_ORDER: [Mode; 4] = [
        Mode::BracketedPaste,
        Mode::KeyboardEnhancement,
        Mode::Raw,
        Mode::AlternateScreen,
    ];

    fn restore(self) -> io::Result<()> {
        match self {
            Mode::Raw => disable_raw_mode(),
            Mode::KeyboardEnhancement => stdout().execute(PopKeyboardEnhancementFlags).map(drop),
            Mode::AlternateScreen => stdout().execute(LeaveAlternateScreen).map(drop),
            Mode::BracketedPaste => stdout().execute(DisableBracketedPaste).map(drop),
        }
    }
}

/// The modes switched on by `enable`. Dropping it restores the terminal.
#[derive(Debug, Default)]
pub struct TerminalModes {
    active: Vec<Mode>,
}

impl TerminalModes {
    /// Switch the terminal into editor mode.
    ///
    /// Raw mode and the alternate screen are required; if either fails,
    /// whatever was already on is restored and the error returned. Keyboard
    /// enhancement and bracketed paste are best effort.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::default();

        enable_raw_mode().inspect_err(|e| tracing::error!("Cannot enable raw mode: {}", e))?;
        modes.active.push(Mode::Raw);

        match supports_keyboard_enhancement() {
            Ok(true) => match stdout().execute(PushKeyboardEnhancementFlags(keyboard_flags())) {
                Ok(_) => modes.active.push(Mode::KeyboardEnhancement),
                Err(e) => tracing::warn!("Keyboard enhancement refused: {}", e),
            },
            Ok(false) => {
                tracing::info!("No keyboard enhancement; Ctrl+Shift+S may read as Ctrl+S");
            }
            Err(e) => tracing::warn!("Cannot query keyboard enhancement: {}", e),
        }

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Cannot enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.active.push(Mode::AlternateScreen);

        match stdout().execute(EnableBracketedPaste) {
            Ok(_) => modes.active.push(Mode::BracketedPaste),
            Err(e) => tracing::warn!("Bracketed paste unavailable: {}", e),
        }

        tracing::debug!("Terminal modes on: {:?}", modes.active);
        Ok(modes)
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.active.contains(&mode)
    }

    /// Restore every mode that is on. Calling it again does nothing.
    pub fn undo(&mut self) {
        if self.active.is_empty() {
            return;
        }
        let _ = stdout().execute(SetCursorStyle::DefaultUserShape);
        for mode in Mode::RESTORE_ORDER {
            if self.is_active(mode) {
                if let Err(e) = mode.restore() {
                    tracing::debug!("Restoring {:?} failed: {}", mode, e);
                }
            }
        }
        self.active.clear();
        let _ = stdout().flush();
        tracing::debug!("Terminal restored");
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Restore every mode without knowing which were on (panic hook)
pub fn emergency_cleanup() {
    let _ = stdout().execute(SetCursorStyle::DefaultUserShape);
    for mode in Mode::RESTORE_ORDER {
        let _ = mode.restore();
    }
    let _ = stdout().flush();
}
