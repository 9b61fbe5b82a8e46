//! Keyboard accelerators
//!
//! Resolution happens in two steps:
//! 1. `KeybindingResolver::resolve` checks the command bindings (Open, Save, ...)
//! 2. Anything unbound becomes an editing action for the active buffer via
//!    `editing_action`
//!
//! Config bindings are checked before the built-in defaults, so they can
//! shadow them.

use crate::config::Keybinding;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level actions that can be performed in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // File commands
    Open,
    Create,
    Save,
    SaveAs,
    Quit,

    // Shell navigation
    OpenMenu,
    NextTab,
    PrevTab,

    // Character input
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // Basic movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveWordLeft,
    MoveWordRight,
    MoveLineStart,
    MoveLineEnd,
    MovePageUp,
    MovePageDown,
    MoveDocumentStart,
    MoveDocumentEnd,

    // Selection movement (extends selection while moving)
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectWordLeft,
    SelectWordRight,
    SelectLineStart,
    SelectLineEnd,
    SelectAll,
}

impl Action {
    /// Parse a command action name as used in config files
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "open" => Self::Open,
            "create" | "new" => Self::Create,
            "save" => Self::Save,
            "save_as" => Self::SaveAs,
            "quit" => Self::Quit,
            "menu" => Self::OpenMenu,
            "next_tab" => Self::NextTab,
            "prev_tab" => Self::PrevTab,
            _ => return None,
        })
    }
}

/// Resolves key events to command actions
#[derive(Debug, Clone)]
pub struct KeybindingResolver {
    /// Bindings in priority order (first match wins)
    bindings: Vec<(KeyCode, KeyModifiers, Action)>,
}

impl Default for KeybindingResolver {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl KeybindingResolver {
    /// Build a resolver from config overrides plus the default bindings
    pub fn new(overrides: &[Keybinding]) -> Self {
        let mut bindings = Vec::new();

        for binding in overrides {
            let Some(action) = Action::from_name(&binding.action) else {
                tracing::warn!("Unknown keybinding action: {}", binding.action);
                continue;
            };
            let Some(code) = parse_key(&binding.key) else {
                tracing::warn!("Unknown key in keybinding: {}", binding.key);
                continue;
            };
            let Some(modifiers) = parse_modifiers(&binding.modifiers) else {
                tracing::warn!("Unknown modifier in keybinding: {:?}", binding.modifiers);
                continue;
            };
            let (code, modifiers) = normalize(code, modifiers);
            bindings.push((code, modifiers, action));
        }

        bindings.extend(Self::default_bindings());
        Self { bindings }
    }

    fn default_bindings() -> Vec<(KeyCode, KeyModifiers, Action)> {
        let ctrl = KeyModifiers::CONTROL;
        let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        vec![
            (KeyCode::Char('o'), ctrl, Action::Open),
            (KeyCode::Char('n'), ctrl, Action::Create),
            (KeyCode::Char('s'), ctrl, Action::Save),
            (KeyCode::Char('s'), ctrl_shift, Action::SaveAs),
            (KeyCode::Char('q'), ctrl, Action::Quit),
            (KeyCode::F(10), KeyModifiers::NONE, Action::OpenMenu),
            (KeyCode::Char('f'), KeyModifiers::ALT, Action::OpenMenu),
            (KeyCode::PageDown, ctrl, Action::NextTab),
            (KeyCode::PageUp, ctrl, Action::PrevTab),
        ]
    }

    /// Resolve a key event to a command action, if one is bound
    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        let (code, modifiers) = normalize(event.code, event.modifiers);
        self.bindings
            .iter()
            .find(|(c, m, _)| *c == code && *m == modifiers)
            .map(|(_, _, action)| *action)
    }

    /// Human-readable accelerator for an action, e.g. "Ctrl+Shift+S"
    pub fn accelerator_hint(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, _, a)| *a == action)
            .map(|(code, modifiers, _)| format_key(*code, *modifiers))
    }
}

/// Canonical form for matching: letters lowercase, shift explicit.
///
/// Terminals report Ctrl+Shift+S variously as `Char('S')` with CONTROL or
/// `Char('s')` with CONTROL|SHIFT; both map to the latter.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    let modifiers = modifiers & (KeyModifiers::CONTROL | KeyModifiers::SHIFT | KeyModifiers::ALT);
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            (KeyCode::Char(c.to_ascii_lowercase()), modifiers | KeyModifiers::SHIFT)
        }
        _ => (code, modifiers),
    }
}

fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    Some(match name.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        other => {
            let n: u8 = other.strip_prefix('f')?.parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    })
}

fn parse_modifiers(names: &[String]) -> Option<KeyModifiers> {
    let mut modifiers = KeyModifiers::NONE;
    for name in names {
        modifiers |= match name.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return None,
        };
    }
    Some(modifiers)
}

fn format_key(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts: Vec<String> = Vec::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".into());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".into());
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".into());
    }
    parts.push(match code {
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::PageUp => "PgUp".into(),
        KeyCode::PageDown => "PgDn".into(),
        other => format!("{other:?}"),
    });
    parts.join("+")
}

/// Map an unbound key to a buffer editing action
pub fn editing_action(event: &KeyEvent) -> Option<Action> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    Some(match event.code {
        KeyCode::Char('a') if ctrl && !alt => Action::SelectAll,
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(c) => Action::InsertChar(c),
        KeyCode::Enter => Action::InsertNewline,
        KeyCode::Tab => Action::InsertTab,
        KeyCode::Backspace => Action::DeleteBackward,
        KeyCode::Delete => Action::DeleteForward,

        KeyCode::Left if ctrl && shift => Action::SelectWordLeft,
        KeyCode::Right if ctrl && shift => Action::SelectWordRight,
        KeyCode::Left if ctrl => Action::MoveWordLeft,
        KeyCode::Right if ctrl => Action::MoveWordRight,
        KeyCode::Left if shift => Action::SelectLeft,
        KeyCode::Right if shift => Action::SelectRight,
        KeyCode::Up if shift => Action::SelectUp,
        KeyCode::Down if shift => Action::SelectDown,
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,

        KeyCode::Home if ctrl => Action::MoveDocumentStart,
        KeyCode::End if ctrl => Action::MoveDocumentEnd,
        KeyCode::Home if shift => Action::SelectLineStart,
        KeyCode::End if shift => Action::SelectLineEnd,
        KeyCode::Home => Action::MoveLineStart,
        KeyCode::End => Action::MoveLineEnd,
        KeyCode::PageUp => Action::MovePageUp,
        KeyCode::PageDown => Action::MovePageDown,
        _ => return None,
    })
}
