//! Input handling

pub mod keybindings;
