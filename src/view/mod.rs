//! View and UI layer
//!
//! Stateless renderers; everything they draw comes from the `Editor`.

pub mod editor_view;
pub mod menu;
pub mod picker;
pub mod status_bar;
pub mod tabs;
pub mod theme;
