pub mod file_commands;
pub mod menu;
pub mod picker;
pub mod save_as;
pub mod scrolling;
pub mod tabs;
