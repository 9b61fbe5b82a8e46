pub mod log_dirs;
pub mod terminal_modes;
pub mod tracing_setup;
