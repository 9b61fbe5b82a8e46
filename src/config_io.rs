//! Runtime configuration I/O operations.
//!
//! System directory detection and config loading. Configuration is only ever
//! read; the editor never writes it back.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Directories the editor reads from
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// Config directory for user configuration
    /// e.g., ~/.config/quill on Linux, ~/Library/Application Support/quill on macOS
    pub config_dir: PathBuf,

    /// User's home directory (for `~` expansion in the path picker)
    pub home_dir: Option<PathBuf>,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    /// This should ONLY be called from main()
    pub fn from_system() -> std::io::Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join("quill");

        Ok(Self {
            config_dir,
            home_dir: dirs::home_dir(),
        })
    }

    /// Create a DirectoryContext rooted in a scratch directory (for tests)
    pub fn for_testing(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
            home_dir: Some(root.join("home")),
        }
    }

    /// Path of the user config file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

impl Config {
    /// Load from an explicit path if given, else from the user config file.
    ///
    /// A missing user config file is not an error; a missing explicit path is.
    pub fn load_from(
        dir_context: &DirectoryContext,
        explicit_path: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        if let Some(path) = explicit_path {
            return Config::load(path);
        }

        let user_path = dir_context.config_path();
        if !user_path.exists() {
            tracing::debug!("No user config at {}", user_path.display());
            return Ok(Config::default());
        }
        Config::load(&user_path)
    }

    /// Like `load_from`, but falls back to defaults (with a warning) on error
    pub fn load_or_default(dir_context: &DirectoryContext, explicit_path: Option<&Path>) -> Config {
        match Config::load_from(dir_context, explicit_path) {
            Ok(config) => {
                tracing::info!("Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }
}
