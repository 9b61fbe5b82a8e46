use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub file_dialog: FileDialogConfig,

    /// Extra bindings layered over the built-in accelerators
    #[serde(default)]
    pub keybindings: Vec<Keybinding>,
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Columns between tab stops; also the number of spaces Tab inserts
    /// when `insert_spaces` is set
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Tab key inserts spaces instead of a literal `\t`
    #[serde(default)]
    pub insert_spaces: bool,

    #[serde(default = "default_true")]
    pub line_numbers: bool,

    /// Rows kept visible above/below the cursor when scrolling
    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: usize,
}

fn default_tab_size() -> usize {
    4
}

fn default_true() -> bool {
    true
}

fn default_scroll_offset() -> usize {
    3
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            insert_spaces: false,
            line_numbers: true,
            scroll_offset: default_scroll_offset(),
        }
    }
}

/// Open / Save As picker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDialogConfig {
    /// Appended by Save As when the chosen name has no extension
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// Filters offered by Save As, first one active
    #[serde(default = "default_filters")]
    pub filters: Vec<FileFilterConfig>,

    /// Whether to list dot-files in the picker
    #[serde(default)]
    pub show_hidden: bool,
}

/// A named glob filter such as `Text files` / `*.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilterConfig {
    pub name: String,
    pub pattern: String,
}

fn default_extension() -> String {
    ".txt".to_string()
}

fn default_filters() -> Vec<FileFilterConfig> {
    vec![
        FileFilterConfig {
            name: "Text files".to_string(),
            pattern: "*.txt".to_string(),
        },
        FileFilterConfig {
            name: "All files".to_string(),
            pattern: "*.*".to_string(),
        },
    ]
}

impl Default for FileDialogConfig {
    fn default() -> Self {
        Self {
            default_extension: default_extension(),
            filters: default_filters(),
            show_hidden: false,
        }
    }
}

/// Keybinding definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinding {
    /// Key name (e.g., "o", "F2", "PageDown")
    pub key: String,

    /// Modifiers (e.g., ["ctrl"], ["ctrl", "shift"])
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Action to perform (e.g., "open", "save_as")
    pub action: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            file_dialog: FileDialogConfig::default(),
            keybindings: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.tab_size == 0 || self.editor.tab_size > 16 {
            return Err(ConfigError::ValidationError(format!(
                "editor.tab_size must be between 1 and 16, got {}",
                self.editor.tab_size
            )));
        }

        let ext = &self.file_dialog.default_extension;
        if !ext.is_empty() && (!ext.starts_with('.') || ext.len() < 2) {
            return Err(ConfigError::ValidationError(format!(
                "file_dialog.default_extension must look like \".txt\", got {ext:?}"
            )));
        }

        if self.file_dialog.filters.is_empty() {
            return Err(ConfigError::ValidationError(
                "file_dialog.filters must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Effective configuration as pretty JSON (for `--dump-config`)
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
