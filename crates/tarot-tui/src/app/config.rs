//! TUI configuration persistence
//!
//! Saves and loads user preferences such as the dataset location, the
//! default spread and whether reversals are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tarot_core::DEFAULT_COUNT;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "tarot-reader";

/// Log file name under the local data directory
const LOG_FILE_NAME: &str = "tarot-tui.log";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Dataset file; the embedded dataset is used when unset
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Directory card image references are resolved against
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Spread selected at startup
    #[serde(default)]
    pub default_spread: usize,

    /// Card count for free-count readings at startup
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Whether reversals start enabled
    #[serde(default)]
    pub allow_reversed: bool,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("tarot-json/cards")
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            images_dir: default_images_dir(),
            default_spread: 0,
            default_count: DEFAULT_COUNT,
            allow_reversed: false,
            high_contrast: false,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
            return Some(path);
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_file_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|d| d.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.dataset_path.is_none());
        assert_eq!(config.images_dir, PathBuf::from("tarot-json/cards"));
        assert_eq!(config.default_spread, 0);
        assert_eq!(config.default_count, 3);
        assert!(!config.allow_reversed);
        assert!(!config.high_contrast);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: TuiConfig = serde_json::from_str(r#"{"allow_reversed": true}"#).unwrap();
        assert!(parsed.allow_reversed);
        assert_eq!(parsed.default_count, 3);
        assert_eq!(parsed.images_dir, PathBuf::from("tarot-json/cards"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TuiConfig {
            dataset_path: Some(PathBuf::from("/srv/tarot.json")),
            images_dir: PathBuf::from("/srv/cards"),
            default_spread: 5,
            default_count: 7,
            allow_reversed: true,
            high_contrast: true,
        };

        config.save_to(&path).unwrap();
        assert_eq!(TuiConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TuiConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, TuiConfig::default());
    }

    #[test]
    fn test_corrupt_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(TuiConfig::load_from(&path), TuiConfig::default());
    }
}
