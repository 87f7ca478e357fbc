use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BOARD_KEY: &str = "kanbanity-board";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted board snapshots
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    /// Storage key the board snapshot is written under
    #[serde(default)]
    pub board_key: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanbanity/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanbanity/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanbanity\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the config from the platform location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config: {}", e);
                Self::default()
            }
        }
    }

    pub fn effective_board_key(&self) -> &str {
        self.board_key.as_deref().unwrap_or(DEFAULT_BOARD_KEY)
    }

    pub fn effective_storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("kanbanity")))
    }
}
