//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved whenever the user picks
//! a different spreadsheet or folder.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GuiError;
use crate::paths;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
}

/// Last used locations. `None` means "use the bundled default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Faculty spreadsheet loaded last.
    pub last_spreadsheet: Option<PathBuf>,
    /// Folder holding the four `.docx` templates.
    pub template_dir: Option<PathBuf>,
    /// Folder receiving the per-student output folders.
    pub output_root: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path. Missing or unreadable files give
    /// the defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        let failed = |reason: String| GuiError::SettingsSave { reason };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| failed(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| failed(format!("Failed to serialize settings: {e}")))?;

        std::fs::write(path, content).map_err(|e| failed(format!("Failed to write settings: {e}")))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("id", "Sidang", "BeritaAcaraSkripsi")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Spreadsheet to load at startup.
    pub fn spreadsheet(&self) -> PathBuf {
        self.paths
            .last_spreadsheet
            .clone()
            .unwrap_or_else(paths::default_spreadsheet)
    }

    pub fn template_dir(&self) -> PathBuf {
        self.paths
            .template_dir
            .clone()
            .unwrap_or_else(paths::default_template_dir)
    }

    pub fn output_root(&self) -> PathBuf {
        self.paths
            .output_root
            .clone()
            .unwrap_or_else(paths::default_output_root)
    }
}
