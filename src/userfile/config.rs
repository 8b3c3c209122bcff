use crate::commands::remove::RemovalOrder;
use crate::error::{Result, UserFileError};
use crate::store::fs::DEFAULT_FILE_MODE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = "json";

/// Settings for userfile, stored as JSON. Every field has a default, so an
/// empty object or a missing file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Extension the backing file name must end with (without the dot)
    pub file_ext: String,

    /// Permission bits for a newly created backing file
    pub file_mode: u32,

    /// Arrangement of the remaining users after a removal
    pub removal_order: RemovalOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_ext: DEFAULT_FILE_EXT.to_string(),
            file_mode: DEFAULT_FILE_MODE,
            removal_order: RemovalOrder::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&content).map_err(|e| {
            UserFileError::Config(format!("{}: {}", path.display(), e))
        })?;
        let ext = settings.file_ext.clone();
        settings.set_file_ext(&ext);
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set the required extension (a leading dot is dropped)
    pub fn set_file_ext(&mut self, ext: &str) {
        self.file_ext = ext.trim_start_matches('.').to_string();
    }
}

/// The platform config location, e.g. `~/.config/userfile/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "userfile", "userfile")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
