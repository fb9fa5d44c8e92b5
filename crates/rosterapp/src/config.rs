//! # Configuration
//!
//! Roster configuration lives in `config.json` inside the data directory, next to
//! the record slot. Missing file or missing keys fall back to defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `slot` | `studentGroup` | Name of the storage slot (`<slot>.json`) |
//! | `export-dir` | data directory | Where `export` writes reports |

use crate::error::{Result, RosterError};
use crate::store::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 2] = ["slot", "export-dir"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RosterConfig {
    /// Storage slot name, without extension
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Directory for exported reports. `None` means the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            export_dir: None,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Current value of `key` as text, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot" => Some(self.slot.clone()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "slot" => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid slot name: '{}'", value));
                }
                self.slot = value.to_string();
                Ok(())
            }
            "export-dir" => {
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Where reports go when no directory is given explicitly.
    pub fn export_dir_or(&self, data_dir: &Path) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| data_dir.to_path_buf())
    }
}
