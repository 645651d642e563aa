use crate::error::{Result, RoloError};
use crate::group::DEFAULT_GROUPS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.dat";

/// Configuration for rolo, stored in config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Name of the binary snapshot file (e.g. "contacts.dat")
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Group names the registry is seeded with on every run. Custom groups
    /// added during a run are intentionally not written back here.
    #[serde(default = "default_groups")]
    pub default_groups: Vec<String>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_groups: default_groups(),
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RoloError::Io)?;
        let config: RoloConfig =
            serde_json::from_str(&content).map_err(RoloError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RoloError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RoloError::Serialization)?;
        fs::write(config_path, content).map_err(RoloError::Io)?;
        Ok(())
    }

    pub fn get_data_file(&self) -> &str {
        &self.data_file
    }

    /// Set the data file name; an empty value falls back to the default.
    pub fn set_data_file(&mut self, name: &str) {
        if name.is_empty() {
            self.data_file = default_data_file();
        } else {
            self.data_file = name.to_string();
        }
    }
}
