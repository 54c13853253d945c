use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration: extra header spellings merged over the built-in
/// synonym tables. Keys are canonical field names (`id`, `name`,
/// `timestamp`), values are additional accepted headers.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roster_headers: HashMap<String, Vec<String>>,

    #[serde(default)]
    pub attendance_headers: HashMap<String, Vec<String>>,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.yml")
    }

    /// Load configuration from an explicit path; a missing file means
    /// defaults, a malformed file is an error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        serde_yaml::from_str(&text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from the standard location, or return defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file()).unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let text = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, text).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}
