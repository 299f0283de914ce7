use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{STORE_FILE_NAME, USER_COLOR_KEY};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// JSON file the user's color is kept in
    pub store_path: String,
    /// Key the color is stored under
    pub key: String,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the configuration file isn't accessible: {0}")]
    Io(#[from] io::Error),
    #[error("the configuration file is poorly formatted: {0}")]
    Json(#[from] serde_json::Error),
}

impl Config {
    /// Returns a sample configuration, which is also used when there is no configuration file
    pub fn sample() -> Self {
        Self {
            store_path: STORE_FILE_NAME.into(),
            key: USER_COLOR_KEY.into(),
            log_level: "info".into(),
        }
    }

    /// # Errors
    /// Returns an error if the file can't be read or isn't a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// Same as `load`, but a missing file gives the sample configuration.
    ///
    /// # Errors
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load_or_sample(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                Ok(Self::sample())
            }
            result => result,
        }
    }

    /// # Errors
    /// Returns an error if the file can't be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
