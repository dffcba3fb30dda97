//! Application configuration loaded from a TOML file.
//!
//! Every field has a sensible default so DuoFM works without a config
//! file. The file lives at `<platform config dir>/duofm/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config file not readable: {0}")]
    PermissionDenied(PathBuf),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Starting directory for the left pane. Falls back to the directory
    /// service's initial directory when unset.
    #[serde(default)]
    pub left_dir: Option<PathBuf>,
    /// Starting directory for the right pane.
    #[serde(default)]
    pub right_dir: Option<PathBuf>,
    /// How many entries PageUp/PageDown jump over.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            left_dir: None,
            right_dir: None,
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    15
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the file does not exist.
    /// - [`ConfigError::PermissionDenied`] if the file is not readable.
    /// - [`ConfigError::Parse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                ConfigError::PermissionDenied(path.to_path_buf())
            }
            _ => ConfigError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Loads the user's config file, falling back to defaults when there
    /// is none. A malformed file is still an error; silently ignoring it
    /// would hide typos.
    pub fn load_default() -> Result<Self, ConfigError> {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(Self::default());
        };
        let path = config_dir.join("duofm").join("config.toml");
        match Self::load(&path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }
}
