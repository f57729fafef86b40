//! JSON configuration file for Windows.
//!
//! Stores settings in %APPDATA%/HotCorners/config.json
//!
//! The file is read once at startup. A missing file is created with the
//! defaults so there is a template to edit; an unreadable or invalid file
//! is reported in the log and the defaults are used instead.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{HotCornersError, Result};
use crate::model::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::model::HotCornersConfig;

/// Application data directory: %APPDATA%/HotCorners
pub fn app_dir() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join(APP_DIR_NAME)
}

/// Get config file path: %APPDATA%/HotCorners/config.json
pub fn config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE_NAME)
}

/// Load config from `path`, creating it with defaults if it does not exist.
pub fn load_config_from(path: &Path) -> HotCornersConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match HotCornersConfig::from_json(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), "{}; using defaults", e);
                HotCornersConfig::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = HotCornersConfig::default();
            match save_config_to(path, &config) {
                Ok(()) => info!(path = %path.display(), "wrote default config"),
                Err(e) => warn!("failed to write default config: {}", e),
            }
            config
        }
        Err(e) => {
            warn!(path = %path.display(), "failed to read config: {}; using defaults", e);
            HotCornersConfig::default()
        }
    }
}

/// Save config to `path` as pretty JSON, creating the directory if needed.
pub fn save_config_to(path: &Path, config: &HotCornersConfig) -> Result<()> {
    let file_error = |source| HotCornersError::File {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(file_error)?;
    }
    let json = config.to_json()?;
    fs::write(path, json).map_err(file_error)
}

/// Load config from the default location.
pub fn load_config() -> HotCornersConfig {
    load_config_from(&config_path())
}
