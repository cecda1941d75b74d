//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use gpanel_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "goku-panel";

/// `~/.config/goku-panel/config.toml` (platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing or unreadable file yields defaults; problems are logged rather
/// than surfaced, so a broken config never keeps the panel from starting.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config if none exists yet.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let default_content = r#"# Goku panel configuration

[device]
# Base URL of the device
url = "http://192.168.4.1"
# Per-request timeout in milliseconds (0 = wait forever)
request_timeout_ms = 0

[polling]
dashboard_ms = 5000
learn_ms = 1000

[ui]
# Collapse the sidebar after navigating when the terminal is this narrow
narrow_width = 100
toast_ms = 3000
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", config_path.display(), e)))?;
    info!("Created default config at {}", config_path.display());
    Ok(true)
}
