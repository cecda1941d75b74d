//! Small persistent key/value store for client-side preferences

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gpanel_core::prelude::*;

/// Key holding the debug-mode flag, stored as `"true"` / `"false"`.
pub const DEBUG_MODE_KEY: &str = "debugMode";

const STORE_FILENAME: &str = "storage.toml";

/// String values keyed by name, optionally backed by a TOML file.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl LocalStore {
    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// `~/.local/share/goku-panel/storage.toml` (platform equivalent).
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("goku-panel")
            .join(STORE_FILENAME)
    }

    /// Open the store at `path`. Unreadable content starts the store empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring unreadable store {:?}: {}", path, e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: Some(path),
            values,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value and write the store through to disk.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.to_string(), value.into());
        self.flush()
    }

    pub fn debug_mode(&self) -> bool {
        self.get(DEBUG_MODE_KEY) == Some("true")
    }

    pub fn set_debug_mode(&mut self, enabled: bool) -> Result<()> {
        self.set(DEBUG_MODE_KEY, enabled.to_string())
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)
            .map_err(|e| Error::config(format!("Failed to serialize store: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
