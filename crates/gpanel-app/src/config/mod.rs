//! Configuration loading and client-side persistence
//!
//! - `types`: `Settings` and its sections
//! - `settings`: `config.toml` discovery and parsing
//! - `store`: key/value store for preferences such as the debug flag

pub mod settings;
pub mod store;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use store::{LocalStore, DEBUG_MODE_KEY};
pub use types::{DeviceSettings, PollingSettings, Settings, UiSettings};
