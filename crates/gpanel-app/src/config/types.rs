//! Configuration types for the panel
//!
//! Every section and field has a default, so an empty or partial
//! `config.toml` is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lower bound for any poll period.
pub const MIN_POLL_MS: u64 = 250;

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub polling: PollingSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the device lives and how to reach it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// Base URL of the device's HTTP API
    #[serde(default = "default_device_url")]
    pub url: String,

    /// Per-request timeout in milliseconds; 0 disables the timeout
    #[serde(default)]
    pub request_timeout_ms: u64,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            url: default_device_url(),
            request_timeout_ms: 0,
        }
    }
}

impl DeviceSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

/// Background refresh periods
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingSettings {
    /// Dashboard stats refresh period in milliseconds
    #[serde(default = "default_dashboard_ms")]
    pub dashboard_ms: u64,

    /// Learn-status refresh period in milliseconds
    #[serde(default = "default_learn_ms")]
    pub learn_ms: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            dashboard_ms: default_dashboard_ms(),
            learn_ms: default_learn_ms(),
        }
    }
}

impl PollingSettings {
    pub fn dashboard_period(&self) -> Duration {
        Duration::from_millis(self.dashboard_ms.max(MIN_POLL_MS))
    }

    pub fn learn_period(&self) -> Duration {
        Duration::from_millis(self.learn_ms.max(MIN_POLL_MS))
    }
}

/// Terminal UI behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// At or below this many columns the sidebar collapses after navigating
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,

    /// How long a notification stays on screen, in milliseconds
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            narrow_width: default_narrow_width(),
            toast_ms: default_toast_ms(),
        }
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

fn default_device_url() -> String {
    "http://192.168.4.1".to_string()
}

fn default_dashboard_ms() -> u64 {
    5000
}

fn default_learn_ms() -> u64 {
    1000
}

fn default_narrow_width() -> u16 {
    100
}

fn default_toast_ms() -> u64 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.device.url, "http://192.168.4.1");
        assert_eq!(s.device.request_timeout(), None);
        assert_eq!(s.polling.dashboard_period(), Duration::from_secs(5));
        assert_eq!(s.polling.learn_period(), Duration::from_secs(1));
        assert_eq!(s.ui.toast_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_poll_periods_are_clamped() {
        let p = PollingSettings {
            dashboard_ms: 10,
            learn_ms: 0,
        };
        assert_eq!(p.dashboard_period(), Duration::from_millis(MIN_POLL_MS));
        assert_eq!(p.learn_period(), Duration::from_millis(MIN_POLL_MS));
    }

    #[test]
    fn test_partial_toml() {
        let s: Settings = toml::from_str(
            r#"
[device]
url = "http://goku.local"
request_timeout_ms = 1500
"#,
        )
        .unwrap();
        assert_eq!(s.device.url, "http://goku.local");
        assert_eq!(s.device.request_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(s.polling.dashboard_ms, 5000);
    }
}
