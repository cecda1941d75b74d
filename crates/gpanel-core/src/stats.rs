//! System stats snapshot and dashboard formatting helpers

use serde::{Deserialize, Serialize};

/// Shown when the device does not report a firmware version.
pub const DEFAULT_FIRMWARE_VERSION: &str = "1.0.0";

/// One `GET /api/system/stats` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    /// Chip temperature in °C.
    pub temp: f64,
    /// Heap usage in percent.
    pub ram: f64,
    /// Seconds since boot.
    pub uptime: u64,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub led_enabled: Option<bool>,
    /// Wi-Fi signal strength in dBm.
    #[serde(default)]
    pub rssi: i32,
    #[serde(default)]
    pub free_heap: u64,
    #[serde(default)]
    pub min_free_heap: u64,
}

impl SystemStats {
    pub fn firmware_version(&self) -> &str {
        self.version
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_FIRMWARE_VERSION)
    }

    /// Only an explicit `false` hides the LED view.
    pub fn led_hidden(&self) -> bool {
        self.led_enabled == Some(false)
    }

    pub fn temp_text(&self) -> String {
        format!("{:.1}°C", self.temp)
    }

    /// Temperature gauge fill, capped at 100.
    pub fn temp_percent(&self) -> f64 {
        self.temp.clamp(0.0, 100.0)
    }

    pub fn ram_text(&self) -> String {
        format!("{}%", self.ram)
    }
}

/// `Uptime: 3h 4m`, or `Uptime: 3h 4m 5s` when seconds are wanted.
pub fn format_uptime(uptime_secs: u64, with_seconds: bool) -> String {
    let hours = uptime_secs / 3600;
    let mins = (uptime_secs % 3600) / 60;
    let secs = uptime_secs % 60;
    if with_seconds {
        format!("Uptime: {hours}h {mins}m {secs}s")
    } else {
        format!("Uptime: {hours}h {mins}m")
    }
}

/// Byte count as kibibytes with one decimal, e.g. `123.4 KB`.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SystemStats {
        serde_json::from_str(
            r#"{"temp":41.26,"ram":37,"uptime":3725,"rssi":-61,
                "free_heap":153600,"min_free_heap":102912}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_optional_fields_default() {
        let s = stats();
        assert_eq!(s.firmware_version(), DEFAULT_FIRMWARE_VERSION);
        assert!(!s.led_hidden());
    }

    #[test]
    fn test_led_hidden_only_when_false() {
        let mut s = stats();
        s.led_enabled = Some(true);
        assert!(!s.led_hidden());
        s.led_enabled = Some(false);
        assert!(s.led_hidden());
    }

    #[test]
    fn test_gauge_texts() {
        let s = stats();
        assert_eq!(s.temp_text(), "41.3°C");
        assert_eq!(s.ram_text(), "37%");
        let hot = SystemStats { temp: 130.0, ..s };
        assert_eq!(hot.temp_percent(), 100.0);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(3725, false), "Uptime: 1h 2m");
        assert_eq!(format_uptime(3725, true), "Uptime: 1h 2m 5s");
        assert_eq!(format_uptime(0, true), "Uptime: 0h 0m 0s");
    }

    #[test]
    fn test_format_kib() {
        assert_eq!(format_kib(153600), "150.0 KB");
        assert_eq!(format_kib(102912), "100.5 KB");
    }
}
