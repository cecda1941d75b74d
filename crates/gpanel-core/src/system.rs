//! Wi-Fi and firmware-update payloads

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SSID_REQUIRED: &str = "SSID is required";

/// One `GET /api/wifi/scan` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub rssi: i32,
}

impl WifiNetwork {
    /// Rough 0..=4 bar count for display.
    pub fn bars(&self) -> u8 {
        match self.rssi {
            r if r >= -55 => 4,
            r if r >= -67 => 3,
            r if r >= -75 => 2,
            r if r >= -85 => 1,
            _ => 0,
        }
    }
}

/// `GET /api/ota/check` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtaInfo {
    pub current: String,
    pub available: bool,
    #[serde(default)]
    pub latest: Option<String>,
}

impl OtaInfo {
    pub fn summary(&self) -> String {
        match (&self.latest, self.available) {
            (Some(latest), true) => format!("Update available: {latest}"),
            (None, true) => "Update available".to_string(),
            _ => "System is up to date.".to_string(),
        }
    }
}

/// Credentials submitted to `/api/wifi/config`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
}

impl WifiCredentials {
    pub fn validate(&self) -> Result<()> {
        if self.ssid.is_empty() {
            return Err(Error::invalid_input(SSID_REQUIRED));
        }
        Ok(())
    }
}
