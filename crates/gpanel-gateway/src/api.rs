//! The device API as an async trait
//!
//! Every method is one request/response round trip. Implementations must not
//! retry; a failure is reported once and the caller decides what to show.

use gpanel_core::prelude::*;
use gpanel_core::{
    AcCommand, AcState, LearnStatus, LedConfig, OtaInfo, Rgb, SystemColor, SystemStats,
    WifiNetwork,
};

use crate::request::LedPush;

#[trait_variant::make(Gateway: Send)]
pub trait LocalGateway {
    // ── System ────────────────────────────────────────────────────
    /// Raw log text.
    async fn system_logs(&self) -> Result<String>;

    async fn clear_logs(&self) -> Result<()>;

    async fn system_stats(&self) -> Result<SystemStats>;

    // ── AC ────────────────────────────────────────────────────────
    async fn ac_state(&self) -> Result<AcState>;

    /// Push the complete AC state.
    async fn set_ac(&self, command: &AcCommand) -> Result<()>;

    // ── IR keys ───────────────────────────────────────────────────
    async fn ir_keys(&self) -> Result<Vec<String>>;

    async fn send_key(&self, key: &str) -> Result<()>;

    async fn delete_key(&self, key: &str) -> Result<()>;

    async fn rename_key(&self, old: &str, new: &str) -> Result<()>;

    /// Store the most recent capture under `key`.
    async fn save_learned_key(&self, key: &str) -> Result<()>;

    // ── Learning ──────────────────────────────────────────────────
    async fn start_learn(&self) -> Result<()>;

    async fn stop_learn(&self) -> Result<()>;

    async fn learn_status(&self) -> Result<LearnStatus>;

    // ── LED ───────────────────────────────────────────────────────
    async fn led_config(&self) -> Result<LedConfig>;

    async fn push_led(&self, push: &LedPush) -> Result<()>;

    async fn system_colors(&self) -> Result<Vec<SystemColor>>;

    async fn set_system_color(&self, id: u32, color: Rgb) -> Result<()>;

    /// Persist the current runtime ring config on the device.
    async fn save_led_preset(&self) -> Result<()>;

    // ── Custom brands ─────────────────────────────────────────────
    async fn brands(&self) -> Result<Vec<String>>;

    async fn add_brand(&self, name: &str) -> Result<()>;

    async fn rename_brand(&self, old: &str, new: &str) -> Result<()>;

    async fn delete_brand(&self, name: &str) -> Result<()>;

    // ── Wi-Fi / OTA ───────────────────────────────────────────────
    async fn wifi_scan(&self) -> Result<Vec<WifiNetwork>>;

    async fn wifi_config(&self, ssid: &str, password: &str) -> Result<()>;

    async fn ota_check(&self) -> Result<OtaInfo>;

    async fn ota_start(&self) -> Result<()>;
}
