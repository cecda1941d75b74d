//! Logs, Wi-Fi credentials and firmware update

use gpanel_core::{Failure, Notification, OtaInfo, WifiNetwork};
use tracing::warn;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::notifications::Notifier;
use crate::request::{Fetch, Push};
use crate::state::{AppState, Remote};

use super::UpdateResult;

pub(crate) const LOGS_FAILED: &str = "Failed to load logs.";
pub(crate) const SCAN_FAILED: &str = "Scan failed";
pub(crate) const CHECKING: &str = "Checking...";
pub(crate) const CHECK_FAILED: &str = "Error checking update";
pub(crate) const STARTING: &str = "Starting update...";

// ─────────────────────────────────────────────────────────────
// Logs
// ─────────────────────────────────────────────────────────────

pub(crate) fn apply_logs(state: &mut AppState, text: String) -> UpdateResult {
    state.logs.text = Remote::Loaded(text);
    UpdateResult::none()
}

pub(crate) fn logs_failed(state: &mut AppState) -> UpdateResult {
    state.logs.text = Remote::Failed(LOGS_FAILED.to_string());
    UpdateResult::none()
}

pub(crate) fn clear_logs_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {
            state.logs.scroll = 0;
            state.notify(Notification::success("Logs cleared"));
        }
        Err(f) => {
            warn!("clear logs failed: {}", f);
            state.notify(Notification::error("Failed to clear logs"));
        }
    }
    UpdateResult::fetch(Fetch::Logs)
}

// ─────────────────────────────────────────────────────────────
// Wi-Fi
// ─────────────────────────────────────────────────────────────

pub(crate) fn scan(state: &mut AppState) -> UpdateResult {
    state.system.networks = Remote::Loading;
    UpdateResult::fetch(Fetch::WifiScan)
}

pub(crate) fn apply_networks(state: &mut AppState, networks: Vec<WifiNetwork>) -> UpdateResult {
    state.system.selected = 0;
    state.system.networks = Remote::Loaded(networks);
    UpdateResult::none()
}

pub(crate) fn scan_failed(state: &mut AppState) -> UpdateResult {
    state.system.networks = Remote::Failed(SCAN_FAILED.to_string());
    UpdateResult::none()
}

pub(crate) fn choose_network(state: &mut AppState) -> UpdateResult {
    if let Some(network) = state
        .system
        .networks
        .loaded()
        .and_then(|list| list.get(state.system.selected))
    {
        state.system.wifi.ssid = network.ssid.clone();
    }
    UpdateResult::none()
}

pub(crate) fn request_save_wifi(state: &mut AppState) -> UpdateResult {
    if let Err(e) = state.system.wifi.validate() {
        state.notify(Notification::error(e.to_string()));
        return UpdateResult::none();
    }
    state.confirm = Some(ConfirmDialogState::confirm(
        "Wi-Fi",
        "Save credentials and restart device?",
        "Save",
        Message::ConfirmSaveWifi,
    ));
    UpdateResult::none()
}

pub(crate) fn save_wifi(state: &mut AppState) -> UpdateResult {
    let wifi = &state.system.wifi;
    UpdateResult::push(Push::WifiConfig {
        ssid: wifi.ssid.clone(),
        password: wifi.password.clone(),
    })
}

pub(crate) fn wifi_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => state.notify(Notification::success("Settings saved. Device rebooting...")),
        Err(f) if f.is_rejected() => {
            state.notify(Notification::error("Failed to save settings"))
        }
        Err(f) => state.notify(Notification::error(format!("Error: {f}"))),
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────
// Firmware update
// ─────────────────────────────────────────────────────────────

pub(crate) fn check_update(state: &mut AppState) -> UpdateResult {
    state.system.ota_status = Some(CHECKING.to_string());
    UpdateResult::fetch(Fetch::OtaCheck)
}

pub(crate) fn apply_ota(state: &mut AppState, info: OtaInfo) -> UpdateResult {
    state.system.ota_status = Some(info.summary());
    state.system.ota = Some(info);
    UpdateResult::none()
}

pub(crate) fn ota_check_failed(state: &mut AppState) -> UpdateResult {
    state.system.ota_status = Some(CHECK_FAILED.to_string());
    UpdateResult::none()
}

pub(crate) fn request_start_update(state: &mut AppState) -> UpdateResult {
    state.confirm = Some(ConfirmDialogState::confirm(
        "Firmware",
        "Start Firmware Update? Device will reboot.",
        "Update",
        Message::ConfirmStartUpdate,
    ));
    UpdateResult::none()
}

pub(crate) fn start_update(state: &mut AppState) -> UpdateResult {
    state.system.ota_status = Some(STARTING.to_string());
    UpdateResult::push(Push::OtaStart)
}

pub(crate) fn update_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    let (notification, status) = match result {
        Ok(()) => (
            Notification::success("Update started! Wait for reboot..."),
            "Update started! Wait for reboot...",
        ),
        Err(f) if f.is_rejected() => (
            Notification::error("Failed to start update"),
            "Failed to start update",
        ),
        Err(_) => (
            Notification::error("Error starting update"),
            "Error starting update",
        ),
    };
    state.system.ota_status = Some(status.to_string());
    state.notify(notification);
    UpdateResult::none()
}
