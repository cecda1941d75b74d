//! IR key list: send, delete and rename

use gpanel_core::{Failure, Notification};

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::notifications::Notifier;
use crate::request::{Fetch, Push};
use crate::state::{AppState, Remote};

use super::UpdateResult;

pub(crate) const KEYS_FAILED: &str = "Failed to load keys.";

pub(crate) fn apply_keys(state: &mut AppState, keys: Vec<String>) -> UpdateResult {
    if state.keys.selected >= keys.len() {
        state.keys.selected = keys.len().saturating_sub(1);
    }
    state.keys.list = Remote::Loaded(keys);
    UpdateResult::none()
}

pub(crate) fn keys_failed(state: &mut AppState) -> UpdateResult {
    state.keys.list = Remote::Failed(KEYS_FAILED.to_string());
    UpdateResult::none()
}

pub(crate) fn send_key(key: String) -> UpdateResult {
    UpdateResult::push(Push::SendKey(key))
}

pub(crate) fn send_done(state: &mut AppState, key: &str, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => state.notify(Notification::info(format!("Sent {key}"))),
        Err(_) => state.notify(Notification::error(format!("Failed to send {key}"))),
    }
    UpdateResult::none()
}

pub(crate) fn request_delete(state: &mut AppState, key: String) -> UpdateResult {
    state.confirm = Some(ConfirmDialogState::confirm(
        "Delete key",
        format!("Delete {key}?"),
        "Delete",
        Message::DeleteKey(key),
    ));
    UpdateResult::none()
}

pub(crate) fn delete_key(key: String) -> UpdateResult {
    UpdateResult::push(Push::DeleteKey(key))
}

/// The list is re-pulled whatever the outcome.
pub(crate) fn delete_done(state: &mut AppState, key: &str, result: Result<(), Failure>) -> UpdateResult {
    if result.is_err() {
        state.notify(Notification::error(format!("Failed to delete {key}")));
    }
    UpdateResult::fetch(Fetch::IrKeys)
}

pub(crate) fn rename_key(state: &mut AppState, old: String, new: String) -> UpdateResult {
    let new = new.trim().to_string();
    if new.is_empty() || new == old {
        return UpdateResult::none();
    }
    if state.keys.list.loaded().is_some_and(|keys| keys.contains(&new)) {
        state.notify(Notification::error(format!("Key \"{new}\" already exists")));
        return UpdateResult::none();
    }
    UpdateResult::push(Push::RenameKey { old, new })
}

pub(crate) fn rename_done(state: &mut AppState, new: &str, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {
            state.notify(Notification::success(format!("Renamed to \"{new}\"")));
            UpdateResult::fetch(Fetch::IrKeys)
        }
        Err(f) => {
            state.notify(Notification::error(format!("Error: {f}")));
            UpdateResult::none()
        }
    }
}
