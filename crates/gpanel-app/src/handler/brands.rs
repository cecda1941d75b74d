//! Custom brand manager
//!
//! No optimistic updates: every successful mutation re-pulls the list, and
//! the same list feeds the AC dropdown, the learning dropdown and the
//! manager.

use gpanel_core::{decode_brand_name, validate_brand_name, Failure, Notification};

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::notifications::Notifier;
use crate::request::{Fetch, Push};
use crate::state::AppState;
use crate::view_model;

use super::UpdateResult;

fn error_text(failure: &Failure) -> String {
    format!("Error: {failure}")
}

pub(crate) fn apply_list(state: &mut AppState, list: Vec<String>) -> UpdateResult {
    state.brands.list = list;
    let len = state.brands.list.len();
    if state.brands.manager_selected >= len {
        state.brands.manager_selected = len.saturating_sub(1);
    }
    let learn_len = view_model::learn_brand_options(&state.brands.list).len();
    if state.learn.brand_index >= learn_len {
        state.learn.brand_index = 0;
    }
    UpdateResult::none()
}

/// Every dropdown falls back to the presets alone.
pub(crate) fn list_failed(state: &mut AppState) -> UpdateResult {
    apply_list(state, Vec::new())
}

pub(crate) fn add(state: &mut AppState, name: &str) -> UpdateResult {
    let name = match validate_brand_name(name) {
        Ok(name) => name,
        Err(e) => {
            state.notify(Notification::error(e.to_string()));
            return UpdateResult::none();
        }
    };
    UpdateResult::push(Push::AddBrand(name))
}

pub(crate) fn add_done(state: &mut AppState, name: &str, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {
            state.notify(Notification::success(format!("Custom brand \"{name}\" added!")));
            UpdateResult::fetch(Fetch::Brands)
        }
        Err(f) => {
            state.notify(Notification::error(error_text(&f)));
            UpdateResult::none()
        }
    }
}

/// No-op when the new name is empty or unchanged.
///
/// The device keeps names exactly as they arrived in the query string, so
/// `old` goes out decoded and the query encoding reproduces the stored form.
pub(crate) fn rename(state: &mut AppState, old: String, new: &str) -> UpdateResult {
    let trimmed = new.trim();
    let old = decode_brand_name(&old);
    if trimmed.is_empty() || trimmed == old {
        return UpdateResult::none();
    }
    match validate_brand_name(trimmed) {
        Ok(new) => UpdateResult::push(Push::RenameBrand { old, new }),
        Err(e) => {
            state.notify(Notification::error(e.to_string()));
            UpdateResult::none()
        }
    }
}

pub(crate) fn rename_done(state: &mut AppState, new: &str, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {
            state.notify(Notification::success(format!("Renamed to \"{new}\"")));
            UpdateResult::fetch(Fetch::Brands)
        }
        Err(f) => {
            state.notify(Notification::error(error_text(&f)));
            UpdateResult::none()
        }
    }
}

/// Asks first. The delete carries the decoded name, same as rename.
pub(crate) fn request_delete(state: &mut AppState, name: String) -> UpdateResult {
    let name = decode_brand_name(&name);
    state.confirm = Some(ConfirmDialogState::confirm(
        "Delete brand",
        format!("Delete custom brand \"{name}\"?\n\nThis will NOT delete saved IR keys."),
        "Delete",
        Message::DeleteBrand(name),
    ));
    UpdateResult::none()
}

pub(crate) fn delete_done(state: &mut AppState, name: &str, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {
            state.notify(Notification::success(format!("Brand \"{name}\" deleted")));
            UpdateResult::fetch(Fetch::Brands)
        }
        Err(f) => {
            state.notify(Notification::error(error_text(&f)));
            UpdateResult::none()
        }
    }
}
