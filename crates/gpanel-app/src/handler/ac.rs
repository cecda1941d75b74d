//! AC mirror and command dispatch
//!
//! Every change updates the mirror first, then pushes the whole mirror.
//! A failed push leaves the mirror as the user set it; the next pull
//! reconciles.

use gpanel_core::{clamp_temp, AcMode, AcState, Brand, FanSpeed, Failure, Notification};
use tracing::{debug, warn};

use crate::notifications::Notifier;
use crate::request::Push;
use crate::state::AppState;
use crate::view_model;

use super::UpdateResult;

pub(crate) const SET_AC_REJECTED: &str = "Failed to set AC";
pub(crate) const SET_AC_UNREACHABLE: &str = "Error setting AC";

fn push_mirror(state: &AppState) -> UpdateResult {
    UpdateResult::push(Push::SetAc(state.ac.mirror.to_command()))
}

pub(crate) fn set_power(state: &mut AppState, on: bool) -> UpdateResult {
    state.ac.mirror.power = on;
    push_mirror(state)
}

pub(crate) fn set_mode(state: &mut AppState, mode: AcMode) -> UpdateResult {
    state.ac.mirror.mode = mode;
    push_mirror(state)
}

pub(crate) fn set_temp(state: &mut AppState, temp: i32) -> UpdateResult {
    state.ac.mirror.temp = clamp_temp(temp);
    push_mirror(state)
}

pub(crate) fn set_fan(state: &mut AppState, fan: FanSpeed) -> UpdateResult {
    state.ac.mirror.fan = fan;
    push_mirror(state)
}

pub(crate) fn select_brand(state: &mut AppState, value: &str) -> UpdateResult {
    match Brand::from_select_value(value) {
        Ok(brand) => {
            state.ac.mirror.brand = brand;
            push_mirror(state)
        }
        Err(e) => {
            warn!("ignoring brand selection: {}", e);
            UpdateResult::none()
        }
    }
}

/// Filter the AC brand options. If the current brand is filtered out, the
/// first visible option becomes current locally; it is sent with the next
/// AC push.
pub(crate) fn filter_brands(state: &mut AppState, filter: String) -> UpdateResult {
    state.brands.filter = filter;
    let visible = view_model::visible_ac_brands(state);
    let current = view_model::current_ac_brand_value(state);
    if !visible.iter().any(|o| o.value == current) {
        if let Some(first) = visible.first() {
            if let Ok(brand) = Brand::from_select_value(&first.value) {
                state.ac.mirror.brand = brand;
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn apply_state(state: &mut AppState, ac_state: AcState) -> UpdateResult {
    state.ac.mirror = ac_state;
    state.ac.synced = true;
    UpdateResult::none()
}

/// The form keeps its current values.
pub(crate) fn state_failed(failure: &Failure) -> UpdateResult {
    debug!("AC state pull failed: {}", failure);
    UpdateResult::none()
}

pub(crate) fn set_ac_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {}
        Err(f) if f.is_rejected() => state.notify(Notification::error(SET_AC_REJECTED)),
        Err(_) => state.notify(Notification::error(SET_AC_UNREACHABLE)),
    }
    UpdateResult::none()
}
