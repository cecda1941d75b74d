//! Dashboard stats and the debug-mode toggle

use std::time::Instant;

use gpanel_core::{Failure, Notification, SystemStats};
use tracing::{debug, info};

use crate::notifications::Notifier;
use crate::request::Fetch;
use crate::state::AppState;
use crate::view::View;

use super::{navigation, UpdateAction, UpdateResult};

pub(crate) const DEBUG_ON: &str = "Debug Mode: ON\nAdvanced metrics are now visible.";
pub(crate) const DEBUG_OFF: &str = "Debug Mode: OFF\nReturned to user-friendly view.";

pub(crate) fn apply_stats(state: &mut AppState, stats: SystemStats) -> UpdateResult {
    state.dashboard.apply_stats(stats);

    if state.dashboard.led_nav_hidden && state.view == View::Led {
        info!("LED ring disabled on device, leaving LED view");
        return navigation::navigate(state, View::Dashboard);
    }
    UpdateResult::none()
}

/// Gauges keep their last values; the next tick may succeed.
pub(crate) fn stats_failed(state: &mut AppState, failure: &Failure) -> UpdateResult {
    debug!("stats pull failed: {}", failure);
    state.dashboard.last_error = Some(failure.to_string());
    UpdateResult::none()
}

pub(crate) fn handle_logo_press(state: &mut AppState, now: Instant) -> UpdateResult {
    if !state.debug_gesture.press(now) {
        return UpdateResult::none();
    }

    state.debug_mode = !state.debug_mode;
    info!("debug mode {}", if state.debug_mode { "on" } else { "off" });
    if state.debug_mode {
        state.notify(Notification::success(DEBUG_ON));
    } else {
        state.notify(Notification::info(DEBUG_OFF));
    }

    UpdateResult::actions(vec![
        UpdateAction::PersistDebugMode(state.debug_mode),
        UpdateAction::Fetch(Fetch::Stats),
    ])
}
