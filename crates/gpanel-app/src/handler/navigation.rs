//! View router: visibility, per-view refresh and poller gating

use gpanel_core::led::RING_RADIUS;
use tracing::debug;

use crate::request::{Fetch, Poller};
use crate::state::{AppState, UiMode};
use crate::view::View;

use super::{UpdateAction, UpdateResult};

/// Show `view` and issue the pulls it depends on.
///
/// The LED view redirects to the dashboard while the device reports the
/// ring as disabled. On narrow terminals the sidebar collapses after every
/// navigation.
pub(crate) fn navigate(state: &mut AppState, view: View) -> UpdateResult {
    let view = if view == View::Led && state.dashboard.led_nav_hidden {
        View::Dashboard
    } else {
        view
    };

    debug!("navigate: {} -> {}", state.view.id(), view.id());
    state.view = view;
    if state.is_narrow() {
        state.sidebar_open = false;
    }

    let mut actions = Vec::new();
    if view != View::Dashboard {
        actions.push(UpdateAction::StopPoller(Poller::Dashboard));
    }

    match view {
        View::Dashboard => {
            actions.push(UpdateAction::Fetch(Fetch::Stats));
            actions.push(UpdateAction::StartPoller(Poller::Dashboard));
        }
        View::Controls | View::Keys => {
            state.keys.list.begin_loading();
            actions.push(UpdateAction::Fetch(Fetch::IrKeys));
            actions.push(UpdateAction::Fetch(Fetch::AcState));
            actions.push(UpdateAction::Fetch(Fetch::Brands));
        }
        View::Logs => {
            state.logs.text.begin_loading();
            actions.push(UpdateAction::Fetch(Fetch::Logs));
        }
        View::Led => {
            state.led.init_ring(RING_RADIUS);
            state.led.config.begin_loading();
            state.led.system_colors.begin_loading();
            actions.push(UpdateAction::Fetch(Fetch::LedConfig));
            actions.push(UpdateAction::Fetch(Fetch::SystemColors));
        }
        View::Learning => {
            actions.push(UpdateAction::Fetch(Fetch::Brands));
        }
        View::System => {}
    }

    UpdateResult::actions(actions)
}

/// Step through the sidebar's visible views, wrapping.
pub(crate) fn cycle(state: &mut AppState, step: isize) -> UpdateResult {
    let views = state.visible_views();
    let len = views.len() as isize;
    let current = views.iter().position(|v| *v == state.view).unwrap_or(0) as isize;
    let next = views[(current + step).rem_euclid(len) as usize];
    navigate(state, next)
}

/// A poller fired. Each tick re-checks that its owner still wants it.
pub(crate) fn handle_poll_tick(state: &mut AppState, poller: Poller) -> UpdateResult {
    match poller {
        Poller::Dashboard if state.view == View::Dashboard => UpdateResult::fetch(Fetch::Stats),
        Poller::Learn if state.learn.session.is_polling() => {
            UpdateResult::fetch(Fetch::LearnStatus)
        }
        _ => {
            debug!("stale {:?} poll tick, stopping", poller);
            UpdateResult::action(UpdateAction::StopPoller(poller))
        }
    }
}

/// Move the highlight in whichever list the current view focuses.
pub(crate) fn move_selection(state: &mut AppState, step: isize) -> UpdateResult {
    if state.ui_mode() == UiMode::BrandManager {
        let len = state.brands.list.len();
        state.brands.manager_selected = step_index(state.brands.manager_selected, step, len);
        return UpdateResult::none();
    }

    match state.view {
        View::Keys => {
            let len = state.keys.list.loaded().map_or(0, Vec::len);
            state.keys.selected = step_index(state.keys.selected, step, len);
        }
        View::Led => {
            let len = state.led.system_colors.loaded().map_or(0, Vec::len);
            state.led.system_selected = step_index(state.led.system_selected, step, len);
        }
        View::Logs => {
            state.logs.scroll = if step < 0 {
                state.logs.scroll.saturating_sub(step.unsigned_abs() as u16)
            } else {
                state.logs.scroll.saturating_add(step as u16)
            };
        }
        View::System => {
            let len = state.system.networks.loaded().map_or(0, Vec::len);
            state.system.selected = step_index(state.system.selected, step, len);
        }
        View::Dashboard | View::Controls | View::Learning => {}
    }
    UpdateResult::none()
}

/// Wrapping index step; 0 for empty lists.
pub(crate) fn step_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + step).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(0, -1, 3), 2);
        assert_eq!(step_index(2, 1, 3), 0);
        assert_eq!(step_index(5, 1, 0), 0);
    }
}
