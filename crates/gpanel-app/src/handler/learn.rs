//! IR learn session and the key-name generator

use gpanel_core::{
    clamp_temp, generate_key_name, Failure, LearnStatus, Notification, PollDecision,
};
use tracing::{debug, warn};

use crate::notifications::Notifier;
use crate::request::{Fetch, Poller, Push};
use crate::state::{AppState, LearnField};
use crate::view_model;

use super::{navigation::step_index, UpdateAction, UpdateResult};

pub(crate) const NAME_REQUIRED: &str = "Enter a key name";
pub(crate) const SAVED: &str = "Saved!";
pub(crate) const SAVE_FAILED: &str = "Failed to save";

pub(crate) fn start(state: &mut AppState) -> UpdateResult {
    state.learn.session.start();
    state.learn.form_message = None;
    UpdateResult::actions(vec![
        UpdateAction::Push(Push::StartLearn),
        UpdateAction::StartPoller(Poller::Learn),
    ])
}

pub(crate) fn stop(state: &mut AppState) -> UpdateResult {
    state.learn.session.stop();
    UpdateResult::actions(vec![
        UpdateAction::Push(Push::StopLearn),
        UpdateAction::StopPoller(Poller::Learn),
    ])
}

/// The device never opened the session.
pub(crate) fn start_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => UpdateResult::none(),
        Err(f) => {
            warn!("learn start failed: {}", f);
            state.learn.session.stop();
            state.notify(Notification::error("Failed to start learning"));
            UpdateResult::action(UpdateAction::StopPoller(Poller::Learn))
        }
    }
}

pub(crate) fn stop_done(result: Result<(), Failure>) -> UpdateResult {
    if let Err(f) = result {
        warn!("learn stop failed: {}", f);
    }
    UpdateResult::none()
}

pub(crate) fn apply_status(state: &mut AppState, status: LearnStatus) -> UpdateResult {
    match state.learn.session.apply_status(status) {
        PollDecision::Continue => UpdateResult::none(),
        PollDecision::Stop => UpdateResult::action(UpdateAction::StopPoller(Poller::Learn)),
    }
}

/// Polling keeps going; the next tick retries.
pub(crate) fn status_failed(failure: &Failure) -> UpdateResult {
    debug!("learn status pull failed: {}", failure);
    UpdateResult::none()
}

/// Step the focused generator field by `step`.
pub(crate) fn adjust(state: &mut AppState, step: i32) -> UpdateResult {
    let learn = &mut state.learn;
    match learn.focus {
        LearnField::Brand => {
            let len = view_model::learn_brand_options(&state.brands.list).len();
            learn.brand_index = step_index(learn.brand_index, step as isize, len);
        }
        LearnField::Mode => {
            for _ in 0..step.unsigned_abs() {
                learn.mode = if step > 0 { learn.mode.next() } else { learn.mode.prev() };
            }
        }
        LearnField::Temp => {
            learn.temp = clamp_temp(i32::from(learn.temp) + step);
        }
        LearnField::Fan => {
            for _ in 0..step.unsigned_abs() {
                learn.fan = if step > 0 { learn.fan.next() } else { learn.fan.prev() };
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn generate_name(state: &mut AppState) -> UpdateResult {
    if let Some(brand) = view_model::learn_brand_value(state) {
        let learn = &mut state.learn;
        learn.key_name = generate_key_name(&brand, learn.mode, learn.temp, learn.fan);
    }
    UpdateResult::none()
}

pub(crate) fn save(state: &mut AppState) -> UpdateResult {
    let name = state.learn.key_name.trim().to_string();
    if name.is_empty() {
        state.learn.form_message = Some(NAME_REQUIRED.to_string());
        return UpdateResult::none();
    }
    state.learn.form_message = None;
    UpdateResult::push(Push::SaveLearnedKey(name))
}

pub(crate) fn save_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => {
            state.learn.session.saved();
            state.learn.key_name.clear();
            state.learn.form_message = Some(SAVED.to_string());
            state.notify(Notification::success(SAVED));
            UpdateResult::actions(vec![
                UpdateAction::StopPoller(Poller::Learn),
                UpdateAction::Fetch(Fetch::IrKeys),
            ])
        }
        Err(f) => {
            warn!("save learned key failed: {}", f);
            state.learn.form_message = Some(SAVE_FAILED.to_string());
            state.notify(Notification::error(SAVE_FAILED));
            UpdateResult::none()
        }
    }
}
