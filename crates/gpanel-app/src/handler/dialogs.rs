//! Confirm dialog and text prompt handlers

use crate::prompt::{PromptKind, PromptState};
use crate::state::AppState;

use super::UpdateResult;

/// Close the dialog and forward the chosen option's message.
/// `None` picks the highlighted option.
pub(crate) fn confirm_choose(state: &mut AppState, index: Option<usize>) -> UpdateResult {
    let Some(dialog) = state.confirm.take() else {
        return UpdateResult::none();
    };
    let index = index.unwrap_or(dialog.selected);
    match dialog.choice(index) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

pub(crate) fn confirm_move(state: &mut AppState, step: i32) -> UpdateResult {
    if let Some(dialog) = state.confirm.as_mut() {
        if step < 0 {
            dialog.select_prev();
        } else {
            dialog.select_next();
        }
    }
    UpdateResult::none()
}

pub(crate) fn open_prompt(state: &mut AppState, kind: PromptKind, initial: String) -> UpdateResult {
    state.prompt = Some(PromptState::new(kind, initial));
    UpdateResult::none()
}

pub(crate) fn prompt_edit(state: &mut AppState, edit: impl FnOnce(&mut PromptState)) -> UpdateResult {
    if let Some(prompt) = state.prompt.as_mut() {
        edit(prompt);
    }
    UpdateResult::none()
}

pub(crate) fn prompt_submit(state: &mut AppState) -> UpdateResult {
    match state.prompt.take() {
        Some(prompt) => UpdateResult::message(prompt.into_message()),
        None => UpdateResult::none(),
    }
}
