//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode and view
//! - `navigation`: View router and per-view refresh side effects
//! - `dashboard`: Stats, trends and the debug-mode gesture
//! - `ac`: AC mirror and command dispatch
//! - `ir`: IR key list, send/delete/rename
//! - `learn`: Learn session and key-name generator
//! - `led`: Ring editor, effects and system colors
//! - `brands`: Custom brand manager
//! - `system`: Logs, Wi-Fi and firmware update
//! - `dialogs`: Confirm dialog and text prompt

pub(crate) mod ac;
pub(crate) mod brands;
pub(crate) mod dashboard;
pub(crate) mod dialogs;
pub(crate) mod ir;
pub(crate) mod keys;
pub(crate) mod learn;
pub(crate) mod led;
pub(crate) mod navigation;
pub(crate) mod system;
pub(crate) mod update;


use crate::message::Message;
use crate::request::{Fetch, Poller, Push};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Pull one resource; completes with `Message::Pulled` or `PullFailed`
    Fetch(Fetch),
    /// Send one state-changing request; completes with `Message::Pushed`
    Push(Push),
    /// Start a poller unless it is already running
    StartPoller(Poller),
    StopPoller(Poller),
    /// Write the debug flag to the local store
    PersistDebugMode(bool),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    pub fn fetch(fetch: Fetch) -> Self {
        Self::action(UpdateAction::Fetch(fetch))
    }

    pub fn push(push: Push) -> Self {
        Self::action(UpdateAction::Push(push))
    }

    /// Append the actions of `other`. A follow-up message in `other` wins
    /// only if this result has none.
    pub fn merge(mut self, other: UpdateResult) -> Self {
        self.actions.extend(other.actions);
        if self.message.is_none() {
            self.message = other.message;
        }
        self
    }
}
