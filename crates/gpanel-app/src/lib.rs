//! gpanel-app - Application state and orchestration for the Goku control panel
//!
//! Implements the TEA (The Elm Architecture) pattern: a single [`AppState`]
//! model, a [`Message`] enum, `handler::update()` producing
//! [`UpdateAction`]s, and the [`Engine`] that runs those actions against a
//! [`gpanel_gateway::Gateway`].

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod debug_gesture;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod prompt;
pub mod request;
pub mod signals;
pub mod state;
pub mod view;
pub mod view_model;

// Re-export primary types
pub use config::{LocalStore, Settings};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use request::{Fetch, Poller, Pulled, Push};
pub use state::{AppPhase, AppState, UiMode};
pub use view::View;
