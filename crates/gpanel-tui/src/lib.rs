//! gpanel-tui - Terminal UI for the Goku control panel
//!
//! Renders `gpanel_app::AppState` with ratatui and feeds crossterm input
//! back into the [`gpanel_app::Engine`].

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
