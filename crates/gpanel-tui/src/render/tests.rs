//! Full-screen render tests
//!
//! Each test draws the whole frame for one view or overlay and checks what
//! a user would see.

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};
use gpanel_app::confirm_dialog::ConfirmDialogState;
use gpanel_app::message::Message;
use gpanel_app::notifications::Notifier;
use gpanel_app::prompt::{PromptKind, PromptState};
use gpanel_app::state::{AppState, Remote};
use gpanel_app::view::View;
use gpanel_core::led::RING_RADIUS;
use gpanel_core::Notification;
use gpanel_gateway::test_utils::sample_stats;

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_every_view_renders() {
    let mut state = create_test_state();
    state.led.init_ring(RING_RADIUS);
    for view_kind in View::ALL {
        state.view = view_kind;
        let term = render_screen(&state);
        assert!(
            term.buffer_contains(view_kind.title()),
            "{} title missing",
            view_kind.id()
        );
    }
}

#[test]
fn test_dashboard_with_stats() {
    let mut state = create_test_state();
    state.dashboard.apply_stats(sample_stats());
    let term = render_screen(&state);
    assert!(term.buffer_contains("42.5°C"));
    assert!(term.buffer_contains("Goku Panel"));
}

#[test]
fn test_collapsed_sidebar_hides_nav() {
    let mut state = create_test_state();
    state.view = View::Logs;
    state.logs.text = Remote::Loaded("boot ok".to_string());
    assert!(render_screen(&state).buffer_contains("F1"));

    state.sidebar_open = false;
    let term = render_screen(&state);
    assert!(!term.buffer_contains("F1"));
    assert!(term.buffer_contains("boot ok"));
}

#[test]
fn test_confirm_overlay() {
    let mut state = create_test_state();
    state.confirm = Some(ConfirmDialogState::confirm(
        "Firmware",
        "Start Firmware Update? Device will reboot.",
        "Update",
        Message::ConfirmStartUpdate,
    ));
    let term = render_screen(&state);
    assert!(term.buffer_contains("Start Firmware Update? Device will reboot."));
    assert!(term.buffer_contains("y confirm"));
}

#[test]
fn test_prompt_overlay_wins_over_brand_manager() {
    let mut state = create_test_state();
    state.view = View::Controls;
    state.brands.manager_open = true;
    state.prompt = Some(PromptState::new(PromptKind::AddBrand, "Gree"));
    let term = render_screen(&state);
    assert!(term.buffer_contains("New custom brand"));
    assert!(!term.buffer_contains("Custom brands (0/20)"));
}

#[test]
fn test_brand_manager_overlay() {
    let mut state = create_test_state();
    state.view = View::Controls;
    state.brands.manager_open = true;
    state.brands.list = vec!["Gree".to_string()];
    let term = render_screen(&state);
    assert!(term.buffer_contains("Custom brands (1/20)"));
}

#[test]
fn test_toasts_drawn_over_content() {
    let mut state = create_test_state();
    state.notify(Notification::error("Error setting AC"));
    let term = render_screen(&state);
    assert!(term.buffer_contains("✗ Error setting AC"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = create_test_state();
    state.led.init_ring(RING_RADIUS);
    state.notify(Notification::info("hello"));
    for view_kind in View::ALL {
        state.view = view_kind;
        let mut term = TestTerminal::with_size(30, 10);
        term.draw_with(|frame| view(frame, &state));
    }
}
