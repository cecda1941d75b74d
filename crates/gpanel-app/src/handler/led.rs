//! LED ring editor, effects and named system colors
//!
//! Ring positions and system colors are separate device resources with
//! separate mirrors; nothing here writes one from the other.

use gpanel_core::led::{BRIGHTNESS_MAX, BRIGHTNESS_MIN, SPEED_MAX, SPEED_MIN};
use gpanel_core::{Failure, LedConfig, LedTarget, Notification, Rgb, SystemColor, PALETTE, RING_SIZE};
use gpanel_gateway::LedPush;
use tracing::warn;

use crate::notifications::Notifier;
use crate::request::Push;
use crate::state::{AppState, Remote};

use super::UpdateResult;

pub(crate) const PRESET_SAVED: &str = "LED preset saved to device!";
pub(crate) const PRESET_REJECTED: &str = "Failed to save preset";
pub(crate) const COLORS_FAILED: &str = "Error loading colors";
pub(crate) const SYSTEM_COLOR_FAILED: &str = "Failed to save color";
pub(crate) const CONFIG_FAILED: &str = "Failed to load LED config";

fn parse_color(state: &mut AppState, hex: &str) -> Option<Rgb> {
    match Rgb::from_hex(hex) {
        Ok(color) => Some(color),
        Err(e) => {
            state.notify(Notification::error(e.to_string()));
            None
        }
    }
}

pub(crate) fn select_position(state: &mut AppState, position: Option<usize>) -> UpdateResult {
    state.led.selected = position.filter(|i| *i < RING_SIZE);
    UpdateResult::none()
}

/// Color the selected position. Does nothing without a selection.
pub(crate) fn apply_color(state: &mut AppState, hex: &str) -> UpdateResult {
    let Some(target) = state.led.selected_target() else {
        return UpdateResult::none();
    };
    let Some(color) = parse_color(state, hex) else {
        return UpdateResult::none();
    };
    push_color(state, target, color)
}

pub(crate) fn apply_to_all(state: &mut AppState, hex: &str) -> UpdateResult {
    let Some(color) = parse_color(state, hex) else {
        return UpdateResult::none();
    };
    push_color(state, LedTarget::All, color)
}

fn push_color(state: &mut AppState, target: LedTarget, color: Rgb) -> UpdateResult {
    state.led.colors.apply(target, color);
    UpdateResult::push(Push::Led(LedPush::Color {
        effect: state.led.effect.clone(),
        target,
        color,
    }))
}

pub(crate) fn select_swatch(state: &mut AppState, index: usize) -> UpdateResult {
    if index < PALETTE.len() {
        state.led.swatch = index;
        state.led.custom_color = None;
    }
    UpdateResult::none()
}

pub(crate) fn set_custom_color(state: &mut AppState, hex: &str) -> UpdateResult {
    if let Some(color) = parse_color(state, hex) {
        state.led.custom_color = Some(color);
    }
    UpdateResult::none()
}

fn push_settings(state: &AppState) -> UpdateResult {
    UpdateResult::push(Push::Led(LedPush::Settings {
        effect: state.led.effect.clone(),
        speed: state.led.speed,
        brightness: state.led.brightness,
    }))
}

pub(crate) fn set_effect(state: &mut AppState, tag: String) -> UpdateResult {
    state.led.effect = tag;
    push_settings(state)
}

pub(crate) fn set_speed(state: &mut AppState, speed: i32) -> UpdateResult {
    state.led.speed = speed.clamp(i32::from(SPEED_MIN), i32::from(SPEED_MAX)) as u8;
    push_settings(state)
}

pub(crate) fn set_brightness(state: &mut AppState, brightness: i32) -> UpdateResult {
    state.led.brightness =
        brightness.clamp(i32::from(BRIGHTNESS_MIN), i32::from(BRIGHTNESS_MAX)) as u8;
    push_settings(state)
}

pub(crate) fn apply_config(state: &mut AppState, config: LedConfig) -> UpdateResult {
    state.led.effect = config.effect;
    state.led.speed = config.speed;
    state.led.brightness = config.brightness;
    if let Some(colors) = config.colors {
        state.led.colors.replace_from(&colors);
    }
    state.led.config = Remote::Loaded(());
    UpdateResult::none()
}

pub(crate) fn config_failed(state: &mut AppState) -> UpdateResult {
    state.led.config = Remote::Failed(CONFIG_FAILED.to_string());
    UpdateResult::none()
}

/// Runtime pushes report nothing on success.
pub(crate) fn push_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    if let Err(f) = result {
        warn!("LED push failed: {}", f);
        state.notify(Notification::error("Failed to update LEDs"));
    }
    UpdateResult::none()
}

pub(crate) fn preset_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    match result {
        Ok(()) => state.notify(Notification::success(PRESET_SAVED)),
        Err(f) if f.is_rejected() => state.notify(Notification::error(PRESET_REJECTED)),
        Err(f) => state.notify(Notification::error(format!("Error saving preset: {f}"))),
    }
    UpdateResult::none()
}

pub(crate) fn apply_system_colors(state: &mut AppState, colors: Vec<SystemColor>) -> UpdateResult {
    if state.led.system_selected >= colors.len() {
        state.led.system_selected = colors.len().saturating_sub(1);
    }
    state.led.system_colors = Remote::Loaded(colors);
    UpdateResult::none()
}

pub(crate) fn system_colors_failed(state: &mut AppState) -> UpdateResult {
    state.led.system_colors = Remote::Failed(COLORS_FAILED.to_string());
    UpdateResult::none()
}

/// Update the named color locally and push it by id.
pub(crate) fn save_system_color(state: &mut AppState, id: u32, hex: &str) -> UpdateResult {
    let Some(color) = parse_color(state, hex) else {
        return UpdateResult::none();
    };
    if let Some(entry) = state
        .led
        .system_colors
        .loaded_mut()
        .and_then(|list| list.iter_mut().find(|c| c.id == id))
    {
        entry.set_color(color);
    }
    UpdateResult::push(Push::SystemColor { id, color })
}

pub(crate) fn system_color_done(state: &mut AppState, result: Result<(), Failure>) -> UpdateResult {
    if let Err(f) = result {
        warn!("system color push failed: {}", f);
        state.notify(Notification::error(SYSTEM_COLOR_FAILED));
    }
    UpdateResult::none()
}
