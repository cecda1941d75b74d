//! Key event handlers for different UI modes

use gpanel_core::{decode_brand_name, LedEffect, PALETTE, RING_SIZE};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::prompt::PromptKind;
use crate::state::{AppState, UiMode};
use crate::view::View;
use crate::view_model;

use super::navigation::step_index;

/// Step used by the speed and brightness keys.
const LEVEL_STEP: i32 = 5;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Prompt => handle_key_prompt(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::BrandManager => handle_key_brand_manager(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::PromptSubmit),
        InputKey::Esc => Some(Message::PromptCancel),
        InputKey::Backspace => Some(Message::PromptBackspace),
        InputKey::CharCtrl('u') => Some(Message::PromptClear),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::PromptInput(c)),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') => Some(Message::ConfirmChoose(0)),
        InputKey::Enter => Some(Message::ConfirmAccept),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::ConfirmCancel),
        InputKey::Left | InputKey::BackTab => Some(Message::ConfirmMove(-1)),
        InputKey::Right | InputKey::Tab => Some(Message::ConfirmMove(1)),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_brand_manager(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state.brands.selected_in_manager().map(str::to_string);
    match key {
        InputKey::Esc | InputKey::Char('e' | 'q') => Some(Message::CloseBrandManager),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Char('a') => Some(Message::OpenPrompt {
            kind: PromptKind::AddBrand,
            initial: String::new(),
        }),
        InputKey::Char('r') => selected.map(|old| Message::OpenPrompt {
            initial: decode_brand_name(&old),
            kind: PromptKind::RenameBrand { old },
        }),
        InputKey::Char('d') | InputKey::Delete => selected.map(Message::RequestDeleteBrand),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::NextView),
        InputKey::BackTab => return Some(Message::PrevView),
        InputKey::Char('\\') => return Some(Message::ToggleSidebar),
        InputKey::Char('g') => return Some(Message::LogoPressed),
        InputKey::Char('r') => return Some(Message::Refresh),
        InputKey::F(n) if (1..=View::ALL.len() as u8).contains(&n) => {
            return Some(Message::Navigate(View::ALL[usize::from(n) - 1]));
        }
        _ => {}
    }

    match state.view {
        View::Dashboard => None,
        View::Controls => handle_key_controls(state, key),
        View::Keys => handle_key_keys(state, key),
        View::Learning => handle_key_learning(state, key),
        View::Led => handle_key_led(state, key),
        View::Logs => handle_key_logs(key),
        View::System => handle_key_system(state, key),
    }
}

fn handle_key_controls(state: &AppState, key: InputKey) -> Option<Message> {
    let ac = &state.ac.mirror;
    match key {
        InputKey::Char('o') => Some(Message::SetPower(true)),
        InputKey::Char('x') => Some(Message::SetPower(false)),
        InputKey::Char('m') => Some(Message::SetMode(ac.mode.next())),
        InputKey::Char('M') => Some(Message::SetMode(ac.mode.prev())),
        InputKey::Char('+' | '=') | InputKey::Up => Some(Message::SetTemp(i32::from(ac.temp) + 1)),
        InputKey::Char('-') | InputKey::Down => Some(Message::SetTemp(i32::from(ac.temp) - 1)),
        InputKey::Char('n') => Some(Message::SetFan(ac.fan.next())),
        InputKey::Char('N') => Some(Message::SetFan(ac.fan.prev())),
        InputKey::Char('b') => view_model::step_ac_brand(state, 1).map(Message::SelectBrand),
        InputKey::Char('v') => view_model::step_ac_brand(state, -1).map(Message::SelectBrand),
        InputKey::Char('/') => Some(Message::OpenPrompt {
            kind: PromptKind::BrandFilter,
            initial: state.brands.filter.clone(),
        }),
        InputKey::Char('e') => Some(Message::OpenBrandManager),
        _ => None,
    }
}

fn handle_key_keys(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = state.keys.selected_key().map(str::to_string);
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter | InputKey::Char('s') => selected.map(Message::SendKey),
        InputKey::Char('d') | InputKey::Delete => selected.map(Message::RequestDeleteKey),
        InputKey::Char('n') => selected.map(|old| Message::OpenPrompt {
            initial: old.clone(),
            kind: PromptKind::RenameKey { old },
        }),
        _ => None,
    }
}

fn handle_key_learning(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') => Some(Message::StartLearn),
        InputKey::Char('x') => Some(Message::StopLearn),
        InputKey::Up => Some(Message::LearnFocusPrev),
        InputKey::Down => Some(Message::LearnFocusNext),
        InputKey::Left => Some(Message::LearnAdjust(-1)),
        InputKey::Right => Some(Message::LearnAdjust(1)),
        InputKey::Char('k') => Some(Message::GenerateKeyName),
        InputKey::Char('n') => Some(Message::OpenPrompt {
            kind: PromptKind::KeyName,
            initial: state.learn.key_name.clone(),
        }),
        InputKey::Enter if state.learn.session.save_form_visible() => {
            Some(Message::SaveLearnedKey)
        }
        _ => None,
    }
}

fn handle_key_led(state: &AppState, key: InputKey) -> Option<Message> {
    let led = &state.led;
    if let Some(d) = key.digit() {
        return match d {
            0 => Some(Message::SelectPosition(None)),
            n if (n as usize) <= RING_SIZE => Some(Message::SelectPosition(Some(n as usize - 1))),
            _ => None,
        };
    }

    match key {
        InputKey::Left | InputKey::Right => {
            let step = if key == InputKey::Left { -1 } else { 1 };
            let next = match led.selected {
                Some(i) => step_index(i, step, RING_SIZE),
                None => 0,
            };
            Some(Message::SelectPosition(Some(next)))
        }
        InputKey::Up => Some(Message::SelectPrev),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Char(',') => Some(Message::SelectSwatch(step_index(led.swatch, -1, PALETTE.len()))),
        InputKey::Char('.') => Some(Message::SelectSwatch(step_index(led.swatch, 1, PALETTE.len()))),
        InputKey::Char('c') => Some(Message::OpenPrompt {
            kind: PromptKind::CustomColor,
            initial: led.picked_color().to_hex(),
        }),
        InputKey::Enter => Some(Message::ApplyColor(led.picked_color().to_hex())),
        InputKey::Char('a') => Some(Message::ApplyToAll(led.picked_color().to_hex())),
        InputKey::Char('e') => Some(Message::SetEffect(step_effect(&led.effect, 1))),
        InputKey::Char('E') => Some(Message::SetEffect(step_effect(&led.effect, -1))),
        InputKey::Char('+' | '=') => Some(Message::SetSpeed(i32::from(led.speed) + LEVEL_STEP)),
        InputKey::Char('-') => Some(Message::SetSpeed(i32::from(led.speed) - LEVEL_STEP)),
        InputKey::Char('>') => {
            Some(Message::SetBrightness(i32::from(led.brightness) + LEVEL_STEP))
        }
        InputKey::Char('<') => {
            Some(Message::SetBrightness(i32::from(led.brightness) - LEVEL_STEP))
        }
        InputKey::Char('p') => Some(Message::SaveLedPreset),
        InputKey::Char('s') => led.selected_system_color().map(|c| Message::OpenPrompt {
            kind: PromptKind::SystemColor { id: c.id },
            initial: c.color().to_hex(),
        }),
        _ => None,
    }
}

/// Neighbouring effect tag in tab order. Unknown tags restart at the first.
fn step_effect(current: &str, step: isize) -> String {
    let effects = LedEffect::ALL;
    let next = match effects.iter().position(|e| e.tag() == current) {
        Some(i) => step_index(i, step, effects.len()),
        None => 0,
    };
    effects[next].tag().to_string()
}

fn handle_key_logs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Char('c') => Some(Message::ClearLogs),
        _ => None,
    }
}

fn handle_key_system(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') => Some(Message::ScanWifi),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::ChooseNetwork),
        InputKey::Char('i') => Some(Message::OpenPrompt {
            kind: PromptKind::WifiSsid,
            initial: state.system.wifi.ssid.clone(),
        }),
        InputKey::Char('w') => Some(Message::OpenPrompt {
            kind: PromptKind::WifiPassword,
            initial: String::new(),
        }),
        InputKey::Char('W') => Some(Message::SaveWifi),
        InputKey::Char('u') => Some(Message::CheckUpdate),
        InputKey::Char('U') => Some(Message::StartUpdate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_effect_wraps() {
        assert_eq!(step_effect("static", -1), "auto_cycle");
        assert_eq!(step_effect("auto_cycle", 1), "static");
        assert_eq!(step_effect("mystery", 1), "static");
    }
}
