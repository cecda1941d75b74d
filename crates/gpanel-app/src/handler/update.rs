//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::notifications::Notifier;
use crate::request::{Fetch, Pulled, Push};
use crate::state::{AppPhase, AppState};
use gpanel_core::Failure;

use super::{
    ac, brands, dashboard, dialogs, ir, keys::handle_key, learn, led, navigation, system,
    UpdateResult,
};

/// Process a message and update state
/// Returns optional follow-up message and/or actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.toasts.expire(Instant::now());
            UpdateResult::none()
        }

        Message::Resize { width, .. } => {
            state.viewport_width = width;
            UpdateResult::none()
        }

        Message::Notify(notification) => {
            state.notify(notification);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(view) => navigation::navigate(state, view),
        Message::NextView => navigation::cycle(state, 1),
        Message::PrevView => navigation::cycle(state, -1),
        Message::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            UpdateResult::none()
        }
        Message::Refresh => {
            let view = state.view;
            navigation::navigate(state, view)
        }
        Message::LogoPressed => dashboard::handle_logo_press(state, Instant::now()),
        Message::PollTick(poller) => navigation::handle_poll_tick(state, poller),

        Message::SelectNext => navigation::move_selection(state, 1),
        Message::SelectPrev => navigation::move_selection(state, -1),

        // ─────────────────────────────────────────────────────────
        // Gateway completions
        // ─────────────────────────────────────────────────────────
        Message::Pulled(pulled) => handle_pulled(state, pulled),
        Message::PullFailed { fetch, failure } => handle_pull_failed(state, fetch, failure),
        Message::Pushed { push, result } => handle_pushed(state, push, result),

        // ─────────────────────────────────────────────────────────
        // AC Control
        // ─────────────────────────────────────────────────────────
        Message::SetPower(on) => ac::set_power(state, on),
        Message::SetMode(mode) => ac::set_mode(state, mode),
        Message::SetTemp(temp) => ac::set_temp(state, temp),
        Message::SetFan(fan) => ac::set_fan(state, fan),
        Message::SelectBrand(value) => ac::select_brand(state, &value),
        Message::FilterBrands(filter) => ac::filter_brands(state, filter),

        // ─────────────────────────────────────────────────────────
        // IR Keys
        // ─────────────────────────────────────────────────────────
        Message::SendKey(key) => ir::send_key(key),
        Message::RequestDeleteKey(key) => ir::request_delete(state, key),
        Message::DeleteKey(key) => ir::delete_key(key),
        Message::RenameKey { old, new } => ir::rename_key(state, old, new),

        // ─────────────────────────────────────────────────────────
        // Learning
        // ─────────────────────────────────────────────────────────
        Message::StartLearn => learn::start(state),
        Message::StopLearn => learn::stop(state),
        Message::LearnFocusNext => {
            state.learn.focus = state.learn.focus.next();
            UpdateResult::none()
        }
        Message::LearnFocusPrev => {
            state.learn.focus = state.learn.focus.prev();
            UpdateResult::none()
        }
        Message::LearnAdjust(step) => learn::adjust(state, step),
        Message::GenerateKeyName => learn::generate_name(state),
        Message::SetKeyName(name) => {
            state.learn.key_name = name;
            UpdateResult::none()
        }
        Message::SaveLearnedKey => learn::save(state),

        // ─────────────────────────────────────────────────────────
        // LED Ring
        // ─────────────────────────────────────────────────────────
        Message::SelectPosition(position) => led::select_position(state, position),
        Message::ApplyColor(hex) => led::apply_color(state, &hex),
        Message::ApplyToAll(hex) => led::apply_to_all(state, &hex),
        Message::SelectSwatch(index) => led::select_swatch(state, index),
        Message::SetCustomColor(hex) => led::set_custom_color(state, &hex),
        Message::SetEffect(tag) => led::set_effect(state, tag),
        Message::SetSpeed(speed) => led::set_speed(state, speed),
        Message::SetBrightness(brightness) => led::set_brightness(state, brightness),
        Message::SaveLedPreset => UpdateResult::push(Push::SaveLedPreset),
        Message::SaveSystemColor { id, hex } => led::save_system_color(state, id, &hex),

        // ─────────────────────────────────────────────────────────
        // Custom Brands
        // ─────────────────────────────────────────────────────────
        Message::OpenBrandManager => {
            state.brands.manager_open = true;
            UpdateResult::fetch(Fetch::Brands)
        }
        Message::CloseBrandManager => {
            state.brands.manager_open = false;
            UpdateResult::none()
        }
        Message::AddBrand(name) => brands::add(state, &name),
        Message::RenameBrand { old, new } => brands::rename(state, old, &new),
        Message::RequestDeleteBrand(name) => brands::request_delete(state, name),
        Message::DeleteBrand(name) => UpdateResult::push(Push::DeleteBrand(name)),

        // ─────────────────────────────────────────────────────────
        // Logs / System
        // ─────────────────────────────────────────────────────────
        Message::ClearLogs => UpdateResult::push(Push::ClearLogs),
        Message::ScanWifi => system::scan(state),
        Message::ChooseNetwork => system::choose_network(state),
        Message::SetWifiSsid(ssid) => {
            state.system.wifi.ssid = ssid.trim().to_string();
            UpdateResult::none()
        }
        Message::SetWifiPassword(password) => {
            state.system.wifi.password = password;
            UpdateResult::none()
        }
        Message::SaveWifi => system::request_save_wifi(state),
        Message::ConfirmSaveWifi => system::save_wifi(state),
        Message::CheckUpdate => system::check_update(state),
        Message::StartUpdate => system::request_start_update(state),
        Message::ConfirmStartUpdate => system::start_update(state),

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::ConfirmChoose(index) => dialogs::confirm_choose(state, Some(index)),
        Message::ConfirmAccept => dialogs::confirm_choose(state, None),
        Message::ConfirmCancel => {
            state.confirm = None;
            UpdateResult::none()
        }
        Message::ConfirmMove(step) => dialogs::confirm_move(state, step),
        Message::OpenPrompt { kind, initial } => dialogs::open_prompt(state, kind, initial),
        Message::PromptInput(c) => dialogs::prompt_edit(state, |p| p.push(c)),
        Message::PromptBackspace => dialogs::prompt_edit(state, |p| p.backspace()),
        Message::PromptClear => dialogs::prompt_edit(state, |p| p.clear()),
        Message::PromptSubmit => dialogs::prompt_submit(state),
        Message::PromptCancel => {
            state.prompt = None;
            UpdateResult::none()
        }
    }
}

fn handle_pulled(state: &mut AppState, pulled: Pulled) -> UpdateResult {
    match pulled {
        Pulled::Stats(stats) => dashboard::apply_stats(state, stats),
        Pulled::AcState(ac_state) => ac::apply_state(state, ac_state),
        Pulled::IrKeys(keys) => ir::apply_keys(state, keys),
        Pulled::Brands(list) => brands::apply_list(state, list),
        Pulled::Logs(text) => system::apply_logs(state, text),
        Pulled::LedConfig(config) => led::apply_config(state, config),
        Pulled::SystemColors(colors) => led::apply_system_colors(state, colors),
        Pulled::LearnStatus(status) => learn::apply_status(state, status),
        Pulled::WifiNetworks(networks) => system::apply_networks(state, networks),
        Pulled::Ota(info) => system::apply_ota(state, info),
    }
}

fn handle_pull_failed(state: &mut AppState, fetch: Fetch, failure: Failure) -> UpdateResult {
    match fetch {
        Fetch::Stats => dashboard::stats_failed(state, &failure),
        Fetch::AcState => ac::state_failed(&failure),
        Fetch::IrKeys => ir::keys_failed(state),
        Fetch::Brands => brands::list_failed(state),
        Fetch::Logs => system::logs_failed(state),
        Fetch::LedConfig => led::config_failed(state),
        Fetch::SystemColors => led::system_colors_failed(state),
        Fetch::LearnStatus => learn::status_failed(&failure),
        Fetch::WifiScan => system::scan_failed(state),
        Fetch::OtaCheck => system::ota_check_failed(state),
    }
}

fn handle_pushed(state: &mut AppState, push: Push, result: Result<(), Failure>) -> UpdateResult {
    match push {
        Push::SetAc(_) => ac::set_ac_done(state, result),
        Push::SendKey(key) => ir::send_done(state, &key, result),
        Push::DeleteKey(key) => ir::delete_done(state, &key, result),
        Push::RenameKey { new, .. } => ir::rename_done(state, &new, result),
        Push::SaveLearnedKey(_) => learn::save_done(state, result),
        Push::StartLearn => learn::start_done(state, result),
        Push::StopLearn => learn::stop_done(result),
        Push::Led(_) => led::push_done(state, result),
        Push::SystemColor { .. } => led::system_color_done(state, result),
        Push::SaveLedPreset => led::preset_done(state, result),
        Push::AddBrand(name) => brands::add_done(state, &name, result),
        Push::RenameBrand { new, .. } => brands::rename_done(state, &new, result),
        Push::DeleteBrand(name) => brands::delete_done(state, &name, result),
        Push::WifiConfig { .. } => system::wifi_done(state, result),
        Push::OtaStart => system::update_done(state, result),
        Push::ClearLogs => system::clear_logs_done(state, result),
    }
}
