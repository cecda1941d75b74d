//! Application state (Model in TEA pattern)
//!
//! One struct owns every local mirror of device state. Mirrors are filled by
//! pulls when their view is entered and overwritten on the next pull; there
//! is no other invalidation.

use gpanel_core::led::{BRIGHTNESS_DEFAULT, SPEED_DEFAULT};
use gpanel_core::{
    ring_geometry, AcMode, AcState, FanSpeed, LearnSession, LedTarget, Notification, OtaInfo,
    Rgb, RingColors, RingPoint, SystemColor, SystemStats, Trend, WifiCredentials, WifiNetwork,
    PALETTE, RING_SIZE,
};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::debug_gesture::DebugGesture;
use crate::notifications::{Notifier, ToastQueue};
use crate::prompt::PromptState;
use crate::view::View;

/// Assumed terminal width until the first resize event.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which layer receives key input. Derived from state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    BrandManager,
    ConfirmDialog,
    Prompt,
}

/// A mirror that is filled by a pull.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    /// Placeholder text to show instead of data
    Failed(String),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    /// Mark as loading without discarding data already on screen.
    pub fn begin_loading(&mut self) {
        if !matches!(self, Remote::Loaded(_)) {
            *self = Remote::Loading;
        }
    }
}

// ─────────────────────────────────────────────────────────────
// Per-view state
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: Option<SystemStats>,
    pub ram_trend: Trend,
    pub rssi_trend: Trend,
    /// Last stats failure, kept for the debug footer
    pub last_error: Option<String>,
    /// Device reported the LED ring as disabled
    pub led_nav_hidden: bool,
}

impl DashboardState {
    pub fn apply_stats(&mut self, stats: SystemStats) {
        self.ram_trend.record(stats.ram);
        self.rssi_trend.record(f64::from(stats.rssi));
        self.led_nav_hidden = stats.led_hidden();
        self.last_error = None;
        self.stats = Some(stats);
    }
}

#[derive(Debug, Clone, Default)]
pub struct AcPanelState {
    pub mirror: AcState,
    /// Mirror has been filled from the device at least once
    pub synced: bool,
}

#[derive(Debug, Clone, Default)]
pub struct KeysState {
    pub list: Remote<Vec<String>>,
    pub selected: usize,
}

impl KeysState {
    pub fn selected_key(&self) -> Option<&str> {
        self.list
            .loaded()
            .and_then(|keys| keys.get(self.selected))
            .map(String::as_str)
    }
}

/// Focusable fields of the key-name generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LearnField {
    #[default]
    Brand,
    Mode,
    Temp,
    Fan,
}

impl LearnField {
    pub const ALL: [LearnField; 4] = [
        LearnField::Brand,
        LearnField::Mode,
        LearnField::Temp,
        LearnField::Fan,
    ];

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct LearnState {
    pub session: LearnSession,
    pub focus: LearnField,
    /// Index into the learning brand options
    pub brand_index: usize,
    pub mode: AcMode,
    pub temp: u8,
    pub fan: FanSpeed,
    pub key_name: String,
    /// Inline result of the last save attempt
    pub form_message: Option<String>,
}

impl Default for LearnState {
    fn default() -> Self {
        Self {
            session: LearnSession::default(),
            focus: LearnField::default(),
            brand_index: 0,
            mode: AcMode::Cool,
            temp: 24,
            fan: FanSpeed::Auto,
            key_name: String::new(),
            form_message: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LedState {
    pub colors: RingColors,
    /// Filled on first entry to the view
    pub geometry: Option<[RingPoint; RING_SIZE]>,
    pub selected: Option<usize>,
    pub effect: String,
    pub speed: u8,
    pub brightness: u8,
    pub config: Remote<()>,
    pub swatch: usize,
    /// Overrides the palette swatch when set
    pub custom_color: Option<Rgb>,
    pub system_colors: Remote<Vec<SystemColor>>,
    pub system_selected: usize,
}

impl Default for LedState {
    fn default() -> Self {
        Self {
            colors: RingColors::default(),
            geometry: None,
            selected: None,
            effect: gpanel_core::LedEffect::Static.tag().to_string(),
            speed: SPEED_DEFAULT,
            brightness: BRIGHTNESS_DEFAULT,
            config: Remote::NotLoaded,
            swatch: 0,
            custom_color: None,
            system_colors: Remote::NotLoaded,
            system_selected: 0,
        }
    }
}

impl LedState {
    pub fn init_ring(&mut self, radius: f64) {
        self.geometry = Some(ring_geometry(radius));
    }

    /// Color currently picked in the editor.
    pub fn picked_color(&self) -> Rgb {
        self.custom_color.unwrap_or_else(|| {
            PALETTE
                .get(self.swatch)
                .and_then(|hex| Rgb::from_hex(hex).ok())
                .unwrap_or(Rgb::WHITE)
        })
    }

    pub fn selected_target(&self) -> Option<LedTarget> {
        self.selected
            .and_then(|i| u8::try_from(i).ok())
            .map(LedTarget::Position)
    }

    pub fn selected_system_color(&self) -> Option<&SystemColor> {
        self.system_colors
            .loaded()
            .and_then(|list| list.get(self.system_selected))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrandsState {
    /// Raw custom brand names as stored on the device
    pub list: Vec<String>,
    pub filter: String,
    pub manager_open: bool,
    pub manager_selected: usize,
}

impl BrandsState {
    pub fn selected_in_manager(&self) -> Option<&str> {
        self.list.get(self.manager_selected).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogsState {
    pub text: Remote<String>,
    pub scroll: u16,
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub networks: Remote<Vec<WifiNetwork>>,
    pub selected: usize,
    pub wifi: WifiCredentials,
    /// Status line for the firmware section
    pub ota_status: Option<String>,
    pub ota: Option<OtaInfo>,
}

// ─────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub view: View,
    pub sidebar_open: bool,
    pub viewport_width: u16,
    pub settings: Settings,
    pub debug_mode: bool,
    pub debug_gesture: DebugGesture,

    pub dashboard: DashboardState,
    pub ac: AcPanelState,
    pub keys: KeysState,
    pub learn: LearnState,
    pub led: LedState,
    pub brands: BrandsState,
    pub logs: LogsState,
    pub system: SystemState,

    pub toasts: ToastQueue,
    pub confirm: Option<ConfirmDialogState>,
    pub prompt: Option<PromptState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), false)
    }
}

impl AppState {
    pub fn new(settings: Settings, debug_mode: bool) -> Self {
        let toasts = ToastQueue::new(settings.ui.toast_duration());
        Self {
            phase: AppPhase::Running,
            view: View::Dashboard,
            sidebar_open: true,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            settings,
            debug_mode,
            debug_gesture: DebugGesture::default(),
            dashboard: DashboardState::default(),
            ac: AcPanelState::default(),
            keys: KeysState::default(),
            learn: LearnState::default(),
            led: LedState::default(),
            brands: BrandsState::default(),
            logs: LogsState::default(),
            system: SystemState::default(),
            toasts,
            confirm: None,
            prompt: None,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.prompt.is_some() {
            UiMode::Prompt
        } else if self.confirm.is_some() {
            UiMode::ConfirmDialog
        } else if self.brands.manager_open {
            UiMode::BrandManager
        } else {
            UiMode::Normal
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_narrow(&self) -> bool {
        self.viewport_width <= self.settings.ui.narrow_width
    }

    /// Views reachable from the sidebar.
    pub fn visible_views(&self) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|v| !(*v == View::Led && self.dashboard.led_nav_hidden))
            .collect()
    }

}

impl Notifier for AppState {
    fn notify(&mut self, notification: Notification) {
        self.toasts.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpanel_gateway::test_utils::sample_stats;

    #[test]
    fn test_ui_mode_priority() {
        let mut state = AppState::default();
        assert_eq!(state.ui_mode(), UiMode::Normal);

        state.brands.manager_open = true;
        assert_eq!(state.ui_mode(), UiMode::BrandManager);

        state.confirm = Some(ConfirmDialogState::confirm(
            "t",
            "m",
            "OK",
            crate::message::Message::Refresh,
        ));
        assert_eq!(state.ui_mode(), UiMode::ConfirmDialog);

        state.prompt = Some(PromptState::new(crate::prompt::PromptKind::AddBrand, ""));
        assert_eq!(state.ui_mode(), UiMode::Prompt);
    }

    #[test]
    fn test_remote_begin_loading_keeps_data() {
        let mut r: Remote<Vec<String>> = Remote::NotLoaded;
        r.begin_loading();
        assert!(r.is_loading());

        r = Remote::Loaded(vec!["a".into()]);
        r.begin_loading();
        assert_eq!(r.loaded().map(Vec::len), Some(1));
    }

    #[test]
    fn test_dashboard_records_both_trends() {
        let mut dash = DashboardState::default();
        dash.apply_stats(sample_stats());
        assert_eq!(dash.ram_trend.latest(), Some(37.0));
        assert_eq!(dash.rssi_trend.latest(), Some(-61.0));
        assert!(!dash.led_nav_hidden);
    }

    #[test]
    fn test_led_hidden_removes_led_view() {
        let mut state = AppState::default();
        assert!(state.visible_views().contains(&View::Led));
        state.dashboard.led_nav_hidden = true;
        assert!(!state.visible_views().contains(&View::Led));
        assert_eq!(state.visible_views().len(), 6);
    }

    #[test]
    fn test_picked_color_prefers_custom() {
        let mut led = LedState::default();
        assert_eq!(led.picked_color(), Rgb::new(0xef, 0x44, 0x44));
        led.custom_color = Some(Rgb::new(1, 2, 3));
        assert_eq!(led.picked_color(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_learn_field_cycles() {
        assert_eq!(LearnField::Fan.next(), LearnField::Brand);
        assert_eq!(LearnField::Brand.prev(), LearnField::Fan);
    }
}
