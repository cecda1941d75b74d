//! Message types for the application (TEA pattern)

use gpanel_core::{Failure, Notification};

use crate::input_key::InputKey;
use crate::prompt::PromptKind;
use crate::request::{Fetch, Poller, Pulled, Push};
use crate::view::View;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Terminal size changed
    Resize { width: u16, height: u16 },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Show a view and refresh the data it depends on
    Navigate(View),
    NextView,
    PrevView,
    ToggleSidebar,
    /// Re-run the current view's refresh
    Refresh,
    /// One press of the logo (debug-mode gesture)
    LogoPressed,

    // ─────────────────────────────────────────────────────────
    // Gateway completions
    // ─────────────────────────────────────────────────────────
    Pulled(Pulled),
    PullFailed { fetch: Fetch, failure: Failure },
    Pushed {
        push: Push,
        result: Result<(), Failure>,
    },
    /// A background poller fired
    PollTick(Poller),

    // ─────────────────────────────────────────────────────────
    // List selection (applies to the focused list of the view)
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrev,

    // ─────────────────────────────────────────────────────────
    // AC Control
    // ─────────────────────────────────────────────────────────
    SetPower(bool),
    SetMode(gpanel_core::AcMode),
    SetTemp(i32),
    SetFan(gpanel_core::FanSpeed),
    /// Select a brand by its option value (`"2"`, `"custom_Gree"`)
    SelectBrand(String),
    /// Narrow the AC brand options
    FilterBrands(String),

    // ─────────────────────────────────────────────────────────
    // IR Keys
    // ─────────────────────────────────────────────────────────
    SendKey(String),
    RequestDeleteKey(String),
    DeleteKey(String),
    RenameKey { old: String, new: String },

    // ─────────────────────────────────────────────────────────
    // Learning
    // ─────────────────────────────────────────────────────────
    StartLearn,
    StopLearn,
    /// Move focus between the key-name generator fields
    LearnFocusNext,
    LearnFocusPrev,
    /// Step the focused generator field
    LearnAdjust(i32),
    GenerateKeyName,
    SetKeyName(String),
    SaveLearnedKey,

    // ─────────────────────────────────────────────────────────
    // LED Ring
    // ─────────────────────────────────────────────────────────
    /// Select one ring position, or none
    SelectPosition(Option<usize>),
    /// Color the selected position
    ApplyColor(String),
    /// Color every position
    ApplyToAll(String),
    SelectSwatch(usize),
    SetCustomColor(String),
    SetEffect(String),
    SetSpeed(i32),
    SetBrightness(i32),
    SaveLedPreset,
    SaveSystemColor { id: u32, hex: String },

    // ─────────────────────────────────────────────────────────
    // Custom Brands
    // ─────────────────────────────────────────────────────────
    OpenBrandManager,
    CloseBrandManager,
    AddBrand(String),
    RenameBrand { old: String, new: String },
    RequestDeleteBrand(String),
    DeleteBrand(String),

    // ─────────────────────────────────────────────────────────
    // Logs / System
    // ─────────────────────────────────────────────────────────
    ClearLogs,
    ScanWifi,
    /// Copy the selected scan result into the SSID field
    ChooseNetwork,
    SetWifiSsid(String),
    SetWifiPassword(String),
    SaveWifi,
    ConfirmSaveWifi,
    CheckUpdate,
    StartUpdate,
    ConfirmStartUpdate,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    /// Activate option `index` of the open confirm dialog
    ConfirmChoose(usize),
    /// Activate the highlighted option
    ConfirmAccept,
    ConfirmCancel,
    ConfirmMove(i32),
    OpenPrompt { kind: PromptKind, initial: String },
    PromptInput(char),
    PromptBackspace,
    PromptClear,
    PromptSubmit,
    PromptCancel,

    /// Show a notification
    Notify(Notification),
}
