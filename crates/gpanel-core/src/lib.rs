//! # gpanel-core - Core Domain Types
//!
//! Foundation crate for the Goku control panel. Provides the device's
//! domain types, error handling and logging bootstrap.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### AC (`ac`, `brand`)
//! - [`AcState`] / [`AcCommand`] - Reported state and full-state command body
//! - [`AcMode`], [`FanSpeed`] - Integer-coded enums
//! - [`Brand`] - Preset id or custom name, with the `custom_` selection encoding
//! - [`validate_brand_name()`] - Client-side check before creating a brand
//!
//! ### LED ring (`led`, `color`)
//! - [`RingColors`], [`LedTarget`] - Eight positions plus the "all" sentinel
//! - [`LedEffect`], [`tab_matches()`] - Effect tags and tab highlighting
//! - [`SystemColor`] - Named state colors, separate from the ring
//! - [`Rgb`] - `#rrggbb` conversion
//!
//! ### Dashboard (`stats`, `trend`)
//! - [`SystemStats`] - Stats snapshot
//! - [`Trend`] - 20-point chart history built on [`RingBuffer`]
//!
//! ### Learning (`learn`)
//! - [`LearnSession`] - Idle / Listening / Captured state machine
//! - [`generate_key_name()`] - Suggested names for captured signals
//!
//! ### Notifications (`notify`)
//! - [`Notification`], [`Severity`], [`classify()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Failure`] - Cloneable summary of a failed gateway call
//! - [`Result`], [`ResultExt`]

pub mod ac;
pub mod brand;
pub mod color;
pub mod error;
pub mod learn;
pub mod led;
pub mod logging;
pub mod notify;
pub mod stats;
pub mod system;
pub mod trend;

/// Prelude for common imports used throughout all panel crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use ac::{
    clamp_temp, AcCommand, AcMode, AcState, ButtonTone, FanSpeed, PowerButtons, TEMP_MAX,
    TEMP_MIN,
};
pub use brand::{
    decode_brand_name, validate_brand_name, Brand, PresetBrand, CUSTOM_BRAND_PREFIX,
    MAX_CUSTOM_BRANDS,
};
pub use color::Rgb;
pub use error::{Error, Failure, Result, ResultExt};
pub use learn::{generate_key_name, LearnPhase, LearnSession, LearnStatus, PollDecision};
pub use led::{
    ring_geometry, tab_matches, LedConfig, LedEffect, LedTarget, RingColors, RingPoint,
    SystemColor, ALL_POSITIONS, PALETTE, RING_SIZE,
};
pub use notify::{classify, Notification, Severity};
pub use stats::{format_kib, format_uptime, SystemStats, DEFAULT_FIRMWARE_VERSION};
pub use system::{OtaInfo, WifiCredentials, WifiNetwork};
pub use trend::{RingBuffer, Trend, TrendPoint, TREND_CAPACITY};
