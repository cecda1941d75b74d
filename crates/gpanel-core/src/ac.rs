//! Air-conditioner state as reported and commanded through the gateway

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::brand::Brand;
use crate::error::{Error, Result};

pub const TEMP_MIN: u8 = 16;
pub const TEMP_MAX: u8 = 30;
pub const TEMP_DEFAULT: u8 = 25;

/// Operating mode, transmitted as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AcMode {
    #[default]
    Auto,
    Cool,
    Heat,
    Fan,
    Dry,
}

impl AcMode {
    pub const ALL: [AcMode; 5] = [
        AcMode::Auto,
        AcMode::Cool,
        AcMode::Heat,
        AcMode::Fan,
        AcMode::Dry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AcMode::Auto => "Auto",
            AcMode::Cool => "Cool",
            AcMode::Heat => "Heat",
            AcMode::Fan => "Fan",
            AcMode::Dry => "Dry",
        }
    }

    /// Single-letter code used in generated key names.
    pub fn key_code(self) -> char {
        match self {
            AcMode::Auto => 'a',
            AcMode::Cool => 'c',
            AcMode::Heat => 'h',
            AcMode::Fan => 'f',
            AcMode::Dry => 'd',
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl TryFrom<u8> for AcMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| Error::protocol(format!("unknown AC mode {code}")))
    }
}

impl From<AcMode> for u8 {
    fn from(mode: AcMode) -> Self {
        mode as u8
    }
}

/// Fan speed, transmitted as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FanSpeed {
    #[default]
    Auto,
    Low,
    Medium,
    High,
    Turbo,
}

impl FanSpeed {
    pub const ALL: [FanSpeed; 5] = [
        FanSpeed::Auto,
        FanSpeed::Low,
        FanSpeed::Medium,
        FanSpeed::High,
        FanSpeed::Turbo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FanSpeed::Auto => "Auto",
            FanSpeed::Low => "Low",
            FanSpeed::Medium => "Medium",
            FanSpeed::High => "High",
            FanSpeed::Turbo => "Turbo",
        }
    }

    /// Single-letter code used in generated key names; turbo has none.
    pub fn key_code(self) -> Option<char> {
        match self {
            FanSpeed::Auto => Some('a'),
            FanSpeed::Low => Some('l'),
            FanSpeed::Medium => Some('m'),
            FanSpeed::High => Some('h'),
            FanSpeed::Turbo => None,
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| Error::protocol(format!("unknown fan speed {code}")))
    }
}

impl From<FanSpeed> for u8 {
    fn from(fan: FanSpeed) -> Self {
        fan as u8
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// Clamp a requested temperature into the supported range.
pub fn clamp_temp(temp: i32) -> u8 {
    // Clamped into 16..=30, so the narrowing cast cannot truncate.
    temp.clamp(i32::from(TEMP_MIN), i32::from(TEMP_MAX)) as u8
}

/// Last known AC settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AcState {
    #[serde(deserialize_with = "bool_or_int")]
    pub power: bool,
    pub mode: AcMode,
    pub temp: u8,
    pub fan: FanSpeed,
    #[serde(default)]
    pub brand: Brand,
}

impl Default for AcState {
    fn default() -> Self {
        Self {
            power: false,
            mode: AcMode::default(),
            temp: TEMP_DEFAULT,
            fan: FanSpeed::default(),
            brand: Brand::default(),
        }
    }
}

impl AcState {
    /// The full command that reproduces this state on the device.
    pub fn to_command(&self) -> AcCommand {
        AcCommand {
            power: u8::from(self.power),
            mode: self.mode,
            temp: self.temp,
            fan: self.fan,
            brand: self.brand.clone(),
        }
    }

    pub fn power_buttons(&self) -> PowerButtons {
        PowerButtons::for_power(self.power)
    }
}

/// Body of `POST /api/ac/control`.
///
/// The device expects power as `1`/`0` rather than a JSON boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcCommand {
    pub power: u8,
    pub mode: AcMode,
    pub temp: u8,
    pub fan: FanSpeed,
    pub brand: Brand,
}

fn bool_or_int<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// Visual state of a single power button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    /// Green, highlighted.
    OnActive,
    /// Red, highlighted.
    OffActive,
    /// Neutral gray.
    Inactive,
}

impl ButtonTone {
    pub fn is_highlighted(self) -> bool {
        !matches!(self, ButtonTone::Inactive)
    }
}

/// The pair of power buttons. Exactly one is highlighted for any power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerButtons {
    pub on: ButtonTone,
    pub off: ButtonTone,
}

impl PowerButtons {
    pub fn for_power(power: bool) -> Self {
        if power {
            Self {
                on: ButtonTone::OnActive,
                off: ButtonTone::Inactive,
            }
        } else {
            Self {
                on: ButtonTone::Inactive,
                off: ButtonTone::OffActive,
            }
        }
    }
}

impl fmt::Display for AcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}°C fan {} ({})",
            if self.power { "ON" } else { "OFF" },
            self.mode.label(),
            self.temp,
            self.fan.label(),
            self.brand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accepts_bool_power() {
        let state: AcState = serde_json::from_str(
            r#"{"power":true,"mode":1,"temp":22,"fan":3,"brand":2}"#,
        )
        .unwrap();
        assert!(state.power);
        assert_eq!(state.mode, AcMode::Cool);
        assert_eq!(state.fan, FanSpeed::High);
        assert_eq!(state.brand, Brand::Preset(2));
    }

    #[test]
    fn test_state_accepts_int_power_and_custom_brand() {
        let state: AcState = serde_json::from_str(
            r#"{"power":0,"mode":4,"temp":18,"fan":0,"brand":"Gree"}"#,
        )
        .unwrap();
        assert!(!state.power);
        assert_eq!(state.mode, AcMode::Dry);
        assert_eq!(state.brand, Brand::Custom("Gree".into()));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let res: std::result::Result<AcState, _> =
            serde_json::from_str(r#"{"power":1,"mode":9,"temp":18,"fan":0}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_command_sends_full_state_with_numeric_power() {
        let state = AcState {
            power: true,
            mode: AcMode::Heat,
            temp: 27,
            fan: FanSpeed::Low,
            brand: Brand::Custom("Gree".into()),
        };
        let json = serde_json::to_value(state.to_command()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"power":1,"mode":2,"temp":27,"fan":1,"brand":"Gree"})
        );
    }

    #[test]
    fn test_power_buttons_mutually_exclusive() {
        for power in [true, false] {
            let buttons = PowerButtons::for_power(power);
            assert_ne!(buttons.on.is_highlighted(), buttons.off.is_highlighted());
        }
        assert_eq!(PowerButtons::for_power(true).on, ButtonTone::OnActive);
        assert_eq!(PowerButtons::for_power(false).off, ButtonTone::OffActive);
    }

    #[test]
    fn test_clamp_temp() {
        assert_eq!(clamp_temp(10), TEMP_MIN);
        assert_eq!(clamp_temp(35), TEMP_MAX);
        assert_eq!(clamp_temp(21), 21);
    }

    #[test]
    fn test_mode_and_fan_cycle() {
        assert_eq!(AcMode::Dry.next(), AcMode::Auto);
        assert_eq!(AcMode::Auto.prev(), AcMode::Dry);
        assert_eq!(FanSpeed::High.next(), FanSpeed::Turbo);
        assert_eq!(FanSpeed::Turbo.key_code(), None);
    }
}
