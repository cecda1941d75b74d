//! AC brand identity: built-in presets and user-defined custom brands
//!
//! The device distinguishes the two over a single form field. A brand
//! selection travels through the UI as a string: custom brands carry the
//! [`CUSTOM_BRAND_PREFIX`], presets are their integer id. On the wire the
//! prefix is stripped and the brand becomes either a JSON string or a JSON
//! integer.

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix marking a custom brand in a selection value.
pub const CUSTOM_BRAND_PREFIX: &str = "custom_";

/// Upper bound the device enforces on stored custom brands.
pub const MAX_CUSTOM_BRANDS: usize = 20;

pub const EMPTY_BRAND_NAME: &str = "Please enter a brand name";
pub const INVALID_BRAND_NAME: &str =
    "Brand name can only contain letters, numbers, spaces, and dashes";

static BRAND_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 -]+$").expect("brand name pattern is valid"));

/// Built-in AC protocols known to the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetBrand {
    Daikin,
    Samsung,
    Mitsubishi,
    Panasonic,
    Lg,
}

impl PresetBrand {
    pub const ALL: [PresetBrand; 5] = [
        PresetBrand::Daikin,
        PresetBrand::Samsung,
        PresetBrand::Mitsubishi,
        PresetBrand::Panasonic,
        PresetBrand::Lg,
    ];

    pub fn id(self) -> i64 {
        match self {
            PresetBrand::Daikin => 0,
            PresetBrand::Samsung => 1,
            PresetBrand::Mitsubishi => 2,
            PresetBrand::Panasonic => 3,
            PresetBrand::Lg => 4,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            PresetBrand::Daikin => "Daikin",
            PresetBrand::Samsung => "Samsung",
            PresetBrand::Mitsubishi => "Mitsubishi",
            PresetBrand::Panasonic => "Panasonic",
            PresetBrand::Lg => "LG",
        }
    }

    /// Lowercase value used by the learning form's brand picker.
    pub fn learn_value(self) -> &'static str {
        match self {
            PresetBrand::Daikin => "daikin",
            PresetBrand::Samsung => "samsung",
            PresetBrand::Mitsubishi => "mitsubishi",
            PresetBrand::Panasonic => "panasonic",
            PresetBrand::Lg => "lg",
        }
    }
}

/// The brand field of an AC command or state report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Brand {
    /// Built-in protocol, sent as a JSON integer.
    Preset(i64),
    /// User-defined brand, sent as a JSON string.
    Custom(String),
}

impl Default for Brand {
    fn default() -> Self {
        Brand::Preset(PresetBrand::Daikin.id())
    }
}

impl Brand {
    /// Decode a selection value into the wire representation.
    ///
    /// `custom_<name>` becomes `Custom(name)`; anything else is read as a
    /// decimal integer the way a browser's `parseInt` would (leading
    /// whitespace and sign allowed, trailing garbage ignored).
    pub fn from_select_value(value: &str) -> Result<Self> {
        if let Some(name) = value.strip_prefix(CUSTOM_BRAND_PREFIX) {
            return Ok(Brand::Custom(name.to_string()));
        }
        parse_leading_int(value)
            .map(Brand::Preset)
            .ok_or_else(|| Error::invalid_input(format!("Unknown brand value: {value}")))
    }

    /// Inverse of [`Brand::from_select_value`].
    pub fn select_value(&self) -> String {
        match self {
            Brand::Preset(id) => id.to_string(),
            Brand::Custom(name) => format!("{CUSTOM_BRAND_PREFIX}{name}"),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Brand::Custom(_))
    }

    /// Human-readable name.
    pub fn display_name(&self) -> String {
        match self {
            Brand::Preset(id) => PresetBrand::from_id(*id)
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| format!("Brand #{id}")),
            Brand::Custom(name) => decode_brand_name(name),
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Stored brand names may be URL-encoded; decode for display.
pub fn decode_brand_name(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Trim and validate a custom brand name before it is sent to the device.
pub fn validate_brand_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_input(EMPTY_BRAND_NAME));
    }
    if !BRAND_NAME_PATTERN.is_match(name) {
        return Err(Error::invalid_input(INVALID_BRAND_NAME));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_prefix_is_stripped() {
        assert_eq!(
            Brand::from_select_value("custom_Daikon2").unwrap(),
            Brand::Custom("Daikon2".into())
        );
    }

    #[test]
    fn test_plain_value_is_integer() {
        assert_eq!(Brand::from_select_value("2").unwrap(), Brand::Preset(2));
        assert_eq!(Brand::from_select_value(" 3abc").unwrap(), Brand::Preset(3));
        assert!(Brand::from_select_value("daikin").is_err());
    }

    #[test]
    fn test_select_value_round_trip() {
        for brand in [Brand::Preset(4), Brand::Custom("Mini Split-2".into())] {
            assert_eq!(Brand::from_select_value(&brand.select_value()).unwrap(), brand);
        }
    }

    #[test]
    fn test_wire_encoding_is_int_or_string() {
        assert_eq!(serde_json::to_string(&Brand::Preset(1)).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&Brand::Custom("Gree".into())).unwrap(),
            "\"Gree\""
        );
        let brand: Brand = serde_json::from_str("\"Gree\"").unwrap();
        assert_eq!(brand, Brand::Custom("Gree".into()));
        let brand: Brand = serde_json::from_str("2").unwrap();
        assert_eq!(brand, Brand::Preset(2));
    }

    #[test]
    fn test_validate_brand_name() {
        assert_eq!(validate_brand_name("  Mini Split-2 ").unwrap(), "Mini Split-2");
        assert_eq!(
            validate_brand_name("Da!kin").unwrap_err().to_string(),
            INVALID_BRAND_NAME
        );
        assert_eq!(
            validate_brand_name("   ").unwrap_err().to_string(),
            EMPTY_BRAND_NAME
        );
    }

    #[test]
    fn test_display_name_decodes() {
        assert_eq!(decode_brand_name("Mini%20Split"), "Mini Split");
        assert_eq!(Brand::Custom("Mini%20Split".into()).display_name(), "Mini Split");
        assert_eq!(Brand::Preset(4).display_name(), "LG");
        assert_eq!(Brand::Preset(42).display_name(), "Brand #42");
    }
}
