//! Query-string construction for POST endpoints
//!
//! The device reads parameters with a plain key/value scan and stores
//! values exactly as received, so values are escaped the way a browser's
//! `encodeURIComponent` does: space becomes `%20`, never `+`.

use std::fmt;

use gpanel_core::{LedTarget, Rgb};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={}", utf8_percent_encode(value, URI_COMPONENT))?;
        }
        Ok(())
    }
}

/// A runtime change to the ring, sent to `POST /api/led/config`.
///
/// Color changes and effect settings are separate pushes; the device
/// applies whichever parameter group is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedPush {
    Color {
        effect: String,
        target: LedTarget,
        color: Rgb,
    },
    Settings {
        effect: String,
        speed: u8,
        brightness: u8,
    },
}

impl LedPush {
    pub fn query(&self) -> Query {
        match self {
            LedPush::Color {
                effect,
                target,
                color,
            } => Query::new()
                .with("effect", effect)
                .with("index", target.index())
                .with("r", color.r)
                .with("g", color.g)
                .with("b", color.b),
            LedPush::Settings {
                effect,
                speed,
                brightness,
            } => Query::new()
                .with("effect", effect)
                .with("speed", speed)
                .with("brightness", brightness),
        }
    }
}

pub(crate) fn key_query(key: &str) -> Query {
    Query::new().with("key", key)
}

pub(crate) fn name_query(name: &str) -> Query {
    Query::new().with("name", name)
}

pub(crate) fn rename_query(old: &str, new: &str) -> Query {
    Query::new().with("old", old).with("new", new)
}

pub(crate) fn system_color_query(id: u32, color: Rgb) -> Query {
    Query::new()
        .with("id", id)
        .with("r", color.r)
        .with("g", color.g)
        .with("b", color.b)
}

pub(crate) fn wifi_query(ssid: &str, password: &str) -> Query {
    Query::new().with("ssid", ssid).with("password", password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_like_uri_component() {
        let q = name_query("Mini Split-2");
        assert_eq!(q.to_string(), "name=Mini%20Split-2");

        let q = wifi_query("Café & Bar", "p@ss=1");
        assert_eq!(q.to_string(), "ssid=Caf%C3%A9%20%26%20Bar&password=p%40ss%3D1");
    }

    #[test]
    fn test_led_color_push_single_position() {
        let push = LedPush::Color {
            effect: "static".into(),
            target: LedTarget::Position(3),
            color: Rgb::new(255, 0, 0),
        };
        assert_eq!(push.query().to_string(), "effect=static&index=3&r=255&g=0&b=0");
    }

    #[test]
    fn test_led_color_push_all_uses_sentinel() {
        let push = LedPush::Color {
            effect: "static".into(),
            target: LedTarget::All,
            color: Rgb::new(1, 2, 3),
        };
        assert_eq!(push.query().get("index"), Some("255"));
    }

    #[test]
    fn test_led_settings_push() {
        let push = LedPush::Settings {
            effect: "knight_rider".into(),
            speed: 70,
            brightness: 40,
        };
        assert_eq!(
            push.query().to_string(),
            "effect=knight_rider&speed=70&brightness=40"
        );
    }

    #[test]
    fn test_rename_and_color_queries() {
        assert_eq!(
            rename_query("Old Name", "New").to_string(),
            "old=Old%20Name&new=New"
        );
        assert_eq!(
            system_color_query(4, Rgb::new(0, 128, 255)).to_string(),
            "id=4&r=0&g=128&b=255"
        );
        assert_eq!(key_query("dk_c24_a").to_string(), "key=dk_c24_a");
    }
}
