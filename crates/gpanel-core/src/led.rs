//! LED ring model: positions, effects, and the named system-state colors

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Number of addressable positions on the ring.
pub const RING_SIZE: usize = 8;

/// Index value that addresses every ring position at once.
pub const ALL_POSITIONS: u8 = 255;

pub const SPEED_MIN: u8 = 1;
pub const SPEED_MAX: u8 = 100;
pub const SPEED_DEFAULT: u8 = 50;
pub const BRIGHTNESS_MIN: u8 = 0;
pub const BRIGHTNESS_MAX: u8 = 100;
pub const BRIGHTNESS_DEFAULT: u8 = 100;

/// Radius used to lay the ring out.
pub const RING_RADIUS: f64 = 120.0;

/// Quick-pick swatches offered by the color editor.
pub const PALETTE: [&str; 9] = [
    "#ef4444", "#f97316", "#f59e0b", "#22c55e", "#06b6d4", "#3b82f6", "#a855f7", "#ffffff",
    "#000000",
];

/// Animation effects the firmware knows about, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedEffect {
    Static,
    Running,
    Rainbow,
    Fire,
    Breathing,
    Blink,
    KnightRider,
    TheaterChase,
    ColorWipe,
    Loading,
    Sparkle,
    Random,
    AutoCycle,
}

impl LedEffect {
    pub const ALL: [LedEffect; 13] = [
        LedEffect::Static,
        LedEffect::Running,
        LedEffect::Rainbow,
        LedEffect::Fire,
        LedEffect::Breathing,
        LedEffect::Blink,
        LedEffect::KnightRider,
        LedEffect::TheaterChase,
        LedEffect::ColorWipe,
        LedEffect::Loading,
        LedEffect::Sparkle,
        LedEffect::Random,
        LedEffect::AutoCycle,
    ];

    /// Wire name.
    pub fn tag(self) -> &'static str {
        match self {
            LedEffect::Static => "static",
            LedEffect::Running => "running",
            LedEffect::Rainbow => "rainbow",
            LedEffect::Fire => "fire",
            LedEffect::Breathing => "breathing",
            LedEffect::Blink => "blink",
            LedEffect::KnightRider => "knight_rider",
            LedEffect::TheaterChase => "theater_chase",
            LedEffect::ColorWipe => "color_wipe",
            LedEffect::Loading => "loading",
            LedEffect::Sparkle => "sparkle",
            LedEffect::Random => "random",
            LedEffect::AutoCycle => "auto_cycle",
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            LedEffect::Static => "Static",
            LedEffect::Running => "Running",
            LedEffect::Rainbow => "Rainbow",
            LedEffect::Fire => "Fire",
            LedEffect::Breathing => "Breathing",
            LedEffect::Blink => "Blink",
            LedEffect::KnightRider => "Knight Rider",
            LedEffect::TheaterChase => "Chase",
            LedEffect::ColorWipe => "Wipe",
            LedEffect::Loading => "Loading",
            LedEffect::Sparkle => "Sparkle",
            LedEffect::Random => "Random",
            LedEffect::AutoCycle => "Auto Cycle",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.tag() == tag)
    }
}

/// Whether a tab caption should be highlighted for the device-reported
/// effect tag.
///
/// Matching is a lowercase substring test after replacing the first
/// underscore of the tag with a space. `knight_rider` lights "Knight
/// Rider"; `theater_chase` and `color_wipe` light nothing because their
/// captions are abbreviated.
pub fn tab_matches(label: &str, effect_tag: &str) -> bool {
    label
        .to_lowercase()
        .contains(&effect_tag.replacen('_', " ", 1))
}

/// Ring configuration as reported by `GET /api/led/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedConfig {
    pub effect: String,
    pub speed: u8,
    pub brightness: u8,
    #[serde(default)]
    pub colors: Option<Vec<Rgb>>,
}

/// Which ring positions a color push addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedTarget {
    Position(u8),
    All,
}

impl LedTarget {
    /// Index parameter for the gateway; [`ALL_POSITIONS`] for every position.
    pub fn index(self) -> u8 {
        match self {
            LedTarget::Position(i) => i,
            LedTarget::All => ALL_POSITIONS,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            ALL_POSITIONS => Some(LedTarget::All),
            i if usize::from(i) < RING_SIZE => Some(LedTarget::Position(i)),
            _ => None,
        }
    }
}

/// Local copy of the ring colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingColors([Rgb; RING_SIZE]);

impl Default for RingColors {
    fn default() -> Self {
        Self([Rgb::BLACK; RING_SIZE])
    }
}

impl RingColors {
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.0
    }

    /// Write `color` into the addressed positions.
    pub fn apply(&mut self, target: LedTarget, color: Rgb) {
        match target {
            LedTarget::All => self.0 = [color; RING_SIZE],
            LedTarget::Position(i) => {
                if let Some(slot) = self.0.get_mut(usize::from(i)) {
                    *slot = color;
                }
            }
        }
    }

    /// Replace from a device report. Missing trailing entries keep their
    /// current value and extra entries are ignored.
    pub fn replace_from(&mut self, colors: &[Rgb]) {
        for (slot, color) in self.0.iter_mut().zip(colors) {
            *slot = *color;
        }
    }
}

/// Placement of one ring position, relative to the ring center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Positions laid out clockwise from twelve o'clock, 45° apart.
pub fn ring_geometry(radius: f64) -> [RingPoint; RING_SIZE] {
    std::array::from_fn(|index| {
        let angle = (index as f64 * 45.0 - 90.0).to_radians();
        RingPoint {
            index,
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    })
}

/// A named color the firmware uses to signal a device state
/// (e.g. "Wi-Fi connecting"). Independent of the ring positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemColor {
    pub id: u32,
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SystemColor {
    pub fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.r = color.r;
        self.g = color.g;
        self.b = color.b;
    }
}
