//! Report color palette. Mirrors the CSS custom properties in `assets/theme/main.css`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same hue with a different opacity, clamped to `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const ELECTRIC_BLUE: Rgba = Rgba::rgb(0x4D, 0xA3, 0xFF);
pub const CITRUS_POP: Rgba = Rgba::rgb(0xFF, 0xD5, 0x5E);
pub const LEAF_GREEN: Rgba = Rgba::rgb(0x52, 0xD6, 0x81);
pub const PURPLE_SPLASH: Rgba = Rgba::rgb(0xB4, 0x90, 0xFF);
pub const PEACH_POP: Rgba = Rgba::rgb(0xFF, 0x9E, 0x8C);
pub const CORAL_FEMALE: Rgba = Rgba::rgb(0xF2, 0x6B, 0x6B);
pub const TEAL_MALE: Rgba = Rgba::rgb(0x2A, 0xA8, 0xA1);
pub const SLATE: Rgba = Rgba::rgb(0x6B, 0x72, 0x80);
pub const DARK: Rgba = Rgba::rgb(0x1A, 0x1A, 0x2E);
pub const GRAY_600: Rgba = Rgba::rgb(0x6C, 0x75, 0x7D);
pub const GRAY_400: Rgba = Rgba::rgb(0xCE, 0xD4, 0xDA);
pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);

pub const PRIMARY: [Rgba; 5] = [
    ELECTRIC_BLUE,
    CITRUS_POP,
    LEAF_GREEN,
    PURPLE_SPLASH,
    PEACH_POP,
];

pub const GENDER: [Rgba; 2] = [CORAL_FEMALE, TEAL_MALE];

/// Cycles through [`PRIMARY`].
pub fn primary(index: usize) -> Rgba {
    PRIMARY[index % PRIMARY.len()]
}
