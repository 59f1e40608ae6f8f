//! SolidColor: the color value the slider emits and is configured with.
//!
//! Stores RGBA as f64 in 0.0–1.0. HSB conversions go through [`crate::math`].

use floem::peniko::Color;

use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::from_hsb(
            crate::constants::DEFAULT_HUE,
            crate::constants::DEFAULT_SATURATION,
            crate::constants::DEFAULT_BRIGHTNESS,
            1.0,
        )
    }
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Create from f64 RGBA, clamping each component into 0.0–1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::clamp_unit(r),
            g: math::clamp_unit(g),
            b: math::clamp_unit(b),
            a: math::clamp_unit(a),
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Create from HSB/HSV values (all 0.0–1.0).
    pub fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(h, math::clamp_unit(s), math::clamp_unit(b));
        Self::from_rgba(r, g, bl, a)
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r, self.g, self.b)
    }

    /// Parse `RGB`, `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
                Some(Self::from_rgb8(
                    nibble(0)? * 17,
                    nibble(1)? * 17,
                    nibble(2)? * 17,
                ))
            }
            6 => Some(Self::from_rgb8(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::from_rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// Uppercase hex without `#`: `RRGGBB` when opaque, `RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |v: f64| (v * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Renderer color for painting.
    pub fn to_peniko(&self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}
