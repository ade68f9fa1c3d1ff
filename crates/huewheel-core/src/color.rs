//! HSB color model and conversions.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding a `#RRGGBB` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, found {0} characters")]
    InvalidLength(usize),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// A color in hue/saturation/brightness form.
///
/// All channels are normalized: hue in `[0, 1)`, the others in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Default for Hsb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Hsb {
    /// Opaque white (no saturation, full brightness).
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
        alpha: 1.0,
    };

    /// Create an opaque color.
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha: 1.0,
        }
    }

    /// Derive HSB from normalized RGB channels.
    pub fn from_rgb(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let hue = if chroma == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / chroma).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / chroma + 2.0) / 6.0
        } else {
            ((r - g) / chroma + 4.0) / 6.0
        };
        let saturation = if max == 0.0 { 0.0 } else { chroma / max };

        Self {
            hue: hue.rem_euclid(1.0),
            saturation,
            brightness: max,
            alpha,
        }
    }

    /// Derive HSB from 8-bit RGBA channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Decode a `#RRGGBB` string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(digits.chars().count()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };
        Ok(Self::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255))
    }

    /// Convert to normalized `[r, g, b]`.
    pub fn to_rgb(self) -> [f64; 3] {
        let h = self.hue.rem_euclid(1.0) * 6.0;
        let c = self.brightness * self.saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = self.brightness - c;

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [r + m, g + m, b + m]
    }

    /// Convert to 8-bit `[r, g, b, a]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb();
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(r), quantize(g), quantize(b), quantize(self.alpha)]
    }
}

impl From<Hsb> for Color {
    fn from(hsb: Hsb) -> Self {
        let [r, g, b] = hsb.to_rgb();
        Color::new([r as f32, g as f32, b as f32, hsb.alpha as f32])
    }
}

impl From<Color> for Hsb {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.components;
        Hsb::from_rgb(f64::from(r), f64::from(g), f64::from(b), f64::from(a))
    }
}
