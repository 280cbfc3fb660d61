//! Canonical color type for gradient stops and text.
//!
//! Channels are straight (non-premultiplied) `f64` values in `[0, 1]`.
//! Conversion to 8-bit, hex and terminal escapes only happens at the
//! presentation boundary.

use serde::Serialize;

use crate::common::utils::{clamp_unit, interpolate_f64};

/// An RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with all color channels set to `level`.
    pub fn gray(level: f64) -> Self {
        let level = clamp_unit(level);
        Self::new(level, level, level, 1.0)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Per-channel linear interpolation, `factor` clamped to `[0, 1]`.
    pub fn lerp(from: Self, to: Self, factor: f64) -> Self {
        Self::new(
            interpolate_f64(from.r, to.r, factor),
            interpolate_f64(from.g, to.g, factor),
            interpolate_f64(from.b, to.b, factor),
            interpolate_f64(from.a, to.a, factor),
        )
    }

    /// Channel midpoint of two colors.
    pub fn midpoint(from: Self, to: Self) -> Self {
        Self::lerp(from, to, 0.5)
    }

    /// Channels as 8-bit values, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |channel: f64| (clamp_unit(channel) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// `#rrggbbaa` hex string.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Largest per-channel difference to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }

    /// The color as shown over a black background, alpha folded in.
    pub fn over_black(self) -> Self {
        let a = clamp_unit(self.a);
        Self::new(self.r * a, self.g * a, self.b * a, 1.0)
    }

    /// A two-cell truecolor swatch for terminal previews.
    pub fn ansi_swatch(self) -> String {
        let [r, g, b, _] = self.over_black().to_rgba8();
        format!("\x1b[48;2;{r};{g};{b}m  \x1b[0m")
    }
}
