//! 8-bit RGBA colors

use crate::pbrt::{clamp, lerp, Float};
use std::fmt;

/// An 8-bit per channel RGBA color. Every arithmetic operation saturates to
/// [0, 255] instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,

    /// Green channel.
    pub g: u8,

    /// Blue channel.
    pub b: u8,

    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Returns a new color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    /// * `a` - Alpha channel.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a new opaque color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scales the color channels by an intensity. Each channel is clamped to
    /// [0, 255] and truncated; alpha is left untouched.
    ///
    /// * `intensity` - The scale factor.
    pub fn scale(&self, intensity: Float) -> Self {
        Self::new(
            to_channel(self.r as Float * intensity),
            to_channel(self.g as Float * intensity),
            to_channel(self.b as Float * intensity),
            self.a,
        )
    }

    /// Blends `self * (1 - t) + other * t` per channel; each channel is
    /// computed and clamped independently. Alpha is kept from `self`.
    ///
    /// * `other` - The color at `t = 1`.
    /// * `t`     - Blend factor.
    pub fn blend(&self, other: &Self, t: Float) -> Self {
        let mix = |a: u8, b: u8| to_channel(lerp(t, a as Float, b as Float));
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            self.a,
        )
    }

    /// Returns the channels as `[r, g, b, a]`.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Converts a channel value to 8-bits, saturating at both ends. NaN maps
/// to 0.
///
/// * `v` - The channel value.
#[inline(always)]
fn to_channel(v: Float) -> u8 {
    if v.is_nan() {
        0
    } else {
        clamp(v, 0.0, 255.0) as u8
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
