//! Color value types: 8-bit RGB, RGBA pixels, HSL, Lab, and correction deltas.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, InvalidInput, Result};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integer channels, rejecting anything outside [0, 255].
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Sum of the three channels, in [0, 765].
    #[inline]
    pub fn channel_sum(self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }

    /// Channels as an array.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to [0, 1].
    #[inline]
    pub fn to_unit(self) -> DVec3 {
        DVec3::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| InvalidInput::ChannelOutOfRange { channel: name, value }.into())
}

/// An interleaved RGBA pixel as laid out in a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color channels, without alpha.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Overwrite the color channels, leaving alpha untouched.
    #[inline]
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.r = rgb.r;
        self.g = rgb.g;
        self.b = rgb.b;
    }
}

/// HSL coordinates, each component nominally in [0, 1].
///
/// Hue is a fraction of a full turn. Components are not clamped: a shifted
/// color may carry values outside the nominal range until it is converted back.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Create HSL coordinates, rejecting non-finite components.
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self> {
        ensure_finite("hue", h)?;
        ensure_finite("saturation", s)?;
        ensure_finite("lightness", l)?;
        Ok(Self { h, s, l })
    }

    #[inline]
    pub fn to_vec(self) -> DVec3 {
        DVec3::new(self.h, self.s, self.l)
    }

    #[inline]
    pub fn from_vec(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Add a delta component-wise.
    #[inline]
    pub fn shifted(self, delta: Delta3) -> Self {
        Self::from_vec(self.to_vec() + delta.0)
    }
}

/// CIE L*a*b* coordinates referenced to D65.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab coordinates, rejecting non-finite components.
    pub fn try_new(l: f64, a: f64, b: f64) -> Result<Self> {
        ensure_finite("L*", l)?;
        ensure_finite("a*", a)?;
        ensure_finite("b*", b)?;
        Ok(Self { l, a, b })
    }

    #[inline]
    pub fn to_vec(self) -> DVec3 {
        DVec3::new(self.l, self.a, self.b)
    }

    #[inline]
    pub fn from_vec(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Add a delta component-wise.
    #[inline]
    pub fn shifted(self, delta: Delta3) -> Self {
        Self::from_vec(self.to_vec() + delta.0)
    }
}

/// Signed per-component difference in whichever space is active.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Delta3(pub DVec3);

impl Delta3 {
    pub const ZERO: Self = Self(DVec3::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Create a delta, rejecting non-finite components.
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self> {
        ensure_finite("delta", x)?;
        ensure_finite("delta", y)?;
        ensure_finite("delta", z)?;
        Ok(Self::new(x, y, z))
    }

    /// Difference `to - from`.
    #[inline]
    pub fn between(from: DVec3, to: DVec3) -> Self {
        Self(to - from)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == DVec3::ZERO
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        self.0.to_array()
    }
}
