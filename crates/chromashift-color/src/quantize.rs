//! Rounding and clamping back to 8-bit channels.

use chromashift_core::Rgb;
use glam::DVec3;

/// Round half away from zero and clamp to [0, 255]. NaN maps to 0.
#[inline]
pub fn clamp_channel(v: f64) -> u8 {
    // `as` saturates and sends NaN to 0
    v.round().clamp(0.0, 255.0) as u8
}

/// Quantize a real-valued RGB triple on the [0, 255] scale.
#[inline]
pub fn quantize_rgb(v: DVec3) -> Rgb {
    Rgb::new(clamp_channel(v.x), clamp_channel(v.y), clamp_channel(v.z))
}
