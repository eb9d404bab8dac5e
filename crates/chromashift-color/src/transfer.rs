//! sRGB transfer function (IEC 61966-2-1 companding).
#![allow(clippy::excessive_precision)]

/// Encoded value at or below which decoding is linear.
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
/// Linear value at or below which encoding is linear.
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

const SRGB_LINEAR_SLOPE: f64 = 12.92;
const SRGB_GAMMA: f64 = 2.4;
const SRGB_OFFSET: f64 = 0.055;

/// Convert an encoded sRGB value in [0, 1] to linear light.
#[inline]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= SRGB_DECODE_THRESHOLD {
        v / SRGB_LINEAR_SLOPE
    } else {
        ((v + SRGB_OFFSET) / (1.0 + SRGB_OFFSET)).powf(SRGB_GAMMA)
    }
}

/// Convert linear light to an encoded sRGB value.
///
/// Negative inputs stay on the linear segment.
#[inline]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= SRGB_ENCODE_THRESHOLD {
        v * SRGB_LINEAR_SLOPE
    } else {
        (1.0 + SRGB_OFFSET) * v.powf(1.0 / SRGB_GAMMA) - SRGB_OFFSET
    }
}
