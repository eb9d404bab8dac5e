//! RGB ↔ HSL conversion.
//!
//! Hue, saturation and lightness are all fractions in [0, 1]. The inverse
//! returns unrounded channels on the [0, 255] scale; quantization is left
//! to the caller.

use chromashift_core::{Hsl, Rgb};
use glam::DVec3;

/// Chroma below which a color is treated as achromatic.
pub const ACHROMATIC_EPSILON: f64 = 1e-12;

/// Convert an 8-bit RGB color to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let DVec3 { x: r, y: g, z: b } = rgb.to_unit();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Achromatic case
    let d = max - min;
    if d < ACHROMATIC_EPSILON {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert HSL to RGB channels on the [0, 255] scale, neither rounded nor clamped.
///
/// Hue wraps around the color wheel. Saturation and lightness are used as
/// given, so values outside [0, 1] can produce channels outside [0, 255].
pub fn hsl_to_rgb(hsl: Hsl) -> DVec3 {
    let Hsl { h, s, l } = hsl;

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    DVec3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ) * 255.0
}

/// Clamp saturation and lightness into [0, 1] and wrap hue into [0, 1).
pub fn normalize_hsl(hsl: Hsl) -> Hsl {
    Hsl::new(
        wrap_unit(hsl.h),
        hsl.s.clamp(0.0, 1.0),
        hsl.l.clamp(0.0, 1.0),
    )
}

#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = wrap_unit(t);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn wrap_unit(t: f64) -> f64 {
    let w = t.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}
