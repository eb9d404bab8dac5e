//! RGB ↔ CIE L*a*b* conversion via linear sRGB and XYZ (D65).
#![allow(clippy::excessive_precision)]

use chromashift_core::{Lab, Rgb};
use glam::{DMat3, DVec3};

use crate::quantize::quantize_rgb;
use crate::transfer::{linear_to_srgb, srgb_to_linear};

/// D65 reference white (Xn, Yn, Zn).
pub const D65_WHITE: DVec3 = DVec3::new(0.95047, 1.0, 1.08883);

/// Linear sRGB to XYZ, Rec. 709 primaries. Stored column-major.
pub const SRGB_TO_XYZ: DMat3 = DMat3::from_cols_array_2d(&[
    [0.4124564, 0.2126729, 0.0193339],
    [0.3575761, 0.7151522, 0.1191920],
    [0.1804375, 0.0721750, 0.9503041],
]);

/// XYZ to linear sRGB (inverse of [`SRGB_TO_XYZ`]). Stored column-major.
pub const XYZ_TO_SRGB: DMat3 = DMat3::from_cols_array_2d(&[
    [3.2404542, -0.9692660, 0.0556434],
    [-1.5371385, 1.8760108, -0.2040259],
    [-0.4985314, 0.0415560, 1.0572252],
]);

const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Convert an 8-bit RGB color to L*a*b*.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let linear = rgb.to_unit().to_array().map(srgb_to_linear);
    let xyz = SRGB_TO_XYZ * DVec3::from_array(linear) / D65_WHITE;

    let DVec3 {
        x: fx,
        y: fy,
        z: fz,
    } = DVec3::from_array(xyz.to_array().map(lab_f));

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert L*a*b* to 8-bit RGB, rounding and clamping each channel.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let xyz = DVec3::from_array([fx, fy, fz].map(lab_f_inv)) * D65_WHITE;
    let linear = XYZ_TO_SRGB * xyz;
    let encoded = DVec3::from_array(linear.to_array().map(linear_to_srgb));

    quantize_rgb(encoded * 255.0)
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + LAB_OFFSET
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > LAB_EPSILON {
        cube
    } else {
        (f - LAB_OFFSET) / LAB_KAPPA
    }
}
