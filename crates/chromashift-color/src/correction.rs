//! Correction delta computation and per-pixel application.

use chromashift_core::{Delta3, Rgb};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color_space::ColorSpace;
use crate::hsl::{hsl_to_rgb, normalize_hsl, rgb_to_hsl};
use crate::lab::{lab_to_rgb, rgb_to_lab};
use crate::quantize::quantize_rgb;

/// How shifted HSL coordinates are treated before converting back to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HslRange {
    /// Pass shifted values through as-is; only the final RGB is clamped.
    #[default]
    Unbounded,
    /// Wrap hue and clamp saturation/lightness to [0, 1] first.
    Clamped,
}

/// Coordinates of `rgb` in `space`.
pub fn to_space(rgb: Rgb, space: ColorSpace) -> DVec3 {
    match space {
        ColorSpace::Hsl => rgb_to_hsl(rgb).to_vec(),
        ColorSpace::CieLab => rgb_to_lab(rgb).to_vec(),
    }
}

/// Difference `target - selected` in `space`.
pub fn compute_delta(selected: Rgb, target: Rgb, space: ColorSpace) -> Delta3 {
    Delta3::between(to_space(selected, space), to_space(target, space))
}

/// Shift a pixel by `delta` in `space` and convert back to 8-bit RGB.
pub fn apply_correction(pixel: Rgb, delta: Delta3, space: ColorSpace) -> Rgb {
    apply_correction_with(pixel, delta, space, HslRange::Unbounded)
}

/// [`apply_correction`] with an explicit HSL range policy.
///
/// `range` has no effect in CIE L*a*b*, whose inverse always rounds and clamps.
pub fn apply_correction_with(pixel: Rgb, delta: Delta3, space: ColorSpace, range: HslRange) -> Rgb {
    match space {
        ColorSpace::Hsl => {
            let shifted = rgb_to_hsl(pixel).shifted(delta);
            let shifted = match range {
                HslRange::Unbounded => shifted,
                HslRange::Clamped => normalize_hsl(shifted),
            };
            quantize_rgb(hsl_to_rgb(shifted))
        }
        ColorSpace::CieLab => lab_to_rgb(rgb_to_lab(pixel).shifted(delta)),
    }
}
