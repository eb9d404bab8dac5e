//! Buffer-wide correction driver.
//!
//! The delta is computed once per pass and shared read-only by every pixel.
//! Near-black and near-white pixels are treated as background and left alone.

use chromashift_core::{Delta3, Result, Rgb, Rgba8, RgbaFrame};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::color_space::ColorSpace;
use crate::config::CorrectionConfig;
use crate::correction::{apply_correction_with, compute_delta};

/// Channel sums below this are background.
pub const BACKGROUND_MIN_SUM: u16 = 20;
/// Channel sums above this are background.
pub const BACKGROUND_MAX_SUM: u16 = 765 - 20;

/// Minimum pixels handed to one rayon task.
const PARALLEL_MIN_LEN: usize = 4096;

/// Pixel counts from one correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrectionStats {
    pub corrected: usize,
    pub skipped: usize,
}

/// Whether a color falls under the near-black / near-white background heuristic.
#[inline]
pub fn is_background(rgb: Rgb) -> bool {
    !(BACKGROUND_MIN_SUM..=BACKGROUND_MAX_SUM).contains(&rgb.channel_sum())
}

/// Recolor an RGBA buffer in place so that `selected` maps onto `target`.
///
/// Alpha is never modified. Fails if `pixels` is not exactly
/// `width * height * 4` bytes.
pub fn correct_image(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    selected: Rgb,
    target: Rgb,
    space: ColorSpace,
) -> Result<CorrectionStats> {
    correct_image_with(
        pixels,
        width,
        height,
        selected,
        target,
        &CorrectionConfig::with_space(space),
    )
}

/// [`correct_image`] with full configuration.
pub fn correct_image_with(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    selected: Rgb,
    target: Rgb,
    config: &CorrectionConfig,
) -> Result<CorrectionStats> {
    let mut frame = RgbaFrame::new(pixels, width, height)?;
    let delta = compute_delta(selected, target, config.space);
    Ok(correct_frame(&mut frame, delta, config))
}

/// Apply a precomputed delta to every foreground pixel of a frame.
pub fn correct_frame(
    frame: &mut RgbaFrame<'_>,
    delta: Delta3,
    config: &CorrectionConfig,
) -> CorrectionStats {
    trace!(delta = ?delta.to_array(), space = %config.space, "Applying correction delta");

    let total = frame.pixel_count();
    let parallel = config.use_parallel(total);
    let pixels = frame.pixels_mut();

    let corrected = if parallel {
        pixels
            .par_iter_mut()
            .with_min_len(PARALLEL_MIN_LEN)
            .map(|px| usize::from(correct_pixel(px, delta, config)))
            .sum::<usize>()
    } else {
        pixels
            .iter_mut()
            .map(|px| usize::from(correct_pixel(px, delta, config)))
            .sum::<usize>()
    };

    let stats = CorrectionStats {
        corrected,
        skipped: total - corrected,
    };
    debug!(
        width = frame.width(),
        height = frame.height(),
        space = %config.space,
        corrected = stats.corrected,
        skipped = stats.skipped,
        parallel,
        "Correction pass complete"
    );
    stats
}

/// Correct one pixel in place. Returns false for background pixels.
#[inline]
fn correct_pixel(px: &mut Rgba8, delta: Delta3, config: &CorrectionConfig) -> bool {
    let rgb = px.rgb();
    if is_background(rgb) {
        return false;
    }
    px.set_rgb(apply_correction_with(rgb, delta, config.space, config.hsl_range));
    true
}

/// A selected/target pair bound to a configuration, reusable across frames.
#[derive(Debug, Clone)]
pub struct CorrectionSession {
    config: CorrectionConfig,
    selected: Rgb,
    target: Rgb,
    delta: Delta3,
}

impl CorrectionSession {
    /// Compute the delta for `selected -> target` once.
    pub fn new(selected: Rgb, target: Rgb, config: CorrectionConfig) -> Self {
        if selected == target {
            warn!(?selected, "Selected and target colors match; correction is an identity");
        }
        let delta = compute_delta(selected, target, config.space);
        Self {
            config,
            selected,
            target,
            delta,
        }
    }

    #[inline]
    pub fn config(&self) -> &CorrectionConfig {
        &self.config
    }

    #[inline]
    pub fn selected(&self) -> Rgb {
        self.selected
    }

    #[inline]
    pub fn target(&self) -> Rgb {
        self.target
    }

    #[inline]
    pub fn delta(&self) -> Delta3 {
        self.delta
    }

    /// Correct a validated frame.
    pub fn correct(&self, frame: &mut RgbaFrame<'_>) -> CorrectionStats {
        correct_frame(frame, self.delta, &self.config)
    }

    /// Validate and correct raw RGBA bytes.
    pub fn correct_buffer(&self, pixels: &mut [u8], width: u32, height: u32) -> Result<CorrectionStats> {
        let mut frame = RgbaFrame::new(pixels, width, height)?;
        Ok(self.correct(&mut frame))
    }
}
