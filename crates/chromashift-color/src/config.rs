//! Correction settings, persisted as JSON.

use chromashift_core::{ChromaShiftError, Result};
use serde::{Deserialize, Serialize};

use crate::color_space::ColorSpace;
use crate::correction::HslRange;

/// Default pixel count at which the driver goes parallel (256 x 256).
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Settings for one correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Space the delta is computed and applied in.
    pub space: ColorSpace,
    /// HSL overshoot policy. Ignored for CIE L*a*b*.
    pub hsl_range: HslRange,
    /// Frames with at least this many pixels are split across the rayon pool.
    /// `0` always parallelizes, `usize::MAX` never does.
    pub parallel_threshold: usize,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            space: ColorSpace::default(),
            hsl_range: HslRange::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CorrectionConfig {
    /// Default settings in the given space.
    pub fn with_space(space: ColorSpace) -> Self {
        Self {
            space,
            ..Default::default()
        }
    }

    /// Whether a frame of `pixel_count` pixels takes the parallel path.
    #[inline]
    pub fn use_parallel(&self, pixel_count: usize) -> bool {
        pixel_count >= self.parallel_threshold
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChromaShiftError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data)
            .map_err(|e| ChromaShiftError::Config(format!("Failed to parse config: {}", e)))
    }
}
