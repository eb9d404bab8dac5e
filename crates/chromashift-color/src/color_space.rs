//! The working color space a correction pass operates in.

use std::fmt;
use std::str::FromStr;

use chromashift_core::ChromaShiftError;
use serde::{Deserialize, Serialize};

/// Color space used for both the delta and every corrected pixel of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Hue/saturation/lightness, hue as a fraction of a turn
    #[default]
    Hsl,
    /// CIE L*a*b* referenced to D65
    #[serde(alias = "lab")]
    CieLab,
}

impl ColorSpace {
    /// Canonical selector string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hsl => "hsl",
            Self::CieLab => "cielab",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hsl => "HSL",
            Self::CieLab => "CIE L*a*b*",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = ChromaShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("hsl") {
            Ok(Self::Hsl)
        } else if s.eq_ignore_ascii_case("cielab") || s.eq_ignore_ascii_case("lab") {
            Ok(Self::CieLab)
        } else {
            Err(ChromaShiftError::UnknownColorSpace(s.to_string()))
        }
    }
}
