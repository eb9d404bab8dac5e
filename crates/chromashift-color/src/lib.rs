//! ChromaShift Color — recolor images by shifting pixels in HSL or CIE L*a*b*.
//!
//! A correction maps one selected color exactly onto a target color and moves
//! every other foreground pixel by the same delta in the chosen space.

pub mod color_space;
pub mod config;
pub mod correction;
pub mod hsl;
pub mod lab;
pub mod pipeline;
pub mod quantize;
pub mod transfer;

pub use color_space::ColorSpace;
pub use config::CorrectionConfig;
pub use correction::{apply_correction, apply_correction_with, compute_delta, HslRange};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use lab::{lab_to_rgb, rgb_to_lab};
pub use pipeline::{
    correct_frame, correct_image, correct_image_with, is_background, CorrectionSession,
    CorrectionStats,
};
pub use quantize::clamp_channel;
