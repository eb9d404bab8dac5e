//! ChromaShift Core - Foundation types for color correction
//!
//! This crate provides the value types shared by the correction engine:
//! - 8-bit RGB triples and RGBA pixels
//! - HSL and CIE L*a*b* coordinates and the correction delta
//! - RGBA frame buffers and validated in-place views
//! - The error type used at every public boundary

pub mod color;
pub mod error;
pub mod frame;

pub use color::{Delta3, Hsl, Lab, Rgb, Rgba8};
pub use error::{ChromaShiftError, InvalidInput, Result};
pub use frame::{FrameBuffer, RgbaFrame, BYTES_PER_PIXEL};
