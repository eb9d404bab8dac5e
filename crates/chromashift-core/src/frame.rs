//! RGBA frame buffers in CPU memory.
//!
//! Pixels are tightly packed, interleaved R, G, B, A bytes with no row padding.

use crate::color::Rgba8;
use crate::error::{InvalidInput, Result};

/// Bytes per interleaved RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A validated, mutable view over caller-owned RGBA bytes.
///
/// Construction checks the buffer shape once so per-pixel work never has to.
#[derive(Debug)]
pub struct RgbaFrame<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaFrame<'a> {
    /// Wrap `data` as a `width` x `height` RGBA frame.
    pub fn new(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        if data.len() % BYTES_PER_PIXEL != 0 {
            return Err(InvalidInput::BufferLength { len: data.len() }.into());
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(InvalidInput::DimensionMismatch {
                expected,
                got: data.len(),
            }
            .into());
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the frame.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// Pixels as a typed slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        bytemuck::cast_slice(&*self.data)
    }

    /// Pixels as a mutable typed slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        bytemuck::cast_slice_mut(&mut *self.data)
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }
}

/// An owned RGBA frame.
///
/// Fields are private so `data` always holds exactly `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a frame filled with a single pixel value.
    pub fn solid(width: u32, height: u32, pixel: Rgba8) -> Self {
        let count = width as usize * height as usize;
        let data = bytemuck::cast_slice::<Rgba8, u8>(&vec![pixel; count]).to_vec();
        Self {
            width,
            height,
            data,
        }
    }

    /// Take ownership of existing RGBA bytes after validating their shape.
    pub fn from_rgba(width: u32, height: u32, mut data: Vec<u8>) -> Result<Self> {
        RgbaFrame::new(&mut data, width, height)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Interleaved RGBA bytes, mutable in place. The length cannot change.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give back the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a validated in-place view.
    pub fn as_frame_mut(&mut self) -> RgbaFrame<'_> {
        RgbaFrame {
            data: &mut self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Pixel at (x, y), or `None` outside the frame.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let pixels: &[Rgba8] = bytemuck::cast_slice(self.data.as_slice());
        pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        match self.get_pixel(x, y) {
            Some(px) => px,
            None => panic!(
                "pixel ({x}, {y}) out of bounds for {}x{} frame",
                self.width, self.height
            ),
        }
    }

    /// Create a test pattern frame (color bars).
    pub fn test_pattern(width: u32, height: u32) -> Self {
        const BARS: [Rgba8; 8] = [
            Rgba8::new(255, 255, 255, 255), // White
            Rgba8::new(255, 255, 0, 255),   // Yellow
            Rgba8::new(0, 255, 255, 255),   // Cyan
            Rgba8::new(0, 255, 0, 255),     // Green
            Rgba8::new(255, 0, 255, 255),   // Magenta
            Rgba8::new(255, 0, 0, 255),     // Red
            Rgba8::new(0, 0, 255, 255),     // Blue
            Rgba8::new(0, 0, 0, 255),       // Black
        ];

        let mut frame = Self::solid(width, height, Rgba8::default());
        let w = width as usize;
        for (i, px) in frame.as_frame_mut().pixels_mut().iter_mut().enumerate() {
            let x = i % w;
            *px = BARS[x * 8 / w];
        }
        frame
    }
}
