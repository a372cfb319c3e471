//! PixelBuffer - The packed pixel container
//!
//! `PixelBuffer` owns a row-major array of packed 32-bit pixels
//! (see [`crate::packing`]) together with its width and height.
//!
//! # Pixel layout
//!
//! - One `u32` per pixel, no row padding
//! - Pixel `(x, y)` lives at linear index `x + width * y`
//! - Every accessor validates its coordinate or index; there is no
//!   unchecked access
//!
//! # Ownership model
//!
//! A buffer is exclusively owned by whoever mutates it. Operations that
//! recolor pixels take `&mut PixelBuffer`, so concurrent mutation of one
//! buffer is ruled out at compile time.

use crate::error::{Error, Result};
use crate::packing::BYTES_PER_PIXEL;
use crate::pixel::Pixel;

/// Row-major buffer of packed 32-bit pixels.
///
/// # Examples
///
/// ```
/// use fillpaint_core::{Pixel, PixelBuffer};
///
/// let buffer = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buffer.width(), 640);
/// assert_eq!(buffer.height(), 480);
/// assert_eq!(buffer.get_pixel(0, 0), Some(Pixel::TRANSPARENT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer of transparent black pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![pixel.to_packed(); len],
        })
    }

    /// Wrap existing packed pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DataLengthMismatch`] if `data` does not hold exactly
    /// `width * height` pixels.
    pub fn from_packed(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::DataLengthMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Decode little-endian packed bytes (`B, G, R, A` per pixel).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DataLengthMismatch`] if `bytes` is not exactly
    /// `4 * width * height` long.
    pub fn from_bgra_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        let expected = len * BYTES_PER_PIXEL;
        if bytes.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Encode to little-endian packed bytes (`B, G, R, A` per pixel).
    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    /// Copy the pixels back into a little-endian packed byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `bytes` is not exactly
    /// `4 * width * height` long. Nothing is written in that case.
    pub fn write_bgra_bytes(&self, bytes: &mut [u8]) -> Result<()> {
        let expected = self.data.len() * BYTES_PER_PIXEL;
        if bytes.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        for (chunk, value) in bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(&self.data) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        Ok(())
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a buffer has at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Packed pixel data in row-major order.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Consume the buffer, returning its packed pixel data.
    pub fn into_data(self) -> Vec<u32> {
        self.data
    }

    /// Whether two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Linear index of `(x, y)`, or `None` when out of bounds.
    ///
    /// Takes signed coordinates so that negative positions are rejected
    /// rather than wrapped.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x as usize + self.width as usize * y as usize)
    }

    /// Coordinates of a linear index, or `None` when out of bounds.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.data.len() {
            return None;
        }
        let w = self.width as usize;
        Some(((index % w) as u32, (index / w) as u32))
    }

    /// Get the pixel at a linear index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Pixel> {
        self.data.get(index).map(|&v| Pixel::from_packed(v))
    }

    /// Set the pixel at a linear index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, pixel: Pixel) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = pixel.to_packed();
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.get(x as usize + self.width as usize * y as usize)
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width || y >= self.height {
            let index =
                (x as usize).saturating_add((self.width as usize).saturating_mul(y as usize));
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        self.set(x as usize + self.width as usize * y as usize, pixel)
    }

    /// Set every pixel to `pixel`.
    pub fn clear_to(&mut self, pixel: Pixel) {
        self.data.fill(pixel.to_packed());
    }

    /// Count the pixels equal to `pixel`.
    pub fn count_matching(&self, pixel: Pixel) -> usize {
        let packed = pixel.to_packed();
        self.data.iter().filter(|&&v| v == packed).count()
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.iter().map(|&v| Pixel::from_packed(v))
    }
}
