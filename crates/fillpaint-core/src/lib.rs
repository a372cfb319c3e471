//! FillPaint Core - Basic data structures for paint-bucket filling
//!
//! This crate provides the fundamental data structures used by the
//! FillPaint flood-fill engine:
//!
//! - [`Pixel`] - A four-channel 8-bit color value
//! - [`PixelBuffer`] - Row-major buffer of packed 32-bit pixels
//! - [`Color`] / [`ColorModel`] - Tagged external color values
//! - [`packing`] - The 32-bit pixel layout (alpha in the MSB)
//! - [`composite`] - Source-over blending and alpha scaling
//!
//! # Example
//!
//! ```
//! use fillpaint_core::{Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(4, 3, Pixel::WHITE).unwrap();
//! buffer.set_pixel(1, 1, Pixel::BLACK).unwrap();
//! assert_eq!(buffer.get_pixel(1, 1), Some(Pixel::BLACK));
//! assert_eq!(buffer.data()[0], 0xffff_ffff);
//! ```

pub mod buffer;
pub mod color;
pub mod composite;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use color::{Color, ColorModel};
pub use error::{Error, Result};
pub use pixel::{MAX_TOLERANCE, Pixel, component_diff};

/// Channel layout helpers for 32-bit packed pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
/// Written to memory as a little-endian word, the byte order is
/// `B, G, R, A`, which is the layout of an alpha-first, 32-bit-little
/// bitmap context.
pub mod packing {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Number of bytes in one packed pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit pixel from its channels.
    #[inline]
    pub fn compose_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract `(r, g, b, a)` from a 32-bit pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

}
