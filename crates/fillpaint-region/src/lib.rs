//! fillpaint-region - Region filling for FillPaint
//!
//! This crate provides the paint-bucket operation:
//!
//! - **Scanline flood fill** - Recolor the 4-connected region around a
//!   seed whose colors are within a tolerance of the seed's color
//! - **Color fill** - The same, driven by an external [`Color`] value with
//!   lenient or strict conversion
//! - **Packed byte fill** - Fill a raw 32-bit-little, alpha-first byte
//!   buffer as handed over by a bitmap context
//!
//! # Examples
//!
//! ## Flood fill
//!
//! ```
//! use fillpaint_region::floodfill;
//! use fillpaint_core::{Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::filled(10, 10, Pixel::WHITE).unwrap();
//! buffer.set_pixel(5, 5, Pixel::BLACK).unwrap();
//!
//! // Fill from seed point
//! floodfill(&mut buffer, 0, 0, Pixel::opaque(255, 0, 0), 0);
//! assert_eq!(buffer.count_matching(Pixel::opaque(255, 0, 0)), 99);
//! assert_eq!(buffer.get_pixel(5, 5), Some(Pixel::BLACK));
//! ```
//!
//! ## Strict color fill
//!
//! ```
//! use fillpaint_region::{SeedFillOptions, floodfill_color};
//! use fillpaint_core::{Color, ColorModel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new(4, 4).unwrap();
//! let options = SeedFillOptions::new(0).strict();
//! let result = floodfill_color(&mut buffer, 0, 0, &Color::Other(ColorModel::Cmyk), &options);
//! assert!(result.is_err());
//! ```
//!
//! [`Color`]: fillpaint_core::Color

pub mod error;
pub mod scanline;

// Re-export core types
pub use fillpaint_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export scanline types and functions
pub use scanline::{
    FillBounds, FillStats, SeedFillOptions, fill_packed_bytes, floodfill, floodfill_color,
    floodfill_with_stats, seedfill_color,
};
