//! FillPaint - Paint-bucket flood fill for Rust
//!
//! Recolors the connected region around a seed pixel whose colors lie
//! within a tolerance of the seed's original color.
//!
//! # Overview
//!
//! - Packed 32-bit pixels (alpha in the MSB) and a bounds-checked buffer
//! - Squared per-channel color distance
//! - Row-run scanline flood fill with a fixed tolerance anchor
//! - Source-over compositing and alpha scaling
//!
//! # Example
//!
//! ```
//! use fillpaint::{Color, PixelBuffer, Pixel};
//! use fillpaint::region::{SeedFillOptions, floodfill_color};
//!
//! let mut buffer = PixelBuffer::filled(3, 3, Pixel::WHITE).unwrap();
//! buffer.set_pixel(1, 1, Pixel::BLACK).unwrap();
//!
//! let stats = floodfill_color(
//!     &mut buffer,
//!     0,
//!     0,
//!     &Color::rgb(1.0, 0.0, 0.0),
//!     &SeedFillOptions::new(0),
//! )
//! .unwrap();
//! assert_eq!(stats.painted, 8);
//! assert_eq!(buffer.get_pixel(1, 1), Some(Pixel::BLACK));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use fillpaint_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use fillpaint_region as region;
