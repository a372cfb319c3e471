//! fillpaint-test - Regression test framework for FillPaint
//!
//! This crate provides a regression test framework supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! It also builds the synthetic fixture buffers the regression tests fill.
//!
//! # Usage
//!
//! ```ignore
//! use fillpaint_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("scanline");
//! rp.compare_values(24.0, painted as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use fillpaint_core::{Pixel, PixelBuffer};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // fillpaint-test is at crates/fillpaint-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Buffer of a single color
pub fn uniform_buffer(width: u32, height: u32, pixel: Pixel) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::filled(width, height, pixel)?)
}

/// Square outline of `frame` pixels on a `background` buffer
///
/// The outline is one pixel thick and sits `inset` pixels inside each
/// edge of a `size` x `size` buffer.
pub fn framed_square(
    size: u32,
    inset: u32,
    frame: Pixel,
    background: Pixel,
) -> TestResult<PixelBuffer> {
    let mut buffer = PixelBuffer::filled(size, size, background)?;
    let far = size.saturating_sub(inset + 1);
    for i in inset..=far {
        buffer.set_pixel(i, inset, frame)?;
        buffer.set_pixel(i, far, frame)?;
        buffer.set_pixel(inset, i, frame)?;
        buffer.set_pixel(far, i, frame)?;
    }
    Ok(buffer)
}

/// Opaque horizontal gradient: the red channel of column `x` is
/// `x * step` (saturating), green and blue are zero
pub fn horizontal_gradient(width: u32, height: u32, step: u8) -> TestResult<PixelBuffer> {
    let mut buffer = PixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let r = (x.saturating_mul(step as u32)).min(255) as u8;
            buffer.set_pixel(x, y, Pixel::opaque(r, 0, 0))?;
        }
    }
    Ok(buffer)
}

/// Checkerboard of `cell` x `cell` squares alternating `a` and `b`,
/// starting with `a` at the origin
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    a: Pixel,
    b: Pixel,
) -> TestResult<PixelBuffer> {
    let cell = cell.max(1);
    let mut buffer = PixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let p = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            buffer.set_pixel(x, y, p)?;
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framed_square() {
        let buffer = framed_square(7, 1, Pixel::BLACK, Pixel::WHITE).unwrap();
        assert_eq!(buffer.count_matching(Pixel::BLACK), 16);
        assert_eq!(buffer.get_pixel(3, 3), Some(Pixel::WHITE));
        assert_eq!(buffer.get_pixel(5, 5), Some(Pixel::BLACK));
    }

    #[test]
    fn test_horizontal_gradient() {
        let buffer = horizontal_gradient(4, 2, 100).unwrap();
        assert_eq!(buffer.get_pixel(1, 1), Some(Pixel::opaque(100, 0, 0)));
        assert_eq!(buffer.get_pixel(3, 0), Some(Pixel::opaque(255, 0, 0)));
    }

    #[test]
    fn test_checkerboard() {
        let buffer = checkerboard(4, 4, 2, Pixel::WHITE, Pixel::BLACK).unwrap();
        assert_eq!(buffer.count_matching(Pixel::WHITE), 8);
        assert_eq!(buffer.get_pixel(2, 0), Some(Pixel::BLACK));
        assert_eq!(buffer.get_pixel(2, 2), Some(Pixel::WHITE));
    }
}
