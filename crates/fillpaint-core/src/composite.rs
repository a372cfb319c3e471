//! Pixel compositing
//!
//! Source-over alpha blending and alpha scaling, for pixels and for whole
//! buffers. These are layer-combination utilities; the flood fill never
//! blends, it overwrites.
//!
//! All arithmetic is done in `f64` on normalized alpha and every
//! float-to-byte conversion truncates.

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl Pixel {
    /// Composite `self` over `bottom` ("source-over").
    ///
    /// With `a1 = self.a / 255` and `a2 = bottom.a / 255`:
    ///
    /// - `out_c = a1 * self_c + a2 * (1 - a1) * bottom_c` for r, g, b
    /// - `out_a = 255 * (a1 + a2 * (1 - a1))`
    ///
    /// An opaque top returns the top unchanged; a fully transparent top
    /// over an opaque bottom returns the bottom unchanged.
    pub fn blend(self, bottom: Pixel) -> Pixel {
        let a1 = self.a as f64 / 255.0;
        let a2 = bottom.a as f64 / 255.0;
        let under = a2 * (1.0 - a1);
        let mix = |top: u8, bot: u8| (a1 * top as f64 + under * bot as f64) as u8;
        Pixel::new(
            mix(self.r, bottom.r),
            mix(self.g, bottom.g),
            mix(self.b, bottom.b),
            (255.0 * (a1 + under)) as u8,
        )
    }

    /// Scale only the alpha channel by `factor`, truncating.
    ///
    /// Results outside `0..=255` saturate.
    pub fn multiply_alpha(self, factor: f64) -> Pixel {
        Pixel::new(self.r, self.g, self.b, (self.a as f64 * factor) as u8)
    }
}

/// Composite `top` over `bottom`.
///
/// Free-function form of [`Pixel::blend`].
#[inline]
pub fn blend(top: Pixel, bottom: Pixel) -> Pixel {
    top.blend(bottom)
}

/// Scale the alpha channel of `pixel` by `factor`.
///
/// Free-function form of [`Pixel::multiply_alpha`].
#[inline]
pub fn multiply_alpha(pixel: Pixel, factor: f64) -> Pixel {
    pixel.multiply_alpha(factor)
}

impl PixelBuffer {
    /// Composite `top` over this buffer, pixel by pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the buffers differ in size.
    /// The buffer is left untouched in that case.
    pub fn blend_over(&mut self, top: &PixelBuffer) -> Result<()> {
        if !self.sizes_equal(top) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: top.dimensions(),
            });
        }
        for (index, upper) in top.pixels().enumerate() {
            if let Some(lower) = self.get(index) {
                self.set(index, upper.blend(lower))?;
            }
        }
        Ok(())
    }

    /// Scale the alpha of every pixel by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is negative or not
    /// finite.
    pub fn multiply_alpha(&mut self, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "alpha factor must be finite and non-negative: {}",
                factor
            )));
        }
        for index in 0..self.len() {
            if let Some(pixel) = self.get(index) {
                self.set(index, pixel.multiply_alpha(factor))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_opaque_top() {
        let top = Pixel::opaque(10, 200, 30);
        for bottom in [Pixel::WHITE, Pixel::TRANSPARENT, Pixel::new(1, 2, 3, 100)] {
            assert_eq!(top.blend(bottom), top);
        }
    }

    #[test]
    fn test_blend_transparent_top() {
        let bottom = Pixel::opaque(10, 200, 30);
        assert_eq!(Pixel::TRANSPARENT.blend(bottom), bottom);
        assert_eq!(blend(Pixel::new(255, 255, 255, 0), bottom), bottom);
    }

    #[test]
    fn test_blend_half() {
        let top = Pixel::new(200, 0, 0, 128);
        let bottom = Pixel::opaque(0, 0, 200);
        let out = top.blend(bottom);
        // 128/255 * 200 = 100.39, 127/255 * 200 = 99.6
        assert_eq!(out.r, 100);
        assert_eq!(out.g, 0);
        assert_eq!(out.b, 99);
        assert!(out.a >= 254);
    }

    #[test]
    fn test_blend_both_transparent() {
        assert_eq!(Pixel::TRANSPARENT.blend(Pixel::TRANSPARENT), Pixel::TRANSPARENT);
    }

    #[test]
    fn test_multiply_alpha() {
        let p = Pixel::new(1, 2, 3, 200);
        assert_eq!(p.multiply_alpha(0.5), Pixel::new(1, 2, 3, 100));
        assert_eq!(p.multiply_alpha(1.0), p);
        assert_eq!(p.multiply_alpha(0.0), Pixel::new(1, 2, 3, 0));
        assert_eq!(multiply_alpha(Pixel::WHITE, 0.5).a, 127);
    }

    #[test]
    fn test_buffer_blend_over() {
        let mut bottom = PixelBuffer::filled(2, 2, Pixel::WHITE).unwrap();
        let mut top = PixelBuffer::new(2, 2).unwrap();
        top.set_pixel(1, 1, Pixel::BLACK).unwrap();
        bottom.blend_over(&top).unwrap();
        assert_eq!(bottom.get_pixel(0, 0), Some(Pixel::WHITE));
        assert_eq!(bottom.get_pixel(1, 1), Some(Pixel::BLACK));
    }

    #[test]
    fn test_buffer_blend_over_size_mismatch() {
        let mut bottom = PixelBuffer::filled(2, 2, Pixel::WHITE).unwrap();
        let top = PixelBuffer::new(3, 2).unwrap();
        let err = bottom.blend_over(&top).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: (2, 2),
                actual: (3, 2)
            }
        );
        assert_eq!(bottom.count_matching(Pixel::WHITE), 4);
    }

    #[test]
    fn test_buffer_multiply_alpha() {
        let mut buffer = PixelBuffer::filled(2, 1, Pixel::new(9, 9, 9, 100)).unwrap();
        buffer.multiply_alpha(0.5).unwrap();
        assert_eq!(buffer.count_matching(Pixel::new(9, 9, 9, 50)), 2);
        assert!(buffer.multiply_alpha(-1.0).is_err());
        assert!(buffer.multiply_alpha(f64::NAN).is_err());
    }
}
