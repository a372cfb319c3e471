//! Pixel value type and color distance
//!
//! A [`Pixel`] is four unsigned 8-bit channels. It converts losslessly to
//! and from the packed 32-bit layout described in [`crate::packing`], and
//! measures its distance to other pixels with a squared per-channel metric
//! used for tolerance tests.

use crate::packing;

/// Largest possible value of [`Pixel::diff`]: `4 * 255^2`.
///
/// Any tolerance at or above this value accepts every pixel.
pub const MAX_TOLERANCE: u32 = 4 * 255 * 255;

/// A four-channel, 8-bit-per-channel color.
///
/// Two pixels are equal iff all four channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the result of converting an unsupported color.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);

    /// Create a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a 32-bit pixel (`0xAARRGGBB`).
    #[inline]
    pub fn from_packed(value: u32) -> Self {
        let (r, g, b, a) = packing::extract_argb(value);
        Self { r, g, b, a }
    }

    /// Pack into a 32-bit pixel (`0xAARRGGBB`).
    #[inline]
    pub fn to_packed(self) -> u32 {
        packing::compose_argb(self.r, self.g, self.b, self.a)
    }

    /// Channels as an `(r, g, b, a)` tuple.
    #[inline]
    pub fn channels(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Squared color distance to `other`.
    ///
    /// Sum over the four channels of the squared absolute channel
    /// difference. The result lies in `[0, MAX_TOLERANCE]`, is symmetric,
    /// and is zero iff the pixels are equal.
    #[inline]
    pub fn diff(self, other: Pixel) -> u32 {
        let r = component_diff(self.r, other.r) as u32;
        let g = component_diff(self.g, other.g) as u32;
        let b = component_diff(self.b, other.b) as u32;
        let a = component_diff(self.a, other.a) as u32;
        r * r + g * g + b * b + a * a
    }

    /// Whether `self` is accepted against `reference` at `tolerance`.
    ///
    /// The boundary is inclusive: a distance equal to the tolerance passes.
    #[inline]
    pub fn within_tolerance(self, reference: Pixel, tolerance: u32) -> bool {
        self.diff(reference) <= tolerance
    }
}

impl From<u32> for Pixel {
    fn from(value: u32) -> Self {
        Pixel::from_packed(value)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.to_packed()
    }
}

impl From<(u8, u8, u8, u8)> for Pixel {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Pixel::new(r, g, b, a)
    }
}

/// Absolute difference of two channel values.
///
/// Computed as `max - min` so the subtraction never underflows.
#[inline]
pub fn component_diff(l: u8, r: u8) -> u8 {
    l.max(r) - l.min(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let p = Pixel::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(p.to_packed(), 0x7812_3456);
        assert_eq!(Pixel::from_packed(0x7812_3456), p);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Pixel::WHITE.to_packed(), 0xffff_ffff);
        assert_eq!(Pixel::BLACK.to_packed(), 0xff00_0000);
        assert_eq!(Pixel::TRANSPARENT.to_packed(), 0);
        assert_eq!(Pixel::default(), Pixel::TRANSPARENT);
    }

    #[test]
    fn test_conversions() {
        let p: Pixel = 0xff80_4020u32.into();
        assert_eq!(p.channels(), (0x80, 0x40, 0x20, 0xff));
        let v: u32 = p.into();
        assert_eq!(v, 0xff80_4020);
        assert_eq!(Pixel::from((1, 2, 3, 4)), Pixel::new(1, 2, 3, 4));
    }

    #[test]
    fn test_component_diff() {
        assert_eq!(component_diff(0, 255), 255);
        assert_eq!(component_diff(255, 0), 255);
        assert_eq!(component_diff(100, 100), 0);
        assert_eq!(component_diff(3, 10), 7);
    }

    #[test]
    fn test_diff() {
        assert_eq!(Pixel::WHITE.diff(Pixel::WHITE), 0);
        assert_eq!(Pixel::BLACK.diff(Pixel::WHITE), 3 * 255 * 255);
        assert_eq!(Pixel::TRANSPARENT.diff(Pixel::WHITE), MAX_TOLERANCE);
        assert_eq!(MAX_TOLERANCE, 260_100);

        let p = Pixel::new(10, 20, 30, 40);
        let q = Pixel::new(13, 16, 30, 41);
        // 3^2 + 4^2 + 0 + 1^2
        assert_eq!(p.diff(q), 26);
        assert_eq!(q.diff(p), 26);
    }

    #[test]
    fn test_within_tolerance_is_inclusive() {
        let p = Pixel::new(10, 20, 30, 40);
        let q = Pixel::new(13, 16, 30, 41);
        assert!(q.within_tolerance(p, 26));
        assert!(!q.within_tolerance(p, 25));
        assert!(p.within_tolerance(p, 0));
    }
}
