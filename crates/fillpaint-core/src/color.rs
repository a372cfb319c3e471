//! External color values
//!
//! Callers describe the fill color as a tagged [`Color`] with
//! floating-point components in `[0, 1]`, the way platform color objects
//! do. Only monochrome and RGB colors can be turned into a [`Pixel`];
//! every other model either degrades to [`Pixel::TRANSPARENT`]
//! ([`Pixel::from_color`]) or is reported as
//! [`Error::UnsupportedColorModel`] ([`Pixel::try_from_color`]).
//!
//! # Truncation
//!
//! Component-to-byte conversion is `(component * 255.0) as u8`, which
//! truncates toward zero. `0.999` maps to 254, not 255. Out-of-range and
//! NaN components saturate to `0..=255`.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Color space model of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Single white component plus alpha
    Monochrome,
    /// Red, green, blue plus alpha
    Rgb,
    Cmyk,
    Lab,
    DeviceN,
    Indexed,
    Pattern,
    Xyz,
    /// Model could not be determined
    Unknown,
}

impl ColorModel {
    /// Whether colors of this model can be converted to a [`Pixel`].
    pub fn is_supported(self) -> bool {
        matches!(self, ColorModel::Monochrome | ColorModel::Rgb)
    }
}

/// A color value tagged with its model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Gray level and alpha, both in `[0, 1]`
    Monochrome { white: f64, alpha: f64 },
    /// RGB components and alpha, all in `[0, 1]`
    Rgb {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
    /// A color in a model this crate does not convert.
    ///
    /// The tag is kept for diagnostics only; conversion dispatches on the
    /// variant, so `Other(ColorModel::Rgb)` is still unsupported.
    Other(ColorModel),
}

impl Color {
    /// Opaque RGB color.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Color::Rgb {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// RGB color with alpha.
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Color::Rgb {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Monochrome color with alpha.
    pub fn gray(white: f64, alpha: f64) -> Self {
        Color::Monochrome { white, alpha }
    }

    /// The model of this color.
    pub fn model(&self) -> ColorModel {
        match self {
            Color::Monochrome { .. } => ColorModel::Monochrome,
            Color::Rgb { .. } => ColorModel::Rgb,
            Color::Other(model) => *model,
        }
    }
}

/// Scale a `[0, 1]` component to a byte, truncating.
#[inline]
fn component_to_byte(component: f64) -> u8 {
    (component * 255.0) as u8
}

impl Pixel {
    /// Convert a color, degrading unsupported models to transparent black.
    ///
    /// Monochrome colors set `r = g = b` from the white component. This is
    /// the conversion the fill uses by default.
    pub fn from_color(color: &Color) -> Pixel {
        match Pixel::try_from_color(color) {
            Ok(pixel) => pixel,
            Err(_) => {
                log::warn!(
                    "color model {:?} is not supported, using transparent black",
                    color.model()
                );
                Pixel::TRANSPARENT
            }
        }
    }

    /// Convert a color, rejecting unsupported models.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedColorModel`] for any model other than
    /// monochrome or RGB.
    pub fn try_from_color(color: &Color) -> Result<Pixel> {
        match *color {
            Color::Monochrome { white, alpha } => {
                let w = component_to_byte(white);
                Ok(Pixel::new(w, w, w, component_to_byte(alpha)))
            }
            Color::Rgb {
                red,
                green,
                blue,
                alpha,
            } => Ok(Pixel::new(
                component_to_byte(red),
                component_to_byte(green),
                component_to_byte(blue),
                component_to_byte(alpha),
            )),
            Color::Other(model) => Err(Error::UnsupportedColorModel(model)),
        }
    }

    /// Convert to an RGB color with components `channel / 255`.
    pub fn to_color(self) -> Color {
        Color::Rgb {
            red: self.r as f64 / 255.0,
            green: self.g as f64 / 255.0,
            blue: self.b as f64 / 255.0,
            alpha: self.a as f64 / 255.0,
        }
    }
}

impl From<&Color> for Pixel {
    fn from(color: &Color) -> Self {
        Pixel::from_color(color)
    }
}
