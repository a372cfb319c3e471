//! Scanline flood fill
//!
//! This module implements the paint-bucket fill: starting from a seed
//! pixel, recolor the 4-connected region of pixels whose color is within
//! a tolerance of the seed's original color.
//!
//! # Algorithm
//!
//! Row-run scanline fill. Each accepted queue entry anchors a horizontal
//! run, which is grown left and right (painting as it goes) until a
//! rejected pixel or the buffer edge. Pixels directly above and below the
//! run that are still unvisited and within tolerance are queued as new
//! anchors.
//!
//! The tolerance anchor is the seed's color read once before any pixel is
//! painted. It is never re-derived from painted pixels, so gradients are
//! not followed beyond the tolerance of the seed.
//!
//! Each linear index is evaluated at most once per call, so at most
//! `width * height` anchors are evaluated and the queue never holds more
//! than `width * height` entries.

use crate::error::{RegionError, RegionResult};
use fillpaint_core::{Color, MAX_TOLERANCE, Pixel, PixelBuffer};
use std::collections::VecDeque;

/// Options for color flood fill operations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedFillOptions {
    /// Maximum accepted squared color distance, inclusive
    pub tolerance: u32,
    /// Reject unsupported color models and out-of-range tolerances
    /// instead of degrading silently
    pub strict: bool,
}

impl SeedFillOptions {
    /// Create new lenient options with the specified tolerance
    pub fn new(tolerance: u32) -> Self {
        Self {
            tolerance,
            strict: false,
        }
    }

    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable strict mode
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Set strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check the options.
    ///
    /// Lenient options are always valid; a tolerance above
    /// [`MAX_TOLERANCE`] simply accepts every pixel.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`RegionError::InvalidParameters`] if the
    /// tolerance exceeds [`MAX_TOLERANCE`].
    pub fn validate(&self) -> RegionResult<()> {
        if self.strict && self.tolerance > MAX_TOLERANCE {
            return Err(RegionError::InvalidParameters(format!(
                "tolerance {} exceeds maximum {}",
                self.tolerance, MAX_TOLERANCE
            )));
        }
        Ok(())
    }

    /// Convert the fill color according to the strictness setting.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the core `UnsupportedColorModel` error for
    /// colors that are neither monochrome nor RGB.
    pub fn resolve_color(&self, color: &Color) -> RegionResult<Pixel> {
        if self.strict {
            Ok(Pixel::try_from_color(color)?)
        } else {
            Ok(Pixel::from_color(color))
        }
    }
}

/// Bounding box of the painted pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillBounds {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl FillBounds {
    fn include_run(bounds: Option<Self>, x_start: u32, x_end: u32, y: u32) -> Self {
        match bounds {
            None => Self {
                x: x_start,
                y,
                w: x_end - x_start + 1,
                h: 1,
            },
            Some(b) => {
                let left = b.x.min(x_start);
                let top = b.y.min(y);
                let right = (b.x + b.w - 1).max(x_end);
                let bottom = (b.y + b.h - 1).max(y);
                Self {
                    x: left,
                    y: top,
                    w: right - left + 1,
                    h: bottom - top + 1,
                }
            }
        }
    }

    /// Whether `(x, y)` lies inside the box
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Summary of one fill call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillStats {
    /// Queue entries evaluated against the tolerance
    pub evaluated: usize,
    /// Horizontal runs painted
    pub runs: usize,
    /// Pixel writes performed (a pixel may be written more than once
    /// when the target color is itself within tolerance)
    pub painted: usize,
    /// Bounding box of every painted pixel
    pub bounds: Option<FillBounds>,
}

impl FillStats {
    /// Whether the call painted nothing
    pub fn is_empty(&self) -> bool {
        self.runs == 0
    }
}

/// Per-index traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    Queued,
    Visited,
}

/// Flood fill a pixel buffer starting from a seed point
///
/// Recolors, in place, the 4-connected region of pixels whose distance to
/// the seed's original color is at most `tolerance`.
///
/// # Arguments
///
/// * `buffer` - Buffer to fill
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `target` - Color written to every accepted pixel
/// * `tolerance` - Maximum squared color distance, inclusive
///
/// A seed outside the buffer is a no-op.
pub fn floodfill(
    buffer: &mut PixelBuffer,
    seed_x: i32,
    seed_y: i32,
    target: Pixel,
    tolerance: u32,
) {
    floodfill_with_stats(buffer, seed_x, seed_y, target, tolerance);
}

/// Flood fill a pixel buffer and report what was done
///
/// Same as [`floodfill`], returning a [`FillStats`] summary. A seed outside
/// the buffer returns empty stats and leaves the buffer untouched.
pub fn floodfill_with_stats(
    buffer: &mut PixelBuffer,
    seed_x: i32,
    seed_y: i32,
    target: Pixel,
    tolerance: u32,
) -> FillStats {
    let mut stats = FillStats::default();

    let Some(seed) = buffer.index_of(seed_x, seed_y) else {
        log::debug!(
            "seed ({}, {}) outside {}x{} buffer, nothing to fill",
            seed_x,
            seed_y,
            buffer.width(),
            buffer.height()
        );
        return stats;
    };
    let Some(reference) = buffer.get(seed) else {
        return stats;
    };

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let accepts = |buffer: &PixelBuffer, index: usize| {
        buffer
            .get(index)
            .is_some_and(|p| p.within_tolerance(reference, tolerance))
    };

    let mut marks = vec![Mark::Unseen; buffer.len()];
    let mut queue = VecDeque::new();
    queue.push_back(seed);
    marks[seed] = Mark::Queued;

    while let Some(index) = queue.pop_front() {
        if marks[index] == Mark::Visited {
            continue;
        }
        marks[index] = Mark::Visited;
        stats.evaluated += 1;

        if !accepts(buffer, index) {
            continue;
        }

        let x0 = index % width;
        let y = index / width;
        let row = y * width;

        // Grow left from the anchor, painting as we go
        let mut min_x = x0 as isize;
        while min_x >= 0 {
            let i = row + min_x as usize;
            if !accepts(buffer, i) {
                break;
            }
            let _ = buffer.set(i, target);
            stats.painted += 1;
            min_x -= 1;
        }

        // Grow right
        let mut max_x = x0 + 1;
        while max_x < width {
            let i = row + max_x;
            if !accepts(buffer, i) {
                break;
            }
            let _ = buffer.set(i, target);
            stats.painted += 1;
            max_x += 1;
        }

        let start = (min_x + 1) as usize;
        let end = max_x;
        stats.runs += 1;
        stats.bounds = Some(FillBounds::include_run(
            stats.bounds,
            start as u32,
            (end - 1) as u32,
            y as u32,
        ));
        log::trace!("painted run y={} x={}..{}", y, start, end);

        // Queue matching pixels directly below and above the run
        for x in start..end {
            if y + 1 < height {
                let i = row + width + x;
                if marks[i] == Mark::Unseen && accepts(buffer, i) {
                    marks[i] = Mark::Queued;
                    queue.push_back(i);
                }
            }
            if y > 0 {
                let i = row - width + x;
                if marks[i] == Mark::Unseen && accepts(buffer, i) {
                    marks[i] = Mark::Queued;
                    queue.push_back(i);
                }
            }
        }
    }

    log::debug!(
        "fill from ({}, {}): evaluated={} runs={} painted={}",
        seed_x,
        seed_y,
        stats.evaluated,
        stats.runs,
        stats.painted
    );
    stats
}

/// Flood fill with an external color value
///
/// Converts `color` and checks `options` before touching the buffer, then
/// fills in place.
///
/// # Errors
///
/// In strict mode, returns an error for an unsupported color model or a
/// tolerance above [`MAX_TOLERANCE`]. The buffer is unchanged on error.
pub fn floodfill_color(
    buffer: &mut PixelBuffer,
    seed_x: i32,
    seed_y: i32,
    color: &Color,
    options: &SeedFillOptions,
) -> RegionResult<FillStats> {
    options.validate()?;
    let target = options.resolve_color(color)?;
    Ok(floodfill_with_stats(
        buffer,
        seed_x,
        seed_y,
        target,
        options.tolerance,
    ))
}

/// Seed fill into a copy of the input
///
/// Creates a new buffer by flood filling from the seed point in a copy of
/// `buffer`.
///
/// # Returns
///
/// A new buffer with the filled region. A seed outside the buffer yields
/// an unchanged copy.
///
/// # Errors
///
/// Forwards the strict-mode errors of [`floodfill_color`]: an unsupported
/// color model or a tolerance above [`MAX_TOLERANCE`].
pub fn seedfill_color(
    buffer: &PixelBuffer,
    seed_x: i32,
    seed_y: i32,
    color: &Color,
    options: &SeedFillOptions,
) -> RegionResult<PixelBuffer> {
    let mut output = buffer.clone();
    floodfill_color(&mut output, seed_x, seed_y, color, options)?;
    Ok(output)
}

/// Flood fill a raw little-endian packed byte buffer
///
/// `bytes` holds `width * height` pixels of 4 bytes each, in the memory
/// order of a 32-bit-little, alpha-first bitmap (`B, G, R, A`).
///
/// # Errors
///
/// Returns an error if the dimensions are zero, `bytes` has the wrong
/// length, or (in strict mode) the color or tolerance is rejected. The
/// bytes are left untouched on error.
pub fn fill_packed_bytes(
    bytes: &mut [u8],
    width: u32,
    height: u32,
    seed_x: i32,
    seed_y: i32,
    color: &Color,
    options: &SeedFillOptions,
) -> RegionResult<FillStats> {
    let mut buffer = PixelBuffer::from_bgra_bytes(width, height, bytes)?;
    let stats = floodfill_color(&mut buffer, seed_x, seed_y, color, options)?;
    if !stats.is_empty() {
        buffer.write_bgra_bytes(bytes)?;
    }
    Ok(stats)
}
