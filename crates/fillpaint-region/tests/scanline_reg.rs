//! Scanline flood fill regression test
//!
//! Fills synthetic buffers (outlined squares, gradients, checkerboards)
//! and checks painted counts, run bounds and the written images.
//!
//! # See also
//!
//! `fillpaint_region::scanline`

use fillpaint_core::{Color, Pixel, PixelBuffer};
use fillpaint_region::{
    FillBounds, SeedFillOptions, fill_packed_bytes, floodfill, floodfill_color,
    floodfill_with_stats, seedfill_color,
};
use fillpaint_test::{RegParams, checkerboard, framed_square, horizontal_gradient};

const RED: Pixel = Pixel::opaque(255, 0, 0);
const BLUE: Pixel = Pixel::opaque(0, 0, 255);

// ============================================================================
// Outlined square
// ============================================================================

#[test]
fn scanline_reg_framed_square() {
    let mut rp = RegParams::new("scanline_frame");

    // 9x9 white, 1px black outline from 2..=6, 3x3 white interior
    let mut buffer = framed_square(9, 2, Pixel::BLACK, Pixel::WHITE).unwrap();
    let stats = floodfill_with_stats(&mut buffer, 0, 0, RED, 0);

    rp.compare_values(56.0, stats.painted as f64, 0.0);
    rp.compare_values(56.0, buffer.count_matching(RED) as f64, 0.0);
    rp.compare_values(16.0, buffer.count_matching(Pixel::BLACK) as f64, 0.0);
    rp.compare_values(9.0, buffer.count_matching(Pixel::WHITE) as f64, 0.0);
    rp.compare_values(14.0, stats.runs as f64, 0.0);
    assert_eq!(
        stats.bounds,
        Some(FillBounds {
            x: 0,
            y: 0,
            w: 9,
            h: 9
        })
    );
    rp.write_buffer_and_check(&buffer).unwrap();

    // Interior is a separate region
    let stats = floodfill_with_stats(&mut buffer, 4, 4, BLUE, 0);
    rp.compare_values(9.0, stats.painted as f64, 0.0);
    rp.compare_values(0.0, buffer.count_matching(Pixel::WHITE) as f64, 0.0);
    assert_eq!(
        stats.bounds,
        Some(FillBounds {
            x: 3,
            y: 3,
            w: 3,
            h: 3
        })
    );
    rp.write_buffer_and_check(&buffer).unwrap();

    assert!(rp.cleanup(), "scanline_frame regression test failed");
}

// ============================================================================
// Gradient tolerance
// ============================================================================

#[test]
fn scanline_reg_gradient_tolerance() {
    let mut rp = RegParams::new("scanline_gradient");

    // Red channel steps by 10 per column; squared distance between
    // columns a and b is (10 * (a - b))^2
    let source = horizontal_gradient(10, 3, 10).unwrap();

    // From column 0 with tolerance 400: columns 0..=2
    let mut buffer = source.clone();
    let stats = floodfill_with_stats(&mut buffer, 0, 0, BLUE, 400);
    rp.compare_values(9.0, stats.painted as f64, 0.0);
    rp.compare_values(3.0, stats.runs as f64, 0.0);
    assert_eq!(
        stats.bounds,
        Some(FillBounds {
            x: 0,
            y: 0,
            w: 3,
            h: 3
        })
    );
    rp.write_buffer_and_check(&buffer).unwrap();

    let summary = format!(
        "evaluated={} runs={} painted={}\n",
        stats.evaluated, stats.runs, stats.painted
    );
    rp.write_data_and_check(summary.as_bytes(), "txt").unwrap();
    if rp.display() {
        eprintln!("gradient fill from column 0: {}", summary.trim_end());
    }

    // From column 5 with the same tolerance: columns 3..=7. Column 8 is
    // within 400 of column 7 but not of the seed, so it stays.
    let mut buffer = source.clone();
    let stats = floodfill_with_stats(&mut buffer, 5, 1, BLUE, 400);
    rp.compare_values(15.0, stats.painted as f64, 0.0);
    for y in 0..3 {
        assert_eq!(buffer.get_pixel(2, y), source.get_pixel(2, y));
        assert_eq!(buffer.get_pixel(3, y), Some(BLUE));
        assert_eq!(buffer.get_pixel(7, y), Some(BLUE));
        assert_eq!(buffer.get_pixel(8, y), source.get_pixel(8, y));
    }
    rp.write_buffer_and_check(&buffer).unwrap();

    // Just under the boundary of the next column
    let mut buffer = source.clone();
    let stats = floodfill_with_stats(&mut buffer, 0, 0, BLUE, 399);
    rp.compare_values(6.0, stats.painted as f64, 0.0);

    assert!(rp.cleanup(), "scanline_gradient regression test failed");
}

// ============================================================================
// Connectivity
// ============================================================================

#[test]
fn scanline_reg_checkerboard() {
    let mut rp = RegParams::new("scanline_checker");

    // Single-pixel cells only touch diagonally
    let mut buffer = checkerboard(8, 8, 1, Pixel::WHITE, Pixel::BLACK).unwrap();
    let stats = floodfill_with_stats(&mut buffer, 0, 0, RED, 0);
    rp.compare_values(1.0, stats.painted as f64, 0.0);
    rp.compare_values(31.0, buffer.count_matching(Pixel::WHITE) as f64, 0.0);

    // 2x2 cells
    let mut buffer = checkerboard(8, 8, 2, Pixel::WHITE, Pixel::BLACK).unwrap();
    let stats = floodfill_with_stats(&mut buffer, 3, 3, RED, 0);
    rp.compare_values(4.0, stats.painted as f64, 0.0);
    assert_eq!(
        stats.bounds,
        Some(FillBounds {
            x: 2,
            y: 2,
            w: 2,
            h: 2
        })
    );
    rp.write_buffer_and_check(&buffer).unwrap();

    // Tolerance covering both colors joins everything
    let mut buffer = checkerboard(8, 8, 2, Pixel::WHITE, Pixel::BLACK).unwrap();
    floodfill(&mut buffer, 0, 0, RED, 3 * 255 * 255);
    rp.compare_values(64.0, buffer.count_matching(RED) as f64, 0.0);

    assert!(rp.cleanup(), "scanline_checker regression test failed");
}

// ============================================================================
// Color and packed byte entry points
// ============================================================================

#[test]
fn scanline_reg_entry_points_agree() {
    let mut rp = RegParams::new("scanline_entry");

    let source = framed_square(12, 3, Pixel::BLACK, Pixel::opaque(200, 200, 200)).unwrap();
    let color = Color::rgb(0.0, 1.0, 0.0);
    let options = SeedFillOptions::new(0);

    let mut direct = source.clone();
    floodfill(&mut direct, 1, 10, Pixel::opaque(0, 255, 0), 0);

    let mut via_color = source.clone();
    floodfill_color(&mut via_color, 1, 10, &color, &options).unwrap();
    rp.compare_buffers(&direct, &via_color);

    let copied = seedfill_color(&source, 1, 10, &color, &options).unwrap();
    rp.compare_buffers(&direct, &copied);

    let mut bytes = source.to_bgra_bytes();
    fill_packed_bytes(&mut bytes, 12, 12, 1, 10, &color, &options).unwrap();
    let from_bytes = PixelBuffer::from_bgra_bytes(12, 12, &bytes).unwrap();
    rp.compare_buffers(&direct, &from_bytes);
    rp.compare_bytes(&direct.to_bgra_bytes(), &bytes);

    rp.write_buffer_and_check(&direct).unwrap();

    assert!(rp.cleanup(), "scanline_entry regression test failed");
}

#[test]
fn scanline_reg_seed_outside() {
    let mut rp = RegParams::new("scanline_outside");

    let source = checkerboard(6, 4, 2, Pixel::WHITE, Pixel::BLACK).unwrap();
    for (x, y) in [(-1, 0), (0, -1), (6, 0), (0, 4), (i32::MAX, i32::MIN)] {
        let mut buffer = source.clone();
        let stats = floodfill_with_stats(&mut buffer, x, y, RED, 0);
        assert!(stats.is_empty());
        rp.compare_buffers(&source, &buffer);
    }

    assert!(rp.cleanup(), "scanline_outside regression test failed");
}
