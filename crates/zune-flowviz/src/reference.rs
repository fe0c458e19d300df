/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Legend images showing how directions and magnitudes are colored
use log::debug;

use crate::colorize::FlowColorizer;
use crate::errors::FlowVizErrors;
use crate::image::RgbImage;

/// Extra room around the legend so out of range colors are visible
const DISPLAY_HEADROOM: f32 = 1.04;

/// Legends smaller than this get thinner ticks
const LARGE_TICK_THRESHOLD: usize = 120;

/// Builds square legend images for a color wheel
///
/// The legend covers motions in `[-1.04*max, 1.04*max]` on both axes,
/// draws the axes in black and marks every integer motion on them
/// with a small tick.
pub struct ReferenceImageGenerator<'a> {
    colorizer: FlowColorizer<'a>
}

impl ReferenceImageGenerator<'static> {
    /// Create a generator using the shared perceptual wheel
    pub fn new() -> ReferenceImageGenerator<'static> {
        ReferenceImageGenerator {
            colorizer: FlowColorizer::new()
        }
    }
}

impl Default for ReferenceImageGenerator<'static> {
    fn default() -> Self {
        ReferenceImageGenerator::new()
    }
}

impl<'a> ReferenceImageGenerator<'a> {
    pub fn with_colorizer(colorizer: FlowColorizer<'a>) -> ReferenceImageGenerator<'a> {
        ReferenceImageGenerator { colorizer }
    }

    /// Generate a `side x side` legend for motions up to `max_magnitude`
    ///
    /// # Errors
    /// - `side` is zero
    /// - `max_magnitude` is not a finite number larger than zero
    pub fn generate(&self, max_magnitude: f32, side: usize) -> Result<RgbImage, FlowVizErrors> {
        if side == 0 {
            return Err(FlowVizErrors::InvalidSize(side));
        }
        if !(max_magnitude > 0.0 && max_magnitude.is_finite()) {
            return Err(FlowVizErrors::InvalidMagnitude(max_magnitude));
        }
        debug!("Generating {side}x{side} legend for motions up to {max_magnitude}");

        let range = DISPLAY_HEADROOM * max_magnitude;
        let half = side / 2;

        let mut image = RgbImage::new(side, side);

        for y in 0..side {
            let fy = y as f32 / half as f32 * range - range;

            for x in 0..side {
                // axes stay black
                if x == half || y == half {
                    continue;
                }
                let fx = x as f32 / half as f32 * range - range;

                let rgb = self
                    .colorizer
                    .map_to_color(fx / max_magnitude, fy / max_magnitude);
                image.set_pixel(x, y, rgb);
            }
        }
        draw_ticks(&mut image, max_magnitude, range);

        Ok(image)
    }
}

/// Blacken a cross bar on both axes at every integer motion
fn draw_ticks(image: &mut RgbImage, max_magnitude: f32, range: f32) {
    let side = image.width();
    let half = side / 2;
    let tick_size: i64 = if side < LARGE_TICK_THRESHOLD { 1 } else { 2 };

    let in_bounds = |pos: i64| pos >= 0 && (pos as usize) < side;

    // truncates toward zero
    let tick_position = |k: f32| (k / range * half as f32) as i64 + half as i64;

    let max_tick = max_magnitude.floor();

    let positions: Vec<i64> = if half as f32 <= range {
        // neighbouring ticks are at most a pixel apart, together they
        // cover every position between the outermost ones
        (tick_position(-max_tick)..=tick_position(max_tick)).collect()
    } else {
        // fewer ticks than pixels
        let max_tick = max_tick as i64;
        (-max_tick..=max_tick)
            .map(|k| tick_position(k as f32))
            .collect()
    };

    for ik in positions {
        for t in -tick_size..=tick_size {
            let across = half as i64 + t;

            if in_bounds(ik) && in_bounds(across) {
                image.set_pixel(ik as usize, across as usize, [0, 0, 0]);
                image.set_pixel(across as usize, ik as usize, [0, 0, 0]);
            }
        }
    }
}

/// Generate a legend with the shared wheel
///
/// See [`ReferenceImageGenerator::generate`]
pub fn reference_image(max_magnitude: f32, side: usize) -> Result<RgbImage, FlowVizErrors> {
    ReferenceImageGenerator::new().generate(max_magnitude, side)
}

#[cfg(test)]
mod tests {
    use crate::{map_to_color, reference_image, FlowVizErrors};

    const BLACK: [u8; 3] = [0, 0, 0];

    fn tick_position(k: i32, range: f32, half: usize) -> usize {
        ((k as f32 / range * half as f32) as i64 + half as i64) as usize
    }

    #[test]
    fn test_legend_axes_and_ticks() {
        let image = reference_image(10.0, 151).unwrap();
        assert_eq!(image.dimensions(), (151, 151));

        let half = 75;
        for i in 0..151 {
            assert_eq!(image.pixel(half, i), BLACK);
            assert_eq!(image.pixel(i, half), BLACK);
        }
        let range = 1.04 * 10.0;

        for k in -10..=10 {
            let ik = tick_position(k, range, half);
            // size 151 uses ticks reaching two pixels off the axis
            for t in 73..=77 {
                assert_eq!(image.pixel(ik, t), BLACK, "tick {k} at ({ik},{t})");
                assert_eq!(image.pixel(t, ik), BLACK, "tick {k} at ({t},{ik})");
            }
        }
        // three pixels off the axis is colored again
        let ik = tick_position(5, range, half);
        assert_ne!(image.pixel(ik, 72), BLACK);
        assert_ne!(image.pixel(ik, 78), BLACK);
    }

    #[test]
    fn test_legend_colors() {
        let image = reference_image(10.0, 151).unwrap();

        // far right on the middle row above the axis is red-ish, not black
        let px = image.pixel(140, 74);
        assert!(px[0] > 200, "{px:?}");

        // the corner is outside the unit disk and dimmed
        let range = 1.04 * 10.0_f32;
        let f = -range / 10.0;
        assert_eq!(image.pixel(0, 0), map_to_color(f, f));
        assert!(image.pixel(0, 0).iter().all(|x| *x <= 191));
    }

    #[test]
    fn test_small_legend_uses_thin_ticks() {
        let image = reference_image(3.0, 61).unwrap();
        let half = 30;
        let ik = tick_position(2, 1.04 * 3.0, half);

        for t in 29..=31 {
            assert_eq!(image.pixel(ik, t), BLACK);
        }
        assert_ne!(image.pixel(ik, 28), BLACK);
        assert_ne!(image.pixel(ik, 32), BLACK);
    }

    #[test]
    fn test_tiny_legends() {
        let image = reference_image(1.0, 1).unwrap();
        assert_eq!(image.pixel(0, 0), BLACK);

        // ticks falling outside the image are skipped
        let image = reference_image(5.0, 2).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        let image = reference_image(5.0, 3).unwrap();
        assert_eq!(image.dimensions(), (3, 3));
    }

    #[test]
    fn test_dense_ticks_match_every_integer() {
        // 401 ticks on a 31 pixel legend, walk all of them and compare
        let (max, side) = (200.0_f32, 31);
        let image = reference_image(max, side).unwrap();

        let half = side / 2;
        let range = 1.04 * max;
        let mut expected = vec![false; side];
        for k in -200..=200 {
            expected[tick_position(k, range, half)] = true;
        }
        for (x, is_tick) in expected.iter().enumerate() {
            if x + 1 >= half && x <= half + 1 {
                // the axis itself
                continue;
            }
            let black = (half - 1..=half + 1).all(|y| image.pixel(x, y) == BLACK);
            assert_eq!(black, *is_tick, "column {x}");
        }
    }

    #[test]
    fn test_huge_magnitude_finishes() {
        let image = reference_image(1e30, 11).unwrap();
        assert_eq!(image.dimensions(), (11, 11));

        // ticks sit inside the 1.04 headroom, leaving the outermost pixels
        assert_eq!(image.pixel(5, 4), BLACK);
        assert_eq!(image.pixel(1, 4), BLACK);
        assert_ne!(image.pixel(0, 4), BLACK);

        // a billion ticks squeezed between columns 3 and 147
        let image = reference_image(1e9, 151).unwrap();
        for t in 73..=77 {
            assert_eq!(image.pixel(3, t), BLACK);
            assert_eq!(image.pixel(147, t), BLACK);
        }
        assert_ne!(image.pixel(2, 73), BLACK);
        assert_ne!(image.pixel(148, 73), BLACK);
    }

    #[test]
    fn test_legend_invalid_input() {
        assert!(matches!(
            reference_image(10.0, 0),
            Err(FlowVizErrors::InvalidSize(0))
        ));
        for max in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                reference_image(max, 151),
                Err(FlowVizErrors::InvalidMagnitude(_))
            ));
        }
    }
}
