/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mapping flow vectors to colors
use log::debug;
use zune_flo::{is_unknown_flow, FlowField};

use crate::colorwheel::ColorWheel;
use crate::errors::FlowVizErrors;
use crate::image::{RgbImage, RGB_CHANNELS};

/// Factor applied to vectors longer than the normalization scale
const OUT_OF_RANGE_DIMMING: f32 = 0.75;

/// Maps flow vectors to colors using a color wheel
///
/// # Example
/// ```
/// use zune_flowviz::FlowColorizer;
///
/// let colorizer = FlowColorizer::new();
/// // unit motion to the right is pure red
/// assert_eq!(colorizer.map_to_color(1.0, 0.0), [255, 0, 0]);
/// // no motion at all is white
/// assert_eq!(colorizer.map_to_color(0.0, 0.0), [255, 255, 255]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct FlowColorizer<'a> {
    wheel: &'a ColorWheel
}

impl FlowColorizer<'static> {
    /// Create a colorizer using the shared perceptual wheel
    pub fn new() -> FlowColorizer<'static> {
        FlowColorizer {
            wheel: ColorWheel::shared()
        }
    }
}

impl Default for FlowColorizer<'static> {
    fn default() -> Self {
        FlowColorizer::new()
    }
}

impl<'a> FlowColorizer<'a> {
    /// Create a colorizer using a custom wheel
    pub fn with_wheel(wheel: &'a ColorWheel) -> FlowColorizer<'a> {
        FlowColorizer { wheel }
    }

    pub const fn wheel(&self) -> &'a ColorWheel {
        self.wheel
    }

    /// Map an already normalized flow vector to an RGB color
    ///
    /// Direction selects the hue, a radius of `1` gives the pure
    /// wheel color, smaller radii fade to white and larger radii
    /// are darkened to mark them as out of range.
    pub fn map_to_color(&self, u: f32, v: f32) -> [u8; 3] {
        let ncols = self.wheel.len();

        let radius = (u * u + v * v).sqrt();
        // in [-1, 1]
        let angle = (-v).atan2(-u) / core::f32::consts::PI;
        let fk = (angle + 1.0) / 2.0 * (ncols - 1) as f32;

        // fk is never negative, min() guards NaN inputs and rounding at the end
        let k0 = (fk as usize).min(ncols - 1);
        let k1 = (k0 + 1) % ncols;
        let f = fk - k0 as f32;

        let color0 = self.wheel.get(k0);
        let color1 = self.wheel.get(k1);

        let mut pixel = [0_u8; RGB_CHANNELS];

        for (b, out) in pixel.iter_mut().enumerate() {
            let col0 = f32::from(color0[b]) / 255.0;
            let col1 = f32::from(color1[b]) / 255.0;

            let mut col = (1.0 - f) * col0 + f * col1;

            if radius <= 1.0 {
                // increase saturation with radius
                col = 1.0 - radius * (1.0 - col);
            } else {
                col *= OUT_OF_RANGE_DIMMING;
            }
            *out = (255.0 * col) as u8;
        }
        pixel
    }

    /// Color code a whole flow field
    ///
    /// Every vector is divided by `scale` before being mapped, unknown
    /// vectors are painted black.
    ///
    /// # Errors
    /// If `scale` is not a finite number larger than zero
    pub fn colorize(&self, field: &FlowField, scale: f32) -> Result<RgbImage, FlowVizErrors> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(FlowVizErrors::InvalidScale(scale));
        }
        debug!(
            "Colorizing {}x{} flow field with scale {}",
            field.width(),
            field.height(),
            scale
        );
        let mut image = RgbImage::new(field.width(), field.height());

        let width = field.width();
        let flow_rows = field.data().chunks_exact(width * 2);

        for (flow_row, rgb_row) in flow_rows.zip(image.rows_mut()) {
            for (flow, pix) in flow_row
                .chunks_exact(2)
                .zip(rgb_row.chunks_exact_mut(RGB_CHANNELS))
            {
                let (u, v) = (flow[0], flow[1]);

                if is_unknown_flow(u, v) {
                    pix.copy_from_slice(&[0, 0, 0]);
                } else {
                    pix.copy_from_slice(&self.map_to_color(u / scale, v / scale));
                }
            }
        }
        Ok(image)
    }
}

/// Map a normalized flow vector to a color with the shared wheel
pub fn map_to_color(u: f32, v: f32) -> [u8; 3] {
    FlowColorizer::new().map_to_color(u, v)
}

/// Color code a flow field with the shared wheel
///
/// See [`FlowColorizer::colorize`]
pub fn colorize_flow(field: &FlowField, scale: f32) -> Result<RgbImage, FlowVizErrors> {
    FlowColorizer::new().colorize(field, scale)
}
