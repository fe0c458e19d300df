/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The perceptual hue table flow directions are mapped onto
//!
//! The wheel walks Red -> Yellow -> Green -> Cyan -> Blue -> Magenta -> Red.
//! Arc lengths differ because one can tell apart more shades between
//! red and yellow than between yellow and green.
use std::sync::OnceLock;

use log::trace;

use crate::errors::FlowVizErrors;

/// Maximum number of entries a wheel may hold
pub const COLOR_WHEEL_CAPACITY: usize = 60;

/// Lengths of the six arcs, in the order RY, YG, GC, CB, BM, MR
pub const PERCEPTUAL_ARCS: [usize; 6] = [15, 6, 4, 11, 13, 6];

static SHARED_WHEEL: OnceLock<ColorWheel> = OnceLock::new();

/// An ordered, cyclic table of RGB hues
///
/// Entries are interpolated with integer division inside each arc, so
/// the table matches the one used by the Middlebury flow tools
/// bit for bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorWheel {
    colors: Vec<[u8; 3]>
}

impl ColorWheel {
    /// Return the perceptual color wheel
    ///
    /// This is a copy of [`ColorWheel::shared`], the table itself is
    /// only ever built once.
    pub fn new() -> ColorWheel {
        ColorWheel::shared().clone()
    }

    /// The process wide perceptual color wheel
    ///
    /// Built on first use, later calls return the same table.
    /// Safe to call from multiple threads.
    pub fn shared() -> &'static ColorWheel {
        SHARED_WHEEL.get_or_init(|| {
            trace!("Building color wheel");
            ColorWheel {
                colors: build_arcs(PERCEPTUAL_ARCS)
            }
        })
    }

    /// Build a wheel from custom arc lengths
    ///
    /// # Errors
    /// If the arcs add up to more than [`COLOR_WHEEL_CAPACITY`] entries
    /// or to no entries at all.
    pub fn try_build(arcs: [usize; 6]) -> Result<ColorWheel, FlowVizErrors> {
        let total = arcs.iter().fold(0_usize, |acc, x| acc.saturating_add(*x));

        if total > COLOR_WHEEL_CAPACITY || total == 0 {
            return Err(FlowVizErrors::ColorWheelOverflow(total, COLOR_WHEEL_CAPACITY));
        }
        Ok(ColorWheel {
            colors: build_arcs(arcs)
        })
    }

    /// Number of colors in the wheel, 55 for the perceptual wheel
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// # Panics
    /// If `k >= len()`
    #[inline]
    pub fn get(&self, k: usize) -> [u8; 3] {
        self.colors[k]
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}

impl Default for ColorWheel {
    fn default() -> Self {
        ColorWheel::new()
    }
}

fn build_arcs(arcs: [usize; 6]) -> Vec<[u8; 3]> {
    let [ry, yg, gc, cb, bm, mr] = arcs;
    // 255*i/len, rounding down
    let ramp = |i: usize, len: usize| (255 * i / len) as u8;

    let mut colors = Vec::with_capacity(COLOR_WHEEL_CAPACITY);

    colors.extend((0..ry).map(|i| [255, ramp(i, ry), 0]));
    colors.extend((0..yg).map(|i| [255 - ramp(i, yg), 255, 0]));
    colors.extend((0..gc).map(|i| [0, 255, ramp(i, gc)]));
    colors.extend((0..cb).map(|i| [0, 255 - ramp(i, cb), 255]));
    colors.extend((0..bm).map(|i| [ramp(i, bm), 0, 255]));
    colors.extend((0..mr).map(|i| [255, 0, 255 - ramp(i, mr)]));

    colors
}
