/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors from invalid parameters passed to the colorizer
/// or the legend generator
pub enum FlowVizErrors {
    /// Normalization scale must be finite and larger than 0
    InvalidScale(f32),
    /// Legend magnitude must be finite and larger than 0
    InvalidMagnitude(f32),
    /// Legend side length must be larger than 0
    InvalidSize(usize),
    /// Color wheel arcs do not fit in the table
    ///
    /// # Arguments
    /// - sum of the arc lengths
    /// - table capacity
    ColorWheelOverflow(usize, usize)
}

impl Debug for FlowVizErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FlowVizErrors::InvalidScale(scale) => {
                writeln!(f, "Normalization scale must be larger than 0, found {scale}")
            }
            FlowVizErrors::InvalidMagnitude(magnitude) => {
                writeln!(f, "Legend magnitude must be larger than 0, found {magnitude}")
            }
            FlowVizErrors::InvalidSize(size) => {
                writeln!(f, "Legend side length must be larger than 0, found {size}")
            }
            FlowVizErrors::ColorWheelOverflow(total, capacity) => {
                writeln!(
                    f,
                    "Color wheel needs {total} entries but only {capacity} are available"
                )
            }
        }
    }
}

impl Display for FlowVizErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for FlowVizErrors {}
