/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In memory representation of a decoded flow field
use crate::constants::{FLO_BANDS, FLO_MAX_DIMENSION};
use crate::errors::FloEncodeErrors;

/// Any flow component with a magnitude above this is unknown.
///
/// The comparison is exclusive, a component of exactly `1e9` is still known.
pub const UNKNOWN_FLOW_THRESHOLD: f32 = 1e9;

/// Value used to fill in vectors whose flow is unknown
pub const UNKNOWN_FLOW: f32 = 1e10;

/// Return true if the flow vector `(u,v)` carries no motion information
///
/// This is the case when either component is above [`UNKNOWN_FLOW_THRESHOLD`]
/// in magnitude or is NaN.
///
/// # Example
/// ```
/// use zune_flo::{is_unknown_flow, UNKNOWN_FLOW};
/// assert!(is_unknown_flow(UNKNOWN_FLOW, 0.0));
/// assert!(is_unknown_flow(f32::NAN, 0.0));
/// assert!(!is_unknown_flow(1e9, -1e9));
/// ```
#[inline]
pub fn is_unknown_flow(u: f32, v: f32) -> bool {
    u.abs() > UNKNOWN_FLOW_THRESHOLD || v.abs() > UNKNOWN_FLOW_THRESHOLD || u.is_nan() || v.is_nan()
}

/// A dense two band float image holding per pixel displacements.
///
/// Vectors are stored row-major with both components interleaved,
/// i.e. `u0, v0, u1, v1, ...`, matching the on-disk layout.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
    width:  usize,
    height: usize,
    data:   Vec<f32>
}

impl FlowField {
    /// Create a flow field from interleaved `u,v` data
    ///
    /// # Errors
    /// - Dimensions outside `1..=99999`
    /// - `data.len()` not equal to `2*width*height`
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Result<FlowField, FloEncodeErrors> {
        check_dimensions(width, height)?;

        let expected = width * height * FLO_BANDS;

        if data.len() != expected {
            return Err(FloEncodeErrors::WrongInputLength(expected, data.len()));
        }
        Ok(FlowField {
            width,
            height,
            data
        })
    }

    /// Create a field where every vector is `(u,v)`
    pub fn filled(u: f32, v: f32, width: usize, height: usize) -> Result<FlowField, FloEncodeErrors> {
        check_dimensions(width, height)?;

        let mut data = Vec::with_capacity(width * height * FLO_BANDS);

        for _ in 0..width * height {
            data.push(u);
            data.push(v);
        }
        Ok(FlowField {
            width,
            height,
            data
        })
    }

    /// Used by the decoder, which has already validated the dimensions
    pub(crate) fn from_raw_parts(data: Vec<f32>, width: usize, height: usize) -> FlowField {
        debug_assert_eq!(data.len(), width * height * FLO_BANDS);
        FlowField {
            width,
            height,
            data
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Interleaved `u,v` values, row-major
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the interleaved values
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the field returning the interleaved buffer
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }

    /// Return the vector at column `x`, row `y`
    ///
    /// # Panics
    /// If `x` or `y` is out of bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> (f32, f32) {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        let pos = (y * self.width + x) * FLO_BANDS;
        (self.data[pos], self.data[pos + 1])
    }

    /// Set the vector at column `x`, row `y`
    ///
    /// # Panics
    /// If `x` or `y` is out of bounds
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, u: f32, v: f32) {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        let pos = (y * self.width + x) * FLO_BANDS;
        self.data[pos] = u;
        self.data[pos + 1] = v;
    }

    /// Iterate over all `(u,v)` pairs in row-major order
    pub fn vectors(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.data.chunks_exact(FLO_BANDS).map(|pair| (pair[0], pair[1]))
    }

    /// Return whether the vector at `(x,y)` is unknown
    pub fn is_unknown(&self, x: usize, y: usize) -> bool {
        let (u, v) = self.get(x, y);
        is_unknown_flow(u, v)
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), FloEncodeErrors> {
    if width == 0 || width > FLO_MAX_DIMENSION {
        return Err(FloEncodeErrors::InvalidDimensions("width", width));
    }
    if height == 0 || height > FLO_MAX_DIMENSION {
        return Err(FloEncodeErrors::InvalidDimensions("height", height));
    }
    Ok(())
}
