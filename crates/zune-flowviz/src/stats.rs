/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Motion statistics and normalization scale selection
use log::{info, warn};
use zune_flo::{is_unknown_flow, FlowField};

/// Summary of the known vectors in a flow field
///
/// Ranges are `None` when the field has no known vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct FlowStats {
    /// Number of vectors with usable motion
    pub known:      usize,
    /// Number of vectors flagged unknown
    pub unknown:    usize,
    /// `(min, max)` of the horizontal component
    pub u_range:    Option<(f32, f32)>,
    /// `(min, max)` of the vertical component
    pub v_range:    Option<(f32, f32)>,
    /// Largest vector length, 0 if no vector is known
    pub max_radius: f32
}

impl FlowStats {
    /// Scan a field, skipping unknown vectors
    pub fn compute(field: &FlowField) -> FlowStats {
        let mut stats = FlowStats::default();

        for (u, v) in field.vectors() {
            if is_unknown_flow(u, v) {
                stats.unknown += 1;
                continue;
            }
            stats.known += 1;
            stats.u_range = Some(extend_range(stats.u_range, u));
            stats.v_range = Some(extend_range(stats.v_range, v));
            stats.max_radius = stats.max_radius.max((u * u + v * v).sqrt());
        }
        stats
    }

    /// The scale that maps the longest known vector to radius 1
    ///
    /// Returns `1.0` when there is no known motion, so
    /// all-zero and all-unknown fields can still be colorized.
    pub fn normalization_scale(&self) -> f32 {
        if self.known == 0 || self.max_radius == 0.0 {
            return 1.0;
        }
        self.max_radius
    }
}

fn extend_range(range: Option<(f32, f32)>, value: f32) -> (f32, f32) {
    match range {
        Some((min, max)) => (min.min(value), max.max(value)),
        None => (value, value)
    }
}

/// Compute the normalization scale of a field from its largest motion
///
/// The motion range is logged at `info` level.
pub fn auto_scale(field: &FlowField) -> f32 {
    let stats = FlowStats::compute(field);

    match (stats.u_range, stats.v_range) {
        (Some((min_u, max_u)), Some((min_v, max_v))) => {
            info!(
                "max motion: {:.4}  motion range: u = {:.3} .. {:.3};  v = {:.3} .. {:.3}",
                stats.max_radius, min_u, max_u, min_v, max_v
            );
        }
        _ => warn!("No known flow vectors in {} pixels", stats.unknown)
    }
    let scale = stats.normalization_scale();

    if stats.known > 0 && stats.max_radius == 0.0 {
        info!("Flow is zero everywhere, using scale 1");
    }
    scale
}

/// Pick the scale to colorize a field with
///
/// A user supplied scale is used when it is finite and larger than 0,
/// anything else falls back to [`auto_scale`].
pub fn resolve_scale(field: &FlowField, user_scale: Option<f32>) -> f32 {
    let scale = match user_scale {
        Some(scale) if scale > 0.0 && scale.is_finite() => scale,
        _ => auto_scale(field)
    };
    info!("normalizing by {}", scale);
    scale
}
