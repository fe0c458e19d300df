/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color coding for optical flow fields
//!
//! Direction of motion is mapped to hue using a perceptual color wheel and
//! magnitude is mapped to saturation, so small motion fades to white and
//! motion at the normalization scale shows the pure wheel color.
//! Motion beyond the scale keeps its hue but is darkened.
//!
//! This crate provides
//! - [`ColorWheel`]: the hue table, built once and shared
//! - [`FlowColorizer`] and [`colorize_flow`]: flow field to RGB image
//! - [`FlowStats`], [`auto_scale`] and [`resolve_scale`]: picking the normalization scale
//! - [`reference_image`]: a legend image showing how colors map to motion
//!
//! # Example
//! ```
//! use zune_flo::FlowField;
//! use zune_flowviz::{auto_scale, colorize_flow};
//!
//! let field = FlowField::filled(2.0, -1.0, 8, 8).unwrap();
//! let scale = auto_scale(&field);
//! let image = colorize_flow(&field, scale).unwrap();
//! assert_eq!(image.as_bytes().len(), 8 * 8 * 3);
//! ```
//!
//! # Features
//! - `serde-support`: Makes [`FlowStats`] serializable
pub use colorize::*;
pub use colorwheel::*;
pub use errors::*;
pub use image::*;
pub use reference::*;
pub use stats::*;

mod colorize;
mod colorwheel;
mod errors;
mod image;
mod reference;
mod stats;
