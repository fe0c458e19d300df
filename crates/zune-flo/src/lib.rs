/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoder and encoder for the Middlebury `.flo` optical flow format
//!
//! A `.flo` file stores a two band float image, the horizontal (`u`) and
//! vertical (`v`) displacement of every pixel. It has the following layout:
//! ```text
//! ╔══════════╤═══════════════════════════════════════════════════════════╗
//! ║ Bytes    │ Description                                               ║
//! ╠══════════╪═══════════════════════════════════════════════════════════╣
//! ║ 4        │ "PIEH" tag, which read as a LE float is 202021.25         ║
//! ╟──────────┼───────────────────────────────────────────────────────────╢
//! ║ 4        │ 32-Bit LE signed integer (width), 1..=99999               ║
//! ╟──────────┼───────────────────────────────────────────────────────────╢
//! ║ 4        │ 32-Bit LE signed integer (height), 1..=99999              ║
//! ╟──────────┼───────────────────────────────────────────────────────────╢
//! ║ [44]     │ 2x32-Bit LE floats [u,v] / pixel, row-major               ║
//! ╚══════════╧═══════════════════════════════════════════════════════════╝
//! ```
//! The file ends right after the last float, anything after it is an error.
//!
//! A flow vector is considered unknown if either component is larger than
//! `1e9` in magnitude or is NaN, see [`is_unknown_flow`].
//!
//! # Example
//! ```no_run
//! use zune_flo::{read_flo, write_flo};
//!
//! let field = read_flo("frame_0001.flo").unwrap();
//! println!("{}x{}", field.width(), field.height());
//! write_flo("copy.flo", &field).unwrap();
//! ```
pub use constants::{FLO_BANDS, FLO_MAX_DIMENSION};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use file::*;
pub use flow::*;
pub use zune_core;

mod constants;
mod decoder;
mod encoder;
mod errors;
mod file;
mod flow;
