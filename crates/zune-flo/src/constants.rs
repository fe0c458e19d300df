/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Float the first four bytes must decode to.
///
/// Also catches files written on big endian machines.
pub(crate) const FLO_TAG_FLOAT: f32 = 202021.25;

/// Tag written at the start of every file, same bits as [`FLO_TAG_FLOAT`]
pub(crate) const FLO_TAG_STRING: &[u8; 4] = b"PIEH";

/// tag + width + height
pub(crate) const FLO_HEADER_SIZE: usize = 12;

/// Bytes read from the stream at a time while decoding the payload
pub(crate) const FLO_READ_CHUNK: usize = 1 << 16;

/// Number of bands stored per pixel, `u` and `v`
pub const FLO_BANDS: usize = 2;

/// Largest width or height a `.flo` file may declare
pub const FLO_MAX_DIMENSION: usize = 99999;
