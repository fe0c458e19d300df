/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the `.flo` format
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};

use crate::constants::{FLO_BANDS, FLO_HEADER_SIZE, FLO_TAG_STRING};
use crate::errors::FloEncodeErrors;
use crate::flow::{check_dimensions, FlowField};

/// A `.flo` encoder
///
/// Data is interleaved `u,v` floats in row-major order,
/// exactly `2*width*height` of them.
///
/// # Example
/// - Encode a 4 by 2 field where every pixel moves one step right
/// ```
/// use zune_flo::FloEncoder;
///
/// let data = [1.0_f32, 0.0].repeat(4 * 2);
/// let mut output = vec![];
/// let written = FloEncoder::new(&data, 4, 2).encode(&mut output).unwrap();
///
/// assert_eq!(written, 12 + 4 * 2 * 2 * 4);
/// assert_eq!(&output[..4], b"PIEH");
/// ```
pub struct FloEncoder<'a> {
    data:   &'a [f32],
    width:  usize,
    height: usize
}

impl<'a> FloEncoder<'a> {
    /// Create a new encoder which will encode `data`
    ///
    /// # Arguments
    /// - data: interleaved flow vectors
    /// - width, height: dimensions of the field
    pub fn new(data: &'a [f32], width: usize, height: usize) -> FloEncoder<'a> {
        FloEncoder {
            data,
            width,
            height
        }
    }

    /// Create an encoder for an already validated flow field
    pub fn from_field(field: &'a FlowField) -> FloEncoder<'a> {
        FloEncoder::new(field.data(), field.width(), field.height())
    }

    /// Total size of the encoded file in bytes
    pub fn encoded_size(&self) -> usize {
        FLO_HEADER_SIZE + self.width * self.height * FLO_BANDS * core::mem::size_of::<f32>()
    }

    /// Encode into `sink` returning the number of bytes written
    ///
    /// Dimensions and input length are checked before anything is written.
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, FloEncodeErrors> {
        check_dimensions(self.width, self.height)?;

        let expected = self.width * self.height * FLO_BANDS;

        if self.data.len() != expected {
            return Err(FloEncodeErrors::WrongInputLength(expected, self.data.len()));
        }

        let mut stream = ZWriter::new(sink);

        stream.reserve(self.encoded_size())?;

        // header
        stream.write_const_bytes(FLO_TAG_STRING)?;
        stream.write_u32_le_err(self.width as u32)?;
        stream.write_u32_le_err(self.height as u32)?;

        for value in self.data {
            stream.write_u32_le_err(value.to_bits())?;
        }
        Ok(stream.bytes_written())
    }
}
