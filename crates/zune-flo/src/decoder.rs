/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};

use crate::constants::{FLO_BANDS, FLO_MAX_DIMENSION, FLO_READ_CHUNK, FLO_TAG_FLOAT};
use crate::errors::FloDecodeErrors;
use crate::flow::FlowField;

/// Limits the decoder respects
///
/// The format already caps dimensions at 99999, these limits can only
/// make that stricter, e.g to bound memory used by untrusted input.
#[derive(Copy, Clone, Debug)]
pub struct FloDecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl FloDecoderOptions {
    /// Set the maximum width, values above 99999 are clamped
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width.min(FLO_MAX_DIMENSION);
        self
    }
    /// Set the maximum height, values above 99999 are clamped
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height.min(FLO_MAX_DIMENSION);
        self
    }
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
}

impl Default for FloDecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  FLO_MAX_DIMENSION,
            max_height: FLO_MAX_DIMENSION
        }
    }
}

/// A `.flo` optical flow decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to read the dimensions
/// or [`decode`] to return the whole flow field.
///
/// # Example
/// ```
/// use zune_core::bytestream::ZCursor;
/// use zune_flo::FloDecoder;
///
/// let mut file = b"PIEH".to_vec();
/// file.extend_from_slice(&1_i32.to_le_bytes());
/// file.extend_from_slice(&1_i32.to_le_bytes());
/// file.extend_from_slice(&0.5_f32.to_le_bytes());
/// file.extend_from_slice(&(-2.0_f32).to_le_bytes());
///
/// let mut decoder = FloDecoder::new(ZCursor::new(&file));
/// let field = decoder.decode().unwrap();
/// assert_eq!(field.get(0, 0), (0.5, -2.0));
/// ```
///
/// [`decode_headers`]:FloDecoder::decode_headers
/// [`decode`]:FloDecoder::decode
pub struct FloDecoder<T: ZByteReaderTrait> {
    stream:          ZReader<T>,
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    options:         FloDecoderOptions
}

impl<T: ZByteReaderTrait> FloDecoder<T> {
    /// Create a new decoder with default limits
    pub fn new(data: T) -> FloDecoder<T> {
        Self::new_with_options(data, FloDecoderOptions::default())
    }

    /// Create a new decoder with non default limits
    pub fn new_with_options(data: T, options: FloDecoderOptions) -> FloDecoder<T> {
        FloDecoder {
            stream: ZReader::new(data),
            width: 0,
            height: 0,
            decoded_headers: false,
            options
        }
    }

    /// Decode the 12 byte header, validating tag and dimensions
    pub fn decode_headers(&mut self) -> Result<(), FloDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let header = self
            .stream
            .read_fixed_bytes_or_error::<12>()
            .map_err(|_| FloDecodeErrors::IncompleteHeader)?;

        let tag = f32::from_le_bytes([header[0], header[1], header[2], header[3]]);

        if tag != FLO_TAG_FLOAT {
            return Err(FloDecodeErrors::WrongTag(tag));
        }
        let width = i32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        let height = i32::from_le_bytes([header[8], header[9], header[10], header[11]]);

        self.width = checked_dimension("width", width, self.options.max_width())?;
        self.height = checked_dimension("height", height, self.options.max_height())?;

        trace!("Flow width: {}", self.width);
        trace!("Flow height: {}", self.height);

        self.decoded_headers = true;
        Ok(())
    }

    /// Return `(width, height)` or `None` if headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Number of floats the payload holds, `None` before headers are decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            return Some(self.width * self.height * FLO_BANDS);
        }
        None
    }

    /// Decode the whole file returning the flow field
    ///
    /// The stream must end exactly where the payload ends.
    pub fn decode(&mut self) -> Result<FlowField, FloDecodeErrors> {
        self.decode_headers()?;

        let (width, height) = (self.width, self.height);
        let floats = width * height * FLO_BANDS;
        let expected = floats * core::mem::size_of::<f32>();

        // grow with what the stream actually holds, a lying header
        // on a short file must not allocate the claimed size
        let mut raw = Vec::with_capacity(expected.min(FLO_READ_CHUNK));
        let mut chunk = vec![0_u8; FLO_READ_CHUNK];

        while raw.len() < expected {
            let wanted = (expected - raw.len()).min(FLO_READ_CHUNK);
            let read = self.stream.read_bytes(&mut chunk[..wanted])?;

            if read == 0 {
                return Err(FloDecodeErrors::TooShort(expected, raw.len()));
            }
            raw.extend_from_slice(&chunk[..read]);
        }

        if !self.stream.eof()? {
            let mut trailing = 0;
            loop {
                let read = self.stream.read_bytes(&mut chunk)?;
                if read == 0 {
                    break;
                }
                trailing += read;
            }
            return Err(FloDecodeErrors::TrailingBytes(trailing));
        }

        let data = raw
            .chunks_exact(4)
            .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            .collect();

        Ok(FlowField::from_raw_parts(data, width, height))
    }
}

fn checked_dimension(name: &'static str, value: i32, limit: usize) -> Result<usize, FloDecodeErrors> {
    if value < 1 || value as usize > FLO_MAX_DIMENSION {
        return Err(FloDecodeErrors::InvalidDimensions(name, value));
    }
    let value = value as usize;

    if value > limit {
        return Err(FloDecodeErrors::TooLargeDimensions(name, limit, value));
    }
    Ok(value)
}
