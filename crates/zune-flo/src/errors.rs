/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when reading and writing flow files
use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use zune_core::bytestream::ZByteIoError;

use crate::constants::FLO_MAX_DIMENSION;

/// Possible errors that may occur during decoding
pub enum FloDecodeErrors {
    /// Input ended before the 12 byte header (tag, width, height) was read
    IncompleteHeader,
    /// The first four bytes do not decode to `202021.25`
    ///
    /// Either not a flo file or it was written with the wrong endianness.
    /// The argument is the tag that was found.
    WrongTag(f32),
    /// Width or height outside `1..=99999`
    ///
    /// # Arguments
    /// - 1st argument is the name of the dimension
    /// - 2nd argument is the value read from the file
    InvalidDimensions(&'static str, i32),
    /// Dimension is valid for the format but larger than the configured limit
    ///
    /// # Arguments
    /// - name of the dimension
    /// - the configured limit
    /// - the value found
    TooLargeDimensions(&'static str, usize, usize),
    /// Payload is shorter than `2*width*height` floats
    ///
    /// # Arguments
    /// - bytes expected
    /// - bytes left in the stream
    TooShort(usize, usize),
    /// Bytes remain after the payload, the argument is how many
    TrailingBytes(usize),
    IoErrors(ZByteIoError)
}

impl Debug for FloDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FloDecodeErrors::IncompleteHeader => {
                writeln!(f, "Problem reading header, need 12 bytes for tag, width and height")
            }
            FloDecodeErrors::WrongTag(tag) => {
                writeln!(
                    f,
                    "Wrong tag {tag}, expected 202021.25 (possibly due to big-endian machine?)"
                )
            }
            FloDecodeErrors::InvalidDimensions(name, value) => {
                writeln!(
                    f,
                    "Illegal {name} {value}, expected a value between 1 and {FLO_MAX_DIMENSION}"
                )
            }
            FloDecodeErrors::TooLargeDimensions(name, limit, found) => {
                writeln!(
                    f,
                    "Image {name} {found} greater than max configured {name} {limit}"
                )
            }
            FloDecodeErrors::TooShort(expected, found) => {
                writeln!(
                    f,
                    "File is too short, expected {expected} bytes of flow data but found {found}"
                )
            }
            FloDecodeErrors::TrailingBytes(extra) => {
                writeln!(f, "File is too long, {extra} bytes remain after flow data")
            }
            FloDecodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl From<ZByteIoError> for FloDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        FloDecodeErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum FloEncodeErrors {
    /// Width or height outside `1..=99999`
    InvalidDimensions(&'static str, usize),
    /// Input does not hold exactly two bands per pixel
    ///
    /// # Arguments
    /// - floats expected (`2*width*height`)
    /// - floats found
    WrongInputLength(usize, usize),
    IoErrors(ZByteIoError)
}

impl Debug for FloEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FloEncodeErrors::InvalidDimensions(name, value) => {
                writeln!(
                    f,
                    "Illegal {name} {value}, expected a value between 1 and {FLO_MAX_DIMENSION}"
                )
            }
            FloEncodeErrors::WrongInputLength(expected, found) => {
                writeln!(
                    f,
                    "Image must have 2 bands, expected {expected} floats but found {found}"
                )
            }
            FloEncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl From<ZByteIoError> for FloEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        FloEncodeErrors::IoErrors(value)
    }
}

/// Broad category of a [`FloErrors`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FloErrorKind {
    /// Malformed, truncated or wrongly named flow file,
    /// or a field that cannot be stored as one
    Format,
    /// Failure at the operating system boundary
    Io
}

/// Errors from reading or writing a flow file at a path
///
/// Every variant that involves a file carries its path.
pub enum FloErrors {
    /// An empty path was given
    EmptyPath,
    /// Path does not end in `.flo`
    WrongExtension(PathBuf),
    /// File contents failed to decode
    Decode(PathBuf, FloDecodeErrors),
    /// Flow field could not be encoded
    Encode(PathBuf, FloEncodeErrors),
    /// File could not be opened, read or written
    Io(PathBuf, std::io::Error)
}

impl FloErrors {
    pub fn kind(&self) -> FloErrorKind {
        match self {
            FloErrors::EmptyPath
            | FloErrors::WrongExtension(_)
            | FloErrors::Decode(..)
            | FloErrors::Encode(_, FloEncodeErrors::WrongInputLength(..))
            | FloErrors::Encode(_, FloEncodeErrors::InvalidDimensions(..)) => FloErrorKind::Format,
            FloErrors::Encode(_, FloEncodeErrors::IoErrors(_)) | FloErrors::Io(..) => {
                FloErrorKind::Io
            }
        }
    }
}

impl Debug for FloErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FloErrors::EmptyPath => writeln!(f, "Empty flow file path"),
            FloErrors::WrongExtension(path) => {
                writeln!(f, "{:?}: extension .flo expected", path)
            }
            FloErrors::Decode(path, err) => {
                write!(f, "{:?}: {:?}", path, err)
            }
            FloErrors::Encode(path, err) => {
                write!(f, "{:?}: {:?}", path, err)
            }
            FloErrors::Io(path, err) => {
                writeln!(f, "{:?}: {}", path, err)
            }
        }
    }
}

impl Display for FloDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for FloEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for FloErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for FloDecodeErrors {}

impl std::error::Error for FloEncodeErrors {}

impl std::error::Error for FloErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FloErrors::Decode(_, err) => Some(err),
            FloErrors::Encode(_, err) => Some(err),
            FloErrors::Io(_, err) => Some(err),
            _ => None
        }
    }
}
