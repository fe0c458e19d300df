/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing flow files on disk
use std::path::Path;

use log::debug;
use zune_core::bytestream::ZCursor;

use crate::decoder::{FloDecoder, FloDecoderOptions};
use crate::encoder::FloEncoder;
use crate::errors::FloErrors;
use crate::flow::FlowField;

/// Check that `path` is non-empty and its file name ends in `.flo`
///
/// A file named just `.flo` is accepted.
pub fn check_flo_path(path: &Path) -> Result<(), FloErrors> {
    if path.as_os_str().is_empty() {
        return Err(FloErrors::EmptyPath);
    }
    // Path::extension() is None for ".flo", so compare the raw name
    match path.file_name() {
        Some(name) if name.as_encoded_bytes().ends_with(b".flo") => Ok(()),
        _ => Err(FloErrors::WrongExtension(path.to_path_buf()))
    }
}

/// Read a `.flo` file with default decoder limits
pub fn read_flo<P: AsRef<Path>>(path: P) -> Result<FlowField, FloErrors> {
    read_flo_with_options(path, FloDecoderOptions::default())
}

/// Read a `.flo` file
///
/// The extension is checked before the file is opened, and the file must
/// contain exactly the header and the payload it declares.
pub fn read_flo_with_options<P: AsRef<Path>>(
    path: P, options: FloDecoderOptions
) -> Result<FlowField, FloErrors> {
    let path = path.as_ref();

    check_flo_path(path)?;

    let contents = std::fs::read(path).map_err(|e| FloErrors::Io(path.to_path_buf(), e))?;

    debug!("Read {} bytes from {:?}", contents.len(), path);

    FloDecoder::new_with_options(ZCursor::new(contents), options)
        .decode()
        .map_err(|e| FloErrors::Decode(path.to_path_buf(), e))
}

/// Write `field` to a `.flo` file
///
/// The file is encoded in memory first, so nothing is created on disk
/// when the path or the field is rejected.
pub fn write_flo<P: AsRef<Path>>(path: P, field: &FlowField) -> Result<(), FloErrors> {
    write_flo_raw(path, field.data(), field.width(), field.height())
}

/// Write interleaved `u,v` data to a `.flo` file
pub fn write_flo_raw<P: AsRef<Path>>(
    path: P, data: &[f32], width: usize, height: usize
) -> Result<(), FloErrors> {
    let path = path.as_ref();

    check_flo_path(path)?;

    let encoder = FloEncoder::new(data, width, height);
    let mut output = Vec::with_capacity(encoder.encoded_size());

    encoder
        .encode(&mut output)
        .map_err(|e| FloErrors::Encode(path.to_path_buf(), e))?;

    std::fs::write(path, &output).map_err(|e| FloErrors::Io(path.to_path_buf(), e))?;

    debug!("Wrote {} bytes to {:?}", output.len(), path);
    Ok(())
}
