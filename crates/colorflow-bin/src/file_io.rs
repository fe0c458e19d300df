/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::debug;
use zune_flowviz::RgbImage;

use crate::errors::CmdErrors;

/// Encode an image as an 8 bit RGB png in memory
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, CmdErrors> {
    let width = u32::try_from(image.width())
        .map_err(|_| CmdErrors::Generic(format!("Width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| CmdErrors::Generic(format!("Height {} too large", image.height())))?;

    let mut output = Vec::with_capacity(image.as_bytes().len() / 2);
    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_bytes())?;
        writer.finish()?;
    }
    Ok(output)
}

/// Write an image to `path` as png
///
/// The file is only created once encoding succeeded.
pub fn write_png<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<(), CmdErrors> {
    let path = path.as_ref();
    let bytes = encode_png(image)?;

    std::fs::write(path, &bytes).map_err(|e| CmdErrors::Io(path.to_path_buf(), e))?;
    debug!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}
