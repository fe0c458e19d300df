/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use zune_flo::FlowField;
use zune_flowviz::FlowStats;

use crate::errors::CmdErrors;
use crate::serde::FlowMetadata;

/// Describe a decoded flow file as pretty printed json
pub fn probe_flow(in_file: &Path, field: &FlowField) -> Result<String, CmdErrors> {
    let file_size = std::fs::metadata(in_file)
        .map_err(|e| CmdErrors::Io(in_file.to_path_buf(), e))?
        .len();

    let stats = FlowStats::compute(field);
    let metadata = FlowMetadata::new(in_file, file_size, field.width(), field.height(), &stats);

    Ok(serde_json::to_string_pretty(&metadata)?)
}
