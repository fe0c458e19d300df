/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_flowviz::FlowStats;

pub struct FlowMetadata<'a> {
    file:      &'a Path,
    file_size: u64,
    width:     usize,
    height:    usize,
    stats:     &'a FlowStats
}

impl<'a> FlowMetadata<'a> {
    pub fn new(
        file: &'a Path, file_size: u64, width: usize, height: usize, stats: &'a FlowStats
    ) -> FlowMetadata<'a> {
        FlowMetadata {
            file,
            file_size,
            width,
            height,
            stats
        }
    }
}

impl<'a> Serialize for FlowMetadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FlowMetadata", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("stats", &self.stats)?;

        state.end()
    }
}
