/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused)]

use std::path::{Path, PathBuf};

use nanorand::{Rng, WyRand};
use serde::Deserialize;
use zune_flo::FlowField;

mod colors;
mod flo;
mod legend;

#[derive(Clone, Deserialize, Debug)]
pub struct ColorEntry {
    pub name:      String,
    pub u:         f32,
    pub v:         f32,
    pub scale:     f32,
    pub rgb:       [u8; 3],
    pub tolerance: u8
}

/// A unique path in the temporary directory
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("colorflow-tests-{}-{}", std::process::id(), name))
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// Random flow with components in `[-magnitude, magnitude)`
pub fn random_field(seed: u64, width: usize, height: usize, magnitude: f32) -> FlowField {
    let mut rng = WyRand::new_seed(seed);

    let data = (0..width * height * 2)
        .map(|_| (rng.generate::<f32>() * 2.0 - 1.0) * magnitude)
        .collect();

    FlowField::new(data, width, height).unwrap()
}
