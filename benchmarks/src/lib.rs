/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use zune_flo::FlowField;

/// Smooth random flow, the kind of field an estimator produces
pub fn random_field(width: usize, height: usize) -> FlowField {
    let mut rng = WyRand::new_seed(0x5eed);
    let (du, dv) = (rng.generate::<f32>() * 0.1, rng.generate::<f32>() * 0.1);

    let mut field = FlowField::filled(0.0, 0.0, width, height).unwrap();

    for y in 0..height {
        for x in 0..width {
            let noise = rng.generate::<f32>() - 0.5;
            let u = (x as f32 * du).sin() * 12.0 + noise;
            let v = (y as f32 * dv).cos() * 8.0 - noise;
            field.set(x, y, u, v);
        }
    }
    field
}
