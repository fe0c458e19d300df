/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_flowviz::{map_to_color, reference_image, ColorWheel, FlowColorizer, ReferenceImageGenerator};

const BLACK: [u8; 3] = [0, 0, 0];

#[test]
fn test_default_legend() {
    let image = reference_image(10.0, 151).unwrap();
    assert_eq!(image.as_bytes().len(), 151 * 151 * 3);

    // the axes
    for i in 0..151 {
        assert_eq!(image.pixel(75, i), BLACK);
        assert_eq!(image.pixel(i, 75), BLACK);
    }
    // 21 ticks, 10 each side of the center, five pixels across
    let mut ticks = 0;
    for x in 0..151 {
        if (73..=77).contains(&x) {
            continue;
        }
        if (73..=77).all(|y| image.pixel(x, y) == BLACK) {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 20);

    // off the axes the legend matches the color mapping
    let range = 1.04_f32 * 10.0;
    let (x, y) = (20, 120);
    let fx = x as f32 / 75.0 * range - range;
    let fy = y as f32 / 75.0 * range - range;
    assert_eq!(image.pixel(x, y), map_to_color(fx / 10.0, fy / 10.0));
}

#[test]
fn test_legend_with_custom_wheel() {
    let wheel = ColorWheel::try_build([10, 10, 10, 10, 10, 10]).unwrap();
    let generator = ReferenceImageGenerator::with_colorizer(FlowColorizer::with_wheel(&wheel));

    let custom = generator.generate(4.0, 64).unwrap();
    let shared = reference_image(4.0, 64).unwrap();

    assert_eq!(custom.dimensions(), shared.dimensions());
    assert_ne!(custom, shared);
    // the axes do not depend on the wheel
    assert_eq!(custom.pixel(32, 5), BLACK);
    assert_eq!(custom.pixel(5, 32), BLACK);
}
