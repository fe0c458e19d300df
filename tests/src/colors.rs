/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use zune_flo::{read_flo, write_flo, FlowField, UNKNOWN_FLOW};
use zune_flowviz::{auto_scale, colorize_flow, resolve_scale};

use crate::{fixture_path, random_field, scratch_path, ColorEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_colors() {
    let json_file = read(fixture_path("colors.json")).unwrap();
    let entries: Vec<ColorEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut error = false;

    for entry in &entries {
        let field = FlowField::filled(entry.u, entry.v, 1, 1).unwrap();
        let found = colorize_flow(&field, entry.scale).unwrap().pixel(0, 0);

        let matches = found
            .iter()
            .zip(entry.rgb.iter())
            .all(|(a, b)| a.abs_diff(*b) <= entry.tolerance);

        if !matches {
            error = true;
            eprintln!(
                "Color mismatch for {:?}\nExpected {:?} but found {:?}\nConfig:{:#?}\n",
                entry.name, entry.rgb, found, entry
            );
        }
    }
    if error {
        panic!("Some colors did not match");
    }
}

#[test]
fn test_file_to_image() {
    let path = scratch_path("pipeline.flo");

    // a 3x2 field with one unknown vector and a longest motion of 5
    let mut field = FlowField::filled(0.0, 0.0, 3, 2).unwrap();
    field.set(0, 0, 3.0, 4.0);
    field.set(1, 0, -2.0, 0.0);
    field.set(2, 1, UNKNOWN_FLOW, UNKNOWN_FLOW);
    write_flo(&path, &field).unwrap();

    let decoded = read_flo(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let scale = resolve_scale(&decoded, None);
    assert_eq!(scale, 5.0);

    let image = colorize_flow(&decoded, scale).unwrap();
    assert_eq!(image.dimensions(), (3, 2));

    // longest vector is fully saturated
    let longest = image.pixel(0, 0);
    assert!(longest.contains(&255) && longest.iter().any(|c| *c <= 1), "{longest:?}");
    // zero motion is white, unknown is black
    assert_eq!(image.pixel(0, 1), [255, 255, 255]);
    assert_eq!(image.pixel(2, 1), [0, 0, 0]);
    // a user scale smaller than the motion darkens it
    let dimmed = colorize_flow(&decoded, resolve_scale(&decoded, Some(1.0))).unwrap();
    assert!(dimmed.pixel(0, 0).iter().all(|c| *c <= 191));
}

#[test]
fn test_random_field_colors() {
    let field = random_field(7, 64, 48, 20.0);
    let scale = auto_scale(&field);

    assert!(scale > 0.0 && scale <= 20.0 * 2.0_f32.sqrt());

    // every known vector keeps one channel near full brightness
    let image = colorize_flow(&field, scale).unwrap();
    for y in 0..48 {
        for x in 0..64 {
            assert!(image.pixel(x, y).iter().any(|c| *c >= 190), "({x},{y})");
        }
    }
}
