/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, write};

use zune_flo::zune_core::bytestream::ZCursor;
use zune_flo::{
    read_flo, read_flo_with_options, write_flo, write_flo_raw, FloDecodeErrors, FloDecoder,
    FloDecoderOptions, FloErrorKind, FloErrors, FlowField, UNKNOWN_FLOW
};

use crate::{random_field, scratch_path};

#[test]
fn test_random_round_trips() {
    for (seed, (width, height)) in [(1, (1, 1)), (2, (17, 3)), (3, (64, 64)), (4, (5, 200))] {
        let path = scratch_path(&format!("round-trip-{seed}.flo"));
        let field = random_field(seed, width, height, 1000.0);

        write_flo(&path, &field).unwrap();
        let bytes = read(&path).unwrap();
        let decoded = read_flo(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(bytes.len(), 12 + width * height * 8);
        assert_eq!(&bytes[0..4], b"PIEH");
        assert_eq!(decoded.dimensions(), (width, height));

        let same_bits = field
            .data()
            .iter()
            .zip(decoded.data())
            .all(|(a, b)| a.to_bits() == b.to_bits());
        assert!(same_bits, "round trip changed values for seed {seed}");
    }
}

#[test]
fn test_sentinels_survive_files() {
    let path = scratch_path("sentinels.flo");
    let data = [UNKNOWN_FLOW, -0.0, f32::NAN, f32::INFINITY, 1e9, -1e9];

    write_flo_raw(&path, &data, 3, 1).unwrap();
    let decoded = read_flo(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    for (a, b) in data.iter().zip(decoded.data()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert!(decoded.is_unknown(0, 0));
    assert!(decoded.is_unknown(1, 0));
    assert!(!decoded.is_unknown(2, 0));
}

#[test]
fn test_corrupt_files_are_rejected() {
    let path = scratch_path("corrupt.flo");
    let field = FlowField::filled(1.5, -2.5, 4, 4).unwrap();
    write_flo(&path, &field).unwrap();

    let good = read(&path).unwrap();

    // one float short
    write(&path, &good[..good.len() - 4]).unwrap();
    let err = read_flo(&path).unwrap_err();
    assert_eq!(err.kind(), FloErrorKind::Format);
    assert!(matches!(err, FloErrors::Decode(_, FloDecodeErrors::TooShort(..))));

    // one byte too many
    let mut long = good.clone();
    long.push(0);
    write(&path, &long).unwrap();
    assert!(matches!(
        read_flo(&path),
        Err(FloErrors::Decode(_, FloDecodeErrors::TrailingBytes(1)))
    ));

    // tag written big endian
    let mut swapped = good.clone();
    swapped[0..4].reverse();
    write(&path, &swapped).unwrap();
    assert!(matches!(
        read_flo(&path),
        Err(FloErrors::Decode(_, FloDecodeErrors::WrongTag(_)))
    ));

    // zero width
    let mut zero = good.clone();
    zero[4..8].copy_from_slice(&0_i32.to_le_bytes());
    write(&path, &zero).unwrap();
    assert!(matches!(
        read_flo(&path),
        Err(FloErrors::Decode(_, FloDecodeErrors::InvalidDimensions("width", 0)))
    ));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_decoder_limits() {
    let path = scratch_path("limits.flo");
    write_flo(&path, &FlowField::filled(0.0, 0.0, 32, 8).unwrap()).unwrap();

    let options = FloDecoderOptions::default().set_max_height(4);
    let err = read_flo_with_options(&path, options).unwrap_err();
    assert!(matches!(
        err,
        FloErrors::Decode(_, FloDecodeErrors::TooLargeDimensions("height", 4, 8))
    ));

    // headers can be inspected without decoding the payload
    let contents = read(&path).unwrap();
    let mut decoder = FloDecoder::new(ZCursor::new(contents));
    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((32, 8)));
    assert_eq!(decoder.output_buffer_size(), Some(32 * 8 * 2));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_path_errors() {
    let field = FlowField::filled(0.0, 0.0, 1, 1).unwrap();

    let err = write_flo("", &field).unwrap_err();
    assert!(matches!(err, FloErrors::EmptyPath));

    let err = write_flo(scratch_path("wrong.png"), &field).unwrap_err();
    assert!(matches!(err, FloErrors::WrongExtension(_)));
    assert_eq!(err.kind(), FloErrorKind::Format);

    let missing = scratch_path("does-not-exist.flo");
    let err = read_flo(&missing).unwrap_err();
    assert_eq!(err.kind(), FloErrorKind::Io);
    assert!(format!("{err}").contains("does-not-exist.flo"));
}
