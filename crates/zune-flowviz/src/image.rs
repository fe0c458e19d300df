/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Number of channels in an [`RgbImage`]
pub const RGB_CHANNELS: usize = 3;

/// A dense 8 bit RGB image, row-major with interleaved channels
///
/// New images start out black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    width:  usize,
    height: usize,
    data:   Vec<u8>
}

impl RgbImage {
    /// Create a black image
    pub fn new(width: usize, height: usize) -> RgbImage {
        RgbImage {
            width,
            height,
            data: vec![0; width * height * RGB_CHANNELS]
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw `r,g,b` bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// # Panics
    /// If `(x,y)` is out of bounds
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let pos = self.offset(x, y);
        [self.data[pos], self.data[pos + 1], self.data[pos + 2]]
    }

    /// # Panics
    /// If `(x,y)` is out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let pos = self.offset(x, y);
        self.data[pos..pos + RGB_CHANNELS].copy_from_slice(&rgb);
    }

    /// Iterate over rows, each row is `width*3` bytes
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        // max(1) keeps zero width images from panicking
        self.data.chunks_exact_mut((self.width * RGB_CHANNELS).max(1))
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        (y * self.width + x) * RGB_CHANNELS
    }
}
