/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Horizontal motion blur
//!
//! Each pixel becomes the mean of a run of pixels starting at it and
//! extending to the right:
//!
//! ```text
//! pix[x,y] = (pix[x,y] + pix[x+1,y] + ... + pix[x+n-1,y]) / n
//! ```
//! where `n` is `length`, shortened near the right edge so the run never
//! leaves the row.
use ppmfx_core::pixel::Pixel;
use ppmfx_core::raster::Raster;

use crate::traits::OperationsTrait;

/// Blur a single row in place
///
/// `prefix` is scratch space, it's overwritten with running channel sums
/// of the row as it was on entry. Windows are averaged from those sums so
/// pixels blurred earlier in the row never feed later windows.
fn motion_blur_row(row: &mut [Pixel], prefix: &mut Vec<[i64; 3]>, length: usize) {
    let width = row.len();

    prefix.clear();
    prefix.push([0; 3]);

    let mut acc = [0_i64; 3];

    for pixel in row.iter() {
        acc[0] += i64::from(pixel.r);
        acc[1] += i64::from(pixel.g);
        acc[2] += i64::from(pixel.b);
        prefix.push(acc);
    }

    for (x, pixel) in row.iter_mut().enumerate() {
        let end = x.saturating_add(length).min(width);
        // at least one pixel, the one at x
        let count = (end - x) as i64;

        let (start, stop) = (prefix[x], prefix[end]);

        *pixel = Pixel::new(
            (stop[0] - start[0]).div_euclid(count) as i32,
            (stop[1] - start[1]).div_euclid(count) as i32,
            (stop[2] - start[2]).div_euclid(count) as i32
        );
    }
}

/// Blur a raster horizontally with a run of `length` pixels
///
/// Does nothing when `length` is less than 1. A length of 1 leaves
/// the raster unchanged.
pub fn motion_blur(raster: &mut Raster, length: i64) {
    if length < 1 {
        return;
    }
    // lengths beyond the width behave the same, usize::MAX is as good as any
    let length = usize::try_from(length).unwrap_or(usize::MAX);

    let mut prefix = Vec::with_capacity(raster.width() + 1);

    for row in raster.rows_mut() {
        motion_blur_row(row, &mut prefix, length);
    }
}

/// Motion blur filter
///
/// See [`motion_blur`] for the formula.
pub struct MotionBlur {
    length: i64
}

impl MotionBlur {
    /// Create a new motion blur averaging runs of up to `length` pixels
    pub fn new(length: i64) -> MotionBlur {
        MotionBlur { length }
    }
}

impl OperationsTrait for MotionBlur {
    fn get_name(&self) -> &'static str {
        "Motion Blur"
    }

    fn execute_impl(&self, raster: &mut Raster) {
        motion_blur(raster, self.length);
    }
}
