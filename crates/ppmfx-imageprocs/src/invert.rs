/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmfx_core::pixel::Pixel;
use ppmfx_core::raster::Raster;

use crate::traits::OperationsTrait;

/// Invert a pixel
///
/// The formula for inverting a 8 bit pixel
///  is `pixel[x,y] = 255-pixel[x,y]`
pub fn invert(pixels: &mut [Pixel]) {
    for pixel in pixels.iter_mut() {
        // saturate so garbage input can't overflow
        pixel.r = 255_i32.saturating_sub(pixel.r);
        pixel.g = 255_i32.saturating_sub(pixel.g);
        pixel.b = 255_i32.saturating_sub(pixel.b);
    }
}

/// Invert an image pixel.
///
/// Every channel `c` becomes `255 - c`.
#[derive(Default)]
pub struct Invert;

impl Invert {
    /// Create a new invert operation
    pub fn new() -> Invert {
        Self::default()
    }
}

impl OperationsTrait for Invert {
    fn get_name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, raster: &mut Raster) {
        invert(raster.pixels_mut());
    }
}
