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

/// Convert pixels to gray by averaging their channels
///
/// Each pixel becomes `floor((r+g+b)/3)` in all three channels. Pixels are
/// independent so traversal order doesn't matter.
pub fn grayscale(pixels: &mut [Pixel]) {
    for pixel in pixels.iter_mut() {
        let sum = i64::from(pixel.r) + i64::from(pixel.g) + i64::from(pixel.b);
        // floor division, also for negative sums
        *pixel = Pixel::gray(sum.div_euclid(3) as i32);
    }
}

/// Convert RGB data to grayscale
///
/// Formula for the conversion is an unweighted mean
///
/// ```text
/// Grayscale = floor((R + G + B) / 3)
/// ```
/// The raster keeps three channels, all set to the same value.
#[derive(Default)]
pub struct Grayscale;

impl Grayscale {
    pub fn new() -> Grayscale {
        Self::default()
    }
}

impl OperationsTrait for Grayscale {
    fn get_name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, raster: &mut Raster) {
        grayscale(raster.pixels_mut());
    }
}

#[cfg(test)]
mod tests {
    use ppmfx_core::pixel::Pixel;
    use ppmfx_core::raster::Raster;

    use crate::grayscale::{grayscale, Grayscale};
    use crate::traits::OperationsTrait;
    use crate::utils::random_raster;

    #[test]
    fn grayscale_known_values() {
        let mut pixels = [
            Pixel::new(10, 20, 30),
            Pixel::new(40, 50, 60),
            Pixel::new(1, 1, 0),
            Pixel::new(255, 255, 254)
        ];
        grayscale(&mut pixels);

        assert_eq!(
            pixels,
            [
                Pixel::gray(20),
                Pixel::gray(50),
                Pixel::gray(0),
                Pixel::gray(254)
            ]
        );
    }

    #[test]
    fn grayscale_floors_negative_sums() {
        let mut pixels = [Pixel::new(-1, 0, 0)];
        grayscale(&mut pixels);

        assert_eq!(pixels[0], Pixel::gray(-1));
    }

    #[test]
    fn grayscale_is_idempotent() {
        for seed in 0..10 {
            let mut once = random_raster(seed);
            Grayscale::new().execute(&mut once);

            let mut twice = once.clone();
            Grayscale::new().execute(&mut twice);

            assert_eq!(once, twice);
            assert!(once.pixels().iter().all(Pixel::is_achromatic));
        }
    }

    #[test]
    fn grayscale_empty_raster() {
        let mut raster = Raster::new(0, 0);
        Grayscale::new().execute(&mut raster);

        assert_eq!(raster, Raster::new(0, 0));
    }
}
