/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A gray relief effect driven by diagonal gradients
use ppmfx_core::pixel::Pixel;
use ppmfx_core::raster::Raster;

use crate::traits::OperationsTrait;

/// Mid gray, the output for pixels with no gradient
const EMBOSS_BIAS: i64 = 128;

/// Return the channel difference `current - previous` with the
/// largest magnitude.
///
/// Red is taken first and a later channel only replaces it when its
/// magnitude is strictly larger, so ties prefer red, then green.
fn strongest_difference(current: Pixel, previous: Pixel) -> i64 {
    let mut diff = i64::from(current.r) - i64::from(previous.r);

    let green = i64::from(current.g) - i64::from(previous.g);
    if green.abs() > diff.abs() {
        diff = green;
    }
    let blue = i64::from(current.b) - i64::from(previous.b);
    if blue.abs() > diff.abs() {
        diff = blue;
    }
    diff
}

/// Emboss a raster
///
/// Each pixel is compared with its top-left neighbour `(x-1, y-1)` and
/// becomes `clamp(128 + diff, 0, 255)` in all channels, where `diff` is
/// the channel difference of largest magnitude. Pixels in the first row
/// or column have no neighbour and become 128.
///
/// Neighbours are read from a copy of the raster taken before any pixel
/// is written, so output never feeds back into the gradient.
pub fn emboss(raster: &mut Raster) {
    let width = raster.width();

    if width == 0 {
        return;
    }
    let source = raster.clone();

    for (pos, pixel) in raster.pixels_mut().iter_mut().enumerate() {
        let (x, y) = ((pos % width) as isize, (pos / width) as isize);

        let diff = if x == 0 || y == 0 {
            0
        } else {
            strongest_difference(source.get(x, y), source.get(x - 1, y - 1))
        };
        let gray = (EMBOSS_BIAS + diff).clamp(0, 255);

        *pixel = Pixel::gray(gray as i32);
    }
}

/// Emboss filter
///
/// See [`emboss`] for the formula.
#[derive(Default)]
pub struct Emboss;

impl Emboss {
    pub fn new() -> Emboss {
        Self::default()
    }
}

impl OperationsTrait for Emboss {
    fn get_name(&self) -> &'static str {
        "Emboss"
    }

    fn execute_impl(&self, raster: &mut Raster) {
        emboss(raster);
    }
}

#[cfg(test)]
mod tests {
    use ppmfx_core::pixel::Pixel;
    use ppmfx_core::raster::Raster;

    use crate::emboss::{strongest_difference, Emboss};
    use crate::traits::OperationsTrait;
    use crate::utils::random_raster;

    /// Single buffer emboss sweeping from the bottom-right corner, so the
    /// top-left neighbour is always read before it is overwritten.
    fn emboss_in_place_reverse(raster: &mut Raster) {
        let (width, height) = raster.dimensions();

        for x in (0..width as isize).rev() {
            for y in (0..height as isize).rev() {
                let diff = if x == 0 || y == 0 {
                    0
                } else {
                    strongest_difference(raster.get(x, y), raster.get(x - 1, y - 1))
                };
                let gray = (128 + diff).clamp(0, 255) as i32;
                raster.set(x, y, Pixel::gray(gray));
            }
        }
    }

    #[test]
    fn tie_breaks_prefer_red_then_green() {
        let prev = Pixel::new(100, 100, 100);

        assert_eq!(strongest_difference(Pixel::new(110, 90, 100), prev), 10);
        assert_eq!(strongest_difference(Pixel::new(100, 90, 110), prev), -10);
        assert_eq!(strongest_difference(Pixel::new(101, 95, 110), prev), 10);
        assert_eq!(strongest_difference(Pixel::new(100, 100, 100), prev), 0);
    }

    #[test]
    fn first_row_and_column_are_mid_gray() {
        let mut raster = Raster::from_fn(3, 3, |x, y| Pixel::gray((x * 90 + y * 10) as i32));
        Emboss::new().execute(&mut raster);

        for i in 0..3 {
            assert_eq!(raster.get(i, 0), Pixel::gray(128));
            assert_eq!(raster.get(0, i), Pixel::gray(128));
        }
        // (1,1) = 100 against (0,0) = 0
        assert_eq!(raster.get(1, 1), Pixel::gray(228));
        // (2,2) = 200 against (1,1) = 100
        assert_eq!(raster.get(2, 2), Pixel::gray(228));
        // (2,1) = 190 against (1,0) = 90
        assert_eq!(raster.get(2, 1), Pixel::gray(228));
    }

    #[test]
    fn output_is_clamped() {
        let mut raster = Raster::from_fn(2, 2, |x, y| {
            if (x, y) == (0, 0) {
                Pixel::new(255, 255, 255)
            } else {
                Pixel::ZERO
            }
        });
        Emboss::new().execute(&mut raster);

        assert_eq!(raster.get(1, 1), Pixel::gray(0));

        let mut raster = Raster::from_fn(2, 2, |x, y| {
            if (x, y) == (1, 1) {
                Pixel::new(0, 255, 0)
            } else {
                Pixel::ZERO
            }
        });
        Emboss::new().execute(&mut raster);

        assert_eq!(raster.get(1, 1), Pixel::gray(255));
    }

    #[test]
    fn output_is_achromatic_and_in_range() {
        for seed in 0..20 {
            let mut raster = random_raster(seed);
            Emboss::new().execute(&mut raster);

            for pixel in raster.pixels() {
                assert!(pixel.is_achromatic());
                assert!((0..=255).contains(&pixel.r));
            }
        }
    }

    #[test]
    fn matches_reverse_in_place_sweep() {
        for seed in 0..20 {
            let original = random_raster(seed);

            let mut expected = original.clone();
            emboss_in_place_reverse(&mut expected);

            let mut actual = original;
            Emboss::new().execute(&mut actual);

            assert_eq!(actual, expected, "seed {seed}");
        }
    }

    #[test]
    fn out_of_range_input_does_not_overflow() {
        let mut raster = Raster::from_fn(2, 2, |x, _| {
            if x == 0 {
                Pixel::gray(i32::MIN)
            } else {
                Pixel::gray(i32::MAX)
            }
        });
        Emboss::new().execute(&mut raster);

        assert_eq!(raster.get(1, 1), Pixel::gray(255));
    }
}
