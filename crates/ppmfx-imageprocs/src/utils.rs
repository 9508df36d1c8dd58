/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use ppmfx_core::pixel::Pixel;
use ppmfx_core::raster::Raster;

/// A raster of random size (1..=16 per side) filled with random 8 bit channels
pub(crate) fn random_raster(seed: u64) -> Raster {
    let mut rng = WyRand::new_seed(seed);

    let width = rng.generate_range(1_usize..=16);
    let height = rng.generate_range(1_usize..=16);

    let mut channels = vec![0_u8; width * height * 3];
    rng.fill(&mut channels);

    let mut samples = channels.chunks_exact(3);

    Raster::from_fn(width, height, |_, _| {
        let rgb = samples.next().unwrap();
        Pixel::new(i32::from(rgb[0]), i32::from(rgb[1]), i32::from(rgb[2]))
    })
}
