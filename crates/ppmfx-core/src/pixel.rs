/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB sample

/// A pixel with three independent channels.
///
/// Channels are nominally in `0..=255` but nothing here enforces it,
/// decoders store whatever integer the file contained.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: i32,
    pub g: i32,
    pub b: i32
}

impl Pixel {
    /// The pixel returned for out of bounds reads
    pub const ZERO: Pixel = Pixel { r: 0, g: 0, b: 0 };

    pub const fn new(r: i32, g: i32, b: i32) -> Pixel {
        Pixel { r, g, b }
    }

    /// A pixel whose three channels hold `value`
    pub const fn gray(value: i32) -> Pixel {
        Pixel::new(value, value, value)
    }

    /// Whether all three channels are equal
    pub const fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub const fn channels(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[i32; 3]> for Pixel {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Pixel::new(r, g, b)
    }
}
