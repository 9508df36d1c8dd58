/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory grid of pixels
//!
//! The raster is stored row-major with the origin at the top-left.
//! Coordinate based access is permissive: reads outside the grid return
//! [`Pixel::ZERO`] and writes outside it are dropped, so neighbourhood
//! filters can probe `x-1`, `y-1` or `x+n` without their own bounds checks.
use crate::pixel::Pixel;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Raster {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl Raster {
    /// Number of pixels in a `width` x `height` raster, or `None` if
    /// the pixel buffer could not be addressed on this platform.
    ///
    /// Decoders check this before calling [`Raster::new`].
    pub fn pixel_count(width: usize, height: usize) -> Option<usize> {
        let count = width.checked_mul(height)?;
        let bytes = count.checked_mul(core::mem::size_of::<Pixel>())?;

        if bytes > isize::MAX as usize {
            return None;
        }
        Some(count)
    }

    /// Create a raster of `width` x `height` zero pixels.
    ///
    /// A zero sized raster is valid and holds no pixels.
    ///
    /// # Panics
    /// If [`Raster::pixel_count`] returns `None` for the dimensions.
    pub fn new(width: usize, height: usize) -> Raster {
        Raster {
            width,
            height,
            pixels: vec![Pixel::ZERO; checked_count(width, height)]
        }
    }

    /// Create a raster whose pixel at `(x, y)` is `func(x, y)`
    ///
    /// # Example
    /// ```
    /// use ppmfx_core::pixel::Pixel;
    /// use ppmfx_core::raster::Raster;
    ///
    /// let raster = Raster::from_fn(2, 2, |x, y| Pixel::gray((x + y) as i32));
    /// assert_eq!(raster.get(1, 1), Pixel::gray(2));
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Raster
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(checked_count(width, height));

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Raster {
            width,
            height,
            pixels
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

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;

        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Returns [`Pixel::ZERO`] if either coordinate is outside the raster.
    pub fn get(&self, x: isize, y: isize) -> Pixel {
        match self.index(x, y) {
            Some(pos) => self.pixels[pos],
            None => Pixel::ZERO
        }
    }

    /// Replace the pixel at `(x, y)`.
    ///
    /// Writes outside the raster are ignored.
    pub fn set(&mut self, x: isize, y: isize, pixel: Pixel) {
        if let Some(pos) = self.index(x, y) {
            self.pixels[pos] = pixel;
        }
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Iterate over rows from top to bottom
    ///
    /// A raster with zero width yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        (0..self.height).map(move |y| &self.pixels[y * self.width..(y + 1) * self.width])
    }

    /// Iterate mutably over rows from top to bottom
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> + '_ {
        let width = self.width;
        // chunks_mut() panics on zero width, split rows off by hand instead
        let mut rest: &mut [Pixel] = &mut self.pixels;

        (0..self.height).map(move |_| {
            let (row, tail) = std::mem::take(&mut rest).split_at_mut(width);
            rest = tail;
            row
        })
    }
}

fn checked_count(width: usize, height: usize) -> usize {
    match Raster::pixel_count(width, height) {
        Some(count) => count,
        None => panic!("Raster of {width}x{height} pixels is too large")
    }
}
