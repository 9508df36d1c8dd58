/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `ppmfx`
//!
//! Each filter is exposed twice, as a free function working directly on a
//! [`Raster`](ppmfx_core::raster::Raster) and as a small struct implementing
//! [`OperationsTrait`](traits::OperationsTrait) so the command line can pick
//! one at runtime.
//!
//! # Example
//! - Invert an image
//! ```
//! use ppmfx_core::pixel::Pixel;
//! use ppmfx_core::raster::Raster;
//! use ppmfx_imageprocs::invert::Invert;
//! use ppmfx_imageprocs::traits::OperationsTrait;
//!
//! let mut raster = Raster::from_fn(10, 10, |_, _| Pixel::new(0, 100, 255));
//! Invert::new().execute(&mut raster);
//!
//! assert_eq!(raster.get(3, 3), Pixel::new(255, 155, 0));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod emboss;
pub mod grayscale;
pub mod invert;
pub mod motion_blur;
pub mod traits;
#[cfg(test)]
mod utils;
