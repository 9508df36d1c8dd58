/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text PPM (`P3`) decoder and encoder
//!
//! The format is a whitespace separated list of ASCII tokens:
//! the magic `P3`, width, height, the maximum channel value and then
//! `width*height` RGB triples in row-major order. `#` starts a comment
//! that runs to the end of the line.
//!
//! Decoding is permissive. Numeric tokens that are missing or malformed
//! are read as `0`, and the max value is reported but never used to
//! rescale samples. Only a wrong magic token is fatal.
//!
//! # Example
//! ```
//! use ppmfx_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n1 2 3\n");
//! let raster = decoder.decode().unwrap();
//!
//! let mut output = Vec::new();
//! PPMEncoder::new(&mut output).encode(&raster).unwrap();
//!
//! assert_eq!(output, b"P3\n1 1\n255\n1 2 3\n");
//! ```
pub use decoder::*;
pub use encoder::*;
pub use ppmfx_core;

mod decoder;
mod encoder;
mod tokens;
