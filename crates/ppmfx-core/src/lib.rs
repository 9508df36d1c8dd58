/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all ppmfx libraries
//!
//! It currently contains
//!
//! - The [`Pixel`](pixel::Pixel) and [`Raster`](raster::Raster) types the codec
//!   produces and the filters mutate
//! - Decoder options
//! - A permissive integer parser shared by the codec and the command line
//! - A logging shim that compiles to nothing unless the `log` feature is on
//!
//! # Features
//!  - `log`: Forward [`log`] macros to the `log` crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![macro_use]

#[cfg(not(feature = "log"))]
pub mod log;

#[cfg(feature = "log")]
pub use log;

pub mod options;
pub mod pixel;
pub mod raster;
pub mod serde;
pub mod utils;
