/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use ppmfx_core::utils::parse_int_or;
use ppmfx_imageprocs::emboss::Emboss;
use ppmfx_imageprocs::grayscale::Grayscale;
use ppmfx_imageprocs::invert::Invert;
use ppmfx_imageprocs::motion_blur::MotionBlur;
use ppmfx_imageprocs::traits::OperationsTrait;
use serde::Deserialize;

#[cfg(test)]
mod ppm;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFilter {
    Grayscale,
    Invert,
    Emboss,
    MotionBlur
}

impl JsonFilter {
    pub fn to_operation(self, length: Option<&str>) -> Box<dyn OperationsTrait> {
        match self {
            Self::Grayscale => Box::new(Grayscale::new()),
            Self::Invert => Box::new(Invert::new()),
            Self::Emboss => Box::new(Emboss::new()),
            Self::MotionBlur => Box::new(MotionBlur::new(parse_int_or(length, 1)))
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:     String,
    pub filter:   JsonFilter,
    pub length:   Option<String>,
    pub expected: String
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}
