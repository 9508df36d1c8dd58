/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use ppmfx_core::options::DecoderOptions;
use ppmfx_core::serde::RasterInfo;
use ppmfx_ppm::PPMDecoder;

use crate::errors::ImageErrors;
use crate::file_io::read_input;
use crate::serde::Metadata;

/// Probe an input file, extract header information and return it as
/// pretty printed JSON
pub fn probe_input_file(in_file: &str) -> Result<String, ImageErrors> {
    let data = read_input(Path::new(in_file))?;

    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::default()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    decoder.read_headers()?;

    let (width, height) = decoder.dimensions().unwrap_or_default();

    let info = RasterInfo {
        width,
        height,
        max_value: decoder.max_value()
    };
    let metadata = Metadata::new(in_file, data.len() as u64, info);

    Ok(serde_json::to_string_pretty(&metadata)?)
}
