/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use ppmfx_core::log::{info, warn};
use ppmfx_core::options::DecoderOptions;
use ppmfx_core::pixel::Pixel;
use ppmfx_core::raster::Raster;
use ppmfx_core::utils::parse_int_or;

use crate::tokens::TokenReader;

/// The only magic token understood by the decoder
const PLAIN_PPM_MAGIC: &str = "P3";

/// An instance of a PPM decoder
///
/// The decoder can currently decode the plain text P3 format
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       i32,
    decoded_headers: bool,
    reader:          TokenReader<'a>,
    options:         DecoderOptions
}

/// Errors that can occur while decoding a PPM stream
pub enum PPMDecodeErrors {
    /// The first token was not `P3`
    UnsupportedFormat(String),
    /// Dimension exceeded the configured maximum, (expected, found)
    LargeDimensions(usize, usize),
    /// `width * height` pixels can't be held in memory, (width, height)
    TooManyPixels(usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(found) => {
                writeln!(f, "Unsupported format, expected `P3` magic but found `{found}`")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::TooManyPixels(width, height) => {
                writeln!(f, "Image of {width}x{height} pixels is too large to decode")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use ppmfx_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    ///
    /// # Example
    /// ```
    /// use ppmfx_core::options::DecoderOptions;
    /// use ppmfx_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(2);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3 3 1 255");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader: TokenReader::new(data),
            options
        }
    }

    /// Read the next token as an integer, missing or malformed tokens
    /// yield `fallback`
    fn get_integer<T: std::str::FromStr>(&mut self, fallback: T) -> T {
        parse_int_or(self.reader.next_str(), fallback)
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    ///
    /// # Errors
    /// - `UnsupportedFormat` if the first token isn't `P3`
    /// - `LargeDimensions` if width or height exceed the decoder options
    /// - `TooManyPixels` if the pixel buffer size overflows
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = self.reader.next_token();

        if magic != Some(PLAIN_PPM_MAGIC.as_bytes()) {
            let found = magic
                .map(|token| String::from_utf8_lossy(token).to_string())
                .unwrap_or_default();

            return Err(PPMDecodeErrors::UnsupportedFormat(found));
        }

        self.width = self.get_integer(0);
        self.height = self.get_integer(0);

        if self.width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        if self.height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        if Raster::pixel_count(self.width, self.height).is_none() {
            return Err(PPMDecodeErrors::TooManyPixels(self.width, self.height));
        }
        info!("Width: {}, height: {}", self.width, self.height);

        // read but not used, samples are always treated as 8 bit
        self.max_value = self.get_integer(0);

        if self.max_value != 255 {
            warn!(
                "Max value is {}, samples will still be treated as 8 bit",
                self.max_value
            );
        }
        self.decoded_headers = true;

        Ok(())
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the max value stored in the header or none if
    /// headers aren't decoded
    pub const fn max_value(&self) -> Option<i32> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a ppm encoded file into a raster
    ///
    /// Exactly `width*height` triples are read. If the stream runs short
    /// the remaining channels are zero, extra tokens are ignored.
    ///
    /// # Errors
    /// See [`read_headers`](Self::read_headers)
    pub fn decode(&mut self) -> Result<Raster, PPMDecodeErrors> {
        self.read_headers()?;

        let mut raster = Raster::new(self.width, self.height);
        let mut missing = 0_usize;

        for pixel in raster.pixels_mut() {
            let mut channels = [0_i32; 3];

            for channel in channels.iter_mut() {
                match self.reader.next_str() {
                    Some(token) => *channel = parse_int_or(Some(token), 0),
                    None => missing += 1
                }
            }
            *pixel = Pixel::from(channels);
        }

        if missing != 0 {
            warn!(
                "Stream ended early, {} channel values were missing and set to zero",
                missing
            );
        }
        Ok(raster)
    }
}
