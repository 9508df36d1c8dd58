/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while running a workflow
use std::fmt::{Debug, Display, Formatter};
use std::io;

use ppmfx_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// All possible workflow errors that can occur.
///
/// This wraps decoding and encoding errors together with
/// the errors raised by the command line itself
pub enum ImageErrors {
    PPMDecodeErrors(PPMDecodeErrors),
    PPMEncodeErrors(PPMEncodeErrors),
    /// A required path, (`input` or `output`), was absent or empty
    MissingPath(&'static str),
    IoErrors(io::Error),
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PPMDecodeErrors(ref error) => {
                writeln!(f, "PPM decoding failed: {error:?}")
            }
            Self::PPMEncodeErrors(ref error) => {
                writeln!(f, "PPM encoding failed: {error:?}")
            }
            Self::MissingPath(which) => {
                writeln!(f, "No {which} path was given")
            }
            Self::IoErrors(ref error) => {
                writeln!(f, "I/O error: {error}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PPMDecodeErrors> for ImageErrors {
    fn from(from: PPMDecodeErrors) -> Self {
        ImageErrors::PPMDecodeErrors(from)
    }
}

impl From<PPMEncodeErrors> for ImageErrors {
    fn from(from: PPMEncodeErrors) -> Self {
        ImageErrors::PPMEncodeErrors(from)
    }
}

impl From<io::Error> for ImageErrors {
    fn from(from: io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<serde_json::Error> for ImageErrors {
    fn from(from: serde_json::Error) -> Self {
        ImageErrors::GenericString(format!("Could not serialize metadata: {from}"))
    }
}
