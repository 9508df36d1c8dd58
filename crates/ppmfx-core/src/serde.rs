/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::pixel::Pixel;

impl Serialize for Pixel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Pixel", 3)?;

        state.serialize_field("r", &self.r)?;
        state.serialize_field("g", &self.g)?;
        state.serialize_field("b", &self.b)?;

        state.end()
    }
}

/// Header level information about a raster
///
/// Serialized by the command line probe mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RasterInfo {
    pub width:     usize,
    pub height:    usize,
    pub max_value: Option<i32>
}

impl Serialize for RasterInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("RasterInfo", 4)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("max_value", &self.max_value)?;
        state.serialize_field("pixels", &self.width.saturating_mul(self.height))?;

        state.end()
    }
}
