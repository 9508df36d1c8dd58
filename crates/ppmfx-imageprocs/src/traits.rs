/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The interface every filter implements
use ppmfx_core::log::debug;
use ppmfx_core::raster::Raster;

/// This encapsulates an image operation.
///
/// Operations rewrite the raster they are given in place, the caller
/// observes the result through the same raster afterwards.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Run the operation on `raster`
    ///
    /// Implementors should not call this directly, use
    /// [`execute`](Self::execute) which also logs what runs.
    fn execute_impl(&self, raster: &mut Raster);

    /// Execute the operation on the raster
    ///
    /// # Arguments
    /// - raster: A mutable reference to a raster which
    ///   this operation will manipulate
    ///
    /// # Example
    /// ```
    /// use ppmfx_core::raster::Raster;
    /// use ppmfx_imageprocs::grayscale::Grayscale;
    /// use ppmfx_imageprocs::traits::OperationsTrait;
    ///
    /// let mut raster = Raster::new(4, 4);
    /// Grayscale::new().execute(&mut raster);
    /// ```
    fn execute(&self, raster: &mut Raster) {
        debug!(
            "Running {} on a {}x{} raster",
            self.get_name(),
            raster.width(),
            raster.height()
        );
        self.execute_impl(raster);
    }
}
