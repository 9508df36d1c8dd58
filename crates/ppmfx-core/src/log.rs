/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Stand-ins for the `log` macros used when the `log` feature is off
//!
//! Each macro accepts the same arguments as its `log` counterpart and
//! expands to nothing. Exported macros land in the crate root, so they
//! are defined with a `__ppmfx_` prefix and re-exported from here under
//! their usual names.

pub use crate::{
    __ppmfx_debug as debug, __ppmfx_error as error, __ppmfx_info as info,
    __ppmfx_trace as trace, __ppmfx_warn as warn
};

#[doc(hidden)]
#[macro_export]
macro_rules! __ppmfx_error {
    ($($arg:tt)*) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ppmfx_warn {
    ($($arg:tt)*) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ppmfx_info {
    ($($arg:tt)*) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ppmfx_debug {
    ($($arg:tt)*) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ppmfx_trace {
    ($($arg:tt)*) => {};
}
