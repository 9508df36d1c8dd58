/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::str::FromStr;

/// Parse `token` as a base-10 integer, returning `fallback` when the
/// token is absent or not a valid number.
///
/// This is the single place where malformed numeric input is tolerated.
/// The PPM decoder calls it with a fallback of `0`, so a truncated file
/// decodes into a black padded image instead of failing.
///
/// # Example
/// ```
/// use ppmfx_core::utils::parse_int_or;
///
/// assert_eq!(parse_int_or(Some("42"), 0), 42);
/// assert_eq!(parse_int_or(Some("4x2"), 0), 0);
/// assert_eq!(parse_int_or::<i64>(None, 1), 1);
/// ```
pub fn parse_int_or<T: FromStr>(token: Option<&str>, fallback: T) -> T {
    match token {
        Some(value) => value.parse::<T>().unwrap_or(fallback),
        None => fallback
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::parse_int_or;

    #[test]
    fn parses_valid_integers() {
        assert_eq!(parse_int_or(Some("0"), 7), 0);
        assert_eq!(parse_int_or(Some("255"), 7), 255);
        assert_eq!(parse_int_or(Some("-12"), 7_i32), -12);
        assert_eq!(parse_int_or(Some("+3"), 7_i32), 3);
    }

    #[test]
    fn falls_back_on_garbage() {
        assert_eq!(parse_int_or(Some(""), 0_i32), 0);
        assert_eq!(parse_int_or(Some("abc"), 0_i32), 0);
        assert_eq!(parse_int_or(Some("1.5"), 0_i32), 0);
        assert_eq!(parse_int_or(Some("99999999999"), 0_i32), 0);
    }

    #[test]
    fn negative_dimension_falls_back_for_unsigned() {
        assert_eq!(parse_int_or(Some("-4"), 0_usize), 0);
    }

    #[test]
    fn missing_token_uses_fallback() {
        assert_eq!(parse_int_or::<i32>(None, 0), 0);
        assert_eq!(parse_int_or::<i64>(None, 1), 1);
    }
}
