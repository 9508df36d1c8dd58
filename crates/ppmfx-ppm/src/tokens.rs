/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Splitting a PPM stream into whitespace separated tokens

/// Yields the tokens of a plain PPM stream, skipping whitespace and comments.
///
/// A `#` begins a comment wherever it appears, including directly after
/// a token (`255#max`), and the comment runs to the end of the line.
pub(crate) struct TokenReader<'a> {
    data:     &'a [u8],
    position: usize
}

impl<'a> TokenReader<'a> {
    pub fn new(data: &'a [u8]) -> TokenReader<'a> {
        TokenReader { data, position: 0 }
    }

    fn eof(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Skip all whitespace characters and comments
    /// until one hits a character that isn't a space or
    /// we reach eof
    fn skip_spaces(&mut self) {
        while let Some(&byte) = self.data.get(self.position) {
            if byte == b'#' {
                // skip the whole comment
                while let Some(&byte) = self.data.get(self.position) {
                    if byte == b'\n' || byte == b'\r' {
                        break;
                    }
                    self.position += 1;
                }
            } else if byte.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Return the next token, or `None` once the stream is exhausted
    pub fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_spaces();

        if self.eof() {
            return None;
        }
        let start = self.position;

        while let Some(&byte) = self.data.get(self.position) {
            if byte.is_ascii_whitespace() || byte == b'#' {
                break;
            }
            self.position += 1;
        }
        Some(&self.data[start..self.position])
    }

    /// Return the next token as a string
    ///
    /// Tokens that aren't valid UTF-8 are treated like missing ones,
    /// they can never be a number anyway.
    pub fn next_str(&mut self) -> Option<&'a str> {
        self.next_token()
            .and_then(|token| std::str::from_utf8(token).ok())
    }
}
