/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter, Write as _};
use std::io;
use std::io::{Error, Write};

use ppmfx_core::raster::Raster;

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    IoErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: Error) -> Self {
        PPMEncodeErrors::IoErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {}

/// A plain text PPM encoder
///
/// The output is always `P3` with a max value of 255, channels are
/// written as stored in the raster.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(&mut self, width: usize, height: usize) -> Result<(), PPMEncodeErrors> {
        let header = format!("P3\n{width} {height}\n255\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `raster`
    ///
    /// Every row becomes one line of `3*width` space separated integers.
    ///
    /// # Errors
    /// Any error returned by the underlying writer.
    pub fn encode(&mut self, raster: &Raster) -> Result<(), PPMEncodeErrors> {
        let (width, height) = raster.dimensions();

        self.write_headers(width, height)?;

        // reused between rows, roughly 12 bytes per pixel
        let mut line = String::with_capacity(width * 12);

        for row in raster.rows() {
            line.clear();

            for (pos, pixel) in row.iter().enumerate() {
                if pos != 0 {
                    line.push(' ');
                }
                // writing to a String can't fail
                let _ = write!(line, "{} {} {}", pixel.r, pixel.g, pixel.b);
            }
            line.push('\n');

            self.writer.write_all(line.as_bytes())?;
        }
        self.writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use ppmfx_core::pixel::Pixel;
    use ppmfx_core::raster::Raster;

    use crate::{PPMEncodeErrors, PPMEncoder};

    fn encode_to_string(raster: &Raster) -> String {
        let mut output = Vec::new();
        PPMEncoder::new(&mut output).encode(raster).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn encode_layout() {
        let raster = Raster::from_fn(2, 2, |x, y| Pixel::gray((y * 2 + x) as i32));

        assert_eq!(
            encode_to_string(&raster),
            "P3\n2 2\n255\n0 0 0 1 1 1\n2 2 2 3 3 3\n"
        );
    }

    #[test]
    fn encode_empty_raster() {
        assert_eq!(encode_to_string(&Raster::new(0, 0)), "P3\n0 0\n255\n");
    }

    #[test]
    fn out_of_range_values_are_written_verbatim() {
        let mut raster = Raster::new(1, 1);
        raster.set(0, 0, Pixel::new(-1, 256, 1000));

        assert_eq!(encode_to_string(&raster), "P3\n1 1\n255\n-1 256 1000\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_errors_are_propagated() {
        let mut writer = FailingWriter;
        let result = PPMEncoder::new(&mut writer).encode(&Raster::new(1, 1));

        assert!(matches!(result, Err(PPMEncodeErrors::IoErrors(_))));
    }
}
