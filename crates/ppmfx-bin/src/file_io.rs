/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::errors::ImageErrors;

/// Read the whole of `path` into memory
pub fn read_input(path: &Path) -> Result<Vec<u8>, ImageErrors> {
    let data = fs::read(path)?;

    debug!("Read {} bytes from {:?}", data.len(), path);

    Ok(data)
}

/// Write `data` to `path` in one go
///
/// The containing directory is created first, including any missing
/// parents. A directory that already exists is left alone.
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), ImageErrors> {
    if let Some(parent) = path.parent() {
        // an empty parent means the current directory
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, data)?;

    info!("Wrote {} bytes to {:?}", data.len(), path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::file_io::{read_input, write_output};

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.ppm");

        write_output(&path, b"P3\n0 0\n255\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"P3\n0 0\n255\n");
    }

    #[test]
    fn existing_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.ppm");

        write_output(&path, b"first").unwrap();
        write_output(&path, b"second").unwrap();

        assert_eq!(read_input(&path).unwrap(), b"second");
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(read_input(&dir.path().join("nope.ppm")).is_err());
    }
}
