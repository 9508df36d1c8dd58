/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::{Path, PathBuf};

use ppmfx_core::options::DecoderOptions;
use ppmfx_ppm::{PPMDecoder, PPMEncoder};

use crate::{sample_path, TestEntry};

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

fn load_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ppm.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm_filters() {
    let paths = load_entries();

    let default_path = ppm_path();
    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let file_name = default_path.join(&path.name);

        let file_contents = read(&file_name).unwrap();
        let expected = read(default_path.join(&path.expected)).unwrap();

        let options = DecoderOptions::default();

        let mut decoder = PPMDecoder::new_with_options(options, &file_contents);
        let mut raster = decoder.decode().unwrap();

        path.filter
            .to_operation(path.length.as_deref())
            .execute(&mut raster);

        let mut output = Vec::new();
        PPMEncoder::new(&mut output).encode(&raster).unwrap();

        if output != expected {
            error = true;
            files.push(path.to_owned());
            // report error
            let err = format!(
                "Output mismatch for file {:?}\nExpected\n{}\nbut found\n{}\nConfig:{:#?}",
                file_name,
                String::from_utf8_lossy(&expected),
                String::from_utf8_lossy(&output),
                path
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during filtering\n {:#?}", files);
    }
}

#[test]
fn test_ppm_inputs_survive_a_round_trip() {
    let paths = load_entries();
    let default_path = ppm_path();

    for path in &paths {
        let file_contents = read(default_path.join(&path.name)).unwrap();
        let raster = PPMDecoder::new(&file_contents).decode().unwrap();

        let mut output = Vec::new();
        PPMEncoder::new(&mut output).encode(&raster).unwrap();

        let again = PPMDecoder::new(&output).decode().unwrap();
        assert_eq!(raster, again, "{}", path.name);
    }
}
