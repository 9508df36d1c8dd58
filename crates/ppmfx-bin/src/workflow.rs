/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use ppmfx_core::options::DecoderOptions;
use ppmfx_core::utils::parse_int_or;
use ppmfx_imageprocs::emboss::Emboss;
use ppmfx_imageprocs::grayscale::Grayscale;
use ppmfx_imageprocs::invert::Invert;
use ppmfx_imageprocs::motion_blur::MotionBlur;
use ppmfx_imageprocs::traits::OperationsTrait;
use ppmfx_ppm::{PPMDecoder, PPMEncoder};

use crate::cmd_args::create_cmd_args;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::ImageErrors;
use crate::file_io::{read_input, write_output};
use crate::probe_files::probe_input_file;

/// Map a filter name to its operation
///
/// Names are case insensitive. `motionblur` also needs a length, a
/// length that isn't a number is read as 1.
///
/// Returns `None` for unknown names or when the length is missing,
/// callers should show usage in that case.
pub fn select_operation(
    filter: Option<&str>, length: Option<&str>
) -> Option<Box<dyn OperationsTrait>> {
    let name = filter?.to_ascii_lowercase();

    let operation: Box<dyn OperationsTrait> = match name.as_str() {
        "grayscale" | "greyscale" => Box::new(Grayscale::new()),
        "invert" => Box::new(Invert::new()),
        "emboss" => Box::new(Emboss::new()),
        "motionblur" => {
            let length = parse_int_or(Some(length?), 1_i64);
            debug!("Motion blur length {}", length);

            Box::new(MotionBlur::new(length))
        }
        _ => return None
    };
    debug!("Added {} operation", operation.get_name());

    Some(operation)
}

/// Decode `input`, apply `operation` and write the result to `output`
///
/// Everything happens in memory before the output is touched, so a
/// decoding failure leaves no output file or directory behind.
///
/// # Errors
/// - `MissingPath` if either path is absent or empty
/// - Any I/O, decoding or encoding error
pub fn run_filter(
    input: Option<&str>, output: Option<&str>, operation: &dyn OperationsTrait,
    options: DecoderOptions
) -> Result<(), ImageErrors> {
    let input = input
        .filter(|path| !path.is_empty())
        .ok_or(ImageErrors::MissingPath("input"))?;
    let output = output
        .filter(|path| !path.is_empty())
        .ok_or(ImageErrors::MissingPath("output"))?;

    info!("Processing {:?} into {:?}", input, output);

    let data = read_input(Path::new(input))?;

    let mut raster = PPMDecoder::new_with_options(options, &data).decode()?;

    operation.execute(&mut raster);

    let mut encoded = Vec::with_capacity(data.len());
    PPMEncoder::new(&mut encoded).encode(&raster)?;

    write_output(Path::new(output), &encoded)
}

fn print_usage() {
    let mut cmd = create_cmd_args();
    let _ = cmd.print_help();
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let input = args.get_one::<String>("in").map(String::as_str);
    let output = args.get_one::<String>("out").map(String::as_str);

    if args.get_flag("probe") {
        match input {
            Some(in_file) => println!("{}", probe_input_file(in_file)?),
            None => print_usage()
        }
        return Ok(());
    }

    let filter = args.get_one::<String>("filter").map(String::as_str);
    let length = args.get_one::<String>("length").map(String::as_str);

    match select_operation(filter, length) {
        Some(operation) => run_filter(
            input,
            output,
            operation.as_ref(),
            cmd_opts.decoder_options()
        ),
        None => {
            print_usage();
            Ok(())
        }
    }
}
