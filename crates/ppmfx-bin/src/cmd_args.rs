/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmfx")
        .about("Apply a single filter to a plain text (P3) PPM image")
        .after_help(help_strings::FILTERS_HELP)
        .arg(Arg::new("in")
            .index(1)
            .value_name("INPUT")
            .help("Input file to read data from"))
        .arg(Arg::new("out")
            .index(2)
            .value_name("OUTPUT")
            .help("Output to write the data to, missing directories are created"))
        .arg(Arg::new("filter")
            .index(3)
            .value_name("FILTER")
            .help("Filter to apply, one of grayscale, greyscale, invert, emboss, motionblur"))
        .arg(Arg::new("length")
            .index(4)
            .value_name("LENGTH")
            .allow_hyphen_values(true)
            .help("Number of pixels averaged by motionblur"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Print the input header as JSON and exit"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode, unlimited if not set")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode, unlimited if not set")
            .value_parser(value_parser!(usize)))
}
