/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use ppmfx_core::options::DecoderOptions;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CmdOptions {
    pub max_width:  usize,
    pub max_height: usize
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let defaults = DecoderOptions::default();

        CmdOptions {
            max_width:  defaults.get_max_width(),
            max_height: defaults.get_max_height()
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    info!(
        "Maximum dimensions: {}x{}",
        cmd_options.max_width, cmd_options.max_height
    );
    cmd_options
}

/// Choose the log level from the logging flags, warnings by default
fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
