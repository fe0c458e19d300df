/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub probe:     bool,
    pub write_flo: Option<PathBuf>
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            probe:     false,
            write_flo: None
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("probe") == Some(ValueSource::CommandLine) {
        info!("Probing input, no image will be written");
        cmd_options.probe = true;
    }
    if let Some(path) = options.get_one::<String>("write-flo") {
        info!("Decoded flow will be written to {:?}", path);
        cmd_options.write_flo = Some(PathBuf::from(path));
    }
    cmd_options
}

/// Pick the log level from the command line
///
/// Quiet wins over every other flag, `info` wins over `warn`
/// and is also the default
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("quiet") {
        Level::Error
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else if options.get_flag("warn") {
        Level::Warn
    } else {
        Level::Info
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }
    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
