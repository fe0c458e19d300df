/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{AFTER_HELP, COLORTEST_HELP, MAX_MOTION_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("colorflow")
        .about("Convert .flo optical flow files to color coded images")
        .after_help(AFTER_HELP)
        .subcommand(colortest_options())
        .subcommand_negates_reqs(true)
        .arg(Arg::new("in")
            .help("Input .flo file to read flow from")
            .value_name("in.flo")
            .required(true))
        .arg(Arg::new("out")
            .help("Output png file, defaults to the input name with a .png extension")
            .value_name("out.png"))
        .arg(Arg::new("max-motion")
            .help("Motion that maps to a fully saturated color")
            .long_help(MAX_MOTION_HELP)
            .value_name("max-motion")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Only print errors"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print flow statistics as json instead of writing an image"))
        .arg(Arg::new("write-flo")
            .long("write-flo")
            .value_name("path")
            .help_heading("ADVANCED")
            .help("Also write the decoded flow to a new .flo file"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display motion statistics and the chosen scale"))
}

#[rustfmt::skip]
fn colortest_options() -> Command {
    Command::new("colortest")
        .about("Write a legend image of the color coding")
        .long_about(COLORTEST_HELP)
        .arg(Arg::new("range")
            .help("Largest motion shown on the legend")
            .default_value("10")
            .value_parser(value_parser!(f32)))
        .arg(Arg::new("size")
            .help("Side length of the legend in pixels")
            .default_value("151")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("out.png")
            .help("Output png file, defaults to colortest_range=<range>_size=<size>.png"))
}
