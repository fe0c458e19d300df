/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use zune_flo::{read_flo, write_flo};
use zune_flowviz::{colorize_flow, reference_image, resolve_scale};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::file_io::write_png;
use crate::probe_files::probe_flow;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CmdErrors> {
    match args.subcommand() {
        Some(("colortest", sub_args)) => exec_colortest(sub_args),
        _ => exec_colorize(args, cmd_opts)
    }
}

fn exec_colorize(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let in_file = args
        .get_one::<String>("in")
        .ok_or_else(|| CmdErrors::Generic("No input file given".to_string()))?;

    let in_file = normalize_separators(in_file);
    let out_file = args
        .get_one::<String>("out")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_name(&in_file));

    let in_path = Path::new(&in_file);

    if !cmd_opts.probe {
        verify_file_paths(in_path, &out_file)?;
    }
    info!("Reading flow from {:?}", in_path);

    let field = read_flo(in_path)?;

    if cmd_opts.probe {
        println!("{}", probe_flow(in_path, &field)?);
        return Ok(());
    }
    if let Some(flo_out) = &cmd_opts.write_flo {
        write_flo(flo_out, &field)?;
        info!("Wrote flow to {:?}", flo_out);
    }

    let scale = resolve_scale(&field, args.get_one::<f32>("max-motion").copied());
    let image = colorize_flow(&field, scale)?;

    write_png(&out_file, &image)?;
    info!("Wrote color coded flow to {:?}", out_file);

    Ok(())
}

fn exec_colortest(args: &ArgMatches) -> Result<(), CmdErrors> {
    let range = args.get_one::<f32>("range").copied().unwrap_or(10.0);
    let size = args.get_one::<usize>("size").copied().unwrap_or(151);

    let out_file = args
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| colortest_output_name(range, size));

    info!("Legend range: {}", range);
    info!("Legend size: {}", size);
    info!("Legend output: {:?}", out_file);

    let image = reference_image(range, size)?;
    write_png(&out_file, &image)?;

    Ok(())
}

fn verify_file_paths(in_path: &Path, out_path: &Path) -> Result<(), CmdErrors> {
    if in_path == out_path {
        return Err(CmdErrors::Generic(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }
    if out_path.exists() {
        debug!("Overwriting path {:?}", out_path);
    }
    Ok(())
}

/// Replace Windows separators so names can be split on `/`
pub(crate) fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Name of the image written for `in_file` when none was given
///
/// The directory is dropped and the last extension replaced,
/// so the image lands in the working directory.
pub(crate) fn default_output_name(in_file: &str) -> PathBuf {
    let file_name = match in_file.rfind('/') {
        Some(pos) => &in_file[pos + 1..],
        None => in_file
    };
    let stem = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name
    };
    PathBuf::from(format!("{stem}.png"))
}

pub(crate) fn colortest_output_name(range: f32, size: usize) -> PathBuf {
    PathBuf::from(format!("colortest_range={range:.6}_size={size}.png"))
}
