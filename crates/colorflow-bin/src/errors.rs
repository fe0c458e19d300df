/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use zune_flo::FloErrors;
use zune_flowviz::FlowVizErrors;

/// Errors that stop a command line run
pub enum CmdErrors {
    Flo(FloErrors),
    FlowViz(FlowVizErrors),
    Png(png::EncodingError),
    Json(serde_json::Error),
    /// File system failure on the given path
    Io(PathBuf, std::io::Error),
    Generic(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CmdErrors::Flo(err) => writeln!(f, "{:?}", err),
            CmdErrors::FlowViz(err) => writeln!(f, "{:?}", err),
            CmdErrors::Png(err) => writeln!(f, "Could not encode png: {}", err),
            CmdErrors::Json(err) => writeln!(f, "Could not serialize statistics: {}", err),
            CmdErrors::Io(path, err) => writeln!(f, "Could not write {:?}: {}", path, err),
            CmdErrors::Generic(reason) => writeln!(f, "{}", reason)
        }
    }
}

impl Display for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CmdErrors {}

impl From<FloErrors> for CmdErrors {
    fn from(value: FloErrors) -> Self {
        CmdErrors::Flo(value)
    }
}

impl From<FlowVizErrors> for CmdErrors {
    fn from(value: FlowVizErrors) -> Self {
        CmdErrors::FlowViz(value)
    }
}

impl From<png::EncodingError> for CmdErrors {
    fn from(value: png::EncodingError) -> Self {
        CmdErrors::Png(value)
    }
}

impl From<serde_json::Error> for CmdErrors {
    fn from(value: serde_json::Error) -> Self {
        CmdErrors::Json(value)
    }
}

impl From<String> for CmdErrors {
    fn from(value: String) -> Self {
        CmdErrors::Generic(value)
    }
}
