// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{config, parse};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Anything a command can fail with. Each failure is also rendered as an
/// `{"error": {"kind", "message"}}` object on standard output.
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] parse::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Simulation(#[from] qsim::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::Error),

    #[error("could not read `{}`", path.display())]
    #[diagnostic(code("Qsim.Io"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request JSON: {0}")]
    #[diagnostic(code("Qsim.Json"))]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Parse(error) => error.kind(),
            Error::Simulation(error) => error.kind(),
            Error::Config(error) => error.kind(),
            Error::Io { .. } => "Io",
            Error::Json(_) => "Json",
        }
    }
}
