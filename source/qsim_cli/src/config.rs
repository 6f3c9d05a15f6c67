// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use log::{debug, info};
use miette::Diagnostic;
use qsim::SimulatorConfig;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "qsim.json";

#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    #[error("could not read config file `{}`", path.display())]
    #[diagnostic(code("Qsim.Config.Io"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file `{}`", path.display())]
    #[diagnostic(code("Qsim.Config.Parse"))]
    #[diagnostic(help("known keys are maxQubits, defaultAngleDegrees and pretty"))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io { .. } => "ConfigIo",
            Error::Parse { .. } => "ConfigParse",
        }
    }
}

/// Settings read from `qsim.json`. Missing keys take their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Config {
    pub max_qubits: usize,
    /// Angle given to `Rx`, `Ry`, `Rz` and `Phase` tokens that omit one.
    pub default_angle_degrees: f64,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_qubits: SimulatorConfig::DEFAULT_MAX_QUBITS,
            default_angle_degrees: 90.0,
            pretty: false,
        }
    }
}

impl Config {
    /// Loads `path` if given. Otherwise loads [`DEFAULT_CONFIG_FILE`] from the
    /// working directory when it exists, and falls back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::read(path)
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig {
            max_qubits: self.max_qubits,
        }
    }
}
