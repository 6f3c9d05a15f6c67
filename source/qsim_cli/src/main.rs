// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod api;
mod config;
mod error;
mod parse;

use api::{ErrorResponse, SimRequest};
use clap::{ArgAction, Args, Parser, Subcommand};
use config::Config;
use error::Error;
use log::{LevelFilter, debug};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(
    name = "qsim",
    about = "Simulates small quantum circuits and reports per-qubit analytics as JSON",
    version
)]
struct Cli {
    /// JSON config file. Defaults to `qsim.json` in the working directory.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Largest register accepted, overriding the config file.
    #[arg(long, value_name = "N", global = true)]
    max_qubits: Option<usize>,

    /// Pretty-print the JSON output.
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    pretty: bool,

    /// Raise the log level. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a circuit and report every qubit of the final state.
    Simulate(RequestArgs),
    /// Reduced density matrix of qubit 0 of the initial state.
    Reduce(RequestArgs),
    /// Print the matrix of a single-qubit gate.
    Recognize {
        name: String,
        /// Rotation angle in degrees for `Rx`, `Ry`, `Rz` and `Phase`.
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f64>,
    },
    /// Simulate a JSON array of requests in parallel.
    Batch {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// Read the whole request from a JSON file.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["num_qubits", "init", "gates"])]
    request: Option<PathBuf>,

    /// Register size. Defaults to the length of `--init`.
    #[arg(short = 'n', long)]
    num_qubits: Option<usize>,

    /// Initial basis state, one '0' or '1' per qubit.
    #[arg(long, value_name = "BITS", required_unless_present = "request")]
    init: Option<String>,

    /// Gate tokens such as `H(0)`, `CNOT(0,1)` or `Rx(0,45)`.
    #[arg(value_name = "GATE")]
    gates: Vec<String>,
}

impl RequestArgs {
    fn into_request(self) -> Result<SimRequest, Error> {
        if let Some(path) = self.request {
            return read_json(&path);
        }
        let init_state = self.init.unwrap_or_default();
        Ok(SimRequest {
            num_qubits: self.num_qubits.unwrap_or(init_state.len()),
            init_state,
            gates: self.gates,
        })
    }
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} byte(s) from {}", text.len(), path.display());
    Ok(serde_json::from_str(&text)?)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, Error> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn execute(cli: Cli) -> Result<String, Error> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(max_qubits) = cli.max_qubits {
        config.max_qubits = max_qubits;
    }
    config.pretty |= cli.pretty;
    debug!("effective config: {config:?}");

    match cli.command {
        Command::Simulate(args) => {
            let response = api::simulate(&args.into_request()?, &config)?;
            render(&response, config.pretty)
        }
        Command::Reduce(args) => {
            let response = api::reduce(&args.into_request()?, &config)?;
            render(&response, config.pretty)
        }
        Command::Recognize { name, angle } => {
            render(&api::recognize(&name, angle, &config), config.pretty)
        }
        Command::Batch { file } => {
            let requests: Vec<SimRequest> = read_json(&file)?;
            render(&api::batch(&requests, &config), config.pretty)
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(level(cli.verbose))
        .parse_default_env()
        .init();

    let pretty = cli.pretty;
    match execute(cli) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(error) => {
            if let Ok(output) = render(&ErrorResponse::from(&error), pretty) {
                println!("{output}");
            }
            Err(error.into())
        }
    }
}
