// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! JSON request and response shapes, and the commands that map one to the other.


use crate::{Error, config::Config, parse::parse_gates};
use log::{debug, warn};
use nalgebra::Matrix2;
use num_complex::Complex64;
use qsim::{Circuit, QubitReport, SimulationResult, gates};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A complex number as `[re, im]`.
pub type Pair = [f64; 2];

/// A 2x2 complex matrix, row-major.
pub type MatrixPairs = [[Pair; 2]; 2];

fn pair(z: Complex64) -> Pair {
    [z.re, z.im]
}

fn matrix_pairs(matrix: &Matrix2<Complex64>) -> MatrixPairs {
    [
        [pair(matrix[(0, 0)]), pair(matrix[(0, 1)])],
        [pair(matrix[(1, 0)]), pair(matrix[(1, 1)])],
    ]
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimRequest {
    pub num_qubits: usize,
    pub init_state: String,
    #[serde(default)]
    pub gates: Vec<String>,
}

impl SimRequest {
    /// Parses the gate tokens into a circuit. A malformed token fails the
    /// whole request.
    pub fn circuit(&self, config: &Config) -> Result<Circuit, Error> {
        let instructions = parse_gates(&self.gates, config.default_angle_degrees)?;
        Ok(Circuit::new(self.num_qubits, self.init_state.as_str()).with_instructions(instructions))
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Probabilities {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct QubitWire {
    pub index: usize,
    pub bloch: [f64; 3],
    pub entropy: f64,
    pub purity: f64,
    pub probabilities: Probabilities,
    pub density_matrix: MatrixPairs,
}

impl From<&QubitReport> for QubitWire {
    fn from(report: &QubitReport) -> Self {
        let p = &report.properties;
        Self {
            index: report.index,
            bloch: p.bloch,
            entropy: p.entropy,
            purity: p.purity,
            probabilities: Probabilities {
                zero: p.probabilities[0],
                one: p.probabilities[1],
            },
            density_matrix: matrix_pairs(report.density_matrix.matrix()),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SimResponse {
    pub qubits: Vec<QubitWire>,
    pub full_state_vector: Vec<Pair>,
}

impl From<&SimulationResult> for SimResponse {
    fn from(result: &SimulationResult) -> Self {
        Self {
            qubits: result.qubits.iter().map(QubitWire::from).collect(),
            full_state_vector: result.state.amplitudes().iter().copied().map(pair).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReduceResponse {
    pub reduced: MatrixPairs,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RecognizeResponse {
    Matrix { matrix: MatrixPairs },
    NotFound { error: &'static str },
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            error: ErrorBody {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }
}

/// One element of a batch response, in request order.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BatchEntry {
    Simulated(SimResponse),
    Failed(ErrorResponse),
}

/// Runs the request's circuit and reports every qubit of the final state.
pub fn simulate(request: &SimRequest, config: &Config) -> Result<SimResponse, Error> {
    let circuit = request.circuit(config)?;
    let result = circuit.simulate(&config.simulator_config())?;
    Ok(SimResponse::from(&result))
}

/// Reduced density matrix of qubit 0 of the request's initial state. Gates
/// are not applied.
pub fn reduce(request: &SimRequest, config: &Config) -> Result<ReduceResponse, Error> {
    if !request.gates.is_empty() {
        warn!("reduce ignores {} gate(s)", request.gates.len());
    }
    let state = Circuit::new(request.num_qubits, request.init_state.as_str())
        .initial_state(&config.simulator_config())?;
    let reduced = state.reduce(0)?;
    Ok(ReduceResponse {
        reduced: matrix_pairs(reduced.matrix()),
    })
}

/// Looks up the matrix of a single-qubit gate. Parametric gates use
/// `angle_degrees`, or the configured default when it is absent.
#[must_use]
pub fn recognize(name: &str, angle_degrees: Option<f64>, config: &Config) -> RecognizeResponse {
    let degrees = angle_degrees.unwrap_or(config.default_angle_degrees);
    match gates::lookup_with_angle(name, Some(degrees.to_radians())) {
        Ok(matrix) => RecognizeResponse::Matrix {
            matrix: matrix_pairs(&matrix),
        },
        Err(error) => {
            debug!("recognize `{name}`: {error}");
            RecognizeResponse::NotFound {
                error: "Unknown gate",
            }
        }
    }
}

/// Simulates every request as an independent task. The output keeps the input
/// order, with an error object in place of each failed request.
#[must_use]
pub fn batch(requests: &[SimRequest], config: &Config) -> Vec<BatchEntry> {
    debug!("simulating a batch of {} request(s)", requests.len());
    requests
        .par_iter()
        .map(|request| match simulate(request, config) {
            Ok(response) => BatchEntry::Simulated(response),
            Err(error) => BatchEntry::Failed(ErrorResponse::from(&error)),
        })
        .collect()
}
