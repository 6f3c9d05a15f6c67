// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Failures surfaced by the simulation core.
///
/// None of these are recovered inside the core: a failing gate aborts the
/// whole run so that returned analytics always describe the full circuit.
#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("unknown gate `{0}`")]
    #[diagnostic(code("Qsim.UnknownGate"))]
    #[diagnostic(help(
        "supported gates are I, X, Y, Z, H, S, Sd, T, Td, Rx, Ry, Rz, Phase, CNOT, CZ, SWAP and TOFFOLI"
    ))]
    UnknownGate(String),

    #[error("gate `{gate}` expects {expected} target qubit(s) but {found} were given")]
    #[diagnostic(code("Qsim.ArityMismatch"))]
    ArityMismatch {
        gate: String,
        expected: usize,
        found: usize,
    },

    #[error("state vector has {found} amplitudes but {expected} were expected")]
    #[diagnostic(code("Qsim.DimensionMismatch"))]
    DimensionMismatch { expected: usize, found: usize },

    #[error("reduction must retain exactly one qubit, {0} were requested")]
    #[diagnostic(code("Qsim.UnsupportedReduction"))]
    UnsupportedReduction(usize),

    #[error("invalid initial state: {0}")]
    #[diagnostic(code("Qsim.InvalidInitState"))]
    #[diagnostic(help("the initial state is one '0' or '1' character per qubit"))]
    InvalidInitState(InitStateFault),

    #[error("qubit index {index} is out of range for a {num_qubits}-qubit state")]
    #[diagnostic(code("Qsim.QubitOutOfRange"))]
    QubitOutOfRange { index: usize, num_qubits: usize },

    #[error("gate `{gate}` addresses qubit {index} more than once")]
    #[diagnostic(code("Qsim.DuplicateTarget"))]
    DuplicateTarget { gate: String, index: usize },

    #[error("gate `{0}` requires a rotation angle")]
    #[diagnostic(code("Qsim.MissingAngle"))]
    MissingAngle(String),

    #[error("gate `{gate}` was given the non-finite angle {angle}")]
    #[diagnostic(code("Qsim.InvalidAngle"))]
    InvalidAngle { gate: String, angle: f64 },

    #[error("cannot simulate {requested} qubit(s), the supported range is 1..={max}")]
    #[diagnostic(code("Qsim.QubitCount"))]
    QubitCount { requested: usize, max: usize },
}

impl Error {
    /// The bare name of the failure kind, as reported to callers.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnknownGate(_) => "UnknownGate",
            Error::ArityMismatch { .. } => "ArityMismatch",
            Error::DimensionMismatch { .. } => "DimensionMismatch",
            Error::UnsupportedReduction(_) => "UnsupportedReduction",
            Error::InvalidInitState(_) => "InvalidInitState",
            Error::QubitOutOfRange { .. } => "QubitOutOfRange",
            Error::DuplicateTarget { .. } => "DuplicateTarget",
            Error::MissingAngle(_) => "MissingAngle",
            Error::InvalidAngle { .. } => "InvalidAngle",
            Error::QubitCount { .. } => "QubitCount",
        }
    }
}

/// Why an initial-state bit string was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InitStateFault {
    #[error("expected {expected} characters, found {found}")]
    Length { expected: usize, found: usize },
    #[error("character {found:?} at position {position} is not '0' or '1'")]
    Character { position: usize, found: char },
}
