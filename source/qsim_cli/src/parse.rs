// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Parser for gate tokens such as `H(0)`, `CNOT(0,1)` or `Rx(2,45)`.
//!
//! Parametric gates take the qubit first and the angle, in degrees, second.


use miette::Diagnostic;
use qsim::{Instruction, Rotation};
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("malformed gate `{0}`")]
    #[diagnostic(code("Qsim.Parse.MalformedGate"))]
    #[diagnostic(help(
        "gates are written as `Name(arg, ...)`, for example `CNOT(0,1)` or `Rx(0,90)`"
    ))]
    MalformedGate(String),

    #[error("`{arg}` in gate `{token}` is not a qubit index")]
    #[diagnostic(code("Qsim.Parse.InvalidQubit"))]
    InvalidQubit { token: String, arg: String },

    #[error("`{arg}` in gate `{token}` is not a finite angle in degrees")]
    #[diagnostic(code("Qsim.Parse.InvalidAngle"))]
    InvalidAngle { token: String, arg: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Gate(#[from] qsim::Error),
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedGate(_) => "MalformedGate",
            Error::InvalidQubit { .. } => "InvalidQubit",
            Error::InvalidAngle { .. } => "InvalidAngle",
            Error::Gate(error) => error.kind(),
        }
    }
}

/// Splits `Name(a, b, ...)` into its name and trimmed arguments.
fn split(token: &str) -> Option<(&str, Vec<&str>)> {
    let (name, rest) = token.trim().split_once('(')?;
    let args = rest.strip_suffix(')')?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(char::is_alphanumeric) || args.contains(['(', ')']) {
        return None;
    }
    let args = if args.trim().is_empty() {
        Vec::new()
    } else {
        args.split(',').map(str::trim).collect()
    };
    Some((name, args))
}

fn is_parametric(name: &str) -> bool {
    Rotation::ALL.iter().any(|r| r.name() == name)
}

/// Parses one gate token. A parametric gate without an angle uses
/// `default_angle_degrees`.
pub fn parse_gate(token: &str, default_angle_degrees: f64) -> Result<Instruction, Error> {
    let malformed = || Error::MalformedGate(token.to_string());
    let (name, args) = split(token).ok_or_else(malformed)?;

    let qubit = |arg: &str| {
        arg.parse::<usize>().map_err(|_| Error::InvalidQubit {
            token: token.to_string(),
            arg: arg.to_string(),
        })
    };

    if is_parametric(name) {
        let (targets, degrees) = match args.as_slice() {
            [] => (Vec::new(), default_angle_degrees),
            [target] => (vec![qubit(*target)?], default_angle_degrees),
            [target, angle] => {
                let degrees = angle
                    .parse::<f64>()
                    .ok()
                    .filter(|degrees| degrees.is_finite())
                    .ok_or_else(|| Error::InvalidAngle {
                        token: token.to_string(),
                        arg: (*angle).to_string(),
                    })?;
                (vec![qubit(*target)?], degrees)
            }
            _ => return Err(malformed()),
        };
        Ok(Instruction::decode(name, &targets, Some(degrees.to_radians()))?)
    } else {
        let targets = args.iter().map(|&arg| qubit(arg)).collect::<Result<Vec<_>, _>>()?;
        Ok(Instruction::decode(name, &targets, None)?)
    }
}

/// Parses every token, stopping at the first malformed one.
pub fn parse_gates<S: AsRef<str>>(
    tokens: &[S],
    default_angle_degrees: f64,
) -> Result<Vec<Instruction>, Error> {
    tokens
        .iter()
        .map(|token| parse_gate(token.as_ref(), default_angle_degrees))
        .collect()
}
