// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Dense state-vector simulation of small quantum circuits.
//!
//! A [`Circuit`] starts from a computational basis state, applies its
//! [`Instruction`]s in order and reports, for every qubit, the reduced density
//! matrix and the observables derived from it.

pub mod analytics;
pub mod apply;
pub mod circuit;
pub mod error;
pub mod gates;
pub mod reduction;
pub mod state;

pub use analytics::QubitProperties;
pub use circuit::{Circuit, QubitReport, SimulationResult, SimulatorConfig};
pub use error::Error;
pub use gates::{FixedGate, Gate, Instruction, Rotation, StructuralGate};
pub use reduction::DensityMatrix;
pub use state::StateVector;
