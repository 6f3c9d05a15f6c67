// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use crate::{
    Error,
    analytics::{QubitProperties, finite},
    gates::Instruction,
    reduction::DensityMatrix,
    state::{MAX_ADDRESSABLE_QUBITS, StateVector},
};
use log::debug;
use num_complex::Complex64;

/// Limits applied before any state is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Largest register accepted. Memory grows as `2^max_qubits` amplitudes.
    pub max_qubits: usize,
}

impl SimulatorConfig {
    pub const DEFAULT_MAX_QUBITS: usize = 16;

    /// Rejects registers that are empty, larger than [`Self::max_qubits`] or
    /// larger than [`MAX_ADDRESSABLE_QUBITS`].
    pub fn check_qubit_count(&self, num_qubits: usize) -> Result<(), Error> {
        let max = self.max_qubits.min(MAX_ADDRESSABLE_QUBITS);
        if num_qubits == 0 || num_qubits > max {
            return Err(Error::QubitCount {
                requested: num_qubits,
                max,
            });
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: Self::DEFAULT_MAX_QUBITS,
        }
    }
}

/// A circuit: a register size, its initial basis state and the gates to apply
/// in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    init_state: String,
    instructions: Vec<Instruction>,
}

/// Analytics for one qubit of the final state.
#[derive(Clone, Debug, PartialEq)]
pub struct QubitReport {
    pub index: usize,
    pub properties: QubitProperties,
    pub density_matrix: DensityMatrix,
}

/// Outcome of a full simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub qubits: Vec<QubitReport>,
    pub state: StateVector,
}

/// The stages of a run. Each transition consumes the previous stage.
#[derive(Debug)]
enum Stage {
    Initializing,
    ApplyingGates(StateVector),
    Reducing(StateVector),
    Done(SimulationResult),
}

impl Circuit {
    #[must_use]
    pub fn new(num_qubits: usize, init_state: impl Into<String>) -> Self {
        Self {
            num_qubits,
            init_state: init_state.into(),
            instructions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_instructions(
        mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> Self {
        self.instructions.extend(instructions);
        self
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn init_state(&self) -> &str {
        &self.init_state
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Builds the initial product state, checked against `config`.
    pub fn initial_state(&self, config: &SimulatorConfig) -> Result<StateVector, Error> {
        config.check_qubit_count(self.num_qubits)?;
        StateVector::from_bits(self.num_qubits, &self.init_state)
    }

    /// Runs the circuit and reports every qubit of the final state.
    ///
    /// The first failing gate aborts the run; no partial result is returned.
    pub fn simulate(&self, config: &SimulatorConfig) -> Result<SimulationResult, Error> {
        let mut stage = Stage::Initializing;
        loop {
            debug!("simulation stage: {}", stage.name());
            stage = match stage {
                Stage::Initializing => Stage::ApplyingGates(self.initial_state(config)?),
                Stage::ApplyingGates(mut state) => {
                    for instruction in &self.instructions {
                        state.apply(instruction)?;
                    }
                    Stage::Reducing(state)
                }
                Stage::Reducing(state) => Stage::Done(report(state)?),
                Stage::Done(result) => {
                    debug!(
                        "simulated {} gate(s) on {} qubit(s)",
                        self.instructions.len(),
                        self.num_qubits
                    );
                    return Ok(result);
                }
            };
        }
    }
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::Initializing => "initializing",
            Stage::ApplyingGates(_) => "applying gates",
            Stage::Reducing(_) => "reducing",
            Stage::Done(_) => "done",
        }
    }
}

fn report(state: StateVector) -> Result<SimulationResult, Error> {
    let qubits = (0..state.num_qubits())
        .map(|index| {
            let density_matrix = sanitize(state.reduce(index)?);
            Ok(QubitReport {
                index,
                properties: QubitProperties::from_density_matrix(&density_matrix),
                density_matrix,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(SimulationResult { qubits, state })
}

fn sanitize(density: DensityMatrix) -> DensityMatrix {
    density
        .matrix()
        .map(|z| Complex64::new(finite(z.re), finite(z.im)))
        .into()
}
