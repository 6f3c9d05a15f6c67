// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Gate expansion and application.
//!
//! Single-qubit gates act as `I ⊗ … ⊗ G ⊗ … ⊗ I` with `G` at the target
//! position. Structural gates act as a permutation or sign flip of basis
//! indices. Both are applied in place on the amplitude vector; the dense
//! `2^n × 2^n` operator is only built by [`Instruction::full_operator`].


use crate::{
    Error,
    gates::{Gate, Instruction, StructuralGate},
    state::{StateVector, dimension, qubit_mask},
};
use log::trace;
use nalgebra::{DMatrix, Matrix2};
use num_complex::Complex64;

impl StateVector {
    /// Applies `instruction`. All targets are validated before any amplitude
    /// is written, so a failing instruction leaves the state untouched.
    pub fn apply(&mut self, instruction: &Instruction) -> Result<(), Error> {
        let num_qubits = self.num_qubits();
        instruction.validate(num_qubits)?;
        trace!("applying {instruction} to {num_qubits} qubit(s)");

        let targets = instruction.targets();
        match instruction.gate() {
            Gate::Fixed(gate) => {
                apply_single(self.amplitudes_mut(), gate.matrix(), num_qubits, targets[0]);
            }
            Gate::Rotation(rotation, angle) => apply_single(
                self.amplitudes_mut(),
                &rotation.matrix(*angle),
                num_qubits,
                targets[0],
            ),
            Gate::Structural(gate) => {
                apply_structural(self.amplitudes_mut(), *gate, num_qubits, targets);
            }
        }
        Ok(())
    }
}

fn apply_single(
    amplitudes: &mut [Complex64],
    matrix: &Matrix2<Complex64>,
    num_qubits: usize,
    target: usize,
) {
    let mask = qubit_mask(num_qubits, target);
    for i0 in 0..amplitudes.len() {
        if i0 & mask != 0 {
            continue;
        }
        let i1 = i0 | mask;
        let (a0, a1) = (amplitudes[i0], amplitudes[i1]);
        amplitudes[i0] = matrix[(0, 0)] * a0 + matrix[(0, 1)] * a1;
        amplitudes[i1] = matrix[(1, 0)] * a0 + matrix[(1, 1)] * a1;
    }
}

fn apply_structural(
    amplitudes: &mut [Complex64],
    gate: StructuralGate,
    num_qubits: usize,
    targets: &[usize],
) {
    let masks = targets
        .iter()
        .map(|&q| qubit_mask(num_qubits, q))
        .collect::<Vec<_>>();
    match gate {
        StructuralGate::Cnot => {
            let (control, target) = (masks[0], masks[1]);
            for i in 0..amplitudes.len() {
                if i & control != 0 && i & target == 0 {
                    amplitudes.swap(i, i | target);
                }
            }
        }
        StructuralGate::Cz => {
            let both = masks[0] | masks[1];
            for (i, amplitude) in amplitudes.iter_mut().enumerate() {
                if i & both == both {
                    *amplitude = -*amplitude;
                }
            }
        }
        StructuralGate::Swap => {
            let (q1, q2) = (masks[0], masks[1]);
            for i in 0..amplitudes.len() {
                if i & q1 != 0 && i & q2 == 0 {
                    amplitudes.swap(i, i ^ q1 ^ q2);
                }
            }
        }
        StructuralGate::Toffoli => {
            let controls = masks[0] | masks[1];
            let target = masks[2];
            for i in 0..amplitudes.len() {
                if i & controls == controls && i & target == 0 {
                    amplitudes.swap(i, i | target);
                }
            }
        }
    }
}

impl StructuralGate {
    /// Where the basis state `index` is sent, and the sign it picks up.
    #[must_use]
    pub fn basis_image(self, num_qubits: usize, targets: &[usize], index: usize) -> (usize, f64) {
        let bit = |k: usize| index & qubit_mask(num_qubits, targets[k]) != 0;
        match self {
            StructuralGate::Cnot if bit(0) => (index ^ qubit_mask(num_qubits, targets[1]), 1.0),
            StructuralGate::Cz if bit(0) && bit(1) => (index, -1.0),
            StructuralGate::Swap if bit(0) != bit(1) => (
                index ^ qubit_mask(num_qubits, targets[0]) ^ qubit_mask(num_qubits, targets[1]),
                1.0,
            ),
            StructuralGate::Toffoli if bit(0) && bit(1) => {
                (index ^ qubit_mask(num_qubits, targets[2]), 1.0)
            }
            _ => (index, 1.0),
        }
    }
}

/// Expands a single-qubit matrix to the full register by Kronecker products,
/// qubit 0 leftmost.
#[must_use]
pub fn expand_single_qubit_gate(
    matrix: &Matrix2<Complex64>,
    target: usize,
    num_qubits: usize,
) -> DMatrix<Complex64> {
    let local = DMatrix::from_fn(2, 2, |r, c| matrix[(r, c)]);
    let identity = DMatrix::<Complex64>::identity(2, 2);
    (0..num_qubits).fold(DMatrix::<Complex64>::identity(1, 1), |full, qubit| {
        full.kronecker(if qubit == target { &local } else { &identity })
    })
}

impl Instruction {
    /// The dense `2^n × 2^n` operator of this instruction on a register of
    /// `num_qubits` qubits.
    pub fn full_operator(&self, num_qubits: usize) -> Result<DMatrix<Complex64>, Error> {
        self.validate(num_qubits)?;
        let dim = dimension(num_qubits)?;
        let targets = self.targets();
        Ok(match self.gate() {
            Gate::Fixed(gate) => expand_single_qubit_gate(gate.matrix(), targets[0], num_qubits),
            Gate::Rotation(rotation, angle) => {
                expand_single_qubit_gate(&rotation.matrix(*angle), targets[0], num_qubits)
            }
            Gate::Structural(gate) => {
                let mut full = DMatrix::zeros(dim, dim);
                for column in 0..dim {
                    let (row, sign) = gate.basis_image(num_qubits, targets, column);
                    full[(row, column)] = Complex64::new(sign, 0.0);
                }
                full
            }
        })
    }
}
