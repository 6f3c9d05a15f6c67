// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    Error,
    state::{StateVector, dimension, qubit_mask},
};
use nalgebra::Matrix2;
use num_complex::Complex64;

/// A 2×2 reduced density matrix of a single qubit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityMatrix(Matrix2<Complex64>);

impl DensityMatrix {
    #[must_use]
    pub fn matrix(&self) -> &Matrix2<Complex64> {
        &self.0
    }

    #[must_use]
    pub fn trace(&self) -> Complex64 {
        self.0.trace()
    }

    /// Whether `ρ = ρ†` holds element-wise within `tolerance`.
    #[must_use]
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (self.0 - self.0.adjoint()).iter().all(|d| d.norm() <= tolerance)
    }

    /// Entries as `(re, im)` pairs in row-major order.
    #[must_use]
    pub fn to_pairs(&self) -> [[(f64, f64); 2]; 2] {
        let entry = |r, c| {
            let z: Complex64 = self.0[(r, c)];
            (z.re, z.im)
        };
        [[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]]
    }
}

impl From<Matrix2<Complex64>> for DensityMatrix {
    fn from(matrix: Matrix2<Complex64>) -> Self {
        Self(matrix)
    }
}

/// Traces out every qubit except the single one in `keep`.
///
/// `ρ[i][j] = Σ_s ψ[row(i, s)]·conj(ψ[col(j, s)])` where `s` runs over the
/// `2^(n-1)` assignments of the other qubits and is shared by row and column.
/// The full `|ψ⟩⟨ψ|` is never materialized.
pub fn reduce(
    amplitudes: &[Complex64],
    num_qubits: usize,
    keep: &[usize],
) -> Result<DensityMatrix, Error> {
    let &[target] = keep else {
        return Err(Error::UnsupportedReduction(keep.len()));
    };
    let expected = dimension(num_qubits)?;
    if amplitudes.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: amplitudes.len(),
        });
    }
    if target >= num_qubits {
        return Err(Error::QubitOutOfRange {
            index: target,
            num_qubits,
        });
    }

    let mask = qubit_mask(num_qubits, target);
    let mut rho = Matrix2::<Complex64>::zeros();
    for row in 0..amplitudes.len() {
        if row & mask != 0 {
            continue;
        }
        let psi = [amplitudes[row], amplitudes[row | mask]];
        for i in 0..2 {
            for j in 0..2 {
                rho[(i, j)] += psi[i] * psi[j].conj();
            }
        }
    }
    Ok(DensityMatrix(rho))
}

impl StateVector {
    /// The reduced density matrix of `qubit`.
    pub fn reduce(&self, qubit: usize) -> Result<DensityMatrix, Error> {
        reduce(self.amplitudes(), self.num_qubits(), &[qubit])
    }
}
