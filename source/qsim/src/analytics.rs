// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{gates::FixedGate, reduction::DensityMatrix};

/// Eigenvalues at or below this are treated as numerical noise when computing
/// entropy.
pub const EIGENVALUE_CUTOFF: f64 = 1e-12;

/// Single-qubit observables derived from a reduced density matrix.
///
/// Every field is finite: a NaN produced by a degenerate decomposition is
/// reported as `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QubitProperties {
    /// `(Tr(ρX), Tr(ρY), Tr(ρZ))`.
    pub bloch: [f64; 3],
    /// Probabilities of measuring `0` and `1`.
    pub probabilities: [f64; 2],
    /// `Tr(ρ²)`, in `[0.5, 1]` for a single qubit.
    pub purity: f64,
    /// Von Neumann entropy in bits, in `[0, 1]` for a single qubit.
    pub entropy: f64,
}

impl QubitProperties {
    #[must_use]
    pub fn from_density_matrix(density: &DensityMatrix) -> Self {
        let rho = density.matrix();
        let expectation = |pauli: FixedGate| finite((rho * pauli.matrix()).trace().re);

        Self {
            bloch: [
                expectation(FixedGate::X),
                expectation(FixedGate::Y),
                expectation(FixedGate::Z),
            ],
            probabilities: [finite(rho[(0, 0)].re), finite(rho[(1, 1)].re)],
            purity: finite((rho * rho).trace().re),
            entropy: finite(von_neumann_entropy(density)),
        }
    }
}

/// `−Σ λ·log2(λ)` over the eigenvalues of `ρ` above [`EIGENVALUE_CUTOFF`],
/// clamped at zero.
#[must_use]
pub fn von_neumann_entropy(density: &DensityMatrix) -> f64 {
    density
        .matrix()
        .symmetric_eigenvalues()
        .iter()
        .filter(|&&lambda| lambda > EIGENVALUE_CUTOFF)
        .fold(0.0_f64, |entropy, &lambda| entropy - lambda * lambda.log2())
        .max(0.0)
}

/// Maps NaN to `0.0`; every other value passes through.
#[must_use]
pub fn finite(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
