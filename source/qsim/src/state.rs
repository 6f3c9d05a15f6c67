// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, error::InitStateFault};
use num_complex::Complex64;

/// Bit mask selecting `qubit` in a basis index of a `num_qubits` register.
///
/// Qubit 0 is the most-significant bit: `|b0 b1 … b(n-1)⟩` has index
/// `Σ bi·2^(n-1-i)`.
#[must_use]
pub fn qubit_mask(num_qubits: usize, qubit: usize) -> usize {
    1 << (num_qubits - 1 - qubit)
}

/// Largest register whose amplitude vector fits in a single allocation.
pub const MAX_ADDRESSABLE_QUBITS: usize =
    ((usize::MAX >> 1) / size_of::<Complex64>()).ilog2() as usize;

/// Number of amplitudes of a `num_qubits` register, `2^num_qubits`.
pub fn dimension(num_qubits: usize) -> Result<usize, Error> {
    if num_qubits > MAX_ADDRESSABLE_QUBITS {
        return Err(Error::QubitCount {
            requested: num_qubits,
            max: MAX_ADDRESSABLE_QUBITS,
        });
    }
    Ok(1 << num_qubits)
}

/// A pure state of `num_qubits` qubits as a dense vector of `2^num_qubits`
/// complex amplitudes.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// The basis state `|0…0⟩`.
    #[must_use]
    pub fn zero(num_qubits: usize) -> Self {
        Self::basis(num_qubits, 0)
    }

    /// The computational basis state with the given linear index.
    ///
    /// Panics if `num_qubits` exceeds [`MAX_ADDRESSABLE_QUBITS`] or `index` is
    /// outside the register; [`StateVector::from_bits`] checks both.
    #[must_use]
    pub fn basis(num_qubits: usize, index: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Builds the product state selected by a bit string, one character per
    /// qubit with qubit 0 first. `"10"` is `|1⟩⊗|0⟩`.
    pub fn from_bits(num_qubits: usize, bits: &str) -> Result<Self, Error> {
        dimension(num_qubits)?;
        let found = bits.chars().count();
        if found != num_qubits {
            return Err(Error::InvalidInitState(InitStateFault::Length {
                expected: num_qubits,
                found,
            }));
        }
        let mut index = 0;
        for (position, c) in bits.chars().enumerate() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                found => {
                    return Err(Error::InvalidInitState(InitStateFault::Character {
                        position,
                        found,
                    }));
                }
            };
            index = (index << 1) | bit;
        }
        Ok(Self::basis(num_qubits, index))
    }

    /// Wraps existing amplitudes. The caller is responsible for normalization.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self, Error> {
        let expected = dimension(num_qubits)?;
        if amplitudes.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// `Σ |amplitude|²`; one for every state reachable from a basis state.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Probability of observing the basis state with the given linear index.
    #[must_use]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }
}
