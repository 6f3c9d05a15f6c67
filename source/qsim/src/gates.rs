// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::Error;
use nalgebra::Matrix2;
use num_complex::Complex64;
use std::{f64::consts::FRAC_1_SQRT_2, fmt, sync::LazyLock};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Builds a 2×2 complex matrix from rows of `(re, im)` pairs.
fn matrix(rows: [[(f64, f64); 2]; 2]) -> Matrix2<Complex64> {
    let [[a, b], [c, d]] = rows.map(|row| row.map(|(re, im)| Complex64::new(re, im)));
    Matrix2::new(a, b, c, d)
}

static I: LazyLock<Matrix2<Complex64>> = LazyLock::new(Matrix2::<Complex64>::identity);

static X: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    matrix([[(0., 0.), (1., 0.)], [(1., 0.), (0., 0.)]])
});

static Y: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    matrix([[(0., 0.), (0., -1.)], [(0., 1.), (0., 0.)]])
});

static Z: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    matrix([[(1., 0.), (0., 0.)], [(0., 0.), (-1., 0.)]])
});

static H: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    let f = FRAC_1_SQRT_2;
    matrix([[(f, 0.), (f, 0.)], [(f, 0.), (-f, 0.)]])
});

static S: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    matrix([[(1., 0.), (0., 0.)], [(0., 0.), (0., 1.)]])
});

static S_ADJ: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    matrix([[(1., 0.), (0., 0.)], [(0., 0.), (0., -1.)]])
});

static T: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    let f = FRAC_1_SQRT_2;
    matrix([[(1., 0.), (0., 0.)], [(0., 0.), (f, f)]])
});

static T_ADJ: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    let f = FRAC_1_SQRT_2;
    matrix([[(1., 0.), (0., 0.)], [(0., 0.), (f, -f)]])
});

fn rx(angle: f64) -> Matrix2<Complex64> {
    let sin = (angle / 2.0).sin();
    let cos = (angle / 2.0).cos();
    matrix([[(cos, 0.), (0., -sin)], [(0., -sin), (cos, 0.)]])
}

fn ry(angle: f64) -> Matrix2<Complex64> {
    let sin = (angle / 2.0).sin();
    let cos = (angle / 2.0).cos();
    matrix([[(cos, 0.), (-sin, 0.)], [(sin, 0.), (cos, 0.)]])
}

fn rz(angle: f64) -> Matrix2<Complex64> {
    let a = Complex64::from_polar(1.0, -angle / 2.0);
    let b = Complex64::from_polar(1.0, angle / 2.0);
    Matrix2::new(a, ZERO, ZERO, b)
}

fn phase(angle: f64) -> Matrix2<Complex64> {
    Matrix2::new(ONE, ZERO, ZERO, Complex64::from_polar(1.0, angle))
}

/// A single-qubit gate with a constant matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedGate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    SAdj,
    T,
    TAdj,
}

impl FixedGate {
    pub const ALL: [FixedGate; 9] = [
        FixedGate::I,
        FixedGate::X,
        FixedGate::Y,
        FixedGate::Z,
        FixedGate::H,
        FixedGate::S,
        FixedGate::SAdj,
        FixedGate::T,
        FixedGate::TAdj,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FixedGate::I => "I",
            FixedGate::X => "X",
            FixedGate::Y => "Y",
            FixedGate::Z => "Z",
            FixedGate::H => "H",
            FixedGate::S => "S",
            FixedGate::SAdj => "Sd",
            FixedGate::T => "T",
            FixedGate::TAdj => "Td",
        }
    }

    /// The catalog matrix. Shared across every simulation; never mutated.
    #[must_use]
    pub fn matrix(self) -> &'static Matrix2<Complex64> {
        match self {
            FixedGate::I => &I,
            FixedGate::X => &X,
            FixedGate::Y => &Y,
            FixedGate::Z => &Z,
            FixedGate::H => &H,
            FixedGate::S => &S,
            FixedGate::SAdj => &S_ADJ,
            FixedGate::T => &T,
            FixedGate::TAdj => &T_ADJ,
        }
    }
}

/// A single-qubit gate generated from an angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Rx,
    Ry,
    Rz,
    Phase,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Rx, Rotation::Ry, Rotation::Rz, Rotation::Phase];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rotation::Rx => "Rx",
            Rotation::Ry => "Ry",
            Rotation::Rz => "Rz",
            Rotation::Phase => "Phase",
        }
    }

    /// Half-angle convention: `Rx(θ) = cos(θ/2)·I − i·sin(θ/2)·X`, and likewise
    /// for `Ry` and `Rz`. `Phase(θ)` is `diag(1, e^{iθ})`.
    #[must_use]
    pub fn matrix(self, angle: f64) -> Matrix2<Complex64> {
        match self {
            Rotation::Rx => rx(angle),
            Rotation::Ry => ry(angle),
            Rotation::Rz => rz(angle),
            Rotation::Phase => phase(angle),
        }
    }
}

/// A multi-qubit gate that acts as a permutation or a sign flip on basis states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructuralGate {
    /// Targets are `[control, target]`.
    Cnot,
    /// Targets are `[control, target]`.
    Cz,
    /// Targets are `[q1, q2]`.
    Swap,
    /// Targets are `[control1, control2, target]`.
    Toffoli,
}

impl StructuralGate {
    pub const ALL: [StructuralGate; 4] = [
        StructuralGate::Cnot,
        StructuralGate::Cz,
        StructuralGate::Swap,
        StructuralGate::Toffoli,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StructuralGate::Cnot => "CNOT",
            StructuralGate::Cz => "CZ",
            StructuralGate::Swap => "SWAP",
            StructuralGate::Toffoli => "TOFFOLI",
        }
    }

    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            StructuralGate::Cnot | StructuralGate::Cz | StructuralGate::Swap => 2,
            StructuralGate::Toffoli => 3,
        }
    }
}

/// A gate resolved from its name once, at decode time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    Fixed(FixedGate),
    Rotation(Rotation, f64),
    Structural(StructuralGate),
}

/// The gate kind named by a catalog entry, before any angle is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    Fixed(FixedGate),
    Rotation(Rotation),
    Structural(StructuralGate),
}

fn entry(name: &str) -> Option<Entry> {
    FixedGate::ALL
        .into_iter()
        .find(|g| g.name() == name)
        .map(Entry::Fixed)
        .or_else(|| {
            Rotation::ALL
                .into_iter()
                .find(|r| r.name() == name)
                .map(Entry::Rotation)
        })
        .or_else(|| {
            StructuralGate::ALL
                .into_iter()
                .find(|g| g.name() == name)
                .map(Entry::Structural)
        })
}

impl Gate {
    /// Resolves a gate by name. Parametric gates require `angle` (radians);
    /// an angle given to any other gate is ignored.
    pub fn resolve(name: &str, angle: Option<f64>) -> Result<Self, Error> {
        match entry(name) {
            Some(Entry::Fixed(gate)) => Ok(Gate::Fixed(gate)),
            Some(Entry::Rotation(rotation)) => {
                let angle = angle.ok_or_else(|| Error::MissingAngle(name.to_string()))?;
                let gate = Gate::Rotation(rotation, angle);
                gate.check_angle()?;
                Ok(gate)
            }
            Some(Entry::Structural(gate)) => Ok(Gate::Structural(gate)),
            None => Err(Error::UnknownGate(name.to_string())),
        }
    }

    /// Rejects a rotation bound to a NaN or infinite angle.
    pub fn check_angle(&self) -> Result<(), Error> {
        match self {
            Gate::Rotation(rotation, angle) if !angle.is_finite() => Err(Error::InvalidAngle {
                gate: rotation.name().to_string(),
                angle: *angle,
            }),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Fixed(gate) => gate.name(),
            Gate::Rotation(rotation, _) => rotation.name(),
            Gate::Structural(gate) => gate.name(),
        }
    }

    /// Number of target qubits the gate acts on.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Gate::Fixed(_) | Gate::Rotation(..) => 1,
            Gate::Structural(gate) => gate.arity(),
        }
    }

    /// The local 2×2 matrix of a single-qubit gate, `None` for structural gates.
    #[must_use]
    pub fn matrix(&self) -> Option<Matrix2<Complex64>> {
        match self {
            Gate::Fixed(gate) => Some(*gate.matrix()),
            Gate::Rotation(rotation, angle) => Some(rotation.matrix(*angle)),
            Gate::Structural(_) => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rotation(rotation, angle) => write!(f, "{}({angle})", rotation.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Looks up the matrix of a constant single-qubit gate by name.
pub fn lookup(name: &str) -> Result<&'static Matrix2<Complex64>, Error> {
    match entry(name) {
        Some(Entry::Fixed(gate)) => Ok(gate.matrix()),
        _ => Err(Error::UnknownGate(name.to_string())),
    }
}

/// Looks up the matrix of any single-qubit gate by name, binding `angle`
/// (radians) for parametric gates.
pub fn lookup_with_angle(name: &str, angle: Option<f64>) -> Result<Matrix2<Complex64>, Error> {
    Gate::resolve(name, angle)?
        .matrix()
        .ok_or_else(|| Error::UnknownGate(name.to_string()))
}

/// Names of every gate in the catalog.
pub fn names() -> impl Iterator<Item = &'static str> {
    FixedGate::ALL
        .into_iter()
        .map(FixedGate::name)
        .chain(Rotation::ALL.into_iter().map(Rotation::name))
        .chain(StructuralGate::ALL.into_iter().map(StructuralGate::name))
}

/// A decoded gate invocation: a resolved gate and its ordered target qubits.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    gate: Gate,
    targets: Vec<usize>,
}

impl Instruction {
    /// Creates an instruction, checking that exactly [`Gate::arity`] targets are given.
    /// Non-finite rotation angles are rejected.
    pub fn new(gate: Gate, targets: Vec<usize>) -> Result<Self, Error> {
        gate.check_angle()?;
        if targets.len() != gate.arity() {
            return Err(Error::ArityMismatch {
                gate: gate.name().to_string(),
                expected: gate.arity(),
                found: targets.len(),
            });
        }
        Ok(Self { gate, targets })
    }

    /// Decodes a `(name, targets, angle)` invocation handed over by the caller.
    pub fn decode(name: &str, targets: &[usize], angle: Option<f64>) -> Result<Self, Error> {
        Self::new(Gate::resolve(name, angle)?, targets.to_vec())
    }

    #[must_use]
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    #[must_use]
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Checks the targets against a register of `num_qubits` qubits.
    pub(crate) fn validate(&self, num_qubits: usize) -> Result<(), Error> {
        for (i, &index) in self.targets.iter().enumerate() {
            if index >= num_qubits {
                return Err(Error::QubitOutOfRange { index, num_qubits });
            }
            if self.targets[..i].contains(&index) {
                return Err(Error::DuplicateTarget {
                    gate: self.gate.name().to_string(),
                    index,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.gate, self.targets)
    }
}
