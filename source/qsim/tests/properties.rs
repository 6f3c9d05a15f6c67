// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use proptest::prelude::*;
use qsim::{
    Circuit, FixedGate, Gate, Instruction, Rotation, SimulatorConfig, StateVector, StructuralGate,
};

const MAX_QUBITS: usize = 4;

fn gate(num_qubits: usize) -> impl Strategy<Value = Gate> {
    let mut gates = FixedGate::ALL.map(Gate::Fixed).to_vec();
    gates.extend(
        StructuralGate::ALL
            .into_iter()
            .filter(|g| g.arity() <= num_qubits)
            .map(Gate::Structural),
    );
    prop_oneof![
        proptest::sample::select(gates),
        (
            proptest::sample::select(Rotation::ALL.to_vec()),
            -std::f64::consts::TAU..std::f64::consts::TAU
        )
            .prop_map(|(rotation, angle)| Gate::Rotation(rotation, angle)),
    ]
}

fn instruction(num_qubits: usize) -> impl Strategy<Value = Instruction> {
    (
        gate(num_qubits),
        Just((0..num_qubits).collect::<Vec<_>>()).prop_shuffle(),
    )
        .prop_map(|(gate, order)| {
            Instruction::new(gate, order[..gate.arity()].to_vec())
                .expect("arity should match by construction")
        })
}

fn bits(num_qubits: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('0'), Just('1')], num_qubits)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1..=MAX_QUBITS).prop_flat_map(|num_qubits| {
        (
            bits(num_qubits),
            proptest::collection::vec(instruction(num_qubits), 0..24),
        )
            .prop_map(move |(init, instructions)| {
                Circuit::new(num_qubits, init).with_instructions(instructions)
            })
    })
}

proptest! {
    #[test]
    fn every_gate_preserves_normalization(circuit in arb_circuit()) {
        let mut state = circuit
            .initial_state(&SimulatorConfig::default())
            .expect("generated circuit should be valid");
        for instruction in circuit.instructions() {
            state.apply(instruction).expect("generated instruction should apply");
            prop_assert!((state.norm_sqr() - 1.0).abs() < 1e-9, "after {}", instruction);
        }
    }

    #[test]
    fn reduced_states_stay_physical(circuit in arb_circuit()) {
        let result = circuit
            .simulate(&SimulatorConfig::default())
            .expect("generated circuit should simulate");
        for report in &result.qubits {
            let p = &report.properties;
            prop_assert!(report.density_matrix.is_hermitian(1e-9));
            prop_assert!((report.density_matrix.trace().re - 1.0).abs() < 1e-9);
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&p.entropy));
            prop_assert!((0.5 - 1e-9..=1.0 + 1e-9).contains(&p.purity));
            prop_assert!((p.probabilities[0] + p.probabilities[1] - 1.0).abs() < 1e-9);
            let length = p.bloch.iter().map(|x| x * x).sum::<f64>().sqrt();
            prop_assert!(length <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn structural_gates_only_move_or_negate_amplitudes(
        circuit in arb_circuit(),
        shuffle in Just((0..MAX_QUBITS).collect::<Vec<_>>()).prop_shuffle(),
        which in 0..StructuralGate::ALL.len(),
    ) {
        let gate = StructuralGate::ALL[which];
        let num_qubits = circuit.num_qubits();
        let targets = shuffle
            .into_iter()
            .filter(|&q| q < num_qubits)
            .take(gate.arity())
            .collect::<Vec<_>>();
        prop_assume!(targets.len() == gate.arity());

        let before = circuit
            .simulate(&SimulatorConfig::default())
            .expect("generated circuit should simulate")
            .state;
        let instruction = Instruction::new(Gate::Structural(gate), targets.clone())
            .expect("arity should match");
        let mut after = before.clone();
        after.apply(&instruction).expect("structural gate should apply");

        for (index, amplitude) in before.amplitudes().iter().enumerate() {
            let (image, sign) = gate.basis_image(num_qubits, &targets, index);
            prop_assert_eq!(after.amplitudes()[image], amplitude * sign);
        }
    }

    #[test]
    fn cnot_twice_is_identity(circuit in arb_circuit()) {
        prop_assume!(circuit.num_qubits() >= 2);
        let before: StateVector = circuit
            .simulate(&SimulatorConfig::default())
            .expect("generated circuit should simulate")
            .state;
        let cnot = Instruction::decode("CNOT", &[0, 1], None).expect("CNOT should decode");
        let mut after = before.clone();
        after.apply(&cnot).expect("CNOT should apply");
        after.apply(&cnot).expect("CNOT should apply");
        prop_assert_eq!(after, before);
    }
}
