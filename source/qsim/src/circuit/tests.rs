// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Circuit, SimulatorConfig};
use crate::{Error, Instruction, StateVector, state::MAX_ADDRESSABLE_QUBITS};
use expect_test::expect;
use num_complex::Complex64;

const TOLERANCE: f64 = 1e-9;

fn circuit(num_qubits: usize, init: &str, gates: &[(&str, &[usize])]) -> Circuit {
    Circuit::new(num_qubits, init).with_instructions(gates.iter().map(|(name, targets)| {
        Instruction::decode(name, targets, None).expect("gate should decode")
    }))
}

#[test]
fn empty_circuit_reports_the_initial_state() {
    let result = circuit(2, "01", &[])
        .simulate(&SimulatorConfig::default())
        .expect("simulation should succeed");
    assert_eq!(
        result.state,
        StateVector::from_bits(2, "01").expect("bits should be valid")
    );
    let q0 = &result.qubits[0];
    assert_eq!(q0.index, 0);
    assert_eq!(q0.properties.probabilities, [1.0, 0.0]);
    assert_eq!(q0.properties.purity, 1.0);
    assert!(q0.properties.entropy.abs() < TOLERANCE);
    assert_eq!(result.qubits[1].properties.probabilities, [0.0, 1.0]);
}

#[test]
fn bell_state_entangles_both_qubits() {
    let result = circuit(2, "00", &[("H", &[0]), ("CNOT", &[0, 1])])
        .simulate(&SimulatorConfig::default())
        .expect("simulation should succeed");

    let amplitude = 0.5_f64.sqrt();
    let expected = [amplitude, 0.0, 0.0, amplitude];
    for (actual, expected) in result.state.amplitudes().iter().zip(expected) {
        assert!((actual - Complex64::new(expected, 0.0)).norm() < TOLERANCE);
    }

    assert_eq!(result.qubits.len(), 2);
    for report in &result.qubits {
        let p = &report.properties;
        assert!((p.purity - 0.5).abs() < TOLERANCE);
        assert!((p.entropy - 1.0).abs() < TOLERANCE);
        assert!(p.bloch.iter().all(|x| x.abs() < TOLERANCE));
        let [[rho00, rho01], [rho10, rho11]] = report.density_matrix.to_pairs();
        assert!((rho00.0 - 0.5).abs() < TOLERANCE && (rho11.0 - 0.5).abs() < TOLERANCE);
        assert!(rho01.0.abs() < TOLERANCE && rho10.0.abs() < TOLERANCE);
    }
}

#[test]
fn unknown_gate_aborts_before_simulating() {
    let error = Instruction::decode("Q", &[0], None).expect_err("Q should not decode");
    assert_eq!(error, Error::UnknownGate("Q".to_string()));
}

#[test]
fn failing_gate_aborts_the_whole_run() {
    let circuit = circuit(2, "00", &[("H", &[0]), ("CNOT", &[0, 5]), ("X", &[1])]);
    assert_eq!(
        circuit.simulate(&SimulatorConfig::default()),
        Err(Error::QubitOutOfRange {
            index: 5,
            num_qubits: 2
        })
    );
}

#[test]
fn invalid_initial_state_is_reported() {
    let error = circuit(2, "0a", &[])
        .simulate(&SimulatorConfig::default())
        .expect_err("simulation should fail");
    expect!["invalid initial state: character 'a' at position 1 is not '0' or '1'"]
        .assert_eq(&error.to_string());
}

#[test]
fn register_size_is_bounded_by_config() {
    let config = SimulatorConfig { max_qubits: 3 };
    assert_eq!(
        circuit(4, "0000", &[]).simulate(&config),
        Err(Error::QubitCount {
            requested: 4,
            max: 3
        })
    );
    assert_eq!(
        Circuit::new(0, "").simulate(&config),
        Err(Error::QubitCount {
            requested: 0,
            max: 3
        })
    );
    assert!(circuit(3, "000", &[]).simulate(&config).is_ok());
}

#[test]
fn generous_limit_is_capped_at_the_addressable_register() {
    let config = SimulatorConfig { max_qubits: 100 };
    assert_eq!(
        circuit(64, &"0".repeat(64), &[]).simulate(&config),
        Err(Error::QubitCount {
            requested: 64,
            max: MAX_ADDRESSABLE_QUBITS
        })
    );
}

#[test]
fn ghz_state_reports_every_qubit() {
    let result = circuit(
        3,
        "000",
        &[("H", &[0]), ("CNOT", &[0, 1]), ("CNOT", &[1, 2])],
    )
    .simulate(&SimulatorConfig::default())
    .expect("simulation should succeed");
    let indices = result.qubits.iter().map(|q| q.index).collect::<Vec<_>>();
    assert_eq!(indices, [0, 1, 2]);
    for report in &result.qubits {
        assert!((report.properties.entropy - 1.0).abs() < TOLERANCE);
        let [p0, p1] = report.properties.probabilities;
        assert!((p0 + p1 - 1.0).abs() < TOLERANCE);
    }
}
