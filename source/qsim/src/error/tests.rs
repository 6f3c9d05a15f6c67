// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{Error, InitStateFault};
use expect_test::expect;
use miette::Diagnostic;

#[test]
fn messages_name_the_offending_gate_and_index() {
    let errors = [
        Error::UnknownGate("Q".to_string()),
        Error::ArityMismatch {
            gate: "CNOT".to_string(),
            expected: 2,
            found: 1,
        },
        Error::DimensionMismatch {
            expected: 8,
            found: 6,
        },
        Error::UnsupportedReduction(2),
        Error::InvalidInitState(InitStateFault::Character {
            position: 1,
            found: '2',
        }),
        Error::QubitOutOfRange {
            index: 3,
            num_qubits: 2,
        },
        Error::DuplicateTarget {
            gate: "SWAP".to_string(),
            index: 1,
        },
        Error::MissingAngle("Rx".to_string()),
        Error::InvalidAngle {
            gate: "Rz".to_string(),
            angle: f64::NAN,
        },
        Error::QubitCount {
            requested: 40,
            max: 16,
        },
    ];
    let rendered = errors
        .iter()
        .map(|e| format!("{}: {e}", e.kind()))
        .collect::<Vec<_>>()
        .join("\n");

    expect![[r#"
        UnknownGate: unknown gate `Q`
        ArityMismatch: gate `CNOT` expects 2 target qubit(s) but 1 were given
        DimensionMismatch: state vector has 6 amplitudes but 8 were expected
        UnsupportedReduction: reduction must retain exactly one qubit, 2 were requested
        InvalidInitState: invalid initial state: character '2' at position 1 is not '0' or '1'
        QubitOutOfRange: qubit index 3 is out of range for a 2-qubit state
        DuplicateTarget: gate `SWAP` addresses qubit 1 more than once
        MissingAngle: gate `Rx` requires a rotation angle
        InvalidAngle: gate `Rz` was given the non-finite angle NaN
        QubitCount: cannot simulate 40 qubit(s), the supported range is 1..=16"#]]
    .assert_eq(&rendered);
}

#[test]
fn diagnostic_code_matches_kind() {
    let error = Error::UnknownGate("Q".to_string());
    let code = error.code().expect("diagnostic should have a code").to_string();
    assert_eq!(code, format!("Qsim.{}", error.kind()));
}
