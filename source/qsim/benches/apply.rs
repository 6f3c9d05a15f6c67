// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use criterion::{Criterion, criterion_group, criterion_main};
use qsim::{Circuit, Instruction, SimulatorConfig, StateVector};
use std::hint::black_box;

const NUM_QUBITS: usize = 14;

fn decode(name: &str, targets: &[usize], angle: Option<f64>) -> Instruction {
    Instruction::decode(name, targets, angle).expect("benchmark gate should decode")
}

fn layer(num_qubits: usize) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    for q in 0..num_qubits {
        instructions.push(decode("H", &[q], None));
        instructions.push(decode("Rz", &[q], Some(0.3)));
    }
    for q in 1..num_qubits {
        instructions.push(decode("CNOT", &[q - 1, q], None));
    }
    instructions.push(decode("TOFFOLI", &[0, 1, 2], None));
    instructions.push(decode("SWAP", &[0, num_qubits - 1], None));
    instructions
}

fn apply_layer(c: &mut Criterion) {
    let instructions = layer(NUM_QUBITS);
    c.bench_function("apply one layer on 14 qubits", |b| {
        b.iter(|| {
            let mut state = StateVector::zero(NUM_QUBITS);
            for instruction in &instructions {
                state
                    .apply(black_box(instruction))
                    .expect("instruction should apply");
            }
            black_box(state)
        });
    });
}

fn simulate_and_reduce(c: &mut Criterion) {
    let circuit =
        Circuit::new(NUM_QUBITS, "0".repeat(NUM_QUBITS)).with_instructions(layer(NUM_QUBITS));
    let config = SimulatorConfig::default();
    c.bench_function("simulate and reduce 14 qubits", |b| {
        b.iter(|| black_box(circuit.simulate(&config).expect("simulation should succeed")));
    });
}

criterion_group!(benches, apply_layer, simulate_and_reduce);
criterion_main!(benches);
