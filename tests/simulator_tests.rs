use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qsim::quantum::gate::{GateApplication, StandardGate};
use qsim::quantum::circuit::QuantumSystem;
use qsim::simulators::{simulate_many, LinearAlgebraBackend, Outcome, SimulatorConfig};
use qsim::QuantumError;

/// Helper function for comparing complex numbers with tolerance
fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

/// Helper function for comparing f64 with tolerance
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

fn assert_distribution(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "expected {:?}, got {:?}", want, got);
    for (i, (g, w)) in got.iter().zip(want).enumerate() {
        assert!(
            approx_eq(*g, *w, 1e-4),
            "probability {}: expected {}, got {} (expected {:?}, got {:?})",
            i, w, g, want, got
        );
    }
}

fn simulate(system: &QuantumSystem) -> Vec<f64> {
    LinearAlgebraBackend::new(system).simulate().unwrap()
}

#[test]
fn test_empty_systems_stay_in_zero_state() {
    for n in 1..=5 {
        let system = QuantumSystem::new(n).unwrap();
        let probs = simulate(&system);

        assert_eq!(probs.len(), 1 << n);
        assert_eq!(probs[0], 1.0);
        assert!(probs[1..].iter().all(|&p| p == 0.0));
    }
}

#[test]
fn test_one_qubit_x() {
    let mut system = QuantumSystem::new(1).unwrap();
    system.pauli_x(0).unwrap();
    assert_distribution(&simulate(&system), &[0.0, 1.0]);
}

#[test]
fn test_two_qubits_x_on_second() {
    // qubit 0 is the most significant bit of the index
    let mut system = QuantumSystem::new(2).unwrap();
    system.pauli_x(1).unwrap();
    assert_distribution(&simulate(&system), &[0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_one_qubit_h() {
    let mut system = QuantumSystem::new(1).unwrap();
    system.hadamard(0).unwrap();
    assert_distribution(&simulate(&system), &[0.5, 0.5]);
}

#[test]
fn test_one_qubit_x_then_h() {
    let mut system = QuantumSystem::new(1).unwrap();
    system.pauli_x(0).unwrap().hadamard(0).unwrap();
    assert_distribution(&simulate(&system), &[0.5, 0.5]);
}

#[test]
fn test_two_qubits_x_first_h_second() {
    let mut system = QuantumSystem::new(2).unwrap();
    system.pauli_x(0).unwrap().hadamard(1).unwrap();
    assert_distribution(&simulate(&system), &[0.0, 0.0, 0.5, 0.5]);
}

#[test]
fn test_bell_state() {
    let mut system = QuantumSystem::new(2).unwrap();
    system.hadamard(0).unwrap().cnot(0, 1).unwrap();

    let backend = LinearAlgebraBackend::new(&system);
    assert_distribution(&backend.simulate().unwrap(), &[0.5, 0.0, 0.0, 0.5]);

    let amplitudes = backend.amplitudes().unwrap();
    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    assert!(complex_approx_eq(amplitudes.get(0, 0).unwrap(), Complex64::new(sqrt2_inv, 0.0), 1e-10));
    assert!(complex_approx_eq(amplitudes.get(3, 0).unwrap(), Complex64::new(sqrt2_inv, 0.0), 1e-10));
}

#[test]
fn test_bell_state_on_non_adjacent_qubits() {
    let mut system = QuantumSystem::new(3).unwrap();
    system.hadamard(0).unwrap().cnot(0, 2).unwrap();
    assert_distribution(
        &simulate(&system),
        &[0.5, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0],
    );
}

#[test]
fn test_cnot_with_control_below_target() {
    // |001⟩ with control on qubit 2 flips qubit 0: |101⟩
    let mut system = QuantumSystem::new(3).unwrap();
    system.pauli_x(2).unwrap().cnot(2, 0).unwrap();
    let probs = simulate(&system);
    assert!(approx_eq(probs[5], 1.0, 1e-10));
}

#[test]
fn test_cnot_with_inactive_control() {
    let mut system = QuantumSystem::new(2).unwrap();
    system.cnot(0, 1).unwrap();
    assert_distribution(&simulate(&system), &[1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_gate_order_matters() {
    // CNOT before H leaves the target untouched
    let mut system = QuantumSystem::new(2).unwrap();
    system.cnot(0, 1).unwrap().hadamard(0).unwrap();
    assert_distribution(&simulate(&system), &[0.5, 0.0, 0.5, 0.0]);
}

#[test]
fn test_z_and_y_phases() {
    // H Z H = X
    let mut system = QuantumSystem::new(1).unwrap();
    system.hadamard(0).unwrap().pauli_z(0).unwrap().hadamard(0).unwrap();
    assert_distribution(&simulate(&system), &[0.0, 1.0]);

    // Y|0⟩ = i|1⟩
    let mut system = QuantumSystem::new(1).unwrap();
    system.pauli_y(0).unwrap();
    let amplitudes = LinearAlgebraBackend::new(&system).amplitudes().unwrap();
    assert!(complex_approx_eq(amplitudes.get(1, 0).unwrap(), Complex64::new(0.0, 1.0), 1e-12));

    // Z alone does not change probabilities
    let mut system = QuantumSystem::new(1).unwrap();
    system.hadamard(0).unwrap().pauli_z(0).unwrap();
    assert_distribution(&simulate(&system), &[0.5, 0.5]);
}

#[test]
fn test_identity_gate_is_noop() {
    let mut system = QuantumSystem::new(2).unwrap();
    system.pauli_x(0).unwrap().identity(0).unwrap().identity(1).unwrap();
    assert_distribution(&simulate(&system), &[0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_deutsch_balanced_oracle() {
    let mut system = QuantumSystem::new(2).unwrap();
    system
        .pauli_x(1).unwrap()
        .hadamard(0).unwrap()
        .hadamard(1).unwrap()
        .cnot(0, 1).unwrap()
        .hadamard(0).unwrap();

    let probs = LinearAlgebraBackend::new(&system).qubit_probability(0).unwrap();
    assert!(approx_eq(probs[&Outcome::Zero], 0.0, 1e-10));
    assert!(approx_eq(probs[&Outcome::One], 1.0, 1e-10));
}

#[test]
fn test_ghz_state() {
    let mut system = QuantumSystem::new(4).unwrap();
    system.hadamard(0).unwrap();
    for target in 1..4 {
        system.cnot(0, target).unwrap();
    }
    let probs = simulate(&system);
    assert!(approx_eq(probs[0], 0.5, 1e-10));
    assert!(approx_eq(probs[15], 0.5, 1e-10));
}

#[test]
fn test_random_circuits_are_normalized() {
    let mut rng = StdRng::seed_from_u64(7);
    let singles = [StandardGate::I, StandardGate::X, StandardGate::Y, StandardGate::Z, StandardGate::H];

    for _ in 0..20 {
        let n = rng.gen_range(1..=4);
        let mut system = QuantumSystem::new(n).unwrap();
        for _ in 0..rng.gen_range(0..12) {
            let use_cnot = n > 1 && rng.gen_bool(0.3);
            if use_cnot {
                let control = rng.gen_range(0..n);
                let target = (control + rng.gen_range(1..n)) % n;
                system.cnot(control, target).unwrap();
            } else {
                let gate = singles[rng.gen_range(0..singles.len())];
                system.apply(GateApplication::Single { gate, qubit: rng.gen_range(0..n) }).unwrap();
            }
        }

        let probs = simulate(&system);
        assert_eq!(probs.len(), 1 << n);
        assert!(probs.iter().all(|&p| p >= 0.0));
        let total: f64 = probs.iter().sum();
        assert!(approx_eq(total, 1.0, 1e-4), "sum was {} for {:?}", total, system.gates());
    }
}

#[test]
fn test_simulation_is_repeatable() {
    let mut system = QuantumSystem::new(2).unwrap();
    system.hadamard(0).unwrap();
    let backend = LinearAlgebraBackend::new(&system);
    assert_eq!(backend.simulate().unwrap(), backend.simulate().unwrap());
}

#[test]
fn test_simulate_many() {
    let mut bell = QuantumSystem::new(2).unwrap();
    bell.hadamard(0).unwrap().cnot(0, 1).unwrap();
    let mut flip = QuantumSystem::new(1).unwrap();
    flip.pauli_x(0).unwrap();
    let big = QuantumSystem::new(3).unwrap();

    let config = SimulatorConfig::new().with_max_qubits(2);
    let results = simulate_many(&[bell, flip, big], &config);

    assert_eq!(results.len(), 3);
    assert_distribution(results[0].as_ref().unwrap(), &[0.5, 0.0, 0.0, 0.5]);
    assert_distribution(results[1].as_ref().unwrap(), &[0.0, 1.0]);
    assert_eq!(
        results[2],
        Err(QuantumError::QubitLimitExceeded { requested: 3, limit: 2 })
    );
}
