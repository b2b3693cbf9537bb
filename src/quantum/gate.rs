// src/quantum/gate.rs
//! Quantum gates
//!
//! The gate set is closed: the single-qubit gates I, X, Y, Z and H, and the
//! two-qubit CNOT. A [`GateApplication`] records one of them together with the
//! qubits it acts on.

use std::fmt;
use ndarray::array;
use serde::{Deserialize, Serialize};

use super::complex::{Complex64, FRAC_1_SQRT_2, I, ONE, ZERO};
use super::matrix::Matrix;

/// Single-qubit gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate
    I,

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    /// Hadamard gate
    H,
}

impl StandardGate {
    /// The 2×2 unitary of this gate
    pub fn matrix(&self) -> Matrix {
        let data = match self {
            StandardGate::I => array![
                [ONE, ZERO],
                [ZERO, ONE]
            ],
            StandardGate::X => array![
                [ZERO, ONE],
                [ONE, ZERO]
            ],
            StandardGate::Y => array![
                [ZERO, -I],
                [I, ZERO]
            ],
            StandardGate::Z => array![
                [ONE, ZERO],
                [ZERO, Complex64::new(-1.0, 0.0)]
            ],
            StandardGate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [h, h],
                    [h, -h]
                ]
            }
        };
        Matrix::from_array(data)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::H => "H",
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One gate applied to specific qubits of a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GateApplication {
    /// A single-qubit gate on `qubit`
    Single { gate: StandardGate, qubit: usize },

    /// Flip `target` when `control` is 1
    Cnot { control: usize, target: usize },
}

impl GateApplication {
    /// The qubits this application touches, control first for CNOT
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            GateApplication::Single { qubit, .. } => vec![qubit],
            GateApplication::Cnot { control, target } => vec![control, target],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GateApplication::Single { gate, .. } => gate.name(),
            GateApplication::Cnot { .. } => "CNOT",
        }
    }
}

impl fmt::Display for GateApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateApplication::Single { gate, qubit } => write!(f, "{}({})", gate, qubit),
            GateApplication::Cnot { control, target } => write!(f, "CNOT({}, {})", control, target),
        }
    }
}
