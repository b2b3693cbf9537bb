// src/quantum/circuit.rs
//! Quantum systems: a fixed number of qubits and an append-only gate list

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{QuantumError, Result};
use super::gate::{GateApplication, StandardGate};
use super::state::{self, BasisState};

/// A quantum system consisting of a sequence of gates over a fixed number of qubits
///
/// Gates are validated as they are appended and are never removed or changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumSystem {
    qubit_count: usize,
    gates: Vec<GateApplication>,
}

impl QuantumSystem {
    /// Create a new system with no gates
    ///
    /// Accepts between 1 and [`MAX_INDEXABLE_QUBITS`](state::MAX_INDEXABLE_QUBITS)
    /// qubits, so every basis state has a `usize` index.
    pub fn new(qubit_count: usize) -> Result<Self> {
        Self::check_qubit_count(qubit_count)?;
        Ok(QuantumSystem {
            qubit_count,
            gates: Vec::new(),
        })
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// The gates in the order they were appended
    pub fn gates(&self) -> &[GateApplication] {
        &self.gates
    }

    /// Get the number of gates in the system
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Append a gate application after checking its qubit indices
    pub fn apply(&mut self, gate: GateApplication) -> Result<&mut Self> {
        self.check_gate(&gate)?;
        trace!(%gate, "appending gate");
        self.gates.push(gate);
        Ok(self)
    }

    /// Add an identity gate
    pub fn identity(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(GateApplication::Single { gate: StandardGate::I, qubit })
    }

    /// Add a Pauli-X gate
    pub fn pauli_x(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(GateApplication::Single { gate: StandardGate::X, qubit })
    }

    /// Add a Pauli-Y gate
    pub fn pauli_y(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(GateApplication::Single { gate: StandardGate::Y, qubit })
    }

    /// Add a Pauli-Z gate
    pub fn pauli_z(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(GateApplication::Single { gate: StandardGate::Z, qubit })
    }

    /// Add a Hadamard gate
    pub fn hadamard(&mut self, qubit: usize) -> Result<&mut Self> {
        self.apply(GateApplication::Single { gate: StandardGate::H, qubit })
    }

    /// Add a CNOT gate
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.apply(GateApplication::Cnot { control, target })
    }

    /// Re-check the whole system
    ///
    /// Systems built through the append methods always pass; deserialized
    /// ones may not.
    pub fn validate(&self) -> Result<()> {
        Self::check_qubit_count(self.qubit_count)?;
        self.gates.iter().try_for_each(|gate| self.check_gate(gate))
    }

    /// All basis states of the system in index order
    pub fn states(&self) -> Result<Vec<BasisState>> {
        (0..self.dimension()?)
            .map(|i| BasisState::from_index(i, self.qubit_count))
            .collect()
    }

    /// Dimension of the state space, `2^n`
    ///
    /// Only fails for deserialized systems too wide to index.
    pub fn dimension(&self) -> Result<usize> {
        state::dimension(self.qubit_count)
    }

    /// Value of `qubit` in `state`
    pub fn bit_in_state(&self, qubit: usize, state: BasisState) -> Result<u8> {
        self.check_qubit(qubit)?;
        state.bit(qubit, self.qubit_count)
    }

    /// True iff `a` and `b` differ at `qubit` and nowhere else
    pub fn states_differ_only_at(&self, qubit: usize, a: BasisState, b: BasisState) -> Result<bool> {
        self.check_qubit(qubit)?;
        state::differs_only_at(qubit, a.index(), b.index(), self.qubit_count)
    }

    fn check_qubit_count(qubit_count: usize) -> Result<()> {
        if qubit_count == 0 {
            return Err(QuantumError::EmptySystem);
        }
        state::dimension(qubit_count).map(|_| ())
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.qubit_count {
            return Err(QuantumError::invalid_qubit(qubit, self.qubit_count));
        }
        Ok(())
    }

    fn check_gate(&self, gate: &GateApplication) -> Result<()> {
        match *gate {
            GateApplication::Single { qubit, .. } => self.check_qubit(qubit),
            GateApplication::Cnot { control, target } => {
                self.check_qubit(control)?;
                self.check_qubit(target)?;
                if control == target {
                    return Err(QuantumError::DuplicateQubit(control));
                }
                Ok(())
            }
        }
    }
}
