//! Linear-algebra state-vector backend
//!
//! Every gate is lifted to a dense `2^n × 2^n` operator and left-multiplied
//! onto the state column in append order. Nothing is cached between calls:
//! each simulation is a pure function of the borrowed system.
use std::collections::HashMap;
use std::fmt;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::error::{QuantumError, Result};
use crate::quantum::circuit::QuantumSystem;
use crate::quantum::complex::{self, ONE, ZERO};
use crate::quantum::gate::{GateApplication, StandardGate};
use crate::quantum::matrix::Matrix;
use crate::quantum::state::{self, BasisState};
use super::config::SimulatorConfig;

/// A measurement outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Measurement yielded 0
    Zero,
    /// Measurement yielded 1
    One,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Zero => write!(f, "0"),
            Outcome::One => write!(f, "1"),
        }
    }
}

/// The single-qubit zero state `[1, 0]ᵗ`
pub fn zero_qubit() -> Matrix {
    Matrix::column(vec![ONE, ZERO])
}

/// The n-qubit zero state `|0…0⟩` as a `2^n × 1` column
pub fn zero_state(qubit_count: usize) -> Matrix {
    (0..qubit_count).fold(Matrix::scalar(ONE), |state, _| state.tensor(&zero_qubit()))
}

/// Simulates a borrowed [`QuantumSystem`] with dense matrices
#[derive(Debug, Clone, Copy)]
pub struct LinearAlgebraBackend<'a> {
    system: &'a QuantumSystem,
    config: SimulatorConfig,
}

impl<'a> LinearAlgebraBackend<'a> {
    /// Create a backend with the default configuration
    pub fn new(system: &'a QuantumSystem) -> Self {
        Self::with_config(system, SimulatorConfig::default())
    }

    pub fn with_config(system: &'a QuantumSystem, config: SimulatorConfig) -> Self {
        LinearAlgebraBackend { system, config }
    }

    pub fn system(&self) -> &QuantumSystem {
        self.system
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Probability of every basis state, indexed with qubit 0 as the most
    /// significant bit
    pub fn simulate(&self) -> Result<Vec<f64>> {
        let state = self.amplitudes()?;
        let probabilities: Vec<f64> = state
            .as_array()
            .column(0)
            .iter()
            .map(|amplitude| complex::modulus(*amplitude).powi(2))
            .collect();

        let total: f64 = probabilities.iter().sum();
        if (total - 1.0).abs() > self.config.normalization_tolerance {
            warn!(total, "probability distribution is not normalized");
        }
        debug!(states = probabilities.len(), "simulation finished");

        Ok(probabilities)
    }

    /// Final state column after applying every gate in order
    pub fn amplitudes(&self) -> Result<Matrix> {
        self.check_system()?;

        let n = self.system.qubit_count();
        debug!(qubits = n, gates = self.system.gate_count(), "starting simulation");

        let mut state = zero_state(n);
        for (step, gate) in self.system.gates().iter().enumerate() {
            let operator = self.operator(gate)?;
            state = operator.multiply(&state)?;
            trace!(step, %gate, "applied gate");
        }

        Ok(state)
    }

    /// Exact marginal distribution of one qubit in the final state
    pub fn qubit_probability(&self, qubit: usize) -> Result<HashMap<Outcome, f64>> {
        let n = self.system.qubit_count();
        if qubit >= n {
            return Err(QuantumError::invalid_qubit(qubit, n));
        }

        let probabilities = self.simulate()?;
        let mut prob_zero = 0.0;
        let mut prob_one = 0.0;
        for (i, p) in probabilities.iter().enumerate() {
            if state::bit_at(i, qubit, n)? == 0 {
                prob_zero += p;
            } else {
                prob_one += p;
            }
        }

        let mut outcomes = HashMap::new();
        outcomes.insert(Outcome::Zero, prob_zero);
        outcomes.insert(Outcome::One, prob_one);
        Ok(outcomes)
    }

    /// Full-system operator for one gate application
    pub fn operator(&self, gate: &GateApplication) -> Result<Matrix> {
        match *gate {
            GateApplication::Single { gate, qubit } => self.single_qubit_operator(gate, qubit),
            GateApplication::Cnot { control, target } => self.cnot_operator(control, target),
        }
    }

    /// Lift a 2×2 gate on `target` to the whole system
    ///
    /// This is `⊗ᵢ (G if i == target else I)` over all qubits, qubit 0 leftmost.
    pub fn single_qubit_operator(&self, gate: StandardGate, target: usize) -> Result<Matrix> {
        let n = self.system.qubit_count();
        if target >= n {
            return Err(QuantumError::invalid_qubit(target, n));
        }

        let gate_matrix = gate.matrix();
        let identity = Matrix::identity(2);
        let operator = (0..n).fold(Matrix::scalar(ONE), |m, i| {
            if i == target {
                m.tensor(&gate_matrix)
            } else {
                m.tensor(&identity)
            }
        });

        Ok(operator)
    }

    /// Build CNOT(control, target) entry by entry as a permutation matrix
    ///
    /// Control and target may be any two distinct qubits, so the operator is
    /// not a local tensor product and is built over basis-state pairs instead.
    pub fn cnot_operator(&self, control: usize, target: usize) -> Result<Matrix> {
        let n = self.system.qubit_count();
        for qubit in [control, target] {
            if qubit >= n {
                return Err(QuantumError::invalid_qubit(qubit, n));
            }
        }
        if control == target {
            return Err(QuantumError::DuplicateQubit(control));
        }

        let dim = self.system.dimension()?;
        let mut operator = Matrix::new(dim, dim);
        for i in 0..dim {
            let row = BasisState::from_index(i, n)?;
            for j in 0..dim {
                let column = BasisState::from_index(j, n)?;
                let control_j = column.bit(control, n)?;

                let pass_through = i == j && control_j == 0;
                let flipped = control_j == 1
                    && row.bit(control, n)? == 1
                    && row.bit(target, n)? != column.bit(target, n)?
                    && state::differs_only_at(target, i, j, n)?;

                if pass_through || flipped {
                    operator.set(i, j, ONE);
                }
            }
        }

        Ok(operator)
    }

    fn check_system(&self) -> Result<()> {
        let n = self.system.qubit_count();
        if n > self.config.max_qubits {
            return Err(QuantumError::QubitLimitExceeded {
                requested: n,
                limit: self.config.max_qubits,
            });
        }
        self.system.validate()
    }
}

/// Simulate independent systems in parallel
///
/// Results come back in the order of `systems`; one failing system does not
/// affect the others.
pub fn simulate_many(systems: &[QuantumSystem], config: &SimulatorConfig) -> Vec<Result<Vec<f64>>> {
    systems
        .par_iter()
        .map(|system| LinearAlgebraBackend::with_config(system, *config).simulate())
        .collect()
}
