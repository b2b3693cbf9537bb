//! Simulator configuration

use serde::{Deserialize, Serialize};

/// Default upper bound on the number of qubits a backend accepts.
///
/// A 12-qubit operator already holds 16M complex entries.
pub const DEFAULT_MAX_QUBITS: usize = 12;

/// Default tolerance when checking that probabilities sum to one
pub const DEFAULT_NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Limits and tolerances for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Largest system that will be simulated
    pub max_qubits: usize,
    /// Allowed deviation of the total probability from 1 before a warning is logged
    pub normalization_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            max_qubits: DEFAULT_MAX_QUBITS,
            normalization_tolerance: DEFAULT_NORMALIZATION_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_normalization_tolerance(mut self, tolerance: f64) -> Self {
        self.normalization_tolerance = tolerance;
        self
    }
}
