//! Error types for qsim

use thiserror::Error;

/// Errors raised while building or simulating a quantum system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// A qubit index outside the system
    #[error("Invalid qubit index {qubit}: system has only {qubit_count} qubits")]
    InvalidQubit { qubit: usize, qubit_count: usize },

    /// A two-qubit gate whose control and target coincide
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(usize),

    /// A system created without qubits
    #[error("System must have at least one qubit")]
    EmptySystem,

    /// A basis-state index that does not fit the system
    #[error("Basis state {index} is out of range for a {qubit_count}-qubit system")]
    InvalidState { index: usize, qubit_count: usize },

    /// A bit position outside the state width
    #[error("Bit position {position} is out of range for width {width}")]
    InvalidPosition { position: usize, width: usize },

    /// Matrix product with disagreeing inner dimensions, shapes as (rows, columns)
    #[error("Matrix dimension mismatch: cannot multiply {left:?} by {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A system larger than the simulator accepts
    #[error("System has {requested} qubits, but the simulator is limited to {limit}")]
    QubitLimitExceeded { requested: usize, limit: usize },
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, qubit_count: usize) -> Self {
        Self::InvalidQubit { qubit, qubit_count }
    }

    /// Create an invalid state error
    pub fn invalid_state(index: usize, qubit_count: usize) -> Self {
        Self::InvalidState { index, qubit_count }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QuantumError>;
