//! Exact state-vector simulation of small quantum circuits
//!
//! A [`QuantumSystem`](quantum::QuantumSystem) records gates applied to a
//! fixed number of qubits; a [`LinearAlgebraBackend`](simulators::LinearAlgebraBackend)
//! turns it into the probability of every measurement outcome.
//!
//! ```
//! use qsim::prelude::*;
//!
//! let mut system = QuantumSystem::new(2)?;
//! system.hadamard(0)?.cnot(0, 1)?;
//!
//! let probabilities = LinearAlgebraBackend::new(&system).simulate()?;
//! assert!((probabilities[0] - 0.5).abs() < 1e-10);
//! assert!((probabilities[3] - 0.5).abs() < 1e-10);
//! # Ok::<(), qsim::QuantumError>(())
//! ```

pub mod error;
pub mod quantum;
pub mod simulators;

pub use error::{QuantumError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::quantum::prelude::*;
    pub use crate::simulators::{LinearAlgebraBackend, Outcome, SimulatorConfig};
    pub use crate::error::QuantumError;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
