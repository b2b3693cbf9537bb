//! Quantum circuit simulators
//!
//! This module provides simulators that compute the exact measurement
//! distribution of a quantum system on classical hardware.

pub mod config;
pub mod linear_algebra;

pub use config::SimulatorConfig;
pub use linear_algebra::{
    LinearAlgebraBackend,
    Outcome,
    simulate_many,
    zero_state,
};
