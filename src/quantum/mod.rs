// src/quantum/mod.rs
//! Quantum circuit primitives
//!
//! Complex scalars, dense matrices, basis-state indexing, the closed gate set
//! and the append-only quantum system that the simulators consume.

pub mod complex;
pub mod matrix;
pub mod state;
pub mod gate;
pub mod circuit;

pub use complex::Complex64;
pub use matrix::Matrix;
pub use state::BasisState;
pub use gate::{GateApplication, StandardGate};
pub use circuit::QuantumSystem;

/// Re-export commonly used types
pub mod prelude {
    pub use super::{Complex64, Matrix, BasisState};
    pub use super::{GateApplication, StandardGate, QuantumSystem};
}
