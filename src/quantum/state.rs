// src/quantum/state.rs
//! Computational basis states
//!
//! A basis state of an n-qubit system is an index in `[0, 2^n)`. Qubit 0 is
//! the most significant bit of the n-bit, zero-padded binary form of that
//! index, so `|100⟩` is index 4 in a 3-qubit system.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, Result};

/// Most qubits whose basis states still fit in a `usize` index
pub const MAX_INDEXABLE_QUBITS: usize = usize::BITS as usize - 1;

/// Number of basis states `2^qubit_count`
///
/// Fails with [`QuantumError::QubitLimitExceeded`] when the count does not fit
/// a `usize`.
pub fn dimension(qubit_count: usize) -> Result<usize> {
    shifted_one(qubit_count).ok_or(QuantumError::QubitLimitExceeded {
        requested: qubit_count,
        limit: MAX_INDEXABLE_QUBITS,
    })
}

/// `1 << shift`, or `None` past the width of `usize`
fn shifted_one(shift: usize) -> Option<usize> {
    u32::try_from(shift).ok().and_then(|s| 1usize.checked_shl(s))
}

/// Bit value (0 or 1) at `position` of the `width`-bit form of `state`
///
/// States narrower than `width` are read as if zero-padded on the left.
pub fn bit_at(state: usize, position: usize, width: usize) -> Result<u8> {
    if position >= width {
        return Err(QuantumError::InvalidPosition { position, width });
    }
    let shift = width - 1 - position;
    let bit = u32::try_from(shift)
        .ok()
        .and_then(|s| state.checked_shr(s))
        .map_or(0, |v| (v & 1) as u8);
    Ok(bit)
}

/// True iff the `width`-bit forms of `a` and `b` agree everywhere except at
/// `target`, where they must differ
pub fn differs_only_at(target: usize, a: usize, b: usize, width: usize) -> Result<bool> {
    if target >= width {
        return Err(QuantumError::InvalidPosition { position: target, width });
    }
    // A target above the index width is zero in both states, so never differs
    Ok(shifted_one(width - 1 - target).map_or(false, |mask| (a ^ b) == mask))
}

/// One of the `2^n` computational basis states of an n-qubit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BasisState(usize);

impl BasisState {
    /// Create the basis state with the given index
    ///
    /// Fails with [`QuantumError::InvalidState`] unless `index < 2^qubit_count`.
    pub fn from_index(index: usize, qubit_count: usize) -> Result<Self> {
        let fits = match shifted_one(qubit_count) {
            Some(dim) => index < dim,
            // 2^n exceeds usize, every index fits
            None => true,
        };
        if !fits {
            return Err(QuantumError::invalid_state(index, qubit_count));
        }
        Ok(BasisState(index))
    }

    /// The flat state-vector index
    pub fn index(&self) -> usize {
        self.0
    }

    /// Bit value of `qubit` in a `width`-qubit system
    pub fn bit(&self, qubit: usize, width: usize) -> Result<u8> {
        bit_at(self.0, qubit, width)
    }

    /// The zero-padded ket label, e.g. `|011⟩`
    pub fn label(&self, width: usize) -> String {
        format!("|{:0width$b}⟩", self.0, width = width)
    }
}

/// Renders the index in binary without padding, e.g. `|11⟩` for 3.
///
/// `Display` does not know the system width; use [`BasisState::label`] for the
/// per-qubit form.
impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{:b}⟩", self.0)
    }
}

impl From<BasisState> for usize {
    fn from(state: BasisState) -> usize {
        state.0
    }
}
