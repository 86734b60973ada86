//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// The gates a sketched diagram can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-X (CNOT) gate.
    CX,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H => "h",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::H | Gate::X | Gate::Y | Gate::Z => 1,
            Gate::CX => 2,
        }
    }

    /// Label drawn in the gate's box in circuit renderings. `CX` labels
    /// its target box.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Gate::H => "H",
            Gate::X | Gate::CX => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
        }
    }
}
