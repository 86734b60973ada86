//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index outside the circuit's register.
    #[error("Qubit {qubit} out of range for register of width {width}")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the quantum register.
        width: u32,
    },

    /// Classical bit index outside the circuit's register.
    #[error("Classical bit {clbit} out of range for register of width {width}")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Width of the classical register.
        width: u32,
    },

    /// Two-qubit gate applied to one qubit twice.
    #[error("Duplicate qubit {qubit} in two-qubit gate")]
    DuplicateQubit {
        /// The duplicated qubit.
        qubit: QubitId,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
