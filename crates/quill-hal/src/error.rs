//! Error types for the backend boundary.

use thiserror::Error;

/// Errors that can occur when executing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// The execution engine itself failed.
    #[error("Execution engine failure: {0}")]
    EngineFailure(String),

    /// Shot count rejected.
    #[error("Invalid shots: {0}")]
    InvalidShots(u32),

    /// Circuit exceeds backend capabilities.
    #[error("Circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic backend error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for backend operations.
pub type HalResult<T> = Result<T, HalError>;
