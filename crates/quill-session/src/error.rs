//! Error types for the session crate.

use quill_compile::CompileError;
use quill_hal::HalError;
use thiserror::Error;

/// Errors surfaced by a simulate cycle.
///
/// Caught at the simulate boundary: a failed cycle reports its message
/// and leaves the previous results visible; nothing terminates the
/// session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Compilation aborted.
    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    /// The execution engine failed.
    #[error("Simulation failed: {0}")]
    Execution(#[from] HalError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
