//! Error types for the compiler crate.

use quill_ir::IrError;
use thiserror::Error;

/// Errors that abort a compile.
///
/// Per-gate translation failures are not listed here: they are logged
/// and skipped so compilation continues.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// The diagram has no wires; there is nothing to compile.
    #[error("Diagram has no wires")]
    EmptyDiagram,

    /// Register or circuit construction failed.
    #[error("Circuit construction failed: {0}")]
    Circuit(#[from] IrError),
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
