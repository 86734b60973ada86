//! Quill Execution Backend Abstraction
//!
//! The simulate cycle consumes execution engines through one narrow
//! contract: submit a compiled circuit with a shot count, receive
//! aggregate bitstring counts. This crate defines that boundary and the
//! result types that cross it.
//!
//! # Overview
//!
//! - [`Backend`]: the execution trait implemented by engines
//! - [`Counts`]: bitstring → occurrence counts summing to the shot count
//! - [`ExecutionResult`]: counts plus run metadata
//! - [`HalError`]: failures surfaced as simulation errors
//!
//! # Example: Implementing a Backend
//!
//! ```rust
//! use async_trait::async_trait;
//! use quill_hal::{Backend, Counts, ExecutionResult, HalResult};
//! use quill_ir::Circuit;
//!
//! struct ZeroBackend;
//!
//! #[async_trait]
//! impl Backend for ZeroBackend {
//!     fn name(&self) -> &str {
//!         "zeros"
//!     }
//!
//!     async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
//!         let mut counts = Counts::new();
//!         counts.insert("0".repeat(circuit.num_clbits() as usize), u64::from(shots));
//!         Ok(ExecutionResult::new(counts, shots))
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod result;

pub use backend::Backend;
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
