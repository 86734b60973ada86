//! Quill Local Statevector Engine
//!
//! An execution backend that simulates compiled sketch circuits with a
//! dense statevector. It exists so a session can run end-to-end without
//! external hardware; the compiler and aggregator never depend on it.
//!
//! # Example
//!
//! ```ignore
//! use quill_adapter_sim::SimulatorBackend;
//! use quill_hal::Backend;
//! use quill_ir::Circuit;
//!
//! let backend = SimulatorBackend::new();
//! let circuit = Circuit::bell()?;
//! let result = backend.execute(&circuit, 1000).await?;
//! assert_eq!(result.counts.total(), 1000);
//! ```

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
