//! Quill Circuit Intermediate Representation
//!
//! A linear-instruction circuit representation sized for what a sketched
//! diagram can produce: fixed-width quantum and classical registers and
//! the closed gate set `{H, X, Y, Z, CX}` plus reset and measurement.
//! The compiler emits into this IR; execution backends consume it.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for
//!   addressing the registers
//! - **Gates**: [`Gate`] for the sketchable gate set
//! - **Instructions**: [`Instruction`] combining operations with operands
//! - **Circuit**: [`Circuit`] builder over an ordered instruction list
//! - **Rendering**: [`render::draw`] and [`render::simplify`] for the
//!   textual circuit view
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use quill_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//! circuit.measure(QubitId(1), ClbitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 4);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod render;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
