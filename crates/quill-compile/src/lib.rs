//! Quill Circuit Compiler
//!
//! Turns an unordered bag of drawn wires, gate markers, and sensors into
//! one well-formed operation sequence. Nothing in a diagram carries an
//! explicit order or link; everything the compiler needs is recovered
//! spatially:
//!
//! 1. Each wire index becomes one register line (register width =
//!    wire count). Connected wire groups decide reset and traversal
//!    order — they do not renumber qubits.
//! 2. Gate markers bind to the first wire containing them and are
//!    ordered along that wire by arc-length position.
//! 3. Sensors bind to the first wire containing them and become
//!    measurements into the same-indexed classical bit; with no bound
//!    sensor at all, every qubit is measured so a run always yields
//!    decodable output.
//!
//! A single operation that fails to translate is logged and skipped;
//! only register allocation failures abort a compile.
//!
//! # Example
//!
//! ```rust
//! use quill_compile::compile;
//! use quill_diagram::{Diagram, GateKind};
//! use quill_geom::Point;
//!
//! let mut diagram = Diagram::new();
//! diagram.begin_wire(Point::new(0.0, 100.0));
//! diagram.extend_wire(Point::new(200.0, 100.0));
//! diagram.end_wire();
//! diagram.place_gate(GateKind::H, Point::new(60.0, 100.0));
//!
//! let circuit = compile(&diagram).unwrap();
//! assert_eq!(circuit.num_qubits(), 1);
//! ```

pub mod compiler;
pub mod error;

pub use compiler::compile;
pub use error::{CompileError, CompileResult};
