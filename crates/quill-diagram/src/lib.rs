//! Quill Diagram Model
//!
//! The mutable state of a sketching session: wires drawn as polylines,
//! typed gate markers, and bare sensor positions. Nothing here stores a
//! link to anything else — a gate does not know its wire, a sensor does
//! not know its qubit. Associations are derived on demand from spatial
//! proximity, so edits can never leave a stale back-reference behind.
//!
//! # Overview
//!
//! - [`Wire`]: an ordered polyline of at least two grid points
//! - [`GateKind`] / [`GateMarker`]: the closed set of placeable gates
//! - [`Diagram`]: the aggregate, with the editing operations an external
//!   UI layer drives (`place_gate`, `begin_wire`/`extend_wire`/`end_wire`,
//!   `place_sensor`, `delete_at`, `clear_all`)
//! - [`wire_adjacency`] / [`connected_group`]: endpoint-coincidence
//!   connectivity between wires
//!
//! # Example
//!
//! ```rust
//! use quill_diagram::{Diagram, GateKind};
//! use quill_geom::Point;
//!
//! let mut diagram = Diagram::new();
//! diagram.begin_wire(Point::new(0.0, 100.0));
//! diagram.extend_wire(Point::new(200.0, 100.0));
//! diagram.end_wire();
//! diagram.place_gate(GateKind::H, Point::new(60.0, 100.0));
//!
//! assert_eq!(diagram.wires().len(), 1);
//! assert!(diagram.wires()[0].contains(diagram.gates()[0].pos));
//! ```

pub mod connectivity;
pub mod diagram;
pub mod marker;
pub mod wire;

pub use connectivity::{connected_group, wire_adjacency};
pub use diagram::{Diagram, wire_containing};
pub use marker::{GateKind, GateMarker};
pub use wire::Wire;
