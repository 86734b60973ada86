//! Quill Sketching Session
//!
//! One interactive editing session and its simulate cycle: the session
//! owns the diagram, drives the compiler, submits the compiled circuit
//! to an execution backend, and interprets the raw bitstring counts as
//! per-sensor statistics.
//!
//! # Overview
//!
//! - [`Session`]: exclusive owner of the diagram and the last results
//! - [`aggregate`]: bitstring counts → per-sensor probability buckets
//! - [`SensorReport`] / [`SensorReading`] / [`StateLabel`]: the
//!   user-facing statistics
//!
//! # Example
//!
//! ```ignore
//! use quill_session::Session;
//! use quill_diagram::GateKind;
//! use quill_geom::Point;
//!
//! let mut session = Session::new();
//! session.begin_wire(Point::new(0.0, 100.0));
//! session.extend_wire(Point::new(200.0, 100.0));
//! session.end_wire();
//! session.place_gate(GateKind::H, Point::new(60.0, 100.0));
//! session.place_sensor(Point::new(140.0, 100.0));
//!
//! session.simulate(&backend).await?;
//! println!("{}", session.report().unwrap());
//! ```

pub mod error;
pub mod report;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use report::{SensorReading, SensorReport, StateLabel, aggregate};
pub use session::{SHOTS, Session, SimulateOutcome};
