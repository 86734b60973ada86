//! Planar grid geometry for quill diagrams.
//!
//! Every entity in a sketched diagram — wire vertices, gate markers,
//! sensors — lives on a uniform grid of [`GRID_SIZE`]-unit cells. Nothing
//! in a diagram stores explicit links; all relationships are recovered
//! from position alone, using the primitives in this crate:
//!
//! - [`distance_to_segment`] / [`is_on_segment`] decide whether a marker
//!   sits on a wire segment
//! - [`is_near`] decides endpoint coincidence and hit-testing
//! - [`position_along`] orders markers along a polyline by arc length
//!
//! # Example
//!
//! ```rust
//! use quill_geom::{is_on_segment, position_along, Point};
//!
//! let wire = [Point::new(0.0, 0.0), Point::new(200.0, 0.0)];
//! let marker = Point::new(60.0, 0.0);
//!
//! assert!(is_on_segment(marker, wire[0], wire[1]));
//! assert!((position_along(marker, &wire) - 0.3).abs() < 1e-9);
//! ```

pub mod point;
pub mod polyline;
pub mod segment;

pub use point::{Point, is_near, snap_to_grid};
pub use polyline::{polyline_length, position_along};
pub use segment::{distance_to_segment, is_on_segment};

/// Grid cell size in diagram units.
pub const GRID_SIZE: f64 = 20.0;

/// Proximity threshold for generic hit-testing (delete, drag).
pub const NEAR_THRESHOLD: f64 = 20.0;

/// Proximity threshold for wire endpoint coincidence.
pub const ENDPOINT_THRESHOLD: f64 = 10.0;
