//! Wires: ordered polylines drawn on the grid.

use quill_geom::{Point, is_on_segment, polyline_length};
use serde::{Deserialize, Serialize};

/// An ordered polyline representing one qubit line.
///
/// A persisted wire always has at least two points; the diagram discards
/// anything shorter when a stroke ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    points: Vec<Point>,
}

impl Wire {
    /// Build a wire from a drawn point sequence.
    ///
    /// Returns `None` for sequences of fewer than two points.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        (points.len() >= 2).then_some(Self { points })
    }

    /// The wire's points in drawn order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First drawn point.
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// Last drawn point.
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The wire's segments in point order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether `p` lies on any segment of this wire.
    pub fn contains(&self, p: Point) -> bool {
        self.segments().any(|(a, b)| is_on_segment(p, a, b))
    }

    /// Total drawn length.
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }
}
