//! Grid points and proximity tests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::GRID_SIZE;

/// A position on the diagram plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate in diagram units.
    pub x: f64,
    /// Vertical coordinate in diagram units.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Snap a position to the nearest grid intersection.
pub fn snap_to_grid(p: Point) -> Point {
    Point::new(
        (p.x / GRID_SIZE).round() * GRID_SIZE,
        (p.y / GRID_SIZE).round() * GRID_SIZE,
    )
}

/// Whether `p1` and `p2` are within `threshold` of each other.
///
/// Compares squared distances, so the threshold is never rooted.
pub fn is_near(p1: Point, p2: Point, threshold: f64) -> bool {
    p1.distance_sq(p2) <= threshold * threshold
}
