//! Point-to-segment distance and containment.

use crate::{GRID_SIZE, Point};

/// Perpendicular distance from `p` to the line through `a` and `b`,
/// clamped to the segment ends.
///
/// A zero-length segment (`a == b`) degenerates to the distance to that
/// single point. A denominator that still underflows to zero returns
/// `f64::INFINITY`, which callers treat as "no match".
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    if a == b {
        return p.distance_to(a);
    }

    let numerator = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
    let denominator = a.distance_to(b);
    if denominator == 0.0 {
        return f64::INFINITY;
    }

    let t = (numerator / (denominator * denominator)).clamp(0.0, 1.0);
    let projected = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
    p.distance_to(projected)
}

/// Whether `p` lies on the segment `a`–`b`.
///
/// Requires both the half-cell distance bound and containment in the
/// segment's axis-aligned bounding box. The box check rejects points
/// whose infinite-line projection falls past the segment ends, which
/// the clamped distance alone does not catch on axis-aligned wires.
pub fn is_on_segment(p: Point, a: Point, b: Point) -> bool {
    if distance_to_segment(p, a, b) > GRID_SIZE / 2.0 {
        return false;
    }

    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}
