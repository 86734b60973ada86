//! Arc-length parameterization along polylines.

use crate::{Point, is_on_segment};

/// Total length of a polyline.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Arc-length fraction of `p` along `points`, in `[0, 1]`.
///
/// The fraction is measured to the first segment (in point order) that
/// contains `p`: lengths of the preceding segments plus the distance from
/// that segment's start, divided by the total polyline length. Returns
/// 0.0 when `p` is on no segment or the polyline has zero length;
/// callers are expected to have verified containment first.
pub fn position_along(p: Point, points: &[Point]) -> f64 {
    let total = polyline_length(points);
    if total == 0.0 {
        return 0.0;
    }

    let mut travelled = 0.0;
    for w in points.windows(2) {
        if is_on_segment(p, w[0], w[1]) {
            return (travelled + w[0].distance_to(p)) / total;
        }
        travelled += w[0].distance_to(w[1]);
    }
    0.0
}
