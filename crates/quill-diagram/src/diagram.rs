//! The mutable editing state of a sketch session.

use quill_geom::{NEAR_THRESHOLD, Point, is_near, snap_to_grid};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::marker::{GateKind, GateMarker};
use crate::wire::Wire;

/// Everything a sketching session edits: wires, gate markers, sensors,
/// and at most one stroke in progress.
///
/// Editing operations never fail; incoming positions are snapped to the
/// grid before storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    wires: Vec<Wire>,
    gates: Vec<GateMarker>,
    sensors: Vec<Point>,
    /// Stroke between `begin_wire` and `end_wire`; never persisted as-is.
    #[serde(skip)]
    pending_wire: Option<Vec<Point>>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// The persisted wires, in drawn order.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// The placed gate markers, in placement order.
    pub fn gates(&self) -> &[GateMarker] {
        &self.gates
    }

    /// The placed sensors, in placement order.
    pub fn sensors(&self) -> &[Point] {
        &self.sensors
    }

    /// The stroke currently being drawn, if any.
    pub fn pending_wire(&self) -> Option<&[Point]> {
        self.pending_wire.as_deref()
    }

    /// Place a gate marker of `kind` at `pos`.
    pub fn place_gate(&mut self, kind: GateKind, pos: Point) {
        self.gates.push(GateMarker {
            kind,
            pos: snap_to_grid(pos),
        });
    }

    /// Place a measurement sensor at `pos`.
    pub fn place_sensor(&mut self, pos: Point) {
        self.sensors.push(snap_to_grid(pos));
    }

    /// Start a new stroke at `pos`, discarding any stroke in progress.
    pub fn begin_wire(&mut self, pos: Point) {
        self.pending_wire = Some(vec![snap_to_grid(pos)]);
    }

    /// Extend the stroke in progress.
    ///
    /// A repeat of the stroke's last point is dropped, so a wire never
    /// contains a zero-length segment. No-op when no stroke is pending.
    pub fn extend_wire(&mut self, pos: Point) {
        let Some(stroke) = self.pending_wire.as_mut() else {
            return;
        };
        let p = snap_to_grid(pos);
        if stroke.last() != Some(&p) {
            stroke.push(p);
        }
    }

    /// Finish the stroke in progress.
    ///
    /// Strokes of fewer than two points are discarded rather than
    /// persisted.
    pub fn end_wire(&mut self) {
        if let Some(stroke) = self.pending_wire.take() {
            match Wire::new(stroke) {
                Some(wire) => self.wires.push(wire),
                None => debug!("discarding single-point stroke"),
            }
        }
    }

    /// Remove everything under `pos`: gates and sensors within the
    /// hit-test threshold, and any wire with a segment containing the
    /// point.
    pub fn delete_at(&mut self, pos: Point) {
        let p = snap_to_grid(pos);
        self.gates.retain(|g| !is_near(g.pos, p, NEAR_THRESHOLD));
        self.sensors.retain(|s| !is_near(*s, p, NEAR_THRESHOLD));
        self.wires.retain(|w| !w.contains(p));
    }

    /// Drop all diagram content, including any stroke in progress.
    pub fn clear_all(&mut self) {
        self.wires.clear();
        self.gates.clear();
        self.sensors.clear();
        self.pending_wire = None;
    }
}

/// Index of the first wire (in collection order) containing `p`.
///
/// Associations are recomputed on demand rather than stored, so edits to
/// the wire list can never leave markers pointing at stale indices. The
/// first-found binding is the one deterministic association used when a
/// point touches several wires.
pub fn wire_containing(wires: &[Wire], p: Point) -> Option<usize> {
    wires.iter().position(|w| w.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_wire(diagram: &mut Diagram, from: Point, to: Point) {
        diagram.begin_wire(from);
        diagram.extend_wire(to);
        diagram.end_wire();
    }

    #[test]
    fn test_positions_are_snapped() {
        let mut diagram = Diagram::new();
        diagram.place_gate(GateKind::H, Point::new(57.0, 43.0));
        diagram.place_sensor(Point::new(11.0, 9.0));

        assert_eq!(diagram.gates()[0].pos, Point::new(60.0, 40.0));
        assert_eq!(diagram.sensors()[0], Point::new(20.0, 20.0));
    }

    #[test]
    fn test_wire_stroke_lifecycle() {
        let mut diagram = Diagram::new();
        diagram.begin_wire(Point::new(0.0, 0.0));
        diagram.extend_wire(Point::new(0.0, 0.0)); // repeat dropped
        diagram.extend_wire(Point::new(100.0, 0.0));
        assert_eq!(diagram.pending_wire().map(<[Point]>::len), Some(2));

        diagram.end_wire();
        assert!(diagram.pending_wire().is_none());
        assert_eq!(diagram.wires().len(), 1);
        assert_eq!(diagram.wires()[0].points().len(), 2);
    }

    #[test]
    fn test_single_point_stroke_is_discarded() {
        let mut diagram = Diagram::new();
        diagram.begin_wire(Point::new(40.0, 40.0));
        diagram.end_wire();
        assert!(diagram.wires().is_empty());
    }

    #[test]
    fn test_extend_without_begin_is_noop() {
        let mut diagram = Diagram::new();
        diagram.extend_wire(Point::new(40.0, 40.0));
        diagram.end_wire();
        assert!(diagram.wires().is_empty());
    }

    #[test]
    fn test_delete_at() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, Point::new(0.0, 0.0), Point::new(200.0, 0.0));
        draw_wire(&mut diagram, Point::new(0.0, 100.0), Point::new(200.0, 100.0));
        diagram.place_gate(GateKind::X, Point::new(60.0, 0.0));
        diagram.place_sensor(Point::new(140.0, 100.0));

        diagram.delete_at(Point::new(60.0, 0.0));
        assert!(diagram.gates().is_empty());
        assert_eq!(diagram.wires().len(), 1); // wire 0 contained the point
        assert_eq!(diagram.sensors().len(), 1);

        diagram.delete_at(Point::new(140.0, 100.0));
        assert!(diagram.sensors().is_empty());
        assert!(diagram.wires().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, Point::new(0.0, 0.0), Point::new(200.0, 0.0));
        diagram.place_gate(GateKind::H, Point::new(60.0, 0.0));
        diagram.place_sensor(Point::new(100.0, 0.0));
        diagram.begin_wire(Point::new(0.0, 40.0));

        diagram.clear_all();
        assert!(diagram.wires().is_empty());
        assert!(diagram.gates().is_empty());
        assert!(diagram.sensors().is_empty());
        assert!(diagram.pending_wire().is_none());
    }

    #[test]
    fn test_wire_containing_first_match_wins() {
        let mut diagram = Diagram::new();
        // Both wires pass through (100, 0).
        draw_wire(&mut diagram, Point::new(0.0, 0.0), Point::new(200.0, 0.0));
        draw_wire(&mut diagram, Point::new(100.0, 0.0), Point::new(100.0, 200.0));

        assert_eq!(wire_containing(diagram.wires(), Point::new(100.0, 0.0)), Some(0));
        assert_eq!(wire_containing(diagram.wires(), Point::new(100.0, 100.0)), Some(1));
        assert_eq!(wire_containing(diagram.wires(), Point::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_serde_round_trip_skips_pending_stroke() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        diagram.begin_wire(Point::new(0.0, 40.0));

        let json = serde_json::to_string(&diagram).unwrap();
        let restored: Diagram = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.wires().len(), 1);
        assert!(restored.pending_wire().is_none());
    }
}
