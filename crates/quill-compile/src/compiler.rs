//! Diagram-to-circuit compilation.

use std::cmp::Ordering;

use quill_diagram::{
    Diagram, GateKind, GateMarker, Wire, connected_group, wire_adjacency, wire_containing,
};
use quill_geom::position_along;
use quill_ir::{Circuit, ClbitId, QubitId};
use tracing::{debug, warn};

use crate::error::{CompileError, CompileResult};

/// Compile a sketched diagram into an executable circuit.
///
/// Register width equals the wire count; each wire keeps its raw index
/// as its qubit index. Connected wire groups are traversed in ascending
/// index order, each group fully reset before its gates are emitted, so
/// a reset can never clobber a group member another wire just targeted.
///
/// Individual operations that fail to translate are logged and skipped;
/// an empty diagram or a register allocation failure aborts the compile.
pub fn compile(diagram: &Diagram) -> CompileResult<Circuit> {
    let wires = diagram.wires();
    if wires.is_empty() {
        return Err(CompileError::EmptyDiagram);
    }

    let width = wires.len().max(1) as u32;
    let mut circuit = Circuit::with_size("sketch", width, width);
    debug!(wires = wires.len(), "circuit initialized");

    // One deterministic wire binding per gate marker: the first wire in
    // collection order that contains it.
    let bindings: Vec<Option<usize>> = diagram
        .gates()
        .iter()
        .map(|g| wire_containing(wires, g.pos))
        .collect();

    let adjacency = wire_adjacency(wires);
    let mut processed = vec![false; wires.len()];

    for seed in 0..wires.len() {
        if processed[seed] {
            continue;
        }
        let group = connected_group(seed, &adjacency);
        debug!(?group, "processing connected wire group");

        // Reset the whole group before any of its gates land.
        for &idx in &group {
            if let Err(err) = circuit.reset(QubitId::from(idx)).map(|_| ()) {
                warn!(wire = idx, "skipping reset: {err}");
            }
        }

        for &idx in &group {
            for marker in gates_on_wire(diagram.gates(), &bindings, idx, &wires[idx]) {
                apply_gate(&mut circuit, marker, idx, wires.len());
            }
            processed[idx] = true;
        }
    }

    attach_measurements(&mut circuit, diagram)?;
    Ok(circuit)
}

/// Gate markers bound to wire `wire_idx`, ascending by arc-length
/// position along the wire.
///
/// The sort is stable, so markers at equal positions keep their diagram
/// insertion order.
fn gates_on_wire<'a>(
    gates: &'a [GateMarker],
    bindings: &[Option<usize>],
    wire_idx: usize,
    wire: &Wire,
) -> Vec<&'a GateMarker> {
    let mut bound: Vec<(&GateMarker, f64)> = gates
        .iter()
        .zip(bindings)
        .filter(|(_, binding)| **binding == Some(wire_idx))
        .map(|(g, _)| (g, position_along(g.pos, wire.points())))
        .collect();
    bound.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    bound.into_iter().map(|(g, _)| g).collect()
}

/// Emit one marker as a circuit operation on `wire_idx`.
fn apply_gate(circuit: &mut Circuit, marker: &GateMarker, wire_idx: usize, wire_count: usize) {
    let qubit = QubitId::from(wire_idx);
    let result = match marker.kind {
        GateKind::H => circuit.h(qubit),
        GateKind::X => circuit.x(qubit),
        GateKind::Y => circuit.y(qubit),
        GateKind::Z => circuit.z(qubit),
        GateKind::Cnot => {
            // No wraparound: a CNOT on the last line has no target.
            if wire_idx + 1 >= wire_count {
                debug!(wire = wire_idx, "cnot on last wire has no target, skipped");
                return;
            }
            circuit.cx(qubit, QubitId::from(wire_idx + 1))
        }
    };
    if let Err(err) = result.map(|_| ()) {
        warn!(gate = marker.kind.name(), wire = wire_idx, "skipping gate: {err}");
    }
}

/// Bind sensors to wires and emit measurements.
///
/// Each sensor measures the first wire containing it into the
/// same-indexed classical bit. When no sensor binds at all, every qubit
/// is measured so the run still yields decodable output.
fn attach_measurements(circuit: &mut Circuit, diagram: &Diagram) -> CompileResult<()> {
    let wires = diagram.wires();
    let mut measured = false;

    for (sensor_idx, &sensor) in diagram.sensors().iter().enumerate() {
        let Some(wire_idx) = wire_containing(wires, sensor) else {
            debug!(sensor = sensor_idx, "sensor touches no wire");
            continue;
        };
        match circuit
            .measure(QubitId::from(wire_idx), ClbitId::from(wire_idx))
            .map(|_| ())
        {
            Ok(()) => measured = true,
            Err(err) => {
                warn!(sensor = sensor_idx, wire = wire_idx, "skipping measurement: {err}");
            }
        }
    }

    if !measured {
        circuit.measure_all()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_geom::Point;
    use quill_ir::{Gate, Instruction, InstructionKind};

    fn draw_wire(diagram: &mut Diagram, points: &[(f64, f64)]) {
        let mut iter = points.iter();
        let first = iter.next().unwrap();
        diagram.begin_wire(Point::new(first.0, first.1));
        for p in iter {
            diagram.extend_wire(Point::new(p.0, p.1));
        }
        diagram.end_wire();
    }

    fn gate_qubits(instructions: &[Instruction]) -> Vec<(Gate, Vec<u32>)> {
        instructions
            .iter()
            .filter_map(|inst| {
                inst.as_gate()
                    .map(|g| (g, inst.qubits.iter().map(|q| q.0).collect()))
            })
            .collect()
    }

    fn reset_qubits(instructions: &[Instruction]) -> Vec<u32> {
        instructions
            .iter()
            .filter(|inst| inst.is_reset())
            .map(|inst| inst.qubits[0].0)
            .collect()
    }

    fn measured_qubits(instructions: &[Instruction]) -> Vec<u32> {
        instructions
            .iter()
            .filter(|inst| inst.is_measure())
            .map(|inst| inst.qubits[0].0)
            .collect()
    }

    #[test]
    fn test_empty_diagram() {
        assert!(matches!(
            compile(&Diagram::new()),
            Err(CompileError::EmptyDiagram)
        ));
    }

    #[test]
    fn test_single_wire_single_gate() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 100.0), (200.0, 100.0)]);
        diagram.place_gate(GateKind::H, Point::new(60.0, 100.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(gate_qubits(circuit.instructions()), vec![(Gate::H, vec![0])]);
        // No sensors: fallback measures the only qubit.
        assert_eq!(measured_qubits(circuit.instructions()), vec![0]);
    }

    #[test]
    fn test_gates_ordered_by_position_not_insertion() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        diagram.place_gate(GateKind::X, Point::new(160.0, 0.0));
        diagram.place_gate(GateKind::H, Point::new(40.0, 0.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(
            gate_qubits(circuit.instructions()),
            vec![(Gate::H, vec![0]), (Gate::X, vec![0])]
        );
    }

    #[test]
    fn test_equal_positions_keep_insertion_order() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        diagram.place_gate(GateKind::X, Point::new(60.0, 0.0));
        diagram.place_gate(GateKind::Y, Point::new(60.0, 0.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(
            gate_qubits(circuit.instructions()),
            vec![(Gate::X, vec![0]), (Gate::Y, vec![0])]
        );
    }

    #[test]
    fn test_gate_ordering_spans_polyline_bend() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        diagram.place_gate(GateKind::Z, Point::new(100.0, 60.0)); // second segment
        diagram.place_gate(GateKind::H, Point::new(40.0, 0.0)); // first segment

        let circuit = compile(&diagram).unwrap();
        assert_eq!(
            gate_qubits(circuit.instructions()),
            vec![(Gate::H, vec![0]), (Gate::Z, vec![0])]
        );
    }

    #[test]
    fn test_cnot_targets_next_wire() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        draw_wire(&mut diagram, &[(0.0, 100.0), (200.0, 100.0)]);
        diagram.place_gate(GateKind::Cnot, Point::new(100.0, 0.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(gate_qubits(circuit.instructions()), vec![(Gate::CX, vec![0, 1])]);
    }

    #[test]
    fn test_cnot_on_last_wire_is_skipped() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        diagram.place_gate(GateKind::Cnot, Point::new(100.0, 0.0));

        let circuit = compile(&diagram).unwrap();
        assert!(gate_qubits(circuit.instructions()).is_empty());
        // The rest of the compile is unaffected.
        assert_eq!(reset_qubits(circuit.instructions()), vec![0]);
        assert_eq!(measured_qubits(circuit.instructions()), vec![0]);
    }

    #[test]
    fn test_connected_group_resets_before_gates() {
        // Two strokes joined at (100, 100); CNOT on the first one.
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(100.0, 100.0), (200.0, 100.0)]);
        draw_wire(&mut diagram, &[(0.0, 100.0), (100.0, 100.0)]);
        diagram.place_gate(GateKind::Cnot, Point::new(160.0, 100.0));

        let circuit = compile(&diagram).unwrap();
        let kinds: Vec<&InstructionKind> =
            circuit.instructions().iter().map(|i| &i.kind).collect();

        // reset(0), reset(1), cx(0,1), then the fallback measurements.
        assert_eq!(kinds[0], &InstructionKind::Reset);
        assert_eq!(kinds[1], &InstructionKind::Reset);
        assert_eq!(kinds[2], &InstructionKind::Gate(Gate::CX));
        assert_eq!(reset_qubits(circuit.instructions()), vec![0, 1]);
        assert_eq!(gate_qubits(circuit.instructions()), vec![(Gate::CX, vec![0, 1])]);
    }

    #[test]
    fn test_group_traversal_order() {
        // Wires 0 and 2 form one group; wire 1 stands alone. The group
        // seeded at 0 is processed fully (ascending) before wire 1.
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (100.0, 0.0)]);
        draw_wire(&mut diagram, &[(0.0, 200.0), (100.0, 200.0)]);
        draw_wire(&mut diagram, &[(100.0, 0.0), (200.0, 0.0)]);

        let circuit = compile(&diagram).unwrap();
        assert_eq!(reset_qubits(circuit.instructions()), vec![0, 2, 1]);
    }

    #[test]
    fn test_gate_binds_to_first_containing_wire_only() {
        // Both wires pass through (100, 0); the marker lands on both.
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        draw_wire(&mut diagram, &[(100.0, 0.0), (100.0, 200.0)]);
        diagram.place_gate(GateKind::X, Point::new(100.0, 0.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(gate_qubits(circuit.instructions()), vec![(Gate::X, vec![0])]);
    }

    #[test]
    fn test_stray_gate_is_ignored() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        diagram.place_gate(GateKind::H, Point::new(100.0, 300.0));

        let circuit = compile(&diagram).unwrap();
        assert!(gate_qubits(circuit.instructions()).is_empty());
    }

    #[test]
    fn test_sensor_measures_only_its_wire() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        draw_wire(&mut diagram, &[(0.0, 100.0), (200.0, 100.0)]);
        diagram.place_sensor(Point::new(100.0, 100.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(measured_qubits(circuit.instructions()), vec![1]);
    }

    #[test]
    fn test_sensor_on_crossing_wires_binds_first() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        draw_wire(&mut diagram, &[(100.0, 0.0), (100.0, 200.0)]);
        diagram.place_sensor(Point::new(100.0, 0.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(measured_qubits(circuit.instructions()), vec![0]);
    }

    #[test]
    fn test_stray_sensor_falls_back_to_measure_all() {
        let mut diagram = Diagram::new();
        draw_wire(&mut diagram, &[(0.0, 0.0), (200.0, 0.0)]);
        draw_wire(&mut diagram, &[(0.0, 100.0), (200.0, 100.0)]);
        diagram.place_sensor(Point::new(100.0, 300.0));

        let circuit = compile(&diagram).unwrap();
        assert_eq!(measured_qubits(circuit.instructions()), vec![0, 1]);
    }
}
