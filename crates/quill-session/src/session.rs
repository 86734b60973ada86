//! Editing session and the simulate cycle.

use quill_compile::compile;
use quill_diagram::{Diagram, GateKind};
use quill_geom::Point;
use quill_hal::Backend;
use quill_ir::render;
use tracing::{debug, info, instrument};

use crate::error::SessionResult;
use crate::report::{SensorReport, aggregate};

/// Shots per simulation request. Not user-configurable.
pub const SHOTS: u32 = 1000;

/// Outcome of a simulate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulateOutcome {
    /// Circuit compiled, executed, and aggregated; results updated.
    Completed,
    /// Nothing to simulate: the diagram has no wires. Logged no-op.
    EmptyDiagram,
}

/// One interactive sketching session.
///
/// The session owns the diagram exclusively. Editing and simulation are
/// never concurrent: [`Session::simulate`] borrows the session mutably
/// for the whole compile-execute-aggregate cycle, so at most one cycle
/// can be in flight and the diagram cannot change underneath it.
#[derive(Default)]
pub struct Session {
    diagram: Diagram,
    circuit_text: Option<String>,
    report: Option<SensorReport>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagram being edited.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Mutable access to the diagram for editing operations not
    /// mirrored on the session.
    pub fn diagram_mut(&mut self) -> &mut Diagram {
        &mut self.diagram
    }

    /// Place a gate marker. See [`Diagram::place_gate`].
    pub fn place_gate(&mut self, kind: GateKind, pos: Point) {
        self.diagram.place_gate(kind, pos);
    }

    /// Place a measurement sensor. See [`Diagram::place_sensor`].
    pub fn place_sensor(&mut self, pos: Point) {
        self.diagram.place_sensor(pos);
    }

    /// Start a wire stroke. See [`Diagram::begin_wire`].
    pub fn begin_wire(&mut self, pos: Point) {
        self.diagram.begin_wire(pos);
    }

    /// Extend the wire stroke. See [`Diagram::extend_wire`].
    pub fn extend_wire(&mut self, pos: Point) {
        self.diagram.extend_wire(pos);
    }

    /// Finish the wire stroke. See [`Diagram::end_wire`].
    pub fn end_wire(&mut self) {
        self.diagram.end_wire();
    }

    /// Delete everything under a position. See [`Diagram::delete_at`].
    pub fn delete_at(&mut self, pos: Point) {
        self.diagram.delete_at(pos);
    }

    /// Reset the whole session: diagram content, cached circuit text,
    /// and sensor statistics, atomically.
    pub fn clear_all(&mut self) {
        self.diagram.clear_all();
        self.circuit_text = None;
        self.report = None;
    }

    /// ASCII rendering of the last successfully compiled circuit.
    pub fn circuit_text(&self) -> Option<&str> {
        self.circuit_text.as_deref()
    }

    /// Statistics from the last successful simulation.
    pub fn report(&self) -> Option<&SensorReport> {
        self.report.as_ref()
    }

    /// Run one simulate cycle against `backend`.
    ///
    /// Compiles the current diagram, executes it for [`SHOTS`] shots,
    /// and aggregates the counts into per-sensor statistics. On any
    /// failure the previous circuit text and report are left in place,
    /// so the last successful result stays visible.
    #[instrument(skip(self, backend), fields(backend = backend.name()))]
    pub async fn simulate(&mut self, backend: &dyn Backend) -> SessionResult<SimulateOutcome> {
        if self.diagram.wires().is_empty() {
            info!("no wires to simulate");
            return Ok(SimulateOutcome::EmptyDiagram);
        }

        let circuit = compile(&self.diagram)?;
        let text = render::simplify(&render::draw(&circuit));

        let result = backend.execute(&circuit, SHOTS).await?;
        debug!(outcomes = result.counts.len(), "execution finished");

        self.circuit_text = Some(text);
        self.report = Some(aggregate(&result.counts));
        Ok(SimulateOutcome::Completed)
    }
}
