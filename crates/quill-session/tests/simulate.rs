//! End-to-end simulate cycle tests against mock backends.

use async_trait::async_trait;
use quill_diagram::GateKind;
use quill_geom::Point;
use quill_hal::{Backend, Counts, ExecutionResult, HalError, HalResult};
use quill_ir::Circuit;
use quill_session::{SHOTS, Session, SessionError, SimulateOutcome, StateLabel};

/// Backend returning a fixed count set regardless of the circuit.
struct FixedBackend {
    counts: Vec<(&'static str, u64)>,
}

#[async_trait]
impl Backend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn execute(&self, _circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let counts: Counts = self.counts.iter().copied().collect();
        Ok(ExecutionResult::new(counts, shots))
    }
}

/// Backend that always fails.
struct FailingBackend;

#[async_trait]
impl Backend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn execute(&self, _circuit: &Circuit, _shots: u32) -> HalResult<ExecutionResult> {
        Err(HalError::EngineFailure("backend exploded".into()))
    }
}

/// Backend recording the shot count it was asked for.
struct ShotProbe {
    seen: std::sync::Mutex<Option<u32>>,
}

#[async_trait]
impl Backend for ShotProbe {
    fn name(&self) -> &str {
        "probe"
    }

    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        *self.seen.lock().unwrap() = Some(shots);
        let mut counts = Counts::new();
        counts.insert("0".repeat(circuit.num_clbits() as usize), u64::from(shots));
        Ok(ExecutionResult::new(counts, shots))
    }
}

fn sketch_h_wire(session: &mut Session) {
    session.begin_wire(Point::new(0.0, 100.0));
    session.extend_wire(Point::new(200.0, 100.0));
    session.end_wire();
    session.place_gate(GateKind::H, Point::new(60.0, 100.0));
    session.place_sensor(Point::new(140.0, 100.0));
}

#[tokio::test]
async fn test_h_wire_reports_superposition() {
    let mut session = Session::new();
    sketch_h_wire(&mut session);

    let backend = FixedBackend {
        counts: vec![("0", 500), ("1", 500)],
    };
    let outcome = session.simulate(&backend).await.unwrap();
    assert_eq!(outcome, SimulateOutcome::Completed);

    let report = session.report().unwrap();
    let reading = report.get(0).unwrap();
    assert!((reading.prob_zero - 0.5).abs() < 1e-9);
    assert!((reading.prob_one - 0.5).abs() < 1e-9);
    assert_eq!(reading.label(), StateLabel::Superposition);

    let text = session.circuit_text().unwrap();
    assert!(text.is_ascii());
    assert!(text.contains("+ H +"));
}

#[tokio::test]
async fn test_empty_diagram_is_noop() {
    let mut session = Session::new();
    let backend = FailingBackend; // would error if ever reached

    let outcome = session.simulate(&backend).await.unwrap();
    assert_eq!(outcome, SimulateOutcome::EmptyDiagram);
    assert!(session.report().is_none());
    assert!(session.circuit_text().is_none());
}

#[tokio::test]
async fn test_backend_failure_keeps_previous_results() {
    let mut session = Session::new();
    sketch_h_wire(&mut session);

    let good = FixedBackend {
        counts: vec![("0", 1000)],
    };
    session.simulate(&good).await.unwrap();
    let report_before = session.report().unwrap().clone();
    let text_before = session.circuit_text().unwrap().to_string();

    let err = session.simulate(&FailingBackend).await.unwrap_err();
    assert!(matches!(err, SessionError::Execution(HalError::EngineFailure(_))));
    assert!(err.to_string().contains("backend exploded"));

    // Last successful results stay visible.
    assert_eq!(session.report(), Some(&report_before));
    assert_eq!(session.circuit_text(), Some(text_before.as_str()));
}

#[tokio::test]
async fn test_simulate_uses_fixed_shot_count() {
    let mut session = Session::new();
    sketch_h_wire(&mut session);

    let probe = ShotProbe {
        seen: std::sync::Mutex::new(None),
    };
    session.simulate(&probe).await.unwrap();
    assert_eq!(*probe.seen.lock().unwrap(), Some(SHOTS));
}

#[tokio::test]
async fn test_clear_all_invalidates_results() {
    let mut session = Session::new();
    sketch_h_wire(&mut session);

    let backend = FixedBackend {
        counts: vec![("0", 1000)],
    };
    session.simulate(&backend).await.unwrap();
    assert!(session.report().is_some());

    session.clear_all();
    assert!(session.report().is_none());
    assert!(session.circuit_text().is_none());

    // And a fresh simulate on the cleared diagram is a no-op again.
    let outcome = session.simulate(&backend).await.unwrap();
    assert_eq!(outcome, SimulateOutcome::EmptyDiagram);
}

#[tokio::test]
async fn test_definite_labels() {
    let mut session = Session::new();
    sketch_h_wire(&mut session);

    let backend = FixedBackend {
        counts: vec![("0", 950), ("1", 50)],
    };
    session.simulate(&backend).await.unwrap();
    let report = session.report().unwrap();
    assert_eq!(report.get(0).unwrap().label(), StateLabel::DefiniteZero);

    let backend = FixedBackend {
        counts: vec![("0", 20), ("1", 980)],
    };
    session.simulate(&backend).await.unwrap();
    let report = session.report().unwrap();
    assert_eq!(report.get(0).unwrap().label(), StateLabel::DefiniteOne);
}
