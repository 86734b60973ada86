//! Sketch-and-simulate demo.
//!
//! Draws a Bell-style diagram programmatically — two wires, a Hadamard
//! and a CNOT on the first, sensors on both — then compiles, simulates,
//! and prints the circuit and per-sensor statistics.

use anyhow::Result;
use clap::Parser;

use quill_adapter_sim::SimulatorBackend;
use quill_demos::{print_header, print_result, print_section};
use quill_diagram::GateKind;
use quill_geom::Point;
use quill_hal::Backend;
use quill_session::{SHOTS, Session, SimulateOutcome};

#[derive(Parser, Debug)]
#[command(name = "demo-sketch")]
#[command(about = "Sketch a Bell-style circuit and simulate it")]
struct Args {
    /// Draw the second wire disconnected instead of joined end-to-end
    #[arg(long)]
    split: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    print_header("Quill Sketch Demo");

    let mut session = Session::new();

    // First wire, left to right, carrying H then CNOT.
    session.begin_wire(Point::new(100.0, 100.0));
    session.extend_wire(Point::new(300.0, 100.0));
    session.end_wire();

    // Second wire: joined to the first at (300, 100), or drawn apart.
    let y = if args.split { 200.0 } else { 100.0 };
    session.begin_wire(Point::new(300.0, y));
    session.extend_wire(Point::new(500.0, y));
    session.end_wire();

    session.place_gate(GateKind::H, Point::new(140.0, 100.0));
    session.place_gate(GateKind::Cnot, Point::new(220.0, 100.0));
    session.place_sensor(Point::new(260.0, 100.0));
    session.place_sensor(Point::new(400.0, y));

    print_section("Diagram");
    print_result("Wires", session.diagram().wires().len());
    print_result("Gates", session.diagram().gates().len());
    print_result("Sensors", session.diagram().sensors().len());
    print_result("Joined", !args.split);

    let backend = SimulatorBackend::new();
    print_section("Simulation");
    print_result("Backend", backend.name());
    print_result("Shots", SHOTS);

    match session.simulate(&backend).await? {
        SimulateOutcome::EmptyDiagram => {
            println!("Nothing to simulate.");
            return Ok(());
        }
        SimulateOutcome::Completed => {}
    }

    print_section("Circuit");
    if let Some(text) = session.circuit_text() {
        println!("{text}");
    }

    print_section("Sensor statistics");
    if let Some(report) = session.report() {
        println!("{report}");
    }

    Ok(())
}
