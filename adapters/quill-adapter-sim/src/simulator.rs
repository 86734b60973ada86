//! Simulator backend implementation.

use std::time::Instant;

use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, instrument};

use quill_hal::{Backend, Counts, ExecutionResult, HalError, HalResult};
use quill_ir::{Circuit, InstructionKind};

use crate::statevector::Statevector;

/// Local statevector backend.
///
/// Runs each shot as an independent statevector evolution, sampling
/// measurements as they occur. Supports circuits up to ~20 qubits
/// (limited by memory).
pub struct SimulatorBackend {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self { max_qubits: 20 }
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    /// Run one shot and return its classical register as a bitstring.
    ///
    /// Classical bit 0 lands at string position 0; unwritten bits read
    /// as '0'.
    fn run_shot(&self, circuit: &Circuit, rng: &mut impl Rng) -> String {
        let mut sv = Statevector::new(circuit.num_qubits() as usize);
        let mut creg = vec![b'0'; circuit.num_clbits() as usize];

        for inst in circuit.instructions() {
            match inst.kind {
                InstructionKind::Gate(gate) => {
                    let qubits: Vec<usize> =
                        inst.qubits.iter().map(|q| q.0 as usize).collect();
                    sv.apply_gate(gate, &qubits);
                }
                InstructionKind::Reset => sv.reset(inst.qubits[0].0 as usize),
                InstructionKind::Measure => {
                    let bit = sv.measure(inst.qubits[0].0 as usize, rng);
                    creg[inst.clbits[0].0 as usize] = b'0' + bit;
                }
            }
        }

        creg.iter().map(|&b| b as char).collect()
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        "simulator"
    }

    #[instrument(skip(self, circuit))]
    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        if shots == 0 {
            return Err(HalError::InvalidShots(shots));
        }
        if circuit.num_qubits() > self.max_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }

        let start = Instant::now();
        debug!(
            qubits = circuit.num_qubits(),
            instructions = circuit.len(),
            shots,
            "starting simulation"
        );

        let mut rng = rand::thread_rng();
        let mut counts = Counts::new();
        for _ in 0..shots {
            counts.add(self.run_shot(circuit, &mut rng));
        }

        let elapsed = start.elapsed();
        debug!("simulation completed in {elapsed:?}");

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }
}
