//! Linear circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};

/// An ordered sequence of operations over fixed-width quantum and
/// classical registers.
///
/// Register widths are set at construction and never grow; every builder
/// method validates its operands against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Width of the quantum register.
    num_qubits: u32,
    /// Width of the classical register.
    num_clbits: u32,
    /// Operations in emission order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with the given register widths.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                width: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_clbit(&self, clbit: ClbitId) -> IrResult<()> {
        if clbit.0 >= self.num_clbits {
            return Err(IrError::ClbitOutOfRange {
                clbit,
                width: self.num_clbits,
            });
        }
        Ok(())
    }

    fn push_single(&mut self, gate: Gate, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.instructions
            .push(Instruction::single_qubit_gate(gate, qubit));
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push_single(Gate::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push_single(Gate::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push_single(Gate::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push_single(Gate::Z, qubit)
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(IrError::DuplicateQubit { qubit: control });
        }
        self.instructions
            .push(Instruction::two_qubit_gate(Gate::CX, control, target));
        Ok(self)
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.instructions.push(Instruction::reset(qubit));
        Ok(self)
    }

    /// Measure a qubit into a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.check_clbit(clbit)?;
        self.instructions.push(Instruction::measure(qubit, clbit));
        Ok(self)
    }

    /// Measure every qubit into its same-indexed classical bit.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        for i in 0..self.num_qubits.min(self.num_clbits) {
            self.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(self)
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the quantum register width.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the classical register width.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Get the instructions in emission order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }
}
