//! Statevector evolution for the sketch gate set.

use num_complex::Complex64;
use rand::Rng;

use quill_ir::Gate;

/// A statevector representing a quantum state.
///
/// Qubit `q` corresponds to bit `q` of the amplitude index.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Apply a gate from the sketch set.
    pub fn apply_gate(&mut self, gate: Gate, qubits: &[usize]) {
        match gate {
            Gate::H => self.apply_h(qubits[0]),
            Gate::X => self.apply_x(qubits[0]),
            Gate::Y => self.apply_y(qubits[0]),
            Gate::Z => self.apply_z(qubits[0]),
            Gate::CX => self.apply_cx(qubits[0], qubits[1]),
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Project `qubit` to |0⟩ and renormalize.
    pub fn reset(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let mut norm_sq = 0.0;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                let j = i & !mask;
                let val = self.amplitudes[i];
                self.amplitudes[j] += val;
                self.amplitudes[i] = Complex64::new(0.0, 0.0);
            }
            norm_sq += self.amplitudes[i].norm_sqr();
        }
        let norm = norm_sq.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }
    }

    /// Measure `qubit`: sample an outcome, collapse the state, and
    /// return the measured bit.
    pub fn measure(&mut self, qubit: usize, rng: &mut impl Rng) -> u8 {
        let mask = 1 << qubit;
        let prob_one: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let outcome = u8::from(rng.r#gen::<f64>() < prob_one);

        // Zero the amplitudes inconsistent with the outcome, renormalize.
        let keep_one = outcome == 1;
        let mut norm_sq = 0.0;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) != keep_one {
                *amp = Complex64::new(0.0, 0.0);
            }
            norm_sq += amp.norm_sqr();
        }
        let norm = norm_sq.sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }

        outcome
    }

    #[cfg(test)]
    fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }
}
