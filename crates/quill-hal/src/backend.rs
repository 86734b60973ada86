//! Backend trait: the execution engine boundary.
//!
//! # Contract
//!
//! ```text
//!   execute(circuit, shots) ──→ Counts (values sum to shots)
//! ```
//!
//! - Execution is blocking from the caller's perspective; no timeout or
//!   cancellation is defined. A hang in the engine hangs the cycle.
//! - The caller runs at most one execution at a time; backends do not
//!   need to queue.
//! - Returned counts MUST sum to the requested shot count.

use async_trait::async_trait;

use quill_ir::Circuit;

use crate::error::HalResult;
use crate::result::ExecutionResult;

/// Trait for circuit execution engines.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Execute `circuit` for `shots` independent shots and return the
    /// aggregate bitstring counts.
    async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Counts;

    struct UniformBackend;

    #[async_trait]
    impl Backend for UniformBackend {
        fn name(&self) -> &str {
            "uniform"
        }

        async fn execute(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
            let mut counts = Counts::new();
            let zeros = "0".repeat(circuit.num_clbits() as usize);
            counts.insert(zeros, u64::from(shots));
            Ok(ExecutionResult::new(counts, shots))
        }
    }

    #[tokio::test]
    async fn test_backend_object_safety() {
        let backend: Box<dyn Backend> = Box::new(UniformBackend);
        let circuit = Circuit::bell().unwrap();

        let result = backend.execute(&circuit, 100).await.unwrap();
        assert_eq!(backend.name(), "uniform");
        assert_eq!(result.counts.total(), 100);
        assert_eq!(result.counts.get("00"), 100);
    }
}
