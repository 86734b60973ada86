//! Gate markers placed on the diagram.

use quill_geom::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of placeable gate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-NOT gate; targets the next wire index.
    Cnot,
}

impl GateKind {
    /// All placeable kinds, in palette order.
    pub const ALL: [GateKind; 5] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::Cnot,
    ];

    /// Lower-case name of this kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::Cnot => "cnot",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed marker at a diagram position.
///
/// Markers are placed independent of any wire; binding to a wire is
/// derived at compile time by spatial containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateMarker {
    /// The gate type.
    pub kind: GateKind,
    /// Snapped diagram position.
    pub pos: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(GateKind::H.name(), "h");
        assert_eq!(GateKind::Cnot.name(), "cnot");
        assert_eq!(GateKind::ALL.len(), 5);
    }
}
