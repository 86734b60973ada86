//! Wire connectivity from endpoint proximity.
//!
//! Wires are drawn as disconnected strokes; electrical continuity is
//! inferred from endpoint coincidence alone, making this module the only
//! source of truth for "which strokes form one logical line". The
//! resolved groups decide reset and traversal order during compilation;
//! they do not renumber qubit indices.

use quill_geom::{ENDPOINT_THRESHOLD, is_near};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::wire::Wire;

/// Undirected adjacency between wires whose endpoints coincide.
///
/// Entry `i` holds every other wire index with a first or last point
/// within [`ENDPOINT_THRESHOLD`] of wire `i`'s first or last point (all
/// four combinations are tested). The relation is symmetric by
/// construction.
pub fn wire_adjacency(wires: &[Wire]) -> Vec<FxHashSet<usize>> {
    let mut adjacency = vec![FxHashSet::default(); wires.len()];
    for (i, a) in wires.iter().enumerate() {
        for (j, b) in wires.iter().enumerate() {
            if i == j {
                continue;
            }
            let touching = [a.first(), a.last()].into_iter().any(|p| {
                [b.first(), b.last()]
                    .into_iter()
                    .any(|q| is_near(p, q, ENDPOINT_THRESHOLD))
            });
            if touching {
                adjacency[i].insert(j);
            }
        }
    }
    debug!(wires = wires.len(), "resolved wire adjacency");
    adjacency
}

/// All wire indices transitively reachable from `seed`, `seed` included.
///
/// Stack-based reachability over the adjacency relation; each wire is
/// visited at most once. The result is sorted ascending — the order the
/// compiler processes a group in.
pub fn connected_group(seed: usize, adjacency: &[FxHashSet<usize>]) -> Vec<usize> {
    let mut seen = FxHashSet::default();
    seen.insert(seed);
    let mut stack = vec![seed];

    while let Some(current) = stack.pop() {
        for &next in &adjacency[current] {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }

    let mut group: Vec<usize> = seen.into_iter().collect();
    group.sort_unstable();
    group
}
