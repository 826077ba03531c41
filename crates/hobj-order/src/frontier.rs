//! Frontier metrics.
//!
//! The frontier of an order is the largest number of ids the engine keeps
//! open at once while following it; the engine state has up to `2^frontier`
//! entries.

use rustc_hash::FxHashSet;

use crate::graph::{Edge, Topology};

/// Largest number of partially covered nodes along an edge order.
///
/// A node is partially covered when some but not all of its edges have been
/// scheduled; those are exactly the vertices open in a matching computation.
#[must_use]
pub fn edge_frontier(topology: &Topology, order: &[Edge]) -> usize {
    let mut covered = vec![0usize; topology.num_nodes()];
    let mut active = 0usize;
    let mut peak = 0;

    for &(a, b) in order {
        for node in [a, b] {
            let degree = topology.degree(node);
            covered[node] += 1;
            if covered[node] == 1 && degree > 1 {
                active += 1;
            } else if covered[node] == degree && degree > 1 {
                active -= 1;
            }
        }
        peak = peak.max(active);
    }
    peak
}

/// Largest number of half-processed edges along a vertex order.
///
/// An edge is half-processed when exactly one of its endpoints has been
/// visited; those are the edge indices open in an independence computation.
#[must_use]
pub fn vertex_frontier(topology: &Topology, order: &[usize]) -> usize {
    let mut open = FxHashSet::default();
    let mut peak = 0;

    for &node in order {
        for edge in topology.incident_edges(node) {
            if !open.remove(&edge) {
                open.insert(edge);
            }
        }
        peak = peak.max(open.len());
    }
    peak
}
