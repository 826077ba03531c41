//! Explicit enumeration of independent sets.
//!
//! Each vertex additionally occupies a marker generator that is never
//! closed, so every surviving mask spells out the vertices chosen along the
//! way. With all edges closed the final state holds one entry per
//! independent set, so the cost grows with the number of sets.

use std::fmt::Debug;
use std::hash::Hash;

use hobj_core::{HardObjects, Incidence, Result, Valued};
use hobj_order::Graph;
use hobj_rings::{Ring, Z};

use crate::hard_objects::closing_schedule;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Marker {
    Vertex(usize),
    Edge(usize),
}

/// All independent sets of `graph`, each sorted, ordered by size and then
/// lexicographically. The empty set comes first.
///
/// # Errors
///
/// Propagates engine errors; with an unbounded pool and one key per vertex
/// none are expected.
pub fn independent_sets<N>(graph: &Graph<N>) -> Result<Vec<Vec<N>>>
where
    N: Ord + Hash + Clone + Debug,
{
    let topology = graph.topology();
    let edges: Vec<Vec<usize>> = (0..topology.num_nodes())
        .map(|v| topology.incident_edges(v))
        .collect();
    let closings = closing_schedule(&edges);

    let mut engine = HardObjects::new(Valued::new(Z::one()));
    for (v, (incident, closing)) in edges.into_iter().zip(closings).enumerate() {
        let participants = std::iter::once(Marker::Vertex(v))
            .chain(incident.into_iter().map(Marker::Edge))
            .collect();
        let closing = closing.into_iter().map(Marker::Edge).collect();
        engine.apply(v, &Incidence::single(Z::one(), participants).with_closing(closing))?;
    }

    let mut sets: Vec<Vec<N>> = engine
        .configurations()
        .map(|(open, _)| {
            let mut set: Vec<N> = open
                .into_iter()
                .filter_map(|marker| match *marker {
                    Marker::Vertex(v) => Some(graph.id(v).clone()),
                    Marker::Edge(_) => None,
                })
                .collect();
            set.sort();
            set
        })
        .collect();
    sets.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    Ok(sets)
}
