//! Pluggable ordering strategies.
//!
//! The assemblers take any [`EdgeOrdering`] or [`VertexOrdering`]; the
//! greedy bridging schedulers are the defaults.

use std::fmt::Debug;

use hobj_core::{HobjError, Result};
use log::debug;

use crate::bridging::{greedy_edge_order, greedy_vertex_order};
use crate::frontier::{edge_frontier, vertex_frontier};
use crate::graph::{Edge, Topology};

/// Produces an order over all edges of a topology.
pub trait EdgeOrdering: Debug {
    /// Returns a permutation of `topology.edges()`.
    ///
    /// # Errors
    ///
    /// [`HobjError::MalformedGraph`] if the strategy's parameters do not fit
    /// the topology.
    fn order_edges(&self, topology: &Topology) -> Result<Vec<Edge>>;
}

/// Produces an order over all nodes of a topology.
pub trait VertexOrdering: Debug {
    /// Returns a permutation of `0..topology.num_nodes()`.
    ///
    /// # Errors
    ///
    /// [`HobjError::MalformedGraph`] if the strategy's parameters do not fit
    /// the topology.
    fn order_vertices(&self, topology: &Topology) -> Result<Vec<usize>>;
}

/// Greedy bridging from a seed edge (default: the smallest edge).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyEdges {
    /// Seed edge in dense indices.
    pub seed: Option<Edge>,
}

impl GreedyEdges {
    /// Greedy bridging from `seed`.
    #[must_use]
    pub fn from_seed(seed: Edge) -> Self {
        Self { seed: Some(seed) }
    }
}

impl EdgeOrdering for GreedyEdges {
    fn order_edges(&self, topology: &Topology) -> Result<Vec<Edge>> {
        let Some(&first) = topology.edges().first() else {
            return Ok(Vec::new());
        };
        let seed = match self.seed {
            Some((a, b)) if topology.has_edge(a, b) => (a.min(b), a.max(b)),
            Some(seed) => {
                return Err(HobjError::MalformedGraph(format!(
                    "seed {seed:?} is not an edge"
                )))
            }
            None => first,
        };
        Ok(greedy_edge_order(topology, seed))
    }
}

/// The outcome of a best-seed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedChoice {
    /// The winning seed edge.
    pub seed: Edge,
    /// The order it produces.
    pub order: Vec<Edge>,
    /// Its edge frontier.
    pub frontier: usize,
}

/// Greedy bridging from every edge, keeping the smallest frontier.
///
/// Ties keep the earliest seed in edge order. Costs one greedy run per edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestSeed;

impl BestSeed {
    /// Runs the search; `None` for a graph without edges.
    #[must_use]
    pub fn search(topology: &Topology) -> Option<SeedChoice> {
        let mut best: Option<SeedChoice> = None;
        for &seed in topology.edges() {
            let order = greedy_edge_order(topology, seed);
            let frontier = edge_frontier(topology, &order);
            if best.as_ref().map_or(true, |b| frontier < b.frontier) {
                best = Some(SeedChoice {
                    seed,
                    order,
                    frontier,
                });
            }
        }
        if let Some(choice) = &best {
            debug!(
                "best seed {:?} with frontier {} over {} candidates",
                choice.seed,
                choice.frontier,
                topology.num_edges()
            );
        }
        best
    }
}

impl EdgeOrdering for BestSeed {
    fn order_edges(&self, topology: &Topology) -> Result<Vec<Edge>> {
        Ok(Self::search(topology).map(|c| c.order).unwrap_or_default())
    }
}

/// A caller-supplied edge order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedEdges(pub Vec<Edge>);

impl EdgeOrdering for FixedEdges {
    fn order_edges(&self, topology: &Topology) -> Result<Vec<Edge>> {
        let mut seen = vec![false; topology.num_edges()];
        let mut order = Vec::with_capacity(self.0.len());
        for &(a, b) in &self.0 {
            let index = topology.edge_index(a, b).ok_or_else(|| {
                HobjError::MalformedGraph(format!("({a}, {b}) is not an edge"))
            })?;
            // repeats are left for the engine to reject as duplicates
            seen[index] = true;
            order.push((a.min(b), a.max(b)));
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(HobjError::MalformedGraph(format!(
                "edge order misses {:?}",
                topology.edges()[missing]
            )));
        }
        Ok(order)
    }
}

/// Greedy bridging from a seed path (default: the smallest node with a
/// neighbour, followed by its smallest neighbour).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyVertices {
    /// Seed path in dense indices; consecutive nodes must be adjacent.
    pub seed_path: Option<Vec<usize>>,
}

impl GreedyVertices {
    /// Greedy bridging from `path`.
    #[must_use]
    pub fn from_path(path: Vec<usize>) -> Self {
        Self {
            seed_path: Some(path),
        }
    }
}

impl VertexOrdering for GreedyVertices {
    fn order_vertices(&self, topology: &Topology) -> Result<Vec<usize>> {
        let path = match &self.seed_path {
            Some(path) => {
                validate_path(topology, path)?;
                path.clone()
            }
            None => match topology.edges().first() {
                Some(&(a, b)) => vec![a, b],
                None => return Ok((0..topology.num_nodes()).collect()),
            },
        };
        let order = greedy_vertex_order(topology, &path);
        debug!(
            "vertex order over {} nodes has frontier {}",
            order.len(),
            vertex_frontier(topology, &order)
        );
        Ok(order)
    }
}

fn validate_path(topology: &Topology, path: &[usize]) -> Result<()> {
    let n = topology.num_nodes();
    if let Some(&bad) = path.iter().find(|&&k| k >= n) {
        return Err(HobjError::MalformedGraph(format!("unknown node {bad}")));
    }
    let mut seen = vec![false; n];
    for &k in path {
        if std::mem::replace(&mut seen[k], true) {
            return Err(HobjError::MalformedGraph(format!(
                "seed path visits {k} twice"
            )));
        }
    }
    if let Some(pair) = path.windows(2).find(|w| !topology.has_edge(w[0], w[1])) {
        return Err(HobjError::MalformedGraph(format!(
            "seed path step {} -> {} is not an edge",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

/// A caller-supplied vertex order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedVertices(pub Vec<usize>);

impl VertexOrdering for FixedVertices {
    fn order_vertices(&self, topology: &Topology) -> Result<Vec<usize>> {
        let n = topology.num_nodes();
        let mut seen = vec![false; n];
        for &k in &self.0 {
            if k >= n {
                return Err(HobjError::MalformedGraph(format!("unknown node {k}")));
            }
            seen[k] = true;
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(HobjError::MalformedGraph(format!(
                "vertex order misses node {missing}"
            )));
        }
        Ok(self.0.clone())
    }
}
