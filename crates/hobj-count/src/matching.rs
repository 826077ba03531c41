//! Matching-generating polynomials.
//!
//! Every edge is a hard object on its two endpoints, so the degree-`k`
//! coefficient counts `k`-edge matchings.

use std::fmt::Debug;
use std::hash::Hash;

use hobj_core::{Algebra, Result, Symbolic};
use hobj_order::{
    edge_frontier, BestSeed, Edge, EdgeOrdering, FixedEdges, Graph, GreedyEdges,
};
use hobj_poly::DensePoly;
use hobj_rings::Ring;
use log::debug;

use crate::config::{EdgeSchedule, MatchingConfig};
use crate::hard_objects::count_hard_objects;

/// Resolves the configured schedule into a dense edge order.
///
/// # Errors
///
/// [`HobjError::MalformedGraph`](hobj_core::HobjError) if a seed or an
/// explicit order does not match the graph.
pub fn edge_order<N>(graph: &Graph<N>, config: &MatchingConfig<N>) -> Result<Vec<Edge>>
where
    N: Ord + Hash + Clone + Debug,
{
    let topology = graph.topology();
    let order = match &config.schedule {
        EdgeSchedule::Greedy { seed: None } => GreedyEdges::default().order_edges(topology)?,
        EdgeSchedule::Greedy { seed: Some((u, v)) } => {
            GreedyEdges::from_seed(graph.require_edge(u, v)?).order_edges(topology)?
        }
        EdgeSchedule::BestSeed => BestSeed.order_edges(topology)?,
        EdgeSchedule::Fixed(edges) => {
            let dense = edges
                .iter()
                .map(|(u, v)| graph.require_edge(u, v))
                .collect::<Result<Vec<_>>>()?;
            FixedEdges(dense).order_edges(topology)?
        }
    };
    debug!(
        "matching schedule: {} edges, frontier {}",
        order.len(),
        edge_frontier(topology, &order)
    );
    Ok(order)
}

/// Evaluates the matching computation of `graph` in `algebra`.
///
/// # Errors
///
/// Schedule errors from [`edge_order`]; engine errors from
/// [`count_hard_objects`].
pub fn count_matchings<N, A>(
    graph: &Graph<N>,
    config: &MatchingConfig<N>,
    algebra: A,
) -> Result<A::Value>
where
    N: Ord + Hash + Clone + Debug,
    A: Algebra,
    A::Scalar: Ring,
{
    let objects: Vec<Vec<usize>> = edge_order(graph, config)?
        .into_iter()
        .map(|(a, b)| vec![a, b])
        .collect();
    count_hard_objects(&objects, algebra, config.capacity)
}

/// The matching-generating polynomial of `graph`.
///
/// # Errors
///
/// See [`count_matchings`].
pub fn matching_poly<R, N>(graph: &Graph<N>, config: &MatchingConfig<N>) -> Result<DensePoly<R>>
where
    R: Ring,
    N: Ord + Hash + Clone + Debug,
{
    count_matchings(graph, config, Symbolic::<R>::new())
}

/// Converts a matching-generating polynomial `sum m_k t^k` of a graph on
/// `num_nodes` nodes into the matching polynomial
/// `mu(x) = sum (-1)^k m_k x^(n - 2k)`.
///
/// Terms with `2k > n` cannot come from a graph and are dropped.
#[must_use]
pub fn matching_polynomial<R: Ring>(generating: &DensePoly<R>, num_nodes: usize) -> DensePoly<R> {
    // highest degree first: index i holds x^(n - i)
    let mut coeffs = vec![R::zero(); num_nodes + 1];
    for (k, m) in generating.coeffs().iter().rev().enumerate() {
        if 2 * k > num_nodes {
            break;
        }
        coeffs[2 * k] = if k % 2 == 0 { m.clone() } else { -m.clone() };
    }
    DensePoly::new(coeffs)
}
