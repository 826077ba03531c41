//! Independence polynomials.
//!
//! Every vertex is an element whose participants are its incident edge
//! indices: two chosen vertices collide exactly when they share an edge.
//! Elements are keyed by vertex, since distinct vertices may have the same
//! incident edge set (the two ends of an isolated edge, or two isolated
//! vertices).

use std::fmt::Debug;
use std::hash::Hash;

use hobj_core::{Algebra, HardObjects, Incidence, Result, Symbolic};
use hobj_order::{vertex_frontier, FixedVertices, Graph, GreedyVertices, VertexOrdering};
use hobj_poly::DensePoly;
use hobj_rings::Ring;
use log::debug;

use crate::config::{IndependenceConfig, VertexSchedule};
use crate::hard_objects::closing_schedule;

/// Resolves the configured schedule into a dense vertex order.
///
/// # Errors
///
/// [`HobjError::MalformedGraph`](hobj_core::HobjError) if a seed path or an
/// explicit order does not match the graph.
pub fn vertex_order<N>(graph: &Graph<N>, config: &IndependenceConfig<N>) -> Result<Vec<usize>>
where
    N: Ord + Hash + Clone + Debug,
{
    let topology = graph.topology();
    let dense = |ids: &[N]| ids.iter().map(|id| graph.require(id)).collect::<Result<Vec<_>>>();
    let order = match &config.schedule {
        VertexSchedule::Greedy { seed_path: None } => {
            GreedyVertices::default().order_vertices(topology)?
        }
        VertexSchedule::Greedy {
            seed_path: Some(path),
        } => GreedyVertices::from_path(dense(path)?).order_vertices(topology)?,
        VertexSchedule::Fixed(ids) => FixedVertices(dense(ids)?).order_vertices(topology)?,
    };
    debug!(
        "independence schedule: {} vertices, frontier {}",
        order.len(),
        vertex_frontier(topology, &order)
    );
    Ok(order)
}

/// Evaluates the independence computation of `graph` in `algebra`.
///
/// # Errors
///
/// Schedule errors from [`vertex_order`]; [`HobjError::DuplicateElement`]
/// for a vertex listed twice in a fixed order;
/// [`HobjError::PoolExhausted`] if more than `config.capacity` edges are
/// open at once.
///
/// [`HobjError::DuplicateElement`]: hobj_core::HobjError::DuplicateElement
/// [`HobjError::PoolExhausted`]: hobj_core::HobjError::PoolExhausted
pub fn count_independent_sets<N, A>(
    graph: &Graph<N>,
    config: &IndependenceConfig<N>,
    algebra: A,
) -> Result<A::Value>
where
    N: Ord + Hash + Clone + Debug,
    A: Algebra,
    A::Scalar: Ring,
{
    let topology = graph.topology();
    let order = vertex_order(graph, config)?;
    let objects: Vec<Vec<usize>> = order.iter().map(|&v| topology.incident_edges(v)).collect();
    let closings = closing_schedule(&objects);

    let mut engine: HardObjects<usize, usize, A> =
        HardObjects::with_capacity(algebra, config.capacity);
    for ((&vertex, edges), closing) in order.iter().zip(objects).zip(closings) {
        let incidence = Incidence::single(<A::Scalar as Ring>::one(), edges).with_closing(closing);
        engine.apply(vertex, &incidence)?;
    }
    engine.into_result()
}

/// The independence polynomial of `graph`.
///
/// # Errors
///
/// See [`count_independent_sets`].
pub fn independence_poly<R, N>(
    graph: &Graph<N>,
    config: &IndependenceConfig<N>,
) -> Result<DensePoly<R>>
where
    R: Ring,
    N: Ord + Hash + Clone + Debug,
{
    count_independent_sets(graph, config, Symbolic::<R>::new())
}
