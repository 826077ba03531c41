//! # hobj-order
//!
//! Graph input and element scheduling for hard-object computations.
//!
//! The engine's cost grows with `2^f` where `f` is the number of ids open at
//! once, so the order in which edges or vertices are fed to it matters far
//! more than anything else. This crate provides:
//! - [`Graph`]: validated, relabelled adjacency over any ordered id type
//! - [`Topology`]: the dense `0..n` view the schedulers work on
//! - Greedy bridging orders for edges and vertices, plus an exhaustive
//!   best-seed search
//! - Frontier metrics for any order
//!
//! Orders are produced through the [`EdgeOrdering`] and [`VertexOrdering`]
//! traits so callers can plug in their own heuristics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bridging;
pub mod frontier;
pub mod graph;
pub mod strategy;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod proptests;

pub use frontier::{edge_frontier, vertex_frontier};
pub use graph::{Edge, Graph, Topology};
pub use strategy::{
    BestSeed, EdgeOrdering, FixedEdges, FixedVertices, GreedyEdges, GreedyVertices, SeedChoice,
    VertexOrdering,
};
