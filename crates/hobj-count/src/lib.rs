//! # hobj-count
//!
//! Enumeration polynomials of graphs and matrices.
//!
//! This crate turns graphs and matrices into scheduled elements for the
//! hard-object engine:
//! - Matching-generating polynomial: one element per edge
//! - Independence polynomial: one element per vertex, occupying its edges
//! - Permanental-minor polynomial: one element per matrix row, choosing at
//!   most one column
//! - Generic hard objects: configurations of tuples sharing no element
//! - Enumeration of independent sets on small graphs
//!
//! Every computation is generic over the payload [`Algebra`]: the
//! symbolic path yields a polynomial, the valued and modular paths evaluate
//! it at a point without ever building it.
//!
//! ## Example
//!
//! ```
//! use hobj_count::{matching_poly, MatchingConfig};
//! use hobj_order::Graph;
//! use hobj_rings::Z;
//!
//! let c5 = Graph::new((0..5).map(|i| (i, vec![(i + 1) % 5, (i + 4) % 5]))).unwrap();
//! let poly = matching_poly::<Z, _>(&c5, &MatchingConfig::default()).unwrap();
//! assert_eq!(poly.coeffs(), &[Z::new(5), Z::new(5), Z::new(1)]);
//! ```
//!
//! [`Algebra`]: hobj_core::Algebra

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod enumerate;
pub mod hard_objects;
pub mod independence;
pub mod matching;
pub mod permanental;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_utils;

pub use config::{
    EdgeSchedule, IndependenceConfig, MatchingConfig, PermanentalConfig, VertexSchedule,
};
pub use enumerate::independent_sets;
pub use hard_objects::{closing_schedule, count_hard_objects};
pub use independence::{count_independent_sets, independence_poly, vertex_order};
pub use matching::{count_matchings, edge_order, matching_poly, matching_polynomial};
pub use permanental::{count_permanental_minors, permanental_minor_poly};
