//! # hobj
//!
//! Exact enumeration polynomials of graphs and matrices, computed by
//! sweeping a state of occupancy masks over a nilpotent "hard-object"
//! algebra.
//!
//! ## Features
//!
//! - **Matchings**: the matching-generating polynomial and the matching
//!   polynomial `mu(x)`
//! - **Independent sets**: the independence polynomial, plus explicit
//!   enumeration for small graphs
//! - **Permanental minors**: sums of permanents of all square minors
//! - **Three payloads**: full polynomials, values at a point, or residues
//!   modulo a prime
//! - **Scheduling**: greedy bridging orders that keep the open frontier
//!   small
//!
//! ## Quick Start
//!
//! ```rust
//! use hobj::prelude::*;
//!
//! let square = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let poly = independence_poly::<Z, _>(&square, &IndependenceConfig::default()).unwrap();
//! assert_eq!(poly.to_string(), "2*t^2 + 4*t + 1");
//!
//! let at_two = count_matchings(&square, &MatchingConfig::default(), Valued::new(Z::new(2)));
//! assert_eq!(at_two.unwrap(), Z::new(17));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use hobj_core as core;
pub use hobj_count as count;
pub use hobj_integers as integers;
pub use hobj_order as order;
pub use hobj_poly as poly;
pub use hobj_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use hobj_core::{
        Algebra, HardObjects, HobjError, Incidence, Modular, Symbolic, Valued,
    };
    pub use hobj_count::{
        count_hard_objects, count_independent_sets, count_matchings,
        count_permanental_minors, independence_poly, independent_sets, matching_poly,
        matching_polynomial, permanental_minor_poly, EdgeSchedule, IndependenceConfig,
        MatchingConfig, PermanentalConfig, VertexSchedule,
    };
    pub use hobj_integers::{Integer, Rational};
    pub use hobj_order::Graph;
    pub use hobj_poly::DensePoly;
    pub use hobj_rings::{Ring, Q, Z};
}
