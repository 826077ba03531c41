//! # hobj-core
//!
//! The hard-object algebra engine.
//!
//! A hard-object algebra is generated by commuting nilpotent elements
//! `eta_i` with `eta_i^2 = 0`. A product of distinct generators is encoded as
//! a bit mask, so a state of the computation is a map from masks to payloads
//! and multiplying by `(1 + w * eta_u * eta_v * t)` is one pass over the map
//! that drops every product touching an already set bit.
//!
//! This crate provides:
//! - [`GeneratorPool`]: binds external ids to mask bits and recycles bits
//!   as soon as an id is closed
//! - [`Mask`]: a growable bit set, inline up to 64 slots
//! - [`Incidence`]: one scheduled element (alternative choices plus the ids
//!   it closes)
//! - [`Algebra`]: the payload capability, with symbolic polynomial,
//!   valued and modular implementations
//! - [`HardObjects`]: the transition engine
//!
//! ## Example
//!
//! ```
//! use hobj_core::{HardObjects, Incidence, Symbolic};
//! use hobj_rings::{Ring, Z};
//!
//! // Path 0 - 1 - 2: two edges sharing vertex 1.
//! let mut engine: HardObjects<u32, (u32, u32), _> = HardObjects::new(Symbolic::<Z>::new());
//! engine.apply((0, 1), &Incidence::single(Z::one(), vec![0, 1]).with_closing(vec![0])).unwrap();
//! engine.apply((1, 2), &Incidence::single(Z::one(), vec![1, 2]).with_closing(vec![1, 2])).unwrap();
//! let poly = engine.into_result().unwrap();
//! assert_eq!(poly.coeffs(), &[Z::new(2), Z::new(1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod engine;
pub mod error;
pub mod incidence;
pub mod mask;
pub mod pool;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_utils;

pub use algebra::{Algebra, Modular, Symbolic, Valued};
pub use engine::{EngineStats, HardObjects};
pub use error::{HobjError, Result};
pub use incidence::{Choice, Incidence};
pub use mask::Mask;
pub use pool::{GeneratorPool, Slot, DEFAULT_CAPACITY};
