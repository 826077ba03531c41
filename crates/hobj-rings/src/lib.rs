//! # hobj-rings
//!
//! Coefficient rings for hard-object counting.
//!
//! This crate provides:
//! - The `Ring` trait every polynomial coefficient satisfies
//! - The `Residue` trait mapping ring elements into `Z/pZ`
//! - Concrete rings: Z (exact integers) and Q (exact rationals)
//! - Word-sized modular helpers used by the modular evaluation path
//!
//! Z and Q are interchangeable everywhere a `Ring` is accepted; the counting
//! engine never inspects coefficients beyond these traits.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod modular;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{Residue, Ring};
