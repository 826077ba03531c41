//! # hobj-integers
//!
//! Exact scalar arithmetic for hard-object counting.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Euclidean residues modulo a machine-word modulus, used by the
//!   modular evaluation path
//!
//! Coefficients of matching and independence polynomials overflow 64 bits
//! quickly (a 10×10 grid already has more than `2^60` independent sets), so
//! every symbolic result is carried in these types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
