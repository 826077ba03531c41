//! # hobj-poly
//!
//! Dense univariate polynomial arithmetic for hard-object counting.
//!
//! This crate provides:
//! - `DensePoly<R>`: coefficients stored highest degree first, no leading
//!   zeros, the zero polynomial is the empty sequence
//! - Karatsuba multiplication for large operands
//! - In-place accumulation and shifting used by the counting engine
//!
//! ## Algorithm Selection
//!
//! - Smaller operand of degree below 100: direct convolution O(n·m)
//! - Otherwise: Karatsuba split at half the longer length, O(n^1.58)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
