//! Polynomial multiplication kernels on raw coefficient slices.

pub mod karatsuba;

pub use karatsuba::{karatsuba_mul, schoolbook_mul, KARATSUBA_THRESHOLD};
