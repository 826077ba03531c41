//! Payload capabilities of the engine.
//!
//! The transition only needs four things from a payload: a unit, scaling by
//! a prepared weight, advancing by one object (multiplying by `t` or by an
//! evaluation point) and in-place accumulation. Three payloads implement
//! them:
//!
//! | algebra | payload | advance |
//! |---|---|---|
//! | [`Symbolic`] | `DensePoly<R>` | multiply by `t` |
//! | [`Valued`] | `R` | multiply by the point |
//! | [`Modular`] | residue `u64` | multiply by the point mod `p` |

use std::fmt;
use std::marker::PhantomData;

use hobj_poly::DensePoly;
use hobj_rings::modular::{add_mod, mul_mod};
use hobj_rings::{Residue, Ring};

use crate::error::{HobjError, Result};

/// Payload arithmetic for [`HardObjects`](crate::HardObjects).
pub trait Algebra {
    /// Weights as supplied by callers.
    type Scalar;
    /// Weights after conversion into the payload domain.
    type Weight;
    /// The per-mask payload.
    type Value: Clone + fmt::Debug;

    /// The payload of the initial empty-mask entry.
    fn unit(&self) -> Self::Value;

    /// Converts a caller weight into the payload domain.
    ///
    /// # Errors
    ///
    /// [`HobjError::DomainMismatch`] if the weight has no image.
    fn weight(&self, scalar: &Self::Scalar) -> Result<Self::Weight>;

    /// `value * weight`.
    fn scale(&self, value: &Self::Value, weight: &Self::Weight) -> Self::Value;

    /// Accounts for one more object in the configuration.
    fn advance(&self, value: Self::Value) -> Self::Value;

    /// `acc += value`.
    fn accumulate(&self, acc: &mut Self::Value, value: Self::Value);

    /// The additive identity, used when summing an empty state.
    fn zero(&self) -> Self::Value;
}

/// Generating polynomials over a ring `R`.
pub struct Symbolic<R> {
    _ring: PhantomData<R>,
}

impl<R: Ring> Symbolic<R> {
    /// Creates the symbolic algebra.
    #[must_use]
    pub fn new() -> Self {
        Self { _ring: PhantomData }
    }
}

impl<R: Ring> Default for Symbolic<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Symbolic<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Symbolic")
    }
}

impl<R: Ring> Algebra for Symbolic<R> {
    type Scalar = R;
    type Weight = R;
    type Value = DensePoly<R>;

    fn unit(&self) -> DensePoly<R> {
        DensePoly::one()
    }

    fn weight(&self, scalar: &R) -> Result<R> {
        Ok(scalar.clone())
    }

    fn scale(&self, value: &DensePoly<R>, weight: &R) -> DensePoly<R> {
        if weight.is_one() {
            value.clone()
        } else {
            value.scale(weight)
        }
    }

    fn advance(&self, value: DensePoly<R>) -> DensePoly<R> {
        value.into_shifted(1)
    }

    fn accumulate(&self, acc: &mut DensePoly<R>, value: DensePoly<R>) {
        if acc.is_zero() {
            *acc = value;
        } else {
            acc.add_assign(&value);
        }
    }

    fn zero(&self) -> DensePoly<R> {
        DensePoly::zero()
    }
}

/// Evaluation of the generating polynomial at a fixed point of `R`.
#[derive(Clone, Debug)]
pub struct Valued<R> {
    point: R,
}

impl<R: Ring> Valued<R> {
    /// Evaluates at `point`.
    #[must_use]
    pub fn new(point: R) -> Self {
        Self { point }
    }

    /// The evaluation point.
    #[must_use]
    pub fn point(&self) -> &R {
        &self.point
    }
}

impl<R: Ring> Algebra for Valued<R> {
    type Scalar = R;
    type Weight = R;
    type Value = R;

    fn unit(&self) -> R {
        R::one()
    }

    fn weight(&self, scalar: &R) -> Result<R> {
        Ok(scalar.clone())
    }

    fn scale(&self, value: &R, weight: &R) -> R {
        value.clone() * weight.clone()
    }

    fn advance(&self, value: R) -> R {
        value * self.point.clone()
    }

    fn accumulate(&self, acc: &mut R, value: R) {
        let current = std::mem::replace(acc, R::zero());
        *acc = current + value;
    }

    fn zero(&self) -> R {
        R::zero()
    }
}

/// Evaluation at a point, reduced modulo `modulus` after every operation.
///
/// Weights are mapped through [`Residue`], so rational weights work as long
/// as their denominators are invertible.
pub struct Modular<R> {
    modulus: u64,
    point: u64,
    _ring: PhantomData<R>,
}

impl<R: Residue> Modular<R> {
    /// Evaluates at `point` modulo `modulus` (expected prime).
    ///
    /// # Errors
    ///
    /// [`HobjError::DomainMismatch`] if `modulus < 2` or `point` has no
    /// residue.
    pub fn new(point: &R, modulus: u64) -> Result<Self> {
        if modulus < 2 {
            return Err(HobjError::DomainMismatch(format!(
                "modulus {modulus} is not a prime"
            )));
        }
        let point = point.residue(modulus).ok_or_else(|| {
            HobjError::DomainMismatch(format!("point {point:?} has no residue mod {modulus}"))
        })?;
        Ok(Self {
            modulus,
            point,
            _ring: PhantomData,
        })
    }

    /// The modulus.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The evaluation point as a residue.
    #[must_use]
    pub fn point(&self) -> u64 {
        self.point
    }
}

impl<R> fmt::Debug for Modular<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modular")
            .field("modulus", &self.modulus)
            .field("point", &self.point)
            .finish()
    }
}

impl<R: Residue> Algebra for Modular<R> {
    type Scalar = R;
    type Weight = u64;
    type Value = u64;

    fn unit(&self) -> u64 {
        1 % self.modulus
    }

    fn weight(&self, scalar: &R) -> Result<u64> {
        scalar.residue(self.modulus).ok_or_else(|| {
            HobjError::DomainMismatch(format!(
                "weight {scalar:?} has no residue mod {}",
                self.modulus
            ))
        })
    }

    fn scale(&self, value: &u64, weight: &u64) -> u64 {
        mul_mod(*value, *weight, self.modulus)
    }

    fn advance(&self, value: u64) -> u64 {
        mul_mod(value, self.point, self.modulus)
    }

    fn accumulate(&self, acc: &mut u64, value: u64) {
        *acc = add_mod(*acc, value, self.modulus);
    }

    fn zero(&self) -> u64 {
        0
    }
}
