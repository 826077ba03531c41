//! Dense univariate polynomials.

use hobj_rings::traits::Ring;

use crate::algorithms::karatsuba::{karatsuba_mul, schoolbook_mul, KARATSUBA_THRESHOLD};

/// A dense univariate polynomial in `t`.
///
/// Coefficients are stored highest degree first with no leading zero, so the
/// constant term is always last and the zero polynomial is the empty
/// sequence. Multiplying by `t` is a push at the tail.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from highest-degree-first coefficients, dropping
    /// leading zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        let lead = coeffs.iter().take_while(|c| c.is_zero()).count();
        coeffs.drain(..lead);
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// The monomial `c * t^n`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = Vec::with_capacity(n + 1);
        coeffs.push(c);
        coeffs.resize(n + 1, R::zero());
        Self { coeffs }
    }

    /// The degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.first()
    }

    /// The coefficient of `t^k`.
    #[must_use]
    pub fn coeff(&self, k: usize) -> R {
        self.coeffs
            .len()
            .checked_sub(k + 1)
            .map_or_else(R::zero, |i| self.coeffs[i].clone())
    }

    /// Coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients highest degree
    /// first.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Evaluates at `x` using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.add_assign(other);
        out
    }

    /// Adds `other` into `self`, padding the shorter operand with zero
    /// high-order terms.
    pub fn add_assign(&mut self, other: &Self) {
        if other.coeffs.len() > self.coeffs.len() {
            let pad = other.coeffs.len() - self.coeffs.len();
            self.coeffs.splice(0..0, std::iter::repeat(R::zero()).take(pad));
        }
        let offset = self.coeffs.len() - other.coeffs.len();
        for (slot, c) in self.coeffs[offset..].iter_mut().zip(&other.coeffs) {
            *slot = slot.clone() + c.clone();
        }
        self.trim();
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Multiplies by `t^n`.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        self.clone().into_shifted(n)
    }

    /// Multiplies by `t^n`, reusing the buffer.
    #[must_use]
    pub fn into_shifted(mut self, n: usize) -> Self {
        if !self.is_zero() {
            self.coeffs.resize(self.coeffs.len() + n, R::zero());
        }
        self
    }

    /// Multiplies two polynomials.
    ///
    /// Direct convolution while the smaller operand has degree below
    /// [`KARATSUBA_THRESHOLD`], Karatsuba otherwise.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if self.coeffs.len().min(other.coeffs.len()) <= KARATSUBA_THRESHOLD {
            self.mul_schoolbook(other)
        } else {
            self.mul_karatsuba(other)
        }
    }

    /// Direct O(n·m) product.
    #[must_use]
    pub fn mul_schoolbook(&self, other: &Self) -> Self {
        Self::new(schoolbook_mul(&self.coeffs, &other.coeffs))
    }

    /// Karatsuba product, regardless of operand size.
    #[must_use]
    pub fn mul_karatsuba(&self, other: &Self) -> Self {
        Self::new(karatsuba_mul(&self.coeffs, &other.coeffs))
    }

    fn trim(&mut self) {
        let lead = self.coeffs.iter().take_while(|c| c.is_zero()).count();
        if lead > 0 {
            self.coeffs.drain(..lead);
        }
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let top = self.coeffs.len() - 1;
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match top - i {
                0 => format!("{c}"),
                1 => format!("{c}*t"),
                k => format!("{c}*t^{k}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
