//! Karatsuba multiplication on highest-degree-first coefficient slices.
//!
//! Convolution commutes with reversing both operands, so the direct kernel is
//! the same for either storage order. The divide-and-conquer kernel splits
//! off the low-order half, i.e. the tail of each slice.

use hobj_rings::traits::Ring;

/// Direct convolution is used while the smaller operand has degree below
/// this bound.
pub const KARATSUBA_THRESHOLD: usize = 100;

/// Multiplies two coefficient slices, recursing with Karatsuba when both are
/// large.
///
/// An empty slice is the zero polynomial and yields an empty product.
pub fn karatsuba_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) <= KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let half = a.len().max(b.len()) / 2;
    let (a_hi, a_lo) = split_low(a, half);
    let (b_hi, b_lo) = split_low(b, half);

    let lo = karatsuba_mul(a_lo, b_lo);
    let hi = karatsuba_mul(a_hi, b_hi);
    let mid = karatsuba_mul(&sum_aligned(a_lo, a_hi), &sum_aligned(b_lo, b_hi));

    // a*b = hi*t^(2h) + (mid - hi - lo)*t^h + lo
    let mut out = vec![R::zero(); a.len() + b.len() - 1];
    add_at(&mut out, &lo, 0);
    add_at(&mut out, &hi, 2 * half);
    add_at(&mut out, &mid, half);
    sub_at(&mut out, &lo, half);
    sub_at(&mut out, &hi, half);
    out
}

/// Direct O(n·m) convolution.
pub fn schoolbook_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![R::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            let slot = &mut out[i + j];
            *slot = slot.clone() + x.clone() * y.clone();
        }
    }
    out
}

/// Splits `f` into `(high, low)` where `low` holds the `k` lowest-order
/// coefficients.
fn split_low<R>(f: &[R], k: usize) -> (&[R], &[R]) {
    if f.len() <= k {
        (&[], f)
    } else {
        f.split_at(f.len() - k)
    }
}

/// Adds two slices aligned at their constant terms.
fn sum_aligned<R: Ring>(f: &[R], g: &[R]) -> Vec<R> {
    let (long, short) = if f.len() >= g.len() { (f, g) } else { (g, f) };
    let offset = long.len() - short.len();
    let mut out = long.to_vec();
    for (slot, c) in out[offset..].iter_mut().zip(short) {
        *slot = slot.clone() + c.clone();
    }
    out
}

/// Adds `src * t^shift` into `dst`; `dst` must be long enough.
fn add_at<R: Ring>(dst: &mut [R], src: &[R], shift: usize) {
    let start = dst.len() - src.len() - shift;
    for (slot, c) in dst[start..].iter_mut().zip(src) {
        *slot = slot.clone() + c.clone();
    }
}

/// Subtracts `src * t^shift` from `dst`.
fn sub_at<R: Ring>(dst: &mut [R], src: &[R], shift: usize) {
    let start = dst.len() - src.len() - shift;
    for (slot, c) in dst[start..].iter_mut().zip(src) {
        *slot = slot.clone() - c.clone();
    }
}
