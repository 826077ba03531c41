//! Permanental-minor polynomials.
//!
//! Row `i` of an `m × n` matrix is one element with a choice per non-zero
//! entry `a[i][j]`, occupying column `j` with weight `a[i][j]`. The
//! coefficient of `t^k` is the sum of the permanents of all `k × k` minors;
//! for a square matrix the leading coefficient is the permanent.

use hobj_core::{Algebra, Choice, HardObjects, HobjError, Incidence, Result, Symbolic};
use hobj_poly::DensePoly;
use hobj_rings::Ring;
use log::debug;

use crate::config::PermanentalConfig;

/// Evaluates the permanental-minor computation of `matrix` in `algebra`.
///
/// Rows are processed top to bottom; each column closes at its last
/// non-zero row. All-zero rows and columns contribute nothing.
///
/// # Errors
///
/// - [`HobjError::MalformedMatrix`] if the rows have different lengths.
/// - [`HobjError::PoolExhausted`] if more than `config.capacity` columns
///   are open at once.
/// - [`HobjError::DomainMismatch`] if an entry has no image in the payload
///   domain.
pub fn count_permanental_minors<R, A>(
    matrix: &[Vec<R>],
    config: &PermanentalConfig,
    algebra: A,
) -> Result<A::Value>
where
    R: Ring,
    A: Algebra<Scalar = R>,
{
    let width = matrix.first().map_or(0, Vec::len);
    if let Some(row) = matrix.iter().position(|row| row.len() != width) {
        return Err(HobjError::MalformedMatrix(format!(
            "row {row} has {} entries, expected {width}",
            matrix[row].len()
        )));
    }

    let mut last_row = vec![None; width];
    for (i, row) in matrix.iter().enumerate() {
        for (j, entry) in row.iter().enumerate() {
            if !entry.is_zero() {
                last_row[j] = Some(i);
            }
        }
    }

    let mut engine: HardObjects<usize, usize, A> =
        HardObjects::with_capacity(algebra, config.capacity);
    for (i, row) in matrix.iter().enumerate() {
        let choices = row
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_zero())
            .map(|(j, entry)| Choice::new(entry.clone(), vec![j]))
            .collect();
        let closing = (0..width).filter(|&j| last_row[j] == Some(i)).collect();
        engine.apply(i, &Incidence::from_choices(choices).with_closing(closing))?;
    }

    debug!(
        "{} x {width} matrix, peak {} open columns",
        matrix.len(),
        engine.stats().peak_frontier
    );
    engine.into_result()
}

/// The permanental-minor polynomial of `matrix`.
///
/// # Errors
///
/// See [`count_permanental_minors`].
pub fn permanental_minor_poly<R: Ring>(
    matrix: &[Vec<R>],
    config: &PermanentalConfig,
) -> Result<DensePoly<R>> {
    count_permanental_minors(matrix, config, Symbolic::new())
}
