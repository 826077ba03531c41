//! Counting configurations of arbitrary hard objects.
//!
//! A hard object is a tuple of elements; a configuration is a set of objects
//! no two of which share an element. Matchings are the case of 2-element
//! objects (edges); dimers, trimers or hyperedges work the same way.

use std::fmt::Debug;
use std::hash::Hash;

use hobj_core::{Algebra, HardObjects, Incidence, Result};
use hobj_rings::Ring;
use log::debug;
use rustc_hash::FxHashSet;

/// For each object, the elements whose last occurrence it is.
#[must_use]
pub fn closing_schedule<N: Clone + Eq + Hash>(objects: &[Vec<N>]) -> Vec<Vec<N>> {
    let mut seen = FxHashSet::default();
    let mut schedule = vec![Vec::new(); objects.len()];
    for (slot, object) in schedule.iter_mut().zip(objects).rev() {
        for element in object {
            if seen.insert(element) {
                slot.push(element.clone());
            }
        }
    }
    schedule
}

/// Counts configurations of `objects`, processed in the given order.
///
/// The degree-`k` coefficient counts sets of `k` pairwise disjoint objects.
/// Each element is closed right after its last object. Two objects with the
/// same elements are rejected as duplicates. An object listing an element
/// twice can never be placed and contributes nothing.
///
/// # Errors
///
/// - [`HobjError::DuplicateElement`](hobj_core::HobjError) for a repeated
///   object.
/// - [`HobjError::PoolExhausted`](hobj_core::HobjError) if more than
///   `capacity` elements are open at once.
pub fn count_hard_objects<N, A>(objects: &[Vec<N>], algebra: A, capacity: usize) -> Result<A::Value>
where
    N: Clone + Ord + Hash + Debug,
    A: Algebra,
    A::Scalar: Ring,
{
    let closings = closing_schedule(objects);
    let mut engine = HardObjects::with_capacity(algebra, capacity);

    for (object, closing) in objects.iter().zip(closings) {
        let mut key = object.clone();
        key.sort_unstable();
        let incidence =
            Incidence::single(<A::Scalar as Ring>::one(), object.clone()).with_closing(closing);
        engine.apply(key, &incidence)?;
    }

    let stats = engine.stats();
    debug!(
        "{} hard objects, peak {} open elements",
        objects.len(),
        stats.peak_frontier
    );
    engine.into_result()
}
