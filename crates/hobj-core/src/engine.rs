//! The hard-object transition engine.
//!
//! The state is a sparse map from generator masks to payloads. Applying an
//! element multiplies the state by `1 + sum_c w_c * t * prod(eta_p)`: every
//! entry keeps its identity term and, for each choice whose participants are
//! disjoint from the entry's mask, gains a combination term. Products that
//! hit an occupied bit vanish because `eta^2 = 0`. Closed ids are then
//! projected out of every mask and their slots recycled, which merges
//! entries that now only differ in closed bits.

use std::fmt;
use std::hash::Hash;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::algebra::Algebra;
use crate::error::{HobjError, Result};
use crate::incidence::Incidence;
use crate::mask::Mask;
use crate::pool::{GeneratorPool, DEFAULT_CAPACITY};

/// Counters collected while applying elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Elements applied so far.
    pub steps: usize,
    /// Largest number of simultaneously open ids.
    pub peak_frontier: usize,
    /// Largest number of state entries.
    pub peak_entries: usize,
}

/// Incremental hard-object computation.
///
/// `N` is the id type of generators (graph vertices, edge indices, matrix
/// columns), `K` the key identifying scheduled elements, and `A` the payload
/// algebra. An engine can be fed more elements after inspecting an
/// intermediate state, so a structure grown piece by piece reuses one engine.
pub struct HardObjects<N, K, A: Algebra> {
    algebra: A,
    pool: GeneratorPool<N>,
    state: FxHashMap<Mask, A::Value>,
    applied: FxHashSet<K>,
    stats: EngineStats,
}

impl<N, K, A> HardObjects<N, K, A>
where
    N: Clone + Eq + Hash + fmt::Debug,
    K: Eq + Hash + fmt::Debug,
    A: Algebra,
{
    /// Creates an engine whose pool grows as needed.
    pub fn new(algebra: A) -> Self {
        Self::with_capacity(algebra, DEFAULT_CAPACITY)
    }

    /// Creates an engine whose pool opens at most `capacity` ids.
    pub fn with_capacity(algebra: A, capacity: usize) -> Self {
        let mut state = FxHashMap::default();
        state.insert(Mask::empty(), algebra.unit());
        Self {
            algebra,
            pool: GeneratorPool::with_capacity(capacity),
            state,
            applied: FxHashSet::default(),
            stats: EngineStats {
                peak_entries: 1,
                ..EngineStats::default()
            },
        }
    }

    /// Applies one scheduled element.
    ///
    /// A choice listing the same id twice vanishes (`eta^2 = 0`), though the
    /// id is still opened. Closing ids that were never referenced are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`HobjError::DuplicateElement`] if `key` was applied before; the
    ///   state is left untouched.
    /// - [`HobjError::DomainMismatch`] if a weight has no image in the
    ///   payload domain; the state is left untouched.
    /// - [`HobjError::PoolExhausted`] if the participants need more slots
    ///   than the pool has.
    pub fn apply(&mut self, key: K, incidence: &Incidence<N, A::Scalar>) -> Result<()> {
        if self.applied.contains(&key) {
            return Err(HobjError::DuplicateElement {
                element: format!("{key:?}"),
            });
        }

        let weights = incidence
            .choices()
            .iter()
            .map(|c| self.algebra.weight(&c.weight))
            .collect::<Result<SmallVec<[A::Weight; 4]>>>()?;

        let mut masks: SmallVec<[Option<Mask>; 4]> = SmallVec::with_capacity(weights.len());
        for choice in incidence.choices() {
            let mut mask = Mask::empty();
            let mut nilpotent = false;
            for id in &choice.participants {
                nilpotent |= !mask.insert(self.pool.assign(id)?.index());
            }
            masks.push((!nilpotent).then_some(mask));
        }
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.pool.len());

        let closing: Mask = incidence
            .closing()
            .iter()
            .filter_map(|id| self.pool.slot_of(id))
            .map(|slot| slot.index())
            .collect();

        let previous = std::mem::take(&mut self.state);
        let mut next: FxHashMap<Mask, A::Value> =
            FxHashMap::with_capacity_and_hasher(previous.len() * 2, Default::default());

        for (mask, value) in previous {
            for (choice_mask, weight) in masks.iter().zip(&weights) {
                let Some(choice_mask) = choice_mask else { continue };
                if mask.is_disjoint(choice_mask) {
                    let term = self.algebra.advance(self.algebra.scale(&value, weight));
                    let joined = mask.union(choice_mask).difference(&closing);
                    merge(&self.algebra, &mut next, joined, term);
                }
            }
            let kept = if closing.is_empty() {
                mask
            } else {
                mask.difference(&closing)
            };
            merge(&self.algebra, &mut next, kept, value);
        }
        self.state = next;

        for id in incidence.closing() {
            self.pool.release(id);
        }
        self.applied.insert(key);

        self.stats.steps += 1;
        self.stats.peak_entries = self.stats.peak_entries.max(self.state.len());
        trace!(
            "[step:{}] {} entries, {} open ids",
            self.stats.steps,
            self.state.len(),
            self.pool.len()
        );
        Ok(())
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &FxHashMap<Mask, A::Value> {
        &self.state
    }

    /// The generator pool.
    #[must_use]
    pub fn pool(&self) -> &GeneratorPool<N> {
        &self.pool
    }

    /// The payload algebra.
    #[must_use]
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Collected counters.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Number of ids currently open.
    #[must_use]
    pub fn frontier(&self) -> usize {
        self.pool.len()
    }

    /// Returns true if every id has been closed and the state collapsed to
    /// the empty mask.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.len() == 1 && self.state.contains_key(&Mask::empty())
    }

    /// The final payload.
    ///
    /// # Errors
    ///
    /// [`HobjError::IncompleteClosure`] unless the state is exactly
    /// `{0 -> value}`.
    pub fn result(&self) -> Result<&A::Value> {
        match self.state.get(&Mask::empty()) {
            Some(value) if self.state.len() == 1 => Ok(value),
            _ => Err(self.incomplete()),
        }
    }

    /// Consumes the engine, returning the final payload.
    ///
    /// # Errors
    ///
    /// See [`HardObjects::result`].
    pub fn into_result(mut self) -> Result<A::Value> {
        if !self.is_closed() {
            return Err(self.incomplete());
        }
        debug!(
            "closed after {} steps (peak {} open ids, {} entries)",
            self.stats.steps, self.stats.peak_frontier, self.stats.peak_entries
        );
        self.state
            .remove(&Mask::empty())
            .ok_or_else(|| self.incomplete())
    }

    /// Sum of all payloads.
    ///
    /// Summing over masks closes every open id at once, so this is the
    /// polynomial of everything applied so far with open ids left free.
    #[must_use]
    pub fn total(&self) -> A::Value {
        let mut acc = self.algebra.zero();
        for value in self.state.values() {
            self.algebra.accumulate(&mut acc, value.clone());
        }
        acc
    }

    /// Entries with the open ids of their masks, in no particular order.
    pub fn configurations(&self) -> impl Iterator<Item = (Vec<&N>, &A::Value)> + '_ {
        self.state
            .iter()
            .map(|(mask, value)| (self.pool.ids_in(mask).collect(), value))
    }

    /// Restarts from `{0 -> unit}`, keeping allocations.
    pub fn reset(&mut self) {
        self.state.clear();
        self.state.insert(Mask::empty(), self.algebra.unit());
        self.pool.clear();
        self.applied.clear();
        self.stats = EngineStats {
            peak_entries: 1,
            ..EngineStats::default()
        };
    }

    fn incomplete(&self) -> HobjError {
        HobjError::IncompleteClosure {
            entries: self.state.len(),
            open: self.pool.len(),
        }
    }
}

fn merge<A: Algebra>(
    algebra: &A,
    state: &mut FxHashMap<Mask, A::Value>,
    mask: Mask,
    value: A::Value,
) {
    use std::collections::hash_map::Entry;

    match state.entry(mask) {
        Entry::Occupied(mut slot) => algebra.accumulate(slot.get_mut(), value),
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
    }
}
