//! Generator pool: binds external ids to mask bits.
//!
//! A slot is taken the first time an id appears in an incidence and handed
//! back when the id is closed, so the number of slots in use is exactly the
//! active frontier. Freed slots are reused last-in first-out, which keeps
//! masks as narrow as the frontier allows.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{HobjError, Result};
use crate::mask::Mask;

/// Default pool capacity: no limit beyond memory.
pub const DEFAULT_CAPACITY: usize = usize::MAX;

/// One generator bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u32);

impl Slot {
    /// Creates a slot from its bit position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The bit position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eta{}", self.0)
    }
}

/// Bijection between the currently open ids and their slots.
#[derive(Clone, Debug)]
pub struct GeneratorPool<N> {
    bound: FxHashMap<N, Slot>,
    /// Owner of each slot ever created, `None` while the slot is free.
    owners: Vec<Option<N>>,
    free: Vec<Slot>,
    capacity: usize,
}

impl<N: Clone + Eq + Hash + fmt::Debug> GeneratorPool<N> {
    /// Creates a pool that grows as needed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a pool that refuses to open more than `capacity` ids.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bound: FxHashMap::default(),
            owners: Vec::new(),
            free: Vec::new(),
            capacity,
        }
    }

    /// Returns the slot bound to `id`, binding a fresh one if needed.
    ///
    /// # Errors
    ///
    /// [`HobjError::PoolExhausted`] when `id` is new and every slot up to the
    /// capacity is in use.
    pub fn assign(&mut self, id: &N) -> Result<Slot> {
        if let Some(&slot) = self.bound.get(id) {
            return Ok(slot);
        }

        let exhausted = || HobjError::PoolExhausted {
            capacity: self.capacity,
        };
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None if self.owners.len() < self.capacity => {
                let index = u32::try_from(self.owners.len()).map_err(|_| exhausted())?;
                self.owners.push(None);
                Slot::new(index)
            }
            None => return Err(exhausted()),
        };

        self.owners[slot.index()] = Some(id.clone());
        self.bound.insert(id.clone(), slot);
        Ok(slot)
    }

    /// Unbinds `id` and returns its slot to the free stack.
    ///
    /// Returns `None` if `id` was not bound.
    pub fn release(&mut self, id: &N) -> Option<Slot> {
        let slot = self.bound.remove(id)?;
        self.owners[slot.index()] = None;
        self.free.push(slot);
        Some(slot)
    }

    /// The slot bound to `id`, if any.
    #[must_use]
    pub fn slot_of(&self, id: &N) -> Option<Slot> {
        self.bound.get(id).copied()
    }

    /// The id bound to `slot`, if any.
    #[must_use]
    pub fn id_of(&self, slot: Slot) -> Option<&N> {
        self.owners.get(slot.index()).and_then(Option::as_ref)
    }

    /// Union of the bits of every bound slot.
    #[must_use]
    pub fn bound_mask(&self) -> Mask {
        self.bound.values().map(|s| s.index()).collect()
    }

    /// Ids owning the bits of `mask`, lowest bit first.
    pub fn ids_in<'a>(&'a self, mask: &'a Mask) -> impl Iterator<Item = &'a N> + 'a {
        mask.iter()
            .filter_map(|i| self.owners.get(i))
            .filter_map(Option::as_ref)
    }

    /// Number of ids currently bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Returns true if no id is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Number of distinct slots ever handed out.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.owners.len()
    }

    /// The configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Unbinds everything, keeping allocations.
    pub fn clear(&mut self) {
        self.bound.clear();
        self.owners.clear();
        self.free.clear();
    }
}

impl<N: Clone + Eq + Hash + fmt::Debug> Default for GeneratorPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_is_idempotent() {
        let mut pool = GeneratorPool::new();
        let a = pool.assign(&"a").unwrap();
        let b = pool.assign(&"b").unwrap();
        assert_ne!(a, b);
        assert_eq!(pool.assign(&"a").unwrap(), a);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.id_of(b), Some(&"b"));
    }

    #[test]
    fn test_release_recycles_slot() {
        let mut pool = GeneratorPool::new();
        let a = pool.assign(&1).unwrap();
        pool.assign(&2).unwrap();
        assert_eq!(pool.release(&1), Some(a));
        assert_eq!(pool.release(&1), None);
        assert_eq!(pool.id_of(a), None);

        let c = pool.assign(&3).unwrap();
        assert_eq!(c, a);
        assert_eq!(pool.high_water(), 2);
        assert_eq!(pool.bound_mask(), [0, 1].into_iter().collect());
    }

    #[test]
    fn test_exhaustion() {
        let mut pool = GeneratorPool::with_capacity(2);
        pool.assign(&'x').unwrap();
        pool.assign(&'y').unwrap();
        assert_eq!(
            pool.assign(&'z'),
            Err(HobjError::PoolExhausted { capacity: 2 })
        );
        pool.release(&'x');
        assert!(pool.assign(&'z').is_ok());
    }

    #[test]
    fn test_grows_past_one_word() {
        let mut pool = GeneratorPool::new();
        assert_eq!(pool.capacity(), DEFAULT_CAPACITY);
        for i in 0..100 {
            assert_eq!(pool.assign(&i).unwrap().index(), i);
        }
        assert_eq!(pool.bound_mask(), (0..100).collect());
        assert_eq!(pool.release(&70).map(Slot::index), Some(70));
        assert_eq!(pool.assign(&1000).unwrap().index(), 70);
        assert_eq!(pool.high_water(), 100);
    }

    #[test]
    fn test_ids_in_mask() {
        let mut pool = GeneratorPool::new();
        for id in ["u", "v", "w"] {
            pool.assign(&id).unwrap();
        }
        let mask: Mask = [0, 2].into_iter().collect();
        let ids: Vec<_> = pool.ids_in(&mask).copied().collect();
        assert_eq!(ids, vec!["u", "w"]);
    }
}
