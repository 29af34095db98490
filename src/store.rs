//! Fixed-capacity slot pools with typed handles.
//!
//! Points and constraints live in independent pools whose capacity is chosen
//! once at construction. Slots are addressed by typed keys so a point handle
//! can never be used to index the constraint pool (or vice versa). Insertion
//! always claims the lowest-index free slot, which keeps slot assignment
//! deterministic; there is no removal, so a handle stays valid for the life
//! of the simulation.

use crate::error::SimError;
use alloc::vec::Vec as AllocVec;
use core::marker::PhantomData;

/// Key newtype addressing a slot in one specific pool.
pub trait SlotKey: Copy + core::fmt::Debug {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

/// Handle to a point slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(usize);

impl SlotKey for PointId {
    fn from_index(index: usize) -> Self { PointId(index) }
    fn index(self) -> usize { self.0 }
}

/// Handle to a constraint slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(usize);

impl SlotKey for ConstraintId {
    fn from_index(index: usize) -> Self { ConstraintId(index) }
    fn index(self) -> usize { self.0 }
}

/// Fixed-capacity pool of `T` addressed by keys of type `K`.
///
/// Backing memory is reserved exactly once; the pool never grows.
pub struct Pool<K: SlotKey, T> {
    slots: AllocVec<Option<T>>,
    occupied: usize,
    _key: PhantomData<K>,
}

impl<K: SlotKey, T> Pool<K, T> {
    /// Allocate a pool with the given fixed capacity.
    ///
    /// Reservation failure is reported as `AllocationFailed` instead of
    /// aborting, so the host can log and shut down cleanly.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimError> {
        let mut slots = AllocVec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| SimError::AllocationFailed)?;
        slots.resize_with(capacity, || None);
        Ok(Pool { slots, occupied: 0, _key: PhantomData })
    }

    /// Insert into the lowest-index free slot.
    pub fn insert(&mut self, value: T) -> Result<K, SimError> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(value);
                self.occupied += 1;
                return Ok(K::from_index(index));
            }
        }
        Err(SimError::PoolFull { capacity: self.slots.len() })
    }

    /// Whether `key` addresses an occupied slot.
    pub fn contains(&self, key: K) -> bool {
        matches!(self.slots.get(key.index()), Some(Some(_)))
    }

    /// Borrow the value in an occupied slot.
    ///
    /// Callers must hold a key previously returned by `insert`; anything else
    /// is a contract violation and panics.
    pub fn get(&self, key: K) -> &T {
        match &self.slots[key.index()] {
            Some(value) => value,
            None => panic!("unoccupied slot {:?}", key),
        }
    }

    /// Mutably borrow the value in an occupied slot.
    pub fn get_mut(&mut self, key: K) -> &mut T {
        match &mut self.slots[key.index()] {
            Some(value) => value,
            None => panic!("unoccupied slot {:?}", key),
        }
    }

    /// Iterate occupied slots in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (K::from_index(index), value)))
    }

    /// Mutably iterate occupied slots in ascending index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|value| (K::from_index(index), value)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize { self.occupied }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool { self.occupied == 0 }

    /// Total slot count.
    pub fn capacity(&self) -> usize { self.slots.len() }
}
