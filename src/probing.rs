//! Provides a fixed capacity set using open addressing.
//!
//! The table holds `2^bits` slots and never grows. Collisions are resolved
//! by linear probing, and removed elements leave a tombstone behind so that
//! probe sequences running through the slot keep working. A tombstone may be
//! reused by a later insertion but never turns back into an empty slot, so a
//! table with heavy churn slowly fills up with tombstones.
//!
//! ```
//! use groundwork::error::SetError;
//! use groundwork::probing::ProbingSet;
//!
//! let mut set = ProbingSet::new(2).expect("valid size");
//! assert_eq!(set.capacity(), 4);
//! for word in ["a", "b", "c", "d"] {
//!     assert_eq!(set.add(word), Ok(true));
//! }
//! assert_eq!(set.add("a"), Ok(false));
//! assert_eq!(set.add("e"), Err(SetError::TableFull { capacity: 4 }));
//! assert!(set.remove(&"a"));
//! assert_eq!(set.add("e"), Ok(true));
//! ```

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use crate::error::SetError;

#[cfg(feature = "serde")]
use serde_crate::{Serialize, Serializer};

/// Smallest accepted table size, as a power of two.
pub const MIN_BITS: u32 = 2;

/// Largest accepted table size, as a power of two.
pub const MAX_BITS: u32 = 31;

#[derive(Clone, Debug, PartialEq)]
enum Slot<T> {
    Empty,
    Occupied(T),
    Tombstone,
}

/// A set of at most `2^bits` elements.
#[derive(Clone, Debug)]
pub struct ProbingSet<T, S = RandomState> {
    slots: Box<[Slot<T>]>,
    bits: u32,
    size: usize,
    hasher: S,
}

impl<T: Hash + Eq> ProbingSet<T, RandomState> {
    /// Create a set with room for `2^bits` elements.
    pub fn new(bits: u32) -> Result<Self, SetError> {
        Self::with_hasher(bits, RandomState::new())
    }
}

impl<T: Hash + Eq, S: BuildHasher> ProbingSet<T, S> {
    /// Create a set with room for `2^bits` elements which hashes with
    /// `hasher`.
    pub fn with_hasher(bits: u32, hasher: S) -> Result<Self, SetError> {
        if !(MIN_BITS..=MAX_BITS).contains(&bits) {
            return Err(SetError::InvalidBits(bits));
        }
        let slots = (0..1usize << bits).map(|_| Slot::Empty).collect();
        Ok(Self {
            slots,
            bits,
            size: 0,
            hasher,
        })
    }

    /// Number of slots in the table.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Empty every slot, tombstones included.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.size = 0;
    }

    /// The slot at which the probe sequence for `element` begins.
    pub fn starting_index(&self, element: &T) -> usize {
        let mask = (1u64 << self.bits) - 1;
        (self.hasher.hash_one(element) & mask) as usize
    }

    pub fn contains(&self, element: &T) -> bool {
        self.find(element).is_some()
    }

    /// Add `element` to the set. Returns `Ok(false)` if an equal element is
    /// already present.
    ///
    /// The table never grows: once every slot is taken this fails with
    /// [`SetError::TableFull`] and the caller has to pick a bigger table up
    /// front.
    pub fn add(&mut self, element: T) -> Result<bool, SetError> {
        let start = self.starting_index(&element);
        let mut free = None;
        for index in probe(start, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => {
                    free.get_or_insert(index);
                    break;
                }
                Slot::Tombstone => {
                    free.get_or_insert(index);
                }
                Slot::Occupied(current) if *current == element => return Ok(false),
                Slot::Occupied(_) => {}
            }
        }
        let index = match free {
            Some(index) => index,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(capacity = self.capacity(), "probing table is full");
                return Err(SetError::TableFull {
                    capacity: self.capacity(),
                });
            }
        };
        #[cfg(feature = "tracing")]
        {
            if matches!(self.slots[index], Slot::Tombstone) {
                tracing::trace!(index, "reusing tombstone");
            }
        }
        self.slots[index] = Slot::Occupied(element);
        self.size += 1;
        Ok(true)
    }

    /// Remove `element` from the set, leaving a tombstone in its slot.
    /// Returns true if it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.find(element) {
            Some(index) => {
                self.slots[index] = Slot::Tombstone;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Iterate over the elements in slot order.
    pub fn iter(&self) -> ProbingIter<'_, T> {
        ProbingIter {
            slots: &self.slots,
            cursor: 0,
            returned: 0,
            size: self.size,
        }
    }

    /// Walk the elements in slot order with the ability to remove them.
    pub fn cursor_mut(&mut self) -> ProbingCursor<'_, T, S> {
        ProbingCursor {
            set: self,
            cursor: 0,
            returned: 0,
            last: None,
        }
    }

    // Stops at the first empty slot; tombstones are skipped.
    fn find(&self, element: &T) -> Option<usize> {
        let start = self.starting_index(element);
        for index in probe(start, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(current) if current == element => return Some(index),
                _ => {}
            }
        }
        None
    }
}

/// One full cycle of slot indices beginning at `start`.
fn probe(start: usize, capacity: usize) -> impl Iterator<Item = usize> {
    let mask = capacity - 1;
    (0..capacity).map(move |step| (start + step) & mask)
}

/// Iterator over the elements of a ProbingSet.
#[derive(Clone, Debug)]
pub struct ProbingIter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: usize,
    returned: usize,
    size: usize,
}

impl<'a, T> Iterator for ProbingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.returned == self.size {
            return None;
        }
        while let Some(slot) = self.slots.get(self.cursor) {
            self.cursor += 1;
            if let Slot::Occupied(element) = slot {
                self.returned += 1;
                return Some(element);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.returned;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ProbingIter<'_, T> {}

impl<'a, T: Hash + Eq, S: BuildHasher> IntoIterator for &'a ProbingSet<T, S> {
    type Item = &'a T;
    type IntoIter = ProbingIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A cursor over a ProbingSet which can remove the element it last
/// returned.
///
/// Returned elements borrow the cursor, so this does not implement
/// [`Iterator`]; drive it with `has_next()` and `next()`.
#[derive(Debug)]
pub struct ProbingCursor<'a, T, S> {
    set: &'a mut ProbingSet<T, S>,
    cursor: usize,
    returned: usize,
    last: Option<usize>,
}

impl<T: Hash + Eq, S: BuildHasher> ProbingCursor<'_, T, S> {
    /// Are there elements left to return?
    pub fn has_next(&self) -> bool {
        self.returned < self.set.size
    }

    /// Return the next element, or None once every element has been seen.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let offset = self.set.slots[self.cursor..]
            .iter()
            .position(|slot| matches!(slot, Slot::Occupied(_)))?;
        let index = self.cursor + offset;
        self.cursor = index + 1;
        self.returned += 1;
        self.last = Some(index);
        match &self.set.slots[index] {
            Slot::Occupied(element) => Some(element),
            _ => None,
        }
    }

    /// Like `next()`, but running out of elements is an error.
    pub fn try_next(&mut self) -> Result<&T, SetError> {
        self.next().ok_or(SetError::Exhausted)
    }

    /// Replace the element most recently returned by `next()` with a
    /// tombstone.
    pub fn remove(&mut self) -> Result<(), SetError> {
        let index = self.last.take().ok_or(SetError::IllegalState)?;
        self.set.slots[index] = Slot::Tombstone;
        self.set.size -= 1;
        self.returned -= 1;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: Hash + Eq + Serialize, S: BuildHasher> Serialize for ProbingSet<T, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}
