//! Specialized collection types

use std::cmp;

/// How a push or pop affected a buffer's backing storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageChange {
    /// Capacity was left alone
    None,
    /// Fresh storage was allocated for a previously storage-less buffer
    Allocated,
    /// Existing storage was moved to a new capacity
    Reallocated,
    /// The allocator refused the requested capacity
    ///
    /// For a push the item was dropped and the length is unchanged. For a
    /// pop the element was still removed and returned; only the trailing
    /// shrink was abandoned.
    AllocFailed,
}

/// Growable stack buffer with explicit capacity management
///
/// Push appends and pop removes the most recently pushed element, so the
/// buffer drains in LIFO order. Capacity grows by a 1.5x step (minimum one
/// slot) when a push finds the buffer full, and halves when a pop leaves it
/// less than half occupied. Popping the final element never shrinks: the
/// storage is kept around for the next push.
///
/// All reallocation is fallible. Every operation reports what happened to
/// the backing storage through [`StorageChange`] and leaves the buffer in a
/// well-defined state even when the allocator refuses.
#[derive(Debug)]
pub struct StackBuffer<T> {
    items: Vec<T>,
}

impl<T> StackBuffer<T> {
    /// Create an empty buffer; no storage is allocated until the first push
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of buffered elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currently allocated slot count
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop all elements, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append an element, growing the storage if the buffer is full
    ///
    /// On [`StorageChange::AllocFailed`] the element is dropped and the
    /// buffer is unchanged.
    pub fn push(&mut self, item: T) -> StorageChange {
        let mut change = StorageChange::None;
        if self.items.len() == self.items.capacity() {
            let had_storage = self.items.capacity() > 0;
            let target = next_capacity(self.items.capacity());
            let additional = target - self.items.len();
            if self.items.try_reserve_exact(additional).is_err() {
                return StorageChange::AllocFailed;
            }
            change = if had_storage {
                StorageChange::Reallocated
            } else {
                StorageChange::Allocated
            };
        }
        self.items.push(item);
        change
    }

    /// Remove and return the most recently pushed element
    ///
    /// Returns `None` when the buffer is empty. After a successful removal
    /// the storage is halved if fewer than half the slots remain occupied
    /// and at least one element is left.
    pub fn pop(&mut self) -> Option<(T, StorageChange)> {
        let value = self.items.pop()?;
        let mut change = StorageChange::None;
        if self.items.len() < self.items.capacity() / 2 && !self.items.is_empty() {
            change = self.reallocate_to(self.items.capacity() / 2);
        }
        Some((value, change))
    }

    /// Move the elements into storage of exactly `new_capacity` slots
    ///
    /// The old storage is kept untouched when the new allocation is refused.
    fn reallocate_to(&mut self, new_capacity: usize) -> StorageChange {
        debug_assert!(new_capacity >= self.items.len());
        let mut replacement: Vec<T> = Vec::new();
        if replacement.try_reserve_exact(new_capacity).is_err() {
            return StorageChange::AllocFailed;
        }
        replacement.extend(self.items.drain(..));
        self.items = replacement;
        StorageChange::Reallocated
    }
}

impl<T> Default for StackBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Next capacity for a full buffer: a 1.5x step, but always at least one
/// extra slot so small buffers cannot stall
fn next_capacity(current: usize) -> usize {
    cmp::max(current.saturating_add(1), current.saturating_mul(3) / 2)
}
