// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-length ring with O(1) rotation in both directions.

use alloc::vec::Vec;

/// A fixed-length sequence whose front element can be moved to the back
/// (and vice versa) in O(1).
///
/// Elements are never added or removed after construction; only the head
/// offset moves. Ring position `0` is the front, `len() - 1` the back.
#[derive(Debug, Clone)]
pub(crate) struct CellRing<T> {
    items: Vec<T>,
    head: usize,
}

impl<T> CellRing<T> {
    /// Creates a ring over `items`, with `items[0]` at the front.
    #[must_use]
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self { items, head: 0 }
    }

    /// Number of elements.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    fn physical(&self, position: usize) -> usize {
        (self.head + position) % self.items.len()
    }

    /// Element at ring `position`, counted from the front.
    #[must_use]
    pub(crate) fn get(&self, position: usize) -> Option<&T> {
        if position >= self.items.len() {
            return None;
        }
        self.items.get(self.physical(position))
    }

    /// First element in ring order.
    #[must_use]
    pub(crate) fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element in ring order.
    #[must_use]
    pub(crate) fn back(&self) -> Option<&T> {
        self.get(self.items.len().checked_sub(1)?)
    }

    /// Moves the front element to the back and returns it.
    pub(crate) fn rotate_front_to_back(&mut self) -> Option<&mut T> {
        if self.items.is_empty() {
            return None;
        }
        let old_front = self.head;
        self.head = (self.head + 1) % self.items.len();
        self.items.get_mut(old_front)
    }

    /// Moves the back element to the front and returns it.
    pub(crate) fn rotate_back_to_front(&mut self) -> Option<&mut T> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        self.head = (self.head + len - 1) % len;
        self.items.get_mut(self.head)
    }

    /// Iterates elements from front to back.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (wrapped, leading) = self.items.split_at(self.head);
        leading.iter().chain(wrapped.iter())
    }

    /// Iterates elements mutably from front to back.
    pub(crate) fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + '_ {
        let (wrapped, leading) = self.items.split_at_mut(self.head);
        leading.iter_mut().chain(wrapped.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::CellRing;

    fn order(ring: &CellRing<u32>) -> Vec<u32> {
        ring.iter().copied().collect()
    }

    #[test]
    fn rotation_preserves_cyclic_order() {
        let mut ring = CellRing::new(vec![0, 1, 2, 3]);
        assert_eq!(ring.rotate_front_to_back().copied(), Some(0));
        assert_eq!(order(&ring), [1, 2, 3, 0]);
        assert_eq!(ring.front(), Some(&1));
        assert_eq!(ring.back(), Some(&0));

        assert_eq!(ring.rotate_back_to_front().copied(), Some(0));
        assert_eq!(ring.rotate_back_to_front().copied(), Some(3));
        assert_eq!(order(&ring), [3, 0, 1, 2]);
        assert_eq!(ring.get(1), Some(&0));
        assert_eq!(ring.get(4), None);
    }

    #[test]
    fn rotating_a_full_turn_is_identity() {
        let mut ring = CellRing::new(vec![5, 6, 7]);
        for _ in 0..3 {
            ring.rotate_front_to_back();
        }
        assert_eq!(order(&ring), [5, 6, 7]);
    }

    #[test]
    fn mutation_through_ring_positions() {
        let mut ring = CellRing::new(vec![0, 1, 2]);
        if let Some(moved) = ring.rotate_front_to_back() {
            *moved = 10;
        }
        for item in ring.iter_mut() {
            *item += 1;
        }
        assert_eq!(order(&ring), [2, 3, 11]);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut ring: CellRing<u32> = CellRing::new(Vec::new());
        assert_eq!(ring.len(), 0);
        assert!(ring.rotate_front_to_back().is_none());
        assert!(ring.rotate_back_to_front().is_none());
        assert!(ring.back().is_none());
        assert_eq!(ring.iter().count(), 0);
    }
}
