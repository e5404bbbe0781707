// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item-view capability and the pooled slot that carries it.

use kurbo::Point;

/// A pooled item view.
///
/// Implementors own whatever content a single row/column shows. The
/// recycler never creates or destroys them after setup; it only tells them
/// which logical index they now represent.
pub trait RecycleCell {
    /// Called exactly once, when the pool is built, with the cell's first index.
    ///
    /// The index may lie past the end of a list shorter than the pool, in
    /// which case the cell starts hidden.
    fn init(&mut self, index: usize);

    /// Called each time the cell is rebound to a new in-range index.
    ///
    /// Never called for indices outside `0..item_count`.
    fn update(&mut self, index: usize);
}

/// One pooled cell plus the placement the recycler assigned to it.
#[derive(Debug, Clone)]
pub struct Slot<C> {
    pub(crate) cell: C,
    pub(crate) slot: isize,
    pub(crate) position: Point,
    pub(crate) index: Option<usize>,
}

impl<C> Slot<C> {
    /// The pooled view.
    #[must_use]
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Mutable access to the pooled view.
    pub fn cell_mut(&mut self) -> &mut C {
        &mut self.cell
    }

    /// Logical index this cell shows, or `None` while hidden.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether the host should show this cell.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.index.is_some()
    }

    /// Slot number along the scroll axis.
    ///
    /// Equals the bound index for visible cells; hidden cells keep counting
    /// past either end of the list.
    #[must_use]
    pub const fn slot(&self) -> isize {
        self.slot
    }

    /// Anchored position inside the scroll content.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }
}
