// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pool controller: builds the ring of cells and recycles it as the host scrolls.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Point;

use crate::{
    Axis, CellLayout, CellRing, JumpPolicy, RecycleCell, RecycleConfig, ScrollHost, SetupError,
    Slot,
};

/// Structural work done by a single [`Recycler::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Front index before the tick.
    pub previous_front: usize,
    /// Front index after the tick.
    pub front_index: usize,
    /// Cells moved from one end of the ring to the other, or rebound in place.
    pub recycled: usize,
    /// [`RecycleCell::update`] calls made.
    pub updated: usize,
    /// Cells hidden because their new index fell outside the list.
    pub hidden: usize,
}

impl TickOutcome {
    /// Returns `true` if any cell moved or changed index.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        self.recycled > 0
    }
}

/// Controller for a fixed pool of cells over a uniformly sized list.
///
/// This type:
/// - validates the host and configuration once, in [`Recycler::new`],
/// - owns `visible_count + 2` cells cloned from a template, arranged in a ring
///   whose order always matches their visual front-to-back order,
/// - on each [`Recycler::tick`], moves cells from one end of the ring to the
///   other so the ring keeps covering the viewport, rebinding them to new
///   logical indices as it goes.
///
/// Cells are never created or destroyed after setup. A cell whose index would
/// fall outside `0..item_count` is hidden instead, and shown again once it is
/// rebound to an in-range index.
///
/// Hosts read placements back through [`Recycler::slots`] after each tick.
#[derive(Debug, Clone)]
pub struct Recycler<C> {
    layout: CellLayout,
    axis: Axis,
    jump_policy: JumpPolicy,
    front_index: usize,
    ring: CellRing<Slot<C>>,
}

impl<C: RecycleCell> Recycler<C> {
    /// Validates the setup, sizes the host's content and builds the pool.
    ///
    /// Each pooled cell is a clone of `template`; cell `i` is placed in slot `i`
    /// and receives [`RecycleCell::init`] with `i`. The template itself is
    /// dropped without being initialised.
    ///
    /// On error nothing is cloned and the host is left untouched.
    pub fn new<H>(host: &mut H, template: Option<C>, config: RecycleConfig) -> Result<Self, SetupError>
    where
        H: ScrollHost + ?Sized,
        C: Clone,
    {
        let axes = host.axes();
        let axis = axes.single().ok_or(SetupError::AmbiguousAxis {
            vertical: axes.vertical,
            horizontal: axes.horizontal,
        })?;
        let template = template.ok_or(SetupError::MissingTemplate)?;
        let layout = CellLayout::new(&config)?;

        host.set_content_extent(axis, layout.content_extent());

        let pool_size = layout.pool_size();
        let mut slots = Vec::with_capacity(pool_size);
        for i in 0..pool_size {
            let mut cell = template.clone();
            cell.init(i);
            let slot = slot_number(i);
            slots.push(Slot {
                cell,
                slot,
                position: axis.slot_position(slot, layout.cell_range()),
                index: (i < layout.item_count()).then_some(i),
            });
        }

        tracing::debug!(
            ?axis,
            item_count = layout.item_count(),
            visible_count = layout.visible_count(),
            pool_size,
            content_extent = layout.content_extent(),
            "recycle list pool built"
        );

        Ok(Self {
            layout,
            axis,
            jump_policy: config.jump_policy,
            front_index: 0,
            ring: CellRing::new(slots),
        })
    }

    /// Brings the pool in line with the host's current scroll position.
    ///
    /// Call once per frame. Ticking twice with the same position is a no-op
    /// the second time.
    pub fn tick(&mut self, scroll_position: Point) -> TickOutcome {
        let previous = self.front_index;
        let target = self
            .layout
            .front_index_at(self.axis.forward_offset(scroll_position));
        let mut outcome = TickOutcome {
            previous_front: previous,
            front_index: target,
            ..TickOutcome::default()
        };

        let steps = target.abs_diff(previous);
        if steps > self.ring.len() && self.jump_policy == JumpPolicy::Rebind {
            self.rebind_window(target, &mut outcome);
        } else if target > previous {
            self.recycle_forward(previous, steps, &mut outcome);
        } else if target < previous {
            self.recycle_backward(previous, steps, &mut outcome);
        }

        self.front_index = target;

        if outcome.is_structural() {
            tracing::trace!(
                from = previous,
                to = target,
                recycled = outcome.recycled,
                updated = outcome.updated,
                hidden = outcome.hidden,
                "recycled cells"
            );
        }
        outcome
    }

    /// Moves `steps` cells from the front of the ring to the back.
    fn recycle_forward(&mut self, front: usize, steps: usize, outcome: &mut TickOutcome) {
        let first_index = front + self.ring.len();
        for step in 0..steps {
            let Some(next_slot) = self.ring.back().map(|back| back.slot + 1) else {
                return;
            };
            let index = Some(first_index + step).filter(|&i| i < self.layout.item_count());
            if let Some(slot) = self.ring.rotate_front_to_back() {
                rebind(slot, next_slot, index, self.axis, &self.layout, outcome);
            }
        }
    }

    /// Moves `steps` cells from the back of the ring to the front.
    fn recycle_backward(&mut self, front: usize, steps: usize, outcome: &mut TickOutcome) {
        for step in 0..steps {
            let Some(prev_slot) = self.ring.front().map(|front| front.slot - 1) else {
                return;
            };
            let index = front.checked_sub(step + 1);
            if let Some(slot) = self.ring.rotate_back_to_front() {
                rebind(slot, prev_slot, index, self.axis, &self.layout, outcome);
            }
        }
    }

    /// Rebinds every cell in place so the ring starts at `target`.
    fn rebind_window(&mut self, target: usize, outcome: &mut TickOutcome) {
        let item_count = self.layout.item_count();
        for (offset, slot) in self.ring.iter_mut().enumerate() {
            let index = target + offset;
            let bound = (index < item_count).then_some(index);
            rebind(slot, slot_number(index), bound, self.axis, &self.layout, outcome);
        }
    }

    /// Logical index bound to the front of the ring.
    #[must_use]
    pub const fn front_index(&self) -> usize {
        self.front_index
    }

    /// Largest front index the list can scroll to.
    #[must_use]
    pub const fn last_valid_front_index(&self) -> usize {
        self.layout.last_valid_front_index()
    }

    /// Number of cells that fit in the viewport.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.layout.visible_count()
    }

    /// Number of pooled cells.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.ring.len()
    }

    /// Number of logical items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    /// Item extent plus spacing.
    #[must_use]
    pub const fn cell_range(&self) -> f64 {
        self.layout.cell_range()
    }

    /// Total scrollable extent pushed to the host at setup.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.layout.content_extent()
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The strategy used for jumps wider than the pool.
    #[must_use]
    pub const fn jump_policy(&self) -> JumpPolicy {
        self.jump_policy
    }

    /// Pooled slots in visual front-to-back order.
    pub fn slots(&self) -> impl DoubleEndedIterator<Item = &Slot<C>> + '_ {
        self.ring.iter()
    }

    /// Mutable pooled slots in visual front-to-back order.
    ///
    /// Only the cells are mutable; placement belongs to the recycler.
    pub fn slots_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Slot<C>> + '_ {
        self.ring.iter_mut()
    }

    /// The slot at ring `position` (`0` is the front).
    #[must_use]
    pub fn slot_at(&self, position: usize) -> Option<&Slot<C>> {
        self.ring.get(position)
    }

    /// The slot currently showing logical `index`, if any.
    #[must_use]
    pub fn slot_for_index(&self, index: usize) -> Option<&Slot<C>> {
        let position = index.checked_sub(self.front_index)?;
        self.ring
            .get(position)
            .filter(|slot| slot.index == Some(index))
    }

    /// Bound index of every slot, in ring order.
    pub fn bound_indices(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.ring.iter().map(Slot::index)
    }

    /// Logical indices bound to some pooled cell.
    ///
    /// Covers the whole pool window, so it includes the buffer cells that may
    /// sit just outside the viewport.
    #[must_use]
    pub fn bound_range(&self) -> Range<usize> {
        let end = (self.front_index + self.ring.len()).min(self.layout.item_count());
        self.front_index..end
    }
}

/// Places `slot` at slot number `slot_no` and binds it to `index`.
fn rebind<C: RecycleCell>(
    slot: &mut Slot<C>,
    slot_no: isize,
    index: Option<usize>,
    axis: Axis,
    layout: &CellLayout,
    outcome: &mut TickOutcome,
) {
    slot.slot = slot_no;
    slot.position = axis.slot_position(slot_no, layout.cell_range());
    slot.index = index;
    outcome.recycled += 1;
    match index {
        Some(index) => {
            slot.cell.update(index);
            outcome.updated += 1;
        }
        None => outcome.hidden += 1,
    }
}

fn slot_number(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
