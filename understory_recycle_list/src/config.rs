// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup parameters for a recycle list.

/// How a tick that jumps further than the pool is wide is carried out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JumpPolicy {
    /// Recycle one cell per index crossed.
    ///
    /// Every index between the old and new window receives exactly one
    /// [`RecycleCell::update`](crate::RecycleCell::update), even when the jump
    /// wraps the pool several times. Cost is proportional to the jump.
    #[default]
    EveryStep,
    /// Rebind the whole pool in place once the jump exceeds the pool size.
    ///
    /// Only the indices of the final window are updated; intermediate indices
    /// are skipped. Cost is bounded by the pool size. Jumps no wider than the
    /// pool behave exactly like [`JumpPolicy::EveryStep`].
    Rebind,
}

/// Geometry and item count for a recycle list.
///
/// All extents are along the scroll axis, in the host's coordinate space
/// (typically logical pixels). The viewport extent is supplied explicitly
/// rather than read from the host's layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecycleConfig {
    /// Number of logical items, indexed `0..item_count`. Must be positive.
    pub item_count: usize,
    /// Extent of a single item.
    pub item_extent: f64,
    /// Gap between consecutive items.
    pub spacing: f64,
    /// Extent of the visible viewport.
    pub viewport_extent: f64,
    /// Strategy for large single-tick jumps.
    pub jump_policy: JumpPolicy,
}

impl RecycleConfig {
    /// Creates a config with no spacing and the default [`JumpPolicy`].
    #[must_use]
    pub fn new(item_count: usize, item_extent: f64, viewport_extent: f64) -> Self {
        Self {
            item_count,
            item_extent,
            spacing: 0.0,
            viewport_extent,
            jump_policy: JumpPolicy::default(),
        }
    }

    /// Sets the gap between consecutive items.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the strategy for large single-tick jumps.
    #[must_use]
    pub fn with_jump_policy(mut self, jump_policy: JumpPolicy) -> Self {
        self.jump_policy = jump_policy;
        self
    }

    /// Distance from the start of one item to the start of the next.
    #[must_use]
    pub fn cell_range(&self) -> f64 {
        self.item_extent + self.spacing
    }
}
