// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived pool geometry for uniformly sized cells.

use crate::{RecycleConfig, SetupError};

/// Extra cells kept beyond what the viewport can show at once.
///
/// One covers the partially visible cell at either edge while scrolling.
pub(crate) const POOL_SLACK: usize = 2;

/// Pool sizing and index math for a list of uniformly sized cells.
///
/// Built once from a validated [`RecycleConfig`]; never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellLayout {
    item_count: usize,
    cell_range: f64,
    visible_count: usize,
    pool_size: usize,
    last_valid_front_index: usize,
}

impl CellLayout {
    /// Validates `config` and derives the pool geometry from it.
    pub(crate) fn new(config: &RecycleConfig) -> Result<Self, SetupError> {
        if config.item_count == 0 {
            return Err(SetupError::EmptyList);
        }
        let cell_range = config.cell_range();
        if !(cell_range.is_finite() && cell_range > 0.0) {
            return Err(SetupError::InvalidCellRange {
                item_extent: config.item_extent,
                spacing: config.spacing,
            });
        }
        let viewport = config.viewport_extent;
        if !viewport.is_finite() || viewport.is_sign_negative() {
            return Err(SetupError::InvalidViewport(viewport));
        }

        let visible_count =
            ceil_ratio(viewport, cell_range).ok_or(SetupError::InvalidViewport(viewport))?;
        let pool_size = visible_count
            .checked_add(POOL_SLACK)
            .ok_or(SetupError::InvalidViewport(viewport))?;
        Ok(Self {
            item_count: config.item_count,
            cell_range,
            visible_count,
            pool_size,
            last_valid_front_index: config.item_count.saturating_sub(visible_count),
        })
    }

    /// Number of logical items.
    #[must_use]
    pub(crate) const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Item extent plus spacing.
    #[must_use]
    pub(crate) const fn cell_range(&self) -> f64 {
        self.cell_range
    }

    /// Number of cells needed to cover the viewport.
    #[must_use]
    pub(crate) const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of pooled cells.
    #[must_use]
    pub(crate) const fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Largest front index at which the window does not run past the end.
    #[must_use]
    pub(crate) const fn last_valid_front_index(&self) -> usize {
        self.last_valid_front_index
    }

    /// Total scrollable extent of all items.
    #[must_use]
    pub(crate) fn content_extent(&self) -> f64 {
        let count = self.item_count as f64;
        self.cell_range * count
    }

    /// Front index for a forward scroll offset.
    ///
    /// Negative offsets (overscroll at the start) and NaN map to `0`; offsets
    /// past the end clamp to [`last_valid_front_index`](Self::last_valid_front_index).
    #[must_use]
    pub(crate) fn front_index_at(&self, offset: f64) -> usize {
        // `max` discards NaN.
        let ratio = offset.max(0.0) / self.cell_range;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Truncating a non-negative ratio is floor; the cast saturates and is clamped next"
        )]
        let index = ratio as usize;
        index.min(self.last_valid_front_index)
    }
}

/// `ceil(numerator / denominator)` for a non-negative numerator and positive denominator.
///
/// Returns `None` when the result does not fit in a `usize`.
fn ceil_ratio(numerator: f64, denominator: f64) -> Option<usize> {
    let ratio = numerator / denominator;
    if !(ratio < usize::MAX as f64) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Truncating a non-negative ratio is floor; the remainder is checked next"
    )]
    let whole = ratio as usize;
    let has_remainder = (whole as f64) < ratio;
    if has_remainder { whole.checked_add(1) } else { Some(whole) }
}
