// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis selection and slot placement along it.

use kurbo::Point;

/// The single axis a recycle list scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items stack downward; the host's scroll offset grows along `+y`.
    Vertical,
    /// Items stack to the right; the host's scroll offset grows along `-x`.
    Horizontal,
}

impl Axis {
    /// Projects a host scroll position onto this axis.
    ///
    /// The horizontal component is negated so that scrolling forward is an
    /// increasing quantity on both axes.
    #[must_use]
    pub fn forward_offset(self, scroll_position: Point) -> f64 {
        match self {
            Self::Vertical => scroll_position.y,
            Self::Horizontal => -scroll_position.x,
        }
    }

    /// Anchored position of slot `slot` when slots are `cell_range` apart.
    ///
    /// Slot `0` sits at the origin. Vertical slots go down (negative `y`),
    /// horizontal slots go right (positive `x`).
    #[must_use]
    pub fn slot_position(self, slot: isize, cell_range: f64) -> Point {
        let along = slot as f64 * cell_range;
        match self {
            Self::Vertical => Point::new(0.0, -along),
            Self::Horizontal => Point::new(along, 0.0),
        }
    }
}

/// Which scroll directions a host container has enabled.
///
/// A recycle list needs exactly one of them; see [`ScrollAxes::single`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollAxes {
    /// Vertical scrolling is enabled.
    pub vertical: bool,
    /// Horizontal scrolling is enabled.
    pub horizontal: bool,
}

impl ScrollAxes {
    /// Only vertical scrolling.
    pub const VERTICAL: Self = Self {
        vertical: true,
        horizontal: false,
    };

    /// Only horizontal scrolling.
    pub const HORIZONTAL: Self = Self {
        vertical: false,
        horizontal: true,
    };

    /// Returns the enabled axis if exactly one is enabled.
    #[must_use]
    pub const fn single(self) -> Option<Axis> {
        match (self.vertical, self.horizontal) {
            (true, false) => Some(Axis::Vertical),
            (false, true) => Some(Axis::Horizontal),
            _ => None,
        }
    }
}

impl From<Axis> for ScrollAxes {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Self::VERTICAL,
            Axis::Horizontal => Self::HORIZONTAL,
        }
    }
}
