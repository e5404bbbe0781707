// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup validation errors.

/// Why a recycle list could not be built.
///
/// These are configuration mistakes detected once, before any cell is
/// created or the host is touched. A list that fails setup stays inert.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SetupError {
    /// The host must scroll along exactly one axis.
    #[error(
        "scroll host must enable exactly one axis (vertical: {vertical}, horizontal: {horizontal})"
    )]
    AmbiguousAxis {
        /// Whether vertical scrolling was enabled.
        vertical: bool,
        /// Whether horizontal scrolling was enabled.
        horizontal: bool,
    },
    /// No cell template was supplied to clone the pool from.
    #[error("no cell template was supplied")]
    MissingTemplate,
    /// The list has no items.
    #[error("item count must be positive")]
    EmptyList,
    /// Item extent plus spacing must be finite and strictly positive.
    #[error("cell range must be finite and positive (item extent: {item_extent}, spacing: {spacing})")]
    InvalidCellRange {
        /// Configured item extent.
        item_extent: f64,
        /// Configured inter-item spacing.
        spacing: f64,
    },
    /// The viewport extent must be finite and non-negative.
    #[error("viewport extent must be finite and non-negative, got {0}")]
    InvalidViewport(f64),
}
