// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycle_list --heading-base-level=0

//! Understory Recycle List: fixed-pool view recycling for long scroll lists.
//!
//! This crate renders a long list of uniformly sized items inside a fixed
//! viewport with only as many item views as can ever be on screen at once,
//! plus two. As the host scrolls, views that leave one edge of the viewport
//! are moved to the other edge and told which item they now show.
//!
//! The core concepts are:
//!
//! - [`RecycleCell`]: the two-method capability (`init`, `update`) every pooled
//!   item view implements.
//! - [`ScrollHost`]: the scrollable container. It reports which axis it
//!   scrolls along and its current scroll position, and accepts the total
//!   content extent.
//! - [`RecycleConfig`]: item count, item extent, spacing, and viewport extent.
//! - [`Recycler`]: owns the pool as a ring whose order always matches the
//!   visual order, and recycles it on every [`Recycler::tick`].
//! - [`RecycleList`]: a small wrapper giving the recycler a host-style
//!   `start` / `update` lifecycle that logs and goes inert on bad setup.
//!
//! This crate deliberately does **not** know about widgets or rendering.
//! Host frameworks are responsible for:
//!
//! - Drawing each pooled cell at [`Slot::position`], and hiding cells whose
//!   [`Slot::is_visible`] is `false`.
//! - Feeding their scroll position in once per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_recycle_list::{
//!     Axis, RecycleCell, RecycleConfig, Recycler, ScrollAxes, ScrollHost,
//! };
//!
//! #[derive(Clone, Default)]
//! struct Row {
//!     shown: usize,
//! }
//!
//! impl RecycleCell for Row {
//!     fn init(&mut self, index: usize) {
//!         self.shown = index;
//!     }
//!     fn update(&mut self, index: usize) {
//!         self.shown = index;
//!     }
//! }
//!
//! struct Container {
//!     offset: Point,
//!     content: f64,
//! }
//!
//! impl ScrollHost for Container {
//!     fn axes(&self) -> ScrollAxes {
//!         ScrollAxes::VERTICAL
//!     }
//!     fn scroll_position(&self) -> Point {
//!         self.offset
//!     }
//!     fn set_content_extent(&mut self, _axis: Axis, extent: f64) {
//!         self.content = extent;
//!     }
//! }
//!
//! let mut host = Container { offset: Point::ZERO, content: 0.0 };
//! // 100 rows, 50px each, in a 220px viewport: 5 visible, 7 pooled.
//! let config = RecycleConfig::new(100, 50.0, 220.0);
//! let mut recycler = Recycler::new(&mut host, Some(Row::default()), config).unwrap();
//! assert_eq!(host.content, 5000.0);
//! assert_eq!(recycler.pool_size(), 7);
//!
//! // Scroll down by three rows.
//! host.offset = Point::new(0.0, 150.0);
//! recycler.tick(host.scroll_position());
//! assert_eq!(recycler.front_index(), 3);
//!
//! let shown: Vec<_> = recycler.slots().map(|slot| slot.cell().shown).collect();
//! assert_eq!(shown, [3, 4, 5, 6, 7, 8, 9]);
//! ```
//!
//! ## Large jumps
//!
//! By default a tick that crosses `n` indices recycles `n` cells one at a time,
//! so every item in between receives exactly one `update`, even when `n` is
//! larger than the pool. Lists whose cells do no stateful work per index can
//! opt into [`JumpPolicy::Rebind`], which rebinds the pool in place instead
//! once a jump is wider than the pool.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod cell;
mod config;
mod error;
mod host;
mod layout;
mod recycler;
mod ring;

pub use axis::{Axis, ScrollAxes};
pub use cell::{RecycleCell, Slot};
pub use config::{JumpPolicy, RecycleConfig};
pub use error::SetupError;
pub use host::{RecycleList, ScrollHost};
pub(crate) use layout::CellLayout;
pub use recycler::{Recycler, TickOutcome};
pub(crate) use ring::CellRing;
