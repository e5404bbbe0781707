// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ground_drag --heading-base-level=0

//! Understory Ground Drag: turn screen swipes into ground-plane directions.
//!
//! Top-down games often steer with a swipe: the player drags across the
//! screen and something on the ground moves that way. This crate projects the
//! swipe through the camera onto a horizontal plane below it and reports a
//! unit direction on that plane plus a resolution-independent "power".
//!
//! - [`SwipeSource`]: the gesture seam. [`SwipeGesture`] is a pointer-driven
//!   implementation with a movement threshold and a stationary mode.
//! - [`Camera`]: unprojects screen positions. [`PerspectiveCamera`] is a
//!   pinhole implementation.
//! - [`ground_direction`]: the projection itself, as a pure function.
//! - [`GroundDrag`]: a per-frame component owning a source and a camera that
//!   fires single-slot direction and end callbacks, and releases the source
//!   when dropped.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use understory_ground_drag::{GroundDrag, PerspectiveCamera, SwipeGesture, Vec3};
//!
//! let screen = Size::new(1920.0, 1080.0);
//! let camera = PerspectiveCamera::looking_down(Vec3::new(0.0, 20.0, 0.0), 1.0, screen).unwrap();
//! let mut drag = GroundDrag::new(SwipeGesture::new(), Some(camera), screen);
//!
//! let heading = Rc::new(Cell::new(None));
//! let sink = heading.clone();
//! drag.set_on_direction(Some(Box::new(move |direction, power| {
//!     sink.set(Some((direction, power)));
//! })));
//!
//! // Swipe 100px to the right.
//! drag.source_mut().on_down(None, Point::new(910.0, 540.0));
//! drag.source_mut().on_move(None, Point::new(1010.0, 540.0));
//! drag.update();
//!
//! let (direction, power) = heading.get().unwrap();
//! assert!((direction.x - 1.0).abs() < 1e-9 && direction.y.abs() < 1e-9);
//! assert!((power - 100.0 / 1920_f64.hypot(1080.0)).abs() < 1e-12);
//! ```
//!
//! Rays start [`NEAR_DEPTH`] in front of the camera and travel along its
//! forward vector, so the projection ignores perspective spread between the
//! two samples. Samples where either ray misses the plane (the camera is
//! looking up or along the horizon) are skipped without error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod camera;
mod direction;
mod drag;
mod plane;
mod swipe;
mod vec3;

pub use camera::{Camera, PerspectiveCamera, Ray};
pub use direction::{
    DragSample, GROUND_DEPTH_BELOW_CAMERA, NEAR_DEPTH, ground_direction, screen_diagonal,
};
pub use drag::{DirectionCallback, DragEvent, EndCallback, GroundDrag};
pub use plane::GroundPlane;
pub use swipe::{PointerId, SwipeGesture, SwipePhase, SwipeSource};
pub use vec3::Vec3;
