// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projecting a screen-space swipe onto the ground plane.

use kurbo::{Point, Size, Vec2};

use crate::{Camera, GroundPlane, Ray};

/// How far below the camera the ground plane sits.
///
/// Assumes a camera looking down on the scene from above.
pub const GROUND_DEPTH_BELOW_CAMERA: f64 = 100.0;

/// Depth in front of the camera at which swipe rays start.
pub const NEAR_DEPTH: f64 = 1.0;

/// A swipe projected onto the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Unit direction on the ground, as `(x, z)`. Zero if the swipe has not moved.
    pub direction: Vec2,
    /// Swipe length in screen units divided by the screen diagonal.
    ///
    /// Resolution independent; `1.0` is a corner-to-corner swipe.
    pub power: f64,
}

/// Length of the diagonal of `screen`.
pub fn screen_diagonal(screen: Size) -> f64 {
    screen.to_vec2().hypot()
}

/// Projects the swipe `start → current` onto the ground plane below `camera`.
///
/// Each screen position is unprojected to [`NEAR_DEPTH`] and cast along the
/// camera's forward vector onto a plane [`GROUND_DEPTH_BELOW_CAMERA`] below
/// the camera. Returns `None` if either ray misses the plane, for example
/// when the camera looks up or sideways.
pub fn ground_direction<C: Camera + ?Sized>(
    camera: &C,
    start: Point,
    current: Point,
    screen_diagonal: f64,
) -> Option<DragSample> {
    let plane = GroundPlane::below(camera.position(), GROUND_DEPTH_BELOW_CAMERA);
    let forward = camera.forward();

    let start_ray = Ray::new(camera.screen_to_world(start, NEAR_DEPTH), forward);
    let start_hit = plane.intersect(&start_ray)?;
    let current_ray = Ray::new(camera.screen_to_world(current, NEAR_DEPTH), forward);
    let current_hit = plane.intersect(&current_ray)?;

    let planar = Vec2::new(current_hit.x - start_hit.x, current_hit.z - start_hit.z);
    let length = planar.hypot();
    let direction = if length > f64::EPSILON {
        planar / length
    } else {
        Vec2::ZERO
    };
    let power = if screen_diagonal > 0.0 {
        (current - start).hypot() / screen_diagonal
    } else {
        0.0
    };
    Some(DragSample { direction, power })
}
