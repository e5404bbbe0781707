// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cameras that map screen positions into world space.

use kurbo::{Point, Size};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::Vec3;

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Where the ray starts.
    pub origin: Vec3,
    /// Which way it travels. Not required to be unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point at parameter `t` along the ray.
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A camera that can unproject screen positions.
///
/// Screen space has its origin at the bottom-left corner with `y` pointing up,
/// in the same units as the swipe positions fed to it (typically pixels).
pub trait Camera {
    /// World position of the camera.
    fn position(&self) -> Vec3;

    /// Unit vector the camera looks along.
    fn forward(&self) -> Vec3;

    /// World point at `depth` in front of the camera under screen position `screen`.
    fn screen_to_world(&self, screen: Point, depth: f64) -> Vec3;
}

impl<C: Camera + ?Sized> Camera for &C {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn forward(&self) -> Vec3 {
        (**self).forward()
    }

    fn screen_to_world(&self, screen: Point, depth: f64) -> Vec3 {
        (**self).screen_to_world(screen, depth)
    }
}

/// A pinhole camera with a vertical field of view.
///
/// The basis is left-handed, as in most game engines: a camera looking along
/// `+z` with `+y` up has screen right along `+x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    tan_half_fov: f64,
    screen: Size,
}

impl PerspectiveCamera {
    /// Creates a camera at `position` looking along `forward`.
    ///
    /// `up_hint` picks the roll; it only needs to be non-parallel to `forward`.
    /// `vertical_fov` is in radians.
    ///
    /// Returns `None` for a zero or non-finite `forward`, an `up_hint`
    /// parallel to it, a field of view outside `(0, π)`, or an empty screen.
    pub fn new(
        position: Vec3,
        forward: Vec3,
        up_hint: Vec3,
        vertical_fov: f64,
        screen: Size,
    ) -> Option<Self> {
        let forward = forward.try_normalize()?;
        let right = up_hint.cross(forward).try_normalize()?;
        let up = forward.cross(right);
        if !(vertical_fov > 0.0 && vertical_fov < core::f64::consts::PI) {
            return None;
        }
        if !(screen.width > 0.0 && screen.height > 0.0) {
            return None;
        }
        Some(Self {
            position,
            forward,
            up,
            right,
            tan_half_fov: (vertical_fov * 0.5).tan(),
            screen,
        })
    }

    /// A camera at `position` looking straight down, with screen up along world `+z`.
    pub fn looking_down(position: Vec3, vertical_fov: f64, screen: Size) -> Option<Self> {
        Self::new(
            position,
            -Vec3::UP,
            Vec3::new(0.0, 0.0, 1.0),
            vertical_fov,
            screen,
        )
    }

    /// Unit vector toward screen right.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector toward screen up.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Screen size in pixels.
    pub fn screen(&self) -> Size {
        self.screen
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn screen_to_world(&self, screen: Point, depth: f64) -> Vec3 {
        let ndc_x = screen.x / self.screen.width * 2.0 - 1.0;
        let ndc_y = screen.y / self.screen.height * 2.0 - 1.0;
        let half_height = depth * self.tan_half_fov;
        let half_width = half_height * (self.screen.width / self.screen.height);
        self.position
            + self.forward * depth
            + self.right * (ndc_x * half_width)
            + self.up * (ndc_y * half_height)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{Camera, PerspectiveCamera, Ray};
    use crate::Vec3;

    const SCREEN: Size = Size::new(1920.0, 1080.0);

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn screen_center_is_straight_ahead() {
        let camera = PerspectiveCamera::looking_down(Vec3::new(1.0, 10.0, 2.0), 1.0, SCREEN).unwrap();
        let center = camera.screen_to_world(Point::new(960.0, 540.0), 1.0);
        assert!(close(center, Vec3::new(1.0, 9.0, 2.0)));
    }

    #[test]
    fn looking_down_maps_screen_axes_to_ground_axes() {
        let camera = PerspectiveCamera::looking_down(Vec3::ZERO, 1.0, SCREEN).unwrap();
        assert!(close(camera.right(), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(camera.up(), Vec3::new(0.0, 0.0, 1.0)));

        let center = camera.screen_to_world(Point::new(960.0, 540.0), 1.0);
        let right = camera.screen_to_world(Point::new(1060.0, 540.0), 1.0);
        let up = camera.screen_to_world(Point::new(960.0, 640.0), 1.0);
        assert!(right.x > center.x && (right.z - center.z).abs() < 1e-12);
        assert!(up.z > center.z && (up.x - center.x).abs() < 1e-12);
    }

    #[test]
    fn horizontal_camera_has_conventional_basis() {
        let camera = PerspectiveCamera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::UP,
            1.0,
            SCREEN,
        )
        .unwrap();
        assert!(close(camera.right(), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(camera.up(), Vec3::UP));
    }

    #[test]
    fn degenerate_cameras_are_rejected() {
        assert!(PerspectiveCamera::new(Vec3::ZERO, Vec3::ZERO, Vec3::UP, 1.0, SCREEN).is_none());
        assert!(PerspectiveCamera::new(Vec3::ZERO, -Vec3::UP, Vec3::UP, 1.0, SCREEN).is_none());
        assert!(PerspectiveCamera::looking_down(Vec3::ZERO, 0.0, SCREEN).is_none());
        assert!(PerspectiveCamera::looking_down(Vec3::ZERO, 1.0, Size::ZERO).is_none());
    }

    #[test]
    fn ray_points_scale_with_direction() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(ray.at(1.5), Vec3::new(1.0, -1.0, 3.0));
    }
}
