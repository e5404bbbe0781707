// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal ground planes and ray intersection.

use crate::{Ray, Vec3};

/// A horizontal plane `y = height` facing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    /// World `y` of the plane.
    pub height: f64,
}

impl GroundPlane {
    /// A plane `depth` units below `point`.
    pub fn below(point: Vec3, depth: f64) -> Self {
        Self {
            height: point.y - depth,
        }
    }

    /// Distance parameter along `ray` where it meets the plane.
    ///
    /// Returns `None` if the ray runs parallel to the plane or would have to
    /// travel backwards to reach it.
    pub fn raycast(&self, ray: &Ray) -> Option<f64> {
        let denominator = ray.direction.dot(Vec3::UP);
        if denominator.abs() <= f64::EPSILON {
            return None;
        }
        let t = (self.height - ray.origin.y) / denominator;
        (t.is_finite() && t >= 0.0).then_some(t)
    }

    /// Where `ray` meets the plane, if it does.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|t| ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::GroundPlane;
    use crate::{Ray, Vec3};

    #[test]
    fn downward_ray_hits_plane_below() {
        let plane = GroundPlane::below(Vec3::new(0.0, 10.0, 0.0), 100.0);
        assert_eq!(plane.height, -90.0);

        let ray = Ray::new(Vec3::new(3.0, 9.0, -2.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane.raycast(&ray), Some(99.0));
        assert_eq!(plane.intersect(&ray), Some(Vec3::new(3.0, -90.0, -2.0)));
    }

    #[test]
    fn slanted_ray_travels_along_its_direction() {
        let plane = GroundPlane { height: 0.0 };
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(plane.intersect(&ray), Some(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn parallel_and_receding_rays_miss() {
        let plane = GroundPlane { height: 0.0 };
        let flat = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let upward = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(plane.raycast(&flat), None);
        assert_eq!(plane.raycast(&upward), None);
    }
}
