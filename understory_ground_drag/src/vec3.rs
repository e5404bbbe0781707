// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal 3D vector for camera rays.

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A 3D vector or point in world space.
///
/// `+y` is up; the ground plane spans `x` and `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// The x coordinate.
    pub x: f64,
    /// The y (up) coordinate.
    pub y: f64,
    /// The z coordinate.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// World up, `+y`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for (near) zero or non-finite vectors.
    pub fn try_normalize(self) -> Option<Self> {
        let length = self.length();
        (length.is_finite() && length > f64::EPSILON)
            .then(|| Self::new(self.x / length, self.y / length, self.z / length))
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec3;

    #[test]
    fn cross_product_is_anticommutative() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::UP;
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalize_rejects_degenerate_vectors() {
        assert_eq!(Vec3::new(0.0, 3.0, 4.0).length(), 5.0);
        assert_eq!(
            Vec3::new(0.0, 3.0, 4.0).try_normalize(),
            Some(Vec3::new(0.0, 0.6, 0.8))
        );
        assert_eq!(Vec3::ZERO.try_normalize(), None);
        assert_eq!(Vec3::new(f64::NAN, 0.0, 0.0).try_normalize(), None);
    }
}
