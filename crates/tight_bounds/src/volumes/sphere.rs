//! Bounding sphere

use crate::foundation::math::{sphere_volume, sqrf, Placement, Vec3};
use serde::{Deserialize, Serialize};

/// A bounding sphere for culling and collision detection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// The center position of the sphere
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Volume of the sphere
    pub fn volume(&self) -> f32 {
        sphere_volume(self.radius)
    }

    /// Check if this sphere intersects with another; touching spheres do not
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        distance_squared < sqrf(self.radius + other.radius)
    }

    /// Check if a point is strictly inside the sphere
    pub fn contains_point(&self, point: &Vec3) -> bool {
        (point - self.center).magnitude_squared() < sqrf(self.radius)
    }

    /// Check if `other` lies entirely within this sphere
    pub fn contains_sphere(&self, other: &BoundingSphere) -> bool {
        let distance = (other.center - self.center).magnitude();
        distance + other.radius <= self.radius
    }

    /// Move the sphere from model space into world space
    pub fn transformed(&self, placement: &Placement) -> BoundingSphere {
        BoundingSphere::new(
            placement.transform_point(&self.center),
            self.radius * placement.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_sphere_intersection_is_strict() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let touching = BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn point_containment() {
        let s = BoundingSphere::new(Vec3::new(1.0, 1.0, 1.0), 2.0);
        assert!(s.contains_point(&Vec3::new(2.0, 2.0, 1.0)));
        assert!(!s.contains_point(&Vec3::new(3.0, 1.0, 1.0)));
    }

    #[test]
    fn volume_and_containment() {
        let s = BoundingSphere::new(Vec3::zeros(), 3.0);
        assert_relative_eq!(s.volume(), 36.0 * std::f32::consts::PI, epsilon = 1e-3);
        assert!(s.contains_sphere(&BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0)));
        assert!(!s.contains_sphere(&BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 2.0)));
    }
}
