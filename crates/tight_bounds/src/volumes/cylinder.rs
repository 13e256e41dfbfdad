//! Bounding cylinder

use crate::foundation::math::{constants::PI, sqrf, Placement, Vec3};
use super::aabb::AABB;
use super::sphere::BoundingSphere;
use serde::{Deserialize, Serialize};

/// A finite cylinder with flat end caps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// Center of the cylinder (midway between the end caps, on the axis)
    pub center: Vec3,
    /// Unit direction of the axis
    pub axis: Vec3,
    /// Distance between the end caps
    pub length: f32,
    /// Radius of the end caps
    pub radius: f32,
    /// Per world axis `i`, `sqrt(1 - axis[i]^2)`: the extent of a unit end cap
    /// disk along that world axis
    pub axis_coefficients: Vec3,
}

impl Cylinder {
    /// Create a cylinder and compute its cached axis coefficients
    pub fn new(center: Vec3, axis: Vec3, length: f32, radius: f32) -> Self {
        let mut cylinder = Self {
            center,
            axis,
            length,
            radius,
            axis_coefficients: Vec3::zeros(),
        };
        cylinder.calculate_axis_coefficients();
        cylinder
    }

    /// Refresh the cached per-axis coefficients after `axis` changed
    pub fn calculate_axis_coefficients(&mut self) {
        self.axis_coefficients = Vec3::new(
            (1.0 - sqrf(self.axis.x)).max(0.0).sqrt(),
            (1.0 - sqrf(self.axis.y)).max(0.0).sqrt(),
            (1.0 - sqrf(self.axis.z)).max(0.0).sqrt(),
        );
    }

    /// Volume of the cylinder
    pub fn volume(&self) -> f32 {
        PI * sqrf(self.radius) * self.length
    }

    /// Check if a point lies inside the cylinder (boundary inclusive)
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let d = point - self.center;
        let along = d.dot(&self.axis);
        if along.abs() > self.length * 0.5 {
            return false;
        }
        (d - self.axis * along).magnitude_squared() <= sqrf(self.radius)
    }

    /// Half-length of the cylinder's projection onto a unit `direction`
    pub fn projected_radius(&self, direction: &Vec3) -> f32 {
        let cos = self.axis.dot(direction);
        let sin = (1.0 - sqrf(cos)).max(0.0).sqrt();
        cos.abs() * self.length * 0.5 + self.radius * sin
    }

    /// Smallest AABB containing the cylinder
    pub fn aabb(&self) -> AABB {
        let half = self.axis.abs() * (self.length * 0.5) + self.axis_coefficients * self.radius;
        AABB::from_center_extents(self.center, half)
    }

    /// Sphere through the rims of both end caps
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(
            self.center,
            (sqrf(self.length * 0.5) + sqrf(self.radius)).sqrt(),
        )
    }

    /// Move the cylinder from model space into world space
    pub fn transformed(&self, placement: &Placement) -> Cylinder {
        Cylinder::new(
            placement.transform_point(&self.center),
            placement.rotate(&self.axis),
            self.length * placement.scale,
            self.radius * placement.scale,
        )
    }
}
