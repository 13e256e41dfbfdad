//! Axis-aligned bounding boxes and octree node bounds

use crate::foundation::math::{max3, Placement, Vec3};
use super::sphere::BoundingSphere;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Default for AABB {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AABB {
    /// Inverted box that any point or box extends to a valid one
    pub const EMPTY: Self = Self {
        min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
        max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
    };

    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Smallest AABB containing a sphere
    pub fn from_sphere(sphere: &BoundingSphere) -> Self {
        let r = Vec3::repeat(sphere.radius);
        Self::new(sphere.center - r, sphere.center + r)
    }

    /// Smallest AABB containing every point, seeded at +inf/-inf
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut aabb = Self::EMPTY;
        for point in points {
            aabb.extend_point(point);
        }
        aabb
    }

    /// True when no point has been added (min > max on some axis)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box so it contains `point`
    pub fn extend_point(&mut self, point: &Vec3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Grow the box to the union of itself and `other`
    pub fn extend(&mut self, other: &AABB) {
        self.min = self.min.inf(&other.min);
        self.max = self.max.sup(&other.max);
    }

    /// Union of two boxes
    pub fn union(&self, other: &AABB) -> AABB {
        let mut result = *self;
        result.extend(other);
        result
    }

    /// Overlap of two boxes (may be empty)
    pub fn intersection(&self, other: &AABB) -> AABB {
        AABB::new(self.min.sup(&other.min), self.max.inf(&other.max))
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Full size along each axis
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest single-axis dimension
    pub fn max_dimension(&self) -> f32 {
        let d = self.dimensions();
        max3(d.x, d.y, d.z)
    }

    /// Volume of the box
    pub fn volume(&self) -> f32 {
        let d = self.dimensions();
        d.x * d.y * d.z
    }

    /// Check if this AABB contains a point (boundary inclusive)
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if this AABB overlaps another AABB; touching faces do not count
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y &&
        self.min.z < other.max.z && self.max.z > other.min.z
    }

    /// Check if this AABB lies completely inside `other`
    pub fn is_completely_inside(&self, other: &AABB) -> bool {
        self.min.x >= other.min.x && self.max.x <= other.max.x &&
        self.min.y >= other.min.y && self.max.y <= other.max.y &&
        self.min.z >= other.min.z && self.max.z <= other.max.z
    }

    /// The 8 corners, bit 0/1/2 of the index selecting max x/y/z
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::zeros(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Vec3::new(
                if i & 1 != 0 { self.max.x } else { self.min.x },
                if i & 2 != 0 { self.max.y } else { self.min.y },
                if i & 4 != 0 { self.max.z } else { self.min.z },
            );
        }
        corners
    }

    /// Sphere through the corners of the box
    pub fn circumscribed_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.extents().norm())
    }

    /// Corner of the box furthest along `normal`
    pub fn positive_vertex(&self, normal: &Vec3) -> Vec3 {
        Vec3::new(
            if normal.x >= 0.0 { self.max.x } else { self.min.x },
            if normal.y >= 0.0 { self.max.y } else { self.min.y },
            if normal.z >= 0.0 { self.max.z } else { self.min.z },
        )
    }

    /// Corner of the box furthest against `normal`
    pub fn negative_vertex(&self, normal: &Vec3) -> Vec3 {
        self.positive_vertex(&-normal)
    }

    /// AABB of this box after moving it into world space
    pub fn transformed(&self, placement: &Placement) -> AABB {
        if self.is_empty() {
            return *self;
        }
        let corners = self.corners().map(|corner| placement.transform_point(&corner));
        AABB::from_points(&corners)
    }
}

/// Bounds of an octree node as seen by the culling code
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctreeNodeBounds {
    /// Axis-aligned extent of the node
    pub aabb: AABB,
    /// Sphere enclosing the node
    pub sphere: BoundingSphere,
}

impl OctreeNodeBounds {
    /// Node bounds for an AABB; the sphere is the box's circumscribed sphere
    pub fn from_aabb(aabb: AABB) -> Self {
        Self {
            aabb,
            sphere: aabb.circumscribed_sphere(),
        }
    }
}
