//! Principal axes and the oriented bounding box built from them

use crate::foundation::math::{Placement, Vec3};
use super::hull::{ConvexHull, Plane};
use serde::{Deserialize, Serialize};

/// One principal axis of a vertex set and the set's extent along it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PcaAxis {
    /// Unit direction of the axis
    pub direction: Vec3,
    /// Full size of the vertex set measured along `direction`
    pub extent: f32,
}

impl PcaAxis {
    /// Create a new axis
    pub fn new(direction: Vec3, extent: f32) -> Self {
        Self { direction, extent }
    }

    /// World-aligned axes for the given box dimensions
    pub fn world_aligned(dimensions: Vec3) -> [PcaAxis; 3] {
        [
            PcaAxis::new(Vec3::x(), dimensions.x),
            PcaAxis::new(Vec3::y(), dimensions.y),
            PcaAxis::new(Vec3::z(), dimensions.z),
        ]
    }

    /// Half of the extent
    pub fn half_extent(&self) -> f32 {
        self.extent * 0.5
    }
}

impl Default for PcaAxis {
    fn default() -> Self {
        Self::new(Vec3::x(), 0.0)
    }
}

/// Oriented bounding box: an AABB expressed in the principal axis basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// Center of the box
    pub center: Vec3,
    /// Box axes sorted by decreasing extent
    pub axes: [PcaAxis; 3],
}

impl OrientedBox {
    /// Create a new oriented box
    pub fn new(center: Vec3, axes: [PcaAxis; 3]) -> Self {
        Self { center, axes }
    }

    /// Volume of the box
    pub fn volume(&self) -> f32 {
        self.axes[0].extent * self.axes[1].extent * self.axes[2].extent
    }

    /// Radius of the sphere through the box corners
    pub fn circumscribed_radius(&self) -> f32 {
        Vec3::new(
            self.axes[0].half_extent(),
            self.axes[1].half_extent(),
            self.axes[2].half_extent(),
        )
        .norm()
    }

    /// Half-size vector, one component per box axis
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(
            self.axes[0].half_extent(),
            self.axes[1].half_extent(),
            self.axes[2].half_extent(),
        )
    }

    /// Check if a point lies inside the box (boundary inclusive)
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let d = point - self.center;
        self.axes
            .iter()
            .all(|axis| d.dot(&axis.direction).abs() <= axis.half_extent())
    }

    /// Closest point of the box to `point`
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        let d = point - self.center;
        let mut closest = self.center;
        for axis in &self.axes {
            let h = axis.half_extent();
            let t = d.dot(&axis.direction).clamp(-h, h);
            closest += axis.direction * t;
        }
        closest
    }

    /// Half-length of the box's projection onto `direction`
    pub fn projected_radius(&self, direction: &Vec3) -> f32 {
        self.axes
            .iter()
            .map(|axis| axis.half_extent() * axis.direction.dot(direction).abs())
            .sum()
    }

    /// End points of the segment through the box center along the largest axis
    pub fn line_segment(&self) -> (Vec3, Vec3) {
        let offset = self.axes[0].direction * self.axes[0].half_extent();
        (self.center - offset, self.center + offset)
    }

    /// The 8 corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::zeros(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let mut p = self.center;
            for (bit, axis) in self.axes.iter().enumerate() {
                let sign = if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
                p += axis.direction * (sign * axis.half_extent());
            }
            *corner = p;
        }
        corners
    }

    /// The six face planes, normals pointing inward
    pub fn face_planes(&self) -> [Plane; 6] {
        let mut planes = [Plane::from_raw(Vec3::x(), 0.0); 6];
        for (pair, axis) in planes.chunks_exact_mut(2).zip(&self.axes) {
            let h = axis.half_extent();
            let n = axis.direction;
            let c = n.dot(&self.center);
            // Inside when c - h <= n.P <= c + h
            pair[0] = Plane::from_raw(n, h - c);
            pair[1] = Plane::from_raw(-n, h + c);
        }
        planes
    }

    /// The face planes as a convex hull
    pub fn planes(&self) -> ConvexHull {
        ConvexHull::new(self.face_planes().to_vec())
    }

    /// Move the box from model space into world space
    pub fn transformed(&self, placement: &Placement) -> OrientedBox {
        let axes = self.axes.map(|axis| PcaAxis {
            direction: placement.rotate(&axis.direction),
            extent: axis.extent * placement.scale,
        });
        OrientedBox::new(placement.transform_point(&self.center), axes)
    }
}
