//! Light volumes that extend to infinity away from the light position

use crate::foundation::math::Vec3;
use super::hull::Plane;
use serde::{Deserialize, Serialize};

/// Infinite pyramid with its apex at the light position.
///
/// The pyramid is spanned by the rays from the apex through each base vertex;
/// the base vertices are ordered around the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfinitePyramidBase {
    /// Apex of the pyramid
    pub apex: Vec3,
    /// Unit direction the pyramid opens towards
    pub axis: Vec3,
    /// Points on the pyramid's edges, one per edge
    pub base_vertices: Vec<Vec3>,
}

impl InfinitePyramidBase {
    /// Create a new pyramid
    pub fn new(apex: Vec3, axis: Vec3, base_vertices: Vec<Vec3>) -> Self {
        Self { apex, axis: axis.normalize(), base_vertices }
    }

    /// Unit directions of the pyramid's edges
    pub fn edge_directions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.base_vertices.iter().map(move |v| (v - self.apex).normalize())
    }

    /// Side planes through the apex, normals pointing into the pyramid.
    ///
    /// Empty for fewer than three base vertices; edges too close to parallel
    /// to span a plane are skipped.
    pub fn side_planes(&self) -> impl Iterator<Item = Plane> + '_ {
        let n = self.base_vertices.len();
        let count = if n < 3 { 0 } else { n };
        (0..count).filter_map(move |i| {
            let a = self.base_vertices[i] - self.apex;
            let b = self.base_vertices[(i + 1) % n] - self.apex;
            let mut normal = a.cross(&b);
            if normal.norm() <= f32::EPSILON {
                return None;
            }
            if normal.dot(&self.axis) < 0.0 {
                normal = -normal;
            }
            Some(Plane::from_point_normal(&self.apex, &normal))
        })
    }

    /// Sine and cosine of the largest angle between the axis and an edge
    pub fn max_half_angular_size(&self) -> (f32, f32) {
        let cos = self
            .edge_directions()
            .map(|d| d.dot(&self.axis))
            .fold(1.0_f32, f32::min)
            .clamp(-1.0, 1.0);
        ((1.0 - cos * cos).max(0.0).sqrt(), cos)
    }
}

/// Infinite cone with its apex at the light position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfiniteSphericalSector {
    /// Apex of the cone
    pub apex: Vec3,
    /// Unit direction the cone opens towards
    pub axis: Vec3,
    /// Angle between the axis and the cone surface, radians
    pub half_angle: f32,
}

impl InfiniteSphericalSector {
    /// Create a new sector
    pub fn new(apex: Vec3, axis: Vec3, half_angle: f32) -> Self {
        Self { apex, axis: axis.normalize(), half_angle }
    }

    /// Check if a point lies within the cone (boundary inclusive)
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let d = point - self.apex;
        let distance = d.norm();
        distance == 0.0 || d.dot(&self.axis) >= distance * self.half_angle.cos()
    }
}
