//! View frustum for visibility culling

use crate::foundation::math::Vec3;
use super::hull::{ConvexHull, ConvexHullFull, ConvexHullWithVertices, Plane};
use super::sphere::BoundingSphere;
use serde::{Deserialize, Serialize};

/// Frustum for visibility culling.
///
/// Stored as a full convex hull (planes, corner vertices, center and radius)
/// so the conservative hull tests can use every representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    /// Planes (left, right, bottom, top, near, far) with corners
    pub hull: ConvexHullFull,
    /// Position of the viewpoint
    pub position: Vec3,
}

impl Frustum {
    /// Create a frustum from its planes, corner vertices and viewpoint
    pub fn new(planes: Vec<Plane>, vertices: Vec<Vec3>, position: Vec3) -> Self {
        let hull = ConvexHullWithVertices::new(ConvexHull::new(planes), vertices);
        Self { hull: ConvexHullFull::from_hull(hull), position }
    }

    /// Build a perspective frustum looking along `forward`.
    ///
    /// `fov_y` is the full vertical field of view in radians.
    pub fn from_perspective(
        position: Vec3,
        forward: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let f = forward.normalize();
        let r = f.cross(&up).normalize();
        let u = r.cross(&f);

        let tan_half = (fov_y * 0.5).tan();
        let (near_h, far_h) = (near * tan_half, far * tan_half);
        let (near_w, far_w) = (near_h * aspect, far_h * aspect);

        let near_center = position + f * near;
        let far_center = position + f * far;
        let mut vertices = Vec::with_capacity(8);
        for (center, w, h) in [(near_center, near_w, near_h), (far_center, far_w, far_h)] {
            for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                vertices.push(center + r * (sx * w) + u * (sy * h));
            }
        }

        // Side planes pass through the viewpoint; normals point inward
        let left_edge = f * near - r * near_w;
        let right_edge = f * near + r * near_w;
        let bottom_edge = f * near - u * near_h;
        let top_edge = f * near + u * near_h;
        let planes = vec![
            Plane::from_point_normal(&position, &left_edge.cross(&u)),
            Plane::from_point_normal(&position, &u.cross(&right_edge)),
            Plane::from_point_normal(&position, &r.cross(&bottom_edge)),
            Plane::from_point_normal(&position, &top_edge.cross(&r)),
            Plane::from_point_normal(&near_center, &f),
            Plane::from_point_normal(&far_center, &-f),
        ];
        Self::new(planes, vertices, position)
    }

    /// Plane representation of the frustum
    pub fn planes(&self) -> &ConvexHull {
        &self.hull.hull.hull
    }

    /// Corner vertices of the frustum
    pub fn vertices(&self) -> &[Vec3] {
        &self.hull.hull.vertices
    }

    /// Sphere around the frustum's corners
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.hull.center, self.hull.plane_radius)
    }

    /// Check if a point is inside the frustum
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.planes().contains_point(point)
    }
}
