//! Half-space planes and convex hulls built from them

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Plane defined by normal and distance from origin.
///
/// A point is on the inside of the plane when
/// [`Plane::distance_to_point`] is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector (should be normalized)
    pub normal: Vec3,
    /// Distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from normal and distance
    pub fn new(normal: Vec3, distance: f32) -> Self {
        let length = normal.norm();
        Self { normal: normal / length, distance: distance / length }
    }

    /// Create a plane from an already normalized normal, without renormalizing
    pub fn from_raw(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` whose inside is the direction of `normal`
    pub fn from_point_normal(point: &Vec3, normal: &Vec3) -> Self {
        let n = normal.normalize();
        Self { normal: n, distance: -n.dot(point) }
    }

    /// Calculate signed distance from plane to point
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }
}

/// Convex region bounded by half-space planes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConvexHull {
    /// Planes bounding the region, normals pointing inward
    pub planes: Vec<Plane>,
}

impl ConvexHull {
    /// Create a convex hull from its planes
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes }
    }

    /// Number of planes
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Check if a point is on the inside of every plane
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.planes.iter().all(|plane| plane.distance_to_point(*point) >= 0.0)
    }
}

/// Convex hull that also knows its vertices
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConvexHullWithVertices {
    /// Plane representation
    pub hull: ConvexHull,
    /// Corner points of the hull
    pub vertices: Vec<Vec3>,
}

impl ConvexHullWithVertices {
    /// Create a hull with explicit vertices
    pub fn new(hull: ConvexHull, vertices: Vec<Vec3>) -> Self {
        Self { hull, vertices }
    }
}

/// Convex hull with a center and plane radius for fast overlap tests
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConvexHullFull {
    /// Hull with vertices
    pub hull: ConvexHullWithVertices,
    /// Center of the hull
    pub center: Vec3,
    /// Largest distance from `center` to a vertex; no plane can cut the hull
    /// unless it passes within this distance of the center
    pub plane_radius: f32,
}

impl ConvexHullFull {
    /// Build from a hull with vertices; center is the vertex average
    pub fn from_hull(hull: ConvexHullWithVertices) -> Self {
        let center = if hull.vertices.is_empty() {
            Vec3::zeros()
        } else {
            hull.vertices.iter().sum::<Vec3>() / hull.vertices.len() as f32
        };
        let plane_radius = hull
            .vertices
            .iter()
            .map(|v| (v - center).norm())
            .fold(0.0_f32, f32::max);
        Self { hull, center, plane_radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube_hull() -> ConvexHullWithVertices {
        let planes = vec![
            Plane::new(Vec3::x(), 1.0),
            Plane::new(-Vec3::x(), 1.0),
            Plane::new(Vec3::y(), 1.0),
            Plane::new(-Vec3::y(), 1.0),
            Plane::new(Vec3::z(), 1.0),
            Plane::new(-Vec3::z(), 1.0),
        ];
        let mut vertices = Vec::new();
        for i in 0..8 {
            vertices.push(Vec3::new(
                if i & 1 != 0 { 1.0 } else { -1.0 },
                if i & 2 != 0 { 1.0 } else { -1.0 },
                if i & 4 != 0 { 1.0 } else { -1.0 },
            ));
        }
        ConvexHullWithVertices::new(ConvexHull::new(planes), vertices)
    }

    #[test]
    fn plane_normalizes_input() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), 4.0);
        assert_relative_eq!(plane.normal, Vec3::y());
        assert_relative_eq!(plane.distance_to_point(Vec3::zeros()), 2.0);
    }

    #[test]
    fn point_in_hull() {
        let hull = cube_hull().hull;
        assert!(hull.contains_point(&Vec3::zeros()));
        assert!(hull.contains_point(&Vec3::new(1.0, 1.0, 1.0)));
        assert!(!hull.contains_point(&Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn full_hull_has_center_and_plane_radius() {
        let full = ConvexHullFull::from_hull(cube_hull());
        assert_relative_eq!(full.center, Vec3::zeros());
        assert_relative_eq!(full.plane_radius, 3.0_f32.sqrt(), epsilon = 1e-6);
    }
}
