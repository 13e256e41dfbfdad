//! Conservative tests of bounding volumes against convex hulls
//!
//! A volume is rejected only when it lies entirely on the outside of a single
//! hull plane. Volumes outside the hull near one of its edges or corners are
//! still reported as intersecting; callers treat `true` as "maybe".

use crate::volumes::{
    BoundingSphere, ConvexHull, ConvexHullFull, ConvexHullWithVertices, Cylinder, Ellipsoid,
    OrientedBox, AABB,
};

/// Check if a sphere may intersect a convex hull
pub fn sphere_intersects_convex_hull(sphere: &BoundingSphere, hull: &ConvexHull) -> bool {
    hull.planes
        .iter()
        .all(|plane| plane.distance_to_point(sphere.center) >= -sphere.radius)
}

/// Check if a cylinder may intersect a convex hull
pub fn cylinder_intersects_convex_hull(cylinder: &Cylinder, hull: &ConvexHull) -> bool {
    hull.planes.iter().all(|plane| {
        plane.distance_to_point(cylinder.center) >= -cylinder.projected_radius(&plane.normal)
    })
}

/// Check if an ellipsoid may intersect a convex hull
pub fn ellipsoid_intersects_convex_hull(ellipsoid: &Ellipsoid, hull: &ConvexHull) -> bool {
    hull.planes.iter().all(|plane| {
        plane.distance_to_point(ellipsoid.center) >= -ellipsoid.projected_radius(&plane.normal)
    })
}

/// Check if an oriented box may intersect a convex hull
pub fn box_intersects_convex_hull(obb: &OrientedBox, hull: &ConvexHull) -> bool {
    hull.planes
        .iter()
        .all(|plane| plane.distance_to_point(obb.center) >= -obb.projected_radius(&plane.normal))
}

/// Check if an AABB may intersect a convex hull
pub fn aabb_intersects_convex_hull(aabb: &AABB, hull: &ConvexHull) -> bool {
    hull.planes.iter().all(|plane| {
        // The corner furthest along the normal decides
        plane.distance_to_point(aabb.positive_vertex(&plane.normal)) >= 0.0
    })
}

/// Check if a hull given by its vertices may intersect another hull.
///
/// Disjoint when every vertex lies outside one plane of `hull`.
pub fn hull_with_vertices_intersects_convex_hull(
    vertices_hull: &ConvexHullWithVertices,
    hull: &ConvexHull,
) -> bool {
    !hull.planes.iter().any(|plane| {
        vertices_hull
            .vertices
            .iter()
            .all(|v| plane.distance_to_point(*v) < 0.0)
    })
}

/// Check if a full hull may intersect another hull.
///
/// The center and plane radius decide most planes without looking at the
/// vertices; only planes passing close to the center fall back to the
/// vertex test.
pub fn convex_hull_full_intersects_convex_hull(full: &ConvexHullFull, hull: &ConvexHull) -> bool {
    for plane in &hull.planes {
        let d = plane.distance_to_point(full.center);
        if d < -full.plane_radius {
            return false;
        }
        if d >= full.plane_radius {
            continue;
        }
        if full
            .hull
            .vertices
            .iter()
            .all(|v| plane.distance_to_point(*v) < 0.0)
        {
            return false;
        }
    }
    true
}
