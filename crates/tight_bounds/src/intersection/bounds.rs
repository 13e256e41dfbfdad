//! Tests on whole bounds records and octree nodes
//!
//! Record tests move the record's volumes into world space with a
//! [`Placement`] and decompose into the volume tests. The flags decide which
//! volumes are worth testing; since every volume bounds the model, any one of
//! them rejecting is enough.

use crate::bounds::{BoundsFlags, BoundsRecord};
use crate::foundation::math::{sqrf, Placement};
use crate::volumes::{
    BoundingSphere, ConvexHull, Cylinder, Frustum, OctreeNodeBounds, OrientedBox, SpecialShape,
    AABB,
};
use super::exact::{box_intersects_sphere, query_sphere_cylinder};
use super::hull::{
    aabb_intersects_convex_hull, box_intersects_convex_hull, cylinder_intersects_convex_hull,
    ellipsoid_intersects_convex_hull, sphere_intersects_convex_hull,
};
use super::BoundsCheckResult;

/// Check if a thin box, tested as its center line widened by the cross-section,
/// may intersect a convex hull
fn line_segment_intersects_convex_hull(obb: &OrientedBox, hull: &ConvexHull) -> bool {
    let (p0, p1) = obb.line_segment();
    hull.planes.iter().all(|plane| {
        let cross_radius = obb.axes[1..]
            .iter()
            .map(|axis| axis.half_extent() * axis.direction.dot(&plane.normal).abs())
            .sum::<f32>();
        plane.distance_to_point(p0) >= -cross_radius || plane.distance_to_point(p1) >= -cross_radius
    })
}

/// Check if a placed record may intersect a convex hull
pub fn bounds_intersects_convex_hull(
    record: &BoundsRecord,
    placement: &Placement,
    hull: &ConvexHull,
) -> bool {
    if !sphere_intersects_convex_hull(&record.sphere.transformed(placement), hull) {
        return false;
    }
    if record.flags.contains(BoundsFlags::PREFER_AABB)
        && !aabb_intersects_convex_hull(&record.aabb.transformed(placement), hull)
    {
        return false;
    }
    if record.flags.contains(BoundsFlags::PREFER_BOX_LINE_SEGMENT) {
        if !line_segment_intersects_convex_hull(&record.oriented_box().transformed(placement), hull) {
            return false;
        }
    } else if record.flags.contains(BoundsFlags::PREFER_BOX)
        && !box_intersects_convex_hull(&record.oriented_box().transformed(placement), hull)
    {
        return false;
    }
    match record.preferred_special() {
        Some(SpecialShape::Ellipsoid(ellipsoid)) => {
            ellipsoid_intersects_convex_hull(&ellipsoid.transformed(placement), hull)
        }
        Some(SpecialShape::Cylinder(cylinder)) => {
            cylinder_intersects_convex_hull(&cylinder.transformed(placement), hull)
        }
        _ => true,
    }
}

/// Check if a placed record may intersect a frustum.
///
/// On top of the hull test, the frustum corners are tested against the faces
/// of the record's box, which rejects boxes beside the frustum's edges.
pub fn bounds_intersects_frustum(
    record: &BoundsRecord,
    placement: &Placement,
    frustum: &Frustum,
) -> bool {
    if !bounds_intersects_convex_hull(record, placement, frustum.planes()) {
        return false;
    }
    if record.flags.prefers_box() {
        let faces = record.oriented_box().transformed(placement).face_planes();
        return !faces.iter().any(|face| {
            frustum
                .vertices()
                .iter()
                .all(|v| face.distance_to_point(*v) < 0.0)
        });
    }
    true
}

/// Check if a placed record intersects a sphere
pub fn bounds_intersects_sphere(
    record: &BoundsRecord,
    placement: &Placement,
    sphere: &BoundingSphere,
) -> bool {
    if !record.sphere.transformed(placement).intersects(sphere) {
        return false;
    }
    if record.flags.prefers_box()
        && !box_intersects_sphere(&record.oriented_box().transformed(placement), sphere)
    {
        return false;
    }
    match record.preferred_special() {
        Some(SpecialShape::Cylinder(cylinder)) => {
            query_sphere_cylinder(sphere, &cylinder.transformed(placement))
                != BoundsCheckResult::CompletelyOutside
        }
        Some(SpecialShape::Ellipsoid(ellipsoid)) => {
            let ellipsoid = ellipsoid.transformed(placement);
            let d = sphere.center - ellipsoid.center;
            let distance = d.norm();
            distance == 0.0
                || distance < ellipsoid.projected_radius(&(d / distance)) + sphere.radius
        }
        _ => true,
    }
}

/// Classify a placed record against a sphere
pub fn query_bounds_sphere(
    record: &BoundsRecord,
    placement: &Placement,
    sphere: &BoundingSphere,
) -> BoundsCheckResult {
    if !bounds_intersects_sphere(record, placement, sphere) {
        return BoundsCheckResult::CompletelyOutside;
    }
    if sphere.contains_sphere(&record.sphere.transformed(placement)) {
        return BoundsCheckResult::CompletelyInside;
    }
    if record.flags.prefers_box() {
        let r_squared = sqrf(sphere.radius);
        let corners = record.oriented_box().transformed(placement).corners();
        if corners
            .iter()
            .all(|c| (c - sphere.center).magnitude_squared() <= r_squared)
        {
            return BoundsCheckResult::CompletelyInside;
        }
    }
    BoundsCheckResult::PartiallyInside
}

/// Classify an octree node against a convex hull
pub fn query_octree_node_convex_hull(
    node: &OctreeNodeBounds,
    hull: &ConvexHull,
) -> BoundsCheckResult {
    let mut inside_count = 0;
    for plane in &hull.planes {
        let d = plane.distance_to_point(node.sphere.center);
        if d < -node.sphere.radius {
            return BoundsCheckResult::CompletelyOutside;
        }
        if d >= node.sphere.radius {
            inside_count += 1;
            continue;
        }
        if plane.distance_to_point(node.aabb.positive_vertex(&plane.normal)) < 0.0 {
            return BoundsCheckResult::CompletelyOutside;
        }
        if plane.distance_to_point(node.aabb.negative_vertex(&plane.normal)) >= 0.0 {
            inside_count += 1;
        }
    }
    if inside_count == hull.planes.len() {
        BoundsCheckResult::CompletelyInside
    } else {
        BoundsCheckResult::PartiallyInside
    }
}

/// Classify an octree node against a sphere
pub fn query_octree_node_sphere(
    node: &OctreeNodeBounds,
    sphere: &BoundingSphere,
) -> BoundsCheckResult {
    if !node.sphere.intersects(sphere) {
        return BoundsCheckResult::CompletelyOutside;
    }
    let closest = sphere.center.zip_zip_map(&node.aabb.min, &node.aabb.max, |c, lo, hi| c.clamp(lo, hi));
    let r_squared = sqrf(sphere.radius);
    if (closest - sphere.center).magnitude_squared() >= r_squared {
        return BoundsCheckResult::CompletelyOutside;
    }
    let farthest = sphere.center.zip_zip_map(&node.aabb.min, &node.aabb.max, |c, lo, hi| {
        (c - lo).abs().max((hi - c).abs())
    });
    if farthest.magnitude_squared() <= r_squared {
        BoundsCheckResult::CompletelyInside
    } else {
        BoundsCheckResult::PartiallyInside
    }
}

/// AABB of a sphere
#[inline]
pub fn aabb_of_sphere(sphere: &BoundingSphere) -> AABB {
    AABB::from_sphere(sphere)
}

/// AABB of a cylinder
#[inline]
pub fn aabb_of_cylinder(cylinder: &Cylinder) -> AABB {
    cylinder.aabb()
}

/// Bounding sphere of a cylinder
#[inline]
pub fn sphere_of_cylinder(cylinder: &Cylinder) -> BoundingSphere {
    cylinder.bounding_sphere()
}
