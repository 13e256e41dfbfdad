//! Exact intersection and containment tests between bounding volumes
//!
//! [`box_intersects_cylinder`] is the one conservative test here: it may
//! report an overlap that does not exist, never the reverse.

use crate::foundation::math::{sqrf, Vec3};
use crate::volumes::{
    BoundingSphere, ConvexHull, Cylinder, Ellipsoid, OrientedBox, AABB,
};
use super::BoundsCheckResult;

/// Check if two AABBs overlap; touching faces do not count
#[inline]
pub fn aabb_intersects_aabb(a: &AABB, b: &AABB) -> bool {
    a.intersects(b)
}

/// Check if a point lies inside an AABB (boundary inclusive)
#[inline]
pub fn point_in_aabb(point: &Vec3, aabb: &AABB) -> bool {
    aabb.contains_point(*point)
}

/// Check if `inner` lies completely inside `outer`
#[inline]
pub fn aabb_is_completely_inside(inner: &AABB, outer: &AABB) -> bool {
    inner.is_completely_inside(outer)
}

/// Check if two spheres overlap; touching spheres do not count
#[inline]
pub fn sphere_intersects_sphere(a: &BoundingSphere, b: &BoundingSphere) -> bool {
    a.intersects(b)
}

/// Check if a point is strictly inside a sphere
#[inline]
pub fn point_in_sphere(point: &Vec3, sphere: &BoundingSphere) -> bool {
    sphere.contains_point(point)
}

/// Check if a point lies inside an oriented box
#[inline]
pub fn point_in_box(point: &Vec3, obb: &OrientedBox) -> bool {
    obb.contains_point(point)
}

/// Check if an oriented box and a sphere overlap.
///
/// Uses the box point closest to the sphere center, computed in the box frame.
pub fn box_intersects_sphere(obb: &OrientedBox, sphere: &BoundingSphere) -> bool {
    let closest = obb.closest_point(&sphere.center);
    (closest - sphere.center).magnitude_squared() < sqrf(sphere.radius)
}

/// Check if an oriented box and a cylinder may overlap.
///
/// Separating axis test over the box axes, the cylinder axis, and their cross
/// products. Axes normal to the cylinder's curved side are not tried, so a
/// box edge close to that side can be reported as overlapping.
pub fn box_intersects_cylinder(obb: &OrientedBox, cylinder: &Cylinder) -> bool {
    let offset = cylinder.center - obb.center;
    let separated_along = |axis: Vec3| {
        let length_squared = axis.magnitude_squared();
        if length_squared < 1e-10 {
            return false;
        }
        let axis = axis / length_squared.sqrt();
        offset.dot(&axis).abs() > obb.projected_radius(&axis) + cylinder.projected_radius(&axis)
    };

    if obb.axes.iter().any(|a| separated_along(a.direction)) {
        return false;
    }
    if separated_along(cylinder.axis) {
        return false;
    }
    !obb.axes
        .iter()
        .any(|a| separated_along(cylinder.axis.cross(&a.direction)))
}

/// Classify a sphere against a cylinder
pub fn query_sphere_cylinder(sphere: &BoundingSphere, cylinder: &Cylinder) -> BoundsCheckResult {
    let d = sphere.center - cylinder.center;
    let along = d.dot(&cylinder.axis).abs();
    let radial = (d - cylinder.axis * d.dot(&cylinder.axis)).norm();
    let half_length = cylinder.length * 0.5;
    let r = sphere.radius;

    if along >= half_length + r || radial >= cylinder.radius + r {
        return BoundsCheckResult::CompletelyOutside;
    }
    // Beyond both the cap plane and the tube, only the rim circle can touch
    if along > half_length
        && radial > cylinder.radius
        && sqrf(along - half_length) + sqrf(radial - cylinder.radius) >= sqrf(r)
    {
        return BoundsCheckResult::CompletelyOutside;
    }
    if along + r <= half_length && radial + r <= cylinder.radius {
        return BoundsCheckResult::CompletelyInside;
    }
    BoundsCheckResult::PartiallyInside
}

/// Check if a point lies inside a cylinder
#[inline]
pub fn point_in_cylinder(point: &Vec3, cylinder: &Cylinder) -> bool {
    cylinder.contains_point(point)
}

/// Check if a point lies inside an ellipsoid
#[inline]
pub fn point_in_ellipsoid(point: &Vec3, ellipsoid: &Ellipsoid) -> bool {
    ellipsoid.contains_point(point)
}

/// Check if a point is on the inside of every hull plane
#[inline]
pub fn point_in_convex_hull(point: &Vec3, hull: &ConvexHull) -> bool {
    hull.contains_point(point)
}
