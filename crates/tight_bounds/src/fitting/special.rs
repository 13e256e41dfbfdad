//! Ellipsoid and cylinder fitting on top of the principal axes

use crate::error::BoundsResult;
use crate::foundation::math::{Mat3, Vec3};
use crate::volumes::{Cylinder, Ellipsoid};
use super::pca::{min_max_dot_products, PrincipalComponents};
use super::sphere::grow_enclosing_sphere;

/// Matrix whose columns are the principal axis directions
fn axis_matrix(pca: &PrincipalComponents) -> Mat3 {
    Mat3::from_columns(&pca.axes.map(|axis| axis.direction))
}

/// Fit an ellipsoid aligned with the principal axes.
///
/// Vertices are scaled by the inverse extents so the box becomes a unit cube,
/// a sphere is fitted in that space, and the sphere is scaled back. Extents
/// must all be positive.
pub fn fit_ellipsoid(vertices: &[Vec3], pca: &PrincipalComponents) -> BoundsResult<Ellipsoid> {
    debug_assert!(pca.axes.iter().all(|axis| axis.extent > 0.0));
    let r = axis_matrix(pca);
    let extents = Vec3::new(pca.axes[0].extent, pca.axes[1].extent, pca.axes[2].extent);

    let scale = r * Mat3::from_diagonal(&extents.map(|e| 1.0 / e)) * r.transpose();
    let scaled: Vec<Vec3> = vertices.iter().map(|v| scale * v).collect();
    let sphere = grow_enclosing_sphere(&scaled, &pca.axes[0].direction)?;

    let unscale = r * Mat3::from_diagonal(&extents) * r.transpose();
    let axes = pca.axes.map(|axis| axis.direction * (axis.extent * sphere.radius));
    Ok(Ellipsoid::new(unscale * sphere.center, axes))
}

/// Fit a cylinder whose axis is the largest principal axis.
///
/// The radius comes from a circle fitted to the vertices projected onto the
/// plane perpendicular to the axis, seeded along the second axis.
pub fn fit_cylinder(vertices: &[Vec3], pca: &PrincipalComponents) -> BoundsResult<Cylinder> {
    let axis = pca.axes[0].direction;
    let projected: Vec<Vec3> = vertices.iter().map(|v| v - axis * v.dot(&axis)).collect();
    let circle = grow_enclosing_sphere(&projected, &pca.axes[1].direction)?;

    let (min, max) = min_max_dot_products(vertices, &[axis, axis, axis]);
    let center = circle.center + axis * ((min[0] + max[0]) * 0.5);
    Ok(Cylinder::new(center, axis, pca.axes[0].extent, circle.radius))
}
