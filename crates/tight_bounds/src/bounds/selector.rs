//! Bounds selection: fit every candidate volume and pick the tightest

use crate::config::FittingConfig;
use crate::error::{BoundsError, BoundsResult};
use crate::fitting::{fit_cylinder, fit_ellipsoid, pca_bounding_sphere, principal_components};
use crate::foundation::math::Vec3;
use crate::volumes::{BoundingSphere, SpecialShape, AABB};
use super::flags::BoundsFlags;
use super::record::BoundsRecord;

/// Axis-aligned box of a vertex set
pub fn calculate_aabb(vertices: &[Vec3]) -> BoundsResult<AABB> {
    if vertices.is_empty() {
        return Err(BoundsError::EmptyVertexSet);
    }
    Ok(AABB::from_points(vertices))
}

/// Fit all bounding volumes to `vertices` and set the preference flags.
///
/// The oriented box and the sphere are always fitted. Ellipsoid and cylinder
/// are only tried for non-flat sets and only kept when clearly smaller than
/// the best basic volume. Deterministic: the same input gives the same record.
pub fn calculate_bounds(vertices: &[Vec3], config: &FittingConfig) -> BoundsResult<BoundsRecord> {
    let pca = principal_components(vertices, config)?;
    let obb = pca.oriented_box();
    let volume_box = obb.volume();

    let mut sphere = pca_bounding_sphere(vertices, &pca.axes[0].direction)?;
    let mut volume_sphere = sphere.volume();
    log::debug!(
        "Bounding sphere: center {:?}, radius {}",
        sphere.center,
        sphere.radius
    );
    if volume_sphere > volume_box {
        let box_radius = obb.circumscribed_radius();
        if box_radius < sphere.radius {
            sphere = BoundingSphere::new(pca.center, box_radius);
            volume_sphere = sphere.volume();
            log::debug!("Using the box's circumscribed sphere (radius {})", box_radius);
        }
    }

    let mut best_volume;
    let mut flags = if volume_box < volume_sphere {
        best_volume = volume_box;
        if pca.axes[0].extent >= config.line_segment_ratio * pca.axes[1].extent {
            BoundsFlags::PREFER_BOX_LINE_SEGMENT
        } else {
            BoundsFlags::PREFER_BOX
        }
    } else {
        best_volume = volume_sphere;
        BoundsFlags::PREFER_SPHERE
    };

    let mut special = None;
    // Flat sets rarely give an exactly zero third extent
    if pca.axes[2].extent > config.flat_epsilon {
        let ellipsoid = fit_ellipsoid(vertices, &pca)?;
        let volume_ellipsoid = ellipsoid.volume();
        log::debug!(
            "Bounding ellipsoid volume {}, best volume {}",
            volume_ellipsoid,
            best_volume
        );
        let cylinder = fit_cylinder(vertices, &pca)?;
        let volume_cylinder = cylinder.volume();
        log::debug!(
            "Bounding cylinder length {}, radius {}, volume {}, best volume {}",
            cylinder.length,
            cylinder.radius,
            volume_cylinder,
            best_volume
        );

        let clearly_smaller = |volume: f32, best: f32| {
            volume < config.special_volume_ratio * best
                && best - volume > config.special_volume_epsilon
        };
        if clearly_smaller(volume_ellipsoid, best_volume) && volume_ellipsoid <= volume_cylinder {
            flags |= BoundsFlags::PREFER_SPECIAL;
            special = Some(SpecialShape::Ellipsoid(Box::new(ellipsoid)));
            best_volume = volume_ellipsoid;
        } else if clearly_smaller(volume_cylinder, best_volume) {
            flags |= BoundsFlags::PREFER_SPECIAL;
            special = Some(SpecialShape::Cylinder(Box::new(cylinder)));
            best_volume = volume_cylinder;
        }
    }

    let aabb = calculate_aabb(vertices)?;
    if config.aabb_volume_ratio * aabb.volume() <= volume_box {
        flags |= BoundsFlags::PREFER_AABB;
    }

    log::debug!(
        "Bounding volume selected: basic {}{}, special {:?}, volume {}",
        flags.basic_volume_name(),
        if flags.contains(BoundsFlags::PREFER_AABB) { " (AABB preferred)" } else { "" },
        special.as_ref().map(SpecialShape::kind),
        best_volume
    );

    Ok(BoundsRecord {
        axes: pca.axes,
        box_center: pca.center,
        aabb,
        sphere,
        flags,
        special,
        collision_shape: None,
    })
}
