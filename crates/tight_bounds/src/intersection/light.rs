//! Tests of infinite light volumes against view frustums
//!
//! Both light volumes are enclosed by an infinite cone around their axis. The
//! caller passes the cosine and sine of that cone's half angle (the light's
//! maximum half angular size) so they are computed once per light.

use crate::foundation::math::{sqrf, Vec3};
use crate::volumes::{BoundingSphere, Frustum, InfinitePyramidBase, InfiniteSphericalSector};

/// Check if a sphere may intersect an infinite cone.
///
/// Exact for half angles below 90 degrees; wider cones always report an
/// intersection.
pub fn sphere_intersects_cone(
    apex: &Vec3,
    axis: &Vec3,
    cos_half_angle: f32,
    sin_half_angle: f32,
    sphere: &BoundingSphere,
) -> bool {
    if cos_half_angle <= 0.0 {
        return true;
    }
    if sin_half_angle <= f32::EPSILON {
        // Degenerate cone: a ray from the apex
        let d = sphere.center - apex;
        let t = d.dot(axis).max(0.0);
        return (d - axis * t).magnitude_squared() < sqrf(sphere.radius);
    }

    // Shift the apex back so the widened cone touches the sphere's boundary
    let shifted_apex = apex - axis * (sphere.radius / sin_half_angle);
    let d = sphere.center - shifted_apex;
    let e = axis.dot(&d);
    if e <= 0.0 || sqrf(e) < d.magnitude_squared() * sqrf(cos_half_angle) {
        return false;
    }

    // Behind the real apex only the apex region itself can touch
    let d = sphere.center - apex;
    let d_squared = d.magnitude_squared();
    let e = -axis.dot(&d);
    if e > 0.0 && sqrf(e) >= d_squared * sqrf(sin_half_angle) {
        return d_squared <= sqrf(sphere.radius);
    }
    true
}

/// Check if an infinite pyramid light volume may intersect a frustum
pub fn infinite_pyramid_intersects_frustum(
    pyramid: &InfinitePyramidBase,
    frustum: &Frustum,
    cos_max_half_angular_size: f32,
    sin_max_half_angular_size: f32,
) -> bool {
    if !sphere_intersects_cone(
        &pyramid.apex,
        &pyramid.axis,
        cos_max_half_angular_size,
        sin_max_half_angular_size,
        &frustum.bounding_sphere(),
    ) {
        return false;
    }

    // Apex outside a frustum plane with every edge pointing further out
    for plane in &frustum.planes().planes {
        if plane.distance_to_point(pyramid.apex) < 0.0
            && pyramid.edge_directions().all(|d| plane.normal.dot(&d) <= 0.0)
        {
            return false;
        }
    }

    // Frustum entirely outside one side of the pyramid
    !pyramid.side_planes().any(|side| {
        frustum
            .vertices()
            .iter()
            .all(|v| side.distance_to_point(*v) < 0.0)
    })
}

/// Check if an infinite spherical sector light volume may intersect a frustum
pub fn infinite_spherical_sector_intersects_frustum(
    sector: &InfiniteSphericalSector,
    frustum: &Frustum,
    cos_max_half_angular_size: f32,
    sin_max_half_angular_size: f32,
) -> bool {
    if !sphere_intersects_cone(
        &sector.apex,
        &sector.axis,
        cos_max_half_angular_size,
        sin_max_half_angular_size,
        &frustum.bounding_sphere(),
    ) {
        return false;
    }
    if cos_max_half_angular_size <= 0.0 {
        return true;
    }

    // The direction in the cone closest to a plane normal makes the angle
    // (alpha - half angle) with it; reject when that is at least 90 degrees.
    !frustum.planes().planes.iter().any(|plane| {
        if plane.distance_to_point(sector.apex) >= 0.0 {
            return false;
        }
        let cos_alpha = plane.normal.dot(&sector.axis).clamp(-1.0, 1.0);
        let sin_alpha = (1.0 - sqrf(cos_alpha)).max(0.0).sqrt();
        cos_alpha * cos_max_half_angular_size + sin_alpha * sin_max_half_angular_size <= 0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frustum() -> Frustum {
        Frustum::from_perspective(
            Vec3::zeros(),
            -Vec3::z(),
            Vec3::y(),
            std::f32::consts::FRAC_PI_2,
            1.5,
            1.0,
            100.0,
        )
    }

    fn pyramid(apex: Vec3, axis: Vec3) -> InfinitePyramidBase {
        let (u, v) = crate::foundation::math::orthonormal_complement(&axis);
        let corners = [u + v, v - u, -u - v, u - v];
        InfinitePyramidBase::new(apex, axis, corners.iter().map(|c| apex + axis + c).collect())
    }

    fn test_pyramid(p: &InfinitePyramidBase, frustum: &Frustum) -> bool {
        let (sin, cos) = p.max_half_angular_size();
        infinite_pyramid_intersects_frustum(p, frustum, cos, sin)
    }

    fn test_sector(s: &InfiniteSphericalSector, frustum: &Frustum) -> bool {
        infinite_spherical_sector_intersects_frustum(s, frustum, s.half_angle.cos(), s.half_angle.sin())
    }

    #[test]
    fn cone_sphere_cases() {
        let apex = Vec3::zeros();
        let axis = Vec3::x();
        let (cos, sin) = (0.5_f32.cos(), 0.5_f32.sin());
        let hit = |c: Vec3, r: f32| sphere_intersects_cone(&apex, &axis, cos, sin, &BoundingSphere::new(c, r));
        assert!(hit(Vec3::new(10.0, 0.0, 0.0), 1.0));
        assert!(hit(Vec3::new(10.0, 6.0, 0.0), 1.0));
        assert!(!hit(Vec3::new(10.0, 8.0, 0.0), 1.0));
        assert!(!hit(Vec3::new(-3.0, 0.0, 0.0), 1.0));
        assert!(hit(Vec3::new(-0.5, 0.0, 0.0), 1.0));
    }

    #[test]
    fn pyramid_inside_and_outside_frustum() {
        let frustum = test_frustum();
        assert!(test_pyramid(&pyramid(Vec3::new(0.0, 0.0, -50.0), Vec3::x()), &frustum));
        assert!(!test_pyramid(&pyramid(Vec3::new(200.0, 0.0, -50.0), Vec3::x()), &frustum));
        // Behind the viewpoint but shining into the frustum
        assert!(test_pyramid(&pyramid(Vec3::new(0.0, 0.0, 50.0), -Vec3::z()), &frustum));
        // Behind the viewpoint, shining away
        assert!(!test_pyramid(&pyramid(Vec3::new(0.0, 0.0, 10.0), Vec3::z()), &frustum));
    }

    #[test]
    fn sector_inside_and_outside_frustum() {
        let frustum = test_frustum();
        let inside = InfiniteSphericalSector::new(Vec3::new(0.0, 0.0, -50.0), Vec3::x(), 0.3);
        let away = InfiniteSphericalSector::new(Vec3::new(0.0, 0.0, 10.0), Vec3::z(), 0.3);
        let towards = InfiniteSphericalSector::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::z(), 0.3);
        assert!(test_sector(&inside, &frustum));
        assert!(!test_sector(&away, &frustum));
        assert!(test_sector(&towards, &frustum));
    }
}
