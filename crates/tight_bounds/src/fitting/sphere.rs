//! Bounding sphere fitting
//!
//! The sphere is seeded with the two vertices that lie furthest apart along a
//! principal axis and then grown in a single pass over the vertices: whenever
//! a vertex lies outside, the sphere is replaced by the smallest sphere that
//! contains both the old sphere and that vertex.

use crate::error::{BoundsError, BoundsResult};
use crate::foundation::math::Vec3;
use crate::volumes::BoundingSphere;

/// Indices of the first vertices with the smallest and largest projection on `axis`
pub fn min_max_projection_indices(points: &[Vec3], axis: &Vec3) -> Option<(usize, usize)> {
    let first = points.first()?.dot(axis);
    let (mut i_min, mut i_max) = (0, 0);
    let (mut min, mut max) = (first, first);
    for (i, p) in points.iter().enumerate().skip(1) {
        let d = p.dot(axis);
        if d < min {
            min = d;
            i_min = i;
        }
        if d > max {
            max = d;
            i_max = i;
        }
    }
    Some((i_min, i_max))
}

/// Grow a sphere seeded along `seed_axis` until it contains every point.
///
/// Points are visited in order, so the result is deterministic for a given
/// input. Used directly for the bounding sphere and for the circle fit of the
/// bounding cylinder (points projected into a plane).
pub fn grow_enclosing_sphere(points: &[Vec3], seed_axis: &Vec3) -> BoundsResult<BoundingSphere> {
    let (i_min, i_max) =
        min_max_projection_indices(points, seed_axis).ok_or(BoundsError::EmptyVertexSet)?;

    let mut center = (points[i_min] + points[i_max]) * 0.5;
    let mut r_squared = (points[i_min] - center).magnitude_squared();
    for p in points {
        let offset = p - center;
        let d_squared = offset.magnitude_squared();
        if d_squared > r_squared {
            // New sphere touches the old one at G, opposite P
            let g = center - offset * (r_squared.sqrt() / d_squared.sqrt());
            center = (g + p) * 0.5;
            r_squared = (p - center).magnitude_squared();
        }
    }
    Ok(BoundingSphere::new(center, r_squared.sqrt()))
}

/// Bounding sphere of `vertices` seeded along the largest principal axis
pub fn pca_bounding_sphere(vertices: &[Vec3], axis0: &Vec3) -> BoundsResult<BoundingSphere> {
    let sphere = grow_enclosing_sphere(vertices, axis0)?;
    log::trace!(
        "Bounding sphere: center {:?}, radius {}",
        sphere.center,
        sphere.radius
    );
    Ok(sphere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn seed_indices_prefer_first_occurrence() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        ];
        assert_eq!(min_max_projection_indices(&points, &Vec3::x()), Some((1, 2)));
        assert_eq!(min_max_projection_indices(&[], &Vec3::x()), None);
    }

    #[test]
    fn two_points_give_diameter_sphere() {
        let points = [Vec3::new(-3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
        let sphere = pca_bounding_sphere(&points, &Vec3::x()).unwrap();
        assert_relative_eq!(sphere.center, Vec3::zeros());
        assert_relative_eq!(sphere.radius, 3.0);
    }

    #[test]
    fn single_point_gives_zero_radius() {
        let p = Vec3::new(4.0, 5.0, 6.0);
        let sphere = pca_bounding_sphere(&[p], &Vec3::y()).unwrap();
        assert_eq!(sphere.center, p);
        assert_eq!(sphere.radius, 0.0);
    }

    #[test]
    fn grown_sphere_contains_random_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let points: Vec<Vec3> = (0..500)
            .map(|_| Vec3::new(rng.gen_range(-5.0..5.0), rng.gen_range(-2.0..2.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let sphere = grow_enclosing_sphere(&points, &Vec3::x()).unwrap();
        for p in &points {
            assert!((p - sphere.center).norm() <= sphere.radius * (1.0 + 1e-5) + 1e-5);
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            grow_enclosing_sphere(&[], &Vec3::x()),
            Err(BoundsError::EmptyVertexSet)
        ));
    }
}
