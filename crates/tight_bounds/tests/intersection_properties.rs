//! Intersection tests on placed bounds records

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tight_bounds::foundation::math::orthonormal_complement;
use tight_bounds::intersection::{
    aabb_intersects_aabb, cylinder_intersects_convex_hull,
    infinite_spherical_sector_intersects_frustum, query_octree_node_convex_hull,
    query_octree_node_sphere, sphere_intersects_convex_hull,
};
use tight_bounds::prelude::*;

mod common;
use common::{
    box_vertices, random_cloud, random_hull, random_in_unit_ball, random_offset, random_rotation,
    ring_stack,
};

fn fitted(vertices: &[Vec3]) -> BoundsRecord {
    calculate_bounds(vertices, &FittingConfig::default()).unwrap()
}

fn camera() -> Frustum {
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

/// World-aligned cube hull of half size `half` around `center`
fn cube_hull(center: Vec3, half: f32) -> ConvexHull {
    OrientedBox::new(center, PcaAxis::world_aligned(Vec3::new(2.0, 2.0, 2.0) * half)).planes()
}

#[test]
fn hull_containing_a_vertex_is_never_rejected() {
    let mut rng = StdRng::seed_from_u64(5);
    for half in [Vec3::new(1.0, 1.0, 1.0), Vec3::new(6.0, 1.0, 0.5), Vec3::new(2.0, 2.0, 0.3)] {
        let vertices = random_cloud(&mut rng, 60, half);
        let record = fitted(&vertices);
        for _ in 0..20 {
            let placement = Placement::new(
                random_offset(&mut rng, 10.0),
                random_rotation(&mut rng),
                rng.gen_range(0.5..2.0),
            );
            let vertex = placement.transform_point(&vertices[rng.gen_range(0..vertices.len())]);
            let hull = cube_hull(vertex + random_offset(&mut rng, 0.2), 0.3);
            assert!(bounds_intersects_convex_hull(&record, &placement, &hull));
        }
    }
}

#[test]
fn sphere_containing_a_vertex_is_never_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    for half in [Vec3::new(1.0, 1.0, 1.0), Vec3::new(8.0, 0.5, 0.5), Vec3::new(3.0, 3.0, 0.5)] {
        let vertices = random_cloud(&mut rng, 60, half);
        let record = fitted(&vertices);
        for _ in 0..20 {
            let placement = Placement::new(
                random_offset(&mut rng, 10.0),
                random_rotation(&mut rng),
                rng.gen_range(0.5..2.0),
            );
            let vertex = placement.transform_point(&vertices[rng.gen_range(0..vertices.len())]);
            let sphere = BoundingSphere::new(vertex + random_offset(&mut rng, 0.2), 0.5);
            assert!(bounds_intersects_sphere(&record, &placement, &sphere));
            assert_ne!(
                query_bounds_sphere(&record, &placement, &sphere),
                BoundsCheckResult::CompletelyOutside
            );
        }
    }
}

#[test]
fn placement_moves_and_scales_the_record() {
    let record = fitted(&box_vertices(Vec3::new(1.0, 1.0, 1.0)));
    let placement = Placement::new(Vec3::new(10.0, 0.0, 0.0), Quat::identity(), 2.0);

    assert!(bounds_intersects_convex_hull(&record, &placement, &cube_hull(Vec3::new(10.0, 0.0, 0.0), 0.5)));
    // Scaled cube spans 8..12 on x
    assert!(bounds_intersects_convex_hull(&record, &placement, &cube_hull(Vec3::new(7.5, 0.0, 0.0), 1.0)));
    assert!(!bounds_intersects_convex_hull(&record, &placement, &cube_hull(Vec3::zeros(), 1.0)));
    assert!(!bounds_intersects_convex_hull(&record, &Placement::identity(), &cube_hull(Vec3::new(10.0, 0.0, 0.0), 1.0)));
}

#[test]
fn frustum_culls_records_outside_the_view() {
    let frustum = camera();
    let record = fitted(&box_vertices(Vec3::new(1.0, 1.0, 1.0)));
    let at = |x: f32, y: f32, z: f32| Placement::from_position(Vec3::new(x, y, z));

    assert!(bounds_intersects_frustum(&record, &at(0.0, 0.0, -20.0), &frustum));
    assert!(bounds_intersects_frustum(&record, &at(0.0, 0.0, -0.5), &frustum));
    assert!(!bounds_intersects_frustum(&record, &at(0.0, 0.0, 20.0), &frustum));
    assert!(!bounds_intersects_frustum(&record, &at(100.0, 0.0, -20.0), &frustum));
    assert!(!bounds_intersects_frustum(&record, &at(0.0, 0.0, -150.0), &frustum));
}

#[test]
fn octree_nodes_are_classified_three_ways() {
    let frustum = camera();
    let node = |center: Vec3, half: f32| {
        OctreeNodeBounds::from_aabb(AABB::from_center_extents(center, Vec3::new(half, half, half)))
    };
    assert_eq!(
        query_octree_node_convex_hull(&node(Vec3::new(0.0, 0.0, -20.0), 1.0), frustum.planes()),
        BoundsCheckResult::CompletelyInside
    );
    assert_eq!(
        query_octree_node_convex_hull(&node(Vec3::new(0.0, 0.0, -1.0), 0.5), frustum.planes()),
        BoundsCheckResult::PartiallyInside
    );
    assert_eq!(
        query_octree_node_convex_hull(&node(Vec3::new(100.0, 0.0, -20.0), 1.0), frustum.planes()),
        BoundsCheckResult::CompletelyOutside
    );

    let sphere = BoundingSphere::new(Vec3::zeros(), 5.0);
    assert_eq!(query_octree_node_sphere(&node(Vec3::zeros(), 1.0), &sphere), BoundsCheckResult::CompletelyInside);
    assert_eq!(
        query_octree_node_sphere(&node(Vec3::new(5.0, 0.0, 0.0), 1.0), &sphere),
        BoundsCheckResult::PartiallyInside
    );
    assert_eq!(
        query_octree_node_sphere(&node(Vec3::new(5.0, 5.0, 0.0), 1.0), &sphere),
        BoundsCheckResult::CompletelyOutside
    );
}

#[test]
fn disjoint_unit_boxes_do_not_intersect() {
    let a = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let b = AABB::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
    assert!(!aabb_intersects_aabb(&a, &b));
    assert!(aabb_intersects_aabb(&a, &AABB::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(2.0, 2.0, 2.0))));
}

#[test]
fn spotlight_sector_visibility() {
    let frustum = camera();
    let test = |apex: Vec3, axis: Vec3| {
        let sector = InfiniteSphericalSector::new(apex, axis, 0.4);
        infinite_spherical_sector_intersects_frustum(&sector, &frustum, 0.4_f32.cos(), 0.4_f32.sin())
    };
    assert!(test(Vec3::new(0.0, 0.0, -30.0), -Vec3::y()));
    assert!(test(Vec3::new(0.0, 10.0, 10.0), Vec3::new(0.0, -0.5, -1.0).normalize()));
    assert!(!test(Vec3::new(0.0, 0.0, 5.0), Vec3::z()));
}

/// Samples per shape when looking for a point shared with the hull
const SAMPLES: usize = 200;

#[test]
fn sphere_hull_test_never_misses_a_shared_point() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut shared = 0;
    for _ in 0..400 {
        let hull = random_hull(&mut rng);
        let sphere = BoundingSphere::new(random_offset(&mut rng, 2.0), rng.gen_range(0.2..2.0));
        let has_shared_point = (0..SAMPLES).any(|_| {
            let p = sphere.center + random_in_unit_ball(&mut rng) * sphere.radius;
            hull.contains_point(&p)
        });
        if has_shared_point {
            shared += 1;
            assert!(sphere_intersects_convex_hull(&sphere, &hull), "{sphere:?} vs {hull:?}");
        }
    }
    assert!(shared > 20, "only {shared} overlapping pairs generated");
}

#[test]
fn cylinder_hull_test_never_misses_a_shared_point() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut shared = 0;
    for _ in 0..400 {
        let hull = random_hull(&mut rng);
        let axis = random_in_unit_ball(&mut rng).try_normalize(1e-3).unwrap_or_else(Vec3::z);
        let cylinder = Cylinder::new(
            random_offset(&mut rng, 2.0),
            axis,
            rng.gen_range(0.5..4.0),
            rng.gen_range(0.2..2.0),
        );
        let (u, v) = orthonormal_complement(&cylinder.axis);
        let has_shared_point = (0..SAMPLES).any(|_| {
            let along = rng.gen_range(-0.499..0.499) * cylinder.length;
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let radial = rng.gen_range(0.0..0.999_f32).sqrt() * cylinder.radius;
            let p = cylinder.center
                + cylinder.axis * along
                + (u * angle.cos() + v * angle.sin()) * radial;
            hull.contains_point(&p)
        });
        if has_shared_point {
            shared += 1;
            assert!(cylinder_intersects_convex_hull(&cylinder, &hull), "{cylinder:?} vs {hull:?}");
        }
    }
    assert!(shared > 20, "only {shared} overlapping pairs generated");
}

#[test]
fn cylinder_record_is_never_rejected_when_touching_a_vertex() {
    let vertices = ring_stack();
    let record = fitted(&vertices);
    assert!(record.preferred_special().and_then(SpecialShape::as_cylinder).is_some());

    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let placement = Placement::new(
            random_offset(&mut rng, 10.0),
            random_rotation(&mut rng),
            rng.gen_range(0.5..2.0),
        );
        let vertex = placement.transform_point(&vertices[rng.gen_range(0..vertices.len())]);
        let hull = cube_hull(vertex + random_offset(&mut rng, 0.2), 0.3);
        assert!(bounds_intersects_convex_hull(&record, &placement, &hull));
        let sphere = BoundingSphere::new(vertex + random_offset(&mut rng, 0.2), 0.5);
        assert!(bounds_intersects_sphere(&record, &placement, &sphere));
    }
}
