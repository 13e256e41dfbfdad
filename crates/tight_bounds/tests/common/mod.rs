//! Helpers shared by the integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;
use tight_bounds::prelude::*;

/// Random rotation with angles covering the whole sphere
pub fn random_rotation(rng: &mut StdRng) -> Quat {
    Quat::from_euler_angles(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-1.5..1.5),
        rng.gen_range(-3.0..3.0),
    )
}

/// Points uniformly spread in a randomly rotated and moved box of half size `half`
pub fn random_cloud(rng: &mut StdRng, count: usize, half: Vec3) -> Vec<Vec3> {
    let rotation = random_rotation(rng);
    let offset = Vec3::new(
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
    );
    (0..count)
        .map(|_| {
            let local = Vec3::new(
                rng.gen_range(-half.x..=half.x),
                rng.gen_range(-half.y..=half.y),
                rng.gen_range(-half.z..=half.z),
            );
            rotation * local + offset
        })
        .collect()
}

/// Offset with every component in `-range..range`
pub fn random_offset(rng: &mut StdRng, range: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

/// The eight corners of the box `-half..half`
pub fn box_vertices(half: Vec3) -> Vec<Vec3> {
    (0..8)
        .map(|i| {
            Vec3::new(
                if i & 1 != 0 { half.x } else { -half.x },
                if i & 2 != 0 { half.y } else { -half.y },
                if i & 4 != 0 { half.z } else { -half.z },
            )
        })
        .collect()
}

/// Rings of 48 points with unit radius stacked at z = -2..2
pub fn ring_stack() -> Vec<Vec3> {
    let mut vertices = Vec::new();
    for k in 0..48 {
        let angle = k as f32 / 48.0 * std::f32::consts::TAU;
        for z in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            vertices.push(Vec3::new(angle.cos(), angle.sin(), z));
        }
    }
    vertices
}

/// Random convex hull: either a rotated box or a set of planes around a center
pub fn random_hull(rng: &mut StdRng) -> ConvexHull {
    let center = random_offset(rng, 3.0);
    if rng.gen_bool(0.5) {
        let rotation = random_rotation(rng);
        let axes = [Vec3::x(), Vec3::y(), Vec3::z()]
            .map(|d| PcaAxis::new(rotation * d, rng.gen_range(0.5..4.0)));
        OrientedBox::new(center, axes).planes()
    } else {
        let count = rng.gen_range(4..9);
        let planes = (0..count)
            .map(|_| {
                let normal = loop {
                    let n = random_offset(rng, 1.0);
                    if n.norm() > 0.1 {
                        break n.normalize();
                    }
                };
                let point = center - normal * rng.gen_range(0.3..2.5);
                Plane::from_point_normal(&point, &normal)
            })
            .collect();
        ConvexHull::new(planes)
    }
}

/// Random point strictly inside the unit ball
pub fn random_in_unit_ball(rng: &mut StdRng) -> Vec3 {
    loop {
        let p = random_offset(rng, 1.0);
        if p.norm_squared() < 0.99 {
            return p;
        }
    }
}
