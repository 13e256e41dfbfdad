//! Special bounding volumes: ellipsoid, capsule, and the owning enum
//!
//! A bounds record only carries a special shape when it was selected (or, for
//! capsules, assigned by hand), so the payloads are boxed inside
//! [`SpecialShape`] instead of being stored inline in every record.

use crate::foundation::math::{constants::PI, sphere_volume, sqrf, Placement, Vec3};
use crate::error::{BoundsError, BoundsResult};
use super::cylinder::Cylinder;
use super::sphere::BoundingSphere;
use serde::{Deserialize, Serialize};

/// Ellipsoid described by three orthogonal semi-axis vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Center of the ellipsoid
    pub center: Vec3,
    /// Semi-axes; the length of each vector is the semi-axis length
    pub axes: [Vec3; 3],
}

impl Ellipsoid {
    /// Create a new ellipsoid
    pub fn new(center: Vec3, axes: [Vec3; 3]) -> Self {
        Self { center, axes }
    }

    /// Semi-axis lengths
    pub fn semi_axis_lengths(&self) -> [f32; 3] {
        self.axes.map(|axis| axis.norm())
    }

    /// Volume of the ellipsoid
    pub fn volume(&self) -> f32 {
        let [a, b, c] = self.semi_axis_lengths();
        4.0 / 3.0 * PI * a * b * c
    }

    /// Check if a point lies inside the ellipsoid (boundary inclusive)
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let d = point - self.center;
        let sum: f32 = self
            .axes
            .iter()
            .map(|axis| sqrf(d.dot(axis)) / sqrf(axis.magnitude_squared()))
            .sum();
        sum <= 1.0
    }

    /// Half-length of the ellipsoid's projection onto a unit `direction`
    pub fn projected_radius(&self, direction: &Vec3) -> f32 {
        self.axes
            .iter()
            .map(|axis| sqrf(axis.dot(direction)))
            .sum::<f32>()
            .sqrt()
    }

    /// Sphere around the center with the largest semi-axis as radius
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let [a, b, c] = self.semi_axis_lengths();
        BoundingSphere::new(self.center, a.max(b).max(c))
    }

    /// Move the ellipsoid from model space into world space
    pub fn transformed(&self, placement: &Placement) -> Ellipsoid {
        Ellipsoid::new(
            placement.transform_point(&self.center),
            self.axes.map(|axis| placement.transform_vector(&axis)),
        )
    }
}

/// Capsule collision shape aligned with the model's X axis.
///
/// Never fitted automatically; collaborators assign it explicitly as a
/// collision shape. `radius_y`/`radius_z` scale the cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    /// Radius of the end caps and the cylindrical section
    pub radius: f32,
    /// Length of the cylindrical section
    pub length: f32,
    /// Cross-section scale along Y
    pub radius_y: f32,
    /// Cross-section scale along Z
    pub radius_z: f32,
}

impl Capsule {
    /// Create a capsule with a circular cross-section
    pub fn new(radius: f32, length: f32) -> Self {
        Self { radius, length, radius_y: 1.0, radius_z: 1.0 }
    }

    /// Check that every dimension is finite and non-negative
    pub fn validate(&self) -> BoundsResult<()> {
        let fields = [
            ("radius", self.radius),
            ("length", self.length),
            ("radius_y", self.radius_y),
            ("radius_z", self.radius_z),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(BoundsError::InvalidCapsule(format!("{name} = {value}")));
            }
        }
        Ok(())
    }

    /// Volume of the capsule
    pub fn volume(&self) -> f32 {
        let cross_section = self.radius_y * self.radius_z;
        (PI * sqrf(self.radius) * self.length + sphere_volume(self.radius)) * cross_section
    }
}

/// Kind tag of a [`SpecialShape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialShapeKind {
    /// Ellipsoid
    Ellipsoid,
    /// Cylinder
    Cylinder,
    /// Capsule
    Capsule,
}

/// Special bounding or collision shape owned by a bounds record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpecialShape {
    /// Fitted ellipsoid
    Ellipsoid(Box<Ellipsoid>),
    /// Fitted cylinder
    Cylinder(Box<Cylinder>),
    /// Author-assigned capsule
    Capsule(Box<Capsule>),
}

impl SpecialShape {
    /// Shape kind
    pub fn kind(&self) -> SpecialShapeKind {
        match self {
            Self::Ellipsoid(_) => SpecialShapeKind::Ellipsoid,
            Self::Cylinder(_) => SpecialShapeKind::Cylinder,
            Self::Capsule(_) => SpecialShapeKind::Capsule,
        }
    }

    /// Volume of the shape
    pub fn volume(&self) -> f32 {
        match self {
            Self::Ellipsoid(ellipsoid) => ellipsoid.volume(),
            Self::Cylinder(cylinder) => cylinder.volume(),
            Self::Capsule(capsule) => capsule.volume(),
        }
    }

    /// The ellipsoid, if this is one
    pub fn as_ellipsoid(&self) -> Option<&Ellipsoid> {
        match self {
            Self::Ellipsoid(ellipsoid) => Some(ellipsoid),
            _ => None,
        }
    }

    /// The cylinder, if this is one
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Self::Cylinder(cylinder) => Some(cylinder),
            _ => None,
        }
    }

    /// The capsule, if this is one
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            Self::Capsule(capsule) => Some(capsule),
            _ => None,
        }
    }
}
