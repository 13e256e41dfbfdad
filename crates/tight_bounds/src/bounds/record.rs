//! Bounds record: every bounding volume fitted to one model

use crate::foundation::math::Vec3;
use crate::volumes::{
    Capsule, Cylinder, Ellipsoid, OrientedBox, PcaAxis, SpecialShape, AABB, BoundingSphere,
};
use super::flags::BoundsFlags;
use serde::{Deserialize, Serialize};

/// Bounding volumes of a model in model space, plus the flags saying which of
/// them intersection tests should prefer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundsRecord {
    /// Principal axes sorted by decreasing extent
    pub axes: [PcaAxis; 3],
    /// Center of the oriented box
    pub box_center: Vec3,
    /// Axis-aligned box of the vertices
    pub aabb: AABB,
    /// Bounding sphere
    pub sphere: BoundingSphere,
    /// Volume preferences
    pub flags: BoundsFlags,
    /// Special bounding shape used for culling, if one was selected
    pub special: Option<SpecialShape>,
    /// Author-assigned collision shape
    pub collision_shape: Option<SpecialShape>,
}

impl BoundsRecord {
    /// Oriented box view of the record
    pub fn oriented_box(&self) -> OrientedBox {
        OrientedBox::new(self.box_center, self.axes)
    }

    /// Volume of the oriented box
    pub fn box_volume(&self) -> f32 {
        self.oriented_box().volume()
    }

    /// The special ellipsoid, if one was selected
    pub fn ellipsoid(&self) -> Option<&Ellipsoid> {
        self.special.as_ref().and_then(SpecialShape::as_ellipsoid)
    }

    /// The special cylinder, if one was selected
    pub fn cylinder(&self) -> Option<&Cylinder> {
        self.special.as_ref().and_then(SpecialShape::as_cylinder)
    }

    /// The assigned capsule collision shape, if any
    pub fn capsule(&self) -> Option<&Capsule> {
        self.collision_shape.as_ref().and_then(SpecialShape::as_capsule)
    }

    /// The special shape intersection tests should use, if preferred
    pub fn preferred_special(&self) -> Option<&SpecialShape> {
        if self.flags.contains(BoundsFlags::PREFER_SPECIAL) {
            self.special.as_ref()
        } else {
            None
        }
    }

    /// Offset from the model origin of the center of the shape physics
    /// collides with.
    ///
    /// Uses the collision shape when one is assigned, otherwise the special
    /// shape, otherwise the oriented box.
    pub fn collision_shape_center_offset(&self) -> Vec3 {
        let shape = if self.flags.contains(BoundsFlags::SPECIAL_IS_COLLISION_SHAPE) {
            self.collision_shape.as_ref()
        } else {
            self.preferred_special()
        };
        match shape {
            Some(SpecialShape::Cylinder(cylinder)) => cylinder.axis * (cylinder.length * 0.5),
            Some(SpecialShape::Ellipsoid(ellipsoid)) => ellipsoid.center,
            Some(SpecialShape::Capsule(_)) => Vec3::zeros(),
            None => self.box_center,
        }
    }
}
