//! Models: vertex sets per level of detail plus their fitted bounds

use crate::config::FittingConfig;
use crate::error::{BoundsError, BoundsResult};
use crate::foundation::math::{max_component, Vec3};
use crate::volumes::{Capsule, PcaAxis, SpecialShape, AABB};
use super::flags::BoundsFlags;
use super::record::BoundsRecord;
use super::selector::{calculate_aabb, calculate_bounds};

/// A model with one vertex set per level of detail.
///
/// LOD 0 is the most detailed level and is the one bounds are fitted to.
#[derive(Debug, Clone)]
pub struct Model {
    lods: Vec<Vec<Vec3>>,
    bounds: BoundsRecord,
}

impl Model {
    /// Create a model from its LOD vertex sets.
    ///
    /// Bounds start out empty; call [`Model::calculate_bounds`] or one of the
    /// setters to fill them.
    pub fn new(lods: Vec<Vec<Vec3>>) -> BoundsResult<Self> {
        if lods.is_empty() {
            return Err(BoundsError::NoLodLevels);
        }
        if let Some(level) = lods.iter().position(Vec::is_empty) {
            return Err(BoundsError::EmptyLodLevel(level));
        }
        Ok(Self { lods, bounds: BoundsRecord::default() })
    }

    /// Number of LOD levels
    pub fn lod_count(&self) -> usize {
        self.lods.len()
    }

    /// Vertices of one LOD level
    pub fn lod_vertices(&self, level: usize) -> Option<&[Vec3]> {
        self.lods.get(level).map(Vec::as_slice)
    }

    /// Current bounds record
    pub fn bounds(&self) -> &BoundsRecord {
        &self.bounds
    }

    /// Fit the bounds to LOD 0.
    ///
    /// A collision shape assigned earlier is kept.
    pub fn calculate_bounds(&mut self, config: &FittingConfig) -> BoundsResult<&BoundsRecord> {
        let mut record = calculate_bounds(&self.lods[0], config)?;
        if let Some(shape) = self.bounds.collision_shape.take() {
            record.collision_shape = Some(shape);
            record.flags |= BoundsFlags::SPECIAL_IS_COLLISION_SHAPE;
        }
        self.bounds = record;
        Ok(&self.bounds)
    }

    /// Union of the AABBs of all LOD levels and its largest dimension
    pub fn get_max_extents(&self) -> BoundsResult<(AABB, f32)> {
        let mut aabb = calculate_aabb(&self.lods[0])?;
        for lod in &self.lods[1..] {
            aabb.extend(&calculate_aabb(lod)?);
        }
        let max_dim = max_component(&aabb.dimensions());
        Ok((aabb, max_dim))
    }

    /// Replace the fitted bounds with a world-aligned box matching `aabb`.
    ///
    /// Only `PREFER_BOX` is set afterwards and any special shape is dropped;
    /// the sphere becomes the box's circumscribed sphere.
    pub fn set_obb_with_aabb_bounds(&mut self, aabb: &AABB) {
        self.bounds.axes = PcaAxis::world_aligned(aabb.dimensions());
        self.bounds.box_center = aabb.center();
        self.bounds.aabb = *aabb;
        self.bounds.sphere = aabb.circumscribed_sphere();
        self.bounds.special = None;
        self.bounds.collision_shape = None;
        self.bounds.flags = BoundsFlags::PREFER_BOX;
    }

    /// Assign a capsule as the model's collision shape
    pub fn set_bounding_collision_shape_capsule(&mut self, capsule: Capsule) -> BoundsResult<()> {
        capsule.validate()?;
        self.bounds.collision_shape = Some(SpecialShape::Capsule(Box::new(capsule)));
        self.bounds.flags |= BoundsFlags::SPECIAL_IS_COLLISION_SHAPE;
        Ok(())
    }
}
