//! Per-model bounds
//!
//! - [`selector`] fits every candidate volume and picks the preferred ones
//! - [`record`] holds the result
//! - [`model`] owns the LOD vertex sets and the record, and offers the
//!   manual overrides (world-aligned box, capsule collision shape)

pub mod flags;
pub mod model;
pub mod record;
pub mod selector;

pub use flags::BoundsFlags;
pub use model::Model;
pub use record::BoundsRecord;
pub use selector::{calculate_aabb, calculate_bounds};
