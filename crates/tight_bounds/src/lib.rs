//! # Tight Bounds
//!
//! Bounding volume fitting and intersection classification for real-time
//! rendering.
//!
//! ## Features
//!
//! - **Fitting**: PCA oriented box, bounding sphere, ellipsoid and cylinder
//!   fitted to a model's vertices, with the tightest volume selected
//! - **Intersection**: exact, conservative and three-valued tests between
//!   volumes, convex hulls, frustums, light volumes and octree nodes
//! - **Configuration**: fitting thresholds loaded from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust
//! use tight_bounds::prelude::*;
//!
//! fn main() -> Result<(), BoundsError> {
//!     let vertices = vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(10.0, 0.0, 0.0),
//!         Vec3::new(0.0, 0.1, 0.0),
//!         Vec3::new(10.0, 0.1, 0.1),
//!     ];
//!     let mut model = Model::new(vec![vertices])?;
//!     let bounds = model.calculate_bounds(&FittingConfig::default())?;
//!     assert!(bounds.flags.prefers_box());
//!
//!     let hull = bounds.oriented_box().planes();
//!     assert!(bounds_intersects_convex_hull(bounds, &Placement::identity(), &hull));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod error;
pub mod volumes;
pub mod fitting;
pub mod bounds;
pub mod intersection;

pub use error::{BoundsError, BoundsResult};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        BoundsError, BoundsResult,
        foundation::math::{Vec3, Mat3, Quat, Placement},
        config::{Config, FittingConfig},
        volumes::{
            AABB, BoundingSphere, OrientedBox, PcaAxis, Cylinder, Ellipsoid, Capsule,
            SpecialShape, Plane, ConvexHull, ConvexHullWithVertices, ConvexHullFull,
            Frustum, InfinitePyramidBase, InfiniteSphericalSector, OctreeNodeBounds,
        },
        bounds::{BoundsFlags, BoundsRecord, Model, calculate_bounds, calculate_aabb},
        intersection::{
            BoundsCheckResult, bounds_intersects_convex_hull, bounds_intersects_frustum,
            bounds_intersects_sphere, query_bounds_sphere,
        },
    };
}
