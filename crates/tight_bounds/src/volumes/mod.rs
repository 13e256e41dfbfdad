//! Bounding volume primitives
//!
//! Plain-data geometric volumes used both as fitting results and as query
//! volumes for the intersection tests.
//!
//! # Module Organization
//!
//! - [`aabb`] - Axis-aligned boxes and octree node bounds
//! - [`sphere`] - Bounding spheres
//! - [`oriented_box`] - Principal axes and oriented boxes
//! - [`cylinder`] - Finite cylinders
//! - [`special`] - Ellipsoids, capsules and the [`SpecialShape`] enum
//! - [`hull`] - Planes and convex hulls
//! - [`frustum`] - View frustums
//! - [`light`] - Infinite light volumes
//!
//! All volumes are stored in model space; `transformed` moves them into world
//! space with a [`Placement`](crate::foundation::math::Placement).

pub mod aabb;
pub mod cylinder;
pub mod frustum;
pub mod hull;
pub mod light;
pub mod oriented_box;
pub mod special;
pub mod sphere;

// Re-export commonly used types
pub use aabb::{OctreeNodeBounds, AABB};
pub use cylinder::Cylinder;
pub use frustum::Frustum;
pub use hull::{ConvexHull, ConvexHullFull, ConvexHullWithVertices, Plane};
pub use light::{InfinitePyramidBase, InfiniteSphericalSector};
pub use oriented_box::{OrientedBox, PcaAxis};
pub use special::{Capsule, Ellipsoid, SpecialShape, SpecialShapeKind};
pub use sphere::BoundingSphere;
