//! Intersection tests between bounding volumes
//!
//! Pure functions, no allocation on the hot paths. Tests come in three
//! strengths:
//!
//! - [`exact`] - exact tests between simple volumes, plus a conservative
//!   box-cylinder test
//! - [`hull`] - conservative tests against convex hulls: `false` means
//!   disjoint, `true` means "maybe"
//! - [`light`] - conservative tests of infinite light volumes against frustums
//!
//! [`bounds`] combines them for whole bounds records and octree nodes, and
//! three-valued queries return a [`BoundsCheckResult`].

pub mod bounds;
pub mod exact;
pub mod hull;
pub mod light;

pub use bounds::*;
pub use exact::*;
pub use hull::*;
pub use light::*;

/// Classification of a volume against a query volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsCheckResult {
    /// No overlap
    CompletelyOutside,
    /// Entirely contained in the query volume
    CompletelyInside,
    /// Overlapping the query volume's boundary
    PartiallyInside,
}

impl BoundsCheckResult {
    /// Whether there is any overlap
    pub fn intersects(self) -> bool {
        self != Self::CompletelyOutside
    }
}
