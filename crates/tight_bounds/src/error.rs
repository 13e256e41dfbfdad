//! Error types for bounds fitting

use crate::config::ConfigError;
use thiserror::Error;

/// Errors produced while fitting or assigning bounding volumes
#[derive(Error, Debug)]
pub enum BoundsError {
    /// Fitting needs at least one vertex
    #[error("Cannot fit bounds to an empty vertex set")]
    EmptyVertexSet,

    /// A model must have at least one level of detail
    #[error("Model has no LOD levels")]
    NoLodLevels,

    /// A specific LOD level has no vertices
    #[error("LOD level {0} has no vertices")]
    EmptyLodLevel(usize),

    /// Capsule dimensions must be non-negative and finite
    #[error("Invalid capsule: {0}")]
    InvalidCapsule(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the crate
pub type BoundsResult<T> = Result<T, BoundsError>;
