//! Fitting bounding volumes to vertex sets
//!
//! Everything starts from the principal axes of the vertex set: the oriented
//! box comes straight out of [`pca`], the bounding sphere is seeded along the
//! largest axis, and the ellipsoid and cylinder fits reuse the same axes.

pub mod eigen;
pub mod pca;
pub mod special;
pub mod sphere;

pub use eigen::{jacobi_eigensystem, EigenSystem};
pub use pca::{principal_components, PrincipalComponents};
pub use special::{fit_cylinder, fit_ellipsoid};
pub use sphere::{grow_enclosing_sphere, pca_bounding_sphere};
