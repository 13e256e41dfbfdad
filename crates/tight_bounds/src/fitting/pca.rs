//! Principal component analysis of a vertex set

use crate::config::FittingConfig;
use crate::error::{BoundsError, BoundsResult};
use crate::foundation::math::{sort3_desc_by_key, Mat3, Vec3};
use crate::volumes::{OrientedBox, PcaAxis};
use super::eigen::jacobi_eigensystem;

/// Principal axes of a vertex set together with the center of its oriented box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalComponents {
    /// Axes sorted by decreasing extent
    pub axes: [PcaAxis; 3],
    /// Center of the box spanned by the axes
    pub center: Vec3,
}

impl PrincipalComponents {
    /// Oriented box described by the components
    pub fn oriented_box(&self) -> OrientedBox {
        OrientedBox::new(self.center, self.axes)
    }
}

/// Mean and covariance matrix (divided by the vertex count)
pub fn covariance(vertices: &[Vec3]) -> BoundsResult<(Vec3, Mat3)> {
    if vertices.is_empty() {
        return Err(BoundsError::EmptyVertexSet);
    }
    let n = vertices.len() as f32;
    let mean = vertices.iter().sum::<Vec3>() / n;

    let (mut c00, mut c11, mut c22) = (0.0_f32, 0.0_f32, 0.0_f32);
    let (mut c01, mut c02, mut c12) = (0.0_f32, 0.0_f32, 0.0_f32);
    for v in vertices {
        let d = v - mean;
        c00 += d.x * d.x;
        c11 += d.y * d.y;
        c22 += d.z * d.z;
        c01 += d.x * d.y;
        c02 += d.x * d.z;
        c12 += d.y * d.z;
    }
    let c = Mat3::new(
        c00, c01, c02,
        c01, c11, c12,
        c02, c12, c22,
    ) / n;
    Ok((mean, c))
}

/// Smallest and largest dot product of the vertices with each direction
pub fn min_max_dot_products(vertices: &[Vec3], directions: &[Vec3; 3]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for v in vertices {
        for (k, direction) in directions.iter().enumerate() {
            let d = v.dot(direction);
            min[k] = min[k].min(d);
            max[k] = max[k].max(d);
        }
    }
    (min, max)
}

/// Compute the principal axes of `vertices`, their extents and the box center.
///
/// Axes are orthonormal and sorted so that `axes[0]` has the largest extent.
/// Ties keep the eigen solver's order.
pub fn principal_components(
    vertices: &[Vec3],
    config: &FittingConfig,
) -> BoundsResult<PrincipalComponents> {
    let (_mean, c) = covariance(vertices)?;
    let eigen = jacobi_eigensystem(&c, config);

    let directions = [0, 1, 2].map(|k| {
        let column = eigen.vectors.column(k).into_owned();
        column.try_normalize(f32::EPSILON).unwrap_or(column)
    });
    let (min, max) = min_max_dot_products(vertices, &directions);

    let mut center = Vec3::zeros();
    let mut axes = [PcaAxis::default(); 3];
    for k in 0..3 {
        axes[k] = PcaAxis::new(directions[k], max[k] - min[k]);
        center += directions[k] * ((max[k] + min[k]) * 0.5);
    }
    sort3_desc_by_key(&mut axes, |axis| axis.extent);

    log::trace!(
        "Principal components: extents {:.4} x {:.4} x {:.4}, center {:?}",
        axes[0].extent,
        axes[1].extent,
        axes[2].extent,
        center
    );
    Ok(PrincipalComponents { axes, center })
}
