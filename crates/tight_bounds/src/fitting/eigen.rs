//! Eigen decomposition of symmetric 3x3 matrices
//!
//! Cyclic Jacobi iteration: each sweep applies one plane rotation per
//! off-diagonal entry, in the order (0,1), (0,2), (1,2). Rotations are
//! accumulated so that the columns of [`EigenSystem::vectors`] are the
//! eigenvectors matching [`EigenSystem::values`].

use crate::config::FittingConfig;
use crate::foundation::math::Mat3;

/// Result of a Jacobi eigen decomposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenSystem {
    /// Eigenvalues, unsorted
    pub values: [f32; 3],
    /// Orthonormal eigenvectors stored as columns
    pub vectors: Mat3,
    /// Number of sweeps performed
    pub sweeps: u32,
    /// Whether all off-diagonal entries dropped below the epsilon
    pub converged: bool,
}

/// Plane rotation that zeroes one off-diagonal entry
struct Rotation {
    /// Tangent of the rotation angle
    t: f32,
    c: f32,
    s: f32,
}

impl Rotation {
    fn annihilating(m_pp: f32, m_qq: f32, m_pq: f32) -> Self {
        let u = (m_qq - m_pp) * 0.5 / m_pq;
        let u2 = u * u;
        let u2p1 = u2 + 1.0;
        let t = if u2p1 == u2 {
            0.5 / u
        } else {
            // Smaller root of t² + 2ut − 1 = 0, without the cancellation
            let sign = if u < 0.0 { -1.0 } else { 1.0 };
            sign / (u2p1.sqrt() + u.abs())
        };
        let c = 1.0 / (t * t + 1.0).sqrt();
        Self { t, c, s: c * t }
    }

    /// Rotate the pair `(a, b)` into `(c·a − s·b, s·a + c·b)`
    fn apply(&self, a: f32, b: f32) -> (f32, f32) {
        (self.c * a - self.s * b, self.s * a + self.c * b)
    }

    fn accumulate(&self, r: &mut Mat3, p: usize, q: usize) {
        for i in 0..3 {
            let (rp, rq) = self.apply(r[(i, p)], r[(i, q)]);
            r[(i, p)] = rp;
            r[(i, q)] = rq;
        }
    }
}

/// Compute eigenvalues and eigenvectors of the symmetric matrix `m`.
///
/// Only the upper triangle of `m` is read. When the iteration limit is reached
/// before convergence the current estimate is returned with
/// `converged == false`.
pub fn jacobi_eigensystem(m: &Mat3, config: &FittingConfig) -> EigenSystem {
    let epsilon = config.eigen_epsilon;
    let (mut m00, mut m11, mut m22) = (m[(0, 0)], m[(1, 1)], m[(2, 2)]);
    let (mut m01, mut m02, mut m12) = (m[(0, 1)], m[(0, 2)], m[(1, 2)]);

    let mut r = Mat3::identity();
    let mut sweeps = 0;
    let mut converged = false;

    while sweeps < config.eigen_max_sweeps {
        if m01.abs() < epsilon && m02.abs() < epsilon && m12.abs() < epsilon {
            converged = true;
            break;
        }
        sweeps += 1;

        if m01 != 0.0 {
            let rot = Rotation::annihilating(m00, m11, m01);
            m00 -= rot.t * m01;
            m11 += rot.t * m01;
            m01 = 0.0;
            (m02, m12) = rot.apply(m02, m12);
            rot.accumulate(&mut r, 0, 1);
        }

        if m02 != 0.0 {
            let rot = Rotation::annihilating(m00, m22, m02);
            m00 -= rot.t * m02;
            m22 += rot.t * m02;
            m02 = 0.0;
            (m01, m12) = rot.apply(m01, m12);
            rot.accumulate(&mut r, 0, 2);
        }

        if m12 != 0.0 {
            let rot = Rotation::annihilating(m11, m22, m12);
            m11 -= rot.t * m12;
            m22 += rot.t * m12;
            m12 = 0.0;
            (m01, m02) = rot.apply(m01, m02);
            rot.accumulate(&mut r, 1, 2);
        }
    }

    if !converged {
        converged = m01.abs() < epsilon && m02.abs() < epsilon && m12.abs() < epsilon;
    }
    if !converged {
        log::trace!(
            "Jacobi iteration stopped after {} sweeps (off-diagonal {:e}, {:e}, {:e})",
            sweeps,
            m01,
            m02,
            m12
        );
    }

    EigenSystem { values: [m00, m11, m22], vectors: r, sweeps, converged }
}
