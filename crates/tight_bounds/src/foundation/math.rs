//! Math utilities and types
//!
//! Provides the fundamental math types used by the fitting and intersection
//! code, plus a handful of scalar helpers that show up in almost every test.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Placement of a model instance in world space.
///
/// Bounds records are stored in model space; a placement moves them into
/// world space for intersection tests. Scale is uniform so spheres stay
/// spheres and cylinders stay cylinders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World-space position of the model origin
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: 1.0,
        }
    }
}

impl Placement {
    /// Create an identity placement
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a placement with only a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a placement from position, rotation and uniform scale
    pub fn new(position: Vec3, rotation: Quat, scale: f32) -> Self {
        Self { position, rotation, scale }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_scaling(self.scale)
    }

    /// Apply this placement to a point
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.position
    }

    /// Apply this placement to a direction (rotation and scale, no translation)
    pub fn transform_vector(&self, vector: &Vec3) -> Vec3 {
        self.rotation * (vector * self.scale)
    }

    /// Rotate a direction without scaling it
    pub fn rotate(&self, direction: &Vec3) -> Vec3 {
        self.rotation * direction
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Volume factor of a sphere, 4/3 * pi
    pub const SPHERE_VOLUME_FACTOR: f32 = 4.0 / 3.0 * PI;
}

/// Square of a value
#[inline]
pub fn sqrf(x: f32) -> f32 {
    x * x
}

/// Maximum of three values
#[inline]
pub fn max3(x: f32, y: f32, z: f32) -> f32 {
    x.max(y).max(z)
}

/// Largest component of a vector
#[inline]
pub fn max_component(v: &Vec3) -> f32 {
    max3(v.x, v.y, v.z)
}

/// Volume of a sphere with the given radius
#[inline]
pub fn sphere_volume(radius: f32) -> f32 {
    constants::SPHERE_VOLUME_FACTOR * radius * radius * radius
}

/// Sort three elements in descending order of `key`.
///
/// Adjacent elements are only swapped when the later one is strictly larger,
/// so elements with equal keys keep their relative order.
pub fn sort3_desc_by_key<T, F>(items: &mut [T; 3], key: F)
where
    F: Fn(&T) -> f32,
{
    if key(&items[0]) < key(&items[1]) {
        items.swap(0, 1);
    }
    if key(&items[1]) < key(&items[2]) {
        items.swap(1, 2);
    }
    if key(&items[0]) < key(&items[1]) {
        items.swap(0, 1);
    }
}

/// Return the two unit vectors completing `axis` to an orthonormal basis.
pub fn orthonormal_complement(axis: &Vec3) -> (Vec3, Vec3) {
    // Pick the world axis least aligned with `axis` to avoid a degenerate cross product.
    let helper = if axis.x.abs() <= axis.y.abs() && axis.x.abs() <= axis.z.abs() {
        Vec3::x()
    } else if axis.y.abs() <= axis.z.abs() {
        Vec3::y()
    } else {
        Vec3::z()
    };
    let u = axis.cross(&helper).normalize();
    let v = axis.cross(&u);
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sort3_orders_descending() {
        let mut values = [1.0_f32, 3.0, 2.0];
        sort3_desc_by_key(&mut values, |v| *v);
        assert_eq!(values, [3.0, 2.0, 1.0]);

        let mut values = [1.0_f32, 2.0, 3.0];
        sort3_desc_by_key(&mut values, |v| *v);
        assert_eq!(values, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn sort3_is_stable_under_ties() {
        let mut items = [(2.0_f32, 'a'), (5.0, 'b'), (2.0, 'c')];
        sort3_desc_by_key(&mut items, |item| item.0);
        assert_eq!(items, [(5.0, 'b'), (2.0, 'a'), (2.0, 'c')]);

        let mut items = [(1.0_f32, 'a'), (1.0, 'b'), (1.0, 'c')];
        sort3_desc_by_key(&mut items, |item| item.0);
        assert_eq!(items, [(1.0, 'a'), (1.0, 'b'), (1.0, 'c')]);
    }

    #[test]
    fn orthonormal_complement_is_orthonormal() {
        for axis in [Vec3::x(), Vec3::new(1.0, 2.0, -3.0).normalize(), Vec3::new(0.0, 0.0, -1.0)] {
            let (u, v) = orthonormal_complement(&axis);
            assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(u.dot(&axis), 0.0, epsilon = 1e-6);
            assert_relative_eq!(v.dot(&axis), 0.0, epsilon = 1e-6);
            assert_relative_eq!(u.dot(&v), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn placement_transforms_points() {
        let placement = Placement::new(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::z_axis(), constants::PI * 0.5),
            2.0,
        );
        let p = placement.transform_point(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Vec3::new(1.0, 2.0, 0.0), epsilon = 1e-5);

        let m = placement.to_matrix();
        let q = m.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(q.coords, p, epsilon = 1e-5);
    }
}
