use super::ops::impl_vector_ops;
use super::scalar::is_zero;

/// A 3D vector of `f32` components.
///
/// Components are stored as `[x, y, z]`; indexing and the named accessors
/// read and write the same storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3([f32; 3]);

impl Vector3 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);
    pub const ONE: Self = Self([1.0, 1.0, 1.0]);
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    /// Creates a vector with every component set to `v`.
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self([v, v, v])
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[must_use]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    pub fn set_x(&mut self, x: f32) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.0[1] = y;
    }

    pub fn set_z(&mut self, z: f32) {
        self.0[2] = z;
    }

    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.0[0]
    }

    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.0[1]
    }

    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.0[2]
    }

    /// Returns the component at `idx`, or `None` if `idx > 2`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<f32> {
        self.0.get(idx).copied()
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn as_array(&self) -> &[f32; 3] {
        &self.0
    }

    /// Scalar (dot) product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }

    #[must_use]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Returns the unit vector pointing the same way, or [`Vector3::ZERO`]
    /// when the magnitude is within tolerance of zero.
    #[must_use]
    pub fn normalize(self) -> Self {
        let m = self.magnitude();
        if is_zero(m) {
            tracing::trace!(vector = ?self, "normalize of zero-length vector");
            return Self::ZERO;
        }
        self / m
    }

    #[must_use]
    pub fn dist_sq(self, other: Self) -> f32 {
        (self - other).magnitude_sq()
    }

    #[must_use]
    pub fn dist(self, other: Self) -> f32 {
        self.dist_sq(other).sqrt()
    }

    /// Component-wise minimum. See [`min_of`](crate::math::geometry::min_of)
    /// for more than two vectors.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self([
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        ])
    }

    /// Component-wise maximum. See [`max_of`](crate::math::geometry::max_of)
    /// for more than two vectors.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self([
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        ])
    }

    /// Linear interpolation, `self + (other - self) * t`. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl_vector_ops!(Vector3, 3);

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x(), v.y(), v.z())
    }
}
