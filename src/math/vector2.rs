use super::ops::impl_vector_ops;
use super::scalar::is_zero;

/// A 2D vector of `f32` components.
///
/// Components are stored as `[x, y]`, so `v[0]` and [`x`](Self::x) always
/// refer to the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2([f32; 2]);

impl Vector2 {
    pub const ZERO: Self = Self([0.0, 0.0]);
    pub const ONE: Self = Self([1.0, 1.0]);
    pub const X: Self = Self([1.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0]);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    /// Creates a vector with every component set to `v`.
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self([v, v])
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn set_x(&mut self, x: f32) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.0[1] = y;
    }

    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.0[0]
    }

    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.0[1]
    }

    /// Returns the component at `idx`, or `None` if `idx > 1`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<f32> {
        self.0.get(idx).copied()
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn as_array(&self) -> &[f32; 2] {
        &self.0
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    #[must_use]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean norm, `sqrt(x² + y²)`.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Returns the unit vector pointing the same way, or [`Vector2::ZERO`]
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

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self([self.x().min(other.x()), self.y().min(other.y())])
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self([self.x().max(other.x()), self.y().max(other.y())])
    }

    /// Linear interpolation, `self + (other - self) * t`. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl_vector_ops!(Vector2, 2);

impl From<nalgebra::Vector2<f32>> for Vector2 {
    fn from(v: nalgebra::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f32> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x(), v.y())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::VecmathError;
    use crate::math::approx_eq;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y)
    }

    // ── component access ──

    #[test]
    fn index_and_named_access_alias() {
        let mut a = v(1.0, 2.0);
        a[0] = 7.0;
        assert!(approx_eq(a.x(), 7.0));
        a.set_y(9.0);
        assert!(approx_eq(a[1], 9.0));
        *a.x_mut() += 1.0;
        assert!(approx_eq(a[0], 8.0));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let a = v(1.0, 2.0);
        assert_eq!(a.get(1), Some(2.0));
        assert_eq!(a.get(2), None);
    }

    // ── operators ──

    #[test]
    fn in_place_operators_mutate_receiver() {
        let mut a = v(1.0, 2.0);
        a += v(1.0, 1.0);
        assert_eq!(a, v(2.0, 3.0));
        a -= v(0.5, 0.5);
        assert_eq!(a, v(1.5, 2.5));
        a *= 2.0;
        assert_eq!(a, v(3.0, 5.0));
        a /= 4.0;
        assert_eq!(a, v(0.75, 1.25));
    }

    #[test]
    fn binary_operators_return_new_value() {
        let a = v(1.0, 2.0);
        let b = v(3.0, -1.0);
        assert_eq!(a + b, v(4.0, 1.0));
        assert_eq!(a - b, v(-2.0, 3.0));
        assert_eq!(a / 2.0, v(0.5, 1.0));
        assert_eq!(a, v(1.0, 2.0));
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let a = v(1.5, -2.25);
        assert_eq!(a * 3.0, 3.0 * a);
    }

    #[test]
    fn negation_does_not_mutate() {
        let a = v(1.0, -2.0);
        let n = -a;
        assert_eq!(n, v(-1.0, 2.0));
        assert_eq!(a + n, Vector2::ZERO);
        assert_eq!(a, v(1.0, -2.0));
    }

    #[test]
    fn scale_round_trip() {
        let a = v(0.3, 7.1);
        assert_eq!((a * 0.7) / 0.7, a);
    }

    #[test]
    fn divide_by_zero_is_not_guarded() {
        let a = v(1.0, -1.0) / 0.0;
        assert!(a.x().is_infinite() && a.y().is_infinite());
    }

    // ── equality ──

    #[test]
    fn equality_uses_tolerance() {
        assert_eq!(v(0.1 + 0.2, 1.0), v(0.3, 1.0));
        assert_ne!(v(0.0, 1.0), v(0.001, 1.0));
    }

    // ── magnitude / normalize / dist ──

    #[test]
    fn magnitude_of_3_4() {
        assert!(approx_eq(v(3.0, 4.0).magnitude(), 5.0));
        assert!(approx_eq(v(3.0, 4.0).magnitude_sq(), 25.0));
    }

    #[test]
    fn normalize_gives_unit_length() {
        let n = v(3.0, -4.0).normalize();
        assert!(approx_eq(n.magnitude(), 1.0));
        assert_eq!(n, v(0.6, -0.8));
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = Vector2::ZERO.normalize();
        assert_eq!(n, Vector2::ZERO);
        assert!(n.x().is_finite() && n.y().is_finite());
    }

    #[test]
    fn distance_between_points() {
        let a = v(1.0, 1.0);
        let b = v(4.0, 5.0);
        assert!(approx_eq(a.dist_sq(b), 25.0));
        assert!(approx_eq(a.dist(b), 5.0));
    }

    // ── min / max / lerp ──

    #[test]
    fn component_min_max() {
        let a = v(1.0, 5.0);
        let b = v(3.0, 2.0);
        assert_eq!(a.min(b), v(1.0, 2.0));
        assert_eq!(a.max(b), v(3.0, 5.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = v(0.0, 2.0);
        let b = v(4.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), v(2.0, 4.0));
    }

    // ── conversions ──

    #[test]
    fn slice_conversion_checks_length() {
        let ok = Vector2::try_from([1.0_f32, 2.0].as_slice()).unwrap();
        assert_eq!(ok, v(1.0, 2.0));

        let err = Vector2::try_from([1.0_f32, 2.0, 3.0].as_slice()).unwrap_err();
        assert_eq!(
            err,
            VecmathError::LengthMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn nalgebra_round_trip() {
        let n: nalgebra::Vector2<f32> = v(1.0, -3.0).into();
        assert!(approx_eq(n.x, 1.0) && approx_eq(n.y, -3.0));
        assert_eq!(Vector2::from(n), v(1.0, -3.0));
    }

    #[test]
    fn float_view() {
        let a = v(1.0, 2.0);
        assert_eq!(a.as_ref(), &[1.0, 2.0]);
        let arr: [f32; 2] = a.into();
        assert_eq!(arr, [1.0, 2.0]);
    }
}
