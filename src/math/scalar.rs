use super::EPSILON;

/// Returns whether `a` and `b` are equal within [`EPSILON`].
///
/// The tolerance is absolute for magnitudes below 1 and relative above, so
/// values near zero and large values both absorb accumulated rounding error.
/// Identical values (including equal infinities) always compare equal. Any
/// other comparison involving an infinity, and any involving NaN, is unequal.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = 1.0_f32.max(a.abs()).max(b.abs());
    (a - b).abs() <= EPSILON * scale
}

/// Returns whether `a` is within [`EPSILON`] of zero.
#[must_use]
pub fn is_zero(a: f32) -> bool {
    approx_eq(a, 0.0)
}
