//! Free geometric functions over [`Vector3`].
//!
//! Numeric degeneracies never panic or return an error: a zero-length
//! denominator or a missing refraction resolves to [`Vector3::ZERO`].

use crate::error::{Result, VecmathError};

use super::scalar::{approx_eq, is_zero};
use super::Vector3;

/// Orthogonal projection of `a` onto `b`, `(a·b / b·b) · b`.
///
/// Returns [`Vector3::ZERO`] when `b·b` is within tolerance of zero.
#[must_use]
pub fn project(a: Vector3, b: Vector3) -> Vector3 {
    let bb = b.dot(b);
    if is_zero(bb) {
        tracing::trace!(onto = ?b, "projection onto zero-length vector");
        return Vector3::ZERO;
    }
    b * (a.dot(b) / bb)
}

/// Vector rejection: the component of `a` orthogonal to `b`.
#[must_use]
pub fn deproject(a: Vector3, b: Vector3) -> Vector3 {
    a - project(a, b)
}

/// Reflects incident vector `i` about normal `n`, `i − 2·(i·n)·n`.
///
/// `n` is expected to be unit length; it is not normalized here.
#[must_use]
pub fn reflect(i: Vector3, n: Vector3) -> Vector3 {
    i - n * (2.0 * i.dot(n))
}

/// Refracts incident direction `i` through a surface with normal `n`, where
/// `eta` is the ratio of refraction indices.
///
/// Returns [`Vector3::ZERO`] on total internal reflection, i.e. when
/// `k = 1 − eta²·(1 − (n·i)²)` is negative beyond tolerance. A `k` within
/// tolerance of zero is treated as grazing refraction.
#[must_use]
pub fn refract(i: Vector3, n: Vector3, eta: f32) -> Vector3 {
    let n_dot_i = n.dot(i);
    let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
    if k < 0.0 && !is_zero(k) {
        tracing::trace!(k, eta, "total internal reflection");
        return Vector3::ZERO;
    }
    i * eta - n * (eta * n_dot_i + k.max(0.0).sqrt())
}

/// Constrains the magnitude of `v` to at most `max_length`.
///
/// Vectors already within bound are returned unchanged. A non-positive
/// `max_length` yields [`Vector3::ZERO`].
#[must_use]
pub fn clamp(v: Vector3, max_length: f32) -> Vector3 {
    if max_length <= 0.0 {
        tracing::trace!(max_length, "clamp to non-positive length");
        return Vector3::ZERO;
    }
    if v.magnitude() > max_length {
        v.normalize() * max_length
    } else {
        v
    }
}

/// Linear interpolation, `a + (b − a)·t`. `t` is not clamped.
#[must_use]
pub fn lerp(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    a.lerp(b, t)
}

/// Spherically interpolates between `a` and `b` by `t`.
///
/// The direction of the result is interpolated by angle and its magnitude
/// linearly between `|a|` and `|b|`. `t` is not clamped.
///
/// - If either input is zero-length there is no direction to rotate, and the
///   result falls back to [`lerp`].
/// - The rotation axis is the part of `b`'s direction orthogonal to `a`. Only
///   when that part vanishes (exactly parallel or anti-parallel inputs) is the
///   axis ambiguous; anti-parallel inputs then rotate about an arbitrary axis
///   perpendicular to `a`.
#[must_use]
pub fn slerp(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    let ma = a.magnitude();
    let mb = b.magnitude();
    if is_zero(ma) || is_zero(mb) {
        tracing::trace!(?a, ?b, "slerp with zero-length input, using lerp");
        return lerp(a, b, t);
    }

    let ua = a / ma;
    let ub = b / mb;
    let cos_theta = ua.dot(ub);
    let ortho = ub - ua * cos_theta;
    let sin_theta = ortho.magnitude();
    let magnitude = ma + (mb - ma) * t;

    let axis = if is_zero(sin_theta) {
        if cos_theta > 0.0 {
            // Parallel: no rotation left to do.
            return lerp(ua, ub, t).normalize() * magnitude;
        }
        tracing::trace!(?a, ?b, "slerp between anti-parallel vectors");
        any_orthogonal(ua)
    } else {
        ortho / sin_theta
    };

    let angle = sin_theta.atan2(cos_theta) * t;
    (ua * angle.cos() + axis * angle.sin()) * magnitude
}

/// Rounds every component of `v` to the nearest multiple of `step`.
///
/// A `step` within tolerance of zero leaves `v` unchanged.
#[must_use]
pub fn snap(v: Vector3, step: f32) -> Vector3 {
    if is_zero(step) {
        return v;
    }
    Vector3::from(<[f32; 3]>::from(v).map(|c| (c / step).round() * step))
}

/// Component-wise minimum of a non-empty sequence, folded left to right.
///
/// # Errors
///
/// Returns [`VecmathError::EmptyInput`] if `vectors` is empty.
pub fn min_of(vectors: &[Vector3]) -> Result<Vector3> {
    let (first, rest) = vectors
        .split_first()
        .ok_or(VecmathError::EmptyInput { operation: "min_of" })?;
    Ok(rest.iter().fold(*first, |acc, v| acc.min(*v)))
}

/// Component-wise maximum of a non-empty sequence, folded left to right.
///
/// # Errors
///
/// Returns [`VecmathError::EmptyInput`] if `vectors` is empty.
pub fn max_of(vectors: &[Vector3]) -> Result<Vector3> {
    let (first, rest) = vectors
        .split_first()
        .ok_or(VecmathError::EmptyInput { operation: "max_of" })?;
    Ok(rest.iter().fold(*first, |acc, v| acc.max(*v)))
}

/// Returns a unit vector perpendicular to the unit vector `u`.
fn any_orthogonal(u: Vector3) -> Vector3 {
    let (ax, ay, az) = (u.x().abs(), u.y().abs(), u.z().abs());
    let axis = if ax <= ay && ax <= az {
        Vector3::X
    } else if ay <= az {
        Vector3::Y
    } else {
        Vector3::Z
    };
    u.cross(axis).normalize()
}
