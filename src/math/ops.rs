//! Operator and conversion impls shared by the fixed-size vector types.
//!
//! Every type passed to [`impl_vector_ops`] must be a tuple struct over
//! `[f32; N]`.

macro_rules! impl_vector_ops {
    ($ty:ident, $n:literal) => {
        impl ::std::ops::AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                for (a, b) in self.0.iter_mut().zip(rhs.0) {
                    *a += b;
                }
            }
        }

        impl ::std::ops::SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                for (a, b) in self.0.iter_mut().zip(rhs.0) {
                    *a -= b;
                }
            }
        }

        impl ::std::ops::MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, scalar: f32) {
                for a in &mut self.0 {
                    *a *= scalar;
                }
            }
        }

        impl ::std::ops::DivAssign<f32> for $ty {
            #[inline]
            fn div_assign(&mut self, scalar: f32) {
                for a in &mut self.0 {
                    *a /= scalar;
                }
            }
        }

        impl ::std::ops::Add for $ty {
            type Output = Self;
            #[inline]
            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl ::std::ops::Sub for $ty {
            type Output = Self;
            #[inline]
            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl ::std::ops::Mul<f32> for $ty {
            type Output = Self;
            #[inline]
            fn mul(mut self, scalar: f32) -> Self {
                self *= scalar;
                self
            }
        }

        impl ::std::ops::Mul<$ty> for f32 {
            type Output = $ty;
            #[inline]
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        impl ::std::ops::Div<f32> for $ty {
            type Output = Self;
            #[inline]
            fn div(mut self, scalar: f32) -> Self {
                self /= scalar;
                self
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self(self.0.map(|a| -a))
            }
        }

        impl ::std::ops::Index<usize> for $ty {
            type Output = f32;
            #[inline]
            fn index(&self, idx: usize) -> &f32 {
                &self.0[idx]
            }
        }

        impl ::std::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, idx: usize) -> &mut f32 {
                &mut self.0[idx]
            }
        }

        /// Component-wise equality under [`approx_eq`](crate::math::approx_eq).
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.0
                    .iter()
                    .zip(other.0.iter())
                    .all(|(&a, &b)| $crate::math::approx_eq(a, b))
            }
        }

        impl ::approx::AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                $crate::math::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.0
                    .iter()
                    .zip(other.0.iter())
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                $crate::math::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.0
                    .iter()
                    .zip(other.0.iter())
                    .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl ::approx::UlpsEq for $ty {
            fn default_max_ulps() -> u32 {
                4
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.0
                    .iter()
                    .zip(other.0.iter())
                    .all(|(a, b)| ::approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
            }
        }

        impl From<[f32; $n]> for $ty {
            fn from(components: [f32; $n]) -> Self {
                Self(components)
            }
        }

        impl From<$ty> for [f32; $n] {
            fn from(v: $ty) -> Self {
                v.0
            }
        }

        impl TryFrom<&[f32]> for $ty {
            type Error = $crate::error::VecmathError;

            fn try_from(slice: &[f32]) -> $crate::error::Result<Self> {
                <[f32; $n]>::try_from(slice).map(Self).map_err(|_| {
                    $crate::error::VecmathError::LengthMismatch {
                        expected: $n,
                        actual: slice.len(),
                    }
                })
            }
        }

        impl AsRef<[f32]> for $ty {
            fn as_ref(&self) -> &[f32] {
                &self.0
            }
        }

        impl AsMut<[f32]> for $ty {
            fn as_mut(&mut self) -> &mut [f32] {
                &mut self.0
            }
        }
    };
}

pub(crate) use impl_vector_ops;
