//! Implementations of `std::ops` and approximate equality.

use std::ops::{Div, Index, IndexMut, Mul, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Quat};

/// The Hamilton product, composing the rotations of `rhs` and then `self`.
///
/// Quaternion multiplication is not commutative: `q1 * q2` and `q2 * q1` generally describe
/// different rotations.
impl<T: Number> Mul for Quat<T> {
    type Output = Quat<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let [x1, y1, z1, w1] = self.into_vec().into_array();
        let [x2, y2, z2, w2] = rhs.into_vec().into_array();

        Quat::from_components(
            x1 * w2 + w1 * x2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

/// Element-wise division by a scalar.
///
/// There is no guard against a zero divisor: the result follows the IEEE division contract of
/// the element type (infinities and NaNs propagate).
impl<T: Div + Copy> Div<T> for Quat<T> {
    type Output = Quat<T::Output>;

    fn div(self, rhs: T) -> Self::Output {
        Quat::from_vec(self.into_vec() / rhs)
    }
}

/// Element-wise negation.
///
/// A quaternion and its negation represent the same rotation (see [`Quat::angle_to`]).
impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.into_vec())
    }
}

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.as_vec() == other.as_vec()
    }
}

impl<T: Eq> Eq for Quat<T> {}

/// Indexed component access, in `[x, y, z, w]` storage order.
impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_vec()[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_vec()[index]
    }
}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_vec().abs_diff_eq(other.as_vec(), epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.as_vec().relative_eq(other.as_vec(), epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_vec().ulps_eq(other.as_vec(), epsilon, max_ulps)
    }
}
