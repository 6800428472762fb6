use std::ops;

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes the sine and cosine of the angle `self` (in radians) in one call.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`]
/// functions ([`f64::min`] and [`f64::max`] respectively).
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalar types.
///
/// Groups the capabilities that only make sense for floats and that the rotation conversions in
/// [`Quat`][crate::Quat] rely on.
pub trait Float: Number + Trig + Sqrt + MinMax + PartialOrd {
    /// Magnitude of the pitch sine at which [`Quat::to_euler_xyz`][crate::Quat::to_euler_xyz]
    /// considers the rotation to lie on the gimbal-lock pole.
    const POLE_THRESHOLD: Self;

    /// Computes the absolute value of `self`.
    fn abs(self) -> Self;
}

macro_rules! float_impls {
    ($($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }

            impl One for $t {
                const ONE: Self = 1.0;
            }

            impl Trig for $t {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Float for $t {
                const POLE_THRESHOLD: Self = 0.999_999_9;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(0.5f32, -1.0, 1.0), 0.5);
        assert_eq!(MinMax::clamp(1.5f32, -1.0, 1.0), 1.0);
        assert_eq!(MinMax::clamp(-1.5f64, -1.0, 1.0), -1.0);
    }

    #[test]
    fn sin_cos() {
        let (sin, cos) = Trig::sin_cos(0.0f64);
        assert_eq!(sin, 0.0);
        assert_eq!(cos, 1.0);
    }
}
