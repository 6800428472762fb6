use std::fmt;

use crate::{vec3, vec4, Float, Number, One, Sqrt, Trig, Vec3, Vector, Zero};

mod ops;
mod view;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// This type does not enforce unit length: the constructors store whatever they are given, and
/// callers that need a rotation quaternion are responsible for keeping it normalized (see
/// [`Quat::normalize`]).
///
/// # Construction
///
/// - [`Quat::IDENTITY`] (also the [`Default`] value) is the identity rotation.
/// - [`Quat::from_components`] stores explicit component values verbatim.
/// - [`Quat::from_axis_angle`] builds a rotation about an arbitrary (unit-length) axis, and
///   [`Quat::from_rotation_x`]/[`y`][Quat::from_rotation_y]/[`z`][Quat::from_rotation_z] about a
///   coordinate axis.
/// - [`Quat::from_euler_xyz`] builds a rotation from intrinsic XYZ Euler angles;
///   [`Quat::to_euler_xyz`] is its inverse.
///
/// # Component Access
///
/// The components can be read and written as fields `x`, `y`, `z` and `w` (`w` being the real
/// part), or by index in storage order `[x, y, z, w]`. Both views alias the same backing
/// [`Vector`], which [`Quat::from_vec`] and [`Quat::into_vec`] expose directly.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, representing the absence of rotation.
    ///
    /// This is a unit quaternion that will not change a rotation it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts,
    /// while the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its four components.
    ///
    /// The values are stored verbatim; no validation or normalization takes place.
    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the backing [`Vector`] of this quaternion, in `[x, y, z, w]` order.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns a reference to the backing [`Vector`] of this quaternion.
    #[inline]
    pub const fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Returns a mutable reference to the backing [`Vector`] of this quaternion.
    #[inline]
    pub fn as_mut_vec(&mut self) -> &mut Vector<T, 4> {
        &mut self.vec
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation of `radians` around `axis`.
    ///
    /// `axis` is expected to be of unit length. This is not validated: passing a non-unit axis
    /// produces a non-unit quaternion that scales in addition to rotating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quatf::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    /// approx::assert_relative_eq!(q.z, (FRAC_PI_2 / 2.0).sin());
    /// approx::assert_relative_eq!(q.w, (FRAC_PI_2 / 2.0).cos());
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Creates a quaternion from intrinsic Euler angles, rotating around the X, Y, and Z axis of
    /// the rotating frame, in sequence.
    ///
    /// Equivalent to `Quat::from_rotation_x(angles.x) * Quat::from_rotation_y(angles.y) *
    /// Quat::from_rotation_z(angles.z)`, computed in closed form from the half-angle sines and
    /// cosines.
    #[doc(alias = "euler")]
    pub fn from_euler_xyz(angles: Vec3<T>) -> Self
    where
        T: Number + Trig,
    {
        let half = Self::one_half();
        let (s1, c1) = (angles.x * half).sin_cos();
        let (s2, c2) = (angles.y * half).sin_cos();
        let (s3, c3) = (angles.z * half).sin_cos();

        Self::from_components(
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Extracts intrinsic XYZ Euler angles from this quaternion, in radians.
    ///
    /// The quaternion is expected to be of unit length. Only the rotation-matrix entries needed
    /// for the extraction are computed; the full matrix is never materialized. The `asin`
    /// argument is clamped to `[-1, 1]` so that floating-point drift cannot push it out of the
    /// inverse-sine domain.
    ///
    /// When the pitch is at (or numerically indistinguishable from) ±90°, the X and Z rotations
    /// act around the same axis and one degree of freedom is lost. The remaining turn is then
    /// reported entirely in the X angle and the Z angle is set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// let e = vec3(0.3, 0.4, 0.5);
    /// let q = Quatd::from_euler_xyz(e);
    /// approx::assert_relative_eq!(q.to_euler_xyz(), e, epsilon = 1e-9);
    /// ```
    pub fn to_euler_xyz(self) -> Vec3<T>
    where
        T: Float,
    {
        let [x, y, z, w] = self.vec.into_array();

        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        // The rotation matrix entries the XYZ extraction reads.
        let m11 = T::ONE - (yy + zz);
        let m12 = xy - wz;
        let m13 = xz + wy;
        let m22 = T::ONE - (xx + zz);
        let m23 = yz - wx;
        let m32 = yz + wx;
        let m33 = T::ONE - (xx + yy);

        let ey = m13.clamp(-T::ONE, T::ONE).asin();

        if m13.abs() < T::POLE_THRESHOLD {
            vec3((-m23).atan2(m33), ey, (-m12).atan2(m11))
        } else {
            // Gimbal lock: the leftover turn goes to the X angle.
            vec3(m32.atan2(m22), ey, T::ZERO)
        }
    }

    /// Computes the component sum of the Hamilton product `self * other`.
    ///
    /// Note that this is *not* the Euclidean dot product of the two component vectors: the
    /// result is `w + x + y + z` of `self * other`. It is the quantity [`Quat::angle_to`] is
    /// defined in terms of.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(q.dot(Quatf::IDENTITY), 10.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        let [x, y, z, w] = (self * other).vec.into_array();
        w + x + y + z
    }

    /// Computes the rotational angle between `self` and `other`, in radians.
    ///
    /// The intermediate value is clamped into the inverse-cosine domain, and its absolute value
    /// is taken so that `q` and `-q` (which represent the same rotation) compare as zero angle
    /// apart.
    pub fn angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        let two = T::ONE + T::ONE;
        self.dot(other).clamp(-T::ONE, T::ONE).abs().acos() * two
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, the quaternion scales in addition to rotating. When
    /// using quaternions to model rotations, it is advisable to ensure that they are always of
    /// length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }
}

impl<T: Zero + One> Default for Quat<T> {
    /// Returns [`Quat::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.vec[0])
            .field("y", &self.vec[1])
            .field("z", &self.vec[2])
            .field("w", &self.vec[3])
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne};
    use std::f32::consts::FRAC_PI_2 as FRAC_PI_2_F32;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::{vec3, vec4, Vec3d};

    #[test]
    fn identity() {
        let id = Quatf::IDENTITY;
        assert_eq!(id.x, 0.0);
        assert_eq!(id.y, 0.0);
        assert_eq!(id.z, 0.0);
        assert_eq!(id.w, 1.0);
        assert_eq!(id.length(), 1.0);
        assert_eq!(Quatf::default(), id);

        assert_eq!(Quatd::IDENTITY.angle_to(Quatd::IDENTITY), 0.0);
    }

    #[test]
    fn component_access() {
        let mut q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.x, 1.0);
        assert_eq!(q.y, 2.0);
        assert_eq!(q.z, 3.0);
        assert_eq!(q.w, 4.0);
        assert_eq!(q[0], 1.0);
        assert_eq!(q[3], 4.0);

        q.w = 5.0;
        assert_eq!(q[3], 5.0);
        q[2] = 7.0;
        assert_eq!(q.z, 7.0);

        assert_eq!(q.into_vec(), vec4(1.0, 2.0, 7.0, 5.0));
        assert_eq!(Quat::from_vec(vec4(1.0, 2.0, 7.0, 5.0)), q);
    }

    #[test]
    fn from_axis_angle() {
        let q = Quatd::from_axis_angle(Vec3d::Z, FRAC_PI_2);
        assert_relative_eq!(q.x, 0.0);
        assert_relative_eq!(q.y, 0.0);
        assert_relative_eq!(q.z, FRAC_PI_4.sin());
        assert_relative_eq!(q.w, FRAC_PI_4.cos());

        assert_abs_diff_eq!(q, Quatd::from_rotation_z(FRAC_PI_2));

        // A zero angle about any axis is the identity.
        assert_abs_diff_eq!(Quatd::from_axis_angle(Vec3d::X, 0.0), Quatd::IDENTITY);
    }

    #[test]
    fn from_axis_angle_keeps_axis_scale() {
        // Non-unit axes are not normalized; the result is not a rotation quaternion.
        let q = Quatd::from_axis_angle(vec3(0.0, 0.0, 2.0), FRAC_PI_2);
        assert_relative_eq!(q.z, 2.0 * FRAC_PI_4.sin());
        assert!(q.length() > 1.0);
    }

    #[test]
    fn multiply_identity() {
        let q = Quatf::from_components(0.5, -0.5, 0.5, 0.5);
        assert_abs_diff_eq!(q * Quatf::IDENTITY, q);
        assert_abs_diff_eq!(Quatf::IDENTITY * q, q);
    }

    #[test]
    fn multiply_non_commutative() {
        let qx = Quatf::from_rotation_x(FRAC_PI_2_F32);
        let qy = Quatf::from_rotation_y(FRAC_PI_2_F32);
        assert_relative_ne!(qx * qy, qy * qx);
    }

    #[test]
    fn multiply_same_axis_is_additive() {
        let q = Quatd::from_rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(q * q, Quatd::from_rotation_z(PI), epsilon = 1e-12);
    }

    #[test]
    fn euler_round_trip() {
        let e = vec3(0.3, 0.4, 0.5);
        let q = Quatd::from_euler_xyz(e);
        assert_relative_eq!(q.to_euler_xyz(), e, epsilon = 1e-9);

        assert_abs_diff_eq!(Quatd::IDENTITY.to_euler_xyz(), Vec3d::ZERO);
    }

    #[test]
    fn euler_matches_axis_composition() {
        let [ex, ey, ez] = [0.3, 0.4, 0.5];
        let composed =
            Quatd::from_rotation_x(ex) * Quatd::from_rotation_y(ey) * Quatd::from_rotation_z(ez);
        assert_abs_diff_eq!(Quatd::from_euler_xyz(vec3(ex, ey, ez)), composed, epsilon = 1e-12);
    }

    #[test]
    fn euler_gimbal_lock() {
        // A pitch of exactly 90° puts the extraction on its pole branch: the turn collapses
        // onto the X angle and the Z angle is reported as zero.
        let q = Quatd::from_euler_xyz(vec3(0.0, FRAC_PI_2, 0.0));
        let e = q.to_euler_xyz();
        assert!(e.x.is_finite() && e.y.is_finite() && e.z.is_finite());
        assert_eq!(e.z, 0.0);
        assert_eq!(e.x, 0.0);
        // `asin` amplifies rounding error near its domain boundary, hence the loose tolerance.
        assert_relative_eq!(e.y, FRAC_PI_2, epsilon = 1e-7);
    }

    #[test]
    fn dot_is_product_component_sum() {
        let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);

        // `q * IDENTITY == q`, so the result is the plain component sum of `q`, not the
        // Euclidean dot product of the component vectors (which would be 4.0 here).
        assert_eq!(q.dot(Quatf::IDENTITY), 10.0);
        assert_eq!(Quatf::IDENTITY.dot(q), 10.0);
        assert_eq!(Quatf::IDENTITY.dot(Quatf::IDENTITY), 1.0);
    }

    #[test]
    fn angle_folds_double_cover() {
        // `q` and `-q` represent the same rotation.
        let q = Quatd::from_rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(q.angle_to(-q), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Quatd::IDENTITY.angle_to(-Quatd::IDENTITY), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn scalar_division() {
        let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q / 2.0, Quatf::from_components(0.5, 1.0, 1.5, 2.0));

        // Division by zero follows IEEE semantics instead of panicking.
        let inf = q / 0.0;
        assert!(inf.x.is_infinite());
        assert!(inf.y.is_infinite());
        assert!(inf.z.is_infinite());
        assert!(inf.w.is_infinite());
    }

    #[test]
    fn length() {
        assert_eq!(Quatf::IDENTITY.length(), 1.0);
        assert_eq!(Quatf::from_components(1.0, 1.0, 1.0, 1.0).length(), 2.0);
        assert_eq!(Quatf::from_components(1.0, 1.0, 1.0, 1.0).length2(), 4.0);
        assert_relative_eq!(
            Quatf::from_components(1.0, -2.0, 3.0, -4.0).normalize().length(),
            1.0
        );
    }
}
