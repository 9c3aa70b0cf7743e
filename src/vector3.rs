use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

use crate::error::VectorError;

/// An immutable three component vector of `f64`.
///
/// Every operation returns a new value. Degenerate input (a zero length vector
/// handed to [`Vector3::unit`], a non-unit normal handed to
/// [`Vector3::duff_basis`]) is not checked and shows up as NaN/Inf or
/// non-orthonormal output.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[allow(clippy::should_implement_trait)]
impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Builds a vector from a slice holding exactly three components.
    pub fn try_from_slice(values: &[f64]) -> Result<Self, VectorError> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::InvalidShape { got: values.len() }),
        }
    }

    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    #[inline]
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divides every component by `scalar`. Dividing by zero yields Inf/NaN.
    #[inline]
    #[must_use]
    pub fn divide(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Hadamard (entry-wise) product.
    #[inline]
    #[must_use]
    pub fn elementwise_product(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Right-handed cross product.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// `self / self.magnitude()`. A zero vector gives NaN components.
    #[inline]
    #[must_use]
    pub fn unit(self) -> Self {
        self.divide(self.magnitude())
    }

    /// Like [`Vector3::unit`], but rejects zero and non-finite magnitudes.
    pub fn try_unit(self) -> Result<Self, VectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(VectorError::Degenerate("vector has no direction"));
        }
        Ok(self.divide(magnitude))
    }

    #[inline]
    #[must_use]
    pub fn componentwise_abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Some vector perpendicular to `self`, after M. M. Stark, "Efficient
    /// Construction of Perpendicular Vectors without Branching" (JGT 14:1, 2009).
    ///
    /// Crosses `self` with the coordinate axis of its smallest absolute
    /// component. Input need not be unit length and neither is the output.
    #[must_use]
    pub fn orthogonal_stark(self) -> Self {
        let a = self.componentwise_abs();

        // 1 where the left operand is strictly the smaller one
        let uyx = u8::from((a.x - a.y).is_sign_negative());
        let uzx = u8::from((a.x - a.z).is_sign_negative());
        let uzy = u8::from((a.y - a.z).is_sign_negative());

        let xm = uyx & uzx;
        let ym = (1 ^ xm) & uzy;
        let zm = 1 ^ (xm | ym);

        self.cross(Self::new(f64::from(xm), f64::from(ym), f64::from(zm)))
    }

    /// Some vector perpendicular to `self`, as computed by `XMVector3Orthogonal`
    /// in the DirectX SDK. Cheaper than [`Vector3::orthogonal_stark`] but less
    /// robust for inputs close to `(0, -sign(y*z), 1)`.
    #[inline]
    #[must_use]
    pub fn orthogonal_xna(self) -> Self {
        self.cross(Self::new(0.0, -1.0_f64.copysign(self.y * self.z), 1.0))
    }

    /// Two vectors completing an orthonormal basis with `self`, after Duff et
    /// al., "Building an Orthonormal Basis, Revisited" (JCGT 6:1, 2017).
    ///
    /// `self` must be unit length; this is not checked. The result `(b1, b2)`
    /// is right-handed: `b1.cross(b2) == self`.
    #[must_use]
    pub fn duff_basis(self) -> (Self, Self) {
        let sign = 1.0_f64.copysign(self.z);
        let a = -1.0 / (sign + self.z);
        let b = self.x * self.y * a;
        (
            Self::new(1.0 + sign * self.x * self.x * a, sign * b, -sign * self.x),
            Self::new(b, sign + self.y * self.y * a, -self.y),
        )
    }

    /// Orthogonal projection onto the plane through the origin with the given
    /// unit normal.
    #[inline]
    #[must_use]
    pub fn project_onto(self, plane_unit_normal: Self) -> Self {
        self.subtract(plane_unit_normal.scale(self.dot(plane_unit_normal)))
    }

    /// Rotates `self` by `by_radians` about `axis_unit`, counter-clockwise when
    /// looking down the axis towards the origin (right-hand rule).
    #[must_use]
    pub fn rotate_about(self, axis_unit: Self, by_radians: f64) -> Self {
        let along = axis_unit.scale(self.dot(axis_unit));
        let perpendicular = self.subtract(along);
        let rotated_perpendicular = axis_unit.cross(perpendicular);
        let (sin, cos) = by_radians.sin_cos();
        perpendicular
            .scale(cos)
            .add(rotated_perpendicular.scale(sin))
            .add(along)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "❬{:.*}, {:.*}, {:.*}❭",
            precision, self.x, precision, self.y, precision, self.z
        )
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from_slice(value)
    }
}

impl From<DVec3> for Vector3 {
    fn from(value: DVec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(value: Vector3) -> Self {
        DVec3::new(value.x, value.y, value.z)
    }
}
