//! Defines a 2D rotation.
//!
//! The rotation is stored as the cosine and sine of the angle, i.e. as a point on the
//! unit circle. Composing rotations is then a 2x2 matrix product which avoids having to
//! wrap angles at the +/- PI boundary.

use float_cmp::{ApproxEq, F64Margin};

use super::{translation::Translation, EPSILON};

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod rotation_tests;

/// Defines a rotation in the plane.
///
/// The rotation is represented by the rotation matrix
///
/// ```text
/// [[cos, -sin]
///  [sin,  cos]]
/// ```
///
/// The `cos` and `sin` values always describe a point on the unit circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// The cosine of the rotation angle.
    cos: f64,

    /// The sine of the rotation angle.
    sin: f64,
}

impl Rotation {
    /// Returns the cosine of the rotation angle.
    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// Returns the rotation angle in degrees, in the range (-180, 180].
    pub fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }

    /// Creates a new [Rotation] from a cosine and sine pair.
    ///
    /// The pair is normalized onto the unit circle. A pair with (near) zero length
    /// does not describe a direction and results in the identity rotation.
    ///
    /// ## Parameters
    ///
    /// * 'cos' - The cosine, or x-component, of the direction
    /// * 'sin' - The sine, or y-component, of the direction
    ///
    /// ## Example
    ///
    /// ```
    /// use diff_drive_motion::geometry::rotation::Rotation;
    ///
    /// let rotation = Rotation::from_cos_sin(0.0, 2.0);
    /// assert_eq!(0.0, rotation.cos());
    /// assert_eq!(1.0, rotation.sin());
    /// ```
    pub fn from_cos_sin(cos: f64, sin: f64) -> Self {
        let magnitude = cos.hypot(sin);
        if magnitude < EPSILON {
            return Self::identity();
        }

        Self {
            cos: cos / magnitude,
            sin: sin / magnitude,
        }
    }

    /// Creates a new [Rotation] from an angle in degrees.
    pub fn from_degrees(angle_in_degrees: f64) -> Self {
        Self::from_radians(angle_in_degrees.to_radians())
    }

    /// Creates a new [Rotation] from an angle in radians.
    pub fn from_radians(angle_in_radians: f64) -> Self {
        let (sin, cos) = angle_in_radians.sin_cos();
        Self { cos, sin }
    }

    /// Returns the rotation with an angle of zero.
    pub fn identity() -> Self {
        Self { cos: 1.0, sin: 0.0 }
    }

    /// Returns the rotation that undoes the current rotation.
    pub fn inverse(&self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Returns a value indicating whether the current rotation and the 'other' rotation
    /// point along the same line, either in the same or in the opposite direction.
    pub fn is_parallel(&self, other: &Rotation) -> bool {
        // sin(a - b)
        let sin_of_difference = self.sin * other.cos - self.cos * other.sin;
        sin_of_difference.abs() < EPSILON
    }

    /// Returns the rotation angle in radians, in the range (-PI, PI].
    pub fn radians(&self) -> f64 {
        self.sin.atan2(self.cos)
    }

    /// Returns the rotation obtained by first applying the current rotation and then
    /// the 'other' rotation, i.e. the angles are added.
    ///
    /// ## Example
    ///
    /// ```
    /// use diff_drive_motion::geometry::rotation::Rotation;
    ///
    /// let rotation = Rotation::from_degrees(30.0).rotate(&Rotation::from_degrees(60.0));
    /// assert!((rotation.degrees() - 90.0).abs() < 1e-9);
    /// ```
    pub fn rotate(&self, other: &Rotation) -> Self {
        Self {
            cos: self.cos * other.cos - self.sin * other.sin,
            sin: self.sin * other.cos + self.cos * other.sin,
        }
    }

    /// Returns the sine of the rotation angle.
    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// Returns the tangent of the rotation angle.
    ///
    /// For angles where the cosine is (nearly) zero the result is positive or negative
    /// infinity, depending on the sign of the sine.
    pub fn tan(&self) -> f64 {
        if self.cos.abs() < EPSILON {
            if self.sin >= 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            self.sin / self.cos
        }
    }

    /// Returns the unit vector that points in the direction of the rotation.
    pub fn to_translation(&self) -> Translation {
        Translation::new(self.cos, self.sin)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Rotation {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.cos.approx_eq(other.cos, margin) && self.sin.approx_eq(other.sin, margin)
    }
}
