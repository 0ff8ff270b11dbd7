//! Defines a 2D translation vector.

use float_cmp::{ApproxEq, F64Margin};
use nalgebra::Vector2;

use super::{rotation::Rotation, EPSILON};

#[cfg(test)]
#[path = "translation_tests.rs"]
mod translation_tests;

/// Defines a translation in the plane.
///
/// Components with a magnitude smaller than 1e-9 are stored as zero so that numerical
/// noise doesn't accumulate in otherwise exact values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translation {
    /// The x-component of the translation.
    x: f64,

    /// The y-component of the translation.
    y: f64,
}

impl Translation {
    /// Returns the angle between the current translation and the 'other' translation.
    ///
    /// The result is always in the range [0, PI]. If either vector has a length of
    /// zero the angle is undefined and the identity rotation is returned.
    ///
    /// ## Parameters
    ///
    /// * 'other' - The vector to measure the angle to.
    ///
    /// ## Example
    ///
    /// ```
    /// use diff_drive_motion::geometry::translation::Translation;
    ///
    /// let angle = Translation::new(1.0, 0.0).angle_to(&Translation::new(0.0, 2.0));
    /// assert!((angle.degrees() - 90.0).abs() < 1e-9);
    /// ```
    pub fn angle_to(&self, other: &Translation) -> Rotation {
        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            return Rotation::identity();
        }

        // Rounding can push the ratio just outside of [-1, 1] for (anti)parallel vectors
        let cos_angle = (self.dot(other) / norms).clamp(-1.0, 1.0);
        Rotation::from_radians(cos_angle.acos())
    }

    /// Returns the translation that moves from the 'first' point to the 'second' point.
    pub fn between(first: &Translation, second: &Translation) -> Self {
        Self::new(second.x - first.x, second.y - first.y)
    }

    /// Returns the z-component of the cross product of the two vectors.
    pub fn cross(&self, other: &Translation) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the direction in which the translation points.
    ///
    /// The zero vector has no direction, in which case the identity rotation is returned.
    pub fn direction(&self) -> Rotation {
        Rotation::from_cos_sin(self.x, self.y)
    }

    /// Returns the dot product of the two vectors.
    pub fn dot(&self, other: &Translation) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the zero translation.
    pub fn identity() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns the translation that undoes the current translation.
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Creates a new [Translation] instance.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The x-component
    /// * 'y' - The y-component
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: snap_to_zero(x),
            y: snap_to_zero(y),
        }
    }

    /// Returns the length of the vector.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the vector rotated by the given rotation.
    pub fn rotate(&self, rotation: &Rotation) -> Self {
        Self::new(
            rotation.cos() * self.x - rotation.sin() * self.y,
            rotation.sin() * self.x + rotation.cos() * self.y,
        )
    }

    /// Returns the vector multiplied by the given scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Returns the vector as a [nalgebra] vector.
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Returns the sum of the current and the 'other' translation.
    pub fn translate(&self, other: &Translation) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Returns the x-component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-component.
    pub fn y(&self) -> f64 {
        self.y
    }
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < EPSILON {
        0.0
    } else {
        value
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Vector2<f64>> for Translation {
    fn from(vector: Vector2<f64>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<Translation> for Vector2<f64> {
    fn from(translation: Translation) -> Self {
        translation.to_vector()
    }
}

impl ApproxEq for Translation {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}
