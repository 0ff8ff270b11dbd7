//! Defines the SE(2) rigid transform.
//!
//! A rigid transform combines a [Translation] and a [Rotation] and describes the pose of
//! a body in the plane. As a homogeneous transformation matrix it reads
//!
//! ```text
//! [[cos, -sin, x]
//!  [sin,  cos, y]
//!  [0,    0,   1]]
//! ```
//!
//! Besides composition and inversion the transform provides the exponential map, which
//! integrates a [Twist] into a finite pose change, and the logarithm map, which reverses
//! that. See 'Lie Groups for 2D and 3D Transformations' by Ethan Eade for the derivation.

use float_cmp::{ApproxEq, F64Margin};
use nalgebra::{Isometry2, Matrix3, Translation2, UnitComplex};

use super::{rotation::Rotation, translation::Translation, twist::Twist, EPSILON};

#[cfg(test)]
#[path = "rigid_transform_tests.rs"]
mod rigid_transform_tests;

/// Defines a pose, or a change in pose, in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidTransform {
    /// The position part of the transform.
    translation: Translation,

    /// The orientation part of the transform.
    rotation: Rotation,
}

impl RigidTransform {
    /// Returns the intersection point of the heading lines of the current transform and
    /// the 'other' transform, or [None] if the headings are parallel.
    pub fn checked_intersection(&self, other: &RigidTransform) -> Option<Translation> {
        if self.rotation.is_parallel(&other.rotation) {
            return None;
        }

        // Use the tangent of the rotation with the largest cosine, that keeps the
        // denominator away from zero.
        if self.rotation.cos().abs() < other.rotation.cos().abs() {
            Some(intersect_heading_lines(self, other))
        } else {
            Some(intersect_heading_lines(other, self))
        }
    }

    /// Integrates a [Twist] into the pose change it describes.
    ///
    /// The twist is assumed to be a constant velocity motion applied over a unit of time,
    /// so a twist with a non-zero heading change follows a circular arc.
    ///
    /// ## Parameters
    ///
    /// * 'twist' - The differential motion.
    ///
    /// ## Example
    ///
    /// ```
    /// use std::f64::consts::PI;
    /// use diff_drive_motion::geometry::{rigid_transform::RigidTransform, twist::Twist};
    ///
    /// // Drive a quarter circle with a radius of 2
    /// let pose = RigidTransform::exp(&Twist::new(PI, 0.0, 0.5 * PI));
    /// assert!((pose.translation().x() - 2.0).abs() < 1e-9);
    /// assert!((pose.translation().y() - 2.0).abs() < 1e-9);
    /// assert!((pose.rotation().degrees() - 90.0).abs() < 1e-9);
    /// ```
    pub fn exp(twist: &Twist) -> Self {
        let dtheta = twist.dtheta();
        let rotation = Rotation::from_radians(dtheta);

        let (sin_theta_over_theta, one_minus_cos_theta_over_theta) = if dtheta.abs() < EPSILON {
            // Taylor series around zero to avoid dividing by (almost) zero
            (
                1.0 - dtheta.powi(2) / 6.0 + dtheta.powi(4) / 120.0,
                0.5 * dtheta - dtheta.powi(3) / 24.0 + dtheta.powi(5) / 720.0,
            )
        } else {
            (
                rotation.sin() / dtheta,
                (1.0 - rotation.cos()) / dtheta,
            )
        };

        let translation = Translation::new(
            sin_theta_over_theta * twist.dx() - one_minus_cos_theta_over_theta * twist.dy(),
            one_minus_cos_theta_over_theta * twist.dx() + sin_theta_over_theta * twist.dy(),
        );

        Self::new(translation, rotation)
    }

    /// Creates a new [RigidTransform] from a position and a heading in degrees.
    pub fn from_xy_degrees(x: f64, y: f64, heading_in_degrees: f64) -> Self {
        Self::new(
            Translation::new(x, y),
            Rotation::from_degrees(heading_in_degrees),
        )
    }

    /// Returns the transform that does not translate or rotate.
    pub fn identity() -> Self {
        Self::new(Translation::identity(), Rotation::identity())
    }

    /// Returns the intersection point of the heading lines of the current transform and
    /// the 'other' transform.
    ///
    /// When the headings are parallel there is no single intersection point and a point
    /// at positive infinity in both x and y is returned. Use
    /// [checked_intersection](RigidTransform::checked_intersection) to get [None] instead.
    pub fn intersection(&self, other: &RigidTransform) -> Translation {
        self.checked_intersection(other)
            .unwrap_or_else(|| Translation::new(f64::INFINITY, f64::INFINITY))
    }

    /// Returns the transform that undoes the current transform.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self::new(self.translation.inverse().rotate(&rotation), rotation)
    }

    /// Returns a value indicating whether the 'other' transform lies on the heading line
    /// of the current transform and points along the same heading, i.e. the 'other'
    /// transform can be reached by driving straight ahead or backwards.
    pub fn is_colinear(&self, other: &RigidTransform) -> bool {
        let twist = Self::log(&self.inverse().transform(other));
        twist.dy().abs() < EPSILON && twist.dtheta().abs() < EPSILON
    }

    /// Returns the [Twist] that integrates into the given transform, i.e. the inverse
    /// of [exp](RigidTransform::exp).
    pub fn log(transform: &RigidTransform) -> Twist {
        let dtheta = transform.rotation.radians();
        let half_dtheta = 0.5 * dtheta;
        let cos_minus_one = transform.rotation.cos() - 1.0;

        let half_theta_by_tan_of_half_theta = if cos_minus_one.abs() < EPSILON {
            1.0 - dtheta.powi(2) / 12.0
        } else {
            -(half_dtheta * transform.rotation.sin()) / cos_minus_one
        };

        let x = transform.translation.x();
        let y = transform.translation.y();
        Twist::new(
            half_theta_by_tan_of_half_theta * x + half_dtheta * y,
            -half_dtheta * x + half_theta_by_tan_of_half_theta * y,
            dtheta,
        )
    }

    /// Creates a new [RigidTransform] instance.
    ///
    /// ## Parameters
    ///
    /// * 'translation' - The position part of the transform
    /// * 'rotation' - The orientation part of the transform
    pub fn new(translation: Translation, rotation: Rotation) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Returns the orientation part of the transform.
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Returns the transform as a 3x3 homogeneous transformation matrix.
    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        let (cos, sin) = (self.rotation.cos(), self.rotation.sin());

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            cos, -sin, self.translation.x(),
            sin,  cos, self.translation.y(),
            0.0,  0.0, 1.0);

        matrix
    }

    /// Returns the transform as a [nalgebra] isometry.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::from_parts(
            Translation2::new(self.translation.x(), self.translation.y()),
            UnitComplex::from_cos_sin_unchecked(self.rotation.cos(), self.rotation.sin()),
        )
    }

    /// Returns the transform obtained by applying the 'other' transform in the frame of
    /// the current transform.
    ///
    /// This is the SE(2) group product. It is associative but not commutative.
    ///
    /// ## Parameters
    ///
    /// * 'other' - The transform, relative to the current transform, to apply.
    pub fn transform(&self, other: &RigidTransform) -> Self {
        Self::new(
            self.translation
                .translate(&other.translation.rotate(&self.rotation)),
            self.rotation.rotate(&other.rotation),
        )
    }

    /// Returns the position part of the transform.
    pub fn translation(&self) -> &Translation {
        &self.translation
    }
}

/// Returns the point where the heading line of 'a' crosses the heading line of 'b'.
///
/// The tangent of the rotation of 'b' is used so 'b' should be the transform with the
/// largest absolute cosine.
fn intersect_heading_lines(a: &RigidTransform, b: &RigidTransform) -> Translation {
    let rotation_a = a.rotation();
    let translation_a = a.translation();
    let translation_b = b.translation();

    let tan_b = b.rotation().tan();
    let distance_along_a = ((translation_a.x() - translation_b.x()) * tan_b + translation_b.y()
        - translation_a.y())
        / (rotation_a.sin() - rotation_a.cos() * tan_b);

    translation_a.translate(&rotation_a.to_translation().scale(distance_along_a))
}

impl From<Isometry2<f64>> for RigidTransform {
    fn from(isometry: Isometry2<f64>) -> Self {
        Self::new(
            Translation::new(isometry.translation.x, isometry.translation.y),
            Rotation::from_cos_sin(isometry.rotation.cos_angle(), isometry.rotation.sin_angle()),
        )
    }
}

impl From<RigidTransform> for Isometry2<f64> {
    fn from(transform: RigidTransform) -> Self {
        transform.to_isometry()
    }
}

impl ApproxEq for RigidTransform {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.translation.approx_eq(other.translation, margin)
            && self.rotation.approx_eq(other.rotation, margin)
    }
}
