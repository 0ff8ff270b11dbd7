//! Defines a differential motion in the plane.

use float_cmp::{ApproxEq, F64Margin};

#[cfg(test)]
#[path = "twist_tests.rs"]
mod twist_tests;

/// Stores a differential (or infinitesimal) motion, i.e. the change in x, y and heading
/// over a short period of time.
///
/// A twist is not a pose. It is converted into a pose delta with
/// [RigidTransform::exp](crate::geometry::rigid_transform::RigidTransform::exp).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Twist {
    /// The change along the x-axis.
    dx: f64,

    /// The change along the y-axis.
    dy: f64,

    /// The change in heading, in radians.
    dtheta: f64,
}

impl Twist {
    /// Returns the change in heading, in radians.
    pub fn dtheta(&self) -> f64 {
        self.dtheta
    }

    /// Returns the change along the x-axis.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Returns the change along the y-axis.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Creates a new [Twist] instance.
    ///
    /// ## Parameters
    ///
    /// * 'dx' - The change along the x-axis
    /// * 'dy' - The change along the y-axis
    /// * 'dtheta' - The change in heading in radians
    pub fn new(dx: f64, dy: f64, dtheta: f64) -> Self {
        Self { dx, dy, dtheta }
    }

    /// Returns the twist with all components multiplied by the given scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.dx * scalar, self.dy * scalar, self.dtheta * scalar)
    }

    /// Returns the twist that describes no motion.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl ApproxEq for Twist {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.dx.approx_eq(other.dx, margin)
            && self.dy.approx_eq(other.dy, margin)
            && self.dtheta.approx_eq(other.dtheta, margin)
    }
}
