/// Defines a 2D rotation stored as a point on the unit circle.
pub mod rotation;

/// Defines a 2D translation vector.
pub mod translation;

/// Defines a differential motion.
pub mod twist;

/// Defines the SE(2) rigid transform and its exponential and logarithm maps.
pub mod rigid_transform;

/// The threshold below which values are considered to be zero.
pub(crate) const EPSILON: f64 = 1e-9;
