//! Kinematic functions for a differential drive robot.
//!
//! The forward kinematics turn the distances travelled by the left and right wheels into
//! the [Twist] of the robot body. The inverse kinematics do the opposite. Time is not
//! taken into account, the functions work on the change over a single control loop
//! iteration which is assumed to run at a constant period.

use crate::geometry::{rigid_transform::RigidTransform, twist::Twist, EPSILON};

#[cfg(test)]
#[path = "kinematics_tests.rs"]
mod kinematics_tests;

/// Stores the velocities, or the change in position, of the left and right side of a
/// differential drive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveVelocity {
    /// The velocity of the left side.
    left: f64,

    /// The velocity of the right side.
    right: f64,
}

impl DriveVelocity {
    /// Returns the velocity of the left side.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Creates a new [DriveVelocity] instance.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Returns the velocity of the right side.
    pub fn right(&self) -> f64 {
        self.right
    }
}

/// Returns the [Twist] of the robot body for the given wheel travel and heading change.
///
/// A differential drive cannot move sideways so the y-component of the twist is always
/// zero.
///
/// ## Parameters
///
/// * 'left_delta' - The distance travelled by the left wheel
/// * 'right_delta' - The distance travelled by the right wheel
/// * 'rotation_delta' - The change in heading in radians, e.g. as measured by a gyro
pub fn forward_kinematics(left_delta: f64, right_delta: f64, rotation_delta: f64) -> Twist {
    let dx = (left_delta + right_delta) / 2.0;
    Twist::new(dx, 0.0, rotation_delta)
}

/// Returns the [Twist] of the robot body for the given wheel travel, deriving the heading
/// change from the difference between the wheels.
///
/// Use this when no independent heading sensor is available.
///
/// ## Parameters
///
/// * 'left_delta' - The distance travelled by the left wheel
/// * 'right_delta' - The distance travelled by the right wheel
/// * 'track_width' - The distance between the left and right wheels
///
/// ## Example
///
/// ```
/// use diff_drive_motion::kinematics::forward_kinematics_with_track;
///
/// let twist = forward_kinematics_with_track(1.0, 2.0, 0.5);
/// assert_eq!(1.5, twist.dx());
/// assert_eq!(0.0, twist.dy());
/// assert_eq!(2.0, twist.dtheta());
/// ```
pub fn forward_kinematics_with_track(left_delta: f64, right_delta: f64, track_width: f64) -> Twist {
    let rotation_delta = (right_delta - left_delta) / track_width;
    forward_kinematics(left_delta, right_delta, rotation_delta)
}

/// Returns the pose reached by applying the 'twist' to the 'current_pose'.
pub fn integrate_forward_kinematics(current_pose: &RigidTransform, twist: &Twist) -> RigidTransform {
    current_pose.transform(&RigidTransform::exp(twist))
}

/// Returns the pose reached from the 'current_pose' for the given wheel travel and heading
/// change.
pub fn integrate_wheel_deltas(
    current_pose: &RigidTransform,
    left_delta: f64,
    right_delta: f64,
    rotation_delta: f64,
) -> RigidTransform {
    let twist = forward_kinematics(left_delta, right_delta, rotation_delta);
    integrate_forward_kinematics(current_pose, &twist)
}

/// Returns the left and right wheel travel needed to achieve the given [Twist].
///
/// The y-component of the twist is ignored since a differential drive cannot move
/// sideways.
///
/// ## Parameters
///
/// * 'twist' - The desired motion of the robot body
/// * 'track_width' - The distance between the left and right wheels
pub fn inverse_kinematics(twist: &Twist, track_width: f64) -> DriveVelocity {
    if twist.dtheta().abs() < EPSILON {
        return DriveVelocity::new(twist.dx(), twist.dx());
    }

    let angular_offset = track_width * twist.dtheta() / 2.0;
    DriveVelocity::new(twist.dx() - angular_offset, twist.dx() + angular_offset)
}
