#![warn(missing_docs)]

//! Motion planning and pose tracking core for a differential drive (two wheel) robot.
//!
//! Provides the SE(2) rigid transform algebra, the forward and inverse kinematics of a
//! differential drive, an odometry integrator that turns wheel distances and a heading
//! into a robot pose, and a trapezoidal trajectory generator that turns a desired
//! straight or curved move into per-wheel motion profiles.

use thiserror::Error;

/// Defines the 2D rotation, translation, twist and rigid transform types.
pub mod geometry;

/// Provides the forward and inverse kinematics of a differential drive.
pub mod kinematics;

/// Provides the types that track the pose of the robot from wheel and heading sensors.
pub mod odometry;

/// Provides the trapezoidal motion profiles and the straight and curved trajectory generators.
pub mod motion_profiles;

/// Provides the parameter sets used to configure the trajectory generators.
pub mod params;

/// Defines the different errors for the differential drive motion crate.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Returned when the maximum acceleration is not a finite positive number.
    #[error("The maximum acceleration must be a finite positive number, got {value}")]
    InvalidAcceleration {
        /// The rejected acceleration.
        value: f64,
    },

    /// Returned when the maximum velocity is not a finite positive number.
    #[error("The maximum velocity must be a finite positive number, got {value}")]
    InvalidVelocity {
        /// The rejected velocity.
        value: f64,
    },

    /// Returned when the sample interval is not a finite positive number.
    #[error("The sample interval must be a finite positive number, got {value}")]
    InvalidSampleInterval {
        /// The rejected sample interval.
        value: f64,
    },

    /// Returned when the requested distance is negative, not finite or zero while the
    /// start and end velocities differ.
    #[error("Cannot generate a profile over a distance of {distance} from velocity {start_velocity} to velocity {end_velocity}")]
    InvalidDistance {
        /// The requested distance.
        distance: f64,
        /// The requested start velocity.
        start_velocity: f64,
        /// The requested end velocity.
        end_velocity: f64,
    },

    /// Returned when a start or end velocity is negative, not finite or larger than the
    /// maximum velocity.
    #[error("The boundary velocity {value} is outside the range [0, {maximum}]")]
    InvalidBoundaryVelocity {
        /// The rejected velocity.
        value: f64,
        /// The maximum velocity of the generator.
        maximum: f64,
    },

    /// Returned when the acceleration and deceleration phases need more distance than
    /// the move provides.
    #[error("The profile needs a cruise distance of {cruise_distance} to cover a distance of {distance}")]
    InfeasibleProfile {
        /// The requested distance.
        distance: f64,
        /// The (negative) cruise distance that was calculated.
        cruise_distance: f64,
    },

    /// Returned when the track width is not a finite positive number.
    #[error("The track width must be a finite positive number, got {value}")]
    InvalidTrackWidth {
        /// The rejected track width.
        value: f64,
    },

    /// Returned when the turn radius cannot be used with the track width of the robot.
    #[error("The turn radius {turn_radius} cannot be used with a track width of {track_width}")]
    InvalidTurnRadius {
        /// The rejected turn radius.
        turn_radius: f64,
        /// The track width of the robot.
        track_width: f64,
    },

    /// Returned when sampling a move would need more samples than a trajectory may hold.
    #[error("Sampling the move needs {samples} samples, at most {maximum} are allowed")]
    TooManySamples {
        /// The number of samples the move needs.
        samples: f64,
        /// The maximum number of samples in a trajectory.
        maximum: usize,
    },

    /// Returned when a trajectory is filled past the capacity it was created with.
    #[error("The trajectory can hold at most {capacity} points")]
    TrajectoryCapacityExceeded {
        /// The capacity of the trajectory.
        capacity: usize,
    },

    /// Returned when a parameter file cannot be read.
    #[error("Failed to read the parameter file {path}: {reason}")]
    FailedToReadParameters {
        /// The path of the parameter file.
        path: String,
        /// The reason the file could not be read.
        reason: String,
    },

    /// Returned when a parameter document cannot be parsed.
    #[error("Failed to parse the parameters: {reason}")]
    FailedToParseParameters {
        /// The reason the parameters could not be parsed.
        reason: String,
    },
}
