//! Provides the generator for curved moves of a differential drive.
//!
//! In a curve the two wheels follow concentric arcs around the turn centre. The wheel on
//! the outside of the curve travels the longer arc and leads, the wheel on the inside
//! follows on an arc that is shorter by the ratio of the two radii.

use std::f64::consts::PI;

use log::debug;

use crate::{geometry::rigid_transform::RigidTransform, odometry::pose_estimate::PoseEstimate, Error};

use super::{
    trajectory::{Trajectory, TrajectoryPoint},
    trajectory_generator::TrajectoryGenerator,
};

#[cfg(test)]
#[path = "curve_generator_tests.rs"]
mod curve_generator_tests;

/// Defines the direction of a curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnDirection {
    /// Counter-clockwise. The right wheel is on the outside of the curve.
    Left,

    /// Clockwise. The left wheel is on the outside of the curve.
    Right,
}

impl TurnDirection {
    /// Returns the direction of a turn over the given angle. Positive angles turn
    /// counter-clockwise.
    pub fn from_angle(turn_angle_in_degrees: f64) -> Self {
        if turn_angle_in_degrees < 0.0 {
            TurnDirection::Right
        } else {
            TurnDirection::Left
        }
    }
}

/// Stores the samples of both wheels at the same index of a [CurveTrajectory].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSample {
    /// The sample of the left wheel.
    left: TrajectoryPoint,

    /// The sample of the right wheel.
    right: TrajectoryPoint,
}

impl WheelSample {
    /// Returns the sample of the left wheel.
    pub fn left(&self) -> &TrajectoryPoint {
        &self.left
    }

    /// Returns the sample of the right wheel.
    pub fn right(&self) -> &TrajectoryPoint {
        &self.right
    }
}

/// Stores the wheel trajectories of a curved move.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveTrajectory {
    /// The trajectory of the wheel on the outside of the curve.
    lead: Trajectory,

    /// The trajectory of the wheel on the inside of the curve.
    follow: Trajectory,

    /// The direction of the curve.
    direction: TurnDirection,

    /// The distance between the wheels.
    track_width: f64,
}

impl CurveTrajectory {
    /// Returns the direction of the curve.
    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    /// Returns the trajectory of the wheel on the inside of the curve.
    pub fn follow(&self) -> &Trajectory {
        &self.follow
    }

    /// Returns a value indicating whether neither wheel has any samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the trajectory of the wheel on the outside of the curve.
    pub fn lead(&self) -> &Trajectory {
        &self.lead
    }

    /// Returns the trajectory of the left wheel.
    pub fn left(&self) -> &Trajectory {
        match self.direction {
            TurnDirection::Left => &self.follow,
            TurnDirection::Right => &self.lead,
        }
    }

    /// Returns the number of samples of the longest wheel trajectory.
    pub fn len(&self) -> usize {
        self.lead.len().max(self.follow.len())
    }

    /// Returns the trajectory of the right wheel.
    pub fn right(&self) -> &Trajectory {
        match self.direction {
            TurnDirection::Left => &self.lead,
            TurnDirection::Right => &self.follow,
        }
    }

    /// Returns the samples of both wheels at the given index.
    ///
    /// When the wheel trajectories have a different length the shorter one is held at its
    /// last sample, and a wheel without samples is held at rest at the start. Returns
    /// [None] when the index is past the end of the longest trajectory.
    pub fn sample(&self, index: usize) -> Option<WheelSample> {
        if index >= self.len() {
            return None;
        }

        Some(WheelSample {
            left: clamped_point(self.left(), index),
            right: clamped_point(self.right(), index),
        })
    }

    /// Returns an iterator over the samples of both wheels in time order.
    pub fn samples(&self) -> impl Iterator<Item = WheelSample> + '_ {
        (0..self.len()).filter_map(move |index| self.sample(index))
    }

    /// Replays the wheel trajectories through a [PoseEstimate] and returns the pose after
    /// each sample.
    ///
    /// The heading for each sample is derived from the difference in wheel distances, so
    /// the result is the path the robot would drive if the wheels followed the
    /// trajectories exactly.
    pub fn simulate(&self) -> Vec<RigidTransform> {
        let mut estimate = PoseEstimate::new();
        self.samples()
            .map(|sample| {
                let heading = (sample.right().pos() - sample.left().pos()) / self.track_width;
                estimate.update(sample.left().pos(), sample.right().pos(), heading.to_degrees());
                *estimate.pose()
            })
            .collect()
    }

    /// Returns the distance between the wheels.
    pub fn track_width(&self) -> f64 {
        self.track_width
    }
}

/// Generates the wheel trajectories for curved moves.
///
/// ## Example
///
/// ```
/// use diff_drive_motion::motion_profiles::{
///     curve_generator::{TrajectoryCurveGenerator, TurnDirection},
///     trajectory_generator::TrajectoryGenerator,
/// };
///
/// let generator = TrajectoryGenerator::new(12.0, 12.0, 0.005).unwrap();
/// let curve_generator = TrajectoryCurveGenerator::new(generator, 2.4).unwrap();
///
/// let curve = curve_generator.generate_curve(0.0, 0.0, 90.0, 5.0).unwrap();
///
/// assert_eq!(TurnDirection::Left, curve.direction());
/// assert_eq!(curve.lead().len(), curve.follow().len());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryCurveGenerator {
    /// The generator used for the wheel profiles.
    generator: TrajectoryGenerator,

    /// The distance between the wheels.
    track_width: f64,
}

impl TrajectoryCurveGenerator {
    /// Returns the trajectories for a curve where the inner wheel trajectory is the outer
    /// wheel trajectory scaled by the ratio of the arc radii.
    ///
    /// Both wheels have the same number of samples. A turn radius smaller than half the
    /// track width puts the turn centre between the wheels, in which case the inner wheel
    /// drives backwards.
    ///
    /// Positive angles turn left, with the right wheel leading, to match the
    /// counter-clockwise headings of [RigidTransform]. This deliberately departs from the
    /// convention where a positive angle is a right turn.
    ///
    /// ## Parameters
    ///
    /// * 'start_velocity' - The velocity of the outer wheel at the start of the curve
    /// * 'end_velocity' - The velocity of the outer wheel at the end of the curve
    /// * 'turn_angle_in_degrees' - The change in heading. Positive angles turn counter-clockwise
    /// * 'turn_radius' - The distance from the turn centre to the middle of the robot
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidTurnRadius] - Returned when the turn radius is negative or not finite.
    /// * Any error returned by [TrajectoryGenerator::plan] for the outer wheel arc.
    pub fn generate_curve(
        &self,
        start_velocity: f64,
        end_velocity: f64,
        turn_angle_in_degrees: f64,
        turn_radius: f64,
    ) -> Result<CurveTrajectory, Error> {
        if !turn_radius.is_finite() || turn_radius < 0.0 {
            return Err(self.invalid_turn_radius(turn_radius));
        }

        let (lead_distance, scale) = self.arc(turn_angle_in_degrees, turn_radius);
        let lead = self
            .generator
            .generate_trajectory(start_velocity, end_velocity, lead_distance)?;
        let follow = self.generator.generate_scaled_trajectory(&lead, scale);

        debug!(
            "Generated curve of {:.2} degrees with radius {:.3}: lead distance {:.3}, follow scale {:.4}, {} samples",
            turn_angle_in_degrees,
            turn_radius,
            lead_distance,
            scale,
            lead.len()
        );

        Ok(CurveTrajectory {
            lead,
            follow,
            direction: TurnDirection::from_angle(turn_angle_in_degrees),
            track_width: self.track_width,
        })
    }

    /// Returns the trajectories for a curve where both wheel profiles are generated
    /// separately from their own arc length.
    ///
    /// The inner wheel uses the boundary velocities scaled by the ratio of the arc radii.
    /// As both profiles use the same maximum acceleration they generally have a different
    /// number of samples.
    ///
    /// ## Parameters
    ///
    /// * 'start_velocity' - The velocity of the outer wheel at the start of the curve
    /// * 'end_velocity' - The velocity of the outer wheel at the end of the curve
    /// * 'turn_angle_in_degrees' - The change in heading. Positive angles turn counter-clockwise
    /// * 'turn_radius' - The distance from the turn centre to the middle of the robot
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidTurnRadius] - Returned when the turn radius is not finite or is
    ///   smaller than half the track width.
    /// * Any error returned by [TrajectoryGenerator::plan] for either wheel arc.
    pub fn generate_independent_curve(
        &self,
        start_velocity: f64,
        end_velocity: f64,
        turn_angle_in_degrees: f64,
        turn_radius: f64,
    ) -> Result<CurveTrajectory, Error> {
        if !turn_radius.is_finite() || turn_radius < 0.5 * self.track_width {
            return Err(self.invalid_turn_radius(turn_radius));
        }

        let (lead_distance, scale) = self.arc(turn_angle_in_degrees, turn_radius);
        let lead = self
            .generator
            .generate_trajectory(start_velocity, end_velocity, lead_distance)?;
        let follow = self.generator.generate_trajectory(
            scale * start_velocity,
            scale * end_velocity,
            scale * lead_distance,
        )?;

        debug!(
            "Generated independent curve of {:.2} degrees with radius {:.3}: {} lead samples, {} follow samples",
            turn_angle_in_degrees,
            turn_radius,
            lead.len(),
            follow.len()
        );

        Ok(CurveTrajectory {
            lead,
            follow,
            direction: TurnDirection::from_angle(turn_angle_in_degrees),
            track_width: self.track_width,
        })
    }

    /// Returns the generator used for the wheel profiles.
    pub fn generator(&self) -> &TrajectoryGenerator {
        &self.generator
    }

    /// Creates a new [TrajectoryCurveGenerator] instance.
    ///
    /// ## Parameters
    ///
    /// * 'generator' - The generator used for the wheel profiles
    /// * 'track_width' - The distance between the wheels
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidTrackWidth] - Returned when the track width is not a finite
    ///   positive number.
    pub fn new(generator: TrajectoryGenerator, track_width: f64) -> Result<Self, Error> {
        if !track_width.is_finite() || track_width <= 0.0 {
            return Err(Error::InvalidTrackWidth { value: track_width });
        }

        Ok(Self {
            generator,
            track_width,
        })
    }

    /// Returns the distance between the wheels.
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Returns the arc length of the outer wheel and the ratio between the inner and the
    /// outer wheel arcs.
    fn arc(&self, turn_angle_in_degrees: f64, turn_radius: f64) -> (f64, f64) {
        let half_track = 0.5 * self.track_width;
        let outer_radius = turn_radius + half_track;
        let lead_distance = 2.0 * PI * outer_radius * turn_angle_in_degrees.abs() / 360.0;
        let scale = (turn_radius - half_track) / outer_radius;

        (lead_distance, scale)
    }

    fn invalid_turn_radius(&self, turn_radius: f64) -> Error {
        Error::InvalidTurnRadius {
            turn_radius,
            track_width: self.track_width,
        }
    }
}

fn clamped_point(trajectory: &Trajectory, index: usize) -> TrajectoryPoint {
    if index >= trajectory.len() {
        debug!(
            "Holding wheel at its last sample, index {} is past the end of {} samples",
            index,
            trajectory.len()
        );
    }

    trajectory.get_clamped(index).copied().unwrap_or_default()
}
