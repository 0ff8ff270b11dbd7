//! Provides the trapezoidal velocity profile generator.
//!
//! A trapezoidal profile accelerates at the maximum acceleration from the start velocity
//! to the cruise velocity, cruises, and then decelerates at the maximum acceleration to
//! the end velocity. When the move is too short to reach the maximum velocity the cruise
//! velocity is lowered to the highest velocity that can still be reached, in which case
//! the cruise phase has no duration and the profile is a triangle.

use log::{debug, trace};

use crate::Error;

use super::trajectory::{Trajectory, TrajectoryPoint};

#[cfg(test)]
#[path = "trajectory_generator_tests.rs"]
mod trajectory_generator_tests;

/// The relative tolerance used when checking if a move has enough distance for the
/// requested velocity change.
const DISTANCE_TOLERANCE: f64 = 1e-9;

/// The maximum number of samples in a single trajectory.
pub const MAX_TRAJECTORY_SAMPLES: usize = 10_000_000;

/// Stores the phase boundaries of a trapezoidal velocity profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrapezoidalProfile {
    /// The magnitude of the acceleration and deceleration.
    acceleration: f64,

    /// The velocity at the start of the move.
    start_velocity: f64,

    /// The velocity at the end of the move.
    end_velocity: f64,

    /// The velocity during the cruise phase.
    cruise_velocity: f64,

    /// The total distance of the move.
    distance: f64,

    /// The duration of the acceleration phase.
    accel_time: f64,

    /// The duration of the cruise phase.
    cruise_time: f64,

    /// The duration of the deceleration phase.
    decel_time: f64,

    /// The distance covered during the acceleration phase.
    accel_distance: f64,

    /// The distance covered during the cruise phase.
    cruise_distance: f64,

    /// The distance covered during the deceleration phase.
    decel_distance: f64,
}

impl TrapezoidalProfile {
    /// Returns the distance covered during the acceleration phase.
    pub fn accel_distance(&self) -> f64 {
        self.accel_distance
    }

    /// Returns the duration of the acceleration phase.
    pub fn accel_time(&self) -> f64 {
        self.accel_time
    }

    /// Returns the distance covered during the cruise phase.
    pub fn cruise_distance(&self) -> f64 {
        self.cruise_distance
    }

    /// Returns the duration of the cruise phase.
    pub fn cruise_time(&self) -> f64 {
        self.cruise_time
    }

    /// Returns the velocity during the cruise phase.
    pub fn cruise_velocity(&self) -> f64 {
        self.cruise_velocity
    }

    /// Returns the distance covered during the deceleration phase.
    pub fn decel_distance(&self) -> f64 {
        self.decel_distance
    }

    /// Returns the duration of the deceleration phase.
    pub fn decel_time(&self) -> f64 {
        self.decel_time
    }

    /// Returns the total distance of the move.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the velocity at the end of the move.
    pub fn end_velocity(&self) -> f64 {
        self.end_velocity
    }

    /// Returns the position, velocity and acceleration at the given time.
    ///
    /// Samples in the deceleration phase are calculated backwards from the end of the
    /// move so that the profile ends exactly at the requested distance and end velocity.
    ///
    /// ## Parameters
    ///
    /// * 'time' - The time since the start of the move.
    pub fn sample(&self, time: f64) -> TrajectoryPoint {
        let acc = self.acceleration;

        if time <= self.accel_time {
            TrajectoryPoint::new(
                self.start_velocity * time + 0.5 * acc * time.powi(2),
                self.start_velocity + acc * time,
                acc,
                time,
            )
        } else if time < self.accel_time + self.cruise_time {
            TrajectoryPoint::new(
                self.accel_distance + self.cruise_velocity * (time - self.accel_time),
                self.cruise_velocity,
                0.0,
                time,
            )
        } else {
            let remaining = (self.total_time() - time).max(0.0);
            let deceleration = if self.decel_time > 0.0 { -acc } else { 0.0 };
            TrajectoryPoint::new(
                self.distance - (self.end_velocity * remaining + 0.5 * acc * remaining.powi(2)),
                self.end_velocity + acc * remaining,
                deceleration,
                time,
            )
        }
    }

    /// Returns the velocity at the start of the move.
    pub fn start_velocity(&self) -> f64 {
        self.start_velocity
    }

    /// Returns the duration of the move.
    pub fn total_time(&self) -> f64 {
        self.accel_time + self.cruise_time + self.decel_time
    }
}

/// Generates trapezoidal motion profiles for straight moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryGenerator {
    /// The maximum acceleration, used for both speeding up and slowing down.
    max_acceleration: f64,

    /// The maximum velocity.
    max_velocity: f64,

    /// The time between two samples of a trajectory.
    sample_interval: f64,
}

impl TrajectoryGenerator {
    /// Returns a trajectory with the samples of a trapezoidal profile that moves over the
    /// given distance.
    ///
    /// The profile is sampled every 'sample_interval' seconds, starting one interval after
    /// the start of the move. The number of samples is the total time of the move divided
    /// by the sample interval, rounded down, so the last sample is within one interval of
    /// the end of the move.
    ///
    /// ## Parameters
    ///
    /// * 'start_velocity' - The velocity at the start of the move
    /// * 'end_velocity' - The velocity at the end of the move
    /// * 'distance' - The distance to travel
    ///
    /// ## Errors
    ///
    /// * [Error::TooManySamples] - Returned when sampling the move would need more than
    ///   [MAX_TRAJECTORY_SAMPLES] samples.
    /// * Any error returned by [plan](TrajectoryGenerator::plan).
    ///
    /// ## Example
    ///
    /// ```
    /// use diff_drive_motion::motion_profiles::trajectory_generator::TrajectoryGenerator;
    ///
    /// let generator = TrajectoryGenerator::new(12.0, 12.0, 0.005).unwrap();
    /// let trajectory = generator.generate_trajectory(0.0, 0.0, 10.0).unwrap();
    ///
    /// let last = trajectory.last().unwrap();
    /// assert!((last.pos() - 10.0).abs() < 0.005 * 12.0);
    /// ```
    pub fn generate_trajectory(
        &self,
        start_velocity: f64,
        end_velocity: f64,
        distance: f64,
    ) -> Result<Trajectory, Error> {
        let profile = self.plan(start_velocity, end_velocity, distance)?;

        let samples = (profile.total_time() / self.sample_interval).floor();
        if !samples.is_finite() || samples > MAX_TRAJECTORY_SAMPLES as f64 {
            return Err(Error::TooManySamples {
                samples,
                maximum: MAX_TRAJECTORY_SAMPLES,
            });
        }

        let sample_count = samples as usize;
        let mut trajectory = Trajectory::with_capacity(sample_count);
        for index in 0..sample_count {
            let time = (index + 1) as f64 * self.sample_interval;
            trajectory.push(profile.sample(time))?;
        }

        debug!(
            "Generated trajectory over {:.3} with {} samples: cruise velocity {:.3}, accel {:.3}s, cruise {:.3}s, decel {:.3}s",
            distance,
            sample_count,
            profile.cruise_velocity(),
            profile.accel_time(),
            profile.cruise_time(),
            profile.decel_time()
        );

        Ok(trajectory)
    }

    /// Returns a trajectory with the same timing as the 'lead' trajectory where the
    /// positions and velocities are multiplied by the 'scale'.
    ///
    /// Used to derive the trajectory of the inner wheel in a curve from the trajectory of
    /// the outer wheel. Both trajectories have the same number of samples and so finish
    /// at the same time.
    pub fn generate_scaled_trajectory(&self, lead: &Trajectory, scale: f64) -> Trajectory {
        trace!(
            "Scaling trajectory with {} samples by {:.4}",
            lead.len(),
            scale
        );
        lead.scaled(scale)
    }

    /// Returns the maximum acceleration.
    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Returns the maximum velocity.
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Creates a new [TrajectoryGenerator] instance.
    ///
    /// ## Parameters
    ///
    /// * 'max_acceleration' - The maximum acceleration
    /// * 'max_velocity' - The maximum velocity
    /// * 'sample_interval' - The time between two samples of a trajectory
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidAcceleration] - Returned when the acceleration is not a finite
    ///   positive number.
    /// * [Error::InvalidVelocity] - Returned when the velocity is not a finite positive number.
    /// * [Error::InvalidSampleInterval] - Returned when the sample interval is not a finite
    ///   positive number.
    pub fn new(max_acceleration: f64, max_velocity: f64, sample_interval: f64) -> Result<Self, Error> {
        if !is_finite_positive(max_acceleration) {
            return Err(Error::InvalidAcceleration {
                value: max_acceleration,
            });
        }

        if !is_finite_positive(max_velocity) {
            return Err(Error::InvalidVelocity {
                value: max_velocity,
            });
        }

        if !is_finite_positive(sample_interval) {
            return Err(Error::InvalidSampleInterval {
                value: sample_interval,
            });
        }

        Ok(Self {
            max_acceleration,
            max_velocity,
            sample_interval,
        })
    }

    /// Calculates the phases of the trapezoidal profile for a move.
    ///
    /// ## Parameters
    ///
    /// * 'start_velocity' - The velocity at the start of the move
    /// * 'end_velocity' - The velocity at the end of the move
    /// * 'distance' - The distance to travel
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidDistance] - Returned when the distance is negative or not finite, or
    ///   when the distance is zero and the start and end velocities differ.
    /// * [Error::InvalidBoundaryVelocity] - Returned when the start or end velocity is
    ///   negative, not finite or larger than the maximum velocity.
    /// * [Error::InfeasibleProfile] - Returned when the distance is too short to change from
    ///   the start velocity to the end velocity at the maximum acceleration.
    pub fn plan(
        &self,
        start_velocity: f64,
        end_velocity: f64,
        distance: f64,
    ) -> Result<TrapezoidalProfile, Error> {
        if !distance.is_finite() || distance < 0.0 || (distance == 0.0 && start_velocity != end_velocity)
        {
            return Err(Error::InvalidDistance {
                distance,
                start_velocity,
                end_velocity,
            });
        }

        for velocity in [start_velocity, end_velocity] {
            if !velocity.is_finite() || velocity < 0.0 || velocity > self.max_velocity {
                return Err(Error::InvalidBoundaryVelocity {
                    value: velocity,
                    maximum: self.max_velocity,
                });
            }
        }

        let acc = self.max_acceleration;

        // The distance needed to only change from the start to the end velocity.
        let transition_distance = (end_velocity.powi(2) - start_velocity.powi(2)).abs() / (2.0 * acc);
        if transition_distance - distance > DISTANCE_TOLERANCE * distance.max(1.0) {
            return Err(Error::InfeasibleProfile {
                distance,
                cruise_distance: distance - transition_distance,
            });
        }

        let reachable_velocity =
            (distance * acc + (start_velocity.powi(2) + end_velocity.powi(2)) / 2.0).sqrt();
        let is_velocity_limited = reachable_velocity >= self.max_velocity;
        let cruise_velocity = reachable_velocity
            .min(self.max_velocity)
            .max(start_velocity)
            .max(end_velocity);

        let accel_time = (cruise_velocity - start_velocity) / acc;
        let decel_time = (cruise_velocity - end_velocity).abs() / acc;
        let accel_distance = start_velocity * accel_time + 0.5 * acc * accel_time.powi(2);
        let decel_distance = cruise_velocity * decel_time - 0.5 * acc * decel_time.powi(2);

        let cruise_distance = if is_velocity_limited {
            distance - accel_distance - decel_distance
        } else {
            // The accelerate and decelerate phases meet, there is no cruise phase.
            0.0
        };

        if cruise_distance < -DISTANCE_TOLERANCE * distance.max(1.0) {
            return Err(Error::InfeasibleProfile {
                distance,
                cruise_distance,
            });
        }

        let cruise_distance = cruise_distance.max(0.0);
        let cruise_time = if cruise_velocity > 0.0 {
            cruise_distance / cruise_velocity
        } else {
            0.0
        };

        Ok(TrapezoidalProfile {
            acceleration: acc,
            start_velocity,
            end_velocity,
            cruise_velocity,
            distance,
            accel_time,
            cruise_time,
            decel_time,
            accel_distance,
            cruise_distance,
            decel_distance,
        })
    }

    /// Returns the time between two samples of a trajectory.
    pub fn sample_interval(&self) -> f64 {
        self.sample_interval
    }
}

fn is_finite_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
