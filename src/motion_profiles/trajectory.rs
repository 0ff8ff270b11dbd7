//! Defines the sampled trajectory types.

use std::slice::Iter;

use crate::Error;

#[cfg(test)]
#[path = "trajectory_tests.rs"]
mod trajectory_tests;

/// Stores a single sample of a one dimensional motion profile.
///
/// The position is measured along the path, i.e. it is the arc length travelled since
/// the start of the trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrajectoryPoint {
    /// The distance travelled along the path.
    pos: f64,

    /// The velocity along the path.
    vel: f64,

    /// The acceleration along the path.
    acc: f64,

    /// The time since the start of the trajectory.
    time: f64,
}

impl TrajectoryPoint {
    /// Returns the acceleration along the path.
    pub fn acc(&self) -> f64 {
        self.acc
    }

    /// Creates a new [TrajectoryPoint] instance.
    ///
    /// ## Parameters
    ///
    /// * 'pos' - The distance travelled along the path
    /// * 'vel' - The velocity along the path
    /// * 'acc' - The acceleration along the path
    /// * 'time' - The time since the start of the trajectory
    pub fn new(pos: f64, vel: f64, acc: f64, time: f64) -> Self {
        Self {
            pos,
            vel,
            acc,
            time,
        }
    }

    /// Returns the distance travelled along the path.
    pub fn pos(&self) -> f64 {
        self.pos
    }

    /// Returns the time since the start of the trajectory.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the velocity along the path.
    pub fn vel(&self) -> f64 {
        self.vel
    }
}

/// Stores the samples of a motion profile in time order.
///
/// A trajectory is created with a fixed capacity by a generator and is read-only once it
/// has been handed out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    /// The samples, ordered by time.
    points: Vec<TrajectoryPoint>,

    /// The maximum number of samples.
    capacity: usize,
}

impl Trajectory {
    /// Returns the maximum number of samples the trajectory was created for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the time of the last sample, or zero for an empty trajectory.
    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |point| point.time())
    }

    /// Returns the sample at the given index.
    pub fn get(&self, index: usize) -> Option<&TrajectoryPoint> {
        self.points.get(index)
    }

    /// Returns the sample at the given index, or the last sample if the index is past the
    /// end of the trajectory. Returns [None] only for an empty trajectory.
    ///
    /// Used when two trajectories with a different number of samples are stepped through
    /// together.
    pub fn get_clamped(&self, index: usize) -> Option<&TrajectoryPoint> {
        self.points.get(index).or_else(|| self.points.last())
    }

    /// Returns a value indicating whether the trajectory has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the samples in time order.
    pub fn iter(&self) -> Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    /// Returns the last sample.
    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the samples in time order.
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Appends a sample to the end of the trajectory.
    ///
    /// ## Errors
    ///
    /// * [Error::TrajectoryCapacityExceeded] - Returned when the trajectory already holds
    ///   'capacity' samples.
    pub(crate) fn push(&mut self, point: TrajectoryPoint) -> Result<(), Error> {
        if self.points.len() >= self.capacity {
            return Err(Error::TrajectoryCapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.points.push(point);
        Ok(())
    }

    /// Returns a trajectory with the same timing where the positions and velocities are
    /// multiplied by the given scale.
    ///
    /// Accelerations are copied unchanged.
    pub fn scaled(&self, scale: f64) -> Trajectory {
        let points = self
            .points
            .iter()
            .map(|point| {
                TrajectoryPoint::new(
                    scale * point.pos(),
                    scale * point.vel(),
                    point.acc(),
                    point.time(),
                )
            })
            .collect();

        Trajectory {
            points,
            capacity: self.capacity,
        }
    }

    /// Creates a new, empty, [Trajectory] that can hold 'capacity' samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
