//! Defines the odometry integrator.
//!
//! The [PoseEstimate] is fed the cumulative wheel distances and the absolute heading once
//! per control loop iteration. From the change since the previous iteration it calculates
//! the [Twist] of the robot and integrates that into the pose.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, trace};

use crate::{
    geometry::{rigid_transform::RigidTransform, rotation::Rotation, twist::Twist},
    kinematics::{forward_kinematics, integrate_forward_kinematics},
};

#[cfg(test)]
#[path = "pose_estimate_tests.rs"]
mod pose_estimate_tests;

/// Defines the states of the [PoseEstimate].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrackingState {
    /// No sensor readings have been processed since creation or the last reset.
    Uninitialized,

    /// At least one sensor reading has been processed.
    Tracking,
}

/// Stores the outcome of a single [PoseEstimate::update] so that it can be handed to
/// other threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseSnapshot {
    /// The pose after the update.
    pose: RigidTransform,

    /// The twist over the update.
    velocity: Twist,

    /// The number of updates processed since the last reset, including this one.
    tick: u64,
}

impl PoseSnapshot {
    /// Returns the pose after the update.
    pub fn pose(&self) -> &RigidTransform {
        &self.pose
    }

    /// Returns the number of updates processed since the last reset, including the one
    /// that created this snapshot.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Returns the twist over the update.
    pub fn velocity(&self) -> &Twist {
        &self.velocity
    }
}

/// Tracks the pose of a differential drive robot from its wheel distances and heading.
///
/// The estimate is owned by the control loop and updated through `&mut self`. Other
/// threads that want to observe the pose [subscribe](PoseEstimate::subscribe) to the
/// snapshots that are published after every update.
///
/// ## Example
///
/// ```
/// use diff_drive_motion::odometry::pose_estimate::PoseEstimate;
///
/// let mut estimate = PoseEstimate::new();
/// estimate.update(1.0, 1.0, 0.0);
/// estimate.update(2.0, 2.0, 0.0);
///
/// assert_eq!(2.0, estimate.pose().translation().x());
/// assert_eq!(1.0, estimate.velocity().dx());
/// ```
#[derive(Debug)]
pub struct PoseEstimate {
    /// The current pose of the robot.
    pose: RigidTransform,

    /// The pose accumulated from the sensor readings since the last reset. The rotation
    /// is the last heading reading, which is used to turn the absolute heading readings
    /// into heading changes.
    prev_pose: RigidTransform,

    /// The pose the robot was reset to. The accumulated pose is applied relative to it.
    origin: RigidTransform,

    /// The twist over the last update.
    velocity: Twist,

    /// The cumulative left wheel distance at the last update.
    prev_left_distance: f64,

    /// The cumulative right wheel distance at the last update.
    prev_right_distance: f64,

    /// The number of updates since the last reset.
    tick: u64,

    /// The channels that receive a snapshot after each update.
    subscribers: Vec<Sender<PoseSnapshot>>,
}

impl PoseEstimate {
    /// Creates a new [PoseEstimate] at the identity pose.
    pub fn new() -> Self {
        Self {
            pose: RigidTransform::identity(),
            prev_pose: RigidTransform::identity(),
            origin: RigidTransform::identity(),
            velocity: Twist::zero(),
            prev_left_distance: 0.0,
            prev_right_distance: 0.0,
            tick: 0,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current pose.
    pub fn pose(&self) -> &RigidTransform {
        &self.pose
    }

    /// Resets the estimate to the given pose.
    ///
    /// The wheel distances and heading passed to the next [update](PoseEstimate::update)
    /// are measured against zero, so the encoders and the heading sensor are expected to
    /// be zeroed at the same time.
    ///
    /// ## Parameters
    ///
    /// * 'starting_pose' - The pose of the robot at the moment of the reset.
    pub fn reset(&mut self, starting_pose: RigidTransform) {
        debug!("Resetting pose estimate to {:?}", starting_pose);

        self.pose = starting_pose;
        self.origin = starting_pose;
        self.prev_pose = RigidTransform::identity();
        self.velocity = Twist::zero();
        self.prev_left_distance = 0.0;
        self.prev_right_distance = 0.0;
        self.tick = 0;
    }

    /// Returns the current [TrackingState].
    pub fn state(&self) -> TrackingState {
        if self.tick == 0 {
            TrackingState::Uninitialized
        } else {
            TrackingState::Tracking
        }
    }

    /// Returns a [Receiver] that gets a [PoseSnapshot] after every update.
    ///
    /// Snapshots are never waited on. When the receiver falls more than 'capacity'
    /// snapshots behind new snapshots are dropped for that receiver, and once the
    /// receiver is dropped it is no longer published to.
    ///
    /// ## Parameters
    ///
    /// * 'capacity' - The number of snapshots that can be queued. A capacity of zero is
    ///   treated as one.
    pub fn subscribe(&mut self, capacity: usize) -> Receiver<PoseSnapshot> {
        let (sender, receiver) = crossbeam_channel::bounded(capacity.max(1));
        self.subscribers.push(sender);
        receiver
    }

    /// Updates the pose from the latest sensor readings.
    ///
    /// Must be called exactly once per control loop iteration.
    ///
    /// ## Parameters
    ///
    /// * 'left_distance' - The cumulative distance travelled by the left wheel since the
    ///   last reset.
    /// * 'right_distance' - The cumulative distance travelled by the right wheel since the
    ///   last reset.
    /// * 'heading_in_degrees' - The absolute heading as reported by the heading sensor.
    pub fn update(&mut self, left_distance: f64, right_distance: f64, heading_in_degrees: f64) {
        let left_delta = left_distance - self.prev_left_distance;
        let right_delta = right_distance - self.prev_right_distance;

        // The heading sensor is absolute, the kinematics need the change in heading
        let heading_delta = self
            .prev_pose
            .rotation()
            .inverse()
            .rotate(&Rotation::from_degrees(heading_in_degrees));

        self.velocity = forward_kinematics(left_delta, right_delta, heading_delta.radians());

        let accumulated = integrate_forward_kinematics(&self.prev_pose, &self.velocity);
        self.pose = self.origin.transform(&accumulated);
        self.prev_pose = accumulated;

        self.prev_left_distance = left_distance;
        self.prev_right_distance = right_distance;
        self.tick += 1;

        trace!(
            "Pose estimate tick {}: velocity {:?}, pose {:?}",
            self.tick,
            self.velocity,
            self.pose
        );

        self.publish();
    }

    /// Returns the twist over the last update, i.e. the distance travelled and the change
    /// in heading during the last control loop iteration.
    pub fn velocity(&self) -> &Twist {
        &self.velocity
    }

    #[cfg_attr(test, mutants::skip)] // Cannot easily check mutations as this depends on the state of the reader threads
    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }

        let snapshot = PoseSnapshot {
            pose: self.pose,
            velocity: self.velocity,
            tick: self.tick,
        };

        self.subscribers
            .retain(|subscriber| match subscriber.try_send(snapshot) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    trace!("Dropping pose snapshot {} for a full subscriber", snapshot.tick);
                    true
                }
                Err(TrySendError::Disconnected(_)) => {
                    debug!("Removing disconnected pose snapshot subscriber");
                    false
                }
            });
    }
}

impl Default for PoseEstimate {
    fn default() -> Self {
        Self::new()
    }
}
