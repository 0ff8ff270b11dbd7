/// Provides the odometry integrator that tracks the robot pose.
pub mod pose_estimate;
