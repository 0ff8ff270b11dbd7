/// Defines the sampled trajectory types.
pub mod trajectory;

/// Provides the trapezoidal velocity profile generator for straight moves.
pub mod trajectory_generator;

/// Provides the generator that composes the wheel trajectories of a curved move.
pub mod curve_generator;
