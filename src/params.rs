//! Defines the parameters of the trajectory generators and the functions that load them.
//!
//! The parameters are stored as a TOML document, for instance
//!
//! ```toml
//! max_acceleration = 12.0
//! max_velocity = 12.0
//! sample_interval = 0.005
//! track_width = 2.4
//! ```
//!
//! Fields that are missing from the document take their default value.

use std::{fs::read_to_string, path::Path};

use log::debug;
use serde::Deserialize;

use crate::{
    motion_profiles::{
        curve_generator::TrajectoryCurveGenerator, trajectory_generator::TrajectoryGenerator,
    },
    Error,
};

#[cfg(test)]
#[path = "params_tests.rs"]
mod params_tests;

/// Stores the parameters of the trajectory generators.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorParams {
    /// The maximum acceleration of a wheel.
    pub max_acceleration: f64,

    /// The maximum velocity of a wheel.
    pub max_velocity: f64,

    /// The time between two samples of a trajectory, in seconds.
    pub sample_interval: f64,

    /// The distance between the wheels.
    pub track_width: f64,
}

impl GeneratorParams {
    /// Creates the [TrajectoryCurveGenerator] described by the parameters.
    ///
    /// ## Errors
    ///
    /// * Any error returned by [TrajectoryGenerator::new] or [TrajectoryCurveGenerator::new].
    pub fn curve_generator(&self) -> Result<TrajectoryCurveGenerator, Error> {
        TrajectoryCurveGenerator::new(self.trajectory_generator()?, self.track_width)
    }

    /// Creates the [TrajectoryGenerator] described by the parameters.
    ///
    /// ## Errors
    ///
    /// * Any error returned by [TrajectoryGenerator::new].
    pub fn trajectory_generator(&self) -> Result<TrajectoryGenerator, Error> {
        TrajectoryGenerator::new(
            self.max_acceleration,
            self.max_velocity,
            self.sample_interval,
        )
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            max_acceleration: 12.0,
            max_velocity: 12.0,
            sample_interval: 0.005,
            track_width: 2.4,
        }
    }
}

/// Parses the parameters from a TOML document.
///
/// ## Errors
///
/// * [Error::FailedToParseParameters] - Returned when the document is not valid TOML or a
///   field has the wrong type.
pub fn from_toml_str(document: &str) -> Result<GeneratorParams, Error> {
    toml::from_str(document).map_err(|e| Error::FailedToParseParameters {
        reason: e.to_string(),
    })
}

/// Loads the parameters from a TOML file.
///
/// ## Errors
///
/// * [Error::FailedToReadParameters] - Returned when the file cannot be read.
/// * [Error::FailedToParseParameters] - Returned when the contents cannot be parsed.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GeneratorParams, Error> {
    let path = path.as_ref();
    let document = read_to_string(path).map_err(|e| Error::FailedToReadParameters {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let params = from_toml_str(&document)?;
    debug!("Loaded generator parameters from {}: {:?}", path.display(), params);

    Ok(params)
}
