//! Solver configuration, loaded from TOML.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::joints::LegJoints;
use crate::line::DEFAULT_TOLERANCE;

/// Configuration of a [`LegIkSolver`](crate::LegIkSolver).
///
/// ```toml
/// intersection_tolerance = 1e-3
///
/// [zero_offsets]
/// knee = 0.74
/// hip_pitch = 0.026
/// ankle_pitch = -2.72
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IkConfig {
    /// Maximum distance between two joint axes that are treated as intersecting, in metres.
    ///
    /// Also bounds how close to parallel the axes may be.
    pub intersection_tolerance: f64,

    /// Mechanical zero offset of every joint, in radians.
    ///
    /// The offset is added to the geometric joint angle, joints that are left out default
    /// to zero.
    pub zero_offsets: LegJoints<f64>,
}

impl Default for IkConfig {
    fn default() -> Self {
        Self {
            intersection_tolerance: DEFAULT_TOLERANCE,
            zero_offsets: LegJoints::default(),
        }
    }
}

impl IkConfig {
    /// Default file name of the configuration.
    pub const PATH: &'static str = "leg_ik.toml";

    /// Load and validate the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded leg ik config from {}", path.display());

        Ok(config)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Check that every value is usable by the solver.
    pub fn validate(&self) -> Result<()> {
        if !self.intersection_tolerance.is_finite() || self.intersection_tolerance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "intersection_tolerance must be positive and finite, got {}",
                self.intersection_tolerance
            )));
        }

        if let Some((joint, offset)) = self
            .zero_offsets
            .iter_named()
            .find(|(_, offset)| !offset.is_finite())
        {
            return Err(Error::InvalidConfig(format!(
                "zero offset of `{joint}` must be finite, got {offset}"
            )));
        }

        Ok(())
    }
}
