//! Result and Error types for the crate.
use miette::Diagnostic;
use thiserror::Error;

/// Result containing an error variant from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Leg inverse kinematics error variants.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The two rotation axes are parallel, so they have no unique intersection point.
    #[error("rotation axes are parallel (|v1 x v2| = {cross_norm:.3e}), no unique intersection")]
    #[diagnostic(help("check the joint axes of the hip yaw/roll and ankle pitch/roll pairs"))]
    DegenerateAxes { cross_norm: f64 },

    /// The two rotation axes are skew, they do not meet within the tolerance.
    #[error("rotation axes do not intersect (residual {residual:.3e} exceeds the tolerance)")]
    #[diagnostic(help(
        "the chain needs intersecting hip yaw/roll and ankle pitch/roll axes, \
         or a larger intersection tolerance"
    ))]
    NotCoplanar { residual: f64 },

    /// The hip to ankle distance violates the triangle inequality of the leg.
    #[error("hip to ankle distance {distance:.4} m is outside the reachable range [{min:.4}, {max:.4}] m")]
    Unreachable { distance: f64, min: f64, max: f64 },

    /// The goal orientation puts the ankle pitch axis along the vertical, hip yaw is undefined.
    #[error("goal orientation leaves the hip yaw undefined (ankle pitch axis is vertical)")]
    SingularGoal,

    /// The kinematic model cannot provide a required joint or axis.
    #[error("invalid kinematic model: {0}")]
    InvalidModel(String),

    /// The configuration contains values the solver cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error, this wraps a [`std::io::Error`]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Deserialize error, this wraps a [`toml::de::Error`]
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error only concerns the requested goal.
    ///
    /// Any other error means the model or configuration is malformed, and retrying with a
    /// different goal will not help.
    #[must_use]
    pub fn is_per_goal(&self) -> bool {
        matches!(self, Error::Unreachable { .. } | Error::SingularGoal)
    }
}
