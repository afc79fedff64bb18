//! The triangle spanned by the hip, the knee and the ankle.
use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Slack on the triangle inequality, so fully stretched and fully folded legs are accepted.
const REACH_SLACK: f64 = 1e-12;

/// Interior angles of the leg triangle, in radians.
///
/// ```text
///        hip
///        /\
///   L1  /  \  D
///      /    \
///  knee ---- ankle
///        L2
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegTriangle {
    /// Angle at the hip, opposite the lower leg.
    pub hip: f64,
    /// Angle at the knee, opposite the hip to ankle side.
    pub knee: f64,
    /// Angle at the ankle, opposite the upper leg.
    pub ankle: f64,
}

impl LegTriangle {
    /// Solve the triangle with sides `upper_leg`, `lower_leg` and the hip to ankle `distance`.
    ///
    /// Fails with [`Error::Unreachable`] when the sides violate the triangle inequality.
    pub fn solve(upper_leg: f64, lower_leg: f64, distance: f64) -> Result<Self> {
        let min = (upper_leg - lower_leg).abs();
        let max = upper_leg + lower_leg;

        if distance <= 0.0 || distance < min - REACH_SLACK || distance > max + REACH_SLACK {
            return Err(Error::Unreachable { distance, min, max });
        }

        let hip_cos = (upper_leg.powi(2) + distance.powi(2) - lower_leg.powi(2))
            / (2.0 * upper_leg * distance);
        let knee_cos = (upper_leg.powi(2) + lower_leg.powi(2) - distance.powi(2))
            / (2.0 * upper_leg * lower_leg);
        let ankle_cos = (lower_leg.powi(2) + distance.powi(2) - upper_leg.powi(2))
            / (2.0 * lower_leg * distance);

        Ok(Self {
            hip: hip_cos.clamp(-1.0, 1.0).acos(),
            knee: knee_cos.clamp(-1.0, 1.0).acos(),
            ankle: ankle_cos.clamp(-1.0, 1.0).acos(),
        })
    }

    /// How far the knee is bent away from a straight leg.
    #[must_use]
    pub fn knee_flexion(&self) -> f64 {
        PI - self.knee
    }
}
