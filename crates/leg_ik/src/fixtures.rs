//! Leg models shared by the unit tests.
use nalgebra::{Isometry3, Translation3, Vector3};

use crate::joints::LegJoints;
use crate::model::{JointDescription, LegModel};

/// A leg hanging straight down from the body origin, with the hip and ankle axes
/// intersecting in the body origin and the sole origin respectively.
pub(crate) fn straight_leg(upper_leg: f64, lower_leg: f64) -> LegModel {
    let joints = LegJoints {
        hip_yaw: JointDescription::revolute(Isometry3::identity(), Vector3::z_axis()),
        hip_roll: JointDescription::revolute(Isometry3::identity(), Vector3::x_axis()),
        hip_pitch: JointDescription::revolute(Isometry3::identity(), Vector3::y_axis()),
        knee: JointDescription::revolute(
            Translation3::new(0.0, 0.0, -upper_leg),
            Vector3::y_axis(),
        ),
        ankle_pitch: JointDescription::revolute(
            Translation3::new(0.0, 0.0, -lower_leg),
            Vector3::y_axis(),
        ),
        ankle_roll: JointDescription::revolute(Isometry3::identity(), Vector3::x_axis()),
    };

    LegModel::new(joints, Isometry3::identity())
}

/// A leg with a lateral hip offset, a hip pitch joint below the hip intersection and an
/// ankle intersection that is neither at the sole nor at the foot link origin.
///
/// Hip intersection: `(0.0, 0.055, -0.07)` in the body frame.
/// Ankle intersection: `(-0.02, 0.0, 0.05)` in the sole frame.
pub(crate) fn offset_leg() -> LegModel {
    let joints = LegJoints {
        hip_yaw: JointDescription::revolute(
            Translation3::new(0.0, 0.055, -0.04),
            Vector3::z_axis(),
        ),
        hip_roll: JointDescription::revolute(
            Translation3::new(0.0, 0.0, -0.03),
            Vector3::x_axis(),
        ),
        hip_pitch: JointDescription::revolute(
            Translation3::new(0.0, 0.0, -0.025),
            Vector3::y_axis(),
        ),
        knee: JointDescription::revolute(Translation3::new(0.0, 0.0, -0.17), Vector3::y_axis()),
        ankle_pitch: JointDescription::revolute(
            Translation3::new(0.0, 0.0, -0.17),
            Vector3::y_axis(),
        ),
        ankle_roll: JointDescription::revolute(
            Translation3::new(0.02, 0.0, 0.0),
            Vector3::x_axis(),
        ),
    };

    LegModel::new(joints, Translation3::new(0.0, 0.0, -0.05))
}
