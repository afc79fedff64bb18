//! Geometry of the leg chain that does not depend on the goal.
//!
//! Everything in here is measured once, with the model at the all-zero configuration, and is
//! read-only afterwards.
use nalgebra::{Point3, Translation3, UnitVector3, Vector2, Vector3};

use crate::error::Result;
use crate::joints::{LegJoint, LegJoints, LegLink};
use crate::line::Line;
use crate::model::KinematicModel;

/// Cached geometry of a leg chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainGeometry {
    /// Position of the ankle pitch/roll intersection in the sole frame.
    pub ankle_offset: Translation3<f64>,
    /// Position of the hip yaw/roll intersection in the body frame.
    pub hip_intersection: Point3<f64>,
    /// Planar distance from the hip pitch joint to the knee joint, in metres.
    pub upper_leg_length: f64,
    /// Planar distance from the knee joint to the ankle pitch joint, in metres.
    pub lower_leg_length: f64,
    /// Ankle pitch rotation axis in the sole frame.
    pub ankle_pitch_axis: UnitVector3<f64>,
    /// Hip pitch rotation axis in the upper leg frame, this is the normal of the leg plane.
    pub hip_pitch_axis: UnitVector3<f64>,
}

impl ChainGeometry {
    /// Measure the chain geometry of `model`.
    ///
    /// Fails if the hip yaw/roll or ankle pitch/roll axes do not intersect within
    /// `tolerance`, or if any of the joints is not revolute.
    pub fn from_model(model: &impl KinematicModel, tolerance: f64) -> Result<Self> {
        let zero = LegJoints::default();

        let ankle_roll = joint_axis(model, LegLink::Sole, LegJoint::AnkleRoll, &zero)?;
        let ankle_pitch = joint_axis(model, LegLink::Sole, LegJoint::AnklePitch, &zero)?;
        let ankle_intersection = ankle_pitch
            .intersection(&ankle_roll, tolerance)
            .inspect_err(|e| {
                tracing::error!("Ankle pitch and ankle roll axes do not intersect: {e}");
            })?;

        let hip_yaw = joint_axis(model, LegLink::Body, LegJoint::HipYaw, &zero)?;
        let hip_roll = joint_axis(model, LegLink::Body, LegJoint::HipRoll, &zero)?;
        let hip_intersection = hip_yaw
            .intersection(&hip_roll, tolerance)
            .inspect_err(|e| {
                tracing::error!("Hip yaw and hip roll axes do not intersect: {e}");
            })?;

        let hip_pitch_axis = model.revolute_axis(LegJoint::HipPitch)?;
        let knee_axis = model.revolute_axis(LegJoint::Knee)?;

        let hip_to_knee = model.link_transform(LegLink::UpperLeg, LegLink::LowerLeg, &zero)?;
        let knee_to_ankle = model.link_transform(LegLink::LowerLeg, LegLink::Ankle, &zero)?;
        let upper_leg_length = planar(&hip_to_knee.translation.vector, &hip_pitch_axis).norm();
        let lower_leg_length = planar(&knee_to_ankle.translation.vector, &knee_axis).norm();

        let geometry = Self {
            ankle_offset: Translation3::from(ankle_intersection.coords),
            hip_intersection,
            upper_leg_length,
            lower_leg_length,
            ankle_pitch_axis: ankle_pitch.direction,
            hip_pitch_axis,
        };

        tracing::debug!(
            "Leg chain geometry: hip intersection {:?}, ankle offset {:?}, upper leg {} m, lower leg {} m",
            geometry.hip_intersection,
            geometry.ankle_offset.vector,
            geometry.upper_leg_length,
            geometry.lower_leg_length,
        );

        Ok(geometry)
    }

    /// Shortest and longest reachable hip to ankle distance.
    #[must_use]
    pub fn reach(&self) -> (f64, f64) {
        (
            (self.upper_leg_length - self.lower_leg_length).abs(),
            self.upper_leg_length + self.lower_leg_length,
        )
    }
}

/// The rotation axis of `joint` as a line in the frame of `frame`.
fn joint_axis(
    model: &impl KinematicModel,
    frame: LegLink,
    joint: LegJoint,
    joints: &LegJoints<f64>,
) -> Result<Line> {
    let axis = model.revolute_axis(joint)?;
    let joint_to_frame = model.link_transform(frame, joint.child_link(), joints)?;

    Ok(Line::new(
        Point3::from(joint_to_frame.translation.vector),
        joint_to_frame.rotation * axis,
    ))
}

/// Project `vector` onto the plane of a rotation about `axis`.
///
/// Drops the coordinate `axis` is dominant in and keeps the other two in x, y, z order.
pub(crate) fn planar(vector: &Vector3<f64>, axis: &Vector3<f64>) -> Vector2<f64> {
    match axis.iamax() {
        0 => Vector2::new(vector.y, vector.z),
        1 => Vector2::new(vector.x, vector.z),
        _ => Vector2::new(vector.x, vector.y),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{point, vector};

    use super::*;
    use crate::error::Error;
    use crate::fixtures;
    use crate::line::DEFAULT_TOLERANCE;
    use crate::model::{JointKind, LegModel};

    #[test]
    fn straight_leg() {
        let geometry =
            ChainGeometry::from_model(&fixtures::straight_leg(0.2, 0.2), DEFAULT_TOLERANCE)
                .unwrap();

        assert_relative_eq!(geometry.ankle_offset.vector, Vector3::zeros());
        assert_relative_eq!(geometry.hip_intersection, Point3::origin());
        assert_relative_eq!(geometry.upper_leg_length, 0.2);
        assert_relative_eq!(geometry.lower_leg_length, 0.2);
        assert_relative_eq!(geometry.ankle_pitch_axis, Vector3::y_axis());

        let (min, max) = geometry.reach();
        assert_relative_eq!(min, 0.0);
        assert_relative_eq!(max, 0.4);
    }

    #[test]
    fn offset_leg() {
        let geometry =
            ChainGeometry::from_model(&fixtures::offset_leg(), DEFAULT_TOLERANCE).unwrap();

        assert_relative_eq!(
            geometry.ankle_offset.vector,
            vector![-0.02, 0.0, 0.05],
            epsilon = 1e-12
        );
        assert_relative_eq!(
            geometry.hip_intersection,
            point![0.0, 0.055, -0.07],
            epsilon = 1e-12
        );
        assert_relative_eq!(geometry.upper_leg_length, 0.17, epsilon = 1e-12);
        assert_relative_eq!(geometry.lower_leg_length, 0.17, epsilon = 1e-12);
        assert_relative_eq!(geometry.ankle_pitch_axis, Vector3::y_axis(), epsilon = 1e-12);
        assert_relative_eq!(geometry.hip_pitch_axis, Vector3::y_axis());
    }

    #[test]
    fn parallel_ankle_axes_are_rejected() {
        let mut joints = *fixtures::offset_leg().joints();
        joints.ankle_roll.kind = JointKind::revolute(Vector3::y_axis());
        let model = LegModel::new(joints, Translation3::new(0.0, 0.0, -0.05));

        assert!(matches!(
            ChainGeometry::from_model(&model, DEFAULT_TOLERANCE),
            Err(Error::DegenerateAxes { .. })
        ));
    }

    #[test]
    fn skew_hip_axes_are_rejected() {
        let mut joints = *fixtures::offset_leg().joints();
        joints.hip_roll.origin = Translation3::new(0.0, 0.01, -0.03).into();
        let model = LegModel::new(joints, Translation3::new(0.0, 0.0, -0.05));

        assert!(matches!(
            ChainGeometry::from_model(&model, DEFAULT_TOLERANCE),
            Err(Error::NotCoplanar { .. })
        ));

        // a looser tolerance accepts the same model
        assert!(ChainGeometry::from_model(&model, 0.05).is_ok());
    }

    #[test]
    fn non_revolute_knee_is_rejected() {
        let mut joints = *fixtures::offset_leg().joints();
        joints.knee.kind = JointKind::Fixed;
        let model = LegModel::new(joints, Translation3::new(0.0, 0.0, -0.05));

        assert!(matches!(
            ChainGeometry::from_model(&model, DEFAULT_TOLERANCE),
            Err(Error::InvalidModel(_))
        ));
    }

    #[test]
    fn planar_drops_the_axis_coordinate() {
        let v = vector![1.0, 2.0, 3.0];

        assert_eq!(planar(&v, &Vector3::x()), Vector2::new(2.0, 3.0));
        assert_eq!(planar(&v, &Vector3::y()), Vector2::new(1.0, 3.0));
        assert_eq!(planar(&v, &-Vector3::z()), Vector2::new(1.0, 2.0));
        assert_eq!(planar(&v, &vector![0.1, 0.9, -0.2]), Vector2::new(1.0, 3.0));
    }
}
