//! The kinematic model the solver reads the leg geometry from.
//!
//! [`KinematicModel`] is the seam to whatever owns the robot description. [`LegModel`] is a
//! serial chain implementation of it, with one [`JointDescription`] per joint.
use nalgebra::{Isometry3, Translation3, UnitQuaternion, UnitVector3};

use crate::error::{Error, Result};
use crate::joints::{LegJoint, LegJoints, LegLink};

/// A joint that rotates about a fixed axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevoluteJoint {
    axis: UnitVector3<f64>,
}

impl RevoluteJoint {
    /// A revolute joint rotating about `axis`, given in the joint frame.
    #[must_use]
    pub fn new(axis: UnitVector3<f64>) -> Self {
        Self { axis }
    }

    /// Rotation axis in the joint frame.
    #[must_use]
    pub fn axis(&self) -> UnitVector3<f64> {
        self.axis
    }
}

/// A joint that translates along a fixed direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrismaticJoint {
    direction: UnitVector3<f64>,
}

impl PrismaticJoint {
    /// A prismatic joint translating along `direction`, given in the joint frame.
    #[must_use]
    pub fn new(direction: UnitVector3<f64>) -> Self {
        Self { direction }
    }
}

/// The kind of a joint, only revolute joints expose a rotation axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JointKind {
    /// Rotates by the joint position, in radians.
    Revolute(RevoluteJoint),
    /// Translates by the joint position, in metres.
    Prismatic(PrismaticJoint),
    /// Ignores the joint position.
    Fixed,
}

impl JointKind {
    /// Shorthand for a [`JointKind::Revolute`] about `axis`.
    #[must_use]
    pub fn revolute(axis: UnitVector3<f64>) -> Self {
        JointKind::Revolute(RevoluteJoint::new(axis))
    }

    /// Transform of the child link in the joint frame, for the given joint position.
    #[must_use]
    pub fn motion(&self, position: f64) -> Isometry3<f64> {
        match self {
            JointKind::Revolute(joint) => Isometry3::from_parts(
                Translation3::identity(),
                UnitQuaternion::from_axis_angle(&joint.axis, position),
            ),
            JointKind::Prismatic(joint) => Isometry3::from_parts(
                Translation3::from(joint.direction.into_inner() * position),
                UnitQuaternion::identity(),
            ),
            JointKind::Fixed => Isometry3::identity(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            JointKind::Revolute(_) => "revolute",
            JointKind::Prismatic(_) => "prismatic",
            JointKind::Fixed => "fixed",
        }
    }
}

/// Provides the joints and link transforms of a leg.
///
/// Transforms are evaluated at an explicit joint configuration, joints that should not move
/// are simply left at zero. Implementations must not keep any state between calls.
pub trait KinematicModel {
    /// The kind of `joint`, including its axis for revolute joints.
    fn joint(&self, joint: LegJoint) -> Result<&JointKind>;

    /// The pose of `to` expressed in the frame of `from`, at the configuration `joints`.
    fn link_transform(
        &self,
        from: LegLink,
        to: LegLink,
        joints: &LegJoints<f64>,
    ) -> Result<Isometry3<f64>>;

    /// Rotation axis of a revolute joint, in its joint frame.
    fn revolute_axis(&self, joint: LegJoint) -> Result<UnitVector3<f64>> {
        match self.joint(joint)? {
            JointKind::Revolute(revolute) => Ok(revolute.axis()),
            kind => Err(Error::InvalidModel(format!(
                "joint `{joint}` is {} and has no rotation axis",
                kind.name()
            ))),
        }
    }
}

impl<M: KinematicModel + ?Sized> KinematicModel for &M {
    fn joint(&self, joint: LegJoint) -> Result<&JointKind> {
        (**self).joint(joint)
    }

    fn link_transform(
        &self,
        from: LegLink,
        to: LegLink,
        joints: &LegJoints<f64>,
    ) -> Result<Isometry3<f64>> {
        (**self).link_transform(from, to, joints)
    }
}

/// Static description of one joint of a [`LegModel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointDescription {
    /// Transform from the parent link frame to the joint frame.
    pub origin: Isometry3<f64>,
    /// How the child link moves relative to the joint frame.
    pub kind: JointKind,
}

impl JointDescription {
    /// A revolute joint at `origin` rotating about `axis`.
    #[must_use]
    pub fn revolute(origin: impl Into<Isometry3<f64>>, axis: UnitVector3<f64>) -> Self {
        Self {
            origin: origin.into(),
            kind: JointKind::revolute(axis),
        }
    }
}

/// A serial leg chain with static joint origins.
#[derive(Clone, Debug, PartialEq)]
pub struct LegModel {
    joints: LegJoints<JointDescription>,
    foot_to_sole: Isometry3<f64>,
}

impl LegModel {
    /// A chain of `joints` with the sole fixed to the foot link at `foot_to_sole`.
    #[must_use]
    pub fn new(joints: LegJoints<JointDescription>, foot_to_sole: impl Into<Isometry3<f64>>) -> Self {
        Self {
            joints,
            foot_to_sole: foot_to_sole.into(),
        }
    }

    /// The joint descriptions, in chain order.
    #[must_use]
    pub fn joints(&self) -> &LegJoints<JointDescription> {
        &self.joints
    }

    /// Fixed transform from the foot link to the sole frame.
    #[must_use]
    pub fn foot_to_sole(&self) -> Isometry3<f64> {
        self.foot_to_sole
    }

    /// Compute the pose of every link in the body frame.
    #[must_use]
    pub fn link_poses(&self, positions: &LegJoints<f64>) -> LinkPoses {
        let child_to_body = |parent_to_body: Isometry3<f64>, joint: LegJoint| {
            let description = &self.joints[joint];
            parent_to_body * description.origin * description.kind.motion(positions[joint])
        };

        let hip_yaw_to_body = child_to_body(Isometry3::identity(), LegJoint::HipYaw);
        let hip_roll_to_body = child_to_body(hip_yaw_to_body, LegJoint::HipRoll);
        let upper_leg_to_body = child_to_body(hip_roll_to_body, LegJoint::HipPitch);
        let lower_leg_to_body = child_to_body(upper_leg_to_body, LegJoint::Knee);
        let ankle_to_body = child_to_body(lower_leg_to_body, LegJoint::AnklePitch);
        let foot_to_body = child_to_body(ankle_to_body, LegJoint::AnkleRoll);
        let sole_to_body = foot_to_body * self.foot_to_sole;

        LinkPoses {
            hip_yaw_to_body,
            hip_roll_to_body,
            upper_leg_to_body,
            lower_leg_to_body,
            ankle_to_body,
            foot_to_body,
            sole_to_body,
        }
    }
}

impl KinematicModel for LegModel {
    fn joint(&self, joint: LegJoint) -> Result<&JointKind> {
        Ok(&self.joints[joint].kind)
    }

    fn link_transform(
        &self,
        from: LegLink,
        to: LegLink,
        joints: &LegJoints<f64>,
    ) -> Result<Isometry3<f64>> {
        let poses = self.link_poses(joints);
        Ok(poses.get(from).inverse() * poses.get(to))
    }
}

/// Poses of all links of a [`LegModel`], in the body frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinkPoses {
    pub hip_yaw_to_body: Isometry3<f64>,
    pub hip_roll_to_body: Isometry3<f64>,
    pub upper_leg_to_body: Isometry3<f64>,
    pub lower_leg_to_body: Isometry3<f64>,
    pub ankle_to_body: Isometry3<f64>,
    pub foot_to_body: Isometry3<f64>,
    pub sole_to_body: Isometry3<f64>,
}

impl LinkPoses {
    #[must_use]
    pub fn get(&self, link: LegLink) -> Isometry3<f64> {
        match link {
            LegLink::Body => Isometry3::identity(),
            LegLink::HipYaw => self.hip_yaw_to_body,
            LegLink::HipRoll => self.hip_roll_to_body,
            LegLink::UpperLeg => self.upper_leg_to_body,
            LegLink::LowerLeg => self.lower_leg_to_body,
            LegLink::Ankle => self.ankle_to_body,
            LegLink::Foot => self.foot_to_body,
            LegLink::Sole => self.sole_to_body,
        }
    }
}
