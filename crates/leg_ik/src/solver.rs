//! The closed form leg inverse kinematics solver.
//!
//! A solve runs in three stages:
//!
//! 1. The ankle intersection is placed at the goal and expressed relative to the hip
//!    intersection. Hip roll, hip yaw and ankle roll follow directly from that vector and
//!    the goal orientation.
//! 2. With those three joints set, forward kinematics gives the ankle in the upper leg
//!    frame, which is projected onto the leg plane.
//! 3. The planar triangle of upper leg, lower leg and hip to ankle distance gives hip
//!    pitch, knee and ankle pitch.
use std::f64::consts::PI;

use nalgebra::{Isometry3, Translation3, Vector3};

use crate::config::IkConfig;
use crate::error::{Error, Result};
use crate::geometry::{ChainGeometry, planar};
use crate::joints::{LegJoint, LegJoints, LegLink};
use crate::model::KinematicModel;
use crate::rotation;
use crate::triangle::LegTriangle;

/// Below this length of the ankle pitch axis projected on the ground, hip yaw is undefined.
const SINGULAR_EPSILON: f64 = 1e-9;

/// Analytical inverse kinematics for a single leg.
///
/// The chain geometry is measured once in [`LegIkSolver::new`], solving only needs `&self`
/// so a solver can be shared between threads.
#[derive(Debug, Clone)]
pub struct LegIkSolver<M> {
    model: M,
    geometry: ChainGeometry,
    config: IkConfig,
}

impl<M: KinematicModel> LegIkSolver<M> {
    /// Create a solver for `model`.
    ///
    /// Fails if the configuration is invalid or the model does not have intersecting hip
    /// and ankle axes.
    pub fn new(model: M, config: IkConfig) -> Result<Self> {
        config.validate()?;
        let geometry = ChainGeometry::from_model(&model, config.intersection_tolerance)?;

        Ok(Self {
            model,
            geometry,
            config,
        })
    }

    /// Compute the joint angles that put the sole at `goal`.
    ///
    /// `goal` is the pose of the sole in the body frame. The returned angles include the
    /// configured zero offsets.
    ///
    /// Hip yaw is computed with an unsigned `acos`, so it is never negative. Goals that
    /// need a negative hip yaw are solved as if the yaw was mirrored.
    ///
    /// Position is always reached. Orientation is only exact when the ankle roll can
    /// undo the hip roll after the pitch chain: a goal pitch needs zero hip roll, so the
    /// ankle intersection has to lie in the sagittal plane of the hip. Goal yaw needs the
    /// ankle intersection on the hip yaw axis.
    pub fn solve(&self, goal: &Isometry3<f64>) -> Result<LegJoints<f64>> {
        let geometry = &self.geometry;

        let ankle_goal = goal * geometry.ankle_offset;
        let target = Translation3::from(-geometry.hip_intersection.coords) * ankle_goal;
        let (goal_roll, goal_pitch, _) = rotation::intrinsic_xyz(&goal.rotation);

        let hip_to_ankle = target.translation.vector;
        let hip_roll = hip_to_ankle.y.atan2(-hip_to_ankle.z);
        let ankle_roll = goal_roll - hip_roll;

        let ankle_pitch_axis = target.rotation * geometry.ankle_pitch_axis;
        let ground_line = ankle_pitch_axis.cross(&Vector3::z());
        let ground_line_length = ground_line.norm();
        if ground_line_length < SINGULAR_EPSILON {
            tracing::debug!("Goal {goal:?} leaves the hip yaw undefined");
            return Err(Error::SingularGoal);
        }
        let hip_yaw = (ground_line.x / ground_line_length).clamp(-1.0, 1.0).acos();

        let mut context = ChainContext::default();
        context.set(LegJoint::HipYaw, hip_yaw);
        context.set(LegJoint::HipRoll, hip_roll);
        context.set(LegJoint::AnkleRoll, ankle_roll);

        let body_to_upper_leg = context.transform(&self.model, LegLink::Body, LegLink::UpperLeg)?;
        let sole_to_ankle = context.transform(&self.model, LegLink::Sole, LegLink::Ankle)?;
        let upper_leg_to_ankle = body_to_upper_leg.inverse() * goal * sole_to_ankle;

        let leg_plane = planar(
            &upper_leg_to_ankle.translation.vector,
            &geometry.hip_pitch_axis,
        );
        let distance = leg_plane.norm();

        let triangle = LegTriangle::solve(
            geometry.upper_leg_length,
            geometry.lower_leg_length,
            distance,
        )
        .inspect_err(|e| tracing::debug!("Goal {goal:?} is out of reach: {e}"))?;

        let inclination = leg_plane.x.atan2(-leg_plane.y);
        tracing::trace!(
            hip_yaw,
            hip_roll,
            ankle_roll,
            distance,
            inclination,
            ?triangle,
            "solved leg chain"
        );

        context.set(LegJoint::HipPitch, triangle.hip - inclination);
        context.set(LegJoint::Knee, triangle.knee - PI);
        context.set(
            LegJoint::AnklePitch,
            triangle.ankle + goal_pitch + inclination,
        );

        Ok(context.joints + self.config.zero_offsets)
    }

    /// Pose of the sole in the body frame for angles as returned by [`LegIkSolver::solve`].
    ///
    /// The configured zero offsets are removed before evaluating the model.
    pub fn forward(&self, joints: &LegJoints<f64>) -> Result<Isometry3<f64>> {
        let geometric = *joints - self.config.zero_offsets;
        self.model
            .link_transform(LegLink::Body, LegLink::Sole, &geometric)
    }

    /// The chain geometry measured from the model.
    #[must_use]
    pub fn geometry(&self) -> &ChainGeometry {
        &self.geometry
    }

    /// The kinematic model the solver was built from.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The configuration the solver was built with.
    #[must_use]
    pub fn config(&self) -> &IkConfig {
        &self.config
    }
}

/// Joint configuration for a single solve.
///
/// Joints that have not been solved yet stay at zero while the partial chain is evaluated.
#[derive(Debug, Default)]
struct ChainContext {
    joints: LegJoints<f64>,
}

impl ChainContext {
    fn set(&mut self, joint: LegJoint, position: f64) {
        self.joints[joint] = position;
    }

    fn transform(
        &self,
        model: &impl KinematicModel,
        from: LegLink,
        to: LegLink,
    ) -> Result<Isometry3<f64>> {
        model.link_transform(from, to, &self.joints)
    }
}
