//! Joint and link naming for the leg chain, and the [`LegJoints`] container.
//!
//! The chain is (fixed transforms marked with `(f)`):
//!
//! ```text
//! Body -> HipYaw -> HipRoll -> UpperLeg -> LowerLeg -> Ankle -> Foot -> Sole(f)
//!     hip_yaw  hip_roll  hip_pitch   knee   ankle_pitch  ankle_roll
//! ```
use std::ops::{Add, Index, IndexMut, Sub};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// One of the six joints of the leg, in chain order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LegJoint {
    HipYaw,
    HipRoll,
    HipPitch,
    Knee,
    AnklePitch,
    AnkleRoll,
}

impl LegJoint {
    /// All joints, ordered from the body to the foot.
    pub const CHAIN: [LegJoint; 6] = [
        LegJoint::HipYaw,
        LegJoint::HipRoll,
        LegJoint::HipPitch,
        LegJoint::Knee,
        LegJoint::AnklePitch,
        LegJoint::AnkleRoll,
    ];

    /// The link this joint is mounted on.
    #[must_use]
    pub fn parent_link(self) -> LegLink {
        match self {
            LegJoint::HipYaw => LegLink::Body,
            LegJoint::HipRoll => LegLink::HipYaw,
            LegJoint::HipPitch => LegLink::HipRoll,
            LegJoint::Knee => LegLink::UpperLeg,
            LegJoint::AnklePitch => LegLink::LowerLeg,
            LegJoint::AnkleRoll => LegLink::Ankle,
        }
    }

    /// The link moved by this joint, its frame coincides with the joint frame.
    #[must_use]
    pub fn child_link(self) -> LegLink {
        match self {
            LegJoint::HipYaw => LegLink::HipYaw,
            LegJoint::HipRoll => LegLink::HipRoll,
            LegJoint::HipPitch => LegLink::UpperLeg,
            LegJoint::Knee => LegLink::LowerLeg,
            LegJoint::AnklePitch => LegLink::Ankle,
            LegJoint::AnkleRoll => LegLink::Foot,
        }
    }
}

/// The links of the leg chain, from the body frame to the sole frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LegLink {
    Body,
    HipYaw,
    HipRoll,
    UpperLeg,
    LowerLeg,
    Ankle,
    Foot,
    /// Fixed to [`LegLink::Foot`], this is the frame goal poses are given in.
    Sole,
}

/// Wrapper struct containing a value for each joint of the leg.
///
/// Fields are declared in chain order, and [`LegJoints::iter`] yields them in that order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    default,
    deny_unknown_fields,
    bound(deserialize = "T: Deserialize<'de> + Default")
)]
pub struct LegJoints<T> {
    pub hip_yaw: T,
    pub hip_roll: T,
    pub hip_pitch: T,
    pub knee: T,
    pub ankle_pitch: T,
    pub ankle_roll: T,
}

impl<T> LegJoints<T> {
    /// Creates a [`LegJoints`] by calling `f` for every joint in chain order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(LegJoint) -> T,
    {
        LegJoints {
            hip_yaw: f(LegJoint::HipYaw),
            hip_roll: f(LegJoint::HipRoll),
            hip_pitch: f(LegJoint::HipPitch),
            knee: f(LegJoint::Knee),
            ankle_pitch: f(LegJoint::AnklePitch),
            ankle_roll: f(LegJoint::AnkleRoll),
        }
    }

    /// Transforms each element in the [`LegJoints`] using the provided closure `f`,
    /// producing a new [`LegJoints`] with the transformed values.
    ///
    /// # Example
    ///
    /// ```
    /// use leg_ik::LegJoints;
    ///
    /// let joints = LegJoints::<u32>::default();
    ///
    /// let transformed = joints.map(|x| x + 1);
    ///
    /// assert_eq!(transformed, LegJoints::fill(1));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> LegJoints<U>
    where
        F: FnMut(T) -> U,
    {
        LegJoints {
            hip_yaw: f(self.hip_yaw),
            hip_roll: f(self.hip_roll),
            hip_pitch: f(self.hip_pitch),
            knee: f(self.knee),
            ankle_pitch: f(self.ankle_pitch),
            ankle_roll: f(self.ankle_roll),
        }
    }

    /// Zips two [`LegJoints`] instances element-wise.
    pub fn zip<U>(self, other: LegJoints<U>) -> LegJoints<(T, U)> {
        LegJoints {
            hip_yaw: (self.hip_yaw, other.hip_yaw),
            hip_roll: (self.hip_roll, other.hip_roll),
            hip_pitch: (self.hip_pitch, other.hip_pitch),
            knee: (self.knee, other.knee),
            ankle_pitch: (self.ankle_pitch, other.ankle_pitch),
            ankle_roll: (self.ankle_roll, other.ankle_roll),
        }
    }

    /// Return an iterator over references to the elements, in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [
            &self.hip_yaw,
            &self.hip_roll,
            &self.hip_pitch,
            &self.knee,
            &self.ankle_pitch,
            &self.ankle_roll,
        ]
        .into_iter()
    }

    /// Return an iterator over `(joint, value)` pairs, in chain order.
    pub fn iter_named(&self) -> impl Iterator<Item = (LegJoint, &T)> {
        LegJoint::CHAIN.into_iter().zip(self.iter())
    }
}

impl<T: Clone> LegJoints<T> {
    /// Creates a [`LegJoints`] with every joint set to `value`.
    pub fn fill(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<LegJoint> for LegJoints<T> {
    type Output = T;

    fn index(&self, joint: LegJoint) -> &T {
        match joint {
            LegJoint::HipYaw => &self.hip_yaw,
            LegJoint::HipRoll => &self.hip_roll,
            LegJoint::HipPitch => &self.hip_pitch,
            LegJoint::Knee => &self.knee,
            LegJoint::AnklePitch => &self.ankle_pitch,
            LegJoint::AnkleRoll => &self.ankle_roll,
        }
    }
}

impl<T> IndexMut<LegJoint> for LegJoints<T> {
    fn index_mut(&mut self, joint: LegJoint) -> &mut T {
        match joint {
            LegJoint::HipYaw => &mut self.hip_yaw,
            LegJoint::HipRoll => &mut self.hip_roll,
            LegJoint::HipPitch => &mut self.hip_pitch,
            LegJoint::Knee => &mut self.knee,
            LegJoint::AnklePitch => &mut self.ankle_pitch,
            LegJoint::AnkleRoll => &mut self.ankle_roll,
        }
    }
}

impl<T> Add for LegJoints<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(lhs, rhs)| lhs + rhs)
    }
}

impl<T> Sub for LegJoints<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs).map(|(lhs, rhs)| lhs - rhs)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn chain_order_matches_declaration() {
        let order: Vec<LegJoint> = LegJoint::iter().collect();
        assert_eq!(order, LegJoint::CHAIN);

        let joints = LegJoints::from_fn(|joint| joint);
        let named: Vec<_> = joints.iter_named().map(|(joint, value)| (joint, *value)).collect();
        for (joint, value) in named {
            assert_eq!(joint, value);
        }
    }

    #[test]
    fn joint_names() {
        let names: Vec<&'static str> = LegJoint::CHAIN.iter().map(|&joint| joint.into()).collect();
        assert_eq!(
            names,
            ["hip_yaw", "hip_roll", "hip_pitch", "knee", "ankle_pitch", "ankle_roll"]
        );
        assert_eq!(LegLink::UpperLeg.to_string(), "upper_leg");
    }

    #[test]
    fn links_form_a_chain() {
        for pair in LegJoint::CHAIN.windows(2) {
            assert_eq!(pair[0].child_link(), pair[1].parent_link());
        }
        assert_eq!(LegJoint::HipYaw.parent_link(), LegLink::Body);
        assert_eq!(LegJoint::AnkleRoll.child_link(), LegLink::Foot);
    }

    #[test]
    fn index_and_arithmetic() {
        let mut joints = LegJoints::fill(1.0);
        joints[LegJoint::Knee] = 3.0;
        assert_eq!(joints.knee, 3.0);

        let sum = joints + LegJoints::fill(0.5);
        assert_eq!(sum[LegJoint::Knee], 3.5);
        assert_eq!(sum[LegJoint::HipYaw], 1.5);

        let difference = sum - joints;
        assert_eq!(difference, LegJoints::fill(0.5));
    }
}
