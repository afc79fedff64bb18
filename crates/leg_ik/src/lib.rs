//! Closed form inverse kinematics for a six joint leg.
//!
//! The solver supports legs with the following structure:
//!
//! ```text
//! body
//!  └─ hip yaw ─┐ axes intersect in the hip intersection
//!     hip roll ┘
//!      └─ hip pitch
//!          └─ upper leg ── knee ── lower leg
//!                                   └─ ankle pitch ─┐ axes intersect in the ankle intersection
//!                                      ankle roll  ─┘
//!                                       └─ foot ── sole
//! ```
//!
//! Hip pitch, knee and ankle pitch have to share a plane, which makes the middle of the leg
//! a planar triangle that is solved with the law of cosines. Everything else follows from
//! the two axis intersections.
//!
//! ```no_run
//! use leg_ik::prelude::*;
//! use nalgebra::{Isometry3, Translation3};
//!
//! # fn run(model: LegModel) -> leg_ik::Result<()> {
//! let config = IkConfig::load(IkConfig::PATH)?;
//! let solver = LegIkSolver::new(model, config)?;
//!
//! let goal = Isometry3::from(Translation3::new(0.02, 0.05, -0.3));
//! let joints = solver.solve(&goal)?;
//! for (joint, angle) in joints.iter_named() {
//!     println!("{joint}: {angle:.3} rad");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod joints;
pub mod line;
pub mod model;
pub mod rotation;
pub mod solver;
pub mod triangle;

#[cfg(test)]
mod fixtures;

pub mod prelude {
    pub use crate::config::IkConfig;
    pub use crate::joints::{LegJoint, LegJoints, LegLink};
    pub use crate::model::{JointDescription, JointKind, KinematicModel, LegModel};
    pub use crate::solver::LegIkSolver;
}

pub use config::IkConfig;
pub use error::{Error, Result};
pub use geometry::ChainGeometry;
pub use joints::{LegJoint, LegJoints, LegLink};
pub use line::{Line, intersect};
pub use model::{
    JointDescription, JointKind, KinematicModel, LegModel, LinkPoses, PrismaticJoint,
    RevoluteJoint,
};
pub use solver::LegIkSolver;
pub use triangle::LegTriangle;
