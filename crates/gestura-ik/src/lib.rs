//! Analytic two-bone inverse kinematics.
//!
//! Given a shoulder position, a wrist target and the two bone lengths,
//! [`ArmLimb::solve`] produces the root rotation and elbow bend in closed
//! form via the law of cosines, with no iteration and no Jacobians.
//!
//! # Architecture
//!
//! ```text
//! rest pose ──► ArmLimb (calibrated lengths) ──► solve ──► TwoBoneSolution
//! ```
//!
//! An [`ArmLimb`] is measured once from the target skeleton's own rest
//! pose at load time, so the solver self-calibrates to any rig instead of
//! assuming hard-coded proportions. Unreachable targets yield `None`; the
//! caller holds the prior pose or freezes the limb.

pub mod limb;
pub mod solver;

pub use limb::{ArmLimb, Side};
pub use solver::TwoBoneSolution;
