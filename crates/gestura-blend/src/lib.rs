//! Pose smoothing between successive targets.
//!
//! A [`PoseBlender`] owns the avatar's current [`Pose`] plus one spring
//! state per hand. Each tick the host passes the new target pose and the
//! frame's `dt`; positions are advanced by the damped springs, while
//! rotations, curls and the facial state use exponential rate smoothing
//! (`1 - exp(-rate * dt)`), which converges identically at 30 and 90 Hz.
//!
//! One blender per avatar instance, confined to the render-driving
//! thread. Nothing here is `Sync`-guarded; sharing a blender across
//! concurrently animated avatars is a caller bug.

pub mod blender;

pub use blender::PoseBlender;
