//! Sign-to-pose synthesis.
//!
//! [`sign_to_pose`] turns an abstract [`Sign`](gestura_core::Sign) record
//! plus a playback progress in `[0, 1]` into a concrete target
//! [`Pose`](gestura_core::Pose). The function is deterministic and pure:
//! the same sign and progress always yield the same pose, so playback can
//! be scrubbed, reversed or re-run without state.
//!
//! Smoothing between successive targets is not done here; the host feeds
//! the synthesized targets to `gestura-blend` each tick.

pub mod markers;
pub mod synth;

pub use synth::sign_to_pose;
