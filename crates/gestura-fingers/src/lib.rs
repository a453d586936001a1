//! Finger flexion: fixed handshape tables and procedural estimation.
//!
//! Two independent sources of per-finger curl values:
//!
//! - **Table mode** ([`tables`]): a handshape name from the sign vocabulary
//!   maps to fixed per-finger and thumb constants. Unknown names silently
//!   fall back to `flat-hand`.
//! - **Procedural mode** ([`procedural`]): curls estimated from captured
//!   joint positions along each finger chain, one interior angle per
//!   internal joint.
//!
//! Curl convention everywhere: `0.0` = fully extended, `1.0` = fully
//! folded. Finger order is index, middle, ring, pinky.

pub mod procedural;
pub mod tables;

pub use procedural::{finger_curl, thumb_curl};
pub use tables::{curls_for, HandshapeCurls};
