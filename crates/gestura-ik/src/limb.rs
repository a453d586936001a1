//! Limb description: bone lengths and rest direction, measured from the
//! target skeleton's rest pose.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Which side of the body a limb belongs to.
///
/// Sidedness mirrors the elbow bend axis so left/right limbs bend
/// symmetrically for mirrored targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A two-bone limb: upper and lower bone lengths plus the direction the
/// limb points in the rest pose.
///
/// Lengths come from [`ArmLimb::calibrate`]: distances between the
/// parent/child joints of the skeleton's own rest pose at load time,
/// never hard-coded constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmLimb {
    /// Shoulder→elbow length.
    pub upper_len: f32,
    /// Elbow→wrist length.
    pub lower_len: f32,
    /// Unit direction from shoulder to wrist in the rest pose.
    pub rest_dir: Vector3<f32>,
    pub side: Side,
}

impl ArmLimb {
    /// Measure a limb from rest-pose joint positions.
    ///
    /// Returns `None` if either bone has (near-)zero length, a degenerate
    /// rest pose the solver cannot work with.
    #[must_use]
    pub fn calibrate(
        shoulder: &Vector3<f32>,
        elbow: &Vector3<f32>,
        wrist: &Vector3<f32>,
        side: Side,
    ) -> Option<Self> {
        let upper_len = (elbow - shoulder).norm();
        let lower_len = (wrist - elbow).norm();
        if upper_len < 1e-6 || lower_len < 1e-6 {
            return None;
        }
        let span = wrist - shoulder;
        let rest_dir = if span.norm() < 1e-6 {
            // Fully folded rest pose: point along the upper bone.
            (elbow - shoulder) / upper_len
        } else {
            span.normalize()
        };
        Some(Self {
            upper_len,
            lower_len,
            rest_dir,
            side,
        })
    }

    /// Construct from explicit lengths and rest direction.
    ///
    /// `rest_dir` is normalized; lengths must be positive (caller
    /// contract, not validated).
    #[must_use]
    pub fn from_lengths(upper_len: f32, lower_len: f32, rest_dir: Vector3<f32>, side: Side) -> Self {
        Self {
            upper_len,
            lower_len,
            rest_dir: rest_dir.normalize(),
            side,
        }
    }

    /// Maximum reach of the limb (sum of bone lengths).
    #[must_use]
    pub fn max_reach(&self) -> f32 {
        self.upper_len + self.lower_len
    }

    /// Minimum reach of the limb (bone-length difference).
    #[must_use]
    pub fn min_reach(&self) -> f32 {
        (self.upper_len - self.lower_len).abs()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
