//! Captured/imported skeleton frames in their three source conventions.
//!
//! A [`SkeletonFrame`] is produced upstream once per frame and consumed
//! once by the matching adapter in `gestura-retarget`. The three variants
//! are deliberately a tagged union dispatched by `match`, one adapter
//! function per variant.

use std::collections::HashMap;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::RetargetError;

// ---------------------------------------------------------------------------
// SMPL-X layout constants
// ---------------------------------------------------------------------------

/// Total length of a flat SMPL-X parameter vector.
pub const SMPLX_LEN: usize = 182;
/// Number of body joints in the body block (21 × 3 axis-angle floats).
pub const SMPLX_BODY_JOINTS: usize = 21;
/// Number of joints per hand block (15 × 3 axis-angle floats).
pub const SMPLX_HAND_JOINTS: usize = 15;

pub const SMPLX_ROOT: std::ops::Range<usize> = 0..3;
pub const SMPLX_BODY: std::ops::Range<usize> = 3..66;
pub const SMPLX_LEFT_HAND: std::ops::Range<usize> = 66..111;
pub const SMPLX_RIGHT_HAND: std::ops::Range<usize> = 111..156;
pub const SMPLX_JAW: std::ops::Range<usize> = 156..159;
pub const SMPLX_BETAS: std::ops::Range<usize> = 159..169;
pub const SMPLX_EXPRESSION: std::ops::Range<usize> = 169..179;
pub const SMPLX_CAM_TRANS: std::ops::Range<usize> = 179..182;

// ---------------------------------------------------------------------------
// NamedBoneFrame
// ---------------------------------------------------------------------------

/// Per-bone XYZ Euler rotations (radians), keyed by bone name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedBoneFrame {
    rotations: HashMap<String, Vector3<f32>>,
}

impl NamedBoneFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, bone: impl Into<String>, euler: Vector3<f32>) {
        self.rotations.insert(bone.into(), euler);
    }

    /// Rotation for a bone, if present in this frame.
    #[must_use]
    pub fn get(&self, bone: &str) -> Option<&Vector3<f32>> {
        self.rotations.get(bone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }
}

impl FromIterator<(String, Vector3<f32>)> for NamedBoneFrame {
    fn from_iter<I: IntoIterator<Item = (String, Vector3<f32>)>>(iter: I) -> Self {
        Self {
            rotations: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// SmplxFrame
// ---------------------------------------------------------------------------

/// A flat 182-float SMPL-X parameter vector with fixed block offsets.
///
/// Construction validates the length: a wrong-sized vector is a caller
/// contract violation and fails fast, never a silent truncation. The
/// serde representation is the bare float array, and deserialization
/// goes through the same check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct SmplxFrame {
    values: Vec<f32>,
}

impl TryFrom<Vec<f32>> for SmplxFrame {
    type Error = RetargetError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<SmplxFrame> for Vec<f32> {
    fn from(frame: SmplxFrame) -> Self {
        frame.values
    }
}

impl SmplxFrame {
    /// Wrap a raw parameter vector.
    ///
    /// # Errors
    ///
    /// `RetargetError::SmplxLength` if `values.len() != 182`.
    pub fn new(values: Vec<f32>) -> Result<Self, RetargetError> {
        if values.len() != SMPLX_LEN {
            return Err(RetargetError::SmplxLength { got: values.len() });
        }
        Ok(Self { values })
    }

    /// An all-zero frame (T-pose equivalent).
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            values: vec![0.0; SMPLX_LEN],
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Root (pelvis) axis-angle. Note: the retarget adapter intentionally
    /// discards this; see `gestura-retarget::smplx`.
    #[must_use]
    pub fn root(&self) -> Vector3<f32> {
        self.vec3_at(SMPLX_ROOT.start)
    }

    /// Axis-angle rotation of body joint `i` (0-based, 21 joints).
    ///
    /// # Panics
    ///
    /// Panics if `i >= SMPLX_BODY_JOINTS`.
    #[must_use]
    pub fn body_joint(&self, i: usize) -> Vector3<f32> {
        assert!(i < SMPLX_BODY_JOINTS, "body joint index out of range");
        self.vec3_at(SMPLX_BODY.start + i * 3)
    }

    /// Axis-angle rotation of left-hand joint `i` (0-based, 15 joints).
    #[must_use]
    pub fn left_hand_joint(&self, i: usize) -> Vector3<f32> {
        assert!(i < SMPLX_HAND_JOINTS, "hand joint index out of range");
        self.vec3_at(SMPLX_LEFT_HAND.start + i * 3)
    }

    /// Axis-angle rotation of right-hand joint `i` (0-based, 15 joints).
    #[must_use]
    pub fn right_hand_joint(&self, i: usize) -> Vector3<f32> {
        assert!(i < SMPLX_HAND_JOINTS, "hand joint index out of range");
        self.vec3_at(SMPLX_RIGHT_HAND.start + i * 3)
    }

    /// Jaw axis-angle.
    #[must_use]
    pub fn jaw(&self) -> Vector3<f32> {
        self.vec3_at(SMPLX_JAW.start)
    }

    /// The 10 expression coefficients.
    #[must_use]
    pub fn expression_coeffs(&self) -> &[f32] {
        &self.values[SMPLX_EXPRESSION]
    }

    /// Camera-frame translation.
    #[must_use]
    pub fn cam_trans(&self) -> Vector3<f32> {
        self.vec3_at(SMPLX_CAM_TRANS.start)
    }

    fn vec3_at(&self, offset: usize) -> Vector3<f32> {
        Vector3::new(
            self.values[offset],
            self.values[offset + 1],
            self.values[offset + 2],
        )
    }
}

// ---------------------------------------------------------------------------
// JointPositionFrame
// ---------------------------------------------------------------------------

/// Raw captured joint sites: absolute 3D positions keyed by joint name,
/// in the *source* capture convention (Y down, Z negative toward camera).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JointPositionFrame {
    positions: HashMap<String, Vector3<f32>>,
}

impl JointPositionFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, joint: impl Into<String>, position: Vector3<f32>) {
        self.positions.insert(joint.into(), position);
    }

    #[must_use]
    pub fn get(&self, joint: &str) -> Option<&Vector3<f32>> {
        self.positions.get(joint)
    }

    #[must_use]
    pub fn contains(&self, joint: &str) -> bool {
        self.positions.contains_key(joint)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(String, Vector3<f32>)> for JointPositionFrame {
    fn from_iter<I: IntoIterator<Item = (String, Vector3<f32>)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// SkeletonFrame
// ---------------------------------------------------------------------------

/// One captured/imported frame in whichever convention the source uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkeletonFrame {
    /// Named-bone Euler rotations (animation import).
    NamedBone(NamedBoneFrame),
    /// Flat SMPL-X parameter vector (body-model capture).
    Smplx(SmplxFrame),
    /// Raw joint positions (marker/depth capture).
    JointPositions(JointPositionFrame),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
