use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rest-pose constants
// ---------------------------------------------------------------------------

/// Right-hand rest position (canonical avatar space, Y up, meters).
pub const RIGHT_HAND_REST: [f32; 3] = [0.25, -0.35, 0.15];

/// Left-hand rest position, mirrored across the body midline.
pub const LEFT_HAND_REST: [f32; 3] = [-0.25, -0.35, 0.15];

// ---------------------------------------------------------------------------
// LimbPose
// ---------------------------------------------------------------------------

/// Pose of one hand: wrist position, wrist rotation and finger flexion.
///
/// Rotation is XYZ Euler angles in radians. Finger curls are in `[0, 1]`
/// (0 = fully extended, 1 = fully curled) in fixed order: index, middle,
/// ring, pinky.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbPose {
    /// Wrist position in canonical avatar space.
    pub position: Vector3<f32>,
    /// Wrist rotation, XYZ Euler, radians.
    pub rotation: Vector3<f32>,
    /// Per-finger curl: index, middle, ring, pinky.
    pub finger_curls: [f32; 4],
    /// Thumb curl.
    pub thumb_curl: f32,
}

impl LimbPose {
    /// A limb at the given position with zero rotation and open fingers.
    #[must_use]
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Vector3::zeros(),
            finger_curls: [0.0; 4],
            thumb_curl: 0.0,
        }
    }

    /// Clamp all curls into `[0, 1]`.
    pub fn clamp_curls(&mut self) {
        for curl in &mut self.finger_curls {
            *curl = curl.clamp(0.0, 1.0);
        }
        self.thumb_curl = self.thumb_curl.clamp(0.0, 1.0);
    }

    /// Set all finger curls and the thumb curl at once.
    pub fn set_curls(&mut self, fingers: [f32; 4], thumb: f32) {
        self.finger_curls = fingers;
        self.thumb_curl = thumb;
        self.clamp_curls();
    }
}

impl Default for LimbPose {
    fn default() -> Self {
        Self::at(Vector3::zeros())
    }
}

// ---------------------------------------------------------------------------
// ExpressionState
// ---------------------------------------------------------------------------

/// Mouth blend-shape selector driven by non-manual markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MouthShape {
    #[default]
    Neutral,
    Open,
    Smile,
    Pursed,
    Wide,
}

/// Facial and head state accompanying the manual signal.
///
/// `eyebrows` is in `[-1, 1]` (negative = furrowed, positive = raised);
/// `eye_openness` is in `[0, 1]`. `head_tilt` is XYZ Euler radians applied
/// to the head bone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionState {
    pub eyebrows: f32,
    pub eye_openness: f32,
    pub mouth_shape: MouthShape,
    pub head_tilt: Vector3<f32>,
}

impl ExpressionState {
    /// Clamp scalar fields into their documented ranges.
    pub fn clamp_ranges(&mut self) {
        self.eyebrows = self.eyebrows.clamp(-1.0, 1.0);
        self.eye_openness = self.eye_openness.clamp(0.0, 1.0);
    }
}

impl Default for ExpressionState {
    fn default() -> Self {
        Self {
            eyebrows: 0.0,
            eye_openness: 1.0,
            mouth_shape: MouthShape::Neutral,
            head_tilt: Vector3::zeros(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pose
// ---------------------------------------------------------------------------

/// Canonical intermediate pose: both hands plus the facial state.
///
/// Every producer (sign synthesis, retargeting) emits this form and the
/// blender smooths between successive instances. The external renderer
/// consumes it to drive bone rotations, finger joints and blend shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub right_hand: LimbPose,
    pub left_hand: LimbPose,
    pub expression: ExpressionState,
}

impl Pose {
    /// The neutral rest pose: hands at their rest offsets, open fingers,
    /// neutral face.
    #[must_use]
    pub fn rest() -> Self {
        Self {
            right_hand: LimbPose::at(Vector3::from(RIGHT_HAND_REST)),
            left_hand: LimbPose::at(Vector3::from(LEFT_HAND_REST)),
            expression: ExpressionState::default(),
        }
    }

    /// Clamp curls and expression scalars into their documented ranges.
    pub fn clamp_ranges(&mut self) {
        self.right_hand.clamp_curls();
        self.left_hand.clamp_curls();
        self.expression.clamp_ranges();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
