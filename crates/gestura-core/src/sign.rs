//! The `Sign` record: an abstract description of a single sign, supplied
//! by the upstream dictionary/script subsystem and read once per playback.
//!
//! A `Sign` says *what* to articulate (handshape, place, movement, facial
//! markers); `gestura-synth` turns it into concrete target poses.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HandshapeSpec / SignLocation
// ---------------------------------------------------------------------------

/// Handshape names for each hand.
///
/// Names index into the handshape curl table in `gestura-fingers`; an
/// unknown name silently falls back to `flat-hand` there (permissive by
/// design). `non_dominant: None` marks a one-handed sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshapeSpec {
    pub dominant: String,
    #[serde(default)]
    pub non_dominant: Option<String>,
}

/// Place of articulation in normalized signing-space coordinates.
///
/// `frame` names the reference frame the coordinates were authored in
/// (e.g. "chest", "face"); the synthesizer maps them into avatar space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignLocation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default)]
    pub frame: String,
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// Path shape of the manual movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    #[default]
    Static,
    Linear,
    Arc,
    Circular,
    Zigzag,
}

/// Articulation speed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// The movement component of a sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    #[serde(rename = "type")]
    pub kind: MovementKind,
    /// Primary movement direction, if any.
    #[serde(default)]
    pub direction: Option<Vector3<f32>>,
    /// Number of repetitions (1 = single stroke).
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    #[serde(default)]
    pub speed: MovementSpeed,
}

const fn default_repetitions() -> u32 {
    1
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            kind: MovementKind::Static,
            direction: None,
            repetitions: 1,
            speed: MovementSpeed::Normal,
        }
    }
}

// ---------------------------------------------------------------------------
// NonManualMarker
// ---------------------------------------------------------------------------

/// Whether a marker drives the face or the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Facial,
    Head,
}

/// A facial/head expression co-occurring with the sign.
///
/// `expression` is a free-form name (e.g. "raised-eyebrows", "nod");
/// unknown names are silently ignored by the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonManualMarker {
    pub kind: MarkerKind,
    pub expression: String,
    /// Marker strength in `[0, 1]`.
    pub intensity: f32,
}

// ---------------------------------------------------------------------------
// Sign
// ---------------------------------------------------------------------------

/// Immutable description of one sign, externally supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sign {
    /// Written label of the sign (e.g. "HELLO").
    pub gloss: String,
    pub duration_ms: u32,
    pub handshape: HandshapeSpec,
    pub location: SignLocation,
    #[serde(default)]
    pub movement: Movement,
    #[serde(default)]
    pub non_manual_markers: Vec<NonManualMarker>,
}

impl Sign {
    /// True if the sign uses both hands.
    #[must_use]
    pub fn is_two_handed(&self) -> bool {
        self.handshape.non_dominant.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
