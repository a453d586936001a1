//! Non-manual marker evaluation.
//!
//! Markers map onto fixed expression axes, scaled by the marker's
//! intensity. Unknown expression names are silently skipped: marker
//! vocabularies grow upstream and an unrecognized name must degrade to a
//! neutral face, never an error.

use std::f32::consts::TAU;

use gestura_core::{ExpressionState, MarkerKind, MouthShape, NonManualMarker};

/// Head nod/shake oscillation amplitude scale.
const HEAD_OSCILLATION_SCALE: f32 = 0.3;

/// Static head tilt scale.
const HEAD_TILT_SCALE: f32 = 0.2;

/// How strongly a squint closes the eyes at full intensity.
const SQUINT_CLOSURE: f32 = 0.6;

/// Brow raise accompanying wide eyes.
const WIDE_EYES_BROW_RAISE: f32 = 0.3;

/// Fold a sign's markers into an expression state at `progress`.
///
/// Later markers write over earlier ones on the axes they share; the
/// dictionary orders markers by precedence.
#[must_use]
pub fn apply(markers: &[NonManualMarker], progress: f32) -> ExpressionState {
    let mut expression = ExpressionState::default();
    for marker in markers {
        match marker.kind {
            MarkerKind::Facial => apply_facial(&mut expression, marker),
            MarkerKind::Head => apply_head(&mut expression, marker, progress),
        }
    }
    expression.clamp_ranges();
    expression
}

fn apply_facial(expression: &mut ExpressionState, marker: &NonManualMarker) {
    let intensity = marker.intensity;
    match marker.expression.as_str() {
        "raised-eyebrows" => expression.eyebrows = intensity,
        "furrowed-brows" => expression.eyebrows = -intensity,
        "wide-eyes" => {
            expression.eye_openness = 1.0;
            expression.eyebrows = WIDE_EYES_BROW_RAISE * intensity;
        }
        "squint" => expression.eye_openness = SQUINT_CLOSURE.mul_add(-intensity, 1.0),
        "smile" => expression.mouth_shape = MouthShape::Smile,
        "open-mouth" => expression.mouth_shape = MouthShape::Open,
        "pursed-lips" => expression.mouth_shape = MouthShape::Pursed,
        "wide-mouth" => expression.mouth_shape = MouthShape::Wide,
        _ => {}
    }
}

fn apply_head(expression: &mut ExpressionState, marker: &NonManualMarker, progress: f32) {
    let oscillation = (progress * TAU).sin() * marker.intensity * HEAD_OSCILLATION_SCALE;
    match marker.expression.as_str() {
        "nod" => expression.head_tilt.x = oscillation,
        "shake" => expression.head_tilt.y = oscillation,
        "tilt" => expression.head_tilt.z = marker.intensity * HEAD_TILT_SCALE,
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
