//! The `sign_to_pose` pipeline: handshape, placement, movement.

use std::f32::consts::{PI, TAU};

use nalgebra::Vector3;

use gestura_core::math::clamp01;
use gestura_core::{MovementKind, Pose, Sign, LEFT_HAND_REST};
use gestura_fingers::curls_for;

use crate::markers;

// ---------------------------------------------------------------------------
// Placement and movement constants
// ---------------------------------------------------------------------------

// Signing-space location -> avatar-space wrist position, per axis.
const LOC_X_SCALE: f32 = 0.5;
const LOC_X_OFFSET: f32 = 0.15;
const LOC_Y_SCALE: f32 = 0.8;
const LOC_Y_OFFSET: f32 = -0.2;
const LOC_Z_SCALE: f32 = 0.5;
const LOC_Z_OFFSET: f32 = 0.2;

/// Scale on the `direction * progress` displacement.
const MOVEMENT_SCALE: f32 = 0.3;

/// Vertical bounce amplitude for repeated movements.
const BOUNCE_AMPLITUDE: f32 = 0.05;

/// Vertical lift at the apex of an arc movement.
const ARC_LIFT: f32 = 0.05;

/// Radius of the circular movement loop.
const CIRCLE_RADIUS: f32 = 0.05;

/// Lateral amplitude and cycle count of the zigzag wave.
const ZIGZAG_AMPLITUDE: f32 = 0.04;
const ZIGZAG_CYCLES: f32 = 3.0;

/// Handshape assumed for the non-dominant hand of a one-handed sign.
const ONE_HANDED_NON_DOMINANT: &str = "open-hand";

// ---------------------------------------------------------------------------
// sign_to_pose
// ---------------------------------------------------------------------------

/// Synthesize the target pose for `sign` at playback `progress` in [0, 1].
///
/// Deterministic and pure. Progress outside [0, 1] is clamped. Output
/// ranges are enforced: curls in [0, 1], eyebrows in [-1, 1], eye
/// openness in [0, 1].
#[must_use]
pub fn sign_to_pose(sign: &Sign, progress: f32) -> Pose {
    let progress = clamp01(progress);
    let mut pose = Pose::rest();

    let dominant = curls_for(&sign.handshape.dominant);
    pose.right_hand.set_curls(dominant.fingers, dominant.thumb);

    let non_dominant_name = sign
        .handshape
        .non_dominant
        .as_deref()
        .unwrap_or(ONE_HANDED_NON_DOMINANT);
    let non_dominant = curls_for(non_dominant_name);
    pose.left_hand.set_curls(non_dominant.fingers, non_dominant.thumb);

    let right = hand_position(sign, progress);
    pose.right_hand.position = right;
    pose.left_hand.position = if sign.is_two_handed() {
        // Mirror across the body midline; height and depth are shared.
        Vector3::new(-right.x, right.y, right.z)
    } else {
        Vector3::from(LEFT_HAND_REST)
    };

    pose.expression = markers::apply(&sign.non_manual_markers, progress);

    pose.clamp_ranges();
    pose
}

/// Dominant-hand wrist position at `progress`.
fn hand_position(sign: &Sign, progress: f32) -> Vector3<f32> {
    let loc = &sign.location;
    let mut pos = Vector3::new(
        loc.x.mul_add(LOC_X_SCALE, LOC_X_OFFSET),
        loc.y.mul_add(LOC_Y_SCALE, LOC_Y_OFFSET),
        loc.z.mul_add(LOC_Z_SCALE, LOC_Z_OFFSET),
    );

    let movement = &sign.movement;
    if let Some(direction) = movement.direction {
        pos += direction * (progress * MOVEMENT_SCALE);
    }

    // Path shaping per movement kind. Every shape is zero at progress 0
    // so a sign always starts at its place of articulation.
    match movement.kind {
        MovementKind::Static | MovementKind::Linear => {}
        MovementKind::Arc => {
            pos.y += (progress * PI).sin() * ARC_LIFT;
        }
        MovementKind::Circular => {
            pos.x += (progress * TAU).sin() * CIRCLE_RADIUS;
            pos.z += ((progress * TAU).cos() - 1.0) * CIRCLE_RADIUS;
        }
        MovementKind::Zigzag => {
            pos.x += (progress * TAU * ZIGZAG_CYCLES).sin() * ZIGZAG_AMPLITUDE;
        }
    }

    if movement.repetitions > 1 {
        pos.y += (progress * movement.repetitions as f32 * TAU).sin() * BOUNCE_AMPLITUDE;
    }

    pos
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
