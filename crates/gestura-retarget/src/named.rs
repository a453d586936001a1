//! Named-bone adapter: animation-import frames keyed by bone name.
//!
//! Wrist and head rotations pass straight through. Finger curls are
//! recovered from per-joint flexion using the scaling contract shared
//! with the renderer: at curl `c` the renderer drives the proximal joint
//! to `c * (pi/2) * 0.7` and the distal joint to `c * (pi/2) * 0.85`, so
//! the adapter inverts those factors and averages whichever joints the
//! frame carries. Missing bones leave the rest value in place.

use std::f32::consts::FRAC_PI_2;

use gestura_core::{LimbPose, NamedBoneFrame, Pose};

/// Renderer-contract flexion scale at the proximal finger joint.
pub const PROXIMAL_CURL_SCALE: f32 = 0.7;

/// Renderer-contract flexion scale at the distal finger joint.
pub const DISTAL_CURL_SCALE: f32 = 0.85;

const FINGERS: [&str; 4] = ["index", "middle", "ring", "pinky"];

/// Convert a named-bone frame into the canonical pose.
#[must_use]
pub fn retarget_named(frame: &NamedBoneFrame) -> Pose {
    let mut pose = Pose::rest();

    adapt_hand(frame, "right", &mut pose.right_hand);
    adapt_hand(frame, "left", &mut pose.left_hand);

    if let Some(head) = frame.get("head") {
        pose.expression.head_tilt = *head;
    }

    pose.clamp_ranges();
    pose
}

fn adapt_hand(frame: &NamedBoneFrame, side: &str, limb: &mut LimbPose) {
    if let Some(wrist) = frame.get(&format!("{side}_wrist")) {
        limb.rotation = *wrist;
    }
    for (i, finger) in FINGERS.iter().enumerate() {
        if let Some(curl) = finger_curl(frame, side, finger) {
            limb.finger_curls[i] = curl;
        }
    }
    if let Some(curl) = finger_curl(frame, side, "thumb") {
        limb.thumb_curl = curl;
    }
}

/// Recover a curl from the flexion (local X) of the finger's joints.
///
/// Returns `None` when the frame carries neither joint for the finger.
fn finger_curl(frame: &NamedBoneFrame, side: &str, finger: &str) -> Option<f32> {
    let proximal = frame
        .get(&format!("{side}_{finger}_proximal"))
        .map(|rot| rot.x / (FRAC_PI_2 * PROXIMAL_CURL_SCALE));
    let distal = frame
        .get(&format!("{side}_{finger}_distal"))
        .map(|rot| rot.x / (FRAC_PI_2 * DISTAL_CURL_SCALE));

    let estimates: Vec<f32> = [proximal, distal].into_iter().flatten().collect();
    if estimates.is_empty() {
        return None;
    }
    let mean = estimates.iter().sum::<f32>() / estimates.len() as f32;
    Some(mean.clamp(0.0, 1.0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
