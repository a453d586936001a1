//! Curl estimation from captured joint positions.
//!
//! Each finger is a chain of 3-4 joint sites (MCP, PIP, DIP, TIP). Every
//! internal joint contributes one interior angle: a straight joint reads
//! pi, a fully folded joint reads 0. The angle maps to a curl via
//! `clamp(1 - (angle - pi/2) / (pi/2), 0, 1)`, so pi maps to 0 and pi/2
//! maps to 1. Curls from all internal joints are averaged.

use std::f32::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;

/// Thumb flexion reads shallower than finger flexion on capture data, so
/// the averaged curl is rescaled before the abduction term is added.
const THUMB_MAX_SCALE: f32 = 0.7;

/// Weight of the first-joint (CMC) angle in the thumb curl. Abduction at
/// the base shows up as flexion nowhere else in the chain.
const THUMB_ABDUCTION_WEIGHT: f32 = 0.25;

/// Interior angle at `b` formed by the segments `b->a` and `b->c`.
///
/// A (near-)zero-length segment yields pi, the straight-joint reading, so
/// degenerate capture data reads as an extended finger rather than NaN.
fn interior_angle(a: &Vector3<f32>, b: &Vector3<f32>, c: &Vector3<f32>) -> f32 {
    let u = a - b;
    let v = c - b;
    let norms = u.norm() * v.norm();
    if norms < 1e-6 {
        return PI;
    }
    (u.dot(&v) / norms).clamp(-1.0, 1.0).acos()
}

fn angle_to_curl(angle: f32) -> f32 {
    (1.0 - (angle - FRAC_PI_2) / FRAC_PI_2).clamp(0.0, 1.0)
}

/// Estimate a finger's curl from its joint chain (MCP first, TIP last).
///
/// Chains shorter than 3 joints have no internal joint and read as fully
/// extended. Never returns NaN.
#[must_use]
pub fn finger_curl(joints: &[Vector3<f32>]) -> f32 {
    if joints.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut count = 0;
    for w in joints.windows(3) {
        sum += angle_to_curl(interior_angle(&w[0], &w[1], &w[2]));
        count += 1;
    }
    sum / count as f32
}

/// Estimate the thumb's curl from its joint chain.
///
/// Same interior-angle formula as [`finger_curl`] but rescaled by a lower
/// maximum, plus an abduction term taken from the first joint only.
#[must_use]
pub fn thumb_curl(joints: &[Vector3<f32>]) -> f32 {
    if joints.len() < 3 {
        return 0.0;
    }
    let base = finger_curl(joints);
    let first = angle_to_curl(interior_angle(&joints[0], &joints[1], &joints[2]));
    first.mul_add(THUMB_ABDUCTION_WEIGHT, base * THUMB_MAX_SCALE).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
