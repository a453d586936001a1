//! Keyframe tracks with per-segment easing.
//!
//! A track is a time-sorted, non-empty list of [`Keyframe`]s. The easing
//! applied over a segment is taken from the segment's **ending** keyframe,
//! so each keyframe describes how motion arrives at it.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::math::clamp01;

/// A single keyframe: a time in `[0, 1]`, a value, and the easing used
/// to approach this keyframe from the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T> {
    /// Normalized track time of this keyframe.
    pub t: f32,
    pub value: T,
    #[serde(default)]
    pub easing: Easing,
}

impl<T> Keyframe<T> {
    pub const fn new(t: f32, value: T) -> Self {
        Self {
            t,
            value,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Sample a keyframe track at `t` using the supplied value interpolator.
///
/// `t` is clamped to `[0, 1]`. Outside the track's own time range the
/// first/last keyframe value is returned unchanged; a single-keyframe
/// track returns its value for any `t`.
///
/// The caller contract is a non-empty, time-sorted track.
///
/// # Panics
///
/// Panics if `keyframes` is empty.
pub fn interpolate_keyframes<T: Clone>(
    keyframes: &[Keyframe<T>],
    t: f32,
    interp: impl Fn(&T, &T, f32) -> T,
) -> T {
    assert!(!keyframes.is_empty(), "keyframe track must be non-empty");

    let t = clamp01(t);

    if keyframes.len() == 1 || t <= keyframes[0].t {
        return keyframes[0].value.clone();
    }
    let last = &keyframes[keyframes.len() - 1];
    if t >= last.t {
        return last.value.clone();
    }

    // Find the bracketing segment [start, end] with start.t <= t < end.t.
    let end_idx = keyframes
        .iter()
        .position(|k| k.t > t)
        .unwrap_or(keyframes.len() - 1);
    let start = &keyframes[end_idx - 1];
    let end = &keyframes[end_idx];

    let span = end.t - start.t;
    let local_t = if span <= f32::EPSILON {
        1.0
    } else {
        (t - start.t) / span
    };

    // The ending keyframe's easing shapes the approach.
    let eased = end.easing.apply(local_t);
    interp(&start.value, &end.value, eased)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
