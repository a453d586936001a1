//! Named easing curves used by keyframe interpolation.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// A named easing curve mapping `t ∈ [0, 1]` to an eased parameter.
///
/// The overshooting curves (`ElasticOut`, `BackIn`, `BackOut`) may leave
/// `[0, 1]`; that is their point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    ElasticOut,
    BackIn,
    BackOut,
    Smoothstep,
    Smootherstep,
}

impl Easing {
    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 2.0f32.mul_add(-t, 2.0);
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0f32.mul_add(-t, 2.0);
                    1.0 - u * u * u / 2.0
                }
            }
            Self::ElasticOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let c4 = (2.0 * PI) / 3.0;
                    2.0f32
                        .powf(-10.0 * t)
                        .mul_add(((t.mul_add(10.0, -0.75)) * c4).sin(), 1.0)
                }
            }
            Self::BackIn => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                C3 * t * t * t - C1 * t * t
            }
            Self::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
            Self::Smootherstep => t * t * t * t.mul_add(t.mul_add(6.0, -15.0), 10.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
