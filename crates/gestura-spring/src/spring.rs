//! The scalar damped-oscillator stepper and its vector state.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SpringParams
// ---------------------------------------------------------------------------

/// Damped-oscillator parameters.
///
/// `stiffness` pulls toward the target, `damping` bleeds velocity, `mass`
/// scales inertia. See [`crate::presets`] for the named tunings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    #[must_use]
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

impl Default for SpringParams {
    /// The `smooth` preset.
    fn default() -> Self {
        presets_default()
    }
}

// Kept as a free fn so `Default` can stay out of the presets module.
const fn presets_default() -> SpringParams {
    crate::presets::smooth()
}

// ---------------------------------------------------------------------------
// Scalar stepper
// ---------------------------------------------------------------------------

/// One semi-implicit Euler step of a single damped oscillator axis.
///
/// `a = (-k·(pos - target) - c·vel) / m`, then velocity before position.
/// Returns the updated `(position, velocity)` pair.
#[inline]
#[must_use]
pub fn step_axis(
    position: f32,
    velocity: f32,
    target: f32,
    params: &SpringParams,
    dt: f32,
) -> (f32, f32) {
    let accel =
        (-params.stiffness * (position - target) - params.damping * velocity) / params.mass;
    let velocity = accel.mul_add(dt, velocity);
    let position = velocity.mul_add(dt, position);
    (position, velocity)
}

// ---------------------------------------------------------------------------
// SpringState
// ---------------------------------------------------------------------------

/// Mutable spring state for one tracked point.
///
/// Owned exclusively by one `PoseBlender` per limb and updated once per
/// tick; never shared across avatar instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringState {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
}

impl SpringState {
    /// A spring at rest at `position`.
    #[must_use]
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
        }
    }

    /// Advance toward `target` by `dt` seconds.
    ///
    /// Each axis is stepped independently by [`step_axis`].
    pub fn step(&mut self, target: &Vector3<f32>, params: &SpringParams, dt: f32) {
        for axis in 0..3 {
            let (p, v) = step_axis(
                self.position[axis],
                self.velocity[axis],
                target[axis],
                params,
                dt,
            );
            self.position[axis] = p;
            self.velocity[axis] = v;
        }
    }

    /// Teleport to `position`, zeroing velocity. No transient on the next
    /// step.
    pub fn snap_to(&mut self, position: Vector3<f32>) {
        self.position = position;
        self.velocity = Vector3::zeros();
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::at(Vector3::zeros())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
