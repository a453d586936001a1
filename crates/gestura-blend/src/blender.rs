//! The per-avatar pose blender.

use gestura_core::math::{lerp, lerp_vec3};
use gestura_core::{BlendConfig, ConfigError, Pose};
use gestura_spring::{presets, SpringParams, SpringState};

/// Smooths successive target poses into a continuous output pose.
///
/// Hand positions are driven by independent damped springs; everything
/// else converges with framerate-independent exponential lerps. Discrete
/// fields (mouth shape) switch immediately.
#[derive(Debug, Clone)]
pub struct PoseBlender {
    pose: Pose,
    right_spring: SpringState,
    left_spring: SpringState,
    params: SpringParams,
    config: BlendConfig,
}

impl PoseBlender {
    /// A blender starting at the rest pose with the default config.
    #[must_use]
    pub fn new() -> Self {
        // Defaults are always valid; the Err path needs a bad user config.
        Self::from_config(BlendConfig::default()).unwrap_or_else(|_| unreachable!())
    }

    /// Build from a validated config.
    ///
    /// # Errors
    ///
    /// `ConfigError::UnknownSpringPreset` if the preset name is not one of
    /// the named tunings; `ConfigError::NonPositive` on bad rates.
    pub fn from_config(config: BlendConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = presets::by_name(&config.spring_preset)
            .ok_or_else(|| ConfigError::UnknownSpringPreset(config.spring_preset.clone()))?;
        let pose = Pose::rest();
        Ok(Self {
            right_spring: SpringState::at(pose.right_hand.position),
            left_spring: SpringState::at(pose.left_hand.position),
            params,
            config,
            pose,
        })
    }

    /// The current output pose.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Advance the output pose toward `target` by `dt` seconds.
    ///
    /// `dt` is clamped to the configured `max_dt`, so a stalled host
    /// resumes with one bounded step instead of a catapulted spring.
    /// `dt <= 0` is a no-op returning the unchanged pose: a dropped frame
    /// never corrupts spring state.
    pub fn update(&mut self, target: &Pose, dt: f32) -> &Pose {
        if dt <= 0.0 {
            return &self.pose;
        }
        let dt = dt.min(self.config.max_dt);

        self.right_spring
            .step(&target.right_hand.position, &self.params, dt);
        self.left_spring
            .step(&target.left_hand.position, &self.params, dt);
        self.pose.right_hand.position = self.right_spring.position;
        self.pose.left_hand.position = self.left_spring.position;

        let rot_t = rate_factor(self.config.rotation_rate, dt);
        let curl_t = rate_factor(self.config.curl_rate, dt);
        let expr_t = rate_factor(self.config.expression_rate, dt);

        self.pose.right_hand.rotation = lerp_vec3(
            &self.pose.right_hand.rotation,
            &target.right_hand.rotation,
            rot_t,
        );
        self.pose.left_hand.rotation = lerp_vec3(
            &self.pose.left_hand.rotation,
            &target.left_hand.rotation,
            rot_t,
        );

        blend_curls(&mut self.pose, target, curl_t);
        blend_expression(&mut self.pose, target, expr_t);

        self.pose.clamp_ranges();
        &self.pose
    }

    /// Jump straight to `target`: springs reset, velocities zeroed. Used
    /// for teleports and sign-sequence boundaries where a transient would
    /// read as a stray movement.
    pub fn snap_to(&mut self, target: &Pose) {
        self.pose = target.clone();
        self.pose.clamp_ranges();
        self.right_spring.snap_to(target.right_hand.position);
        self.left_spring.snap_to(target.left_hand.position);
    }
}

impl Default for PoseBlender {
    fn default() -> Self {
        Self::new()
    }
}

/// Framerate-independent lerp factor for an exponential approach.
fn rate_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

fn blend_curls(pose: &mut Pose, target: &Pose, t: f32) {
    for (current, goal) in [
        (&mut pose.right_hand, &target.right_hand),
        (&mut pose.left_hand, &target.left_hand),
    ] {
        for i in 0..4 {
            current.finger_curls[i] = lerp(current.finger_curls[i], goal.finger_curls[i], t);
        }
        current.thumb_curl = lerp(current.thumb_curl, goal.thumb_curl, t);
    }
}

fn blend_expression(pose: &mut Pose, target: &Pose, t: f32) {
    let expr = &mut pose.expression;
    let goal = &target.expression;
    expr.eyebrows = lerp(expr.eyebrows, goal.eyebrows, t);
    expr.eye_openness = lerp(expr.eye_openness, goal.eye_openness, t);
    expr.head_tilt = lerp_vec3(&expr.head_tilt, &goal.head_tilt, t);
    // Discrete selector: no meaningful halfway point.
    expr.mouth_shape = goal.mouth_shape;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
