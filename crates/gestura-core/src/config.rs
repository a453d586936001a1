use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

fn default_spring_preset() -> String {
    "smooth".into()
}
const fn default_rotation_rate() -> f32 {
    12.0
}
const fn default_curl_rate() -> f32 {
    10.0
}
const fn default_expression_rate() -> f32 {
    8.0
}
const fn default_max_dt() -> f32 {
    0.1
}

// ---------------------------------------------------------------------------
// BlendConfig
// ---------------------------------------------------------------------------

/// Tuning for the pose blender.
///
/// Loadable from TOML; all fields have sensible defaults so a partial (or
/// empty) config is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Named spring preset for hand positions (see `gestura-spring`).
    #[serde(default = "default_spring_preset")]
    pub spring_preset: String,

    /// Exponential smoothing rate for wrist rotations (1/s).
    #[serde(default = "default_rotation_rate")]
    pub rotation_rate: f32,

    /// Exponential smoothing rate for finger curls (1/s).
    #[serde(default = "default_curl_rate")]
    pub curl_rate: f32,

    /// Exponential smoothing rate for the facial state (1/s).
    #[serde(default = "default_expression_rate")]
    pub expression_rate: f32,

    /// Per-tick delta-time clamp in seconds. The spring stepper does no
    /// clamping of its own; this bounds a stalled host's first frame back.
    #[serde(default = "default_max_dt")]
    pub max_dt: f32,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            spring_preset: default_spring_preset(),
            rotation_rate: default_rotation_rate(),
            curl_rate: default_curl_rate(),
            expression_rate: default_expression_rate(),
            max_dt: default_max_dt(),
        }
    }
}

impl BlendConfig {
    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// `ConfigError::Toml` on parse failure.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Validate numeric fields. Returns Err on invalid values.
    ///
    /// The spring preset name is resolved (and rejected) where presets
    /// live, in `gestura-blend`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("rotation_rate", self.rotation_rate),
            ("curl_rate", self.curl_rate),
            ("expression_rate", self.expression_rate),
            ("max_dt", self.max_dt),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = BlendConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spring_preset, "smooth");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = BlendConfig::from_toml_str("").unwrap();
        assert_eq!(config, BlendConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = BlendConfig::from_toml_str(
            r#"
            spring_preset = "snappy"
            max_dt = 0.05
            "#,
        )
        .unwrap();
        assert_eq!(config.spring_preset, "snappy");
        assert!((config.max_dt - 0.05).abs() < f32::EPSILON);
        assert!((config.rotation_rate - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn invalid_toml_errors() {
        let result = BlendConfig::from_toml_str("max_dt = \"oops\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn non_positive_rate_rejected() {
        let mut config = BlendConfig::default();
        config.rotation_rate = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "rotation_rate",
                ..
            }
        ));
    }

    #[test]
    fn negative_max_dt_rejected() {
        let mut config = BlendConfig::default();
        config.max_dt = -1.0;
        assert!(config.validate().is_err());
    }
}
