use thiserror::Error;

/// Top-level error type for the Gestura engine.
#[derive(Debug, Error)]
pub enum GesturaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Retarget error: {0}")]
    Retarget(#[from] RetargetError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown spring preset: {0}")]
    UnknownSpringPreset(String),

    #[error("Invalid value for {field}: {value} (must be > 0)")]
    NonPositive { field: &'static str, value: f32 },
}

/// Retargeting errors.
///
/// These are caller contract violations at the adapter boundary. Per-frame
/// degeneracies (unreachable IK targets, missing optional bones) are *not*
/// errors; they resolve to sentinel fallbacks so a bad frame can never
/// corrupt the following ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RetargetError {
    #[error("SMPL-X vector length mismatch: expected 182, got {got}")]
    SmplxLength { got: usize },

    #[error("Rest pose is missing required joint for calibration")]
    MissingRestJoint,

    #[error("Rest pose has a zero-length bone")]
    DegenerateRestPose,

    #[error("Joint-position frame retargeted before rest-pose calibration")]
    NotCalibrated,
}
