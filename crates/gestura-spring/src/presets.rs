//! Named spring tunings. These are part of the public contract; hosts
//! select them by name in `BlendConfig`.

use crate::spring::SpringParams;

/// Fast follow with a little overshoot. Fingerspelling, quick transitions.
#[must_use]
pub const fn snappy() -> SpringParams {
    SpringParams::new(400.0, 26.0, 1.0)
}

/// Critically damped follow. The default for conversational signing.
#[must_use]
pub const fn smooth() -> SpringParams {
    SpringParams::new(120.0, 22.0, 1.0)
}

/// Underdamped, visibly springy. Emphatic or playful delivery.
#[must_use]
pub const fn bouncy() -> SpringParams {
    SpringParams::new(250.0, 8.0, 1.0)
}

/// Slow, soft follow. Idle drift and rest transitions.
#[must_use]
pub const fn gentle() -> SpringParams {
    SpringParams::new(25.0, 9.0, 1.0)
}

/// Near-rigid tracking. Retargeted capture data that is already smooth.
#[must_use]
pub const fn stiff() -> SpringParams {
    SpringParams::new(600.0, 50.0, 1.0)
}

/// Look up a preset by its config name.
#[must_use]
pub fn by_name(name: &str) -> Option<SpringParams> {
    match name {
        "snappy" => Some(snappy()),
        "smooth" => Some(smooth()),
        "bouncy" => Some(bouncy()),
        "gentle" => Some(gentle()),
        "stiff" => Some(stiff()),
        _ => None,
    }
}

/// All presets with their names, in a stable order.
#[must_use]
pub fn all() -> [(&'static str, SpringParams); 5] {
    [
        ("snappy", snappy()),
        ("smooth", smooth()),
        ("bouncy", bouncy()),
        ("gentle", gentle()),
        ("stiff", stiff()),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
