//! Damped-spring temporal smoothing for hand positions.
//!
//! Each axis is an independent damped harmonic oscillator stepped with
//! semi-implicit Euler. The three axes share one parameter set but are
//! solved by the identical scalar stepper. This is NOT a coupled vector
//! spring, and that approximation is part of the contract: motion quality
//! was tuned against it.
//!
//! No internal clamping of velocity or position is done; callers bound the
//! per-tick `dt` (see `BlendConfig::max_dt` in `gestura-core`).

pub mod presets;
pub mod spring;

pub use spring::{SpringParams, SpringState};

pub mod prelude {
    pub use crate::presets;
    pub use crate::spring::{SpringParams, SpringState};
}
