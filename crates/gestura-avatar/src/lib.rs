//! Bevy plugin wrapping [`gestura_blend`] for ECS integration.
//!
//! Add [`GesturaAvatarPlugin`] to your app, then spawn one avatar entity
//! per animated character. Upstream systems (sign playback, capture
//! retargeting) write the desired pose into [`PoseTarget`]; the plugin
//! smooths it each frame and publishes the result in [`AvatarPose`] for
//! the rendering layer to consume.
//!
//! # Example
//!
//! ```
//! use bevy::prelude::*;
//! use gestura_avatar::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins(GesturaAvatarPlugin);
//!
//! app.world_mut().spawn(Blender::default());
//! ```

pub mod components;
pub mod systems;

/// Re-export the blend crate for downstream convenience.
pub use gestura_blend;

use bevy::prelude::*;

pub use components::{AvatarPose, Blender, PoseTarget};

// ---------------------------------------------------------------------------
// GesturaAvatarPlugin
// ---------------------------------------------------------------------------

/// Bevy plugin that advances every avatar's blender once per `Update`.
///
/// The host app is responsible for adding Bevy's time plugin (or any
/// schedule that keeps `Time` current); the blend system reads the frame
/// delta from the [`Time`] resource.
pub struct GesturaAvatarPlugin;

impl Plugin for GesturaAvatarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::blend_pose_system);
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::components::{AvatarPose, Blender, PoseTarget};
    pub use crate::GesturaAvatarPlugin;
    pub use gestura_blend::PoseBlender;
    pub use gestura_core::prelude::*;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
