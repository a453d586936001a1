//! Avatar ECS components.

use bevy::prelude::*;

use gestura_blend::PoseBlender;
use gestura_core::Pose;

/// The smoothed output pose, published each frame for the renderer.
#[derive(Component, Debug, Clone)]
pub struct AvatarPose(pub Pose);

impl Default for AvatarPose {
    fn default() -> Self {
        Self(Pose::rest())
    }
}

/// The desired target pose, written by whatever upstream system is
/// driving the avatar (sign playback, capture retargeting).
#[derive(Component, Debug, Clone)]
pub struct PoseTarget(pub Pose);

impl Default for PoseTarget {
    fn default() -> Self {
        Self(Pose::rest())
    }
}

/// Per-avatar blender state. Spawning this pulls in the target and
/// output components; exactly one per animated character.
#[derive(Component, Debug, Clone, Default)]
#[require(PoseTarget, AvatarPose)]
pub struct Blender(pub PoseBlender);
