//! Frame-driven blend system.

use bevy::prelude::*;

use crate::components::{AvatarPose, Blender, PoseTarget};

/// Advance every avatar's blender by the frame delta and publish the
/// smoothed pose.
///
/// A zero delta (first frame, paused time) leaves all avatars untouched;
/// the blender treats it as a dropped frame.
#[allow(clippy::needless_pass_by_value)]
pub fn blend_pose_system(
    time: Res<Time>,
    mut avatars: Query<(&mut Blender, &PoseTarget, &mut AvatarPose)>,
) {
    let dt = time.delta_secs();
    for (mut blender, target, mut pose) in &mut avatars {
        blender.0.update(&target.0, dt);
        pose.0 = blender.0.pose().clone();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
