//! Joint-position adapter: raw captured joint sites, no rotations.
//!
//! The source convention has Y pointing down and Z negative toward the
//! camera; the adapter maps every site through `(x, -y, -z)` with no
//! translation (roots are assumed colocated). Wrist rotations are then
//! recovered per arm with the two-bone solver, using bone lengths
//! measured once from the skeleton's own rest pose, so the adapter
//! self-calibrates to any capture subject.
//!
//! Per-frame degeneracies are sentinels, not errors: an unreachable wrist
//! target leaves the limb at its calibrated rest rotation, and fingers
//! without enough joint sites keep their rest curl.

use nalgebra::{UnitQuaternion, Vector3};

use gestura_core::{JointPositionFrame, LimbPose, Pose, RetargetError};
use gestura_fingers::{finger_curl, thumb_curl};
use gestura_ik::{ArmLimb, Side};

const FINGERS: [&str; 4] = ["index", "middle", "ring", "pinky"];
const FINGER_SEGMENTS: [&str; 4] = ["mcp", "pip", "dip", "tip"];
const THUMB_SEGMENTS: [&str; 4] = ["cmc", "mcp", "ip", "tip"];

/// Source capture space to canonical avatar space.
fn canonical(source: &Vector3<f32>) -> Vector3<f32> {
    Vector3::new(source.x, -source.y, -source.z)
}

#[derive(Debug, Clone)]
struct ArmCalibration {
    limb: ArmLimb,
    shoulder: Vector3<f32>,
    rest_rotation: Vector3<f32>,
}

/// Calibrated joint-position retargeter for one capture subject.
#[derive(Debug, Clone)]
pub struct JointRetargeter {
    right: ArmCalibration,
    left: ArmCalibration,
}

impl JointRetargeter {
    /// Measure both arms from a rest-pose frame.
    ///
    /// # Errors
    ///
    /// `RetargetError::MissingRestJoint` if a shoulder/elbow/wrist site is
    /// absent, `RetargetError::DegenerateRestPose` on a zero-length bone.
    pub fn calibrate(rest: &JointPositionFrame) -> Result<Self, RetargetError> {
        Ok(Self {
            right: calibrate_arm(rest, "right", Side::Right)?,
            left: calibrate_arm(rest, "left", Side::Left)?,
        })
    }

    /// Convert one captured frame into the canonical pose.
    #[must_use]
    pub fn retarget(&self, frame: &JointPositionFrame) -> Pose {
        let mut pose = Pose::rest();
        adapt_arm(&self.right, frame, "right", &mut pose.right_hand);
        adapt_arm(&self.left, frame, "left", &mut pose.left_hand);
        pose.clamp_ranges();
        pose
    }
}

fn calibrate_arm(
    rest: &JointPositionFrame,
    side_name: &str,
    side: Side,
) -> Result<ArmCalibration, RetargetError> {
    let site = |segment: &str| {
        rest.get(&format!("{side_name}_{segment}"))
            .map(canonical)
            .ok_or(RetargetError::MissingRestJoint)
    };
    let shoulder = site("shoulder")?;
    let elbow = site("elbow")?;
    let wrist = site("wrist")?;

    let limb = ArmLimb::calibrate(&shoulder, &elbow, &wrist, side)
        .ok_or(RetargetError::DegenerateRestPose)?;

    // The rotation the solver produces for the rest wrist itself; held
    // whenever a live target is unreachable.
    let rest_rotation = limb
        .solve(&shoulder, &wrist)
        .map(|s| euler_of(s.root_rotation))
        .unwrap_or_default();

    Ok(ArmCalibration {
        limb,
        shoulder,
        rest_rotation,
    })
}

fn adapt_arm(
    calibration: &ArmCalibration,
    frame: &JointPositionFrame,
    side_name: &str,
    limb: &mut LimbPose,
) {
    if let Some(wrist) = frame.get(&format!("{side_name}_wrist")).map(|p| canonical(p)) {
        limb.position = wrist;
        let shoulder = frame
            .get(&format!("{side_name}_shoulder"))
            .map(|p| canonical(p))
            .unwrap_or(calibration.shoulder);
        limb.rotation = match calibration.limb.solve(&shoulder, &wrist) {
            Some(solution) => euler_of(solution.root_rotation),
            None => calibration.rest_rotation,
        };
    }

    for (i, finger) in FINGERS.iter().enumerate() {
        let chain = finger_chain(frame, side_name, finger, &FINGER_SEGMENTS);
        if chain.len() >= 3 {
            limb.finger_curls[i] = finger_curl(&chain);
        }
    }
    let thumb_chain = finger_chain(frame, side_name, "thumb", &THUMB_SEGMENTS);
    if thumb_chain.len() >= 3 {
        limb.thumb_curl = thumb_curl(&thumb_chain);
    }
}

/// The finger's joint sites present in this frame, base to tip.
fn finger_chain(
    frame: &JointPositionFrame,
    side_name: &str,
    finger: &str,
    segments: &[&str],
) -> Vec<Vector3<f32>> {
    segments
        .iter()
        .filter_map(|segment| frame.get(&format!("{side_name}_{finger}_{segment}")))
        .map(canonical)
        .collect()
}

fn euler_of(q: UnitQuaternion<f32>) -> Vector3<f32> {
    let (roll, pitch, yaw) = q.euler_angles();
    Vector3::new(roll, pitch, yaw)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Source convention: Y down, so a hanging arm has increasing Y.
    fn rest_frame() -> JointPositionFrame {
        let mut frame = JointPositionFrame::new();
        for (name, pos) in [
            ("right_shoulder", Vector3::new(0.2, 0.0, 0.0)),
            ("right_elbow", Vector3::new(0.2, 0.3, 0.0)),
            ("right_wrist", Vector3::new(0.2, 0.55, 0.0)),
            ("left_shoulder", Vector3::new(-0.2, 0.0, 0.0)),
            ("left_elbow", Vector3::new(-0.2, 0.3, 0.0)),
            ("left_wrist", Vector3::new(-0.2, 0.55, 0.0)),
        ] {
            frame.set(name, pos);
        }
        frame
    }

    #[test]
    fn calibrates_bone_lengths_from_rest_pose() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        assert_relative_eq!(retargeter.right.limb.upper_len, 0.3, epsilon = 1e-6);
        assert_relative_eq!(retargeter.right.limb.lower_len, 0.25, epsilon = 1e-6);
        assert_relative_eq!(retargeter.left.limb.upper_len, 0.3, epsilon = 1e-6);
    }

    #[test]
    fn missing_rest_joint_is_an_error() {
        let mut rest = rest_frame();
        let mut incomplete = JointPositionFrame::new();
        for name in ["right_shoulder", "right_elbow", "right_wrist"] {
            incomplete.set(name, *rest.get(name).unwrap());
        }
        assert_eq!(
            JointRetargeter::calibrate(&incomplete).unwrap_err(),
            RetargetError::MissingRestJoint
        );
        // Sanity: the full frame calibrates.
        rest.set("extra", Vector3::zeros());
        assert!(JointRetargeter::calibrate(&rest).is_ok());
    }

    #[test]
    fn zero_length_bone_is_degenerate() {
        let mut rest = rest_frame();
        rest.set("right_elbow", Vector3::new(0.2, 0.0, 0.0)); // == shoulder
        assert_eq!(
            JointRetargeter::calibrate(&rest).unwrap_err(),
            RetargetError::DegenerateRestPose
        );
    }

    #[test]
    fn wrist_position_maps_through_coordinate_fix() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let pose = retargeter.retarget(&rest_frame());
        // Source (0.2, 0.55, 0.0), Y down: canonical (0.2, -0.55, 0.0).
        assert_relative_eq!(pose.right_hand.position.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(pose.right_hand.position.y, -0.55, epsilon = 1e-6);
        assert_relative_eq!(pose.right_hand.position.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn z_axis_flips_toward_camera() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let mut frame = rest_frame();
        frame.set("right_wrist", Vector3::new(0.2, 0.3, -0.2));
        let pose = retargeter.retarget(&frame);
        assert_relative_eq!(pose.right_hand.position.z, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn reachable_target_recovers_a_finite_rotation() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let mut frame = rest_frame();
        frame.set("right_wrist", Vector3::new(0.45, 0.3, 0.0));
        let pose = retargeter.retarget(&frame);
        assert!(pose.right_hand.rotation.iter().all(|v| v.is_finite()));
        // A raised wrist should not read as the rest rotation.
        let rest_pose = retargeter.retarget(&rest_frame());
        assert!(pose.right_hand.rotation != rest_pose.right_hand.rotation);
    }

    #[test]
    fn unreachable_target_holds_rest_rotation() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let rest_rotation = retargeter.retarget(&rest_frame()).right_hand.rotation;
        // Wrist collapsed onto the shoulder: inside the compression guard.
        let mut frame = rest_frame();
        frame.set("right_wrist", Vector3::new(0.2, 0.04, 0.0));
        let pose = retargeter.retarget(&frame);
        assert_eq!(pose.right_hand.rotation, rest_rotation);
    }

    #[test]
    fn missing_wrist_keeps_limb_at_rest() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let mut frame = JointPositionFrame::new();
        frame.set("right_shoulder", Vector3::new(0.2, 0.0, 0.0));
        let pose = retargeter.retarget(&frame);
        assert_eq!(pose.right_hand, Pose::rest().right_hand);
    }

    #[test]
    fn finger_sites_drive_procedural_curls() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let mut frame = rest_frame();
        // Straight index chain: zero curl.
        frame.set("right_index_mcp", Vector3::new(0.25, 0.55, 0.0));
        frame.set("right_index_pip", Vector3::new(0.28, 0.55, 0.0));
        frame.set("right_index_dip", Vector3::new(0.31, 0.55, 0.0));
        frame.set("right_index_tip", Vector3::new(0.34, 0.55, 0.0));
        // Bent middle chain: right angle at the pip.
        frame.set("right_middle_mcp", Vector3::new(0.25, 0.5, 0.0));
        frame.set("right_middle_pip", Vector3::new(0.28, 0.5, 0.0));
        frame.set("right_middle_dip", Vector3::new(0.28, 0.53, 0.0));
        let pose = retargeter.retarget(&frame);
        assert_relative_eq!(pose.right_hand.finger_curls[0], 0.0, epsilon = 1e-5);
        assert_relative_eq!(pose.right_hand.finger_curls[1], 0.5, epsilon = 1e-4);
        // No ring sites: rest curl.
        assert_relative_eq!(pose.right_hand.finger_curls[2], 0.0);
    }

    #[test]
    fn thumb_chain_uses_thumb_segments() {
        let retargeter = JointRetargeter::calibrate(&rest_frame()).unwrap();
        let mut frame = rest_frame();
        frame.set("right_thumb_cmc", Vector3::new(0.22, 0.5, 0.0));
        frame.set("right_thumb_mcp", Vector3::new(0.25, 0.5, 0.0));
        frame.set("right_thumb_ip", Vector3::new(0.25, 0.47, 0.0));
        let pose = retargeter.retarget(&frame);
        assert!(pose.right_hand.thumb_curl > 0.0);
    }
}
