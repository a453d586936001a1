//! SMPL-X adapter: flat 182-float parameter vectors.
//!
//! Each 3-float block is an axis-angle rotation (near-zero magnitude
//! decodes to identity). Two quirks of the source convention are
//! reproduced on purpose:
//!
//! - mirror correction applies **only to right-side joints** (Euler Y and
//!   Z negated); left-side joints pass through raw, compensating the
//!   asymmetric authoring of the source rigs;
//! - the root/pelvis rotation is **discarded and replaced with identity**.
//!   Source vectors always encode a flipped root that must never reach
//!   the avatar, so the adapter never reads it.

use nalgebra::{Unit, UnitQuaternion, Vector3};

use gestura_core::{LimbPose, MouthShape, Pose, SmplxFrame};

// Body-block joint indices (0-based, pelvis excluded).
const BODY_HEAD: usize = 14;
const BODY_LEFT_WRIST: usize = 19;
const BODY_RIGHT_WRIST: usize = 20;

/// Hand-block finger order in SMPL-X, mapped to the canonical order
/// (index, middle, ring, pinky). SMPL-X stores pinky before ring.
const SMPLX_FINGER_FOR_CANONICAL: [usize; 4] = [0, 1, 3, 2];
const SMPLX_THUMB: usize = 4;

/// Jaw pitch above which the mouth reads open, and wide.
const JAW_OPEN_THRESHOLD: f32 = 0.1;
const JAW_WIDE_THRESHOLD: f32 = 0.5;

/// Flexion (radians) reading as a full curl.
const FULL_CURL_FLEXION: f32 = std::f32::consts::FRAC_PI_2;

/// Convert an SMPL-X frame into the canonical pose.
#[must_use]
pub fn retarget_smplx(frame: &SmplxFrame) -> Pose {
    let mut pose = Pose::rest();

    pose.left_hand.rotation = decode_euler(frame.body_joint(BODY_LEFT_WRIST));
    pose.right_hand.rotation = mirror_right(decode_euler(frame.body_joint(BODY_RIGHT_WRIST)));

    adapt_hand_curls(frame, &mut pose);

    pose.expression.head_tilt = decode_euler(frame.body_joint(BODY_HEAD));
    pose.expression.mouth_shape = mouth_shape(frame.jaw());

    let coeffs = frame.expression_coeffs();
    pose.expression.eyebrows = coeffs[0];
    pose.expression.eye_openness = 1.0 - coeffs[1];

    pose.clamp_ranges();
    pose
}

/// Axis-angle to XYZ Euler; near-zero magnitude decodes to identity.
fn decode_euler(axis_angle: Vector3<f32>) -> Vector3<f32> {
    let angle = axis_angle.norm();
    if angle < 1e-6 {
        return Vector3::zeros();
    }
    let q = UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis_angle), angle);
    let (roll, pitch, yaw) = q.euler_angles();
    Vector3::new(roll, pitch, yaw)
}

/// Right-side mirror correction: negate Euler Y and Z.
fn mirror_right(euler: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(euler.x, -euler.y, -euler.z)
}

fn adapt_hand_curls(frame: &SmplxFrame, pose: &mut Pose) {
    fill_curls(&mut pose.left_hand, |joint| frame.left_hand_joint(joint));
    fill_curls(&mut pose.right_hand, |joint| frame.right_hand_joint(joint));
}

fn fill_curls(limb: &mut LimbPose, joint_of: impl Fn(usize) -> Vector3<f32>) {
    for (canonical, &smplx_finger) in SMPLX_FINGER_FOR_CANONICAL.iter().enumerate() {
        limb.finger_curls[canonical] = chain_curl(&joint_of, smplx_finger);
    }
    limb.thumb_curl = chain_curl(&joint_of, SMPLX_THUMB);
}

/// Mean flexion magnitude over the finger's three joints, normalized.
fn chain_curl(joint_of: &impl Fn(usize) -> Vector3<f32>, finger: usize) -> f32 {
    let base = finger * 3;
    let total: f32 = (0..3).map(|j| joint_of(base + j).norm()).sum();
    (total / 3.0 / FULL_CURL_FLEXION).clamp(0.0, 1.0)
}

fn mouth_shape(jaw: Vector3<f32>) -> MouthShape {
    let pitch = jaw.x;
    if pitch > JAW_WIDE_THRESHOLD {
        MouthShape::Wide
    } else if pitch > JAW_OPEN_THRESHOLD {
        MouthShape::Open
    } else {
        MouthShape::Neutral
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gestura_core::frame::{SMPLX_BODY, SMPLX_JAW, SMPLX_LEN, SMPLX_RIGHT_HAND};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn frame_with(values: &[(usize, f32)]) -> SmplxFrame {
        let mut raw = vec![0.0; SMPLX_LEN];
        for &(i, v) in values {
            raw[i] = v;
        }
        SmplxFrame::new(raw).unwrap()
    }

    fn body_offset(joint: usize) -> usize {
        SMPLX_BODY.start + joint * 3
    }

    #[test]
    fn zero_frame_is_rest_pose() {
        assert_eq!(retarget_smplx(&SmplxFrame::zeros()), Pose::rest());
    }

    #[test]
    fn root_rotation_is_discarded() {
        // Whatever the pelvis block encodes must never reach the pose.
        let flipped_root = frame_with(&[(0, 3.1), (1, 0.2), (2, -0.4)]);
        assert_eq!(retarget_smplx(&flipped_root), Pose::rest());
    }

    #[test]
    fn left_wrist_decodes_raw() {
        // Pure roll about X: axis-angle and Euler agree.
        let frame = frame_with(&[(body_offset(BODY_LEFT_WRIST), 0.4)]);
        let pose = retarget_smplx(&frame);
        assert_relative_eq!(pose.left_hand.rotation.x, 0.4, epsilon = 1e-5);
        assert_relative_eq!(pose.left_hand.rotation.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn right_wrist_mirrors_y_and_z() {
        let frame = frame_with(&[(body_offset(BODY_RIGHT_WRIST) + 1, 0.3)]);
        let pose = retarget_smplx(&frame);
        // Pure pitch about Y, negated by the mirror correction.
        assert_relative_eq!(pose.right_hand.rotation.y, -0.3, epsilon = 1e-5);
    }

    #[test]
    fn mirror_property_holds_for_random_wrists() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let axis_angle = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let left_base = body_offset(BODY_LEFT_WRIST);
            let right_base = body_offset(BODY_RIGHT_WRIST);
            let frame = frame_with(&[
                (left_base, axis_angle.x),
                (left_base + 1, axis_angle.y),
                (left_base + 2, axis_angle.z),
                (right_base, axis_angle.x),
                (right_base + 1, axis_angle.y),
                (right_base + 2, axis_angle.z),
            ]);
            let pose = retarget_smplx(&frame);
            let raw = decode_euler(axis_angle);
            assert_relative_eq!(pose.left_hand.rotation, raw, epsilon = 1e-5);
            assert_relative_eq!(pose.right_hand.rotation, mirror_right(raw), epsilon = 1e-5);
        }
    }

    #[test]
    fn near_zero_axis_angle_is_identity() {
        let frame = frame_with(&[(body_offset(BODY_LEFT_WRIST), 1e-8)]);
        let pose = retarget_smplx(&frame);
        assert_eq!(pose.left_hand.rotation, Vector3::zeros());
    }

    #[test]
    fn hand_flexion_drives_curls() {
        // Right index finger (hand joints 0..3), each joint bent pi/4.
        let base = SMPLX_RIGHT_HAND.start;
        let frame = frame_with(&[(base, 0.785_398_2), (base + 3, 0.785_398_2), (base + 6, 0.785_398_2)]);
        let pose = retarget_smplx(&frame);
        assert_relative_eq!(pose.right_hand.finger_curls[0], 0.5, epsilon = 1e-4);
        assert_relative_eq!(pose.right_hand.finger_curls[1], 0.0);
        assert_relative_eq!(pose.left_hand.finger_curls[0], 0.0);
    }

    #[test]
    fn pinky_and_ring_blocks_are_swapped() {
        // SMPL-X finger 2 is the pinky; canonical slot 3.
        let pinky_base = SMPLX_RIGHT_HAND.start + 2 * 3 * 3;
        let frame = frame_with(&[
            (pinky_base, 1.5),
            (pinky_base + 3, 1.5),
            (pinky_base + 6, 1.5),
        ]);
        let pose = retarget_smplx(&frame);
        assert!(pose.right_hand.finger_curls[3] > 0.9);
        assert_relative_eq!(pose.right_hand.finger_curls[2], 0.0);
    }

    #[test]
    fn jaw_pitch_selects_mouth_shape() {
        assert_eq!(
            retarget_smplx(&frame_with(&[(SMPLX_JAW.start, 0.3)])).expression.mouth_shape,
            MouthShape::Open
        );
        assert_eq!(
            retarget_smplx(&frame_with(&[(SMPLX_JAW.start, 0.7)])).expression.mouth_shape,
            MouthShape::Wide
        );
        assert_eq!(
            retarget_smplx(&SmplxFrame::zeros()).expression.mouth_shape,
            MouthShape::Neutral
        );
    }

    #[test]
    fn expression_coeffs_drive_face() {
        use gestura_core::frame::SMPLX_EXPRESSION;
        let frame = frame_with(&[(SMPLX_EXPRESSION.start, 0.6), (SMPLX_EXPRESSION.start + 1, 0.4)]);
        let pose = retarget_smplx(&frame);
        assert_relative_eq!(pose.expression.eyebrows, 0.6, epsilon = 1e-6);
        assert_relative_eq!(pose.expression.eye_openness, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn expression_coeffs_are_clamped() {
        use gestura_core::frame::SMPLX_EXPRESSION;
        let frame = frame_with(&[(SMPLX_EXPRESSION.start, 4.0), (SMPLX_EXPRESSION.start + 1, -3.0)]);
        let pose = retarget_smplx(&frame);
        assert_relative_eq!(pose.expression.eyebrows, 1.0);
        assert_relative_eq!(pose.expression.eye_openness, 1.0);
    }
}
