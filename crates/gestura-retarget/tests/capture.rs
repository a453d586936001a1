//! Integration test: a capture session from calibration to live frames.
//!
//! Calibrates on the shared rest-pose fixture, then feeds randomized live
//! frames and checks that every output pose is finite and in range, with
//! unreachable targets falling back instead of failing.

use gestura_core::SkeletonFrame;
use gestura_retarget::Retargeter;
use gestura_test_utils::{random_unit_vector, rest_joint_frame, seeded_rng};
use nalgebra::Vector3;

#[test]
fn randomized_live_frames_stay_finite() {
    let mut retargeter = Retargeter::new();
    retargeter.calibrate(&rest_joint_frame()).unwrap();

    let mut rng = seeded_rng(1234);
    for _ in 0..200 {
        let mut frame = rest_joint_frame();
        // Wrists thrown anywhere within and beyond reach.
        for (side, shoulder_x) in [("right", 0.2f32), ("left", -0.2f32)] {
            let offset = random_unit_vector(&mut rng) * 0.6;
            frame.set(
                format!("{side}_wrist"),
                Vector3::new(shoulder_x, 0.0, 0.0) + offset,
            );
        }
        let pose = retargeter
            .retarget(&SkeletonFrame::JointPositions(frame))
            .unwrap();
        for hand in [&pose.right_hand, &pose.left_hand] {
            assert!(hand.position.iter().all(|v| v.is_finite()));
            assert!(hand.rotation.iter().all(|v| v.is_finite()));
        }
    }
}

#[test]
fn recalibration_adapts_to_a_new_subject() {
    let mut retargeter = Retargeter::new();
    retargeter.calibrate(&rest_joint_frame()).unwrap();
    let short_armed = {
        let mut frame = rest_joint_frame();
        frame.set("right_elbow", Vector3::new(0.2, 0.2, 0.0));
        frame.set("right_wrist", Vector3::new(0.2, 0.35, 0.0));
        frame
    };
    // Same frame retargets fine under either calibration; the poses
    // differ because the bone lengths do.
    let before = retargeter
        .retarget(&SkeletonFrame::JointPositions(rest_joint_frame()))
        .unwrap();
    retargeter.calibrate(&short_armed).unwrap();
    let after = retargeter
        .retarget(&SkeletonFrame::JointPositions(rest_joint_frame()))
        .unwrap();
    assert!(before.right_hand.rotation != after.right_hand.rotation);
}
