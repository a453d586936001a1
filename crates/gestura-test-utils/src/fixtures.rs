//! Canned signs and skeleton frames.

use nalgebra::Vector3;

use gestura_core::{
    HandshapeSpec, JointPositionFrame, MarkerKind, Movement, MovementKind, MovementSpeed,
    NonManualMarker, Sign, SignLocation,
};

/// A one-handed greeting sign with an arc movement, matching the shape of
/// real dictionary records.
pub fn hello_sign() -> Sign {
    Sign {
        gloss: "HELLO".into(),
        duration_ms: 800,
        handshape: HandshapeSpec {
            dominant: "flat-hand".into(),
            non_dominant: None,
        },
        location: SignLocation {
            x: 0.3,
            y: 0.4,
            z: 0.3,
            frame: "face".into(),
        },
        movement: Movement {
            kind: MovementKind::Arc,
            direction: Some(Vector3::new(0.2, 0.0, 0.0)),
            repetitions: 2,
            speed: MovementSpeed::Normal,
        },
        non_manual_markers: Vec::new(),
    }
}

/// A two-handed question sign with a furrowed-brow marker.
pub fn where_sign() -> Sign {
    Sign {
        gloss: "WHERE".into(),
        duration_ms: 900,
        handshape: HandshapeSpec {
            dominant: "index-point".into(),
            non_dominant: Some("flat-hand".into()),
        },
        location: SignLocation {
            x: 0.2,
            y: 0.5,
            z: 0.3,
            frame: "chest".into(),
        },
        movement: Movement {
            kind: MovementKind::Zigzag,
            direction: None,
            repetitions: 3,
            speed: MovementSpeed::Fast,
        },
        non_manual_markers: vec![NonManualMarker {
            kind: MarkerKind::Facial,
            expression: "furrowed-brows".into(),
            intensity: 0.9,
        }],
    }
}

/// A rest-pose joint frame in the source capture convention (Y down):
/// both arms hanging straight, 0.3 m upper and 0.25 m lower bones.
pub fn rest_joint_frame() -> JointPositionFrame {
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
