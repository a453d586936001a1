//! Types, math kernel, config and errors for the Gestura sign-language
//! avatar animation engine.

pub mod config;
pub mod easing;
pub mod error;
pub mod frame;
pub mod keyframe;
pub mod math;
pub mod sign;
pub mod types;

pub use config::BlendConfig;
pub use easing::Easing;
pub use error::{ConfigError, GesturaError, RetargetError};
pub use frame::{JointPositionFrame, NamedBoneFrame, SkeletonFrame, SmplxFrame};
pub use keyframe::{interpolate_keyframes, Keyframe};
pub use sign::{
    HandshapeSpec, MarkerKind, Movement, MovementKind, MovementSpeed, NonManualMarker, Sign,
    SignLocation,
};
pub use types::{
    ExpressionState, LimbPose, MouthShape, Pose, LEFT_HAND_REST, RIGHT_HAND_REST,
};

pub mod prelude {
    pub use crate::config::BlendConfig;
    pub use crate::easing::Easing;
    pub use crate::error::{ConfigError, GesturaError, RetargetError};
    pub use crate::frame::{JointPositionFrame, NamedBoneFrame, SkeletonFrame, SmplxFrame};
    pub use crate::sign::{Movement, MovementKind, MovementSpeed, NonManualMarker, Sign};
    pub use crate::types::{ExpressionState, LimbPose, MouthShape, Pose};
}
