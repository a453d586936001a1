//! Skeleton retargeting: three source conventions, one canonical pose.
//!
//! Each [`SkeletonFrame`](gestura_core::SkeletonFrame) variant has a
//! dedicated adapter:
//!
//! - [`named::retarget_named`] for named-bone Euler rotations,
//! - [`smplx::retarget_smplx`] for flat SMPL-X parameter vectors,
//! - [`joints::JointRetargeter`] for raw captured joint positions, which
//!   needs a one-time rest-pose calibration before use.
//!
//! [`Retargeter`] wraps all three behind a single `match` dispatch.

pub mod joints;
pub mod named;
pub mod smplx;

use gestura_core::{JointPositionFrame, Pose, RetargetError, SkeletonFrame};

pub use joints::JointRetargeter;

/// Frame-to-pose dispatcher over all three source conventions.
///
/// Named-bone and SMPL-X frames are stateless conversions. Joint-position
/// frames need bone lengths, measured once from the skeleton's own rest
/// pose via [`Retargeter::calibrate`]; retargeting a joint-position frame
/// before calibration is a caller contract violation.
#[derive(Debug, Clone, Default)]
pub struct Retargeter {
    arms: Option<JointRetargeter>,
}

impl Retargeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure bone lengths from the skeleton's rest-pose joint sites.
    ///
    /// # Errors
    ///
    /// `RetargetError::MissingRestJoint` if an arm joint is absent,
    /// `RetargetError::DegenerateRestPose` on a zero-length bone.
    pub fn calibrate(&mut self, rest: &JointPositionFrame) -> Result<(), RetargetError> {
        self.arms = Some(JointRetargeter::calibrate(rest)?);
        Ok(())
    }

    /// Convert one captured frame into the canonical pose.
    ///
    /// # Errors
    ///
    /// `RetargetError::NotCalibrated` for a joint-position frame when
    /// [`Retargeter::calibrate`] has not been called.
    pub fn retarget(&self, frame: &SkeletonFrame) -> Result<Pose, RetargetError> {
        match frame {
            SkeletonFrame::NamedBone(f) => Ok(named::retarget_named(f)),
            SkeletonFrame::Smplx(f) => Ok(smplx::retarget_smplx(f)),
            SkeletonFrame::JointPositions(f) => self
                .arms
                .as_ref()
                .ok_or(RetargetError::NotCalibrated)
                .map(|arms| arms.retarget(f)),
        }
    }
}
