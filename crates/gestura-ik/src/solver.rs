//! Closed-form two-bone solve via the law of cosines.

use std::f32::consts::PI;

use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::limb::{ArmLimb, Side};

/// Over-extension clamp: targets beyond the limb are pulled just inside
/// full reach so the elbow never locks perfectly straight.
const REACH_CLAMP: f32 = 0.999;

/// Near-singular compression guard: targets closer than this multiple of
/// the bone-length difference have no stable solution.
const COMPRESSION_GUARD: f32 = 1.01;

/// Result of a two-bone solve.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoBoneSolution {
    /// World rotation to apply at the root (shoulder) joint.
    pub root_rotation: UnitQuaternion<f32>,
    /// Elbow bend, `0` = fully extended, `π` = fully folded.
    pub bend_angle: f32,
    /// Interior angle at the root between the upper bone and the
    /// shoulder→target line.
    pub root_angle: f32,
}

impl ArmLimb {
    /// Solve for the root rotation and elbow bend that place the wrist at
    /// `target`, with the shoulder at `root` (both world positions).
    ///
    /// Returns `None` when the target is in the near-singular compressed
    /// zone (closer than `|L1-L2| * 1.01`) or coincides with the root.
    /// Callers hold the prior pose on `None`.
    ///
    /// Over-extended targets are clamped to `0.999 ×` full reach rather
    /// than rejected.
    #[must_use]
    pub fn solve(&self, root: &Vector3<f32>, target: &Vector3<f32>) -> Option<TwoBoneSolution> {
        let l1 = self.upper_len;
        let l2 = self.lower_len;

        let to_target = target - root;
        let dist = to_target.norm();
        if dist < 1e-6 {
            return None;
        }

        let reach = dist.min((l1 + l2) * REACH_CLAMP);
        if reach < self.min_reach() * COMPRESSION_GUARD {
            return None;
        }

        // Law of cosines, acos inputs clamped against FP drift at the
        // extremes (full extension/compression would otherwise NaN).
        let interior_elbow =
            (((l1 * l1 + l2 * l2 - reach * reach) / (2.0 * l1 * l2)).clamp(-1.0, 1.0)).acos();
        let bend_angle = PI - interior_elbow;

        let root_angle =
            (((l1 * l1 + reach * reach - l2 * l2) / (2.0 * l1 * reach)).clamp(-1.0, 1.0)).acos();

        let target_dir = to_target / dist;

        // Align the rest direction onto the target line, then rotate the
        // upper bone off that line by the root interior angle.
        let align = UnitQuaternion::rotation_between(&self.rest_dir, &target_dir)
            .unwrap_or_else(|| {
                // Antiparallel: rotate π about any axis perpendicular to rest.
                UnitQuaternion::from_axis_angle(&perpendicular(&self.rest_dir), PI)
            });

        let bend_axis = self.rest_dir.cross(&target_dir);
        let bend_axis = if bend_axis.norm() < 1e-6 {
            perpendicular(&self.rest_dir)
        } else {
            Unit::new_normalize(bend_axis)
        };
        let bend_axis = match self.side {
            Side::Right => bend_axis,
            Side::Left => -bend_axis,
        };

        let root_rotation = UnitQuaternion::from_axis_angle(&bend_axis, -root_angle) * align;

        Some(TwoBoneSolution {
            root_rotation,
            bend_angle,
            root_angle,
        })
    }
}

/// A unit vector perpendicular to `v` (assumed non-zero).
fn perpendicular(v: &Vector3<f32>) -> Unit<Vector3<f32>> {
    let helper = if v.y.abs() < 0.9 {
        Vector3::y()
    } else {
        Vector3::x()
    };
    Unit::new_normalize(v.cross(&helper))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_arm() -> ArmLimb {
        // Rest pose: arm hanging straight down, 30cm + 25cm bones.
        ArmLimb::from_lengths(0.3, 0.25, Vector3::new(0.0, -1.0, 0.0), Side::Right)
    }

    #[test]
    fn reachable_target_solves() {
        let arm = right_arm();
        let solution = arm
            .solve(&Vector3::zeros(), &Vector3::new(0.2, -0.3, 0.1))
            .unwrap();
        assert!(solution.bend_angle.is_finite());
        assert!(solution.root_angle.is_finite());
    }

    #[test]
    fn angles_stay_in_range_across_workspace() {
        let arm = right_arm();
        // Sweep radial distances from just above min reach to beyond max.
        for i in 1..40 {
            let r = arm.min_reach() * 1.02 + (i as f32 / 40.0) * arm.max_reach();
            for j in 0..12 {
                let theta = j as f32 / 12.0 * 2.0 * PI;
                let target = Vector3::new(r * theta.cos(), -0.1, r * theta.sin());
                if let Some(s) = arm.solve(&Vector3::zeros(), &target) {
                    assert!(
                        (0.0..=PI).contains(&s.bend_angle),
                        "bend out of range: {}",
                        s.bend_angle
                    );
                    assert!(
                        (0.0..=PI).contains(&s.root_angle),
                        "root out of range: {}",
                        s.root_angle
                    );
                    assert!(!s.root_rotation.coords.iter().any(|c| c.is_nan()));
                }
            }
        }
    }

    #[test]
    fn full_extension_bend_near_zero() {
        let arm = right_arm();
        // Target exactly at max reach; the 0.999 clamp leaves a sliver of bend.
        let target = Vector3::new(0.0, -arm.max_reach(), 0.0);
        let solution = arm.solve(&Vector3::zeros(), &target).unwrap();
        assert!(
            solution.bend_angle < 0.1,
            "bend at full extension: {}",
            solution.bend_angle
        );
    }

    #[test]
    fn beyond_reach_clamps_not_rejects() {
        let arm = right_arm();
        let solution = arm
            .solve(&Vector3::zeros(), &Vector3::new(0.0, -5.0, 0.0))
            .unwrap();
        // Same solution as a target at max reach.
        let at_reach = arm
            .solve(&Vector3::zeros(), &Vector3::new(0.0, -arm.max_reach(), 0.0))
            .unwrap();
        assert_relative_eq!(solution.bend_angle, at_reach.bend_angle, epsilon = 1e-5);
    }

    #[test]
    fn near_full_compression_bend_near_pi() {
        let arm = right_arm();
        // Just outside the compression guard.
        let r = arm.min_reach() * 1.05;
        let solution = arm
            .solve(&Vector3::zeros(), &Vector3::new(0.0, -r, 0.0))
            .unwrap();
        assert!(
            solution.bend_angle > PI - 0.35,
            "bend near compression: {}",
            solution.bend_angle
        );
    }

    #[test]
    fn compressed_target_is_none() {
        let arm = right_arm();
        // Inside |L1-L2| * 1.01: no solution sentinel, never a panic.
        let r = arm.min_reach() * 0.99;
        assert!(arm
            .solve(&Vector3::zeros(), &Vector3::new(0.0, -r, 0.0))
            .is_none());
    }

    #[test]
    fn target_at_root_is_none() {
        let arm = ArmLimb::from_lengths(0.3, 0.3, Vector3::new(0.0, -1.0, 0.0), Side::Right);
        // Equal bones make min_reach zero; the coincident-target guard
        // still refuses.
        assert!(arm.solve(&Vector3::zeros(), &Vector3::zeros()).is_none());
    }

    #[test]
    fn root_rotation_aligns_rest_toward_target() {
        let arm = right_arm();
        let target = Vector3::new(0.4, 0.0, 0.0);
        let solution = arm.solve(&Vector3::zeros(), &target).unwrap();

        // The rotated rest direction, bent back by the root angle, must
        // land on the target line.
        let target_dir = target.normalize();
        let upper_dir = solution.root_rotation * arm.rest_dir;
        let angle_to_line = upper_dir.dot(&target_dir).clamp(-1.0, 1.0).acos();
        assert_relative_eq!(angle_to_line, solution.root_angle, epsilon = 1e-4);
    }

    #[test]
    fn antiparallel_target_still_solves() {
        let arm = right_arm();
        // Straight up: exactly opposite the rest direction.
        let solution = arm.solve(&Vector3::zeros(), &Vector3::new(0.0, 0.5, 0.0));
        assert!(solution.is_some());
        let s = solution.unwrap();
        assert!(!s.root_rotation.coords.iter().any(|c| c.is_nan()));
    }

    #[test]
    fn left_side_mirrors_bend_axis() {
        let right = right_arm();
        let left = ArmLimb::from_lengths(0.3, 0.25, Vector3::new(0.0, -1.0, 0.0), Side::Left);
        let target = Vector3::new(0.2, -0.3, 0.0);

        let rs = right.solve(&Vector3::zeros(), &target).unwrap();
        let ls = left.solve(&Vector3::zeros(), &target).unwrap();

        // Same triangle, mirrored root rotation.
        assert_relative_eq!(rs.bend_angle, ls.bend_angle, epsilon = 1e-6);
        assert_relative_eq!(rs.root_angle, ls.root_angle, epsilon = 1e-6);
        assert!(rs.root_rotation != ls.root_rotation);
    }

    #[test]
    fn acos_inputs_never_nan_at_extremes() {
        // Scan targets straddling both geometric extremes.
        let arm = ArmLimb::from_lengths(0.3, 0.3, Vector3::new(0.0, -1.0, 0.0), Side::Right);
        for i in 1..=100 {
            let r = arm.max_reach() * (i as f32) / 100.0 * 1.2;
            if let Some(s) = arm.solve(&Vector3::zeros(), &Vector3::new(0.0, -r, 0.0)) {
                assert!(!s.bend_angle.is_nan());
                assert!(!s.root_angle.is_nan());
            }
        }
    }
}
