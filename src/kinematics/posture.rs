//! Side-plane posture selection for the inverse transform.

use core::f32::consts::PI;

use libm::{acosf, asinf};

use crate::config::units::Degrees;

/// Elbow/shoulder configuration in the side plane, selected once from the
/// sign of the target's vertical coordinate.
///
/// The two postures compose the shoulder angle from different trig terms so
/// that every intermediate stays inside its function's valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Posture {
    /// Target above the shoulder horizontal (`z > 0`).
    AboveHorizontal,
    /// Target at or below the shoulder horizontal (`z <= 0`).
    BelowHorizontal,
}

impl Posture {
    /// Select the posture from the target's vertical coordinate.
    #[inline]
    pub fn from_z(z: f32) -> Self {
        if z > 0.0 {
            Posture::AboveHorizontal
        } else {
            Posture::BelowHorizontal
        }
    }

    /// Shoulder angle for a side-plane target at `(r_rot, z)`, a distance
    /// `r_side` from the shoulder.
    ///
    /// `r_rot` is the plan-view radius with the end-effector offset already
    /// removed. Targets outside the shank triangle produce NaN; callers gate
    /// with the reachability predicate first.
    pub fn shoulder_angle(
        self,
        low_shank: f32,
        high_shank: f32,
        r_rot: f32,
        z: f32,
        r_side: f32,
    ) -> Degrees {
        let l1_sq = low_shank * low_shank;
        let l2_sq = high_shank * high_shank;
        let r_sq = r_side * r_side;

        // Angle between the low shank and the shoulder-to-wrist chord.
        let chord_angle = acosf((l1_sq - l2_sq + r_sq) / (2.0 * low_shank * r_side));

        let lower = match self {
            Posture::AboveHorizontal => acosf(z / r_side) - chord_angle,
            Posture::BelowHorizontal => PI - asinf(r_rot / r_side) - chord_angle,
        };

        Degrees::from_radians(lower)
    }
}
