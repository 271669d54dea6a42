//! Forward/inverse transforms and the reachability predicate.

use libm::{acosf, cosf, hypotf, sinf};

use crate::config::units::{CumulativeDegrees, Degrees};
use crate::config::ArmConfig;
use crate::position::{CartesianPosition, JointAngles};

use super::posture::Posture;

/// Kinematic solver for the two-link arm.
///
/// Built once from [`ArmConfig`] and immutable afterwards. All operations
/// are pure; the shared position registers in
/// [`PositionStore`](crate::position::PositionStore) are written by the
/// callers that own the result.
#[derive(Debug, Clone)]
pub struct ArmKinematics {
    low_shank: f32,
    high_shank: f32,
    ee_offset: f32,
    offset: CartesianPosition,
    min_radius_sq: f32,
    max_radius: f32,
    z_min: f32,
    z_max: f32,
    segments_per_second: f32,
}

impl ArmKinematics {
    /// Build the solver from arm geometry.
    pub fn from_config(config: &ArmConfig) -> Self {
        let min_radius = config.min_radius.value();

        Self {
            low_shank: config.low_shank.value(),
            high_shank: config.high_shank.value(),
            ee_offset: config.ee_offset.value(),
            offset: config.offset,
            min_radius_sq: min_radius * min_radius,
            max_radius: config.max_radius.value(),
            z_min: config.z_min.value(),
            z_max: config.z_max.value(),
            segments_per_second: config.segments_per_second,
        }
    }

    /// Forward transform: joint angles to world-frame Cartesian position.
    ///
    /// `joints.upper` is consumed in the cumulative convention (see
    /// [`CumulativeDegrees`]); the fixed offset is added to the result.
    /// Total over all real inputs - angles outside the mechanical range
    /// produce geometrically invalid but well-defined output.
    pub fn forward(&self, joints: &JointAngles) -> CartesianPosition {
        let rot = joints.rotation.to_radians();
        let low = joints.lower.to_radians();
        // The high shank is measured against the inverted vertical, so the
        // cumulative angle enters as its supplement.
        let high = (180.0 - joints.upper.value()).to_radians();

        let reach = self.low_shank * sinf(low) + self.high_shank * sinf(high) + self.ee_offset;

        CartesianPosition::new(
            reach * cosf(rot) + self.offset.x,
            reach * sinf(rot) + self.offset.y,
            self.low_shank * cosf(low) - self.high_shank * cosf(high) + self.offset.z,
        )
    }

    /// Inverse transform: offset-relative Cartesian target to joint angles.
    ///
    /// The caller subtracts the fixed offset before calling, matching the
    /// forward transform's convention. The base yaw is recovered from
    /// `acos(x / r_ee)` and therefore lands in `[0, 180]` degrees: targets
    /// with negative `y` fold onto the positive-`y` half plane. This mirrors
    /// the rig's mechanical half-turn and is kept as-is pending verification
    /// against the hardware.
    ///
    /// Singular at the origin column (`x = y = 0`) and NaN for targets
    /// outside the shank triangle; callers gate with [`Self::reachable`].
    pub fn inverse(&self, raw: &CartesianPosition) -> JointAngles {
        let l1 = self.low_shank;
        let l2 = self.high_shank;
        let l1_sq = l1 * l1;
        let l2_sq = l2 * l2;

        let r_ee = hypotf(raw.x, raw.y);
        let r_rot = r_ee - self.ee_offset;
        let r_side = hypotf(r_rot, raw.z);
        let r_sq = r_side * r_side;

        let rotation = Degrees::from_radians(acosf(raw.x / r_ee));

        // Law of cosines across the elbow, elbow-down branch.
        let raw_elbow = Degrees(180.0)
            - Degrees::from_radians(acosf((l1_sq + l2_sq - r_sq) / (2.0 * l1 * l2)));

        let lower = Posture::from_z(raw.z).shoulder_angle(l1, l2, r_rot, raw.z, r_side);

        JointAngles::new(rotation, lower, CumulativeDegrees::from_parts(lower, raw_elbow))
    }

    /// Reachability predicate for an offset-relative Cartesian target.
    ///
    /// `inset` tightens the outer radius bound; `reachable(p, b)` implies
    /// `reachable(p, a)` for any `a < b`. The origin column is always
    /// excluded - it is the inverse transform's singularity.
    pub fn reachable(&self, target: &CartesianPosition, inset: f32) -> bool {
        let r_ee = hypotf(target.x, target.y);
        let r_rot = r_ee - self.ee_offset;

        // Plan-view projection, carried out per component.
        let r_rot_x = r_rot * (target.x / r_ee);
        let r_rot_y = r_rot * (target.y / r_ee);
        let r_sq = r_rot_x * r_rot_x + r_rot_y * r_rot_y + target.z * target.z;

        let outer = self.max_radius - inset;

        r_sq <= outer * outer
            && r_sq >= self.min_radius_sq
            && target.z >= self.z_min
            && target.z <= self.z_max
            && !(target.x == 0.0 && target.y == 0.0)
    }

    /// Segment rate for the motion subsystem's Cartesian move splitting.
    #[inline]
    pub fn segment_rate(&self) -> f32 {
        self.segments_per_second
    }

    /// Fixed translation applied to forward-transform results.
    #[inline]
    pub fn offset(&self) -> CartesianPosition {
        self.offset
    }
}
