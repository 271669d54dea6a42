//! Arm geometry configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::position::CartesianPosition;

use super::units::Millimeters;

/// Complete arm geometry from TOML. Immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct ArmConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Low (shoulder) shank length.
    #[serde(rename = "low_shank_mm")]
    pub low_shank: Millimeters,

    /// High (elbow) shank length.
    #[serde(rename = "high_shank_mm")]
    pub high_shank: Millimeters,

    /// End-effector offset added along the extended-radius direction.
    #[serde(rename = "ee_offset_mm")]
    pub ee_offset: Millimeters,

    /// Fixed translation applied to all forward-kinematics results.
    #[serde(default, rename = "offset_mm")]
    pub offset: CartesianPosition,

    /// Minimum reachable side-plane radius.
    #[serde(rename = "min_radius_mm")]
    pub min_radius: Millimeters,

    /// Maximum reachable side-plane radius.
    #[serde(rename = "max_radius_mm")]
    pub max_radius: Millimeters,

    /// Lowest reachable z.
    #[serde(rename = "z_min_mm")]
    pub z_min: Millimeters,

    /// Highest reachable z.
    #[serde(rename = "z_max_mm")]
    pub z_max: Millimeters,

    /// Segment rate the motion subsystem uses when splitting Cartesian moves.
    #[serde(default = "default_segments_per_second")]
    pub segments_per_second: f32,
}

fn default_segments_per_second() -> f32 {
    100.0
}

impl ArmConfig {
    /// Combined length of both shanks, the arm's maximum side-plane reach.
    pub fn max_reach(&self) -> Millimeters {
        self.low_shank + self.high_shank
    }
}
