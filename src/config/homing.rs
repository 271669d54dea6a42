//! Homing configuration from TOML.

use serde::Deserialize;

use crate::position::CartesianPosition;

use super::units::MmPerSec;

/// Fixed Cartesian constants for the homing sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct HomingConfig {
    /// Home reference position fed to the inverse transform when an axis
    /// reports home. Offset-relative, like every inverse-transform input.
    #[serde(rename = "home_position_mm")]
    pub home_position: CartesianPosition,

    /// Cartesian position the arm occupies when all endstops have triggered.
    #[serde(rename = "endstop_backoff_mm")]
    pub endstop_backoff: CartesianPosition,

    /// Parked position commanded after homing completes.
    #[serde(rename = "park_position_mm")]
    pub park_position: CartesianPosition,

    /// Feedrate for the finishing move to the parked position.
    #[serde(default = "default_park_feedrate", rename = "park_feedrate_mm_per_sec")]
    pub park_feedrate: MmPerSec,
}

fn default_park_feedrate() -> MmPerSec {
    MmPerSec(100.0)
}
