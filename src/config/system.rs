//! System configuration - root configuration structure.

use serde::Deserialize;

use super::arm::ArmConfig;
use super::homing::HomingConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Arm geometry section.
    pub arm: ArmConfig,

    /// Homing constants section.
    pub homing: HomingConfig,
}
