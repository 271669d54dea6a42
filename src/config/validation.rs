//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::kinematics::ArmKinematics;

use super::arm::ArmConfig;
use super::homing::HomingConfig;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Shank lengths are positive, end-effector offset non-negative
/// - Radius band and vertical travel bounds are non-empty
/// - Radius band fits inside the combined shank reach
/// - Segment rate and park feedrate are positive
/// - Home and park positions pass the reachability predicate
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_arm(&config.arm)?;
    validate_homing(&config.homing, &config.arm)?;
    Ok(())
}

fn validate_arm(arm: &ArmConfig) -> Result<()> {
    if arm.low_shank.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidShankLength(
            arm.low_shank.value(),
        )));
    }

    if arm.high_shank.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidShankLength(
            arm.high_shank.value(),
        )));
    }

    if arm.ee_offset.value() < 0.0 {
        return Err(Error::Config(ConfigError::InvalidEndEffectorOffset(
            arm.ee_offset.value(),
        )));
    }

    if arm.min_radius.value() >= arm.max_radius.value() {
        return Err(Error::Config(ConfigError::InvalidRadiusBand {
            min: arm.min_radius.value(),
            max: arm.max_radius.value(),
        }));
    }

    // Points past the combined shank reach would put the inverse transform
    // outside its trig domain even though the radius band admits them.
    if arm.max_radius.value() > arm.max_reach().value() {
        return Err(Error::Config(ConfigError::RadiusExceedsReach {
            max_radius: arm.max_radius.value(),
            reach: arm.max_reach().value(),
        }));
    }

    if arm.z_min.value() >= arm.z_max.value() {
        return Err(Error::Config(ConfigError::InvalidTravelBounds {
            min: arm.z_min.value(),
            max: arm.z_max.value(),
        }));
    }

    if arm.segments_per_second <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidSegmentRate(
            arm.segments_per_second,
        )));
    }

    Ok(())
}

fn validate_homing(homing: &HomingConfig, arm: &ArmConfig) -> Result<()> {
    if homing.park_feedrate.value() <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidFeedrate(
            homing.park_feedrate.value(),
        )));
    }

    let kinematics = ArmKinematics::from_config(arm);
    let references = [
        ("home", &homing.home_position),
        ("park", &homing.park_position),
    ];

    for (name, position) in references {
        if !kinematics.reachable(position, 0.0) {
            return Err(Error::Config(ConfigError::UnreachablePosition {
                name: heapless::String::try_from(name).unwrap_or_default(),
                x: position.x,
                y: position.y,
                z: position.z,
            }));
        }
    }

    Ok(())
}
