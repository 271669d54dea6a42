//! Error types for the arm-motion library.
//!
//! Provides unified error handling across configuration, motion-planner
//! interaction, and homing. Kinematic singularities are deliberately not
//! errors: out-of-domain inverse-trig inputs propagate as NaN and callers
//! gate targets with the reachability predicate instead.

use core::fmt;

use crate::position::Axis;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all arm-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion-planner collaborator error
    Planner(PlannerError),
    /// Homing collaborator error
    Homing(HomingError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Shank length must be > 0
    InvalidShankLength(f32),
    /// End-effector offset must be >= 0
    InvalidEndEffectorOffset(f32),
    /// Radius band is empty (min must be < max)
    InvalidRadiusBand {
        /// Minimum radius from configuration
        min: f32,
        /// Maximum radius from configuration
        max: f32,
    },
    /// Maximum radius exceeds the combined shank reach
    RadiusExceedsReach {
        /// Configured maximum radius
        max_radius: f32,
        /// Combined length of both shanks
        reach: f32,
    },
    /// Vertical travel bounds are empty (min must be < max)
    InvalidTravelBounds {
        /// Minimum z from configuration
        min: f32,
        /// Maximum z from configuration
        max: f32,
    },
    /// Segment rate must be > 0
    InvalidSegmentRate(f32),
    /// Feedrate must be > 0
    InvalidFeedrate(f32),
    /// A configured reference position fails the reachability check
    UnreachablePosition {
        /// Which configured position failed ("home", "park")
        name: heapless::String<16>,
        /// Target x in millimetres
        x: f32,
        /// Target y in millimetres
        y: f32,
        /// Target z in millimetres
        z: f32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors reported by the motion-planner collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Planner refused to queue a linear move
    MoveRejected {
        /// Target x in millimetres
        x: f32,
        /// Target y in millimetres
        y: f32,
        /// Target z in millimetres
        z: f32,
    },
    /// Planner failed to resynchronize actuator position
    SyncFailed,
    /// Actuator enable/disable operation failed
    ActuatorFault,
}

/// Errors reported by the per-axis homing collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum HomingError {
    /// Endstop never triggered while seeking
    EndstopNotTriggered(Axis),
    /// Homing was aborted externally
    Aborted(Axis),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Planner(e) => write!(f, "Planner error: {}", e),
            Error::Homing(e) => write!(f, "Homing error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidShankLength(v) => {
                write!(f, "Invalid shank length: {}. Must be > 0", v)
            }
            ConfigError::InvalidEndEffectorOffset(v) => {
                write!(f, "Invalid end-effector offset: {}. Must be >= 0", v)
            }
            ConfigError::InvalidRadiusBand { min, max } => {
                write!(f, "Invalid radius band: min ({}) must be < max ({})", min, max)
            }
            ConfigError::RadiusExceedsReach { max_radius, reach } => {
                write!(f, "Max radius {} exceeds combined shank reach {}", max_radius, reach)
            }
            ConfigError::InvalidTravelBounds { min, max } => {
                write!(f, "Invalid travel bounds: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidSegmentRate(v) => {
                write!(f, "Invalid segment rate: {}. Must be > 0", v)
            }
            ConfigError::InvalidFeedrate(v) => write!(f, "Invalid feedrate: {}. Must be > 0", v),
            ConfigError::UnreachablePosition { name, x, y, z } => {
                write!(f, "Configured {} position ({}, {}, {}) is not reachable", name, x, y, z)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::MoveRejected { x, y, z } => {
                write!(f, "Planner rejected move to ({}, {}, {})", x, y, z)
            }
            PlannerError::SyncFailed => write!(f, "Planner position resynchronization failed"),
            PlannerError::ActuatorFault => write!(f, "Actuator enable/disable failed"),
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::EndstopNotTriggered(axis) => {
                write!(f, "Endstop for {} axis never triggered", axis.name())
            }
            HomingError::Aborted(axis) => {
                write!(f, "Homing aborted while seeking {} axis", axis.name())
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PlannerError> for Error {
    fn from(e: PlannerError) -> Self {
        Error::Planner(e)
    }
}

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PlannerError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}
