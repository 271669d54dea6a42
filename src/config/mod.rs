//! Configuration module for arm-motion.
//!
//! Provides types for loading and validating arm geometry and homing
//! constants from TOML files (with `std` feature) or pre-parsed data.

mod arm;
mod homing;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use arm::ArmConfig;
pub use homing::HomingConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{CumulativeDegrees, Degrees, Millimeters, MmPerSec};
