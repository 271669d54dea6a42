//! # arm-motion
//!
//! Kinematics and homing orchestration for a two-link articulated robot arm.
//!
//! ## Features
//!
//! - **Configuration-driven**: Arm geometry and homing constants in TOML files
//! - **no_std compatible**: Core library works without the standard library
//! - **Pure kinematics**: Forward/inverse transforms and reachability are
//!   side-effect free; shared position registers live in an explicit store
//! - **Type-safe angle conventions**: The cumulative elbow angle is a
//!   distinct newtype, preventing raw/cumulative confusion
//! - **Mockable collaborators**: Planner and endstop homing sit behind traits
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arm_motion::{ArmKinematics, CartesianPosition, HomingSequencer, PositionStore};
//!
//! // Load configuration from TOML
//! let config = arm_motion::load_config("arm.toml")?;
//! let kinematics = ArmKinematics::from_config(&config.arm);
//! let mut store = PositionStore::new();
//!
//! // Home all axes through your MotionPlanner / AxisHomer implementations
//! let mut sequencer = HomingSequencer::new(&kinematics, &config.homing);
//! sequencer.run(&mut planner, &mut homer, &mut store)?;
//!
//! // Solve a target before queuing a move
//! let target = CartesianPosition::new(180.0, 40.0, 25.0);
//! if kinematics.reachable(&target, 0.0) {
//!     store.set_joints(kinematics.inverse(&target));
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod homing;
pub mod interface;
pub mod kinematics;
pub mod position;

// Re-exports for ergonomic API
pub use config::{validate_config, ArmConfig, HomingConfig, SystemConfig};
pub use error::{Error, Result};
pub use homing::{apply_home_reference, HomingPhase, HomingSequencer};
pub use interface::{AxisHomer, MotionPlanner};
pub use kinematics::{ArmKinematics, Posture};
pub use position::{Axis, CartesianPosition, JointAngles, PositionStore};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{CumulativeDegrees, Degrees, Millimeters, MmPerSec};
