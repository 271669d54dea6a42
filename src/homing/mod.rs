//! Homing orchestration for the arm.
//!
//! Drives the fixed per-axis homing sequence through the collaborator
//! traits and re-derives the Cartesian position from joint angles as each
//! axis reaches its reference.

mod sequencer;

pub use sequencer::{apply_home_reference, HomingPhase, HomingSequencer};
