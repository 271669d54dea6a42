//! Collaborator interfaces to the surrounding firmware.
//!
//! The motion planner, stepper drivers, endstop seeking, and software
//! endstops live outside this crate; the homing sequencer reaches them
//! through these traits. Implementations report failure through the crate's
//! [`Result`]; the sequencer propagates errors without retrying.

use crate::config::units::MmPerSec;
use crate::error::Result;
use crate::position::{Axis, CartesianPosition, PositionStore};

/// Interface to the motion/planner subsystem.
pub trait MotionPlanner {
    /// Optional safe repositioning before endstop seeking begins.
    ///
    /// Default is a no-op; rigs that must clear an obstruction override it.
    fn reposition_before_homing(&mut self, store: &mut PositionStore) -> Result<()> {
        let _ = store;
        Ok(())
    }

    /// Release holding torque on all joint actuators.
    fn disable_actuators(&mut self) -> Result<()>;

    /// Queue a linear move to `target` and run it to completion.
    fn line_to(&mut self, target: CartesianPosition, feedrate: MmPerSec) -> Result<()>;

    /// Resynchronize the planner's internal actuator position from
    /// `position`. Bookkeeping only; no motion is commanded.
    fn sync_position(&mut self, position: &CartesianPosition) -> Result<()>;

    /// Refresh the software-endstop bounds for `axis` given the current
    /// `position`.
    fn update_endstop_bounds(&mut self, axis: Axis, position: &CartesianPosition);
}

/// Per-axis physical homing primitive.
pub trait AxisHomer {
    /// Seek the endstop for `axis`, invoking `on_homed` with the axis once
    /// it has triggered and the axis is at its home reference.
    ///
    /// Failure behaviour (endstop never triggering, external abort) belongs
    /// to the implementation; callers propagate the error and perform no
    /// recovery.
    fn home_axis(&mut self, axis: Axis, on_homed: &mut dyn FnMut(Axis)) -> Result<()>;
}
