//! The axis-homing sequence and the per-axis home-reference callback.

use crate::config::HomingConfig;
use crate::error::Result;
use crate::interface::{AxisHomer, MotionPlanner};
use crate::kinematics::ArmKinematics;
use crate::position::{Axis, PositionStore};

/// Phase of the homing sequence.
///
/// The sequence is linear and terminal: each phase runs exactly once and
/// there is no retry path. The Y, Z, X axis order is a property of the rig
/// wiring and is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingPhase {
    /// Sequence created, nothing executed yet.
    Start,
    /// Optional safe repositioning before endstop seeking.
    PreMove,
    /// Release holding torque on all joints.
    DisableActuators,
    /// Seek the Y endstop.
    HomeY,
    /// Seek the Z endstop.
    HomeZ,
    /// Seek the X endstop.
    HomeX,
    /// Set the position register to the endstop-trigger constants.
    Backoff,
    /// Resynchronize the planner from the position register.
    Sync,
    /// Move to the parked position and resynchronize again.
    PostMove,
    /// Sequence complete.
    Done,
}

impl HomingPhase {
    /// Successor phase. `Done` is terminal and maps to itself.
    pub fn next(self) -> Self {
        match self {
            HomingPhase::Start => HomingPhase::PreMove,
            HomingPhase::PreMove => HomingPhase::DisableActuators,
            HomingPhase::DisableActuators => HomingPhase::HomeY,
            HomingPhase::HomeY => HomingPhase::HomeZ,
            HomingPhase::HomeZ => HomingPhase::HomeX,
            HomingPhase::HomeX => HomingPhase::Backoff,
            HomingPhase::Backoff => HomingPhase::Sync,
            HomingPhase::Sync => HomingPhase::PostMove,
            HomingPhase::PostMove | HomingPhase::Done => HomingPhase::Done,
        }
    }

    /// Whether the sequence has finished.
    #[inline]
    pub fn is_done(self) -> bool {
        self == HomingPhase::Done
    }
}

/// Orchestrates the axis-homing sequence.
///
/// Runs synchronously on the caller's execution context and completes before
/// returning; collaborator errors abort the sequence mid-phase with no
/// rollback of already-applied axis references.
#[derive(Debug)]
pub struct HomingSequencer<'a> {
    kinematics: &'a ArmKinematics,
    config: &'a HomingConfig,
    phase: HomingPhase,
}

impl<'a> HomingSequencer<'a> {
    /// Create a sequencer at the `Start` phase.
    pub fn new(kinematics: &'a ArmKinematics, config: &'a HomingConfig) -> Self {
        Self {
            kinematics,
            config,
            phase: HomingPhase::Start,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> HomingPhase {
        self.phase
    }

    /// Run the remaining phases to completion.
    pub fn run<P, H>(
        &mut self,
        planner: &mut P,
        homer: &mut H,
        store: &mut PositionStore,
    ) -> Result<()>
    where
        P: MotionPlanner,
        H: AxisHomer,
    {
        while !self.phase.is_done() {
            self.step(planner, homer, store)?;
        }
        Ok(())
    }

    /// Execute the current phase and advance, returning the new phase.
    ///
    /// Exposed separately so each phase can be driven and observed on its
    /// own; [`Self::run`] is the production path.
    pub fn step<P, H>(
        &mut self,
        planner: &mut P,
        homer: &mut H,
        store: &mut PositionStore,
    ) -> Result<HomingPhase>
    where
        P: MotionPlanner,
        H: AxisHomer,
    {
        match self.phase {
            HomingPhase::Start | HomingPhase::Done => {}
            HomingPhase::PreMove => planner.reposition_before_homing(store)?,
            HomingPhase::DisableActuators => planner.disable_actuators()?,
            HomingPhase::HomeY => self.home_axis(Axis::Y, planner, homer, store)?,
            HomingPhase::HomeZ => self.home_axis(Axis::Z, planner, homer, store)?,
            HomingPhase::HomeX => self.home_axis(Axis::X, planner, homer, store)?,
            HomingPhase::Backoff => store.set_cartesian(self.config.endstop_backoff),
            HomingPhase::Sync => planner.sync_position(&store.cartesian())?,
            HomingPhase::PostMove => {
                let park = self.config.park_position;
                planner.line_to(park, self.config.park_feedrate)?;
                store.set_cartesian(park);
                planner.sync_position(&store.cartesian())?;
            }
        }

        self.phase = self.phase.next();
        Ok(self.phase)
    }

    fn home_axis<P, H>(
        &self,
        axis: Axis,
        planner: &mut P,
        homer: &mut H,
        store: &mut PositionStore,
    ) -> Result<()>
    where
        P: MotionPlanner,
        H: AxisHomer,
    {
        let kinematics = self.kinematics;
        let config = self.config;
        homer.home_axis(axis, &mut |homed| {
            apply_home_reference(kinematics, config, homed, store, planner);
        })
    }
}

/// Re-derive the machine position after `axis` has reached its home
/// reference.
///
/// Solves the configured home reference through the inverse transform,
/// regenerates a consistent Cartesian position through the forward
/// transform, and writes back only the homed axis's coordinate into the
/// position register before refreshing that axis's software endstops. Also
/// the entry point for firmware glue that re-homes a single axis outside
/// the full sequence.
pub fn apply_home_reference<P: MotionPlanner>(
    kinematics: &ArmKinematics,
    config: &HomingConfig,
    axis: Axis,
    store: &mut PositionStore,
    planner: &mut P,
) {
    let joints = kinematics.inverse(&config.home_position);
    let cartes = kinematics.forward(&joints);

    store.set_joints(joints);
    store.set_cartesian_axis(axis, cartes.axis(axis));

    planner.update_endstop_bounds(axis, &store.cartesian());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let mut phase = HomingPhase::Start;
        let expected = [
            HomingPhase::PreMove,
            HomingPhase::DisableActuators,
            HomingPhase::HomeY,
            HomingPhase::HomeZ,
            HomingPhase::HomeX,
            HomingPhase::Backoff,
            HomingPhase::Sync,
            HomingPhase::PostMove,
            HomingPhase::Done,
        ];

        for want in expected {
            phase = phase.next();
            assert_eq!(phase, want);
        }
    }

    #[test]
    fn test_done_is_terminal() {
        assert_eq!(HomingPhase::Done.next(), HomingPhase::Done);
        assert!(HomingPhase::Done.is_done());
        assert!(!HomingPhase::Start.is_done());
    }
}
