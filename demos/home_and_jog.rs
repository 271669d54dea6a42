//! Homing and jogging example.
//!
//! Demonstrates building the solver from configuration, running the full
//! homing sequence against mock collaborators, and gating a jog target with
//! the reachability predicate before solving it.
//!
//! The mocks print what a real firmware integration would do with each call.

use arm_motion::{
    ArmKinematics, Axis, AxisHomer, CartesianPosition, HomingSequencer, MmPerSec, MotionPlanner,
    PositionStore, Result,
};

/// Planner mock that narrates every call.
struct PrintingPlanner;

impl MotionPlanner for PrintingPlanner {
    fn reposition_before_homing(&mut self, _store: &mut PositionStore) -> Result<()> {
        println!("[planner] pre-homing reposition hook (no-op)");
        Ok(())
    }

    fn disable_actuators(&mut self) -> Result<()> {
        println!("[planner] releasing holding torque on all joints");
        Ok(())
    }

    fn line_to(&mut self, target: CartesianPosition, feedrate: MmPerSec) -> Result<()> {
        println!(
            "[planner] linear move to {} at {} mm/s",
            target,
            feedrate.value()
        );
        Ok(())
    }

    fn sync_position(&mut self, position: &CartesianPosition) -> Result<()> {
        println!("[planner] resync actuator position from {}", position);
        Ok(())
    }

    fn update_endstop_bounds(&mut self, axis: Axis, position: &CartesianPosition) {
        println!(
            "[planner] refresh {} software endstops around {}",
            axis.name(),
            position
        );
    }
}

/// Homer mock whose endstops trigger immediately.
struct PrintingHomer;

impl AxisHomer for PrintingHomer {
    fn home_axis(&mut self, axis: Axis, on_homed: &mut dyn FnMut(Axis)) -> Result<()> {
        println!("[homer] seeking {} endstop... triggered", axis.name());
        on_homed(axis);
        Ok(())
    }
}

const CONFIG: &str = r#"
[arm]
name = "Demo Arm"
low_shank_mm = 150.0
high_shank_mm = 150.0
ee_offset_mm = 30.0
min_radius_mm = 60.0
max_radius_mm = 295.0
z_min_mm = -200.0
z_max_mm = 250.0

[homing]
home_position_mm = [220.0, 0.0, 100.0]
endstop_backoff_mm = [220.0, 5.0, 180.0]
park_position_mm = [200.0, 50.0, 50.0]
park_feedrate_mm_per_sec = 80.0
"#;

fn main() {
    println!("=== Homing & Jogging Example ===\n");

    let config = arm_motion::config::parse_config(CONFIG).expect("Config should parse");
    println!("Loaded configuration for '{}'", config.arm.name);

    let kinematics = ArmKinematics::from_config(&config.arm);
    let mut store = PositionStore::new();
    let mut planner = PrintingPlanner;
    let mut homer = PrintingHomer;

    println!("\n=== Homing Sequence ===");
    let mut sequencer = HomingSequencer::new(&kinematics, &config.homing);
    sequencer
        .run(&mut planner, &mut homer, &mut store)
        .expect("Homing failed");

    println!("\nHomed. Position register: {}", store.cartesian());
    println!("Joint register: {}", store.joints());

    println!("\n=== Jog ===");
    let target = CartesianPosition::new(180.0, 40.0, 25.0);
    println!("Target {}", target);

    if kinematics.reachable(&target, 0.0) {
        let joints = kinematics.inverse(&target);
        store.set_joints(joints);
        println!("Solved joints: {}", joints);
        println!("Forward check: {}", kinematics.forward(&joints));
    } else {
        println!("Target is outside the reachable band, refusing to solve");
    }

    let bad = CartesianPosition::new(0.0, 0.0, 25.0);
    println!(
        "\nOrigin column {} reachable? {}",
        bad,
        kinematics.reachable(&bad, 0.0)
    );

    println!("\n=== Example Complete ===");
}
