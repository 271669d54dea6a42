//! Cartesian and joint-space position types, plus the shared position
//! registers consumed by the motion subsystem.

use core::fmt;
use core::ops::{Add, Sub};

use crate::config::units::{CumulativeDegrees, Degrees};

/// World-frame axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal axis along the arm's zero-yaw direction.
    X,
    /// Horizontal axis perpendicular to X.
    Y,
    /// Vertical axis.
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Axis name for display/debugging.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// End-effector position in the machine's world frame, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CartesianPosition {
    /// X coordinate in millimetres.
    pub x: f32,
    /// Y coordinate in millimetres.
    pub y: f32,
    /// Z coordinate in millimetres.
    pub z: f32,
}

impl CartesianPosition {
    /// The world origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Get one coordinate by axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Set one coordinate by axis.
    #[inline]
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

impl Add for CartesianPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for CartesianPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for CartesianPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl<'de> serde::Deserialize<'de> for CartesianPosition {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [x, y, z] = <[f32; 3]>::deserialize(deserializer)?;
        Ok(Self { x, y, z })
    }
}

/// Joint angles of the arm, in degrees.
///
/// `upper` carries the cumulative elbow convention: it is the shoulder angle
/// plus the raw elbow angle, exactly what the forward transform consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointAngles {
    /// Base yaw.
    pub rotation: Degrees,
    /// Shoulder (low-shank) angle, measured from vertical.
    pub lower: Degrees,
    /// Cumulative elbow (high-shank) angle.
    pub upper: CumulativeDegrees,
}

impl JointAngles {
    /// Create a new joint-angle triple.
    #[inline]
    pub const fn new(rotation: Degrees, lower: Degrees, upper: CumulativeDegrees) -> Self {
        Self {
            rotation,
            lower,
            upper,
        }
    }
}

impl fmt::Display for JointAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rot: {:.3}  low: {:.3}  high: {:.3}",
            self.rotation.value(),
            self.lower.value(),
            self.upper.value()
        )
    }
}

/// Shared position registers.
///
/// Holds the authoritative Cartesian position and the last computed joint
/// angles. The surrounding firmware owns a single instance and passes it by
/// mutable reference to the operations that update it; this crate never
/// locks, so the caller guarantees one writer at a time.
#[derive(Debug, Clone, Default)]
pub struct PositionStore {
    cartesian: CartesianPosition,
    joints: JointAngles,
}

impl PositionStore {
    /// Create a store with both registers at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current Cartesian position register.
    #[inline]
    pub fn cartesian(&self) -> CartesianPosition {
        self.cartesian
    }

    /// Last computed joint angles register.
    #[inline]
    pub fn joints(&self) -> JointAngles {
        self.joints
    }

    /// Overwrite the Cartesian position register.
    #[inline]
    pub fn set_cartesian(&mut self, position: CartesianPosition) {
        self.cartesian = position;
    }

    /// Overwrite a single coordinate of the Cartesian position register.
    #[inline]
    pub fn set_cartesian_axis(&mut self, axis: Axis, value: f32) {
        self.cartesian.set_axis(axis, value);
    }

    /// Overwrite the joint angles register.
    #[inline]
    pub fn set_joints(&mut self, joints: JointAngles) {
        self.joints = joints;
    }
}
