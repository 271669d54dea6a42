//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles, lengths, and feedrates to
//! prevent unit confusion at compile time. The cumulative elbow angle gets
//! its own newtype because the forward transform consumes it in a different
//! convention than the raw elbow angle the law-of-cosines step produces.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angular position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f32) -> Self {
        Self(radians.to_degrees())
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Cumulative elbow angle in degrees: shoulder angle plus raw elbow angle.
///
/// The inverse transform stores the high-shank joint in this convention and
/// the forward transform expects it back the same way. Passing a raw elbow
/// angle where this type is required is a type error, not a silent geometry
/// bug.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct CumulativeDegrees(pub f32);

impl CumulativeDegrees {
    /// Create a new cumulative angle value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Compose from the shoulder angle and the raw elbow angle.
    #[inline]
    pub fn from_parts(lower: Degrees, raw_elbow: Degrees) -> Self {
        Self(lower.0 + raw_elbow.0)
    }

    /// Recover the raw elbow angle given the shoulder angle.
    #[inline]
    pub fn raw(self, lower: Degrees) -> Degrees {
        Degrees(self.0 - lower.0)
    }
}

/// Length in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Feedrate in millimetres per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MmPerSec(pub f32);

impl MmPerSec {
    /// Create a new MmPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_conversion() {
        let d = Degrees::new(180.0);
        assert!((d.to_radians() - core::f32::consts::PI).abs() < 0.0001);
        assert!((Degrees::from_radians(core::f32::consts::PI).value() - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_cumulative_round_trip() {
        let lower = Degrees(60.0);
        let raw_elbow = Degrees(60.0);
        let upper = CumulativeDegrees::from_parts(lower, raw_elbow);

        assert!((upper.value() - 120.0).abs() < 0.0001);
        assert!((upper.raw(lower).value() - raw_elbow.value()).abs() < 0.0001);
    }

    #[test]
    fn test_millimeters_arithmetic() {
        let reach = Millimeters(150.0) + Millimeters(150.0);
        assert_eq!(reach.value(), 300.0);
        assert_eq!((reach - Millimeters(30.0)).value(), 270.0);
    }
}
