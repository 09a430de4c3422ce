//! Rotational speed units.
//!
//! The SI unit is the radian per second.

use core::f64::consts::{PI, TAU};
use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`RotationalSpeed`].
#[derive(Debug)]
pub enum RotationalSpeedDim {}

/// Units of [`RotationalSpeed`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = RotationalSpeedDim, name = "RotationalSpeed")]
pub enum RotationalSpeedUnit {
    /// Radian per second.
    #[unit(symbol = "rad/s", ratio = 1.0, plural = "radians_per_second", si)]
    RadianPerSecond,
    /// Milliradian per second.
    #[unit(symbol = "mrad/s", ratio = 1e-3, plural = "milliradians_per_second")]
    MilliradianPerSecond,
    /// Degree per second.
    #[unit(symbol = "°/s", alias = "deg/s", ratio = PI / 180.0, plural = "degrees_per_second")]
    DegreePerSecond,
    /// Degree per minute.
    #[unit(symbol = "°/min", alias = "deg/min", ratio = PI / 10_800.0, plural = "degrees_per_minute")]
    DegreePerMinute,
    /// Revolution per second.
    #[unit(symbol = "r/s", alias = "rps", ratio = TAU, plural = "revolutions_per_second")]
    RevolutionPerSecond,
    /// Revolution per minute.
    #[unit(symbol = "rpm", alias = "r/min", ratio = TAU / 60.0, plural = "revolutions_per_minute")]
    RevolutionPerMinute,
}

/// A rotational speed, stored in radians per second.
pub type RotationalSpeed = Quantity<RotationalSpeedDim>;
