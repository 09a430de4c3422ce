//! Rotational acceleration units.
//!
//! The SI unit is the radian per second squared.

use core::f64::consts::{PI, TAU};
use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`RotationalAcceleration`].
#[derive(Debug)]
pub enum RotationalAccelerationDim {}

/// Units of [`RotationalAcceleration`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = RotationalAccelerationDim, name = "RotationalAcceleration")]
pub enum RotationalAccelerationUnit {
    /// Radian per second squared.
    #[unit(symbol = "rad/s²", alias = "rad/s^2", ratio = 1.0, plural = "radians_per_second_squared", si)]
    RadianPerSecondSquared,
    /// Degree per second squared.
    #[unit(symbol = "°/s²", alias = "deg/s²", alias = "deg/s^2", ratio = PI / 180.0, plural = "degrees_per_second_squared")]
    DegreePerSecondSquared,
    /// Revolution per second squared.
    #[unit(symbol = "r/s²", alias = "r/s^2", ratio = TAU, plural = "revolutions_per_second_squared")]
    RevolutionPerSecondSquared,
    /// Revolution per minute per second.
    #[unit(symbol = "rpm/s", ratio = TAU / 60.0, plural = "revolutions_per_minute_per_second")]
    RevolutionPerMinutePerSecond,
}

/// A rotational acceleration, stored in radians per second squared.
pub type RotationalAcceleration = Quantity<RotationalAccelerationDim>;
