//! Acceleration units.
//!
//! The SI unit is the metre per second squared. [`AccelerationUnit::StandardGravity`] is the conventional
//! `g₀ = 9.806 65 m/s²`.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Acceleration`].
#[derive(Debug)]
pub enum AccelerationDim {}

/// Units of [`Acceleration`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = AccelerationDim, name = "Acceleration")]
pub enum AccelerationUnit {
    /// Metre per second squared.
    #[unit(symbol = "m/s²", alias = "m/s^2", ratio = 1.0, plural = "metres_per_second_squared", si)]
    MetrePerSecondSquared,
    /// Kilometre per second squared.
    #[unit(symbol = "km/s²", alias = "km/s^2", ratio = 1e3, plural = "kilometres_per_second_squared")]
    KilometrePerSecondSquared,
    /// Centimetre per second squared (gal).
    #[unit(symbol = "cm/s²", alias = "cm/s^2", alias = "Gal", ratio = 1e-2, plural = "centimetres_per_second_squared")]
    CentimetrePerSecondSquared,
    /// Millimetre per second squared.
    #[unit(symbol = "mm/s²", alias = "mm/s^2", ratio = 1e-3, plural = "millimetres_per_second_squared")]
    MillimetrePerSecondSquared,
    /// Foot per second squared.
    #[unit(symbol = "ft/s²", alias = "ft/s^2", ratio = 0.3048, plural = "feet_per_second_squared")]
    FootPerSecondSquared,
    /// Standard gravity.
    #[unit(symbol = "g₀", alias = "g0", ratio = 9.806_65, plural = "standard_gravities")]
    StandardGravity,
}

/// An acceleration, stored in metres per second squared.
pub type Acceleration = Quantity<AccelerationDim>;
