//! Jerk units: rate of change of acceleration.
//!
//! The SI unit is the metre per second cubed.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Jerk`].
#[derive(Debug)]
pub enum JerkDim {}

/// Units of [`Jerk`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = JerkDim, name = "Jerk")]
pub enum JerkUnit {
    /// Metre per second cubed.
    #[unit(symbol = "m/s³", alias = "m/s^3", ratio = 1.0, plural = "metres_per_second_cubed", si)]
    MetrePerSecondCubed,
    /// Kilometre per second cubed.
    #[unit(symbol = "km/s³", alias = "km/s^3", ratio = 1e3, plural = "kilometres_per_second_cubed")]
    KilometrePerSecondCubed,
    /// Centimetre per second cubed.
    #[unit(symbol = "cm/s³", alias = "cm/s^3", ratio = 1e-2, plural = "centimetres_per_second_cubed")]
    CentimetrePerSecondCubed,
    /// Millimetre per second cubed.
    #[unit(symbol = "mm/s³", alias = "mm/s^3", ratio = 1e-3, plural = "millimetres_per_second_cubed")]
    MillimetrePerSecondCubed,
    /// Foot per second cubed.
    #[unit(symbol = "ft/s³", alias = "ft/s^3", ratio = 0.3048, plural = "feet_per_second_cubed")]
    FootPerSecondCubed,
    /// Inch per second cubed.
    #[unit(symbol = "in/s³", alias = "in/s^3", ratio = 0.0254, plural = "inches_per_second_cubed")]
    InchPerSecondCubed,
    /// Standard gravity per second.
    #[unit(symbol = "g₀/s", alias = "g0/s", ratio = 9.806_65, plural = "standard_gravities_per_second")]
    StandardGravityPerSecond,
}

/// A jerk, stored in metres per second cubed.
pub type Jerk = Quantity<JerkDim>;
