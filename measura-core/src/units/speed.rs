//! Speed units.
//!
//! The SI unit is the metre per second.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Speed`].
#[derive(Debug)]
pub enum SpeedDim {}

/// Units of [`Speed`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = SpeedDim, name = "Speed")]
pub enum SpeedUnit {
    /// Metre per second.
    #[unit(symbol = "m/s", ratio = 1.0, plural = "metres_per_second", si)]
    MetrePerSecond,
    /// Kilometre per second.
    #[unit(symbol = "km/s", ratio = 1e3, plural = "kilometres_per_second")]
    KilometrePerSecond,
    /// Centimetre per second.
    #[unit(symbol = "cm/s", ratio = 1e-2, plural = "centimetres_per_second")]
    CentimetrePerSecond,
    /// Millimetre per second.
    #[unit(symbol = "mm/s", ratio = 1e-3, plural = "millimetres_per_second")]
    MillimetrePerSecond,
    /// Kilometre per hour.
    #[unit(symbol = "km/h", alias = "kph", ratio = 1.0 / 3.6, plural = "kilometres_per_hour")]
    KilometrePerHour,
    /// Statute mile per hour.
    #[unit(symbol = "mph", ratio = 0.447_04, plural = "miles_per_hour")]
    MilePerHour,
    /// Foot per second.
    #[unit(symbol = "ft/s", ratio = 0.3048, plural = "feet_per_second")]
    FootPerSecond,
    /// Knot, one nautical mile per hour.
    #[unit(symbol = "kn", alias = "kt", ratio = 1852.0 / 3600.0)]
    Knot,
}

/// A speed, stored in metres per second.
pub type Speed = Quantity<SpeedDim>;
