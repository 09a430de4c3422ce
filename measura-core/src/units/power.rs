//! Power units.
//!
//! The SI unit is the watt.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Power`].
#[derive(Debug)]
pub enum PowerDim {}

/// Units of [`Power`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = PowerDim, name = "Power")]
pub enum PowerUnit {
    /// Watt.
    #[unit(symbol = "W", ratio = 1.0, si)]
    Watt,
    /// Gigawatt.
    #[unit(symbol = "GW", ratio = 1e9)]
    Gigawatt,
    /// Megawatt.
    #[unit(symbol = "MW", ratio = 1e6)]
    Megawatt,
    /// Kilowatt.
    #[unit(symbol = "kW", ratio = 1e3)]
    Kilowatt,
    /// Milliwatt.
    #[unit(symbol = "mW", ratio = 1e-3)]
    Milliwatt,
    /// Microwatt.
    #[unit(symbol = "µW", alias = "uW", ratio = 1e-6)]
    Microwatt,
    /// Mechanical (imperial) horsepower.
    #[unit(symbol = "hp(I)", alias = "hp", ratio = 745.699_871_582_270_2, plural = "mechanical_horsepower")]
    MechanicalHorsepower,
    /// Metric horsepower.
    #[unit(symbol = "hp(M)", alias = "PS", ratio = 735.498_75, plural = "metric_horsepower")]
    MetricHorsepower,
    /// British thermal unit per hour.
    #[unit(symbol = "BTU/h", alias = "Btu/h", ratio = 1055.055_852_62 / 3600.0, plural = "btus_per_hour")]
    BtuPerHour,
}

/// A power, stored in watts.
pub type Power = Quantity<PowerDim>;
