//! Pressure units.
//!
//! The SI unit is the pascal.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Pressure`].
#[derive(Debug)]
pub enum PressureDim {}

/// Units of [`Pressure`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = PressureDim, name = "Pressure")]
pub enum PressureUnit {
    /// Pascal.
    #[unit(symbol = "Pa", ratio = 1.0, si)]
    Pascal,
    /// Megapascal.
    #[unit(symbol = "MPa", ratio = 1e6)]
    Megapascal,
    /// Kilopascal.
    #[unit(symbol = "kPa", ratio = 1e3)]
    Kilopascal,
    /// Hectopascal.
    #[unit(symbol = "hPa", ratio = 1e2)]
    Hectopascal,
    /// Bar.
    #[unit(symbol = "bar", ratio = 1e5)]
    Bar,
    /// Millibar.
    #[unit(symbol = "mbar", ratio = 1e2)]
    Millibar,
    /// Standard atmosphere.
    #[unit(symbol = "atm", ratio = 101_325.0)]
    Atmosphere,
    /// Torr, `1/760 atm`.
    #[unit(symbol = "Torr", ratio = 101_325.0 / 760.0)]
    Torr,
    /// Conventional millimetre of mercury.
    #[unit(symbol = "mmHg", ratio = 133.322_387_415, plural = "millimetres_of_mercury")]
    MillimetreOfMercury,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", ratio = 6894.757_293_168_361, plural = "pounds_force_per_square_inch")]
    PoundForcePerSquareInch,
}

/// A pressure, stored in pascals.
pub type Pressure = Quantity<PressureDim>;
