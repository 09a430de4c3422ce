//! Electric charge units.
//!
//! The SI unit is the coulomb. Ampere-hours are common for battery capacity.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`ElectricCharge`].
#[derive(Debug)]
pub enum ElectricChargeDim {}

/// Units of [`ElectricCharge`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = ElectricChargeDim, name = "ElectricCharge")]
pub enum ElectricChargeUnit {
    /// Coulomb.
    #[unit(symbol = "C", ratio = 1.0, si)]
    Coulomb,
    /// Millicoulomb.
    #[unit(symbol = "mC", ratio = 1e-3)]
    Millicoulomb,
    /// Microcoulomb.
    #[unit(symbol = "µC", alias = "uC", ratio = 1e-6)]
    Microcoulomb,
    /// Nanocoulomb.
    #[unit(symbol = "nC", ratio = 1e-9)]
    Nanocoulomb,
    /// Picocoulomb.
    #[unit(symbol = "pC", ratio = 1e-12)]
    Picocoulomb,
    /// Kiloampere-hour.
    #[unit(symbol = "kA·h", alias = "kAh", ratio = 3.6e6, plural = "kiloampere_hours")]
    KiloampereHour,
    /// Ampere-hour.
    #[unit(symbol = "A·h", alias = "Ah", ratio = 3600.0, plural = "ampere_hours")]
    AmpereHour,
    /// Milliampere-hour.
    #[unit(symbol = "mA·h", alias = "mAh", ratio = 3.6, plural = "milliampere_hours")]
    MilliampereHour,
}

/// An electric charge, stored in coulombs.
pub type ElectricCharge = Quantity<ElectricChargeDim>;
