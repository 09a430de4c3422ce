//! Energy units.
//!
//! The SI unit is the joule. Thermochemical calories and the electronvolt (2019 SI, exact) are included.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Energy`].
#[derive(Debug)]
pub enum EnergyDim {}

/// Units of [`Energy`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = EnergyDim, name = "Energy")]
pub enum EnergyUnit {
    /// Joule.
    #[unit(symbol = "J", ratio = 1.0, si)]
    Joule,
    /// Megajoule.
    #[unit(symbol = "MJ", ratio = 1e6)]
    Megajoule,
    /// Kilojoule.
    #[unit(symbol = "kJ", ratio = 1e3)]
    Kilojoule,
    /// Millijoule.
    #[unit(symbol = "mJ", ratio = 1e-3)]
    Millijoule,
    /// Watt-hour.
    #[unit(symbol = "Wh", ratio = 3600.0)]
    WattHour,
    /// Kilowatt-hour.
    #[unit(symbol = "kWh", ratio = 3.6e6)]
    KilowattHour,
    /// Megawatt-hour.
    #[unit(symbol = "MWh", ratio = 3.6e9)]
    MegawattHour,
    /// Thermochemical calorie.
    #[unit(symbol = "cal", ratio = 4.184)]
    Calorie,
    /// Thermochemical kilocalorie.
    #[unit(symbol = "kcal", ratio = 4184.0)]
    Kilocalorie,
    /// Electronvolt.
    #[unit(symbol = "eV", ratio = 1.602_176_634e-19)]
    Electronvolt,
    /// International table British thermal unit.
    #[unit(symbol = "BTU", alias = "Btu", ratio = 1055.055_852_62)]
    BritishThermalUnit,
    /// Erg (CGS).
    #[unit(symbol = "erg", ratio = 1e-7)]
    Erg,
}

/// An energy, stored in joules.
pub type Energy = Quantity<EnergyDim>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn electrical_energy() {
        assert_eq!(Energy::from_kilowatt_hours(1.0).megajoules(), 3.6);
        assert_relative_eq!(Energy::from_watt_hours(1000.0).kilowatt_hours(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn thermal_units() {
        assert_relative_eq!(Energy::from_kilocalories(1.0).kilojoules(), 4.184, max_relative = 1e-12);
        assert_relative_eq!(Energy::from_british_thermal_units(1.0).joules(), 1055.055_852_62);
    }

    #[test]
    fn electronvolt() {
        assert_relative_eq!(Energy::from_electronvolts(1.0).joules(), 1.602_176_634e-19);
    }
}
