//! Specific volume units: volume per unit mass.
//!
//! The SI unit is the cubic metre per kilogram.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`SpecificVolume`].
#[derive(Debug)]
pub enum SpecificVolumeDim {}

/// Units of [`SpecificVolume`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = SpecificVolumeDim, name = "SpecificVolume")]
pub enum SpecificVolumeUnit {
    /// Cubic metre per kilogram.
    #[unit(symbol = "m³/kg", alias = "m^3/kg", ratio = 1.0, plural = "cubic_metres_per_kilogram", si)]
    CubicMetrePerKilogram,
    /// Litre per kilogram.
    #[unit(symbol = "l/kg", alias = "L/kg", ratio = 1e-3, plural = "litres_per_kilogram")]
    LitrePerKilogram,
    /// Cubic centimetre per gram.
    #[unit(symbol = "cm³/g", alias = "cm^3/g", ratio = 1e-3, plural = "cubic_centimetres_per_gram")]
    CubicCentimetrePerGram,
    /// Cubic foot per pound.
    #[unit(symbol = "ft³/lb", alias = "ft^3/lb", ratio = 0.062_427_960_576_144_61, plural = "cubic_feet_per_pound")]
    CubicFootPerPound,
}

/// A specific volume, stored in cubic metres per kilogram.
pub type SpecificVolume = Quantity<SpecificVolumeDim>;
