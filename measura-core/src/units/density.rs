//! Mass density units.
//!
//! The SI unit is the kilogram per cubic metre.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Density`].
#[derive(Debug)]
pub enum DensityDim {}

/// Units of [`Density`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = DensityDim, name = "Density")]
pub enum DensityUnit {
    /// Kilogram per cubic metre.
    #[unit(symbol = "kg/m³", alias = "kg/m^3", ratio = 1.0, plural = "kilograms_per_cubic_metre", si)]
    KilogramPerCubicMetre,
    /// Gram per cubic centimetre.
    #[unit(symbol = "g/cm³", alias = "g/cm^3", alias = "g/cc", ratio = 1e3, plural = "grams_per_cubic_centimetre")]
    GramPerCubicCentimetre,
    /// Kilogram per litre.
    #[unit(symbol = "kg/l", alias = "kg/L", ratio = 1e3, plural = "kilograms_per_litre")]
    KilogramPerLitre,
    /// Gram per litre.
    #[unit(symbol = "g/l", alias = "g/L", ratio = 1.0, plural = "grams_per_litre")]
    GramPerLitre,
    /// Milligram per litre.
    #[unit(symbol = "mg/l", alias = "mg/L", ratio = 1e-3, plural = "milligrams_per_litre")]
    MilligramPerLitre,
    /// Gram per cubic metre.
    #[unit(symbol = "g/m³", alias = "g/m^3", ratio = 1e-3, plural = "grams_per_cubic_metre")]
    GramPerCubicMetre,
    /// Pound per cubic foot.
    #[unit(symbol = "lb/ft³", alias = "lb/ft^3", ratio = 16.018_463_373_960_14, plural = "pounds_per_cubic_foot")]
    PoundPerCubicFoot,
    /// Pound per cubic inch.
    #[unit(symbol = "lb/in³", alias = "lb/in^3", ratio = 27_679.904_710_203, plural = "pounds_per_cubic_inch")]
    PoundPerCubicInch,
}

/// A mass density, stored in kilograms per cubic metre.
pub type Density = Quantity<DensityDim>;
