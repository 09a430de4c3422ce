//! Volume units.
//!
//! The SI unit is the cubic metre. Litres and the US and imperial gallons are included.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Volume`].
#[derive(Debug)]
pub enum VolumeDim {}

/// Units of [`Volume`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = VolumeDim, name = "Volume")]
pub enum VolumeUnit {
    /// Cubic metre.
    #[unit(symbol = "m³", alias = "m^3", ratio = 1.0, si)]
    CubicMetre,
    /// Cubic centimetre.
    #[unit(symbol = "cm³", alias = "cm^3", alias = "cc", ratio = 1e-6)]
    CubicCentimetre,
    /// Cubic millimetre.
    #[unit(symbol = "mm³", alias = "mm^3", ratio = 1e-9)]
    CubicMillimetre,
    /// Hectolitre.
    #[unit(symbol = "hl", alias = "hL", ratio = 1e-1)]
    Hectolitre,
    /// Litre, `1 dm³`.
    #[unit(symbol = "l", alias = "L", ratio = 1e-3)]
    Litre,
    /// Millilitre.
    #[unit(symbol = "ml", alias = "mL", ratio = 1e-6)]
    Millilitre,
    /// Cubic inch.
    #[unit(symbol = "in³", alias = "in^3", ratio = 1.638_706_4e-5, plural = "cubic_inches")]
    CubicInch,
    /// Cubic foot.
    #[unit(symbol = "ft³", alias = "ft^3", ratio = 0.028_316_846_592, plural = "cubic_feet")]
    CubicFoot,
    /// US liquid gallon, 231 in³.
    #[unit(symbol = "gal (U.S.)", ratio = 3.785_411_784e-3)]
    UsGallon,
    /// Imperial gallon.
    #[unit(symbol = "gal (imp.)", ratio = 4.546_09e-3)]
    ImperialGallon,
}

/// A volume, stored in cubic metres.
pub type Volume = Quantity<VolumeDim>;
