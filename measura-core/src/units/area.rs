//! Area units.
//!
//! The SI unit is the square metre. ASCII spellings such as `m^2` are accepted as aliases.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Area`].
#[derive(Debug)]
pub enum AreaDim {}

/// Units of [`Area`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = AreaDim, name = "Area")]
pub enum AreaUnit {
    /// Square metre.
    #[unit(symbol = "m²", alias = "m^2", ratio = 1.0, si)]
    SquareMetre,
    /// Square kilometre.
    #[unit(symbol = "km²", alias = "km^2", ratio = 1e6)]
    SquareKilometre,
    /// Square centimetre.
    #[unit(symbol = "cm²", alias = "cm^2", ratio = 1e-4)]
    SquareCentimetre,
    /// Square millimetre.
    #[unit(symbol = "mm²", alias = "mm^2", ratio = 1e-6)]
    SquareMillimetre,
    /// Hectare, `10 000 m²`.
    #[unit(symbol = "ha", ratio = 1e4)]
    Hectare,
    /// International acre.
    #[unit(symbol = "ac", ratio = 4046.856_422_4)]
    Acre,
    /// Square inch.
    #[unit(symbol = "in²", alias = "in^2", alias = "sq in", ratio = 6.4516e-4, plural = "square_inches")]
    SquareInch,
    /// Square foot.
    #[unit(symbol = "ft²", alias = "ft^2", alias = "sq ft", ratio = 0.092_903_04, plural = "square_feet")]
    SquareFoot,
    /// Square statute mile.
    #[unit(symbol = "mi²", alias = "mi^2", alias = "sq mi", ratio = 2_589_988.110_336)]
    SquareMile,
}

/// An area, stored in square metres.
pub type Area = Quantity<AreaDim>;
