//! Magnetic flux density units.
//!
//! The SI unit is the tesla.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`MagneticFieldStrength`].
#[derive(Debug)]
pub enum MagneticFieldStrengthDim {}

/// Units of [`MagneticFieldStrength`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = MagneticFieldStrengthDim, name = "MagneticFieldStrength")]
pub enum MagneticFieldStrengthUnit {
    /// Tesla.
    #[unit(symbol = "T", ratio = 1.0, si)]
    Tesla,
    /// Millitesla.
    #[unit(symbol = "mT", ratio = 1e-3)]
    Millitesla,
    /// Microtesla.
    #[unit(symbol = "µT", alias = "uT", ratio = 1e-6)]
    Microtesla,
    /// Nanotesla.
    #[unit(symbol = "nT", ratio = 1e-9)]
    Nanotesla,
    /// Gauss (CGS), `1e-4 T`.
    #[unit(symbol = "G", ratio = 1e-4, plural = "gauss")]
    Gauss,
    /// Milligauss.
    #[unit(symbol = "mG", ratio = 1e-7, plural = "milligauss")]
    Milligauss,
}

/// A magnetic flux density, stored in teslas.
pub type MagneticFieldStrength = Quantity<MagneticFieldStrengthDim>;
