//! Magnetic flux units.
//!
//! The SI unit is the weber.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`MagneticFlux`].
#[derive(Debug)]
pub enum MagneticFluxDim {}

/// Units of [`MagneticFlux`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = MagneticFluxDim, name = "MagneticFlux")]
pub enum MagneticFluxUnit {
    /// Weber.
    #[unit(symbol = "Wb", ratio = 1.0, si)]
    Weber,
    /// Milliweber.
    #[unit(symbol = "mWb", ratio = 1e-3)]
    Milliweber,
    /// Microweber.
    #[unit(symbol = "µWb", alias = "uWb", ratio = 1e-6)]
    Microweber,
    /// Maxwell (CGS), `1e-8 Wb`.
    #[unit(symbol = "Mx", ratio = 1e-8)]
    Maxwell,
}

/// A magnetic flux, stored in webers.
pub type MagneticFlux = Quantity<MagneticFluxDim>;
