//! Electrical conductance units.
//!
//! The SI unit is the siemens.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`ElectricalConductance`].
#[derive(Debug)]
pub enum ElectricalConductanceDim {}

/// Units of [`ElectricalConductance`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = ElectricalConductanceDim, name = "ElectricalConductance")]
pub enum ElectricalConductanceUnit {
    /// Siemens.
    #[unit(symbol = "S", ratio = 1.0, plural = "siemens", si)]
    Siemens,
    /// Kilosiemens.
    #[unit(symbol = "kS", ratio = 1e3, plural = "kilosiemens")]
    Kilosiemens,
    /// Millisiemens.
    #[unit(symbol = "mS", ratio = 1e-3, plural = "millisiemens")]
    Millisiemens,
    /// Microsiemens.
    #[unit(symbol = "µS", alias = "uS", ratio = 1e-6, plural = "microsiemens")]
    Microsiemens,
    /// Nanosiemens.
    #[unit(symbol = "nS", ratio = 1e-9, plural = "nanosiemens")]
    Nanosiemens,
}

/// An electrical conductance, stored in siemens.
pub type ElectricalConductance = Quantity<ElectricalConductanceDim>;
