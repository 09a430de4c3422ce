//! Capacitance units.
//!
//! The SI unit is the farad.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Capacitance`].
#[derive(Debug)]
pub enum CapacitanceDim {}

/// Units of [`Capacitance`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = CapacitanceDim, name = "Capacitance")]
pub enum CapacitanceUnit {
    /// Farad.
    #[unit(symbol = "F", ratio = 1.0, si)]
    Farad,
    /// Megafarad.
    #[unit(symbol = "MF", ratio = 1e6)]
    Megafarad,
    /// Kilofarad.
    #[unit(symbol = "kF", ratio = 1e3)]
    Kilofarad,
    /// Millifarad.
    #[unit(symbol = "mF", ratio = 1e-3)]
    Millifarad,
    /// Microfarad.
    #[unit(symbol = "µF", alias = "uF", ratio = 1e-6)]
    Microfarad,
    /// Nanofarad.
    #[unit(symbol = "nF", ratio = 1e-9)]
    Nanofarad,
    /// Picofarad.
    #[unit(symbol = "pF", ratio = 1e-12)]
    Picofarad,
}

/// A capacitance, stored in farads.
pub type Capacitance = Quantity<CapacitanceDim>;
