//! Electric current units.
//!
//! The SI unit is the ampere.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Current`].
#[derive(Debug)]
pub enum CurrentDim {}

/// Units of [`Current`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = CurrentDim, name = "Current")]
pub enum CurrentUnit {
    /// Ampere.
    #[unit(symbol = "A", alias = "amp", ratio = 1.0, si)]
    Ampere,
    /// Megaampere.
    #[unit(symbol = "MA", ratio = 1e6)]
    Megaampere,
    /// Kiloampere.
    #[unit(symbol = "kA", ratio = 1e3)]
    Kiloampere,
    /// Milliampere.
    #[unit(symbol = "mA", ratio = 1e-3)]
    Milliampere,
    /// Microampere.
    #[unit(symbol = "µA", alias = "uA", ratio = 1e-6)]
    Microampere,
    /// Nanoampere.
    #[unit(symbol = "nA", ratio = 1e-9)]
    Nanoampere,
}

/// An electric current, stored in amperes.
pub type Current = Quantity<CurrentDim>;
