//! Electric potential units.
//!
//! The SI unit is the volt.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Voltage`].
#[derive(Debug)]
pub enum VoltageDim {}

/// Units of [`Voltage`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = VoltageDim, name = "Voltage")]
pub enum VoltageUnit {
    /// Volt.
    #[unit(symbol = "V", ratio = 1.0, si)]
    Volt,
    /// Megavolt.
    #[unit(symbol = "MV", ratio = 1e6)]
    Megavolt,
    /// Kilovolt.
    #[unit(symbol = "kV", ratio = 1e3)]
    Kilovolt,
    /// Millivolt.
    #[unit(symbol = "mV", ratio = 1e-3)]
    Millivolt,
    /// Microvolt.
    #[unit(symbol = "µV", alias = "uV", ratio = 1e-6)]
    Microvolt,
}

/// An electric potential difference, stored in volts.
pub type Voltage = Quantity<VoltageDim>;
