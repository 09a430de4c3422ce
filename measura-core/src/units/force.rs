//! Force units.
//!
//! The SI unit is the newton.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Force`].
#[derive(Debug)]
pub enum ForceDim {}

/// Units of [`Force`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = ForceDim, name = "Force")]
pub enum ForceUnit {
    /// Newton.
    #[unit(symbol = "N", ratio = 1.0, si)]
    Newton,
    /// Meganewton.
    #[unit(symbol = "MN", ratio = 1e6)]
    Meganewton,
    /// Kilonewton.
    #[unit(symbol = "kN", ratio = 1e3)]
    Kilonewton,
    /// Millinewton.
    #[unit(symbol = "mN", ratio = 1e-3)]
    Millinewton,
    /// Dyne (CGS).
    #[unit(symbol = "dyn", ratio = 1e-5)]
    Dyne,
    /// Kilogram-force.
    #[unit(symbol = "kgf", ratio = 9.806_65, plural = "kilograms_force")]
    KilogramForce,
    /// Pound-force.
    #[unit(symbol = "lbf", ratio = 4.448_221_615_260_5, plural = "pounds_force")]
    PoundForce,
    /// Kilopound-force.
    #[unit(symbol = "kipf", alias = "kip", ratio = 4448.221_615_260_5, plural = "kilopounds_force")]
    KilopoundForce,
}

/// A force, stored in newtons.
pub type Force = Quantity<ForceDim>;
