//! Inductance units.
//!
//! The SI unit is the henry.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Inductance`].
#[derive(Debug)]
pub enum InductanceDim {}

/// Units of [`Inductance`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = InductanceDim, name = "Inductance")]
pub enum InductanceUnit {
    /// Henry.
    #[unit(symbol = "H", ratio = 1.0, plural = "henries", si)]
    Henry,
    /// Kilohenry.
    #[unit(symbol = "kH", ratio = 1e3, plural = "kilohenries")]
    Kilohenry,
    /// Millihenry.
    #[unit(symbol = "mH", ratio = 1e-3, plural = "millihenries")]
    Millihenry,
    /// Microhenry.
    #[unit(symbol = "µH", alias = "uH", ratio = 1e-6, plural = "microhenries")]
    Microhenry,
    /// Nanohenry.
    #[unit(symbol = "nH", ratio = 1e-9, plural = "nanohenries")]
    Nanohenry,
    /// Picohenry.
    #[unit(symbol = "pH", ratio = 1e-12, plural = "picohenries")]
    Picohenry,
}

/// An inductance, stored in henries.
pub type Inductance = Quantity<InductanceDim>;
