//! Electrical resistance units.
//!
//! The SI unit is the ohm. Both the Greek capital omega and the ohm sign are accepted, as is the spelling `Ohm`.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Resistance`].
#[derive(Debug)]
pub enum ResistanceDim {}

/// Units of [`Resistance`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = ResistanceDim, name = "Resistance")]
pub enum ResistanceUnit {
    /// Ohm.
    #[unit(symbol = "Ω", alias = "\u{2126}", alias = "Ohm", alias = "ohm", ratio = 1.0, si)]
    Ohm,
    /// Gigaohm.
    #[unit(symbol = "GΩ", alias = "GOhm", ratio = 1e9)]
    Gigaohm,
    /// Megaohm.
    #[unit(symbol = "MΩ", alias = "MOhm", ratio = 1e6)]
    Megaohm,
    /// Kiloohm.
    #[unit(symbol = "kΩ", alias = "kOhm", ratio = 1e3)]
    Kiloohm,
    /// Milliohm.
    #[unit(symbol = "mΩ", alias = "mOhm", ratio = 1e-3)]
    Milliohm,
    /// Microohm.
    #[unit(symbol = "µΩ", alias = "uOhm", ratio = 1e-6)]
    Microohm,
}

/// An electrical resistance, stored in ohms.
pub type Resistance = Quantity<ResistanceDim>;
