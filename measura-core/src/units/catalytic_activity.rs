//! Catalytic activity units.
//!
//! The SI unit is the katal (mol/s). The enzyme unit is one micromole per minute.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`CatalyticActivity`].
#[derive(Debug)]
pub enum CatalyticActivityDim {}

/// Units of [`CatalyticActivity`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = CatalyticActivityDim, name = "CatalyticActivity")]
pub enum CatalyticActivityUnit {
    /// Katal.
    #[unit(symbol = "kat", ratio = 1.0, si)]
    Katal,
    /// Millikatal.
    #[unit(symbol = "mkat", ratio = 1e-3)]
    Millikatal,
    /// Microkatal.
    #[unit(symbol = "µkat", alias = "ukat", ratio = 1e-6)]
    Microkatal,
    /// Nanokatal.
    #[unit(symbol = "nkat", ratio = 1e-9)]
    Nanokatal,
    /// Enzyme unit, `1 µmol/min`.
    #[unit(symbol = "U", ratio = 1e-6 / 60.0)]
    EnzymeUnit,
}

/// A catalytic activity, stored in katals.
pub type CatalyticActivity = Quantity<CatalyticActivityDim>;
