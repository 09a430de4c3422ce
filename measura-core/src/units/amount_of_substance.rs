//! Amount of substance units.
//!
//! The SI unit is the mole.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`AmountOfSubstance`].
#[derive(Debug)]
pub enum AmountOfSubstanceDim {}

/// Units of [`AmountOfSubstance`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = AmountOfSubstanceDim, name = "AmountOfSubstance")]
pub enum AmountOfSubstanceUnit {
    /// Mole.
    #[unit(symbol = "mol", ratio = 1.0, si)]
    Mole,
    /// Kilomole.
    #[unit(symbol = "kmol", ratio = 1e3)]
    Kilomole,
    /// Centimole.
    #[unit(symbol = "cmol", ratio = 1e-2)]
    Centimole,
    /// Millimole.
    #[unit(symbol = "mmol", ratio = 1e-3)]
    Millimole,
    /// Micromole.
    #[unit(symbol = "µmol", alias = "umol", ratio = 1e-6)]
    Micromole,
    /// Nanomole.
    #[unit(symbol = "nmol", ratio = 1e-9)]
    Nanomole,
    /// Pound-mole, the amount in one pound of a substance with molar mass 1 g/mol.
    #[unit(symbol = "lbmol", ratio = 453.592_37)]
    PoundMole,
}

/// An amount of substance, stored in moles.
pub type AmountOfSubstance = Quantity<AmountOfSubstanceDim>;
