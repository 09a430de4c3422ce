//! Mass units.
//!
//! The SI unit is the kilogram, so [`MassUnit::Kilogram`] has ratio `1.0` and the gram ladder scales from it.
//! Avoirdupois units use the exact international pound.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Mass`].
#[derive(Debug)]
pub enum MassDim {}

/// Units of [`Mass`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = MassDim, name = "Mass")]
pub enum MassUnit {
    /// Kilogram.
    #[unit(symbol = "kg", ratio = 1.0, si)]
    Kilogram,
    /// Gram.
    #[unit(symbol = "g", ratio = 1e-3)]
    Gram,
    /// Milligram.
    #[unit(symbol = "mg", ratio = 1e-6)]
    Milligram,
    /// Microgram.
    #[unit(symbol = "µg", alias = "ug", ratio = 1e-9)]
    Microgram,
    /// Megagram, equal in size to the tonne.
    #[unit(symbol = "Mg", ratio = 1e3)]
    Megagram,
    /// Metric tonne.
    #[unit(symbol = "t", ratio = 1e3)]
    Tonne,
    /// Avoirdupois pound, exactly `0.453 592 37 kg`.
    #[unit(symbol = "lb", alias = "lbs", ratio = 0.453_592_37)]
    Pound,
    /// Avoirdupois ounce.
    #[unit(symbol = "oz", ratio = 0.028_349_523_125)]
    Ounce,
    /// Stone, 14 lb.
    #[unit(symbol = "st", ratio = 6.350_293_18)]
    Stone,
    /// Short ton, 2000 lb.
    #[unit(symbol = "t (short)", ratio = 907.184_74)]
    ShortTon,
    /// Long ton, 2240 lb.
    #[unit(symbol = "t (long)", ratio = 1016.046_908_8)]
    LongTon,
}

/// A mass, stored in kilograms.
pub type Mass = Quantity<MassDim>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn kilogram_is_si() {
        assert!(MassUnit::Kilogram.is_si());
        assert_eq!(MassUnit::Gram.to_si(1500.0), 1.5);
        assert_eq!(MassUnit::Tonne.from_si(2500.0), 2.5);
    }

    #[test]
    fn avoirdupois() {
        assert_relative_eq!(Mass::from_pounds(1.0).ounces(), 16.0, max_relative = 1e-12);
        assert_relative_eq!(Mass::from_stones(1.0).pounds(), 14.0, max_relative = 1e-12);
        assert_relative_eq!(Mass::from_short_tons(1.0).pounds(), 2000.0, max_relative = 1e-12);
        assert_relative_eq!(Mass::from_long_tons(1.0).pounds(), 2240.0, max_relative = 1e-12);
    }

    #[test]
    fn tonne_and_megagram_differ_only_by_symbol() {
        assert_ne!(MassUnit::Tonne, MassUnit::Megagram);
        assert_eq!(Mass::from_tonnes(1.0), Mass::from_megagrams(1.0));
    }
}
