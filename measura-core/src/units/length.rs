//! Length units.
//!
//! The SI unit is the metre. The table covers the metric ladder from nanometres to kilometres, the international
//! yard-and-pound units and the nautical and astronomical distances.

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Length`].
#[derive(Debug)]
pub enum LengthDim {}

/// Units of [`Length`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = LengthDim, name = "Length")]
pub enum LengthUnit {
    /// Metre.
    #[unit(symbol = "m", ratio = 1.0, si)]
    Metre,
    /// Kilometre, `1000 m`.
    #[unit(symbol = "km", ratio = 1e3)]
    Kilometre,
    /// Centimetre.
    #[unit(symbol = "cm", ratio = 1e-2)]
    Centimetre,
    /// Millimetre.
    #[unit(symbol = "mm", ratio = 1e-3)]
    Millimetre,
    /// Micrometre.
    #[unit(symbol = "µm", alias = "um", ratio = 1e-6)]
    Micrometre,
    /// Nanometre.
    #[unit(symbol = "nm", ratio = 1e-9)]
    Nanometre,
    /// International inch, exactly `0.0254 m`.
    #[unit(symbol = "in", ratio = 0.0254, plural = "inches")]
    Inch,
    /// International foot, exactly `0.3048 m`.
    #[unit(symbol = "ft", ratio = 0.3048, plural = "feet")]
    Foot,
    /// International yard, exactly `0.9144 m`.
    #[unit(symbol = "yd", ratio = 0.9144)]
    Yard,
    /// Statute mile.
    #[unit(symbol = "mi", ratio = 1609.344)]
    Mile,
    /// International nautical mile.
    #[unit(symbol = "nmi", alias = "NM", ratio = 1852.0)]
    NauticalMile,
    /// Astronomical unit (IAU 2012, exact).
    #[unit(symbol = "au", ratio = 149_597_870_700.0)]
    AstronomicalUnit,
    /// Julian light-year.
    #[unit(symbol = "ly", ratio = 9_460_730_472_580_800.0)]
    LightYear,
}

/// A length, stored in metres.
pub type Length = Quantity<LengthDim>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn metric_ladder() {
        assert_eq!(Length::from_kilometres(1.25).metres(), 1250.0);
        assert_relative_eq!(Length::from_millimetres(2500.0).metres(), 2.5);
        assert_relative_eq!(Length::from_metres(1.0).micrometres(), 1e6, max_relative = 1e-12);
    }

    #[test]
    fn imperial_units_are_exact() {
        assert_relative_eq!(Length::from_feet(1.0).inches(), 12.0, max_relative = 1e-12);
        assert_relative_eq!(Length::from_yards(1760.0).miles(), 1.0, max_relative = 1e-12);
        assert_eq!(Length::from_inches(100.0).metres(), 2.54);
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(LengthUnit::Foot.name(), "feet");
        assert_eq!(LengthUnit::Inch.name(), "inches");
        assert_eq!(LengthUnit::NauticalMile.name(), "nautical miles");
    }

    #[test]
    fn light_year_in_astronomical_units() {
        assert_relative_eq!(Length::from_light_years(1.0).astronomical_units(), 63_241.077, max_relative = 1e-8);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_km_m(k in -1e6..1e6f64) {
            let back = Length::from_metres(Length::from_kilometres(k).metres()).kilometres();
            prop_assert!((back - k).abs() < 1e-9 * k.abs().max(1.0));
        }

        #[test]
        fn prop_inch_foot_ratio(f in 1e-6..1e6f64) {
            let d = Length::from_feet(f);
            prop_assert!((d.inches() / d.feet() - 12.0).abs() < 1e-9);
        }
    }
}
