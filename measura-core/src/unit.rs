//! Unit types and traits.

use crate::dimension::Dimension;
use crate::error::ParseResult;
use crate::quantity::Quantity;
use core::fmt::{Debug, Display};
use core::hash::Hash;

/// A unit of measurement belonging to one quantity kind.
///
/// Every kind declares its units as a field-less enum and derives this trait, so a unit value is a cheap `Copy`
/// token carrying a symbol, optional aliases, a full name and the factory ratio to the kind's SI unit.
///
/// Conversions are linear:
///
/// - `to_si(x) = x * ratio`
/// - `from_si(s) = s / ratio`
///
/// Two units are equal exactly when their symbols are equal.
pub trait Unit: Copy + Eq + Hash + Debug + Display + 'static {
    /// Dimension tag of the kind this unit measures.
    type Dim: Dimension<Unit = Self>;

    /// Every unit of this kind, in declaration order.
    const ALL: &'static [Self];

    /// Primary unit symbol (e.g. `"km"`, `"µF"`).
    fn symbol(self) -> &'static str;

    /// Alternative symbols accepted when parsing (e.g. `"deg"` for `°`).
    fn aliases(self) -> &'static [&'static str];

    /// Full plural name (e.g. `"square metres"`).
    fn name(self) -> &'static str;

    /// Size of one of this unit in SI units of the kind.
    fn ratio(self) -> f64;

    /// Converts a value expressed in this unit to SI units.
    #[inline]
    fn to_si(self, value: f64) -> f64 {
        value * self.ratio()
    }

    /// Converts an SI value to this unit.
    #[inline]
    fn from_si(self, si: f64) -> f64 {
        si / self.ratio()
    }

    /// Whether this unit is the SI unit of its kind.
    #[inline]
    fn is_si(self) -> bool {
        self == <Self::Dim as Dimension>::SI_UNIT
    }

    /// Builds a quantity from a value expressed in this unit.
    #[inline]
    fn create_quantity(self, value: f64) -> Quantity<Self::Dim> {
        Quantity::new(value, self)
    }

    /// Reads a quantity's value in this unit.
    #[inline]
    fn get_scalar_value(self, quantity: Quantity<Self::Dim>) -> f64 {
        self.from_si(quantity.si_value())
    }

    /// Resolves a unit symbol, alias or name of this kind.
    ///
    /// Exact symbol and alias matches win. Otherwise a single case-insensitive match is accepted.
    fn parse(text: &str) -> ParseResult<Self> {
        crate::parse::resolve_unit::<Self>(text)
    }
}
