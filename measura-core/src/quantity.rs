//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A physical quantity of kind `D`.
///
/// `Quantity<D>` wraps a single `f64` holding the magnitude in the SI unit of its kind, together with phantom type
/// information about the kind. Quantities of different kinds cannot be mixed by accident: adding a length to a time
/// does not compile.
///
/// Construction from any unit converts to SI immediately, so equality, ordering and arithmetic never depend on the
/// unit a value was created in.
///
/// # Examples
///
/// ```rust
/// use measura_core::{Length, LengthUnit};
///
/// let a = Length::new(1.5, LengthUnit::Kilometre);
/// let b = Length::from_metres(500.0);
/// assert_eq!((a + b).metres(), 2000.0);
/// assert_eq!(a.value_in(LengthUnit::Metre), 1500.0);
/// ```
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

impl<D: Dimension> Quantity<D> {
    /// The zero quantity.
    pub const ZERO: Self = Self::from_si(0.0);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use measura_core::Length;
    /// assert!(Length::NAN.si_value().is_nan());
    /// ```
    pub const NAN: Self = Self::from_si(f64::NAN);

    /// Creates a quantity from a value expressed in `unit`.
    ///
    /// ```rust
    /// use measura_core::{Time, TimeUnit};
    /// let t = Time::new(2.0, TimeUnit::Minute);
    /// assert_eq!(t.si_value(), 120.0);
    /// ```
    #[inline]
    pub fn new(value: f64, unit: D::Unit) -> Self {
        Self::from_si(unit.to_si(value))
    }

    /// Creates a quantity directly from its SI magnitude.
    #[inline]
    pub const fn from_si(si: f64) -> Self {
        Self(si, PhantomData)
    }

    /// The zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the magnitude in the SI unit of the kind.
    #[inline]
    pub const fn si_value(self) -> f64 {
        self.0
    }

    /// Returns the magnitude expressed in `unit`.
    ///
    /// ```rust
    /// use measura_core::{Angle, AngleUnit};
    /// let a = Angle::from_degrees(180.0);
    /// assert!((a.value_in(AngleUnit::Radian) - core::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn value_in(self, unit: D::Unit) -> f64 {
        unit.from_si(self.0)
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_si(self.0.abs())
    }

    /// Returns the smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_si(self.0.min(other.0))
    }

    /// Returns the larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_si(self.0.max(other.0))
    }

    /// Total order on SI magnitudes.
    ///
    /// NaN sorts below every number and two NaNs compare equal.
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use measura_core::Mass;
    ///
    /// assert_eq!(Mass::from_grams(1.0).compare_to(Mass::from_kilograms(1.0)), Ordering::Less);
    /// assert_eq!(Mass::NAN.compare_to(Mass::from_kilograms(-1e300)), Ordering::Less);
    /// ```
    pub fn compare_to(self, other: Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
        }
    }

    /// Tolerance equality: `|self - other| < tolerance`, all compared in SI.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not strictly positive.
    ///
    /// ```rust
    /// use measura_core::Length;
    /// let a = Length::from_metres(1.0);
    /// let b = Length::from_millimetres(1000.4);
    /// assert!(a.equals(b, Length::from_millimetres(0.5)));
    /// assert!(!a.equals(b, Length::from_millimetres(0.1)));
    /// ```
    pub fn equals(self, other: Self, tolerance: Self) -> bool {
        assert!(
            tolerance.0 > 0.0,
            "{} tolerance must be greater than zero",
            D::NAME
        );
        (self.0 - other.0).abs() < tolerance.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<D: Dimension> Default for Quantity<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?} {})", D::NAME, self.0, D::SI_UNIT.symbol())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_si(self.0 + rhs.0)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_si(self.0 - rhs.0)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_si(-self.0)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_si(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_si(self.0 / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

/// Dividing two quantities of the same kind yields a plain ratio.
impl<D: Dimension> Div for Quantity<D> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Dimension> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::from_si(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit symbol next to the number. The value is
/// written in the SI unit of the kind; on input any unit symbol, alias or name of the kind is accepted and converted.
///
/// # Examples
///
/// ```rust
/// use measura_core::Length;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "measura_core::serde_with_unit")]
///     max_distance: Length, // {"value": 100.0, "unit": "m"}
///
///     min_distance: Length, // 50.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<D>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.si_value())?;
        state.serialize_field("unit", D::SI_UNIT.symbol())?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and optionally `unit` fields.
    ///
    /// Without a `unit` field the value is taken to be in SI units.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<D>(PhantomData<D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                let unit = match unit {
                    Some(text) => D::Unit::parse(&text).map_err(de::Error::custom)?,
                    None => D::SI_UNIT,
                };

                Ok(Quantity::new(value, unit))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
