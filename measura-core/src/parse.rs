//! Parsing quantities and unit symbols from text.
//!
//! A quantity string is `<number><optional whitespace><unit>`, e.g. `"12.3 mol"`, `"-4.5e3 kΩ"` or `"12.3mol"`.
//! The number is read with the given [`NumberStyles`] and [`Locale`]; the unit is resolved against the units of the
//! target kind.

use crate::dimension::Dimension;
use crate::error::{ParseError, ParseResult};
use crate::number::{parse_number, Locale, NumberStyles};
use crate::quantity::Quantity;
use crate::unit::Unit;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Splits a trimmed quantity string into its numeric literal and the unit text that follows.
static QUANTITY_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<value>[+-]?(?:[\d.,'\u{00A0}\u{202F}]*\d(?:[eE][+-]?\d+)?|∞|Infinity|NaN))\s*(?P<unit>\S.*)?$",
    )
    .expect("quantity tokenizer pattern is valid")
});

/// Resolves `text` to one unit of `U`'s kind.
///
/// An exact match on a symbol or alias wins. Otherwise symbols, aliases and full names are compared
/// case-insensitively and a single matching unit is accepted.
pub fn resolve_unit<U: Unit>(text: &str) -> ParseResult<U> {
    let text = text.trim();
    let kind = <U::Dim as Dimension>::NAME;

    if let Some(&unit) = U::ALL
        .iter()
        .find(|unit| unit.symbol() == text || unit.aliases().contains(&text))
    {
        return Ok(unit);
    }

    let lowered = text.to_lowercase();
    let candidates: Vec<U> = U::ALL
        .iter()
        .copied()
        .filter(|unit| {
            core::iter::once(unit.symbol())
                .chain(unit.aliases().iter().copied())
                .chain(core::iter::once(unit.name()))
                .any(|candidate| candidate.to_lowercase() == lowered)
        })
        .collect();

    match candidates.as_slice() {
        [unit] => Ok(*unit),
        [] => Err(ParseError::UnknownUnit {
            kind,
            symbol: text.to_owned(),
        }),
        _ => Err(ParseError::AmbiguousUnit {
            kind,
            symbol: text.to_owned(),
            candidates: candidates.iter().map(|unit| unit.symbol()).collect(),
        }),
    }
}

/// Parses `text` as a number followed by a unit of `U`'s kind and hands both to `from`.
///
/// This is the engine behind every `Quantity::parse*` method.
pub fn parse<U, Q>(
    text: &str,
    styles: NumberStyles,
    locale: &Locale,
    from: impl FnOnce(f64, U) -> Q,
) -> ParseResult<Q>
where
    U: Unit,
{
    split_and_resolve(text, styles, locale)
        .map(|(value, unit)| from(value, unit))
        .inspect_err(|err| {
            debug!(
                "Failed to parse {} from '{}': {}",
                <U::Dim as Dimension>::NAME,
                text,
                err
            )
        })
}

fn split_and_resolve<U: Unit>(
    text: &str,
    styles: NumberStyles,
    locale: &Locale,
) -> ParseResult<(f64, U)> {
    let trimmed_start = text.trim_start();
    if trimmed_start.len() != text.len() && !styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        return Err(ParseError::InvalidNumber {
            text: text.to_owned(),
        });
    }
    let trimmed = trimmed_start.trim_end();
    if trimmed.len() != trimmed_start.len() && !styles.contains(NumberStyles::ALLOW_TRAILING_WHITE)
    {
        return Err(ParseError::InvalidNumber {
            text: text.to_owned(),
        });
    }
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let captures = QUANTITY_TOKENS
        .captures(trimmed)
        .ok_or_else(|| ParseError::InvalidNumber {
            text: text.to_owned(),
        })?;

    let unit_text = captures
        .name("unit")
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::MissingUnit {
            text: text.to_owned(),
        })?;
    let unit = resolve_unit::<U>(unit_text)?;

    let value_text = captures.name("value").map_or("", |m| m.as_str());
    let value = parse_number(value_text, styles, locale).ok_or_else(|| ParseError::InvalidNumber {
        text: text.to_owned(),
    })?;

    Ok((value, unit))
}

impl<D: Dimension> Quantity<D> {
    /// Parses `"<number> <unit>"` with the default number styles and invariant separators.
    ///
    /// ```rust
    /// use measura_core::{Length, ParseError};
    ///
    /// let d = Length::parse("1,250.5 km").unwrap();
    /// assert_eq!(d.metres(), 1_250_500.0);
    /// assert!(matches!(Length::parse("3 parsecs"), Err(ParseError::UnknownUnit { .. })));
    /// ```
    pub fn parse(text: &str) -> ParseResult<Self> {
        Self::parse_with(text, NumberStyles::DEFAULT, &Locale::INVARIANT)
    }

    /// Parses `"<number> <unit>"` with explicit number styles and separators.
    pub fn parse_with(text: &str, styles: NumberStyles, locale: &Locale) -> ParseResult<Self> {
        parse::<D::Unit, Self>(text, styles, locale, Self::new)
    }

    /// Like [`parse`](Self::parse), returning `None` on failure.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Like [`parse_with`](Self::parse_with), returning `None` on failure.
    pub fn try_parse_with(text: &str, styles: NumberStyles, locale: &Locale) -> Option<Self> {
        Self::parse_with(text, styles, locale).ok()
    }
}

impl<D: Dimension> core::str::FromStr for Quantity<D> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit resolution
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn resolves_symbols_and_aliases() {
        assert_eq!(resolve_unit::<AngleUnit>("°").unwrap(), AngleUnit::Degree);
        assert_eq!(resolve_unit::<AngleUnit>("deg").unwrap(), AngleUnit::Degree);
        assert_eq!(resolve_unit::<ResistanceUnit>("Ohm").unwrap(), ResistanceUnit::Ohm);
        assert_eq!(
            resolve_unit::<CapacitanceUnit>("uF").unwrap(),
            CapacitanceUnit::Microfarad
        );
    }

    #[test]
    fn exact_match_beats_case_folding() {
        assert_eq!(resolve_unit::<MassUnit>("mg").unwrap(), MassUnit::Milligram);
        assert_eq!(resolve_unit::<MassUnit>("Mg").unwrap(), MassUnit::Megagram);
        assert_eq!(resolve_unit::<DataUnit>("b").unwrap(), DataUnit::Bit);
        assert_eq!(resolve_unit::<DataUnit>("B").unwrap(), DataUnit::Byte);
    }

    #[test]
    fn case_insensitive_fallback() {
        assert_eq!(resolve_unit::<AmountOfSubstanceUnit>("MOL").unwrap(), AmountOfSubstanceUnit::Mole);
        assert_eq!(resolve_unit::<LengthUnit>("Kilometres").unwrap(), LengthUnit::Kilometre);
        assert_eq!(resolve_unit::<AreaUnit>("square metres").unwrap(), AreaUnit::SquareMetre);
    }

    #[test]
    fn ambiguous_case_folding_is_rejected() {
        match resolve_unit::<MassUnit>("MG") {
            Err(ParseError::AmbiguousUnit {
                kind, candidates, ..
            }) => {
                assert_eq!(kind, "Mass");
                assert!(candidates.contains(&"mg"));
                assert!(candidates.contains(&"Mg"));
            }
            other => panic!("expected ambiguous unit, got {:?}", other),
        }
    }

    #[test]
    fn unknown_unit_names_the_kind() {
        let err = resolve_unit::<TimeUnit>("fortnight").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownUnit {
                kind: "Time",
                symbol: "fortnight".to_owned()
            }
        );
        assert_eq!(err.to_string(), "unknown Time unit 'fortnight'");
    }

    #[test]
    fn unit_from_str() {
        let unit: SpeedUnit = "km/h".parse().unwrap();
        assert_eq!(unit, SpeedUnit::KilometrePerHour);
        assert!("furlongs".parse::<SpeedUnit>().is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parses_with_and_without_space() {
        assert_relative_eq!(AmountOfSubstance::parse("12.3 mol").unwrap().moles(), 12.3);
        assert_relative_eq!(AmountOfSubstance::parse("12.3mol").unwrap().moles(), 12.3);
        assert_relative_eq!(
            RotationalAcceleration::parse("2 rad/s²").unwrap().radians_per_second_squared(),
            2.0
        );
    }

    #[test]
    fn parses_signs_and_exponents() {
        assert_relative_eq!(Resistance::parse("-4.5e3 kΩ").unwrap().ohms(), -4.5e6);
        assert_relative_eq!(Energy::parse("+1E-3 J").unwrap().joules(), 1e-3);
        assert_relative_eq!(Energy::parse("5eV").unwrap().electronvolts(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn parses_localized_numbers() {
        let de = Length::parse_with("1.234,5 m", NumberStyles::DEFAULT, &Locale::DE_DE).unwrap();
        assert_relative_eq!(de.metres(), 1234.5);

        let fr = Length::parse_with("1\u{a0}234,5 m", NumberStyles::DEFAULT, &Locale::FR_FR).unwrap();
        assert_relative_eq!(fr.metres(), 1234.5);
    }

    #[test]
    fn number_styles_are_enforced() {
        assert!(Length::parse_with(" 5 m", NumberStyles::NONE, &Locale::INVARIANT).is_err());
        assert!(Length::parse_with("5 m ", NumberStyles::NONE, &Locale::INVARIANT).is_err());
        assert!(Length::parse_with("-5 m", NumberStyles::NONE, &Locale::INVARIANT).is_err());
        assert!(Length::parse_with("1,000 m", NumberStyles::FLOAT, &Locale::INVARIANT).is_err());
        assert_relative_eq!(
            Length::parse_with("  5 m  ", NumberStyles::INTEGER, &Locale::INVARIANT)
                .unwrap()
                .metres(),
            5.0
        );
    }

    #[test]
    fn failures_identify_the_broken_part() {
        assert_eq!(Length::parse("   "), Err(ParseError::Empty));
        assert!(matches!(Length::parse("abc m"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(Length::parse("1.2.3 m"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(Length::parse("42"), Err(ParseError::MissingUnit { .. })));
        assert!(matches!(
            AmountOfSubstance::parse("5 xyz"),
            Err(ParseError::UnknownUnit { kind: "AmountOfSubstance", .. })
        ));
    }

    #[test]
    fn try_parse_returns_none_on_failure() {
        assert!(AmountOfSubstance::try_parse("5 xyz").is_none());
        assert_eq!(
            AmountOfSubstance::try_parse("5 mmol"),
            Some(AmountOfSubstance::from_millimoles(5.0))
        );
    }

    #[test]
    fn from_str_uses_default_styles() {
        let t: Time = "90 min".parse().unwrap();
        assert_relative_eq!(t.hours(), 1.5);
    }

    #[test]
    fn generic_engine_accepts_any_factory() {
        let pair = parse::<VoltageUnit, _>("3 mV", NumberStyles::DEFAULT, &Locale::INVARIANT, |v, u| {
            (v, u)
        })
        .unwrap();
        assert_eq!(pair, (3.0, VoltageUnit::Millivolt));
    }

    #[test]
    fn non_finite_values_round_trip() {
        let up = Length::from_si(f64::INFINITY);
        assert_eq!(up.to_string(), "∞ m");
        assert_eq!(Length::parse(&up.to_string()).unwrap(), up);

        let down = Length::from_si(f64::NEG_INFINITY);
        assert_eq!(down.to_string(), "-∞ m");
        assert_eq!(Length::parse(&down.to_string()).unwrap(), down);

        let nan = Length::NAN;
        assert_eq!(nan.to_string(), "NaN m");
        assert!(Length::parse(&nan.to_string()).unwrap().si_value().is_nan());

        assert_eq!(Length::parse("-Infinity km").unwrap(), down);
        assert!(matches!(Length::parse("inf m"), Err(ParseError::InvalidNumber { .. })));
    }
}
