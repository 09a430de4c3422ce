//! Rendering quantities as text.
//!
//! Every rendering goes through a compiled [`QuantityFormat`]: a numeric format specifier, the unit text and an
//! optional alignment. Compiled formats are memoized process-wide per `(value format, unit text)` pair, so repeated
//! calls with the same inputs share one `Arc<QuantityFormat>`.
//!
//! A value format is `[<signed width>:]<spec>[ <unit symbol>]`, for example `"F2"`, `"E3"`, `"12:N0"` or
//! `"F2 mmol"`. See [`crate::number`] for the specifiers. A trailing unit symbol selects the unit the number is
//! converted to and written with. Unrecognized formats never fail; they render as `{<format>?} <unit>`.

use crate::dimension::Dimension;
use crate::number::{Locale, NumericFormat};
use crate::quantity::Quantity;
use crate::unit::Unit;
use core::fmt::{self, Write};
use dashmap::DashMap;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Value format used when none is given: shortest round-trip representation.
pub const DEFAULT_VALUE_FORMAT: &str = "G";

/// Widest alignment a value format may request.
pub const MAX_ALIGNMENT: i32 = 256;

/// How the unit is written after the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSymbolStyle {
    /// The unit symbol, e.g. `km`.
    #[default]
    Abbreviation,
    /// The full plural unit name, e.g. `kilometres`.
    Name,
}

impl UnitSymbolStyle {
    /// Text this style uses for `unit`.
    pub fn unit_text<U: Unit>(self, unit: U) -> &'static str {
        match self {
            UnitSymbolStyle::Abbreviation => unit.symbol(),
            UnitSymbolStyle::Name => unit.name(),
        }
    }
}

/// A compiled `"<number> <unit>"` format.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityFormat {
    source: String,
    numeric: Option<NumericFormat>,
    unit_text: &'static str,
    alignment: i32,
}

impl QuantityFormat {
    /// Compiles `value_format` for a unit written as `unit_text`.
    ///
    /// Compilation never fails; an unrecognized format is kept and rendered as a placeholder.
    pub fn compile(value_format: &str, unit_text: &'static str) -> Self {
        let (alignment, spec) = match value_format.split_once(':') {
            Some((width, spec)) => match width.trim().parse::<i32>() {
                Ok(width) => (width.clamp(-MAX_ALIGNMENT, MAX_ALIGNMENT), Some(spec)),
                Err(_) => (0, None),
            },
            None => (0, Some(value_format)),
        };

        QuantityFormat {
            source: value_format.to_owned(),
            numeric: spec.and_then(|spec| NumericFormat::parse(spec.trim())),
            unit_text,
            alignment,
        }
    }

    /// The value format this was compiled from.
    pub fn value_format(&self) -> &str {
        &self.source
    }

    /// Unit text appended after the number.
    pub fn unit_text(&self) -> &'static str {
        self.unit_text
    }

    /// Field width; positive right-aligns, negative left-aligns. Bounded by [`MAX_ALIGNMENT`].
    pub fn alignment(&self) -> i32 {
        self.alignment
    }

    /// Whether the value format was understood.
    pub fn is_valid(&self) -> bool {
        self.numeric.is_some()
    }

    /// Renders `value` (already expressed in the unit) with `locale` separators.
    pub fn render(&self, value: f64, locale: &Locale) -> String {
        let text = match self.numeric {
            Some(numeric) => format!("{} {}", numeric.apply(value, locale), self.unit_text),
            None => {
                warn!(
                    "Unrecognized value format '{}' for unit '{}'",
                    self.source, self.unit_text
                );
                format!("{{{}?}} {}", self.source, self.unit_text)
            }
        };

        let width = self.alignment.unsigned_abs() as usize;
        if self.alignment > 0 {
            format!("{:>width$}", text, width = width)
        } else if self.alignment < 0 {
            format!("{:<width$}", text, width = width)
        } else {
            text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FormatKey {
    value_format: String,
    unit_text: &'static str,
}

static FORMAT_CACHE: Lazy<DashMap<FormatKey, Arc<QuantityFormat>>> = Lazy::new(DashMap::new);

/// Returns the memoized format for `(value_format, unit_text)`, compiling it on first use.
pub fn cached_format(value_format: &str, unit_text: &'static str) -> Arc<QuantityFormat> {
    let key = FormatKey {
        value_format: value_format.to_owned(),
        unit_text,
    };

    if let Some(hit) = FORMAT_CACHE.get(&key) {
        return Arc::clone(hit.value());
    }

    let entry = FORMAT_CACHE.entry(key).or_insert_with(|| {
        trace!(
            "Compiling quantity format '{}' for unit '{}'",
            value_format,
            unit_text
        );
        Arc::new(QuantityFormat::compile(value_format, unit_text))
    });
    Arc::clone(entry.value())
}

// ─────────────────────────────────────────────────────────────────────────────
// Display adapter
// ─────────────────────────────────────────────────────────────────────────────

/// A quantity bound to a unit and formatting options, ready to be displayed.
///
/// Created by [`Quantity::display_in`].
///
/// ```rust
/// use measura_core::{Length, LengthUnit, Locale, UnitSymbolStyle};
///
/// let d = Length::from_metres(1234.5);
/// assert_eq!(d.display_in(LengthUnit::Kilometre).to_string(), "1.2345 km");
/// assert_eq!(
///     d.display_in(LengthUnit::Metre).format("N1").locale(Locale::DE_DE).to_string(),
///     "1.234,5 m"
/// );
/// assert_eq!(
///     d.display_in(LengthUnit::Kilometre).format("F1").style(UnitSymbolStyle::Name).to_string(),
///     "1.2 kilometres"
/// );
/// ```
#[derive(Debug)]
pub struct QuantityDisplay<D: Dimension> {
    quantity: Quantity<D>,
    unit: D::Unit,
    value_format: String,
    style: UnitSymbolStyle,
    locale: Locale,
}

impl<D: Dimension> QuantityDisplay<D> {
    /// Sets the value format, e.g. `"F2"` or `"10:E3"`.
    pub fn format(mut self, value_format: impl Into<String>) -> Self {
        self.value_format = value_format.into();
        self
    }

    /// Sets how the unit is written.
    pub fn style(mut self, style: UnitSymbolStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the number separators.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The compiled format this display renders with.
    pub fn compiled(&self) -> Arc<QuantityFormat> {
        self.resolve().1
    }

    /// Picks the unit named by a trailing symbol in the value format, if any, and the format to render with.
    fn resolve(&self) -> (D::Unit, Arc<QuantityFormat>) {
        if let Some((numeric, symbol)) = split_unit_symbol(&self.value_format) {
            match D::Unit::parse(symbol) {
                Ok(unit) => return (unit, cached_format(&numeric, self.style.unit_text(unit))),
                Err(err) => debug!("Value format '{}' names no {} unit: {}", self.value_format, D::NAME, err),
            }
        }
        (
            self.unit,
            cached_format(&self.value_format, self.style.unit_text(self.unit)),
        )
    }
}

/// Splits `"[width:]spec symbol"` into `"[width:]spec"` and `"symbol"`.
fn split_unit_symbol(value_format: &str) -> Option<(String, &str)> {
    let (width, rest) = match value_format.split_once(':') {
        Some((width, rest)) => (&value_format[..=width.len()], rest),
        None => ("", value_format),
    };
    let (spec, symbol) = rest.trim_start().split_once(char::is_whitespace)?;
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return None;
    }
    Some((format!("{}{}", width, spec), symbol))
}

/// Pads `text` to the formatter's width honouring fill and alignment. Precision is not applied to the text.
fn pad(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let len = text.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(text),
    };
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Left) | None => (0, padding),
    };

    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(text)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

impl<D: Dimension> fmt::Display for QuantityDisplay<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (unit, format) = self.resolve();
        let value = self.quantity.value_in(unit);
        pad(f, &format.render(value, &self.locale))
    }
}

impl<D: Dimension> Quantity<D> {
    /// Displays this quantity in `unit`, with options set through the returned builder.
    pub fn display_in(self, unit: D::Unit) -> QuantityDisplay<D> {
        QuantityDisplay {
            quantity: self,
            unit,
            value_format: DEFAULT_VALUE_FORMAT.to_owned(),
            style: UnitSymbolStyle::default(),
            locale: Locale::default(),
        }
    }

    /// Formats this quantity in `unit` with the round-trip value format.
    ///
    /// ```rust
    /// use measura_core::{Length, LengthUnit};
    /// assert_eq!(Length::from_metres(2500.0).to_string_in(LengthUnit::Kilometre), "2.5 km");
    /// ```
    pub fn to_string_in(self, unit: D::Unit) -> String {
        self.display_in(unit).to_string()
    }

    /// Formats this quantity in `unit` with an explicit value format.
    ///
    /// A unit symbol after the specifier overrides `unit`:
    ///
    /// ```rust
    /// use measura_core::{AmountOfSubstance, AmountOfSubstanceUnit};
    ///
    /// let q = AmountOfSubstance::from_moles(12.3456);
    /// assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Mole, "F2"), "12.35 mol");
    /// assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Millimole, "F2 mol"), "12.35 mol");
    /// ```
    pub fn to_string_with(self, unit: D::Unit, value_format: &str) -> String {
        self.display_in(unit).format(value_format).to_string()
    }
}

/// Renders in the SI unit. A precision (`{:.3}`) selects fixed-point with that many decimals.
impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = self.display_in(D::SI_UNIT);
        match f.precision() {
            Some(decimals) => fmt::Display::fmt(&display.format(format!("F{}", decimals)), f),
            None => fmt::Display::fmt(&display, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AmountOfSubstance, AmountOfSubstanceUnit, Length, LengthUnit, Voltage, VoltageUnit};

    // ─────────────────────────────────────────────────────────────────────────────
    // QuantityFormat
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn compile_plain_and_aligned() {
        let plain = QuantityFormat::compile("F2", "mol");
        assert!(plain.is_valid());
        assert_eq!(plain.alignment(), 0);
        assert_eq!(plain.render(12.345_6, &Locale::INVARIANT), "12.35 mol");

        let right = QuantityFormat::compile("10:F1", "m");
        assert_eq!(right.alignment(), 10);
        assert_eq!(right.render(2.0, &Locale::INVARIANT), "     2.0 m");

        let left = QuantityFormat::compile("-8:F0", "s");
        assert_eq!(left.render(3.0, &Locale::INVARIANT), "3 s     ");
    }

    #[test]
    fn unrecognized_format_renders_placeholder() {
        let broken = QuantityFormat::compile("Q7", "rad/s³");
        assert!(!broken.is_valid());
        assert_eq!(broken.render(1.0, &Locale::INVARIANT), "{Q7?} rad/s³");

        let bad_width = QuantityFormat::compile("wide:F2", "m");
        assert!(!bad_width.is_valid());
        assert_eq!(bad_width.render(1.0, &Locale::INVARIANT), "{wide:F2?} m");
    }

    #[test]
    fn alignment_is_bounded() {
        let wide = QuantityFormat::compile("999999999:F2", "m");
        assert!(wide.is_valid());
        assert_eq!(wide.alignment(), MAX_ALIGNMENT);
        assert_eq!(wide.render(1.0, &Locale::INVARIANT).len(), MAX_ALIGNMENT as usize);

        let narrow = QuantityFormat::compile("-999999999:F2", "m");
        assert_eq!(narrow.alignment(), -MAX_ALIGNMENT);
    }

    #[test]
    fn split_trailing_unit_symbol() {
        assert_eq!(split_unit_symbol("F2 mol"), Some(("F2".to_owned(), "mol")));
        assert_eq!(split_unit_symbol("12:F0  mmol "), Some(("12:F0".to_owned(), "mmol")));
        assert_eq!(split_unit_symbol("G gal (U.S.)"), Some(("G".to_owned(), "gal (U.S.)")));
        assert_eq!(split_unit_symbol("F2"), None);
        assert_eq!(split_unit_symbol("F2   "), None);
        assert_eq!(split_unit_symbol("10: F2"), None);
    }

    #[test]
    fn empty_format_is_general() {
        let general = QuantityFormat::compile("", "V");
        assert_eq!(general.render(0.25, &Locale::INVARIANT), "0.25 V");
    }

    #[test]
    fn cache_returns_shared_instance() {
        let a = cached_format("E3", "Ω");
        let b = cached_format("E3", "Ω");
        assert!(Arc::ptr_eq(&a, &b));

        let other_unit = cached_format("E3", "kΩ");
        assert!(!Arc::ptr_eq(&a, &other_unit));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_uses_si_unit() {
        assert_eq!(Length::from_kilometres(1.5).to_string(), "1500 m");
        assert_eq!(format!("{:.2}", Voltage::from_millivolts(1234.0)), "1.23 V");
    }

    #[test]
    fn display_in_other_units() {
        let v = Voltage::from_volts(0.5);
        assert_eq!(v.to_string_in(VoltageUnit::Millivolt), "500 mV");
        assert_eq!(v.to_string_with(VoltageUnit::Volt, "E2"), "5.00E-001 V");
        assert_eq!(
            v.display_in(VoltageUnit::Millivolt)
                .style(UnitSymbolStyle::Name)
                .to_string(),
            "500 millivolts"
        );
    }

    #[test]
    fn display_localized() {
        let d = Length::from_metres(1234567.25);
        assert_eq!(
            d.display_in(LengthUnit::Metre)
                .format("N2")
                .locale(Locale::FR_FR)
                .to_string(),
            "1\u{a0}234\u{a0}567,25 m"
        );
    }

    #[test]
    fn display_in_shares_cached_format() {
        let d = Length::from_metres(1.0);
        let a = d.display_in(LengthUnit::Centimetre).format("F3").compiled();
        let b = d.display_in(LengthUnit::Centimetre).format("F3").compiled();
        assert!(Arc::ptr_eq(&a, &b));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Value formats naming a unit
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn format_symbol_selects_unit() {
        let q = AmountOfSubstance::from_moles(12.345_6);
        assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Mole, "F2 mol"), "12.35 mol");
        assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Millimole, "F2 mol"), "12.35 mol");
        assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Mole, "F1 mmol"), "12345.6 mmol");
        assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Mole, "12:F0 mmol"), "  12346 mmol");
    }

    #[test]
    fn format_symbol_follows_style() {
        let q = AmountOfSubstance::from_moles(12.345_6);
        let text = q
            .display_in(AmountOfSubstanceUnit::Mole)
            .format("F0 mmol")
            .style(UnitSymbolStyle::Name)
            .to_string();
        assert_eq!(text, "12346 millimoles");
    }

    #[test]
    fn unknown_format_symbol_renders_placeholder() {
        let q = AmountOfSubstance::from_moles(1.0);
        assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Mole, "F2 xyz"), "{F2 xyz?} mol");
        assert_eq!(q.to_string_with(AmountOfSubstanceUnit::Mole, "Q2 mol"), "{Q2?} mol");
    }

    #[test]
    fn format_symbol_shares_cached_format() {
        let q = AmountOfSubstance::from_moles(1.0);
        let a = q.display_in(AmountOfSubstanceUnit::Mole).format("F3 mmol").compiled();
        let b = cached_format("F3", "mmol");
        assert!(Arc::ptr_eq(&a, &b));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formatter width and fill
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn formatter_width_pads_output() {
        let d = Length::from_metres(2.0);
        assert_eq!(format!("{:>8}", d), "     2 m");
        assert_eq!(format!("{:<6}|", d), "2 m   |");
        assert_eq!(format!("{:*^9.1}", d), "**2.0 m**");
        assert_eq!(format!("{:2}", d), "2 m");
        assert_eq!(format!("{:>6}", d.display_in(LengthUnit::Centimetre)), "200 cm");
        assert_eq!(format!("{:>7}", d.display_in(LengthUnit::Centimetre)), " 200 cm");
    }
}
