//! Culture-sensitive number handling.
//!
//! A [`Locale`] supplies the decimal and group separators used when reading and writing numbers, and
//! [`NumberStyles`] restricts which number shapes the parser accepts.
//!
//! Numeric formatting understands these specifiers (letter followed by optional precision digits):
//!
//! | Spec  | Meaning                                                         |
//! |-------|-----------------------------------------------------------------|
//! | `G`   | general; shortest round-trip without precision, else N significant digits |
//! | `R`   | round-trip; same as bare `G`                                    |
//! | `F`   | fixed point, default two decimals                               |
//! | `N`   | fixed point with group separators, default two decimals         |
//! | `E`   | scientific `d.ddddddE+ddd`, default six decimals                |
//!
//! Lowercase letters are accepted; for `G` and `E` they select a lowercase exponent marker.

use core::ops::{BitOr, BitOrAssign};

/// Separators used when reading and writing numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Decimal separator.
    pub decimal_separator: char,
    /// Thousands group separator.
    pub group_separator: char,
}

impl Locale {
    /// Culture-independent conventions: `1,234.5`.
    pub const INVARIANT: Locale = Locale::new('.', ',');
    /// English (United States): `1,234.5`.
    pub const EN_US: Locale = Locale::new('.', ',');
    /// German (Germany): `1.234,5`.
    pub const DE_DE: Locale = Locale::new(',', '.');
    /// French (France): `1 234,5` with a no-break space.
    pub const FR_FR: Locale = Locale::new(',', '\u{a0}');

    /// A locale with custom separators.
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Which number shapes the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberStyles {
    bits: u8,
}

impl NumberStyles {
    /// Nothing but digits.
    pub const NONE: NumberStyles = NumberStyles { bits: 0 };
    /// Leading whitespace is skipped.
    pub const ALLOW_LEADING_WHITE: NumberStyles = NumberStyles { bits: 1 << 0 };
    /// Trailing whitespace is skipped.
    pub const ALLOW_TRAILING_WHITE: NumberStyles = NumberStyles { bits: 1 << 1 };
    /// A leading `+` or `-`.
    pub const ALLOW_LEADING_SIGN: NumberStyles = NumberStyles { bits: 1 << 2 };
    /// A decimal separator.
    pub const ALLOW_DECIMAL_POINT: NumberStyles = NumberStyles { bits: 1 << 3 };
    /// Group separators in the integer part.
    pub const ALLOW_THOUSANDS: NumberStyles = NumberStyles { bits: 1 << 4 };
    /// An exponent, `e` or `E`.
    pub const ALLOW_EXPONENT: NumberStyles = NumberStyles { bits: 1 << 5 };

    /// Whitespace and sign.
    pub const INTEGER: NumberStyles = Self::ALLOW_LEADING_WHITE
        .union(Self::ALLOW_TRAILING_WHITE)
        .union(Self::ALLOW_LEADING_SIGN);
    /// Integer plus decimal point and exponent.
    pub const FLOAT: NumberStyles = Self::INTEGER
        .union(Self::ALLOW_DECIMAL_POINT)
        .union(Self::ALLOW_EXPONENT);
    /// Integer plus decimal point and group separators.
    pub const NUMBER: NumberStyles = Self::INTEGER
        .union(Self::ALLOW_DECIMAL_POINT)
        .union(Self::ALLOW_THOUSANDS);
    /// Every style.
    pub const ANY: NumberStyles = Self::FLOAT.union(Self::ALLOW_THOUSANDS);
    /// Styles used by [`Quantity::parse`](crate::Quantity::parse): float plus group separators.
    pub const DEFAULT: NumberStyles = Self::FLOAT.union(Self::ALLOW_THOUSANDS);

    /// Combination of two style sets.
    pub const fn union(self, other: NumberStyles) -> NumberStyles {
        NumberStyles {
            bits: self.bits | other.bits,
        }
    }

    /// Whether every style in `other` is enabled.
    pub const fn contains(self, other: NumberStyles) -> bool {
        self.bits & other.bits == other.bits
    }
}

impl Default for NumberStyles {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for NumberStyles {
    type Output = NumberStyles;

    fn bitor(self, rhs: NumberStyles) -> NumberStyles {
        self.union(rhs)
    }
}

impl BitOrAssign for NumberStyles {
    fn bitor_assign(&mut self, rhs: NumberStyles) {
        *self = self.union(rhs);
    }
}

/// Reads a number written with `locale` separators, honouring `styles`.
///
/// Surrounding whitespace must already be removed. Returns `None` when the text is not a number in the allowed
/// styles.
pub(crate) fn parse_number(text: &str, styles: NumberStyles, locale: &Locale) -> Option<f64> {
    if let Some(value) = parse_non_finite(text, styles) {
        return Some(value);
    }

    let mut normalized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    if let Some(&sign @ ('+' | '-')) = chars.peek() {
        if !styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
            return None;
        }
        normalized.push(sign);
        chars.next();
    }

    let mut seen_digit = false;
    let mut seen_decimal = false;
    let mut seen_exponent = false;

    while let Some(ch) = chars.next() {
        if ch.is_ascii_digit() {
            seen_digit = true;
            normalized.push(ch);
        } else if ch == locale.decimal_separator && !seen_decimal && !seen_exponent {
            if !styles.contains(NumberStyles::ALLOW_DECIMAL_POINT) {
                return None;
            }
            seen_decimal = true;
            normalized.push('.');
        } else if ch == locale.group_separator && !seen_decimal && !seen_exponent {
            if !styles.contains(NumberStyles::ALLOW_THOUSANDS) || !seen_digit {
                return None;
            }
        } else if matches!(ch, 'e' | 'E') && seen_digit && !seen_exponent {
            if !styles.contains(NumberStyles::ALLOW_EXPONENT) {
                return None;
            }
            seen_exponent = true;
            normalized.push('e');
            if let Some(&sign @ ('+' | '-')) = chars.peek() {
                normalized.push(sign);
                chars.next();
            }
            if !chars.peek().is_some_and(char::is_ascii_digit) {
                return None;
            }
        } else {
            return None;
        }
    }

    if !seen_digit {
        return None;
    }

    normalized.parse::<f64>().ok()
}

/// Text written for positive infinity.
pub const INFINITY_SYMBOL: &str = "∞";
/// Text written for negative infinity.
pub const NEGATIVE_INFINITY_SYMBOL: &str = "-∞";
/// Text written for NaN.
pub const NAN_SYMBOL: &str = "NaN";

// ─────────────────────────────────────────────────────────────────────────────
// Numeric format specifiers
// ─────────────────────────────────────────────────────────────────────────────

/// A compiled numeric format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericFormat {
    General { precision: Option<usize>, upper: bool },
    Fixed(usize),
    Number(usize),
    Exponential { precision: usize, upper: bool },
}

impl NumericFormat {
    /// Compiles a specifier such as `"G"`, `"F3"` or `"e10"`. An empty string is general format.
    pub(crate) fn parse(spec: &str) -> Option<Self> {
        let mut chars = spec.chars();
        let Some(letter) = chars.next() else {
            return Some(NumericFormat::General {
                precision: None,
                upper: true,
            });
        };

        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if digits.len() <= 2 && digits.bytes().all(|b| b.is_ascii_digit()) {
            digits.parse::<usize>().ok()
        } else {
            return None;
        };

        match letter {
            'G' | 'g' => Some(NumericFormat::General {
                precision: precision.filter(|&p| p > 0),
                upper: letter == 'G',
            }),
            'R' | 'r' if precision.is_none() => Some(NumericFormat::General {
                precision: None,
                upper: true,
            }),
            'F' | 'f' => Some(NumericFormat::Fixed(precision.unwrap_or(2))),
            'N' | 'n' => Some(NumericFormat::Number(precision.unwrap_or(2))),
            'E' | 'e' => Some(NumericFormat::Exponential {
                precision: precision.unwrap_or(6),
                upper: letter == 'E',
            }),
            _ => None,
        }
    }

    /// Formats `value` with `locale` separators.
    pub(crate) fn apply(self, value: f64, locale: &Locale) -> String {
        if !value.is_finite() {
            return non_finite(value).to_owned();
        }

        match self {
            NumericFormat::General { precision, upper } => general(value, precision, upper, locale),
            NumericFormat::Fixed(decimals) => localize(&format!("{:.*}", decimals, value), locale),
            NumericFormat::Number(decimals) => grouped(value, decimals, locale),
            NumericFormat::Exponential { precision, upper } => {
                let scientific = format!("{:.*e}", precision, value);
                let (mantissa, exponent) = split_exponent(&scientific);
                format!(
                    "{}{}",
                    localize(mantissa, locale),
                    exponent_suffix(exponent, upper, 3)
                )
            }
        }
    }
}

fn general(value: f64, precision: Option<usize>, upper: bool, locale: &Locale) -> String {
    match precision {
        None => {
            let scientific = format!("{:e}", value);
            let (mantissa, exponent) = split_exponent(&scientific);
            if exponent > -5 && exponent < 15 {
                localize(&value.to_string(), locale)
            } else {
                format!(
                    "{}{}",
                    localize(mantissa, locale),
                    exponent_suffix(exponent, upper, 2)
                )
            }
        }
        Some(digits) => {
            let scientific = format!("{:.*e}", digits - 1, value);
            let (mantissa, exponent) = split_exponent(&scientific);
            if exponent > -5 && exponent < digits as i32 {
                let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
                localize(trim_fraction(&format!("{:.*}", decimals, value)), locale)
            } else {
                format!(
                    "{}{}",
                    localize(trim_fraction(mantissa), locale),
                    exponent_suffix(exponent, upper, 2)
                )
            }
        }
    }
}

/// Spelling of infinities and NaN, shared by rendering and parsing.
fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        NAN_SYMBOL
    } else if value > 0.0 {
        INFINITY_SYMBOL
    } else {
        NEGATIVE_INFINITY_SYMBOL
    }
}

fn parse_non_finite(text: &str, styles: NumberStyles) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if body.len() != text.len() && !styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
        return None;
    }

    match body {
        INFINITY_SYMBOL | "Infinity" if negative => Some(f64::NEG_INFINITY),
        INFINITY_SYMBOL | "Infinity" => Some(f64::INFINITY),
        NAN_SYMBOL => Some(f64::NAN),
        _ => None,
    }
}

fn grouped(value: f64, decimals: usize, locale: &Locale) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Splits Rust's `LowerExp` output (`"1.5e-7"`) into mantissa and exponent.
fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn exponent_suffix(exponent: i32, upper: bool, width: usize) -> String {
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}{:0width$}", marker, sign, exponent.abs(), width = width)
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn localize(text: &str, locale: &Locale) -> String {
    if locale.decimal_separator == '.' {
        text.to_owned()
    } else {
        text.replace('.', &locale.decimal_separator.to_string())
    }
}
