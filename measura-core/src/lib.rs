//! Core type system for strongly typed physical quantities.
//!
//! `measura-core` provides the quantity model and the predefined SI kinds:
//!
//! - A *kind* (length, mass, voltage, …) is a zero-sized tag type implementing [`Dimension`].
//! - Each kind has a table of units, an enum implementing [`Unit`], with one unit marked as the SI unit.
//! - A value of a kind is a [`Quantity<D>`], which stores its magnitude in the SI unit as an `f64`.
//! - Conversion is a ratio: a value in unit `u` is `value * u.ratio()` in SI.
//!
//! Most users should depend on `measura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of kinds: `Length + Time` does not compile.
//! - Unit-independent equality, ordering and arithmetic, since everything is stored in SI.
//! - A closed table of physically meaningful products and quotients (`Resistance * Current = Voltage`).
//! - Culture-aware formatting and parsing of `"<number> <unit>"` strings.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Affine units such as temperature scales.
//! - Arbitrary dimensional analysis; only the kinds and relations declared in [`units`] exist.
//!
//! # Quick start
//!
//! ```rust
//! use measura_core::{Length, LengthUnit, Speed, Time};
//!
//! let d = Length::from_kilometres(1.25);
//! assert_eq!(d.metres(), 1250.0);
//! assert_eq!(d.value_in(LengthUnit::Centimetre), 125_000.0);
//!
//! let v: Speed = Length::from_metres(100.0) / Time::from_seconds(20.0);
//! assert_eq!(v.metres_per_second(), 5.0);
//!
//! let parsed: Length = "2.5 km".parse().unwrap();
//! assert_eq!(parsed.to_string_in(LengthUnit::Kilometre), "2.5 km");
//! ```
//!
//! # Feature flags
//!
//! - `xml` (default): attribute-based XML reading and writing via `quick-xml`.
//! - `serde`: enables `serde` support for `Quantity<D>`; serialization is the raw SI `f64` value only. The
//!   [`serde_with_unit`] helper keeps the unit symbol alongside.
//!
//! # Panics and errors
//!
//! Arithmetic and conversions never fail; they follow IEEE-754 behavior (NaN and infinities propagate). Parsing
//! returns [`ParseError`]. XML reading returns `XmlError`. [`Quantity::equals`] panics on a non-positive tolerance.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod macros;
mod quantity;
mod unit;

pub mod format;
pub mod number;
pub mod parse;

#[cfg(feature = "xml")]
mod xml;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use error::{ParseError, ParseResult};
pub use format::{cached_format, QuantityDisplay, QuantityFormat, UnitSymbolStyle, DEFAULT_VALUE_FORMAT};
pub use number::{Locale, NumberStyles};
pub use quantity::Quantity;
pub use unit::Unit;

#[cfg(feature = "xml")]
pub use error::{XmlError, XmlResult};
#[cfg(feature = "xml")]
pub use xml::VALUE_ATTRIBUTE;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantity kinds.
///
/// These are defined in `measura-core` so the cross-kind operators can be implemented without running into Rust's
/// orphan rules.
pub mod units;

pub use units::*;
