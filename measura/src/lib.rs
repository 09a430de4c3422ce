//! Strongly typed SI physical quantities.
//!
//! `measura` is the user-facing crate in this workspace. It re-exports the full API from `measura-core`: the
//! [`Quantity`] type, thirty predefined kinds with their unit tables, the cross-kind operators, and culture-aware
//! parsing and formatting.
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is a zero-sized tag naming the kind (length, mass,
//! voltage, …). The magnitude is stored once, in the SI unit of the kind, so values built from different units
//! compare and combine directly.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add metres to seconds).
//! - Makes unit conversion a lookup: `Length::from_feet(3.0).metres()`.
//! - Lets physically meaningful products and quotients produce the right kind (`Resistance * Current = Voltage`).
//! - Reads and writes `"<number> <unit>"` strings under a chosen [`Locale`].
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary dimensional analysis; only the declared kinds and relations exist.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Affine units such as degrees Celsius.
//!
//! # Quick start
//!
//! ```rust
//! use measura::{Current, Resistance, Voltage, VoltageUnit};
//!
//! let v: Voltage = Resistance::from_ohms(4.0) * Current::from_amperes(1.5);
//! assert_eq!(v.volts(), 6.0);
//! assert_eq!(v.to_string_in(VoltageUnit::Millivolt), "6000 mV");
//! ```
//!
//! Parse with a culture:
//!
//! ```rust
//! use measura::{Locale, Mass, NumberStyles};
//!
//! let m = Mass::parse_with("1.234,5 g", NumberStyles::DEFAULT, &Locale::DE_DE).unwrap();
//! assert!((m.grams() - 1234.5).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measura::{Length, Time};
//!
//! let d = Length::from_metres(1.0);
//! let t = Time::from_seconds(1.0);
//! let _ = d + t; // cannot add different kinds
//! ```
//!
//! # Modules
//!
//! Kinds live under [`units`], one module per kind, and are also re-exported at the crate root:
//!
//! - `measura::units::length` (`Length`, `LengthUnit`, `LengthDim`)
//! - `measura::units::angle` (trig and wrapping helpers)
//! - `measura::units::relations` (the table of cross-kind operators)
//! - … and the remaining kinds listed in [`units`].
//!
//! # Feature flags
//!
//! - `xml` (default): `Value` attribute reading and writing.
//! - `serde`: enables `serde` support for `Quantity<D>`; serialization is the raw SI `f64` value only.
//!
//! # Panics and errors
//!
//! Arithmetic and conversions never fail and follow IEEE-754 behavior. Parsing returns [`ParseError`]; XML reading
//! returns `XmlError`. [`Quantity::equals`] panics when the tolerance is not positive.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use measura_core::*;
