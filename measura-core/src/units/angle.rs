//! Plane angle units plus wrapping and trig helpers.
//!
//! The SI unit is the [`Radian`](AngleUnit::Radian). Degrees, arc minutes and arc seconds accept the ASCII aliases
//! `deg`, `arcmin` and `arcsec` alongside `°`, `′` and `″`.
//!
//! ```rust
//! use measura_core::{Angle, AngleUnit};
//!
//! let a = Angle::from_degrees(-30.0).normalized();
//! assert!((a.degrees() - 330.0).abs() < 1e-9);
//! assert!((Angle::from_degrees(30.0).sin() - 0.5).abs() < 1e-12);
//! assert_eq!(AngleUnit::Revolution.to_string(), "r");
//! ```

use core::f64::consts::{PI, TAU};

use crate::Quantity;
use measura_derive::Unit;

/// Dimension tag for [`Angle`].
#[derive(Debug)]
pub enum AngleDim {}

/// Units of [`Angle`].
#[derive(Clone, Copy, Debug, Unit)]
#[unit(dimension = AngleDim, name = "Angle")]
pub enum AngleUnit {
    /// Radian.
    #[unit(symbol = "rad", ratio = 1.0, si)]
    Radian,
    /// Milliradian.
    #[unit(symbol = "mrad", ratio = 1e-3)]
    Milliradian,
    /// Microradian.
    #[unit(symbol = "µrad", alias = "urad", ratio = 1e-6)]
    Microradian,
    /// Degree, `π/180 rad`.
    #[unit(symbol = "°", alias = "deg", ratio = PI / 180.0)]
    Degree,
    /// Minute of arc.
    #[unit(symbol = "′", alias = "arcmin", ratio = PI / 10_800.0)]
    Arcminute,
    /// Second of arc.
    #[unit(symbol = "″", alias = "arcsec", ratio = PI / 648_000.0)]
    Arcsecond,
    /// Gradian; a right angle is 100 gon.
    #[unit(symbol = "gon", alias = "grad", ratio = PI / 200.0)]
    Gradian,
    /// Full turn.
    #[unit(symbol = "r", alias = "rev", alias = "turn", ratio = TAU)]
    Revolution,
}

/// A plane angle, stored in radians.
pub type Angle = Quantity<AngleDim>;

impl Quantity<AngleDim> {
    /// One full revolution.
    pub const FULL_TURN: Angle = Angle::from_si(TAU);
    /// Half a revolution.
    pub const HALF_TURN: Angle = Angle::from_si(PI);
    /// A right angle.
    pub const QUARTER_TURN: Angle = Angle::from_si(PI / 2.0);

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.si_value().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.si_value().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.si_value().tan()
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.si_value().sin_cos()
    }

    /// Wrap into `[0, FULL_TURN)` using Euclidean remainder.
    ///
    /// IEEE-754 note: `NaN`/`±∞` inputs produce `NaN`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_si(self.si_value().rem_euclid(TAU))
    }

    /// Wrap into the signed range `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let y = (self.si_value() + PI).rem_euclid(TAU) - PI;
        Self::from_si(if y <= -PI { y + TAU } else { y })
    }

    /// Signed smallest separation from `other`, in `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }

    /// Absolute smallest separation from `other`.
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::FRAC_PI_2;

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn degree_ratio() {
        assert_relative_eq!(Angle::from_degrees(180.0).radians(), PI, max_relative = 1e-12);
        assert_relative_eq!(Angle::from_radians(FRAC_PI_2).degrees(), 90.0, max_relative = 1e-12);
    }

    #[test]
    fn arc_subdivisions() {
        assert_relative_eq!(Angle::from_degrees(1.0).arcminutes(), 60.0, max_relative = 1e-12);
        assert_relative_eq!(Angle::from_arcminutes(1.0).arcseconds(), 60.0, max_relative = 1e-12);
        assert_relative_eq!(Angle::from_gradians(100.0).degrees(), 90.0, max_relative = 1e-12);
        assert_relative_eq!(Angle::from_revolutions(0.5).radians(), PI);
    }

    #[test]
    fn si_unit_and_symbols() {
        assert!(AngleUnit::Radian.is_si());
        assert!(!AngleUnit::Degree.is_si());
        assert_eq!(AngleUnit::Degree.symbol(), "°");
        assert_eq!(AngleUnit::Degree.aliases(), &["deg"]);
        assert_eq!(AngleUnit::Arcsecond.name(), "arcseconds");
        assert_eq!(AngleUnit::ALL.len(), 8);
    }

    #[test]
    fn units_compare_by_symbol() {
        assert_eq!(AngleUnit::Degree, AngleUnit::Degree);
        assert_ne!(AngleUnit::Degree, AngleUnit::Gradian);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trig and wrapping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn trig_functions() {
        let a = Angle::from_degrees(60.0);
        assert_abs_diff_eq!(a.cos(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a.sin(), 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::from_degrees(45.0).tan(), 1.0, epsilon = 1e-12);

        let (s, c) = a.sin_cos();
        assert_abs_diff_eq!(s, a.sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(c, a.cos(), epsilon = 1e-15);
    }

    #[test]
    fn normalized_wraps_into_one_turn() {
        assert_abs_diff_eq!(Angle::from_degrees(370.0).normalized().degrees(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::from_degrees(-10.0).normalized().degrees(), 350.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::from_degrees(720.0).normalized().degrees(), 0.0, epsilon = 1e-9);
        assert!(Angle::NAN.normalized().si_value().is_nan());
    }

    #[test]
    fn wrap_signed_range() {
        assert_abs_diff_eq!(Angle::from_degrees(190.0).wrap_signed().degrees(), -170.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::from_degrees(-190.0).wrap_signed().degrees(), 170.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::HALF_TURN.wrap_signed().si_value(), PI, epsilon = 1e-12);
    }

    #[test]
    fn separations() {
        let a = Angle::from_degrees(350.0);
        let b = Angle::from_degrees(10.0);
        assert_abs_diff_eq!(a.signed_separation(b).degrees(), -20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.signed_separation(a).degrees(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.abs_separation(b).degrees(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn tolerance_equality() {
        let a = Angle::from_radians(1.0);
        assert!(a.equals(Angle::from_radians(1.000_000_1), Angle::from_radians(0.001)));
        assert!(!a.equals(Angle::from_radians(1.1), Angle::from_radians(0.001)));
    }

    #[test]
    #[should_panic(expected = "tolerance must be greater than zero")]
    fn zero_tolerance_panics() {
        let a = Angle::from_radians(1.0);
        let _ = a.equals(Angle::from_radians(1.0), Angle::from_radians(0.0));
    }
}
