//! Cross-kind `*` and `/` operators.
//!
//! The table is closed: only the pairs listed here combine, and each combines into exactly one kind. A product
//! `A * B = C` is available in both operand orders together with `C / A = B` and `C / B = A`.
//!
//! ```rust
//! use measura_core::{Current, Resistance, Voltage};
//!
//! let v: Voltage = Resistance::from_ohms(4.0) * Current::from_amperes(2.0);
//! assert_eq!(v, Voltage::from_volts(8.0));
//! assert_eq!(v / Resistance::from_ohms(4.0), Current::from_amperes(2.0));
//! ```

use super::*;
use crate::macros::{product, quotient, square};

// Chemistry
quotient!(AmountOfSubstance, Time => CatalyticActivity);

// Electrical circuits
product!(Resistance, Current => Voltage);
product!(Voltage, ElectricalConductance => Current);
product!(Capacitance, Frequency => ElectricalConductance);
product!(Capacitance, Voltage => ElectricCharge);
product!(Current, Time => ElectricCharge);
product!(Voltage, Current => Power);
product!(ElectricCharge, Voltage => Energy);

// Magnetism
quotient!(MagneticFlux, Area => MagneticFieldStrength);
product!(Inductance, Current => MagneticFlux);

// Geometry
square!(Length => Area);
product!(Area, Length => Volume);

// Kinematics
quotient!(Length, Time => Speed);
quotient!(Speed, Time => Acceleration);
quotient!(Acceleration, Time => Jerk);

// Rotation
quotient!(Angle, Time => RotationalSpeed);
quotient!(RotationalSpeed, Time => RotationalAcceleration);

// Mechanics
product!(Mass, Acceleration => Force);
quotient!(Force, Area => Pressure);
product!(Force, Length => Energy);
product!(Force, Speed => Power);
product!(Pressure, Volume => Energy);
product!(Power, Time => Energy);

// Materials
quotient!(Mass, Volume => Density);
quotient!(Volume, Mass => SpecificVolume);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Exact products of SI magnitudes
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn catalytic_activity_from_amount_over_time() {
        assert_eq!(
            AmountOfSubstance::from_moles(10.0) / Time::from_seconds(2.0),
            CatalyticActivity::from_katals(5.0)
        );
        assert_eq!(
            CatalyticActivity::from_katals(5.0) * Time::from_seconds(2.0),
            AmountOfSubstance::from_moles(10.0)
        );
    }

    #[test]
    fn conductance_from_capacitance_and_frequency() {
        let g = Capacitance::from_farads(2.0) * Frequency::from_hertz(3.0);
        assert_eq!(g, ElectricalConductance::from_siemens(6.0));
        assert_eq!(Frequency::from_hertz(3.0) * Capacitance::from_farads(2.0), g);
        assert_eq!(g / Frequency::from_hertz(3.0), Capacitance::from_farads(2.0));
    }

    #[test]
    fn ohms_law() {
        let v = Resistance::from_ohms(4.0) * Current::from_amperes(2.0);
        assert_eq!(v, Voltage::from_volts(8.0));
        assert_eq!(Current::from_amperes(2.0) * Resistance::from_ohms(4.0), v);
        assert_eq!(v / Current::from_amperes(2.0), Resistance::from_ohms(4.0));
        assert_eq!(
            v * ElectricalConductance::from_siemens(0.25),
            Current::from_amperes(2.0)
        );
    }

    #[test]
    fn flux_density_from_flux_over_area() {
        assert_eq!(
            MagneticFlux::from_webers(6.0) / Area::from_square_metres(2.0),
            MagneticFieldStrength::from_teslas(3.0)
        );
        assert_eq!(
            Inductance::from_henries(0.5) * Current::from_amperes(4.0),
            MagneticFlux::from_webers(2.0)
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mixed units go through SI
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kinematics_chain() {
        let v = Length::from_kilometres(36.0) / Time::from_hours(1.0);
        assert_relative_eq!(v.metres_per_second(), 10.0, max_relative = 1e-12);

        let a = v / Time::from_seconds(4.0);
        assert_relative_eq!(a.metres_per_second_squared(), 2.5, max_relative = 1e-12);

        let j = a / Time::from_milliseconds(500.0);
        assert_relative_eq!(j.metres_per_second_cubed(), 5.0, max_relative = 1e-12);

        let t = Length::from_metres(100.0) / Speed::from_metres_per_second(4.0);
        assert_relative_eq!(t.seconds(), 25.0);
    }

    #[test]
    fn geometry() {
        let area = Length::from_metres(3.0) * Length::from_centimetres(50.0);
        assert_relative_eq!(area.square_metres(), 1.5);
        assert_relative_eq!((area / Length::from_metres(3.0)).metres(), 0.5);

        let volume = area * Length::from_metres(2.0);
        assert_relative_eq!(volume.cubic_metres(), 3.0);
        assert_relative_eq!(volume.litres(), 3000.0, max_relative = 1e-12);
    }

    #[test]
    fn mechanics() {
        let f = Mass::from_kilograms(2.0) * Acceleration::from_metres_per_second_squared(9.0);
        assert_relative_eq!(f.newtons(), 18.0);

        let p = f / Area::from_square_centimetres(1.0);
        assert_relative_eq!(p.kilopascals(), 180.0, max_relative = 1e-12);

        let e = f * Length::from_metres(2.0);
        assert_relative_eq!(e.joules(), 36.0);

        let power = e / Time::from_seconds(4.0);
        assert_relative_eq!(power.watts(), 9.0);
        assert_relative_eq!((power * Time::from_hours(1.0)).watt_hours(), 9.0, max_relative = 1e-12);
    }

    #[test]
    fn electrical_energy() {
        let q = Current::from_amperes(2.0) * Time::from_hours(1.0);
        assert_relative_eq!(q.ampere_hours(), 2.0, max_relative = 1e-12);

        let e = q * Voltage::from_volts(3.0);
        assert_relative_eq!(e.watt_hours(), 6.0, max_relative = 1e-12);

        let c = ElectricCharge::from_microcoulombs(10.0) / Voltage::from_volts(5.0);
        assert_relative_eq!(c.microfarads(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn materials() {
        let rho = Mass::from_kilograms(1000.0) / Volume::from_cubic_metres(1.0);
        assert_relative_eq!(rho.grams_per_cubic_centimetre(), 1.0, max_relative = 1e-12);

        let v = Volume::from_litres(2.0) / Mass::from_kilograms(1.0);
        assert_relative_eq!(v.litres_per_kilogram(), 2.0, max_relative = 1e-12);
        assert_relative_eq!((Mass::from_kilograms(3.0) * v).litres(), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn rotation() {
        let w = Angle::from_revolutions(120.0) / Time::from_minutes(1.0);
        assert_relative_eq!(w.revolutions_per_minute(), 120.0, max_relative = 1e-12);

        let alpha = w / Time::from_seconds(2.0);
        assert_relative_eq!(alpha.revolutions_per_second_squared(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn same_kind_division_is_a_ratio() {
        let ratio: f64 = Length::from_kilometres(1.0) / Length::from_metres(250.0);
        assert_relative_eq!(ratio, 4.0);
    }
}
