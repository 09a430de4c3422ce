//! Minimal end-to-end example: convert units, combine kinds and round-trip through text.

use measura::{Length, LengthUnit, Speed, SpeedUnit, Time};

fn main() {
    let d = Length::from_kilometres(1_000.0);
    assert_eq!(d.value_in(LengthUnit::Metre), 1_000_000.0);

    let t = Time::from_seconds(100.0);
    let v: Speed = d / t;
    assert!((v.metres_per_second() - 10_000.0).abs() < 1e-9);
    println!("{} in {} is {}", d, t, v.to_string_with(SpeedUnit::KilometrePerHour, "F1"));

    let parsed: Length = "42.195 km".parse().expect("valid length");
    println!("A marathon is {}", parsed.to_string_with(LengthUnit::Mile, "F2"));
}
