//! Examples of serializing and deserializing quantities.
//!
//! Plain fields serialize as the SI number; `serde_with_unit` keeps the unit symbol alongside and accepts any unit of
//! the kind on input.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use measura::{Energy, Length, Mass, Power, Time};
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    // Example 1: Basic serialization to JSON
    println!("1. Basic JSON Serialization:");
    let distance = Length::from_kilometres(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   Distance: {} → JSON: {}", distance, json);

    let mass = Mass::from_grams(250.0);
    let json = serde_json::to_string(&mass).unwrap();
    println!("   Mass: {} → JSON: {}", mass, json);
    println!();

    // Example 2: Deserialization from JSON
    println!("2. JSON Deserialization:");
    let time = serde_json::from_str::<Time>("3600.0").unwrap();
    println!("   JSON: 3600.0 → {} ({} h)", time, time.hours());
    println!();

    // Example 3: Keeping units in the payload
    println!("3. serde_with_unit:");

    #[derive(Serialize, Deserialize, Debug)]
    struct Appliance {
        name: String,
        #[serde(with = "measura::serde_with_unit")]
        rated_power: Power,
        #[serde(with = "measura::serde_with_unit")]
        daily_energy: Energy,
    }

    let kettle = Appliance {
        name: "kettle".to_owned(),
        rated_power: Power::from_kilowatts(2.2),
        daily_energy: Energy::from_kilowatt_hours(0.3),
    };
    let json = serde_json::to_string_pretty(&kettle).unwrap();
    println!("{}", json);

    let input = r#"{
        "name": "heater",
        "rated_power": {"value": 1.5, "unit": "kW"},
        "daily_energy": {"value": 12.0, "unit": "kWh"}
    }"#;
    let heater: Appliance = serde_json::from_str(input).unwrap();
    println!("   {} draws {} and uses {}", heater.name, heater.rated_power, heater.daily_energy);
    assert_eq!(heater.rated_power, Power::from_watts(1500.0));

    // Example 4: Error handling
    println!("\n4. Error Handling:");
    let bad = r#"{"name": "x", "rated_power": {"value": 1.0, "unit": "hp?"}, "daily_energy": {"value": 0.0}}"#;
    match serde_json::from_str::<Appliance>(bad) {
        Ok(_) => println!("   Unexpectedly parsed"),
        Err(e) => println!("   ✓ Rejected: {}", e),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
