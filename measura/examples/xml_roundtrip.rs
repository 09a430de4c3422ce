//! Writing quantities as XML `Value` attributes and reading them back.
//!
//! ```bash
//! cargo run --example xml_roundtrip
//! ```

use measura::{Capacitance, Resistance, Time, VALUE_ATTRIBUTE};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Single element
    let r = Resistance::from_kiloohms(4.7);
    let xml = r.to_xml_element("Resistor")?;
    println!("{}", xml);
    assert_eq!(Resistance::from_xml_str(&xml)?, r);

    // Alongside caller-owned attributes
    let mut element = BytesStart::new("Capacitor");
    element.push_attribute(("Ref", "C12"));
    Capacitance::from_microfarads(100.0).write_xml(&mut element);

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Empty(element))?;
    let document = String::from_utf8(writer.into_inner())?;
    println!("{}", document);

    let mut reader = Reader::from_str(&document);
    if let Event::Empty(e) = reader.read_event()? {
        let c = Capacitance::read_xml(&e)?;
        println!("read {} back from the {} attribute", c, VALUE_ATTRIBUTE);
    }

    // Errors are values, not panics
    match Time::from_xml_str(r#"<Delay Unit="ms"/>"#) {
        Ok(t) => println!("unexpected {}", t),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
