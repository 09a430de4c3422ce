//! XML attribute serialization.
//!
//! A quantity is stored as one attribute, `Value="<SI magnitude>"`, on whatever element the caller is reading or
//! writing. Other attributes and child content are left alone.
//!
//! ```rust
//! use measura_core::Inductance;
//!
//! let xml = Inductance::from_millihenries(2.5).to_xml_element("Coil").unwrap();
//! assert_eq!(xml, r#"<Coil Value="0.0025"/>"#);
//! assert_eq!(Inductance::from_xml_str(&xml).unwrap(), Inductance::from_henries(0.0025));
//! ```

use crate::dimension::Dimension;
use crate::error::{XmlError, XmlResult};
use crate::quantity::Quantity;
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Name of the attribute holding the SI magnitude.
pub const VALUE_ATTRIBUTE: &str = "Value";

impl<D: Dimension> Quantity<D> {
    /// Reads the `Value` attribute of `element`.
    pub fn read_xml(element: &BytesStart<'_>) -> XmlResult<Self> {
        for attr in element.attributes() {
            let attr = attr?;
            if attr.key.as_ref() != VALUE_ATTRIBUTE.as_bytes() {
                continue;
            }

            let text = String::from_utf8_lossy(&attr.value);
            return text
                .trim()
                .parse::<f64>()
                .map(Self::from_si)
                .map_err(|_| XmlError::InvalidValue {
                    text: text.into_owned(),
                });
        }

        Err(XmlError::MissingAttribute {
            element: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
        })
    }

    /// Adds the `Value` attribute to `element`.
    ///
    /// The magnitude is written in its shortest round-trip form.
    pub fn write_xml(&self, element: &mut BytesStart<'_>) {
        let text = self.si_value().to_string();
        element.push_attribute((VALUE_ATTRIBUTE, text.as_str()));
    }

    /// Writes this quantity as an empty element named `name`.
    pub fn to_xml_element(&self, name: &str) -> XmlResult<String> {
        let mut element = BytesStart::new(name);
        self.write_xml(&mut element);

        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Empty(element))
            .map_err(|e| XmlError::Malformed(format!("XML write error: {}", e)))?;

        String::from_utf8(writer.into_inner())
            .map_err(|e| XmlError::Malformed(format!("XML output is not UTF-8: {}", e)))
    }

    /// Reads the quantity from the first element of `xml`.
    pub fn from_xml_str(xml: &str) -> XmlResult<Self> {
        let mut reader = Reader::from_str(xml);

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => return Self::read_xml(&e),
                Ok(Event::Eof) => return Err(XmlError::NoElement),
                Ok(_) => {}
                Err(e) => {
                    debug!("Failed to read {} from XML: {}", D::NAME, e);
                    return Err(XmlError::Malformed(format!(
                        "XML parse error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    #[test]
    fn write_adds_value_attribute() {
        let mut element = BytesStart::new("Angle");
        element.push_attribute(("Id", "a1"));
        Angle::from_radians(1.5).write_xml(&mut element);

        let attrs: Vec<(String, String)> = element
            .attributes()
            .map(|a| {
                let a = a.unwrap();
                (
                    String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                    String::from_utf8(a.value.to_vec()).unwrap(),
                )
            })
            .collect();
        assert_eq!(
            attrs,
            [
                ("Id".to_owned(), "a1".to_owned()),
                ("Value".to_owned(), "1.5".to_owned())
            ]
        );
    }

    #[test]
    fn read_ignores_other_attributes() {
        let mut element = BytesStart::new("Jerk");
        element.push_attribute(("Unit", "ft/s³"));
        element.push_attribute(("Value", "9.5"));
        assert_eq!(Jerk::read_xml(&element).unwrap(), Jerk::from_metres_per_second_cubed(9.5));
    }

    #[test]
    fn missing_value_attribute() {
        let element = BytesStart::new("Capacitance");
        match Capacitance::read_xml(&element) {
            Err(XmlError::MissingAttribute { element }) => assert_eq!(element, "Capacitance"),
            other => panic!("expected missing attribute, got {:?}", other),
        }
    }

    #[test]
    fn invalid_value_attribute() {
        let result = SpecificVolume::from_xml_str(r#"<SpecificVolume Value="twelve"/>"#);
        assert!(matches!(result, Err(XmlError::InvalidValue { text }) if text == "twelve"));
    }

    #[test]
    fn reads_first_element_and_skips_prolog() {
        let xml = r#"<?xml version="1.0"?><!-- flux --><Flux Value="0.25"><Note>ignored</Note></Flux>"#;
        assert_eq!(MagneticFlux::from_xml_str(xml).unwrap(), MagneticFlux::from_webers(0.25));
    }

    #[test]
    fn empty_document_has_no_element() {
        assert!(matches!(Data::from_xml_str(""), Err(XmlError::NoElement)));
    }

    #[test]
    fn element_round_trip_is_exact() {
        let original = Resistance::from_kiloohms(4.7) / 3.0;
        let xml = original.to_xml_element("R").unwrap();
        assert_eq!(Resistance::from_xml_str(&xml).unwrap(), original);
    }
}
