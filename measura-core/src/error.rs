//! Error types.

use thiserror::Error;

/// Result alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Why a quantity or unit string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("cannot parse an empty string")]
    Empty,

    /// The numeric part did not match the allowed number styles.
    #[error("invalid number in '{text}'")]
    InvalidNumber {
        /// Offending input.
        text: String,
    },

    /// A number was found but no unit followed it.
    #[error("missing unit in '{text}'")]
    MissingUnit {
        /// Offending input.
        text: String,
    },

    /// The unit text matched no unit of the kind.
    #[error("unknown {kind} unit '{symbol}'")]
    UnknownUnit {
        /// Kind name, e.g. `"Length"`.
        kind: &'static str,
        /// Unit text as written.
        symbol: String,
    },

    /// The unit text matched several units case-insensitively.
    #[error("ambiguous {kind} unit '{symbol}', candidates: {}", candidates.join(", "))]
    AmbiguousUnit {
        /// Kind name, e.g. `"Length"`.
        kind: &'static str,
        /// Unit text as written.
        symbol: String,
        /// Symbols of every matching unit.
        candidates: Vec<&'static str>,
    },
}

/// Errors raised while reading or writing quantities as XML.
#[cfg(feature = "xml")]
#[derive(Debug, Error)]
pub enum XmlError {
    /// The element has no `Value` attribute.
    #[error("element <{element}> has no Value attribute")]
    MissingAttribute {
        /// Local name of the element.
        element: String,
    },

    /// The `Value` attribute is not a floating-point number.
    #[error("invalid Value attribute '{text}'")]
    InvalidValue {
        /// Attribute text.
        text: String,
    },

    /// No element was found in the document.
    #[error("no element found in XML input")]
    NoElement,

    /// A malformed attribute.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Underlying reader or writer failure.
    #[error("XML error: {0}")]
    Malformed(String),
}

/// Result alias for XML operations.
#[cfg(feature = "xml")]
pub type XmlResult<T> = Result<T, XmlError>;
