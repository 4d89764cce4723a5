// crates/xcon-rs-diff/src/error.rs

use core::fmt;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;
use quick_xml::escape::EscapeError;
use std::io;

/// Errors that can occur while parsing, serializing or applying
/// conference-info-diff documents.
#[derive(Debug)]
pub enum XconError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error from the `quick-xml` event reader or writer.
    Xml(XmlError),

    /// An entity or character reference could not be unescaped.
    Escape(EscapeError),

    /// An I/O error from the input stream or output sink.
    Io(io::Error),

    /// Tag, attribute or text bytes were not valid UTF-8.
    Utf8(Utf8Error),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// The document is not well-formed (stray end tag, several roots, ...).
    MalformedDocument(&'static str),

    /// A namespace prefix was used without an in-scope declaration.
    UnboundPrefix { prefix: String },

    /// A required XML element was missing (e.g., `media-label`).
    MissingElement { element: &'static str },

    /// A required attribute was missing (e.g., `@sel` on `<add>`).
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute or element value is outside its schema type.
    InvalidValue { field: &'static str, value: String },

    /// An element was found where a different one was required.
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },

    /// An unqualified attribute the schema does not allow.
    UnexpectedAttribute {
        element: &'static str,
        attribute: String,
    },

    /// A generic validation error.
    ValidationError(&'static str),

    /// The selector is not in the supported XPath subset.
    InvalidXpath { sel: String, reason: &'static str },

    /// The selector did not locate exactly one node.
    UnlocatedNode { sel: String },

    /// The operation would create a second root or remove the root.
    InvalidRootElementOperation { sel: String },

    /// The patch content does not fit the located node.
    InvalidNodeTypes { sel: String },

    /// An attribute added by a patch already exists.
    InvalidAttributeValue { sel: String, attribute: String },

    /// A prefix in a selector has no binding in the patch document.
    InvalidNamespacePrefix { sel: String, prefix: String },

    /// The `ws` directive does not match the surrounding nodes.
    InvalidWhitespaceDirective { sel: String },

    /// The operation is not meaningful for the located node.
    InvalidPatchDirective { sel: String, reason: &'static str },
}

impl From<DeError> for XconError {
    fn from(e: DeError) -> Self {
        XconError::XmlParsing(e)
    }
}

impl From<SeError> for XconError {
    fn from(e: SeError) -> Self {
        XconError::XmlSerializing(e)
    }
}

impl From<XmlError> for XconError {
    fn from(e: XmlError) -> Self {
        XconError::Xml(e)
    }
}

impl From<quick_xml::events::attributes::AttrError> for XconError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        XconError::Xml(XmlError::from(e))
    }
}

impl From<EscapeError> for XconError {
    fn from(e: EscapeError) -> Self {
        XconError::Escape(e)
    }
}

impl From<io::Error> for XconError {
    fn from(e: io::Error) -> Self {
        XconError::Io(e)
    }
}

impl From<Utf8Error> for XconError {
    fn from(e: Utf8Error) -> Self {
        XconError::Utf8(e)
    }
}

impl From<fmt::Error> for XconError {
    fn from(e: fmt::Error) -> Self {
        XconError::FmtError(e)
    }
}

impl fmt::Display for XconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XconError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            XconError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            XconError::Xml(e) => write!(f, "XML error: {}", e),
            XconError::Escape(e) => write!(f, "XML unescaping error: {}", e),
            XconError::Io(e) => write!(f, "I/O error: {}", e),
            XconError::Utf8(e) => write!(f, "Invalid UTF-8: {}", e),
            XconError::FmtError(e) => write!(f, "Formatting error: {}", e),
            XconError::MalformedDocument(msg) => write!(f, "Malformed XML document: {}", msg),
            XconError::UnboundPrefix { prefix } => {
                write!(f, "Namespace prefix '{}' is not bound", prefix)
            }
            XconError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            XconError::MissingAttribute { element, attribute } => {
                write!(f, "Missing required attribute '{}' on <{}>", attribute, element)
            }
            XconError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{}' for {}", value, field)
            }
            XconError::UnexpectedElement { expected, found } => {
                write!(f, "Expected <{}> but found <{}>", expected, found)
            }
            XconError::UnexpectedAttribute { element, attribute } => {
                write!(f, "Unexpected attribute '{}' on <{}>", attribute, element)
            }
            XconError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            XconError::InvalidXpath { sel, reason } => {
                write!(f, "Invalid selector '{}': {}", sel, reason)
            }
            XconError::UnlocatedNode { sel } => {
                write!(f, "Selector '{}' does not locate exactly one node", sel)
            }
            XconError::InvalidRootElementOperation { sel } => {
                write!(f, "Operation on '{}' would break the document root", sel)
            }
            XconError::InvalidNodeTypes { sel } => {
                write!(f, "Patch content does not match the node located by '{}'", sel)
            }
            XconError::InvalidAttributeValue { sel, attribute } => {
                write!(f, "Attribute '{}' already exists on '{}'", attribute, sel)
            }
            XconError::InvalidNamespacePrefix { sel, prefix } => {
                write!(f, "Prefix '{}' in selector '{}' is not bound", prefix, sel)
            }
            XconError::InvalidWhitespaceDirective { sel } => {
                write!(f, "Whitespace directive cannot be honoured for '{}'", sel)
            }
            XconError::InvalidPatchDirective { sel, reason } => {
                write!(f, "Invalid patch directive for '{}': {}", sel, reason)
            }
        }
    }
}

impl std::error::Error for XconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XconError::XmlParsing(e) => Some(e),
            XconError::XmlSerializing(e) => Some(e),
            XconError::Xml(e) => Some(e),
            XconError::Escape(e) => Some(e),
            XconError::Io(e) => Some(e),
            XconError::Utf8(e) => Some(e),
            XconError::FmtError(e) => Some(e),
            _ => None,
        }
    }
}
