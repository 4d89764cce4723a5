//! Internal `serde` data structures that map directly to the
//! `xcon-conference-info` XML schema (RFC 6501).
//!
//! Attribute and simple-content values are kept as strings here; the
//! resolver turns them into the strongly-typed values of [`crate::types`]
//! and reports missing or malformed data. These structs read and write
//! unqualified XML: namespaces are handled by the DOM layer around them.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use crate::dom::{self, Element};
use crate::error::XconError;
use crate::namespaces::XCON_NS;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod floor;
pub mod media;
pub mod time;
pub mod users;

// Re-export key components for internal use
pub use floor::FloorInformation;
pub use media::{Codecs, Controls, Mixer};
pub use time::ConferenceTime;
pub use users::{AllowedUsersList, DenyUsersList, UserRoles};

/// Deserializes a model struct from a DOM element, ignoring namespaces.
pub(crate) fn from_element<T: DeserializeOwned>(element: &Element) -> Result<T, XconError> {
    let xml = dom::to_unqualified_string(element)?;
    Ok(quick_xml::de::from_str(&xml)?)
}

/// Serializes a model struct as `<root>` and returns it as an element
/// tree in the XCON namespace.
pub(crate) fn to_element<T: Serialize>(root: &str, value: &T) -> Result<Element, XconError> {
    let xml = quick_xml::se::to_string_with_root(root, value)?;
    let mut element = dom::parse_str(&xml)?;
    element.set_namespace_recursive(XCON_NS);
    Ok(element)
}

