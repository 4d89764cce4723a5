// src/lib.rs

#![doc = "Typed bindings for XCON `conference-info-diff` documents."]
#![doc = ""]
#![doc = "Partial conference notifications (RFC 6502) carry RFC 5261 patch operations"]
#![doc = "whose content uses the XCON data model (RFC 6501). This library provides:"]
#![doc = "- `load_diff_from_str` / `_bytes` / `_reader` / `_element`: parsing a diff document."]
#![doc = "- `save_diff_to_string` / `save_diff_to_writer`: serializing it back, with a namespace prefix map."]
#![doc = "- `load_xcon_element` / `save_xcon_element`: strongly-typed XCON values."]
#![doc = "- `apply_diff`: applying the operations to a full conference-info document."]

// --- Crate Modules ---

mod builder;
mod error;
mod model;
mod options;
mod parser;
mod patch;
mod resolver;
mod selector;
mod types;

pub mod dom;
pub mod namespaces;

// --- Public API Re-exports ---

pub use builder::{
    save_diff_to_element, save_diff_to_string, save_diff_to_string_default, save_diff_to_writer,
    save_xcon_element, save_xcon_element_to_string,
};
pub use dom::{Attribute, Element, NamespaceDecl, Node};
pub use error::XconError;
pub use namespaces::{CONFERENCE_INFO_NS, NamespaceMap, PATCH_OPS_NS, XCON_NS, XML_NS};
pub use options::{ParseOptions, SerializeOptions};
pub use parser::{
    load_diff_from_bytes, load_diff_from_bytes_with_options, load_diff_from_element,
    load_diff_from_element_with_options, load_diff_from_reader, load_diff_from_reader_with_options,
    load_diff_from_str, load_diff_from_str_with_options, load_xcon_element,
    load_xcon_element_from_str,
};
pub use patch::{apply_diff, apply_diff_atomic, apply_operation};
pub use selector::{Location, Selector};
pub use types::*;
