// src/parser.rs

use crate::dom::{self, Element};
use crate::error::XconError;
use crate::options::ParseOptions;
use crate::resolver;
use crate::types::{ConferenceInfoDiff, XconElement};
use log::debug;
use std::io::BufRead;

/// Parses a `<conference-info-diff>` document held in a string slice.
///
/// Uses the lenient [`ParseOptions::default`].
///
/// # Arguments
/// * `xml_content` - A string slice containing the full XML document.
///
/// # Errors
/// Returns an `XconError` if the XML is not well-formed, the root is not
/// `conference-info-diff` in the XCON namespace, or a required attribute
/// (`entity`, `sel`) is missing or malformed.
pub fn load_diff_from_str(xml_content: &str) -> Result<ConferenceInfoDiff, XconError> {
    load_diff_from_str_with_options(xml_content, &ParseOptions::default())
}

/// Like [`load_diff_from_str`], with explicit options.
pub fn load_diff_from_str_with_options(
    xml_content: &str,
    options: &ParseOptions,
) -> Result<ConferenceInfoDiff, XconError> {
    let root = dom::parse_str(xml_content)?;
    load_diff_from_element_with_options(&root, options)
}

/// Parses a document held in a UTF-8 byte slice.
pub fn load_diff_from_bytes(xml_content: &[u8]) -> Result<ConferenceInfoDiff, XconError> {
    load_diff_from_bytes_with_options(xml_content, &ParseOptions::default())
}

pub fn load_diff_from_bytes_with_options(
    xml_content: &[u8],
    options: &ParseOptions,
) -> Result<ConferenceInfoDiff, XconError> {
    let root = dom::parse_bytes(xml_content)?;
    load_diff_from_element_with_options(&root, options)
}

/// Parses a document from a buffered stream, e.g. a `BufReader<File>`.
pub fn load_diff_from_reader<R: BufRead>(reader: R) -> Result<ConferenceInfoDiff, XconError> {
    load_diff_from_reader_with_options(reader, &ParseOptions::default())
}

pub fn load_diff_from_reader_with_options<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> Result<ConferenceInfoDiff, XconError> {
    let root = dom::parse_reader(reader)?;
    load_diff_from_element_with_options(&root, options)
}

/// Reads a diff from an already parsed root element.
pub fn load_diff_from_element(root: &Element) -> Result<ConferenceInfoDiff, XconError> {
    load_diff_from_element_with_options(root, &ParseOptions::default())
}

pub fn load_diff_from_element_with_options(
    root: &Element,
    options: &ParseOptions,
) -> Result<ConferenceInfoDiff, XconError> {
    debug!("Loading conference-info-diff (strict: {})", options.strict);
    resolver::diff::resolve_diff(root, options)
}

/// Decodes a single XCON element.
///
/// Returns `Ok(None)` for elements outside the XCON namespace and for XCON
/// elements without a typed form.
pub fn load_xcon_element(element: &Element) -> Result<Option<XconElement>, XconError> {
    resolver::resolve_xcon_element(element)
}

/// Parses a standalone XCON element such as
/// `<mixing-mode xmlns="urn:ietf:params:xml:ns:xcon-conference-info">FCFS</mixing-mode>`.
///
/// # Errors
/// `XconError::UnexpectedElement` if the root is not a known XCON element.
pub fn load_xcon_element_from_str(xml_content: &str) -> Result<XconElement, XconError> {
    let root = dom::parse_str(xml_content)?;
    load_xcon_element(&root)?.ok_or_else(|| XconError::UnexpectedElement {
        expected: "an XCON element",
        found: root.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatchOperation, UserAdmissionPolicy};

    const DIFF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info" entity="xcon:c@example.com">
  <replace sel="/ci:conference-info/@version" xmlns:ci="urn:ietf:params:xml:ns:conference-info">2</replace>
</conference-info-diff>"#;

    #[test]
    fn test_load_diff_from_all_sources_agree() {
        // 1. Load the same document from a str, bytes and a reader.
        let from_str = load_diff_from_str(DIFF).unwrap();
        let from_bytes = load_diff_from_bytes(DIFF.as_bytes()).unwrap();
        let from_reader = load_diff_from_reader(std::io::Cursor::new(DIFF)).unwrap();

        // 2. They all produce the same value.
        assert_eq!(from_str, from_bytes);
        assert_eq!(from_str, from_reader);
        let PatchOperation::Replace(replace) = &from_str.operations[0] else {
            panic!("expected replace");
        };
        assert_eq!(replace.namespaces.len(), 1);
    }

    #[test]
    fn test_load_xcon_element_from_str() {
        let element = load_xcon_element_from_str(
            r#"<user-admission-policy xmlns="urn:ietf:params:xml:ns:xcon-conference-info">openAuthenticated</user-admission-policy>"#,
        )
        .unwrap();
        assert_eq!(
            element,
            XconElement::UserAdmissionPolicy(UserAdmissionPolicy::OpenAuthenticated)
        );
    }

    #[test]
    fn test_load_xcon_element_from_str_rejects_foreign_root() {
        let result = load_xcon_element_from_str("<mixing-mode>FCFS</mixing-mode>");
        assert!(matches!(result, Err(XconError::UnexpectedElement { .. })));
    }
}
