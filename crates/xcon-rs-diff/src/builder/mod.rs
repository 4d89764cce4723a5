// crates/xcon-rs-diff/src/builder/mod.rs

//! Provides functionality to serialize XCON values and `ConferenceInfoDiff`
//! documents back into XML.
//!
//! Complex XCON values are converted from the public `types` into the
//! internal `model` structs, serialized by `quick-xml` and placed in the
//! XCON namespace; diff documents are assembled directly as DOM trees.

mod diff;
mod floor;
mod media;
mod time;
mod users;

use crate::dom::{self, Element};
use crate::error::XconError;
use crate::model;
use crate::namespaces::XCON_NS;
use crate::options::SerializeOptions;
use crate::types::{ConferenceInfoDiff, XconElement};
use log::debug;
use std::io::Write;

/// A simple-content element in the XCON namespace.
fn simple(name: &str, text: impl Into<String>) -> Element {
    Element::in_namespace(XCON_NS, name).with_text(text)
}

/// Converts an [`XconElement`] into a DOM element in the XCON namespace.
///
/// # Errors
/// Returns `XconError::XmlSerializing` if `quick-xml` rejects a model.
pub fn save_xcon_element(element: &XconElement) -> Result<Element, XconError> {
    let name = element.local_name();
    let built = match element {
        XconElement::MixingMode(v) => simple(name, v.as_str()),
        XconElement::Codecs(v) => model::to_element(name, &media::build_model_codecs(v))?,
        XconElement::Controls(v) => model::to_element(name, &media::build_model_controls(v))?,
        XconElement::ConferencePassword(v)
        | XconElement::Language(v)
        | XconElement::CloningParent(v)
        | XconElement::SidebarParent(v) => simple(name, v.as_str()),
        XconElement::AllowSidebars(v)
        | XconElement::AllowConferenceEventSubscription(v)
        | XconElement::AllowReferUsersDynamically(v)
        | XconElement::AllowInviteUsersDynamically(v)
        | XconElement::AllowRemoveUsersDynamically(v) => simple(name, v.to_string()),
        XconElement::ConferenceTime(v) => {
            model::to_element(name, &time::build_model_conference_time(v))?
        }
        XconElement::ToMixer(v) | XconElement::FromMixer(v) => {
            model::to_element(name, &media::build_model_mixer(v))?
        }
        XconElement::ProvideAnonymity(v) => simple(name, v.as_str()),
        XconElement::JoinHandling(v) => simple(name, v.as_str()),
        XconElement::UserAdmissionPolicy(v) => simple(name, v.as_str()),
        XconElement::AllowedUsersList(v) => {
            model::to_element(name, &users::build_model_allowed_users_list(v))?
        }
        XconElement::DenyUsersList(v) => {
            model::to_element(name, &users::build_model_deny_users_list(v))?
        }
        XconElement::FloorInformation(v) => {
            model::to_element(name, &floor::build_model_floor_information(v))?
        }
        XconElement::Roles(v) => model::to_element(name, &users::build_model_roles(v))?,
    };
    Ok(built)
}

/// Serializes an [`XconElement`] as a standalone document.
pub fn save_xcon_element_to_string(
    element: &XconElement,
    options: &SerializeOptions,
) -> Result<String, XconError> {
    dom::to_string(&save_xcon_element(element)?, options)
}

/// Converts a [`ConferenceInfoDiff`] into its DOM tree.
///
/// Operations keep their namespace declarations so that the prefixes used
/// in their selectors stay bound after serialization.
pub fn save_diff_to_element(diff: &ConferenceInfoDiff) -> Element {
    diff::build_diff_element(diff)
}

/// Serializes a [`ConferenceInfoDiff`] into `sink`.
///
/// # Arguments
/// * `diff` - The document to write.
/// * `sink` - Any `std::io::Write` implementor.
/// * `options` - Indentation, XML declaration and preferred prefixes.
pub fn save_diff_to_writer<W: Write>(
    diff: &ConferenceInfoDiff,
    sink: W,
    options: &SerializeOptions,
) -> Result<(), XconError> {
    debug!(
        "Serializing conference-info-diff for '{}' ({} operation(s))",
        diff.entity,
        diff.operations.len()
    );
    dom::write_to(&save_diff_to_element(diff), sink, options)
}

/// Serializes a [`ConferenceInfoDiff`] into a `String`.
pub fn save_diff_to_string(
    diff: &ConferenceInfoDiff,
    options: &SerializeOptions,
) -> Result<String, XconError> {
    let mut buffer = Vec::new();
    save_diff_to_writer(diff, &mut buffer, options)?;
    Ok(String::from_utf8(buffer).map_err(|e| e.utf8_error())?)
}

/// Serializes with [`SerializeOptions::default`]: two-space indentation,
/// an XML declaration, XCON as the default namespace and `ci` for
/// conference-info.
pub fn save_diff_to_string_default(diff: &ConferenceInfoDiff) -> Result<String, XconError> {
    save_diff_to_string(diff, &SerializeOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::CONFERENCE_INFO_NS;
    use crate::types::{Add, Codec, CodecPolicy, Codecs, Decision, MixingMode, Remove, Ws};

    #[test]
    fn test_save_simple_element() {
        let element = save_xcon_element(&XconElement::MixingMode(MixingMode::Fcfs)).unwrap();
        assert!(element.is_named(Some(XCON_NS), "mixing-mode"));
        assert_eq!(element.text(), "FCFS");
    }

    #[test]
    fn test_save_complex_element_is_namespaced() {
        // 1. Build codecs with one codec.
        let codecs = Codecs::new(Decision::Automatic)
            .with_codec(Codec::new("PCMU", CodecPolicy::Allowed));

        // 2. Every produced element carries the XCON namespace.
        let element = save_xcon_element(&XconElement::Codecs(codecs)).unwrap();
        assert!(element.is_named(Some(XCON_NS), "codecs"));
        assert_eq!(element.attribute("decision"), Some("automatic"));
        let codec = element.find_child(Some(XCON_NS), "codec").unwrap();
        assert_eq!(codec.attribute("name"), Some("PCMU"));
        assert_eq!(codec.attribute("policy"), Some("allowed"));
    }

    #[test]
    fn test_save_xcon_element_to_string() {
        let xml = save_xcon_element_to_string(
            &XconElement::AllowSidebars(false),
            &SerializeOptions::compact(),
        )
        .unwrap();
        assert_eq!(
            xml,
            r#"<allow-sidebars xmlns="urn:ietf:params:xml:ns:xcon-conference-info">false</allow-sidebars>"#
        );
    }

    #[test]
    fn test_save_diff_compact() {
        let diff = ConferenceInfoDiff::new("xcon:conf1@example.com")
            .with_namespace(Some("ci"), CONFERENCE_INFO_NS)
            .with_operation(Remove::new("/ci:conference-info/ci:users").with_ws(Ws::After))
            .with_operation(Add::attribute("/ci:conference-info", "state", "partial"));

        let xml = save_diff_to_string(&diff, &SerializeOptions::compact()).unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<conference-info-diff xmlns:ci="urn:ietf:params:xml:ns:conference-info" "#,
                r#"xmlns="urn:ietf:params:xml:ns:xcon-conference-info" entity="xcon:conf1@example.com">"#,
                r#"<remove sel="/ci:conference-info/ci:users" ws="after"/>"#,
                r#"<add sel="/ci:conference-info" type="@state">partial</add>"#,
                r#"</conference-info-diff>"#
            )
        );
    }

    #[test]
    fn test_save_diff_default_has_declaration_and_indent() {
        let diff = ConferenceInfoDiff::new("xcon:c@example.com")
            .with_operation(Remove::new("/a/b"));
        let xml = save_diff_to_string_default(&diff).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("\n  <remove sel=\"/a/b\"/>"));
    }
}
