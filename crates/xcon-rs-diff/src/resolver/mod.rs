// crates/xcon-rs-diff/src/resolver/mod.rs

//! Handles the business logic of resolving typed values from DOM elements.
//!
//! Complex XCON elements go through the raw `model` structs first; simple
//! ones are read from the element text directly. The `diff` sub-module
//! resolves whole `<conference-info-diff>` documents.

use crate::dom::{Element, Node};
use crate::error::XconError;
use crate::model;
use crate::namespaces::XCON_NS;
use crate::types::XconElement;
use log::trace;

// --- Sub-modules ---

mod floor;
mod media;
mod time;
mod users;
mod utils;
pub(crate) mod diff;

use utils::{parse_bool, token_text};

/// Decodes an element of the XCON namespace.
///
/// Returns `Ok(None)` for elements in other namespaces and for XCON
/// elements this crate has no typed form for.
pub(crate) fn resolve_xcon_element(element: &Element) -> Result<Option<XconElement>, XconError> {
    if element.namespace.as_deref() != Some(XCON_NS) {
        return Ok(None);
    }
    trace!("Resolving XCON element <{}>", element.name);

    let resolved = match element.name.as_str() {
        "mixing-mode" => XconElement::MixingMode(token_text(element).parse()?),
        "codecs" => XconElement::Codecs(media::resolve_codecs(&model::from_element(element)?)?),
        "controls" => {
            XconElement::Controls(media::resolve_controls(&model::from_element(element)?)?)
        }
        "conference-password" => XconElement::ConferencePassword(element.text()),
        "language" => XconElement::Language(token_text(element)),
        "allow-sidebars" => {
            XconElement::AllowSidebars(parse_bool("allow-sidebars", &element.text())?)
        }
        "cloning-parent" => XconElement::CloningParent(token_text(element)),
        "sidebar-parent" => XconElement::SidebarParent(token_text(element)),
        "conference-time" => XconElement::ConferenceTime(time::resolve_conference_time(
            &model::from_element(element)?,
        )?),
        "allow-conference-event-subscription" => XconElement::AllowConferenceEventSubscription(
            parse_bool("allow-conference-event-subscription", &element.text())?,
        ),
        "to-mixer" => XconElement::ToMixer(media::resolve_mixer(&model::from_element(element)?)?),
        "from-mixer" => {
            XconElement::FromMixer(media::resolve_mixer(&model::from_element(element)?)?)
        }
        "provide-anonymity" => XconElement::ProvideAnonymity(token_text(element).parse()?),
        "allow-refer-users-dynamically" => XconElement::AllowReferUsersDynamically(parse_bool(
            "allow-refer-users-dynamically",
            &element.text(),
        )?),
        "allow-invite-users-dynamically" => XconElement::AllowInviteUsersDynamically(
            parse_bool("allow-invite-users-dynamically", &element.text())?,
        ),
        "allow-remove-users-dynamically" => XconElement::AllowRemoveUsersDynamically(
            parse_bool("allow-remove-users-dynamically", &element.text())?,
        ),
        "join-handling" => XconElement::JoinHandling(token_text(element).parse()?),
        "user-admission-policy" => {
            XconElement::UserAdmissionPolicy(token_text(element).parse()?)
        }
        "allowed-users-list" => XconElement::AllowedUsersList(
            users::resolve_allowed_users_list(&model::from_element(element)?)?,
        ),
        "deny-users-list" => XconElement::DenyUsersList(users::resolve_deny_users_list(
            &model::from_element(element)?,
        )?),
        "floor-information" => XconElement::FloorInformation(
            floor::resolve_floor_information(&model::from_element(element)?)?,
        ),
        "roles" => XconElement::Roles(users::resolve_roles(&model::from_element(element)?)),
        other => {
            trace!("No typed form for XCON element <{}>", other);
            return Ok(None);
        }
    };
    Ok(Some(resolved))
}

/// Decodes every XCON element found among `nodes`, in order.
pub(crate) fn resolve_content(nodes: &[Node]) -> Result<Vec<XconElement>, XconError> {
    let mut elements = Vec::new();
    for element in nodes.iter().filter_map(Node::as_element) {
        if let Some(resolved) = resolve_xcon_element(element)? {
            elements.push(resolved);
        }
    }
    Ok(elements)
}
