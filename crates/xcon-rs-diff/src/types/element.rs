// crates/xcon-rs-diff/src/types/element.rs

//! The global elements of the `xcon-conference-info` namespace.

use super::enums::{JoinHandling, MixingMode, ProvideAnonymity, UserAdmissionPolicy};
use super::floor::FloorInformation;
use super::media::{Codecs, Controls, Mixer};
use super::time::ConferenceTime;
use super::users::{AllowedUsersList, DenyUsersList, UserRoles};

/// One XCON element, as carried in `<add>`/`<replace>` content or inside
/// a conference-info document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XconElement {
    MixingMode(MixingMode),
    Codecs(Codecs),
    Controls(Controls),
    ConferencePassword(String),
    /// An `xs:language` tag such as `en-US`.
    Language(String),
    AllowSidebars(bool),
    /// URI of the conference this one was cloned from.
    CloningParent(String),
    /// URI of the conference this sidebar belongs to.
    SidebarParent(String),
    ConferenceTime(ConferenceTime),
    AllowConferenceEventSubscription(bool),
    ToMixer(Mixer),
    FromMixer(Mixer),
    ProvideAnonymity(ProvideAnonymity),
    AllowReferUsersDynamically(bool),
    AllowInviteUsersDynamically(bool),
    AllowRemoveUsersDynamically(bool),
    JoinHandling(JoinHandling),
    UserAdmissionPolicy(UserAdmissionPolicy),
    AllowedUsersList(AllowedUsersList),
    DenyUsersList(DenyUsersList),
    FloorInformation(FloorInformation),
    Roles(UserRoles),
}

impl XconElement {
    /// Local names of every element this enum can hold.
    pub const NAMES: &'static [&'static str] = &[
        "mixing-mode",
        "codecs",
        "controls",
        "conference-password",
        "language",
        "allow-sidebars",
        "cloning-parent",
        "sidebar-parent",
        "conference-time",
        "allow-conference-event-subscription",
        "to-mixer",
        "from-mixer",
        "provide-anonymity",
        "allow-refer-users-dynamically",
        "allow-invite-users-dynamically",
        "allow-remove-users-dynamically",
        "join-handling",
        "user-admission-policy",
        "allowed-users-list",
        "deny-users-list",
        "floor-information",
        "roles",
    ];

    /// The element's local name in the XCON namespace.
    pub fn local_name(&self) -> &'static str {
        match self {
            XconElement::MixingMode(_) => "mixing-mode",
            XconElement::Codecs(_) => "codecs",
            XconElement::Controls(_) => "controls",
            XconElement::ConferencePassword(_) => "conference-password",
            XconElement::Language(_) => "language",
            XconElement::AllowSidebars(_) => "allow-sidebars",
            XconElement::CloningParent(_) => "cloning-parent",
            XconElement::SidebarParent(_) => "sidebar-parent",
            XconElement::ConferenceTime(_) => "conference-time",
            XconElement::AllowConferenceEventSubscription(_) => {
                "allow-conference-event-subscription"
            }
            XconElement::ToMixer(_) => "to-mixer",
            XconElement::FromMixer(_) => "from-mixer",
            XconElement::ProvideAnonymity(_) => "provide-anonymity",
            XconElement::AllowReferUsersDynamically(_) => "allow-refer-users-dynamically",
            XconElement::AllowInviteUsersDynamically(_) => "allow-invite-users-dynamically",
            XconElement::AllowRemoveUsersDynamically(_) => "allow-remove-users-dynamically",
            XconElement::JoinHandling(_) => "join-handling",
            XconElement::UserAdmissionPolicy(_) => "user-admission-policy",
            XconElement::AllowedUsersList(_) => "allowed-users-list",
            XconElement::DenyUsersList(_) => "deny-users-list",
            XconElement::FloorInformation(_) => "floor-information",
            XconElement::Roles(_) => "roles",
        }
    }

    /// True if `name` is the local name of a known XCON element.
    pub fn is_known(name: &str) -> bool {
        Self::NAMES.contains(&name)
    }
}
