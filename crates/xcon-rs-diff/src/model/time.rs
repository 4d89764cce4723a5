//! Contains model structs for `<conference-time>` (`conference-time-type`).

use serde::{Deserialize, Serialize};

/// Represents `<conference-time>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ConferenceTime {
    #[serde(rename = "entry", default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<ConferenceTimeEntry>,
}

/// Represents one `<entry>` of `<conference-time>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ConferenceTimeEntry {
    /// iCalendar text describing the schedule.
    #[serde(rename = "base", default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(
        rename = "mixing-start-offset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mixing_start_offset: Option<TimeOffset>,

    #[serde(
        rename = "mixing-end-offset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mixing_end_offset: Option<TimeOffset>,

    #[serde(
        rename = "can-join-after-offset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub can_join_after_offset: Option<TimeOffset>,

    #[serde(
        rename = "must-join-before-offset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub must_join_before_offset: Option<TimeOffset>,

    #[serde(rename = "request-user", default, skip_serializing_if = "Option::is_none")]
    pub request_user: Option<String>,

    #[serde(
        rename = "notify-end-of-conference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notify_end_of_conference: Option<String>,

    #[serde(
        rename = "allowed-extend-mixing-end-offset",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_extend_mixing_end_offset: Option<String>,
}

/// Represents `<mixing-start-offset required-participant="...">dateTime</...>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct TimeOffset {
    #[serde(
        rename = "@required-participant",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_participant: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: String,
}
