//! Contains model structs for `<floor-information>` (`floor-information-type`).

use serde::{Deserialize, Serialize};

/// Represents `<floor-information>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct FloorInformation {
    #[serde(rename = "conference-ID", default, skip_serializing_if = "Option::is_none")]
    pub conference_id: Option<String>,

    #[serde(
        rename = "allow-floor-events",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_floor_events: Option<String>,

    #[serde(
        rename = "floor-request-handling",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub floor_request_handling: Option<String>,

    #[serde(
        rename = "conference-floor-policy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub conference_floor_policy: Option<ConferenceFloorPolicy>,
}

/// Represents `<conference-floor-policy>`; holds one or more `<floor>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct ConferenceFloorPolicy {
    #[serde(rename = "floor", default, skip_serializing_if = "Vec::is_empty")]
    pub floor: Vec<FloorPolicy>,
}

/// Represents `<floor id="...">` inside `<conference-floor-policy>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct FloorPolicy {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "media-label", default, skip_serializing_if = "Vec::is_empty")]
    pub media_label: Vec<String>,

    #[serde(rename = "algorithm", default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    #[serde(
        rename = "max-floor-users",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_floor_users: Option<String>,

    #[serde(rename = "moderator-id", default, skip_serializing_if = "Option::is_none")]
    pub moderator_id: Option<String>,
}
