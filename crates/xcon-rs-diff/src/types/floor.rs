// crates/xcon-rs-diff/src/types/floor.rs

//! Floor control settings (`<floor-information>`).

use super::enums::{FloorAlgorithm, FloorRequestHandling};

/// Represents `<floor-information>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FloorInformation {
    /// `<conference-ID>`, the BFCP conference id.
    pub conference_id: Option<u64>,
    /// `<allow-floor-events>`
    pub allow_floor_events: Option<bool>,
    /// `<floor-request-handling>`
    pub floor_request_handling: Option<FloorRequestHandling>,
    /// `<conference-floor-policy>`
    pub conference_floor_policy: Option<ConferenceFloorPolicy>,
}

/// Represents `<conference-floor-policy>`. Holds at least one floor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConferenceFloorPolicy {
    pub floors: Vec<FloorPolicy>,
}

/// Represents one `<floor>` of a `<conference-floor-policy>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPolicy {
    /// `@id` (Mandatory)
    pub id: String,
    /// `<media-label>` entries (at least one).
    pub media_labels: Vec<String>,
    pub algorithm: Option<FloorAlgorithm>,
    pub max_floor_users: Option<u32>,
    pub moderator_id: Option<u32>,
}

impl FloorPolicy {
    pub fn new(id: impl Into<String>, media_label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media_labels: vec![media_label.into()],
            algorithm: None,
            max_floor_users: None,
            moderator_id: None,
        }
    }
}
