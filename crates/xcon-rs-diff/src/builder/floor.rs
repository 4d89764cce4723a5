// crates/xcon-rs-diff/src/builder/floor.rs

//! Contains builder functions to convert `types::FloorInformation` into `model::FloorInformation`.

use crate::{model, types};

pub(super) fn build_model_floor_information(
    public: &types::FloorInformation,
) -> model::FloorInformation {
    model::FloorInformation {
        conference_id: public.conference_id.map(|v| v.to_string()),
        allow_floor_events: public.allow_floor_events.map(|v| v.to_string()),
        floor_request_handling: public.floor_request_handling.map(|v| v.to_string()),
        conference_floor_policy: public.conference_floor_policy.as_ref().map(|policy| {
            model::floor::ConferenceFloorPolicy {
                floor: policy.floors.iter().map(build_model_floor_policy).collect(),
            }
        }),
    }
}

fn build_model_floor_policy(public: &types::FloorPolicy) -> model::floor::FloorPolicy {
    model::floor::FloorPolicy {
        id: Some(public.id.clone()),
        media_label: public.media_labels.clone(),
        algorithm: public.algorithm.map(|v| v.to_string()),
        max_floor_users: public.max_floor_users.map(|v| v.to_string()),
        moderator_id: public.moderator_id.map(|v| v.to_string()),
    }
}
