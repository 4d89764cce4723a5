// crates/xcon-rs-diff/src/builder/time.rs

//! Contains builder functions to convert `types::ConferenceTime` into `model::ConferenceTime`.

use crate::{model, types};

pub(super) fn build_model_conference_time(public: &types::ConferenceTime) -> model::ConferenceTime {
    model::ConferenceTime {
        entry: public
            .entries
            .iter()
            .map(|entry| model::time::ConferenceTimeEntry {
                base: Some(entry.base.clone()),
                mixing_start_offset: entry.mixing_start_offset.as_ref().map(build_model_offset),
                mixing_end_offset: entry.mixing_end_offset.as_ref().map(build_model_offset),
                can_join_after_offset: entry.can_join_after_offset.as_ref().map(build_model_offset),
                must_join_before_offset: entry
                    .must_join_before_offset
                    .as_ref()
                    .map(build_model_offset),
                request_user: entry.request_user.clone(),
                notify_end_of_conference: entry.notify_end_of_conference.map(|v| v.to_string()),
                allowed_extend_mixing_end_offset: entry
                    .allowed_extend_mixing_end_offset
                    .map(|v| v.to_string()),
            })
            .collect(),
    }
}

fn build_model_offset(public: &types::TimeOffset) -> model::time::TimeOffset {
    model::time::TimeOffset {
        required_participant: public.required_participant.clone(),
        value: public.value.clone(),
    }
}
