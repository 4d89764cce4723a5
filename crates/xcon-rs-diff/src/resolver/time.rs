// crates/xcon-rs-diff/src/resolver/time.rs

//! Resolves `<conference-time>`.

use super::utils::{parse_bool, parse_number, parse_optional, required_element};
use crate::error::XconError;
use crate::{model, types};

pub(super) fn resolve_conference_time(
    model: &model::ConferenceTime,
) -> Result<types::ConferenceTime, XconError> {
    let entries = model
        .entry
        .iter()
        .map(resolve_entry)
        .collect::<Result<Vec<_>, XconError>>()?;
    Ok(types::ConferenceTime { entries })
}

fn resolve_entry(
    model: &model::time::ConferenceTimeEntry,
) -> Result<types::ConferenceTimeEntry, XconError> {
    Ok(types::ConferenceTimeEntry {
        base: required_element(model.base.clone(), "conference-time/entry/base")?,
        mixing_start_offset: model.mixing_start_offset.as_ref().map(resolve_offset),
        mixing_end_offset: model.mixing_end_offset.as_ref().map(resolve_offset),
        can_join_after_offset: model.can_join_after_offset.as_ref().map(resolve_offset),
        must_join_before_offset: model.must_join_before_offset.as_ref().map(resolve_offset),
        request_user: model.request_user.as_ref().map(|v| v.trim().to_string()),
        notify_end_of_conference: parse_optional(
            model.notify_end_of_conference.as_deref(),
            |v| parse_number("notify-end-of-conference", v),
        )?,
        allowed_extend_mixing_end_offset: parse_optional(
            model.allowed_extend_mixing_end_offset.as_deref(),
            |v| parse_bool("allowed-extend-mixing-end-offset", v),
        )?,
    })
}

fn resolve_offset(model: &model::time::TimeOffset) -> types::TimeOffset {
    types::TimeOffset {
        value: model.value.trim().to_string(),
        required_participant: model.required_participant.clone(),
    }
}
