// crates/xcon-rs-diff/src/resolver/floor.rs

//! Resolves `<floor-information>`.

use super::utils::{parse_bool, parse_number, parse_optional, required_attribute};
use crate::error::XconError;
use crate::{model, types};

pub(super) fn resolve_floor_information(
    model: &model::FloorInformation,
) -> Result<types::FloorInformation, XconError> {
    let conference_floor_policy = model
        .conference_floor_policy
        .as_ref()
        .map(resolve_conference_floor_policy)
        .transpose()?;

    Ok(types::FloorInformation {
        conference_id: parse_optional(model.conference_id.as_deref(), |v| {
            parse_number("conference-ID", v)
        })?,
        allow_floor_events: parse_optional(model.allow_floor_events.as_deref(), |v| {
            parse_bool("allow-floor-events", v)
        })?,
        floor_request_handling: parse_optional(
            model.floor_request_handling.as_deref(),
            str::parse,
        )?,
        conference_floor_policy,
    })
}

fn resolve_conference_floor_policy(
    model: &model::floor::ConferenceFloorPolicy,
) -> Result<types::ConferenceFloorPolicy, XconError> {
    if model.floor.is_empty() {
        return Err(XconError::MissingElement {
            element: "conference-floor-policy/floor",
        });
    }
    let floors = model
        .floor
        .iter()
        .map(resolve_floor_policy)
        .collect::<Result<Vec<_>, XconError>>()?;
    Ok(types::ConferenceFloorPolicy { floors })
}

fn resolve_floor_policy(model: &model::floor::FloorPolicy) -> Result<types::FloorPolicy, XconError> {
    let id = required_attribute(model.id.as_deref(), "floor", "id")?.to_string();
    if model.media_label.is_empty() {
        return Err(XconError::MissingElement {
            element: "floor/media-label",
        });
    }
    Ok(types::FloorPolicy {
        id,
        media_labels: model.media_label.iter().map(|l| l.trim().to_string()).collect(),
        algorithm: parse_optional(model.algorithm.as_deref(), str::parse)?,
        max_floor_users: parse_optional(model.max_floor_users.as_deref(), |v| {
            parse_number("max-floor-users", v)
        })?,
        moderator_id: parse_optional(model.moderator_id.as_deref(), |v| {
            parse_number("moderator-id", v)
        })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::floor::{ConferenceFloorPolicy, FloorPolicy};

    fn policy_floor() -> FloorPolicy {
        FloorPolicy {
            id: Some("floor1".into()),
            media_label: vec!["10".into()],
            algorithm: Some("FCFS".into()),
            max_floor_users: Some("1".into()),
            moderator_id: None,
        }
    }

    #[test]
    fn test_resolve_floor_information() {
        let model = model::FloorInformation {
            conference_id: Some("567".into()),
            allow_floor_events: Some("true".into()),
            floor_request_handling: Some("confirm".into()),
            conference_floor_policy: Some(ConferenceFloorPolicy {
                floor: vec![policy_floor()],
            }),
        };

        let info = resolve_floor_information(&model).unwrap();

        assert_eq!(info.conference_id, Some(567));
        assert_eq!(info.allow_floor_events, Some(true));
        assert_eq!(info.floor_request_handling, Some(types::FloorRequestHandling::Confirm));
        let floor = &info.conference_floor_policy.unwrap().floors[0];
        assert_eq!(floor.id, "floor1");
        assert_eq!(floor.algorithm, Some(types::FloorAlgorithm::Fcfs));
        assert_eq!(floor.max_floor_users, Some(1));
    }

    #[test]
    fn test_floor_policy_requires_media_label() {
        let mut floor = policy_floor();
        floor.media_label.clear();
        let model = model::FloorInformation {
            conference_floor_policy: Some(ConferenceFloorPolicy { floor: vec![floor] }),
            ..Default::default()
        };
        assert!(matches!(
            resolve_floor_information(&model),
            Err(XconError::MissingElement { element: "floor/media-label" })
        ));
    }

    #[test]
    fn test_empty_floor_policy_is_rejected() {
        let model = model::FloorInformation {
            conference_floor_policy: Some(ConferenceFloorPolicy::default()),
            ..Default::default()
        };
        assert!(resolve_floor_information(&model).is_err());
    }
}
