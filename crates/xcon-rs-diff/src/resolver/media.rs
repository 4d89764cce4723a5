// crates/xcon-rs-diff/src/resolver/media.rs

//! Resolves `<codecs>`, `<controls>` and mixer models into public types.

use super::utils::{parse_bool, parse_optional, required_attribute};
use crate::error::XconError;
use crate::{model, types};

pub(super) fn resolve_codecs(model: &model::media::Codecs) -> Result<types::Codecs, XconError> {
    let decision = required_attribute(model.decision.as_deref(), "codecs", "decision")?.parse()?;
    let codecs = model
        .codec
        .iter()
        .map(|codec| {
            Ok::<_, XconError>(types::Codec {
                name: required_attribute(codec.name.as_deref(), "codec", "name")?.to_string(),
                policy: required_attribute(codec.policy.as_deref(), "codec", "policy")?
                    .parse()?,
                subtype: codec.subtype.clone(),
            })
        })
        .collect::<Result<Vec<_>, XconError>>()?;
    Ok(types::Codecs { decision, codecs })
}

pub(super) fn resolve_controls(
    model: &model::media::Controls,
) -> Result<types::Controls, XconError> {
    Ok(types::Controls {
        mute: parse_optional(model.mute.as_deref(), |v| parse_bool("mute", v))?,
        pause_video: parse_optional(model.pause_video.as_deref(), |v| {
            parse_bool("pause-video", v)
        })?,
        gain: parse_optional(model.gain.as_deref(), str::parse::<types::Gain>)?,
        video_layout: parse_optional(model.video_layout.as_deref(), str::parse)?,
    })
}

pub(super) fn resolve_mixer(model: &model::media::Mixer) -> Result<types::Mixer, XconError> {
    let name = required_attribute(model.name.as_deref(), "mixer", "name")?.parse()?;
    let floors = model
        .floor
        .iter()
        .map(|floor| {
            Ok::<_, XconError>(types::Floor {
                id: required_attribute(floor.id.as_deref(), "floor", "id")?.to_string(),
                value: parse_bool("floor", &floor.value)?,
            })
        })
        .collect::<Result<Vec<_>, XconError>>()?;
    Ok(types::Mixer { name, floors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::media::{Codec, Codecs, Controls, Floor, Mixer};

    #[test]
    fn test_resolve_codecs() {
        let model = Codecs {
            decision: Some("automatic".into()),
            codec: vec![Codec {
                name: Some("PCMU".into()),
                policy: Some("allowed".into()),
                subtype: Some("G711".into()),
            }],
        };
        let codecs = resolve_codecs(&model).unwrap();
        assert_eq!(codecs.decision, types::Decision::Automatic);
        assert_eq!(codecs.codecs[0].name, "PCMU");
        assert_eq!(codecs.codecs[0].policy, types::CodecPolicy::Allowed);
        assert_eq!(codecs.codecs[0].subtype.as_deref(), Some("G711"));
    }

    #[test]
    fn test_resolve_codecs_missing_decision() {
        let result = resolve_codecs(&Codecs::default());
        assert!(matches!(
            result,
            Err(XconError::MissingAttribute {
                element: "codecs",
                attribute: "decision"
            })
        ));
    }

    #[test]
    fn test_resolve_controls_gain_out_of_range() {
        let model = Controls {
            gain: Some("200".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_controls(&model),
            Err(XconError::InvalidValue { field: "gain", .. })
        ));
    }

    #[test]
    fn test_resolve_mixer() {
        let model = Mixer {
            name: Some("VideoIn".into()),
            floor: vec![Floor {
                id: Some("1".into()),
                value: "true".into(),
            }],
        };
        let mixer = resolve_mixer(&model).unwrap();
        assert_eq!(mixer.name, types::MixerName::VideoIn);
        assert_eq!(mixer.floors, vec![types::Floor { id: "1".into(), value: true }]);
    }
}
