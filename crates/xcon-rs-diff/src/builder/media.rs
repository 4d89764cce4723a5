// crates/xcon-rs-diff/src/builder/media.rs

//! Contains builder functions to convert media-level `types` into `model` structs.

use crate::{model, types};

pub(super) fn build_model_codecs(public: &types::Codecs) -> model::Codecs {
    model::Codecs {
        decision: Some(public.decision.to_string()),
        codec: public
            .codecs
            .iter()
            .map(|codec| model::media::Codec {
                name: Some(codec.name.clone()),
                policy: Some(codec.policy.to_string()),
                subtype: codec.subtype.clone(),
            })
            .collect(),
    }
}

pub(super) fn build_model_controls(public: &types::Controls) -> model::Controls {
    model::Controls {
        mute: public.mute.map(|v| v.to_string()),
        pause_video: public.pause_video.map(|v| v.to_string()),
        gain: public.gain.map(|v| v.to_string()),
        video_layout: public.video_layout.map(|v| v.to_string()),
    }
}

pub(super) fn build_model_mixer(public: &types::Mixer) -> model::Mixer {
    model::Mixer {
        name: Some(public.name.to_string()),
        floor: public
            .floors
            .iter()
            .map(|floor| model::media::Floor {
                id: Some(floor.id.clone()),
                value: floor.value.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_model_controls() {
        let public = types::Controls {
            mute: Some(true),
            pause_video: None,
            gain: Some(types::Gain::new(-3).unwrap()),
            video_layout: Some(types::VideoLayout::DualView2x1),
        };
        let model = build_model_controls(&public);
        assert_eq!(model.mute.as_deref(), Some("true"));
        assert_eq!(model.pause_video, None);
        assert_eq!(model.gain.as_deref(), Some("-3"));
        assert_eq!(model.video_layout.as_deref(), Some("dual-view-2x1"));
    }
}
