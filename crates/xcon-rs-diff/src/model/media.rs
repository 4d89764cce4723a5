//! Contains model structs for media-level elements: `<codecs>`,
//! `<controls>` and the `<to-mixer>`/`<from-mixer>` mixer type.

use serde::{Deserialize, Serialize};

/// Represents `<codecs decision="...">` (`codecs-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Codecs {
    #[serde(rename = "@decision", default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,

    #[serde(rename = "codec", default, skip_serializing_if = "Vec::is_empty")]
    pub codec: Vec<Codec>,
}

/// Represents `<codec name="..." policy="...">` (`codec-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Codec {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@policy", default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    #[serde(rename = "subtype", default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

/// Represents `<controls>` (`controls-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Controls {
    #[serde(rename = "mute", default, skip_serializing_if = "Option::is_none")]
    pub mute: Option<String>,

    #[serde(rename = "pause-video", default, skip_serializing_if = "Option::is_none")]
    pub pause_video: Option<String>,

    #[serde(rename = "gain", default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<String>,

    #[serde(rename = "video-layout", default, skip_serializing_if = "Option::is_none")]
    pub video_layout: Option<String>,
}

/// Represents `<to-mixer name="...">` / `<from-mixer name="...">` (`mixer-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Mixer {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "floor", default, skip_serializing_if = "Vec::is_empty")]
    pub floor: Vec<Floor>,
}

/// Represents `<floor id="...">true</floor>` (`floor-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Floor {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: String,
}
