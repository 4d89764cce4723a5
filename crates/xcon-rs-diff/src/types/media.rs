// crates/xcon-rs-diff/src/types/media.rs

//! Media-level values: codec policy, mixer controls and mixer floors.

use super::enums::{CodecPolicy, Decision, MixerName, VideoLayout};
use crate::error::XconError;

/// Represents `<codecs>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codecs {
    /// `@decision` (Mandatory)
    pub decision: Decision,
    /// All `<codec>` children, in document order.
    pub codecs: Vec<Codec>,
}

impl Codecs {
    pub fn new(decision: Decision) -> Self {
        Self {
            decision,
            codecs: Vec::new(),
        }
    }

    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codecs.push(codec);
        self
    }
}

/// Represents one `<codec>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    /// `@name` (Mandatory), e.g. `PCMU`.
    pub name: String,
    /// `@policy` (Mandatory)
    pub policy: CodecPolicy,
    /// `<subtype>`
    pub subtype: Option<String>,
}

impl Codec {
    pub fn new(name: impl Into<String>, policy: CodecPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            subtype: None,
        }
    }
}

/// Audio gain of a mixer, in the range -127..=127.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Gain(i8);

impl Gain {
    pub const MIN: i32 = -127;
    pub const MAX: i32 = 127;

    /// Checks the range and wraps the value.
    pub fn new(value: i32) -> Result<Self, XconError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(XconError::InvalidValue {
                field: "gain",
                value: value.to_string(),
            });
        }
        // The range check above keeps this lossless.
        Ok(Self(value as i8))
    }

    pub fn value(self) -> i8 {
        self.0
    }
}

impl core::str::FromStr for Gain {
    type Err = XconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i32>().map_err(|_| XconError::InvalidValue {
            field: "gain",
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl core::fmt::Display for Gain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents `<controls>`. Every control is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// `<mute>`
    pub mute: Option<bool>,
    /// `<pause-video>`
    pub pause_video: Option<bool>,
    /// `<gain>`
    pub gain: Option<Gain>,
    /// `<video-layout>`
    pub video_layout: Option<VideoLayout>,
}

/// Represents `<to-mixer>` and `<from-mixer>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mixer {
    /// `@name` (Mandatory)
    pub name: MixerName,
    pub floors: Vec<Floor>,
}

impl Mixer {
    pub fn new(name: MixerName) -> Self {
        Self {
            name,
            floors: Vec::new(),
        }
    }

    pub fn with_floor(mut self, id: impl Into<String>, value: bool) -> Self {
        self.floors.push(Floor {
            id: id.into(),
            value,
        });
        self
    }
}

/// Represents `<floor id="...">true</floor>` inside a mixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    /// `@id` (Mandatory)
    pub id: String,
    pub value: bool,
}
