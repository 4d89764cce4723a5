// crates/xcon-rs-diff/src/types/mod.rs

//! Public, ergonomic data structures for XCON values and diff documents.

mod diff;
mod element;
mod enums;
mod floor;
mod media;
mod time;
mod users;

pub use diff::{Add, ConferenceInfoDiff, PatchOperation, Remove, Replace};
pub use element::XconElement;
pub use enums::{
    CodecPolicy, Decision, FloorAlgorithm, FloorRequestHandling, JoinHandling, JoinMethod,
    MixerName, MixingMode, Pos, ProvideAnonymity, UserAdmissionPolicy, VideoLayout, Ws,
};
pub use floor::{ConferenceFloorPolicy, FloorInformation, FloorPolicy};
pub use media::{Codec, Codecs, Controls, Floor, Gain, Mixer};
pub use time::{ConferenceTime, ConferenceTimeEntry, TimeOffset};
pub use users::{AllowedUsersList, DenyUsersList, PersistentList, PersistentUser, Target, UserRoles};
