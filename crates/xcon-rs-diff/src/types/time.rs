// crates/xcon-rs-diff/src/types/time.rs

//! Conference scheduling (`<conference-time>`).

/// Represents `<conference-time>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConferenceTime {
    pub entries: Vec<ConferenceTimeEntry>,
}

/// One scheduled occurrence of the conference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConferenceTimeEntry {
    /// `<base>` (Mandatory), an iCalendar object.
    pub base: String,
    pub mixing_start_offset: Option<TimeOffset>,
    pub mixing_end_offset: Option<TimeOffset>,
    pub can_join_after_offset: Option<TimeOffset>,
    pub must_join_before_offset: Option<TimeOffset>,
    /// `<request-user>`, an `xs:dateTime`.
    pub request_user: Option<String>,
    /// `<notify-end-of-conference>`, in seconds.
    pub notify_end_of_conference: Option<u32>,
    pub allowed_extend_mixing_end_offset: Option<bool>,
}

impl ConferenceTimeEntry {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Default::default()
        }
    }
}

/// A point in time relative to the mixing period, e.g. `<mixing-start-offset>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeOffset {
    /// The `xs:dateTime` text, kept as written.
    pub value: String,
    /// `@required-participant`, a single-role-type value such as `moderator`.
    pub required_participant: Option<String>,
}
