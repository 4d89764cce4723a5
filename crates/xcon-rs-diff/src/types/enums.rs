// crates/xcon-rs-diff/src/types/enums.rs

//! Enumerated simple types of the XCON and patch-ops schemas.

use crate::error::XconError;

/// Declares a schema enumeration with its literal spellings.
///
/// Generates `as_str`, `FromStr` (surrounding whitespace is collapsed as for
/// `xs:token`) and `Display`.
macro_rules! xsd_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in schema order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal used in XML.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }
        }

        impl core::str::FromStr for $name {
            type Err = XconError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $lit => Ok($name::$variant), )+
                    other => Err(XconError::InvalidValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

xsd_enum! {
    /// `mixing-mode-type`.
    MixingMode, "mixing-mode" {
        ModeratorControlled => "moderator-controlled",
        Fcfs => "FCFS",
        Automatic => "automatic",
    }
}

xsd_enum! {
    /// `decision-type`: who picks the codec among the allowed ones.
    Decision, "codecs/@decision" {
        Automatic => "automatic",
        Single => "single",
    }
}

xsd_enum! {
    /// `policy-type` of a `<codec>`.
    CodecPolicy, "codec/@policy" {
        Allowed => "allowed",
        Disallowed => "disallowed",
    }
}

xsd_enum! {
    /// `video-layout-type`.
    VideoLayout, "video-layout" {
        SingleView => "single-view",
        DualView => "dual-view",
        DualViewCrop => "dual-view-crop",
        DualView2x1 => "dual-view-2x1",
        DualView2x1Crop => "dual-view-2x1-crop",
        QuadView => "quad-view",
        Multiple3x3 => "multiple-3x3",
        Multiple4x4 => "multiple-4x4",
        Multiple5x1 => "multiple-5x1",
    }
}

impl Default for VideoLayout {
    fn default() -> Self {
        Self::SingleView
    }
}

xsd_enum! {
    /// `mixer-name-type`.
    MixerName, "mixer/@name" {
        VideoIn => "VideoIn",
        VideoOut => "VideoOut",
        AudioOut => "AudioOut",
        AudioIn => "AudioIn",
    }
}

xsd_enum! {
    /// `floor-request-handling-type`.
    FloorRequestHandling, "floor-request-handling" {
        Block => "block",
        Confirm => "confirm",
    }
}

xsd_enum! {
    /// `algorithm-type` of a floor policy.
    FloorAlgorithm, "algorithm" {
        ModeratorControlled => "moderator-controlled",
        Fcfs => "FCFS",
        Random => "random",
    }
}

xsd_enum! {
    /// `method-type`: how an allowed user joins.
    JoinMethod, "target/@method" {
        DialIn => "dial-in",
        DialOut => "dial-out",
        Refer => "refer",
    }
}

xsd_enum! {
    /// `join-handling-type`.
    JoinHandling, "join-handling" {
        Block => "block",
        Confirm => "confirm",
        Allow => "allow",
        Authenticate => "authenticate",
        DirectedOperator => "directed-operator",
    }
}

xsd_enum! {
    /// `user-admission-policy-type`.
    UserAdmissionPolicy, "user-admission-policy" {
        ClosedAuthenticated => "closedAuthenticated",
        OpenAuthenticated => "openAuthenticated",
        Anonymous => "anonymous",
    }
}

xsd_enum! {
    /// `provide-anonymity-type`.
    ProvideAnonymity, "provide-anonymity" {
        Private => "private",
        SemiPrivate => "semi-private",
        Hidden => "hidden",
    }
}

xsd_enum! {
    /// `pos` of an `<add>`: where the content goes relative to the target.
    Pos, "add/@pos" {
        Before => "before",
        After => "after",
        Prepend => "prepend",
    }
}

xsd_enum! {
    /// `ws` of a `<remove>`: which adjacent whitespace node goes too.
    Ws, "remove/@ws" {
        Before => "before",
        After => "after",
        Both => "both",
    }
}
