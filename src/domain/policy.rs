//! Closed-set policy axes read from the settings file.
//!
//! Each axis is resolved through a fixed tag table; lookup is
//! case-insensitive and anything outside the table is rejected. These
//! policies steer what the launcher does unattended, so an unknown tag is
//! never mapped to a default.

/// A policy axis with a fixed set of textual tags.
pub trait PolicyTag: Sized + Copy + 'static {
    /// Human-readable axis name used in error messages.
    const AXIS: &'static str;
    /// Every accepted tag, canonical tag first for each variant.
    const TAGS: &'static [(&'static str, Self)];

    fn from_tag(raw: &str) -> Option<Self> {
        Self::TAGS
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(raw))
            .map(|(_, variant)| *variant)
    }
}

/// How to answer a prompt about an incoming API connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomingConnectionPolicy {
    Accept,
    Reject,
    Ignore,
    #[default]
    Manual,
}

impl PolicyTag for IncomingConnectionPolicy {
    const AXIS: &'static str = "incoming connection action";
    const TAGS: &'static [(&'static str, Self)] = &[
        ("accept", Self::Accept),
        ("reject", Self::Reject),
        ("ignore", Self::Ignore),
        ("manual", Self::Manual),
    ];
}

/// What to do when another session is already logged in with the same user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingSessionPolicy {
    Primary,
    PrimaryOverride,
    Secondary,
    #[default]
    Manual,
}

impl PolicyTag for ExistingSessionPolicy {
    const AXIS: &'static str = "existing session action";
    const TAGS: &'static [(&'static str, Self)] = &[
        ("primary", Self::Primary),
        ("primaryoverride", Self::PrimaryOverride),
        ("secondary", Self::Secondary),
        ("manual", Self::Manual),
    ];
}

/// Whether window components are logged, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentLogPolicy {
    Activate,
    Open,
    #[default]
    Never,
}

impl PolicyTag for ComponentLogPolicy {
    const AXIS: &'static str = "component log policy";
    const TAGS: &'static [(&'static str, Self)] = &[
        ("activate", Self::Activate),
        ("open", Self::Open),
        ("yes", Self::Open),
        ("never", Self::Never),
        ("no", Self::Never),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradingMode {
    #[default]
    Live,
    Paper,
}

impl PolicyTag for TradingMode {
    const AXIS: &'static str = "trading mode";
    const TAGS: &'static [(&'static str, Self)] =
        &[("live", Self::Live), ("paper", Self::Paper)];
}

/// Canonical tag of a variant: the first table entry that maps to it.
pub fn as_tag<P: PolicyTag + PartialEq>(variant: P) -> &'static str {
    P::TAGS
        .iter()
        .find(|(_, v)| *v == variant)
        .map(|(tag, _)| *tag)
        .unwrap_or("unknown")
}
