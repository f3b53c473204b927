//! Reaction kind - the fixed set of reactions a user may leave on a post

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the four fixed reaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Heart,
    Laugh,
    Hot,
    BrokenHeart,
}

impl ReactionKind {
    /// Every kind, in counter column order
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Heart,
        ReactionKind::Laugh,
        ReactionKind::Hot,
        ReactionKind::BrokenHeart,
    ];

    /// Symbolic name, the only form ever written to storage
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Laugh => "laugh",
            Self::Hot => "hot",
            Self::BrokenHeart => "broken_heart",
        }
    }

    /// Every legacy spelling of this kind.
    ///
    /// Some clients strip the variation selector from the heart, so the bare
    /// codepoint is accepted as well. One handler revision wrote the emoji's
    /// UTF-8 bytes decoded as Windows-1252; those spellings are listed last.
    /// The heart lost two bytes that have no Windows-1252 mapping.
    pub const fn legacy_values(self) -> &'static [&'static str] {
        match self {
            Self::Heart => &[
                "\u{2764}\u{fe0f}",
                "\u{2764}",
                "\u{e2}\u{a4}\u{ef}\u{b8}",
            ],
            Self::Laugh => &["\u{1f602}", "\u{f0}\u{178}\u{2dc}\u{201a}"],
            Self::Hot => &["\u{1f975}", "\u{f0}\u{178}\u{a5}\u{b5}"],
            Self::BrokenHeart => &["\u{1f494}", "\u{f0}\u{178}\u{2019}\u{201d}"],
        }
    }

    /// Interpret a value read back from storage, accepting the symbolic name
    /// as well as the legacy emoji forms
    pub fn from_stored(value: &str) -> Option<Self> {
        if let Ok(kind) = value.parse() {
            return Some(kind);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.legacy_values().contains(&value))
    }

    /// Whether a stored value is a legacy emoji that should be rewritten
    pub fn is_legacy_value(value: &str) -> bool {
        value.parse::<Self>().is_err() && Self::from_stored(value).is_some()
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing: only the symbolic names are valid client input
impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart" => Ok(Self::Heart),
            "laugh" => Ok(Self::Laugh),
            "hot" => Ok(Self::Hot),
            "broken_heart" => Ok(Self::BrokenHeart),
            other => Err(DomainError::InvalidReactionKind(other.to_string())),
        }
    }
}
