//! Reaction entity - one user's like or dislike edge on a tuit

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// The two mutually exclusive reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// The conflicting kind that a toggle-on must clear
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Storage/wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(format!("unknown reaction kind: {other}")),
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction edge: at most one per (user, tuit, kind)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Snowflake,
    pub tuit_id: Snowflake,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction edge
    pub fn new(user_id: Snowflake, tuit_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            user_id,
            tuit_id,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Check the kind of this edge
    #[inline]
    pub fn is_kind(&self, kind: ReactionKind) -> bool {
        self.kind == kind
    }
}
