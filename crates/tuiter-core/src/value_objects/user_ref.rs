//! UserRef - a user reference that may be the literal `me` placeholder
//!
//! Route paths accept either a concrete user id or the string `me`, which
//! stands for "whoever owns the current session". The placeholder is parsed
//! into this sum type once at the HTTP boundary and resolved to a concrete
//! id before any business logic runs, so nothing downstream ever sees the
//! sentinel string.

use std::fmt;

use crate::error::DomainError;
use crate::value_objects::snowflake::{Snowflake, SnowflakeParseError};

/// A possibly-self-referential user reference from a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRef {
    /// The literal `me` placeholder
    Me,
    /// A concrete user id
    Id(Snowflake),
}

impl UserRef {
    /// Parse a path segment: `me` or a numeric id
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        if s == "me" {
            Ok(Self::Me)
        } else {
            Snowflake::parse(s).map(Self::Id)
        }
    }

    /// Resolve to a concrete user id against the session identity.
    ///
    /// `Me` without a session is rejected; it never defaults to an
    /// anonymous or empty identity.
    pub fn resolve(self, session_user: Option<Snowflake>) -> Result<Snowflake, DomainError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Me => session_user.ok_or(DomainError::IdentityUnresolvable),
        }
    }

    /// Check if this is the `me` placeholder
    #[inline]
    pub fn is_me(self) -> bool {
        matches!(self, Self::Me)
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => f.write_str("me"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl std::str::FromStr for UserRef {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRef::parse(s)
    }
}

impl From<Snowflake> for UserRef {
    fn from(id: Snowflake) -> Self {
        Self::Id(id)
    }
}
