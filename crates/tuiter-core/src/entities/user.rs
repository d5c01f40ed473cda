//! User entity - represents a platform account

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// Kind of account a user registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    #[default]
    Personal,
    Academic,
    Professional,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "PERSONAL",
            Self::Academic => "ACADEMIC",
            Self::Professional => "PROFESSIONAL",
        }
    }

    /// Parse from the wire/storage representation; unknown values fall
    /// back to the default rather than failing a whole row load.
    pub fn parse(s: &str) -> Self {
        match s {
            "ACADEMIC" => Self::Academic,
            "PROFESSIONAL" => Self::Professional,
            _ => Self::Personal,
        }
    }
}

/// Self-reported marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Married => "MARRIED",
            Self::Widowed => "WIDOWED",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "MARRIED" => Self::Married,
            "WIDOWED" => Self::Widowed,
            _ => Self::Single,
        }
    }
}

/// Geographic coordinates attached to a profile
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_photo: Option<String>,
    pub header_image: Option<String>,
    pub biography: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub account_type: AccountType,
    pub marital_status: MaritalStatus,
    pub location: Option<GeoLocation>,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            first_name: None,
            last_name: None,
            profile_photo: None,
            header_image: None,
            biography: None,
            date_of_birth: None,
            account_type: AccountType::default(),
            marital_status: MaritalStatus::default(),
            location: None,
            joined_at: Utc::now(),
        }
    }

    /// Full display name, falling back to the username when no name is set
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }

    /// Check if the profile carries geographic coordinates
    #[inline]
    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }
}
