// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

pub const FALLBACK_DISPLAY_NAME: &str = "User";

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub full_name: Option<String>,
    /// Legacy name column some accounts were created with.
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name shown in the sidebar: full name, then legacy name, then the local
    /// part of the email address, then a fixed placeholder. Empty values are
    /// skipped.
    pub fn display_name(&self) -> String {
        non_empty(self.full_name.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .or_else(|| non_empty(self.email.as_deref()).map(email_local_part))
            .unwrap_or(FALLBACK_DISPLAY_NAME)
            .to_string()
    }

    /// Stored avatar URL, if one is set and non-empty.
    pub fn avatar(&self) -> Option<&str> {
        non_empty(self.profile_pic.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Partial profile change. Only fields that are `Some` are written.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: UserId,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: None,
            bio: None,
            profile_pic: None,
            updated_at,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_profile_pic(mut self, profile_pic: impl Into<String>) -> Self {
        self.profile_pic = Some(profile_pic.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.bio.is_none() && self.profile_pic.is_none()
    }
}
