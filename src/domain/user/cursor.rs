use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::UserId;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Resume point for the sidebar listing. Externally it is an opaque
/// URL-safe token; internally it is the last id that was handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserListCursor {
    pub after: UserId,
}

impl UserListCursor {
    pub fn new(after: UserId) -> Self {
        Self { after }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.after.to_string().as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let after = raw.parse::<UserId>().map_err(|_| invalid())?;
        Ok(Self::new(after))
    }
}
