// tests/support/mocks/security.rs
use async_trait::async_trait;
use chatroom_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use chatroom_core::domain::user::UserId;
use chrono::Duration;

use super::time::fixed_now;

/// Authenticates as user 1.
pub const TEST_TOKEN: &str = "test-token";
/// Authenticates as a user id that is not in any fixture store.
pub const GHOST_TOKEN: &str = "ghost-token";
pub const GHOST_USER_ID: i64 = 9_999;

pub struct DummyTokenManager;

fn identity(id: i64, username: &str) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId(id),
        username: username.to_string(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(identity(1, "user1")),
            GHOST_TOKEN => Ok(identity(GHOST_USER_ID, "ghost")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
