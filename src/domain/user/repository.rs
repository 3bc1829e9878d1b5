use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{ProfileUpdate, User},
    value_objects::UserId,
};
use async_trait::async_trait;

/// Keyset selection over the users collection: every user except `exclude`
/// whose id is strictly greater than `after`, ascending by id, at most
/// `limit` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserWindow {
    pub exclude: UserId,
    pub after: Option<UserId>,
    pub limit: u32,
}

impl UserWindow {
    pub fn matches(&self, id: UserId) -> bool {
        id != self.exclude && self.after.is_none_or(|after| id > after)
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User>;

    async fn list_window(&self, window: UserWindow) -> DomainResult<Vec<User>>;
}
