// tests/support/mocks/user_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chatroom_core::domain::errors::{DomainError, DomainResult};
use chatroom_core::domain::user::{ProfileUpdate, User, UserId, UserRepository, UserWindow};

/// Users keyed by id so iteration is already in ascending id order.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<BTreeMap<UserId, User>>,
    updates: AtomicUsize,
    windows: Mutex<Vec<UserWindow>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.users.lock().unwrap();
            for user in users {
                map.insert(user.id, user);
            }
        }
        repo
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Windows requested so far, in call order.
    pub fn windows(&self) -> Vec<UserWindow> {
        self.windows.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&UserId(id)).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(full_name) = update.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(profile_pic) = update.profile_pic {
            user.profile_pic = Some(profile_pic);
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn list_window(&self, window: UserWindow) -> DomainResult<Vec<User>> {
        self.windows.lock().unwrap().push(window);
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .filter(|user| window.matches(user.id))
            .take(window.limit as usize)
            .cloned()
            .collect())
    }
}

/// Every call fails the way an unreachable database would.
pub struct FailingUserRepo;

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn update_profile(&self, _update: ProfileUpdate) -> DomainResult<User> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_window(&self, _window: UserWindow) -> DomainResult<Vec<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
