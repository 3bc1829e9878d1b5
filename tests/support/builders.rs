// tests/support/builders.rs
use chatroom_core::domain::user::{User, UserId, Username};

use super::mocks::fixed_now;

pub struct UserBuilder {
    id: i64,
    username: String,
    full_name: Option<String>,
    name: Option<String>,
    email: Option<String>,
    profile_pic: Option<String>,
    bio: Option<String>,
}

impl UserBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: format!("user{id}"),
            full_name: Some(format!("User {id}")),
            name: None,
            email: Some(format!("user{id}@example.com")),
            profile_pic: None,
            bio: None,
        }
    }

    pub fn full_name(mut self, full_name: Option<&str>) -> Self {
        self.full_name = full_name.map(str::to_string);
        self
    }

    pub fn legacy_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    pub fn profile_pic(mut self, url: &str) -> Self {
        self.profile_pic = Some(url.to_string());
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }

    pub fn build(self) -> User {
        let now = fixed_now();
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            full_name: self.full_name,
            name: self.name,
            email: self.email,
            profile_pic: self.profile_pic,
            bio: self.bio,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Users `1..=count` with default fixture fields.
pub fn users(count: i64) -> Vec<User> {
    (1..=count).map(|id| UserBuilder::new(id).build()).collect()
}
