use std::sync::Arc;

use crate::application::ports::avatar::AvatarGenerator;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) avatars: Arc<dyn AvatarGenerator>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, avatars: Arc<dyn AvatarGenerator>) -> Self {
        Self { user_repo, avatars }
    }
}
