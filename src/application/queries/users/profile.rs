use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Profile of the requester. A valid token for a user that no longer
    /// exists is treated as an authentication failure.
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("user no longer exists"))?;

        Ok(user.into())
    }
}
