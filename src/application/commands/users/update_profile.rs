use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::ProfileUpdate,
};

/// Fields a user may change on their own profile. Empty strings are treated
/// as not provided.
#[derive(Debug, Default, Clone)]
pub struct UpdateProfileCommand {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = ProfileUpdate::new(actor.id, self.clock.now());

        if let Some(name) = provided(command.name) {
            update = update.with_full_name(name);
        }
        if let Some(bio) = provided(command.bio) {
            update = update.with_bio(bio);
        }
        if let Some(avatar) = provided(command.avatar) {
            update = update.with_profile_pic(avatar);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "At least one field is required.",
            ));
        }

        let user = self.user_repo.update_profile(update).await?;
        tracing::info!(user_id = %actor.id, "profile updated");
        Ok(user.into())
    }
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
