use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CursorPage, SidebarUserDto},
        error::{ApplicationError, ApplicationResult},
        pagination::{PageSize, fetch_with_lookahead},
    },
    domain::user::{User, UserListCursor, UserWindow},
};

pub struct ListUsersQuery {
    pub limit: PageSize,
    pub cursor: Option<String>,
}

impl UserQueryService {
    /// One page of sidebar users: everyone but the requester, ascending by id,
    /// starting strictly after the cursor.
    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<CursorPage<SidebarUserDto>> {
        let after = self
            .decode_cursor(query.cursor.as_deref())?
            .map(|cursor| cursor.after);

        let page = fetch_with_lookahead(query.limit, |limit| {
            self.user_repo.list_window(UserWindow {
                exclude: actor.id,
                after,
                limit,
            })
        })
        .await?;

        let next_cursor = page.next_key(|user| UserListCursor::new(user.id).encode());
        let items: Vec<_> = page
            .items
            .into_iter()
            .map(|user| self.sidebar_entry(user))
            .collect();

        tracing::debug!(
            requester = %actor.id,
            returned = items.len(),
            has_next_page = next_cursor.is_some(),
            "listed sidebar users"
        );

        Ok(CursorPage::new(items, next_cursor))
    }

    fn decode_cursor(&self, token: Option<&str>) -> ApplicationResult<Option<UserListCursor>> {
        match token.filter(|value| !value.is_empty()) {
            Some(value) => UserListCursor::decode(value)
                .map(Some)
                .map_err(ApplicationError::from),
            None => Ok(None),
        }
    }

    fn sidebar_entry(&self, user: User) -> SidebarUserDto {
        let full_name = user.display_name();
        let profile_pic = match user.avatar() {
            Some(url) => url.to_string(),
            None => self.avatars.avatar_url(&full_name),
        };

        SidebarUserDto {
            id: user.id.into(),
            username: user.username.into(),
            full_name,
            email: user.email,
            profile_pic,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}
