// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    ProfileUpdate, User, UserId, UserRepository, UserWindow, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Profile columns only. The credential column is owned by the auth service
/// and never read here.
const USER_COLUMNS: &str =
    "id, username, full_name, name, email, profile_pic, bio, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: ProfileUpdate) -> QueryBuilder<'static, Postgres> {
        let ProfileUpdate {
            id,
            full_name,
            bio,
            profile_pic,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(full_name) = full_name {
            builder.push(", full_name = ");
            builder.push_bind(full_name);
        }

        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }

        if let Some(profile_pic) = profile_pic {
            builder.push(", profile_pic = ");
            builder.push_bind(profile_pic);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        builder
    }

    fn build_window_query(window: UserWindow) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(USER_COLUMNS);
        builder.push(" FROM users WHERE id <> ");
        builder.push_bind(i64::from(window.exclude));

        if let Some(after) = window.after {
            builder.push(" AND id > ");
            builder.push_bind(i64::from(after));
        }

        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(i64::from(window.limit));

        builder
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    full_name: Option<String>,
    name: Option<String>,
    email: Option<String>,
    profile_pic: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            full_name: row.full_name,
            name: row.name,
            email: row.email,
            profile_pic: row.profile_pic,
            bio: row.bio,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = Self::build_update_query(update);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn list_window(&self, window: UserWindow) -> DomainResult<Vec<User>> {
        let mut builder = Self::build_window_query(window);

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> UserId {
        UserId::new(raw).unwrap()
    }

    #[test]
    fn window_query_without_cursor_only_excludes_requester() {
        let builder = PostgresUserRepository::build_window_query(UserWindow {
            exclude: id(7),
            after: None,
            limit: 21,
        });
        let sql = builder.sql();
        assert!(sql.contains("WHERE id <> $1"));
        assert!(!sql.contains("id >"));
        assert!(sql.ends_with("ORDER BY id ASC LIMIT $2"));
    }

    #[test]
    fn window_query_with_cursor_is_strictly_after() {
        let builder = PostgresUserRepository::build_window_query(UserWindow {
            exclude: id(7),
            after: Some(id(40)),
            limit: 21,
        });
        let sql = builder.sql();
        assert!(sql.contains("WHERE id <> $1 AND id > $2"));
        assert!(sql.ends_with("ORDER BY id ASC LIMIT $3"));
    }

    #[test]
    fn queries_never_read_the_credential_column() {
        let window = PostgresUserRepository::build_window_query(UserWindow {
            exclude: id(1),
            after: Some(id(2)),
            limit: 21,
        });
        let update = PostgresUserRepository::build_update_query(
            ProfileUpdate::new(id(1), Utc::now()).with_full_name("Ada"),
        );
        for sql in [window.sql(), update.sql()] {
            assert!(!sql.contains("password"), "{sql}");
        }
    }

    #[test]
    fn update_query_only_sets_provided_fields() {
        let update = ProfileUpdate::new(id(3), Utc::now()).with_bio("hi");
        let builder = PostgresUserRepository::build_update_query(update);
        let sql = builder.sql();
        assert!(sql.starts_with("UPDATE users SET updated_at = $1, bio = $2 WHERE id = $3"));
        assert!(!sql.contains("full_name ="));
        assert!(!sql.contains("profile_pic ="));
        assert!(!sql.contains("password_hash ="));
    }
}
