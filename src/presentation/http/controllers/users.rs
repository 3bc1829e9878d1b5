// src/presentation/http/controllers/users.rs
use crate::application::{pagination::PageSize, queries::users::ListUsersQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::UserPageResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::RawQuery};
use utoipa::IntoParams;

/// Raw query parameters. `limit` stays a string so that unparsable values
/// fall back to the default page size instead of failing the request.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Page size; non-positive or non-numeric values mean 20.
    pub limit: Option<String>,
    /// Opaque token from a previous `nextCursor`.
    pub cursor: Option<String>,
}

impl ListUsersParams {
    /// Never rejects: unknown keys are ignored and a repeated key keeps its
    /// first value.
    pub fn from_query(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = raw
            .and_then(|query| serde_urlencoded::from_str(query).ok())
            .unwrap_or_default();

        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "cursor" => &mut params.cursor,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of sidebar users.", body = UserPageResponse),
        (status = 400, description = "Malformed cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RawQuery(raw): RawQuery,
) -> HttpResult<Json<UserPageResponse>> {
    let params = ListUsersParams::from_query(raw.as_deref());
    let query = ListUsersQuery {
        limit: PageSize::from_param(params.limit.as_deref()),
        cursor: params.cursor,
    };

    state
        .services
        .user_queries
        .list_users(&user, query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}
