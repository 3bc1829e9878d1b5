// src/presentation/http/controllers/profile.rs
use crate::application::{
    commands::users::UpdateProfileCommand,
    dto::{ProfileDto, UserDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, body::Bytes};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const PROFILE_UPDATED: &str = "Profile updated successfully";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateProfileRequest {
    /// An empty body is the same as `{}`.
    fn from_body(body: &[u8]) -> HttpResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|err| {
            HttpError::from_error(ApplicationError::validation(format!(
                "invalid JSON body: {err}"
            )))
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: UserDto,
}

#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile of the requester.", body = ProfileDto),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated.", body = UpdateProfileResponse),
        (status = 400, description = "No updatable field supplied.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Requester no longer exists.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    body: Bytes,
) -> HttpResult<Json<UpdateProfileResponse>> {
    let payload = UpdateProfileRequest::from_body(&body)?;
    let command = UpdateProfileCommand {
        name: payload.name,
        bio: payload.bio,
        avatar: payload.avatar,
    };

    let updated = state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()?;

    Ok(Json(UpdateProfileResponse {
        message: PROFILE_UPDATED.to_string(),
        user: updated,
    }))
}
