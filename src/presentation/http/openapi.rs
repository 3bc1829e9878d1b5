// src/presentation/http/openapi.rs
use crate::application::dto::{CursorPage, SidebarUserDto};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Wire shape of one sidebar page. `nextCursor` is always present and is
/// `null` on the last page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPageResponse {
    pub users: Vec<SidebarUserDto>,
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
}

impl From<CursorPage<SidebarUserDto>> for UserPageResponse {
    fn from(page: CursorPage<SidebarUserDto>) -> Self {
        Self {
            users: page.items,
            next_cursor: page.next_cursor,
            has_next_page: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::profile::get_profile,
        crate::presentation::http::controllers::profile::update_profile,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            UserPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::profile::UpdateProfileRequest,
            crate::presentation::http::controllers::profile::UpdateProfileResponse,
            crate::application::dto::SidebarUserDto,
            crate::application::dto::UserDto,
            crate::application::dto::ProfileDto
        )
    ),
    tags(
        (name = "Users", description = "Sidebar user listing"),
        (name = "Profile", description = "Requester profile"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Chatroom API",
        description = "Chat backend: sidebar users and profiles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_PATH, get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

pub fn snapshot_path_from_env() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}
