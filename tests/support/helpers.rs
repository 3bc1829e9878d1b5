// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use chatroom_core::application::services::ApplicationServices;
use chatroom_core::domain::user::UserRepository;
use chatroom_core::infrastructure::avatar::UiAvatarsGenerator;
use chatroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{DummyClock, DummyTokenManager};

pub fn build_services(user_repo: Arc<dyn UserRepository>) -> ApplicationServices {
    ApplicationServices::new(
        user_repo,
        Arc::new(DummyTokenManager),
        Arc::new(UiAvatarsGenerator::default()),
        Arc::new(DummyClock),
    )
}

pub fn build_test_state(user_repo: Arc<dyn UserRepository>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(user_repo)),
    }
}

pub fn make_test_router(user_repo: Arc<dyn UserRepository>) -> axum::Router {
    build_router(
        build_test_state(user_repo),
        &["http://localhost:3000".to_string()],
    )
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body).unwrap()
}

/// Sends a request and returns the status with the JSON body.
pub async fn send_json(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
    json
}
