#![allow(dead_code)]

//! Test infrastructure for em-server router tests

use em_auth::{Claims, JwtValidator};
use em_config::{AuthConfig, SiteConfig};
use em_core::{Event, Profile, Rsvp, RsvpStatus};
use em_db::{Database, EventRepository, RsvpRepository, UserRepository};
use em_server::{AppState, build_router};

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub const SECRET: &str = "router-test-secret-at-least-32-bytes";
pub const COOKIE: &str = "em_session";

/// AppState over a fresh in-memory database, verifying HS256 tokens
pub async fn create_test_app_state() -> AppState {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let auth = AuthConfig {
        enabled: true,
        jwt_secret: Some(SECRET.to_string()),
        ..AuthConfig::default()
    };

    AppState::new(
        pool,
        Some(Arc::new(JwtValidator::with_hs256(SECRET.as_bytes()))),
        &auth,
        &SiteConfig::default(),
    )
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Signed session token for `user_id`, valid for an hour
pub fn token_for(user_id: Uuid) -> String {
    token_with_expiry(user_id, 3600)
}

pub fn token_with_expiry(user_id: Uuid, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: Some(format!("{}@test.local", user_id)),
        user_metadata: BTreeMap::new(),
        exp: now + exp_offset_secs,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub async fn create_test_user(pool: &SqlitePool, name: &str) -> Profile {
    let id = Uuid::new_v4();
    let profile = Profile::new(id, name.to_string(), format!("{}@test.local", id));
    UserRepository::new(pool.clone())
        .create(&profile)
        .await
        .expect("Failed to create test user");
    profile
}

/// Event `days_from_now` days away, organized by `organizer`
pub async fn create_test_event(
    pool: &SqlitePool,
    organizer: Uuid,
    title: &str,
    days_from_now: i64,
) -> Event {
    let event = Event::new(
        title.to_string(),
        Some(format!("About {}", title)),
        Utc::now() + Duration::days(days_from_now),
        "Berlin".to_string(),
        organizer,
    );
    EventRepository::new(pool.clone())
        .create(&event)
        .await
        .expect("Failed to create test event");
    event
}

pub async fn create_test_rsvp(
    pool: &SqlitePool,
    user_id: Uuid,
    event_id: Uuid,
    status: RsvpStatus,
) -> Rsvp {
    let rsvp = Rsvp::new(user_id, event_id, status);
    RsvpRepository::new(pool.clone())
        .create(&rsvp)
        .await
        .expect("Failed to create test RSVP");
    rsvp
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("{}={}", COOKIE, token))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn form_request(uri: &str, cookie_token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = cookie_token {
        builder = builder.header(header::COOKIE, format!("{}={}", COOKIE, token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
