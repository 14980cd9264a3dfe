//! JSON auth endpoints used by API clients holding a bearer token

use crate::{ApiResult, AppState, RequireIdentity};

use em_core::UserResponse;

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /auth/v1/user
///
/// The authoritative identity behind the presented token, 401 otherwise
pub async fn current_user(
    RequireIdentity(identity): RequireIdentity,
) -> ApiResult<Json<UserResponse>> {
    Ok(Json(UserResponse { user: identity }))
}

/// POST /auth/v1/logout
///
/// Tokens are stateless, so this only drops the browser's session cookie
pub async fn logout(State(state): State<AppState>) -> Response {
    log::debug!("Sign-out acknowledged");

    (
        [(SET_COOKIE, state.session_cookie.clear())],
        Json(json!({ "success": true })),
    )
        .into_response()
}
