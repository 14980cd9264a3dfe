//! Browser auth endpoints: email confirmation landing and page sign-out

use crate::AppState;

use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub error: Option<String>,
}

/// GET /auth/confirm
///
/// Sign-up confirmation links land here with the new session's tokens.
pub async fn confirm(State(state): State<AppState>, Query(query): Query<ConfirmQuery>) -> Response {
    if let Some(error) = query.error.as_deref() {
        log::warn!("Auth confirmation failed: {}", error);
        return Redirect::to(&state.sign_in_path).into_response();
    }

    let (Some(access_token), Some(_refresh_token), Some("signup")) = (
        query.access_token.as_deref(),
        query.refresh_token.as_deref(),
        query.kind.as_deref(),
    ) else {
        return Redirect::to("/").into_response();
    };

    match state.verify_claims(access_token) {
        Ok(claims) => {
            let max_age = claims.exp - Utc::now().timestamp();
            log::info!("Sign-up confirmed for user {}", claims.sub);
            (
                [(SET_COOKIE, state.session_cookie.set(access_token, max_age))],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(e) => {
            log::warn!("Confirmation token rejected: {}", e);
            Redirect::to(&state.sign_in_path).into_response()
        }
    }
}

/// POST /auth/signout - clear the session cookie and go to the sign-in page
pub async fn sign_out(State(state): State<AppState>) -> Response {
    (
        [(SET_COOKIE, state.session_cookie.clear())],
        Redirect::to(&state.sign_in_path),
    )
        .into_response()
}
