//! Per-request session validation.
//!
//! Every request's bearer token (or session cookie) is verified once here.
//! A verified [`Identity`] is stored in the request extensions for handlers
//! and extractors; a cookie that no longer verifies is cleared on the way out.

use crate::AppState;

use em_auth::{cookie_value, request_token};
use em_core::Identity;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};

/// Stored in extensions when a token was presented but rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRejection {
    pub code: &'static str,
}

pub async fn refresh_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie_name = state.session_cookie.name();
    let mut clear_cookie = false;

    match request_token(req.headers(), cookie_name) {
        Ok(Some(token)) => match state.verify_token(&token) {
            Ok(identity) => {
                log::trace!("Session verified for user {}", identity.id);
                req.extensions_mut().insert::<Identity>(identity);
            }
            Err(err) => {
                log::debug!("Session token rejected: {}", err);
                // Only a stale cookie can be repaired from here
                clear_cookie = cookie_value(req.headers(), cookie_name).as_deref() == Some(token.as_str());
                req.extensions_mut().insert(SessionRejection {
                    code: err.error_code(),
                });
            }
        },
        Ok(None) => {}
        Err(err) => {
            log::debug!("Unusable Authorization header: {}", err);
            req.extensions_mut().insert(SessionRejection {
                code: err.error_code(),
            });
        }
    }

    let mut response = next.run(req).await;

    if clear_cookie && let Ok(value) = HeaderValue::from_str(&state.session_cookie.clear()) {
        response.headers_mut().append(SET_COOKIE, value);
    }

    response
}
