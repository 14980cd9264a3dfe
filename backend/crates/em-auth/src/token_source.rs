//! Pulling session tokens out of request headers.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};

const BEARER_PREFIX: &str = "Bearer ";

/// Token from an `Authorization: Bearer` header.
///
/// `Ok(None)` when the header is absent; an error when it is present but
/// unusable.
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> AuthErrorResult<Option<String>> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| AuthError::InvalidToken {
        message: "Authorization header is not valid ASCII".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Some(token.to_string()))
}

/// Value of the named cookie, if any `Cookie` header carries it.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Bearer header first, then the session cookie.
#[track_caller]
pub fn request_token(headers: &HeaderMap, cookie_name: &str) -> AuthErrorResult<Option<String>> {
    if let Some(token) = bearer_token(headers)? {
        return Ok(Some(token));
    }
    Ok(cookie_value(headers, cookie_name))
}
