//! Axum extractors for the verified session identity

use crate::ApiError;
use crate::middleware::session_refresh::SessionRejection;

use em_core::Identity;

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The visitor's identity, if the session middleware verified one.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Option<Identity>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}

/// A verified identity; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct RequireIdentity(pub Identity);

impl<S: Send + Sync> FromRequestParts<S> for RequireIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(RequireIdentity(identity.clone()));
        }

        match parts.extensions.get::<SessionRejection>() {
            Some(rejection) => Err(ApiError::unauthorized(format!(
                "Session rejected ({})",
                rejection.code
            ))),
            None => Err(ApiError::unauthorized("Authentication required")),
        }
    }
}
