//! RSVP REST API handlers
//!
//! Writes always act for the session's user; the body cannot pick another.

use crate::api::rsvps::rsvp_writes;
use crate::{ApiError, ApiResult, AppState, RequireIdentity};

use em_core::{CreateRsvpRequest, Identity, RsvpResponse, UpdateRsvpRequest};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/rsvps
pub async fn create_rsvp(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Json(req): Json<CreateRsvpRequest>,
) -> ApiResult<(StatusCode, Json<RsvpResponse>)> {
    let user_id = session_user(&identity)?;

    if let Some(requested) = req.user_id
        && requested != user_id
    {
        return Err(ApiError::forbidden("Cannot RSVP on behalf of another user"));
    }

    let rsvp = rsvp_writes::insert(&state.pool, user_id, req.event_id, req.status).await?;

    Ok((StatusCode::CREATED, Json(RsvpResponse { rsvp })))
}

/// PUT /api/v1/rsvps/{id}
pub async fn update_rsvp(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Path(id): Path<String>,
    Json(req): Json<UpdateRsvpRequest>,
) -> ApiResult<Json<RsvpResponse>> {
    let rsvp_id = Uuid::parse_str(&id)?;
    let user_id = session_user(&identity)?;

    let rsvp =
        rsvp_writes::change_status(&state.pool, user_id, rsvp_id, None, req.status).await?;

    Ok(Json(RsvpResponse { rsvp }))
}

fn session_user(identity: &Identity) -> ApiResult<Uuid> {
    identity
        .user_uuid()
        .map_err(|_| ApiError::forbidden("Session subject is not a user id"))
}
