//! Event REST API handlers
//!
//! Read-only: events are created outside this application.

use crate::{ApiError, ApiResult, AppState, CurrentIdentity};

use em_core::{AttendeeListResponse, EventListResponse, EventResponse, EventSummaryListResponse};
use em_db::{EventRepository, RsvpRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

/// GET /api/v1/events
///
/// Upcoming events, soonest first, with organizer and RSVP counts
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<EventListResponse>> {
    let repo = EventRepository::new(state.pool.clone());
    let events = repo.list_upcoming(Utc::now()).await?;

    Ok(Json(EventListResponse { events }))
}

/// GET /api/v1/events/summary
pub async fn event_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<EventSummaryListResponse>> {
    let repo = EventRepository::new(state.pool.clone());
    let summaries = repo.summaries().await?;

    Ok(Json(EventSummaryListResponse { summaries }))
}

/// GET /api/v1/events/{id}
///
/// Includes the caller's own RSVP when the request carries a session
pub async fn get_event(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = Uuid::parse_str(&id)?;
    let viewer = identity.and_then(|identity| identity.user_uuid().ok());

    let repo = EventRepository::new(state.pool.clone());
    let event = repo
        .find_with_organizer(event_id, viewer)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Event {} not found", id)))?;

    Ok(Json(EventResponse { event }))
}

/// GET /api/v1/events/{id}/rsvps
///
/// RSVP rows joined with the responding user's name and email
pub async fn list_event_rsvps(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AttendeeListResponse>> {
    let event_id = Uuid::parse_str(&id)?;

    let repo = RsvpRepository::new(state.pool.clone());
    let rsvps = repo.find_by_event(event_id).await?;

    Ok(Json(AttendeeListResponse { rsvps }))
}
