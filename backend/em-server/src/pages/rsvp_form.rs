//! POST /events/{id}/rsvp - RSVP form submitted from the event page
//!
//! Anonymous visitors go to the sign-in page. Every outcome redirects back
//! to the event page, which re-reads the counts.

use crate::api::rsvps::rsvp_writes;
use crate::{ApiError, ApiResult, AppState, CurrentIdentity};

use em_core::{Identity, Rsvp, RsvpStatus};

use std::str::FromStr;

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RsvpForm {
    #[serde(default)]
    pub status: String,
    /// The visitor's existing RSVP; empty or absent for a first response
    #[serde(default)]
    pub rsvp_id: Option<String>,
}

impl RsvpForm {
    fn existing_rsvp_id(&self) -> ApiResult<Option<Uuid>> {
        match self.rsvp_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(id) => Ok(Some(Uuid::parse_str(id)?)),
        }
    }
}

pub async fn submit_rsvp(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
    Form(form): Form<RsvpForm>,
) -> Response {
    let Some(identity) = identity else {
        return Redirect::to(&state.sign_in_path).into_response();
    };

    let event_page = format!("/events/{}", urlencoding::encode(&id));

    match write_rsvp(&state, &identity, &id, &form).await {
        Ok(rsvp) => {
            log::debug!("RSVP {} saved from event page", rsvp.id);
            Redirect::to(&event_page).into_response()
        }
        Err(e) => {
            log::warn!("RSVP error: {}", e);
            Redirect::to(&format!("{}?rsvp_error=1", event_page)).into_response()
        }
    }
}

async fn write_rsvp(
    state: &AppState,
    identity: &Identity,
    event_id: &str,
    form: &RsvpForm,
) -> ApiResult<Rsvp> {
    let event_id = Uuid::parse_str(event_id)?;
    let status = RsvpStatus::from_str(&form.status)?;
    let user_id = identity
        .user_uuid()
        .map_err(|_| ApiError::forbidden("Session subject is not a user id"))?;

    match form.existing_rsvp_id()? {
        Some(rsvp_id) => {
            rsvp_writes::change_status(&state.pool, user_id, rsvp_id, Some(event_id), status).await
        }
        None => rsvp_writes::insert(&state.pool, user_id, event_id, status).await,
    }
}
