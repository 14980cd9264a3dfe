//! RSVP inserts and updates shared by the JSON API and the event page form.

use crate::metrics::record_rsvp_write;
use crate::{ApiError, ApiResult};

use em_core::{Rsvp, RsvpStatus};
use em_db::{EventRepository, RsvpRepository, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Insert a new RSVP for (`user_id`, `event_id`).
///
/// A second RSVP for the same pair is a `409 CONFLICT`.
pub async fn insert(
    pool: &SqlitePool,
    user_id: Uuid,
    event_id: Uuid,
    status: RsvpStatus,
) -> ApiResult<Rsvp> {
    if !EventRepository::new(pool.clone()).exists(event_id).await? {
        record_rsvp_write("create", "not_found");
        return Err(ApiError::not_found(format!("Event {} not found", event_id)));
    }

    if UserRepository::new(pool.clone())
        .find_by_id(user_id)
        .await?
        .is_none()
    {
        record_rsvp_write("create", "forbidden");
        return Err(ApiError::forbidden(format!(
            "User {} has no profile",
            user_id
        )));
    }

    let rsvp = Rsvp::new(user_id, event_id, status);
    match RsvpRepository::new(pool.clone()).create(&rsvp).await {
        Ok(()) => {
            record_rsvp_write("create", "ok");
            log::info!(
                "RSVP {} created: user {} -> event {} ({})",
                rsvp.id,
                user_id,
                event_id,
                status
            );
            Ok(rsvp)
        }
        Err(e) => {
            record_rsvp_write("create", if e.is_conflict() { "conflict" } else { "error" });
            Err(e.into())
        }
    }
}

/// Change the status of RSVP `rsvp_id`, which must belong to `user_id`
/// and, when `event_id` is given, to that event.
pub async fn change_status(
    pool: &SqlitePool,
    user_id: Uuid,
    rsvp_id: Uuid,
    event_id: Option<Uuid>,
    status: RsvpStatus,
) -> ApiResult<Rsvp> {
    let repo = RsvpRepository::new(pool.clone());

    let Some(mut rsvp) = repo.find_by_id(rsvp_id).await? else {
        record_rsvp_write("update", "not_found");
        return Err(ApiError::not_found(format!("RSVP {} not found", rsvp_id)));
    };

    if rsvp.user_id != user_id {
        record_rsvp_write("update", "forbidden");
        return Err(ApiError::forbidden("RSVP belongs to another user"));
    }

    if let Some(event_id) = event_id
        && rsvp.event_id != event_id
    {
        record_rsvp_write("update", "invalid");
        return Err(ApiError::validation(
            format!("RSVP {} is not for event {}", rsvp_id, event_id),
            "rsvp_id",
        ));
    }

    rsvp.set_status(status);
    match repo.update_status(&rsvp).await {
        Ok(true) => {
            record_rsvp_write("update", "ok");
            log::info!("RSVP {} updated to {}", rsvp.id, status);
            Ok(rsvp)
        }
        Ok(false) => {
            record_rsvp_write("update", "not_found");
            Err(ApiError::not_found(format!("RSVP {} not found", rsvp_id)))
        }
        Err(e) => {
            record_rsvp_write("update", "error");
            Err(e.into())
        }
    }
}
