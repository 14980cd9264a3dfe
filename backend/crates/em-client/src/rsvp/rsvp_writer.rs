use crate::ClientResult;

use em_core::{Rsvp, RsvpStatus};

use async_trait::async_trait;
use uuid::Uuid;

/// Row insert / row update for RSVPs
#[async_trait]
pub trait RsvpWriter: Send + Sync {
    async fn create(&self, user_id: Uuid, event_id: Uuid, status: RsvpStatus) -> ClientResult<Rsvp>;

    async fn update_status(&self, rsvp_id: Uuid, status: RsvpStatus) -> ClientResult<Rsvp>;

    /// The user's row for this event, if one exists.
    async fn find_existing(&self, user_id: Uuid, event_id: Uuid) -> ClientResult<Option<Rsvp>>;
}
