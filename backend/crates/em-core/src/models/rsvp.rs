use crate::RsvpStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's attendance response to one event. At most one per (user, event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub status: RsvpStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn new(user_id: Uuid, event_id: Uuid, status: RsvpStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            event_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: RsvpStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
