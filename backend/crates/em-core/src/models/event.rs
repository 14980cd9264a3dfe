//! Event entity - something users can RSVP to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub city: String,
    /// Organizer (users.id)
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        title: String,
        description: Option<String>,
        date: DateTime<Utc>,
        city: String,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            date,
            city,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Events on or after `now` are listed on the home page.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date >= now
    }
}
