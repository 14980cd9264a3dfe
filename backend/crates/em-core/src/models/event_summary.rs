use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row of the `event_rsvp_summary` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub event_id: Uuid,
    pub title: String,
    pub city: String,
    pub date: DateTime<Utc>,
    pub organizer: String,
    pub total_rsvps: i64,
    pub confirmed_attendees: i64,
    pub maybe_attendees: i64,
    pub declined_attendees: i64,
}
