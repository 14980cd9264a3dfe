use em_core::{Event, Rsvp, RsvpStatus};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// `Utc::now()` truncated to the whole seconds the database stores
pub fn now_seconds() -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap()
}

/// Creates a test Event `days_from_now` days away
pub fn create_test_event(created_by: Uuid, title: &str, days_from_now: i64) -> Event {
    let now = now_seconds();
    Event {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some(format!("{title} description")),
        date: now + Duration::days(days_from_now),
        city: "Lisbon".to_string(),
        created_by,
        created_at: now,
    }
}

/// Creates a test Rsvp with whole-second timestamps
pub fn create_test_rsvp(user_id: Uuid, event_id: Uuid, status: RsvpStatus) -> Rsvp {
    let now = now_seconds();
    Rsvp {
        id: Uuid::new_v4(),
        user_id,
        event_id,
        status,
        created_at: now,
        updated_at: now,
    }
}
