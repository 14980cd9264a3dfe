use crate::{
    CreateRsvpRequest, Event, EventResponse, EventWithOrganizer, Organizer, RsvpStatus,
};

use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

#[test]
fn given_event_response_when_serialized_then_event_fields_are_flattened() {
    let event = Event {
        id: Uuid::nil(),
        title: "Rust Meetup".to_string(),
        description: None,
        date: Utc.with_ymd_and_hms(2026, 11, 3, 18, 30, 0).unwrap(),
        city: "Porto".to_string(),
        created_by: Uuid::nil(),
        created_at: Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap(),
    };
    let organizer = Organizer {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
    };
    let body = EventResponse {
        event: EventWithOrganizer::new(event, Some(organizer), [RsvpStatus::Yes]),
    };

    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(value["event"]["title"], "Rust Meetup");
    assert_eq!(value["event"]["organizer"]["name"], "Grace");
    assert_eq!(value["event"]["rsvp_count"]["yes"], 1);
    assert!(value["event"].get("user_rsvp").is_none());

    let back: EventResponse = serde_json::from_value(value).unwrap();
    assert_eq!(back.event.event.city, "Porto");
}

#[test]
fn given_create_request_without_user_when_deserialized_then_user_is_none() {
    let request: CreateRsvpRequest = serde_json::from_value(json!({
        "event_id": Uuid::nil(),
        "status": "Maybe",
    }))
    .unwrap();

    assert_eq!(request.status, RsvpStatus::Maybe);
    assert!(request.user_id.is_none());
}
