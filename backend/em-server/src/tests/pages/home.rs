use crate::pages::home::render_home;

use em_core::{Event, EventWithOrganizer, Organizer, RsvpStatus};

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn meetup(title: &str, statuses: Vec<RsvpStatus>) -> EventWithOrganizer {
    let date = Utc.with_ymd_and_hms(2030, 3, 15, 19, 30, 0).unwrap() + Duration::days(1);
    let event = Event::new(
        title.to_string(),
        Some("Talks & pizza".to_string()),
        date,
        "Berlin".to_string(),
        Uuid::new_v4(),
    );
    let organizer = Organizer {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
    };
    EventWithOrganizer::new(event, Some(organizer), statuses)
}

#[test]
fn given_no_events_when_rendering_home_then_empty_state_shown() {
    let html = render_home("Event Manager", &[]);

    assert_that!(html, contains_substring("0 upcoming events"));
    assert_that!(html, contains_substring("No upcoming events"));
    assert_that!(html, contains_substring("Check back later for new events in your area."));
}

#[test]
fn given_events_when_rendering_home_then_cards_show_counts_and_organizer() {
    let event = meetup(
        "Rust Meetup",
        vec![RsvpStatus::Yes, RsvpStatus::Yes, RsvpStatus::Maybe],
    );

    let html = render_home("Event Manager", std::slice::from_ref(&event));

    assert_that!(html, contains_substring("1 upcoming events"));
    assert_that!(html, contains_substring(format!(r#"href="/events/{}""#, event.event.id)));
    assert_that!(html, contains_substring("Rust Meetup"));
    assert_that!(html, contains_substring("Talks &amp; pizza"));
    assert_that!(html, contains_substring("Organized by Grace"));
    assert_that!(html, contains_substring("2 Going"));
    assert_that!(html, contains_substring("1 Maybe"));
    assert_that!(html, contains_substring("3 Responses"));
    assert_that!(html, contains_substring("Mar 16, 07:30 PM"));
    assert_that!(html, not(contains_substring("No upcoming events")));
}
