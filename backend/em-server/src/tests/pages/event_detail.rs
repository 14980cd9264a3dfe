use crate::pages::event_detail::{EventPageView, RSVP_FAILED_MESSAGE};

use em_core::{Attendee, Event, EventWithOrganizer, Rsvp, RsvpStatus};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn event_with(statuses: Vec<RsvpStatus>) -> EventWithOrganizer {
    let event = Event::new(
        "Rust Meetup".to_string(),
        Some("Lightning talks".to_string()),
        Utc.with_ymd_and_hms(2030, 3, 15, 19, 30, 0).unwrap(),
        "Berlin".to_string(),
        Uuid::new_v4(),
    );
    EventWithOrganizer::new(event, None, statuses)
}

fn attendee(event_id: Uuid, status: RsvpStatus, name: Option<&str>) -> Attendee {
    Attendee {
        rsvp: Rsvp::new(Uuid::new_v4(), event_id, status),
        name: name.map(str::to_string),
        email: None,
    }
}

fn render(event: &EventWithOrganizer, attendees: &[Attendee], signed_in: bool, failed: bool) -> String {
    EventPageView {
        event,
        attendees,
        signed_in,
        sign_in_path: "/auth/signin",
        rsvp_failed: failed,
    }
    .render()
}

#[test]
fn given_event_when_rendered_then_details_and_stats_shown() {
    let event = event_with(vec![RsvpStatus::Yes, RsvpStatus::No, RsvpStatus::Maybe, RsvpStatus::Yes]);

    let html = render(&event, &[], true, false);

    assert_that!(html, contains_substring("Friday, March 15, 2030 at 07:30 PM"));
    assert_that!(html, contains_substring("Organized by <span class=\"font-medium\">Unknown</span>"));
    assert_that!(html, contains_substring("About this event"));
    assert_that!(html, contains_substring("<dt>Going</dt><dd>2</dd>"));
    assert_that!(html, contains_substring("<dt>Maybe</dt><dd>1</dd>"));
    assert_that!(html, contains_substring("<dt>Can't go</dt><dd>1</dd>"));
    assert_that!(html, contains_substring("<dt>Total Responses</dt><dd>4</dd>"));
}

#[test]
fn given_mixed_rsvps_when_rendered_then_only_confirmed_attendees_listed() {
    let event = event_with(vec![]);
    let id = event.event.id;
    let attendees = vec![
        attendee(id, RsvpStatus::Yes, Some("Ada")),
        attendee(id, RsvpStatus::Maybe, Some("Bob")),
        attendee(id, RsvpStatus::Yes, None),
    ];

    let html = render(&event, &attendees, true, false);

    assert_that!(html, contains_substring("Confirmed Attendees (2)"));
    assert_that!(html, contains_substring("<li>Ada</li>"));
    assert_that!(html, contains_substring("<li>Anonymous</li>"));
    assert_that!(html, not(contains_substring("<li>Bob</li>")));
}

#[test]
fn given_no_confirmed_attendees_when_rendered_then_section_hidden() {
    let event = event_with(vec![]);

    let html = render(&event, &[], true, false);

    assert_that!(html, not(contains_substring("Confirmed Attendees")));
}

#[test]
fn given_existing_rsvp_when_rendered_then_forms_carry_its_id_and_response_shown() {
    let event = event_with(vec![RsvpStatus::Maybe]);
    let rsvp = Rsvp::new(Uuid::new_v4(), event.event.id, RsvpStatus::Maybe);
    let rsvp_id = rsvp.id;
    let event = event.with_user_rsvp(Some(rsvp));

    let html = render(&event, &[], true, false);

    assert_that!(html, contains_substring("Will you be attending?"));
    assert_that!(html, contains_substring(format!(r#"name="rsvp_id" value="{}""#, rsvp_id)));
    assert_that!(html, contains_substring(r#"Your response: <span class="font-medium">"Maybe"</span>"#));
    assert_that!(html, contains_substring("You can change this anytime before the event."));
    assert_that!(html, contains_substring(r#"aria-pressed="true""#));
    assert_that!(html, not(contains_substring("to RSVP to this event")));
}

#[test]
fn given_anonymous_visitor_when_rendered_then_sign_in_hint_shown() {
    let event = event_with(vec![]);

    let html = render(&event, &[], false, false);

    assert_that!(html, contains_substring(r#"<a href="/auth/signin">Sign in</a> to RSVP to this event"#));
    assert_that!(html, contains_substring(r#"name="rsvp_id" value="""#));
    assert_that!(html, not(contains_substring("Your response")));
}

#[test]
fn given_failed_submission_when_rendered_then_retry_message_shown() {
    let event = event_with(vec![]);

    let html = render(&event, &[], true, true);

    assert_that!(html, contains_substring(RSVP_FAILED_MESSAGE));
}
