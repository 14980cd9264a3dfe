//! GET / - hero and upcoming event cards

use crate::metrics::{record_listing_degraded, record_page_render};
use crate::pages::html::escape;
use crate::pages::page_context::PageContext;
use crate::{AppState, CurrentIdentity};

use em_core::{EventWithOrganizer, format_event_date};
use em_db::EventRepository;

use std::fmt::Write;

use axum::{extract::State, response::Html};
use chrono::Utc;

pub async fn home(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Html<String> {
    record_page_render("home");
    let page = PageContext::resolve(&state, identity).await;

    // A failed read renders the empty state
    let events = match EventRepository::new(state.pool.clone())
        .list_upcoming(Utc::now())
        .await
    {
        Ok(events) => events,
        Err(e) => {
            log::error!("Error fetching events: {}", e);
            record_listing_degraded();
            Vec::new()
        }
    };

    page.render("Discover Events", &render_home(&page.site_title, &events))
}

pub fn render_home(site_title: &str, events: &[EventWithOrganizer]) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<section class="hero">
<h1>Discover Amazing Events in Your City</h1>
<p>Connect with your community through exciting events, workshops, and meetups. RSVP with just a click and never miss out again.</p>
<ul class="hero-stats"><li>{} upcoming events</li><li>Multiple cities</li><li>Join the community</li></ul>
</section>
<section class="events">
<h2>Upcoming Events</h2>
<p>Browse and RSVP to events that interest you</p>
"#,
        events.len()
    );

    if events.is_empty() {
        html.push_str(
            r#"<div class="empty-state"><h3>No upcoming events</h3><p>Check back later for new events in your area.</p></div>"#,
        );
    } else {
        html.push_str(r#"<div class="event-grid">"#);
        for event in events {
            html.push_str(&event_card(event));
        }
        html.push_str("</div>");
    }

    let _ = write!(
        html,
        r#"
</section>
<footer><h3>{}</h3><p>Connecting communities through amazing events</p></footer>"#,
        escape(site_title)
    );

    html
}

fn event_card(item: &EventWithOrganizer) -> String {
    let event = &item.event;
    let counts = &item.rsvp_count;

    let description = event
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="line-clamp-2">{}</p>"#, escape(d)))
        .unwrap_or_default();

    format!(
        r#"<a href="/events/{id}" class="event-card">
<h3>{title}</h3>{description}
<div class="event-meta"><span>{date}</span><span>{city}</span><span>Organized by {organizer}</span></div>
<div class="event-counts"><span>{yes} Going</span><span>{maybe} Maybe</span><span>{responses}</span></div>
</a>"#,
        id = event.id,
        title = escape(&event.title),
        description = description,
        date = format_event_date(event.date),
        city = escape(&event.city),
        organizer = escape(item.organizer_name()),
        yes = counts.yes,
        maybe = counts.maybe,
        responses = counts.responses_label(),
    )
}
