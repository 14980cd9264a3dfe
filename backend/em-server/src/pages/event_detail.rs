//! GET /events/{id} - event details, stats, attendees and the RSVP form

use crate::metrics::{record_listing_degraded, record_page_render};
use crate::pages::html::escape;
use crate::pages::not_found::not_found_page;
use crate::pages::page_context::PageContext;
use crate::{AppState, CurrentIdentity};

use em_core::{Attendee, EventWithOrganizer, RsvpStatus, format_date};
use em_db::{EventRepository, RsvpRepository};

use std::fmt::Write;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

pub const RSVP_FAILED_MESSAGE: &str = "Failed to update RSVP. Please try again.";

#[derive(Debug, Default, Deserialize)]
pub struct EventPageQuery {
    /// Set by the form handler after a failed write
    pub rsvp_error: Option<String>,
}

pub async fn event_detail(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
    Query(query): Query<EventPageQuery>,
) -> Response {
    let page = PageContext::resolve(&state, identity).await;

    let Ok(event_id) = Uuid::parse_str(&id) else {
        return not_found_page(&page);
    };

    let event = match EventRepository::new(state.pool.clone())
        .find_with_organizer(event_id, page.user_uuid())
        .await
    {
        Ok(Some(event)) => event,
        Ok(None) => return not_found_page(&page),
        Err(e) => {
            log::error!("Error fetching event {}: {}", event_id, e);
            record_listing_degraded();
            return not_found_page(&page);
        }
    };

    let attendees = match RsvpRepository::new(state.pool.clone())
        .find_by_event(event_id)
        .await
    {
        Ok(rsvps) => rsvps,
        Err(e) => {
            log::warn!("Error fetching RSVPs for event {}: {}", event_id, e);
            record_listing_degraded();
            Vec::new()
        }
    };

    record_page_render("event_detail");
    let view = EventPageView {
        event: &event,
        attendees: &attendees,
        signed_in: page.session.is_authenticated(),
        sign_in_path: &page.sign_in_path,
        rsvp_failed: query.rsvp_error.is_some(),
    };

    page.render(&event.event.title, &view.render()).into_response()
}

pub struct EventPageView<'a> {
    pub event: &'a EventWithOrganizer,
    pub attendees: &'a [Attendee],
    pub signed_in: bool,
    pub sign_in_path: &'a str,
    pub rsvp_failed: bool,
}

impl EventPageView<'_> {
    pub fn render(&self) -> String {
        let mut html = String::from(r#"<div class="event-page"><a href="/" class="back">Back to events</a>"#);
        html.push_str(&self.details());
        html.push_str(&self.confirmed_attendees());
        html.push_str(&self.stats());
        html.push_str(&self.rsvp_block());
        html.push_str("</div>");
        html
    }

    fn details(&self) -> String {
        let event = &self.event.event;
        let mut html = String::new();

        let _ = write!(
            html,
            r#"<section class="card"><h1>{}</h1><ul class="event-meta"><li>{}</li><li>{}</li><li>Organized by <span class="font-medium">{}</span></li></ul>"#,
            escape(&event.title),
            format_date(event.date),
            escape(&event.city),
            escape(self.event.organizer_name()),
        );

        if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
            let _ = write!(
                html,
                r#"<h3>About this event</h3><p class="whitespace-pre-wrap">{}</p>"#,
                escape(description)
            );
        }

        html.push_str("</section>");
        html
    }

    /// Only "Yes" responses are listed; hidden when there are none.
    fn confirmed_attendees(&self) -> String {
        let confirmed: Vec<&Attendee> = self
            .attendees
            .iter()
            .filter(|a| a.rsvp.status == RsvpStatus::Yes)
            .collect();

        if confirmed.is_empty() {
            return String::new();
        }

        let mut html = format!(
            r#"<section class="card attendees"><h3>Confirmed Attendees ({})</h3><ul>"#,
            confirmed.len()
        );
        for attendee in confirmed {
            let _ = write!(html, "<li>{}</li>", escape(attendee.display_name()));
        }
        html.push_str("</ul></section>");
        html
    }

    fn stats(&self) -> String {
        let counts = &self.event.rsvp_count;
        let mut html = String::from(r#"<section class="card stats"><h3>Event Stats</h3><dl>"#);
        for status in RsvpStatus::ALL {
            let _ = write!(
                html,
                "<dt>{}</dt><dd>{}</dd>",
                status.label(),
                counts.count(status)
            );
        }
        let _ = write!(html, "<dt>Total Responses</dt><dd>{}</dd></dl></section>", counts.total);
        html
    }

    fn rsvp_block(&self) -> String {
        let event_id = self.event.event.id;
        let current = self.event.user_rsvp.as_ref();
        let rsvp_id = current.map(|r| r.id.to_string()).unwrap_or_default();

        let mut html = String::from(r#"<section class="card rsvp"><h3>Will you be attending?</h3>"#);

        if self.rsvp_failed {
            let _ = write!(html, r#"<p class="error" role="alert">{}</p>"#, RSVP_FAILED_MESSAGE);
        }

        html.push_str(r#"<div class="rsvp-options">"#);
        for status in RsvpStatus::ALL {
            let selected = current.is_some_and(|r| r.status == status);
            let classes = if selected {
                format!("{} border-current", status.style_classes())
            } else {
                "border-gray-200 bg-white".to_string()
            };
            let _ = write!(
                html,
                r#"<form method="post" action="/events/{event_id}/rsvp"><input type="hidden" name="status" value="{value}"/><input type="hidden" name="rsvp_id" value="{rsvp_id}"/><button type="submit" class="{classes}" aria-pressed="{selected}"><span class="font-medium">{label}</span><p class="text-xs">{description}</p></button></form>"#,
                value = status.as_str(),
                label = escape(status.label()),
                description = escape(status.description()),
            );
        }
        html.push_str("</div>");

        if let Some(rsvp) = current {
            let _ = write!(
                html,
                r#"<p class="your-response">Your response: <span class="font-medium">"{}"</span><span class="text-xs">You can change this anytime before the event.</span></p>"#,
                rsvp.status.as_str()
            );
        }

        if !self.signed_in {
            let _ = write!(
                html,
                r#"<p class="sign-in-hint"><a href="{}">Sign in</a> to RSVP to this event</p>"#,
                escape(self.sign_in_path)
            );
        }

        html.push_str("</section>");
        html
    }
}
