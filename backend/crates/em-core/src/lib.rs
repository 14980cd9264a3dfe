pub mod error;
pub mod formatting;
pub mod models;
pub mod navbar_view;
pub mod wire;

pub use error::{CoreError, Result};
pub use formatting::{format_date, format_event_date};
pub use models::attendee::Attendee;
pub use models::event::Event;
pub use models::event_summary::EventSummary;
pub use models::event_with_organizer::EventWithOrganizer;
pub use models::identity::Identity;
pub use models::organizer::Organizer;
pub use models::profile::Profile;
pub use models::rsvp::Rsvp;
pub use models::rsvp_counts::RsvpCounts;
pub use models::rsvp_status::RsvpStatus;
pub use models::session::Session;
pub use models::session_state::SessionState;
pub use navbar_view::{NavAction, NavbarView};
pub use wire::{
    attendee_list_response::AttendeeListResponse, create_rsvp_request::CreateRsvpRequest,
    event_list_response::EventListResponse, event_response::EventResponse,
    event_summary_list_response::EventSummaryListResponse, profile_response::ProfileResponse,
    rsvp_response::RsvpResponse, update_rsvp_request::UpdateRsvpRequest,
    user_response::UserResponse,
};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
