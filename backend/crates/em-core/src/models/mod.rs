pub mod attendee;
pub mod event;
pub mod event_summary;
pub mod event_with_organizer;
pub mod identity;
pub mod organizer;
pub mod profile;
pub mod rsvp;
pub mod rsvp_counts;
pub mod rsvp_status;
pub mod session;
pub mod session_state;
