//! JSON bodies shared by the row API server and its HTTP client.

pub mod attendee_list_response;
pub mod create_rsvp_request;
pub mod event_list_response;
pub mod event_response;
pub mod event_summary_list_response;
pub mod profile_response;
pub mod rsvp_response;
pub mod update_rsvp_request;
pub mod user_response;
