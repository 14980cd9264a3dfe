mod identity;
mod rsvp_counts;
mod rsvp_counts_properties;
mod rsvp_status;
mod session;
mod session_state;
