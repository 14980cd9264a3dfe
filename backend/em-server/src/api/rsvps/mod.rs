pub mod rsvp_writes;
pub mod rsvps;
