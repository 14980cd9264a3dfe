pub mod auth;
pub mod error;
pub mod events;
pub mod extractors;
pub mod rsvps;
pub mod users;
