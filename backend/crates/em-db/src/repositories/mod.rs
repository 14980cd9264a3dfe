pub mod event_repository;
pub mod rsvp_repository;
pub mod user_repository;
