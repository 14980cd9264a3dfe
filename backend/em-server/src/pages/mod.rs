pub mod auth_pages;
pub mod event_detail;
pub mod home;
pub mod html;
pub mod not_found;
pub mod page_context;
pub mod rsvp_form;
