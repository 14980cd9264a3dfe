pub mod rsvp_form_state;
pub mod rsvp_submission;
pub mod rsvp_writer;
pub mod submit_outcome;
