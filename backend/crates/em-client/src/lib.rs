//! Client-side components: the session store and its reconciliation state
//! machine, the RSVP submission flow, and HTTP adapters for the backend.

pub mod api;
pub mod auth;
pub mod error;
pub mod profile_source;
pub mod rsvp;
pub mod session;

pub use api::api_client::ApiClient;
pub use auth::auth_change::{AuthChange, AuthEvent};
pub use auth::auth_service::AuthService;
pub use auth::auth_subscription::{AuthChannel, AuthNotification, AuthSubscription};
pub use auth::http_auth_service::HttpAuthService;
pub use error::{ClientError, Result as ClientResult};
pub use profile_source::ProfileSource;
pub use rsvp::rsvp_form_state::RsvpFormState;
pub use rsvp::rsvp_submission::RsvpSubmission;
pub use rsvp::rsvp_writer::RsvpWriter;
pub use rsvp::submit_outcome::SubmitOutcome;
pub use session::session_reconciler::SessionReconciler;
pub use session::session_store::{SessionStore, SessionWatch};

#[cfg(test)]
mod tests;
