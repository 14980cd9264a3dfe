pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    auth::session::{current_user, logout},
    error::ApiError,
    error::Result as ApiResult,
    events::events::{event_summaries, get_event, list_event_rsvps, list_events},
    extractors::current_identity::{CurrentIdentity, RequireIdentity},
    rsvps::rsvps::{create_rsvp, update_rsvp},
    users::users::get_user,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};

pub use crate::routes::build_router;
