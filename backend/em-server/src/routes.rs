use crate::middleware::session_refresh::refresh_session;
use crate::pages::{auth_pages, event_detail, home, not_found, rsvp_form};
use crate::{
    AppState, create_rsvp, current_user, event_summaries, get_event, get_user, health,
    list_event_rsvps, list_events, logout, metrics, update_rsvp,
};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(home::home))
        .route("/events/{id}", get(event_detail::event_detail))
        .route("/events/{id}/rsvp", post(rsvp_form::submit_rsvp))
        // Browser auth
        .route("/auth/confirm", get(auth_pages::confirm))
        .route("/auth/signout", post(auth_pages::sign_out))
        // Auth API
        .route("/auth/v1/user", get(current_user))
        .route("/auth/v1/logout", post(logout))
        // Event API
        .route("/api/v1/events", get(list_events))
        .route("/api/v1/events/summary", get(event_summaries))
        .route("/api/v1/events/{id}", get(get_event))
        .route("/api/v1/events/{id}/rsvps", get(list_event_rsvps))
        // RSVP API
        .route("/api/v1/rsvps", post(create_rsvp))
        .route("/api/v1/rsvps/{id}", put(update_rsvp))
        // User API
        .route("/api/v1/users/{id}", get(get_user))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(metrics::metrics_handler))
        .fallback(not_found::not_found)
        // Session validation runs for every route, including the fallback
        .layer(middleware::from_fn_with_state(state.clone(), refresh_session))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
