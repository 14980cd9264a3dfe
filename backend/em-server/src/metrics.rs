//! Prometheus counters for RSVP writes and page renders.
//!
//! Recording is a no-op until [`install_recorder`] has run, so handlers
//! record unconditionally and tests need no recorder.
//!
//! ## Counters
//! - `em_rsvp_writes_total{op, result}` - RSVP inserts and updates
//! - `em_page_renders_total{page}` - server-rendered pages served
//! - `em_listing_degraded_total` - reads that failed and rendered empty

use crate::AppState;
use crate::error::{Result as ServerErrorResult, ServerError};

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const RSVP_WRITES_TOTAL: &str = "em_rsvp_writes_total";
pub const PAGE_RENDERS_TOTAL: &str = "em_page_renders_total";
pub const LISTING_DEGRADED_TOTAL: &str = "em_listing_degraded_total";

/// Install the global Prometheus recorder. Call once at startup.
pub fn install_recorder() -> ServerErrorResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    describe_counter!(
        RSVP_WRITES_TOTAL,
        "RSVP writes by operation (create, update) and result (ok, conflict, error)"
    );
    describe_counter!(PAGE_RENDERS_TOTAL, "Server-rendered pages by page");
    describe_counter!(
        LISTING_DEGRADED_TOTAL,
        "Event or RSVP reads that failed and were rendered as empty"
    );

    log::info!("Metrics recorder installed");
    Ok(handle)
}

pub fn record_rsvp_write(op: &'static str, result: &'static str) {
    counter!(RSVP_WRITES_TOTAL, "op" => op, "result" => result).increment(1);
}

pub fn record_page_render(page: &'static str) {
    counter!(PAGE_RENDERS_TOTAL, "page" => page).increment(1);
}

pub fn record_listing_degraded() {
    counter!(LISTING_DEGRADED_TOTAL).increment(1);
}

/// GET /metrics - Prometheus text exposition, 404 when metrics are disabled
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled").into_response(),
    }
}
