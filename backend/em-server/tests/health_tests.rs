//! Integration tests for health probes and the metrics endpoint
mod common;

use crate::common::{app, body_json, body_text, create_test_app_state, get, send};

use axum::http::StatusCode;

#[tokio::test]
async fn given_open_database_when_checking_health_then_healthy() {
    let state = create_test_app_state().await;

    let response = send(app(&state), get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
    assert_eq!(json["components"]["auth"], "operational");
    assert_eq!(json["components"]["metrics"], "disabled");
}

#[tokio::test]
async fn given_closed_database_when_checking_readiness_then_503() {
    let state = create_test_app_state().await;
    state.pool.close().await;

    let ready = send(app(&state), get("/ready")).await;
    let health = send(app(&state), get("/health")).await;

    assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn given_running_server_when_probing_liveness_then_ok() {
    let state = create_test_app_state().await;

    let response = send(app(&state), get("/live")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn given_metrics_disabled_when_scraping_then_404() {
    let state = create_test_app_state().await;

    let response = send(app(&state), get("/metrics")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
