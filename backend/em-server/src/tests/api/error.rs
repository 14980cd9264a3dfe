use crate::ApiError;

use em_core::RsvpStatus;
use em_db::DbError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Event 1 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Event 1 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_invalid_status_when_converted_then_validation_error_names_status_field() {
    let core_error = RsvpStatus::from_str("Perhaps").unwrap_err();

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "status");
}

#[tokio::test]
async fn given_field_validation_when_rendered_then_400_names_field() {
    let (status, json) = body_json(ApiError::validation("RSVP is for another event", "rsvp_id")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "RSVP is for another event");
    assert_eq!(json["error"]["field"], "rsvp_id");
}

#[tokio::test]
async fn given_db_conflict_when_converted_then_409_without_db_details() {
    let db_error = DbError::Conflict {
        message: "UNIQUE constraint failed: rsvps.user_id, rsvps.event_id".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Resource already exists");
}

#[tokio::test]
async fn given_row_not_found_when_converted_then_404() {
    let db_error = DbError::from(sqlx::Error::RowNotFound);

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn given_other_db_failure_when_converted_then_internal_error_hides_cause() {
    let db_error = DbError::from(sqlx::Error::PoolTimedOut);

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn given_forbidden_when_rendered_then_403() {
    let (status, json) = body_json(ApiError::forbidden("RSVP belongs to another user")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}
