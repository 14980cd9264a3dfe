use crate::{ApiError, ApiResult, AppState};

use em_core::ProfileResponse;
use em_db::UserRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// GET /api/v1/users/{id}
///
/// Profile row for one user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let profile = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(ProfileResponse { profile }))
}
