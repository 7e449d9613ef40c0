use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::context::AuthContext,
    builds::dto::{BuildResponse, SaveBuildRequest, SaveBuildResponse},
    error::ApiError,
    state::AppState,
};

/// History returns at most this many builds, newest first.
const HISTORY_LIMIT: i64 = 10;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_build))
        .route("/history/:user_id", get(get_history))
        .route("/load/:id", get(load_build))
}

#[instrument(skip(state, payload))]
pub async fn save_build(
    State(state): State<AppState>,
    Json(payload): Json<SaveBuildRequest>,
) -> Result<Json<SaveBuildResponse>, ApiError> {
    // Presence of the claimed id is all that is checked; the id itself is
    // not verified against the users table.
    let ctx = AuthContext::from_claimed(payload.user_id)?;

    let build = state
        .store
        .create_build(ctx.user_id, payload.name, payload.bricks)
        .await?;

    info!(build_id = %build.id, user_id = %ctx.user_id, "build saved");
    Ok(Json(SaveBuildResponse {
        success: true,
        id: build.id,
    }))
}

#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<BuildResponse>>, ApiError> {
    let ctx = AuthContext::from_claimed(Some(user_id))?;

    let builds = state
        .store
        .recent_builds_by_user(ctx.user_id, HISTORY_LIMIT)
        .await?;
    Ok(Json(builds.into_iter().map(BuildResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn load_build(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BuildResponse>, ApiError> {
    // Loadable by id alone; ownership is not checked.
    let build = state
        .store
        .find_build(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Build not found".into()))?;
    Ok(Json(BuildResponse::from(build)))
}
