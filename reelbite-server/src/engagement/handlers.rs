use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

use reelbite_model::api::{ApiResponse, ToggleFollowResponse, ToggleLikeResponse};
use reelbite_model::{CreatorID, VideoID};

use crate::auth::{Identity, require_viewer};
use crate::errors::AppResult;
use crate::infra::app_state::AppState;

/// Flip the calling viewer's like on a video.
///
/// The response carries the post-toggle state and the counter read inside
/// the same atomic unit as the mutation, so the controller can reconcile
/// against it directly.
pub async fn toggle_like_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(video_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ToggleLikeResponse>>> {
    let viewer = require_viewer(identity)?;
    let outcome = state.ledger.toggle_like(viewer, VideoID(video_id))?;

    Ok(Json(ApiResponse::success(ToggleLikeResponse {
        liked: outcome.state.is_present(),
        like_count: outcome.like_count,
    })))
}

/// Flip the calling viewer's follow on a creator. Returns the full
/// authoritative follower set for replacement-style reconciliation.
pub async fn toggle_follow_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(creator_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ToggleFollowResponse>>> {
    let viewer = require_viewer(identity)?;
    let outcome = state.ledger.toggle_follow(viewer, CreatorID(creator_id))?;

    Ok(Json(ApiResponse::success(ToggleFollowResponse {
        following: outcome.state.is_present(),
        follower_ids: outcome.follower_ids,
    })))
}
