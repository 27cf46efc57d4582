use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use reelbite_model::VideoID;
use reelbite_model::api::{
    ApiResponse, CommentView, CommentsResponse, CreateCommentRequest,
};

use crate::auth::{Identity, require_viewer};
use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

/// Append a comment to a video. The video must exist; nothing is written
/// otherwise.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(video_id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CommentView>>)> {
    let viewer = require_viewer(identity)?;
    if request.comment.trim().is_empty() {
        return Err(AppError::bad_request("comment text is required"));
    }

    let video_id = VideoID(video_id);
    // Existence check up front so a bad id appends nothing.
    state.ledger.video(video_id)?;
    let comment = state.comments.append(video_id, viewer, request.comment);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CommentView {
            id: comment.id,
            video_id: comment.video_id,
            viewer_id: comment.viewer_id,
            comment: comment.text,
        })),
    ))
}

/// Every comment on every video; the caller filters by video id.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Extension(_identity): Extension<Identity>,
) -> AppResult<Json<ApiResponse<CommentsResponse>>> {
    let comments = state
        .comments
        .all()
        .into_iter()
        .map(|comment| CommentView {
            id: comment.id,
            video_id: comment.video_id,
            viewer_id: comment.viewer_id,
            comment: comment.text,
        })
        .collect();

    Ok(Json(ApiResponse::success(CommentsResponse { comments })))
}
