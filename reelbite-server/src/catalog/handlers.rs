use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

use reelbite_model::api::{
    ApiResponse, CreateVideoRequest, CreateVideoResponse,
    CreatorProfileResponse, FeedItem, FeedResponse,
};
use reelbite_model::{CreatorID, VideoItem};

use crate::auth::{Identity, require_creator};
use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

/// The scrollable feed: every video in upload order, each carrying its
/// liker membership array and materialized count.
pub async fn feed_handler(
    State(state): State<AppState>,
    Extension(_identity): Extension<Identity>,
) -> AppResult<Json<ApiResponse<FeedResponse>>> {
    let items = state
        .ledger
        .feed()
        .into_iter()
        .map(FeedItem::from)
        .collect();

    Ok(Json(ApiResponse::success(FeedResponse { items })))
}

/// Creator upload: pass the bytes to the storage collaborator, keep only
/// the URI it mints, register the item with an empty liker set.
pub async fn create_video_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<CreateVideoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CreateVideoResponse>>)> {
    let creator_id = require_creator(identity)?;

    if request.name.is_empty() {
        return Err(AppError::bad_request("video name is required"));
    }
    reelbite_model::video::validate_media(&request.media)?;

    let key = Uuid::new_v4();
    let media_uri = state.storage.store(request.media, key).await?;
    let item = VideoItem::new(request.name, request.description, media_uri, creator_id);
    let video_id = state.ledger.insert_video(item.clone());
    info!(%creator_id, %video_id, "video item created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreateVideoResponse {
            item: FeedItem::from(item),
        })),
    ))
}

/// The calling creator's own uploads, in upload order.
pub async fn my_videos_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Json<ApiResponse<FeedResponse>>> {
    let creator_id = require_creator(identity)?;
    let items = state
        .ledger
        .videos_by_creator(creator_id)
        .into_iter()
        .map(FeedItem::from)
        .collect();

    Ok(Json(ApiResponse::success(FeedResponse { items })))
}

/// Public profile of a creator, including the follower membership array.
pub async fn creator_profile_handler(
    State(state): State<AppState>,
    Extension(_identity): Extension<Identity>,
    Path(creator_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CreatorProfileResponse>>> {
    let creator = state.ledger.creator(CreatorID(creator_id))?;
    let snapshot = creator.followers.snapshot();

    Ok(Json(ApiResponse::success(CreatorProfileResponse {
        id: creator.id,
        name: creator.name,
        address: creator.address,
        follower_ids: snapshot.members,
    })))
}

/// Serve stored media bytes for URIs minted by the in-process storage.
pub async fn media_handler(
    State(state): State<AppState>,
    Path(key): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let bytes = state
        .storage
        .fetch(key)
        .await
        .ok_or_else(|| AppError::not_found("media not found"))?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    ))
}
