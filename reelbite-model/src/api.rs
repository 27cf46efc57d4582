//! Wire types for the Reelbite HTTP surface.
//!
//! The feed item carries the full liker membership array alongside the
//! materialized count so the playback controller can derive its local
//! liked-set without a second round trip.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{CommentID, CreatorID, VideoID, ViewerID};

/// Uniform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(error),
            message: None,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }
}

// ===== Feed =====

/// One feed entry. `like_count` always equals `liker_ids.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: VideoID,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub media_uri: Url,
    pub creator_id: CreatorID,
    pub liker_ids: Vec<ViewerID>,
    pub like_count: u64,
}

impl From<crate::video::VideoItem> for FeedItem {
    fn from(item: crate::video::VideoItem) -> Self {
        let snapshot = item.likers.snapshot();
        FeedItem {
            id: item.id,
            name: item.name,
            description: item.description,
            media_uri: item.media_uri,
            creator_id: item.creator_id,
            liker_ids: snapshot.members,
            like_count: snapshot.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub items: Vec<FeedItem>,
}

// ===== Engagement toggles =====

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
    pub like_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFollowResponse {
    pub following: bool,
    pub follower_ids: Vec<ViewerID>,
}

// ===== Creators =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorProfileResponse {
    pub id: CreatorID,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub follower_ids: Vec<ViewerID>,
}

// ===== Upload =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideoRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw media payload, passed through to the upload collaborator.
    pub media: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVideoResponse {
    pub item: FeedItem,
}

// ===== Comments =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: CommentID,
    pub video_id: VideoID,
    pub viewer_id: ViewerID,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentView>,
}

// ===== Auth =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterViewerRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCreatorRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Opaque bearer token resolved by the identity collaborator.
    pub token: String,
    pub id: String,
    pub name: String,
    pub email: String,
}
