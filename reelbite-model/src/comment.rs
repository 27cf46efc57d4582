use chrono::{DateTime, Utc};

use crate::ids::{CommentID, VideoID, ViewerID};

/// A viewer comment on a video. Append-only; comments on the same video are
/// ordered by insertion, nothing is guaranteed across videos.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub id: CommentID,
    pub video_id: VideoID,
    pub viewer_id: ViewerID,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(video_id: VideoID, viewer_id: ViewerID, text: impl Into<String>) -> Self {
        Self {
            id: CommentID::new(),
            video_id,
            viewer_id,
            text: text.into(),
            posted_at: Utc::now(),
        }
    }
}
