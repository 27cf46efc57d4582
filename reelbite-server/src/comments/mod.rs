//! Append-only comment board. Ordering among comments on the same video is
//! insertion order; nothing is guaranteed across videos. Filtering by video
//! happens on the client.

pub mod handlers;

use parking_lot::RwLock;

use reelbite_model::{Comment, VideoID, ViewerID};

#[derive(Debug, Default)]
pub struct CommentBoard {
    comments: RwLock<Vec<Comment>>,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, video_id: VideoID, viewer_id: ViewerID, text: String) -> Comment {
        let comment = Comment::new(video_id, viewer_id, text);
        self.comments.write().push(comment.clone());
        comment
    }

    pub fn all(&self) -> Vec<Comment> {
        self.comments.read().clone()
    }
}
