//! Client-side comment aggregation. The server returns every comment; the
//! thread for the active video is selected locally by id, insertion order
//! preserved.

use reelbite_model::VideoID;
use reelbite_model::api::CommentView;

#[derive(Debug, Default)]
pub struct CommentThreads {
    all: Vec<CommentView>,
}

impl CommentThreads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the aggregate with a fresh server listing.
    pub fn replace(&mut self, comments: Vec<CommentView>) {
        self.all = comments;
    }

    /// Append a comment the viewer just posted.
    pub fn append(&mut self, comment: CommentView) {
        self.all.push(comment);
    }

    /// Comments on one video, in insertion order.
    pub fn for_video(&self, video_id: VideoID) -> Vec<&CommentView> {
        self.all
            .iter()
            .filter(|comment| comment.video_id == video_id)
            .collect()
    }
}
