//! Core data model definitions shared across Reelbite crates.
#![allow(missing_docs)]

#[cfg(feature = "serde")]
pub mod api;
pub mod comment;
pub mod creator;
pub mod engagement;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod video;
pub mod viewer;

// Intentionally curated re-exports for downstream consumers.
pub use comment::Comment;
pub use creator::Creator;
pub use engagement::{MembershipSet, MembershipSnapshot, MembershipState};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CommentID, CreatorID, VideoID, ViewerID};
pub use video::VideoItem;
pub use viewer::Viewer;
