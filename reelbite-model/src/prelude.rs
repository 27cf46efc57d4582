//! Convenience re-exports for downstream crates.

pub use crate::comment::Comment;
pub use crate::creator::Creator;
pub use crate::engagement::{MembershipSet, MembershipSnapshot, MembershipState};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::{CommentID, CreatorID, VideoID, ViewerID};
pub use crate::video::VideoItem;
pub use crate::viewer::Viewer;
