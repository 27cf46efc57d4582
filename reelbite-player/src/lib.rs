//! Feed playback controller for Reelbite.
//!
//! Pure state: maps the continuous scroll signal to a single active item,
//! guarantees at most one item plays at a time, debounces the navigation
//! arrows, and mirrors the viewer's engagement state optimistically with
//! sequence-numbered reconciliation against the ledger. The host shell
//! owns all I/O and executes the [`controller::Effect`]s.

pub mod arrows;
pub mod comments;
pub mod controller;
pub mod engagement;
pub mod playback;
pub mod scroll;

pub use arrows::{ARROW_HIDE_DELAY, ArrowVisibility};
pub use comments::CommentThreads;
pub use controller::{Effect, FeedController, JumpDirection, Message};
pub use engagement::{EngagementMirror, FollowRequest, LikeRequest};
pub use playback::{PlayState, PlaybackCoordinator};
pub use scroll::{active_index_for_offset, target_offset_for_index};
