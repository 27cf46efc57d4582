//! The feed playback controller: one state machine owning the scroll →
//! active-item mapping, single-playing enforcement, arrow debounce, and
//! the optimistic engagement mirror. I/O never happens here; `update`
//! returns [`Effect`]s for the host shell to execute.

use std::time::Instant;

use tracing::debug;

use reelbite_model::api::{CommentView, FeedItem};
use reelbite_model::ViewerID;

use crate::arrows::ArrowVisibility;
use crate::comments::CommentThreads;
use crate::engagement::{EngagementMirror, FollowRequest, LikeRequest};
use crate::playback::PlaybackCoordinator;
use crate::scroll::{active_index_for_offset, target_offset_for_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDirection {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A fresh authoritative feed snapshot arrived.
    SnapshotLoaded(Vec<FeedItem>),
    /// Continuous scroll position changed.
    ScrollMoved { offset: f32, now: Instant },
    /// Navigation arrow tapped.
    JumpRequested { direction: JumpDirection, now: Instant },
    /// Tap on the active video toggles its playback.
    ActiveItemTapped,
    MuteToggled,
    /// Like tap on the active item.
    LikeTapped,
    /// Follow tap for the active item's creator.
    FollowTapped,
    LikeResolved {
        request: LikeRequest,
        liked: bool,
        like_count: u64,
    },
    LikeFailed {
        request: LikeRequest,
    },
    FollowResolved {
        request: FollowRequest,
        follower_ids: Vec<ViewerID>,
    },
    FollowFailed {
        request: FollowRequest,
    },
    CommentsLoaded(Vec<CommentView>),
    CommentPosted(CommentView),
    /// Timer tick driving the arrow decay.
    Tick { now: Instant },
}

/// Work the host shell performs on the controller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Animate the scroll container to `offset`.
    ScrollTo { offset: f32 },
    /// Issue the sequenced like toggle to the ledger.
    SendLikeToggle(LikeRequest),
    /// Issue the sequenced follow toggle to the ledger.
    SendFollowToggle(FollowRequest),
    /// Surface a non-blocking notice to the viewer.
    Notice(String),
}

#[derive(Debug)]
pub struct FeedController {
    items: Vec<FeedItem>,
    playback: PlaybackCoordinator,
    arrows: ArrowVisibility,
    mirror: EngagementMirror,
    comments: CommentThreads,
    /// One viewport height; each feed item spans exactly this extent.
    item_extent: f32,
}

impl FeedController {
    pub fn new(viewer: ViewerID, item_extent: f32) -> Self {
        Self {
            items: Vec::new(),
            playback: PlaybackCoordinator::new(0),
            arrows: ArrowVisibility::new(),
            mirror: EngagementMirror::new(viewer),
            comments: CommentThreads::new(),
            item_extent,
        }
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::SnapshotLoaded(items) => {
                self.mirror.sync_from_feed(&items);
                self.items = items;
                self.playback.resize(self.items.len());
                // First activation: the top of the feed starts playing.
                if self.playback.active_index().is_none() && !self.items.is_empty() {
                    self.playback.activate(0);
                }
                Vec::new()
            }
            Message::ScrollMoved { offset, now } => {
                self.arrows.on_scroll(now);
                if let Some(candidate) =
                    active_index_for_offset(offset, self.item_extent, self.items.len())
                    && Some(candidate) != self.playback.active_index()
                {
                    debug!(candidate, "scroll crossed item boundary");
                    self.playback.activate(candidate);
                }
                Vec::new()
            }
            Message::JumpRequested { direction, now } => {
                self.arrows.on_scroll(now);
                let Some(active) = self.playback.active_index() else {
                    return Vec::new();
                };
                let target = match direction {
                    JumpDirection::Up => active.saturating_sub(1),
                    JumpDirection::Down => (active + 1).min(self.items.len().saturating_sub(1)),
                };
                vec![Effect::ScrollTo {
                    offset: target_offset_for_index(target, self.item_extent),
                }]
            }
            Message::ActiveItemTapped => {
                if let Some(active) = self.playback.active_index() {
                    self.playback.toggle_active(active);
                }
                Vec::new()
            }
            Message::MuteToggled => {
                self.playback.toggle_mute();
                Vec::new()
            }
            Message::LikeTapped => {
                let Some(item) = self.active_item() else {
                    return Vec::new();
                };
                let request = self.mirror.tap_like(item.id);
                vec![Effect::SendLikeToggle(request)]
            }
            Message::FollowTapped => {
                let Some(item) = self.active_item() else {
                    return Vec::new();
                };
                let request = self.mirror.tap_follow(item.creator_id);
                vec![Effect::SendFollowToggle(request)]
            }
            Message::LikeResolved {
                request,
                liked,
                like_count,
            } => {
                self.mirror
                    .apply_like_response(request.video_id, request.seq, liked, like_count);
                Vec::new()
            }
            Message::LikeFailed { request } => {
                if self.mirror.fail_like(request.video_id, request.seq) {
                    vec![Effect::Notice("Couldn't update like, try again".into())]
                } else {
                    Vec::new()
                }
            }
            Message::FollowResolved {
                request,
                follower_ids,
            } => {
                self.mirror.apply_follow_response(
                    request.creator_id,
                    request.seq,
                    &follower_ids,
                );
                Vec::new()
            }
            Message::FollowFailed { request } => {
                if self.mirror.fail_follow(request.creator_id, request.seq) {
                    vec![Effect::Notice("Couldn't update follow, try again".into())]
                } else {
                    Vec::new()
                }
            }
            Message::CommentsLoaded(comments) => {
                self.comments.replace(comments);
                Vec::new()
            }
            Message::CommentPosted(comment) => {
                self.comments.append(comment);
                Vec::new()
            }
            Message::Tick { now } => {
                self.arrows.poll(now);
                Vec::new()
            }
        }
    }

    // ===== Read surface for the view layer =====

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn active_item(&self) -> Option<&FeedItem> {
        self.playback
            .active_index()
            .and_then(|index| self.items.get(index))
    }

    pub fn playback(&self) -> &PlaybackCoordinator {
        &self.playback
    }

    pub fn mirror(&self) -> &EngagementMirror {
        &self.mirror
    }

    pub fn arrows_visible(&self) -> bool {
        self.arrows.is_visible()
    }

    /// Comment thread for the active item, insertion-ordered.
    pub fn active_comments(&self) -> Vec<&CommentView> {
        match self.active_item() {
            Some(item) => self.comments.for_video(item.id),
            None => Vec::new(),
        }
    }
}
