//! The engagement ledger: canonical owner of like/follow membership sets
//! and their materialized counters.
//!
//! Every toggle runs with the target's map entry held exclusively
//! ([`DashMap::get_mut`] keeps the shard write-locked for the lifetime of
//! the guard), so the membership check, the set mutation, and the counter
//! update form a single atomic unit per target. Two toggles on the same
//! target serialize; toggles on distinct targets do not contend. No
//! read-then-write happens outside the guard.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use reelbite_model::{
    Creator, CreatorID, MembershipSnapshot, MembershipState, VideoID,
    VideoItem, ViewerID,
};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("video {0} not found")]
    VideoNotFound(VideoID),
    #[error("creator {0} not found")]
    CreatorNotFound(CreatorID),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Outcome of a like toggle. `like_count` is read inside the same critical
/// section as the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub state: MembershipState,
    pub like_count: u64,
}

/// Outcome of a follow toggle, carrying the full authoritative follower set
/// so the controller can reconcile by replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowToggle {
    pub state: MembershipState,
    pub follower_ids: Vec<ViewerID>,
}

#[derive(Debug)]
struct VideoRecord {
    /// Upload sequence, assigned at insert; the feed is ordered by it.
    position: u64,
    item: VideoItem,
}

/// In-process store of video items and creators, keyed for per-target
/// exclusive access.
#[derive(Debug, Default)]
pub struct EngagementLedger {
    videos: DashMap<VideoID, VideoRecord>,
    creators: DashMap<CreatorID, Creator>,
    next_position: AtomicU64,
}

impl EngagementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Catalog =====

    pub fn insert_video(&self, item: VideoItem) -> VideoID {
        let id = item.id;
        let position = self.next_position.fetch_add(1, Ordering::Relaxed);
        self.videos.insert(id, VideoRecord { position, item });
        id
    }

    pub fn insert_creator(&self, creator: Creator) -> CreatorID {
        let id = creator.id;
        self.creators.insert(id, creator);
        id
    }

    pub fn video(&self, id: VideoID) -> LedgerResult<VideoItem> {
        self.videos
            .get(&id)
            .map(|entry| entry.item.clone())
            .ok_or(LedgerError::VideoNotFound(id))
    }

    pub fn creator(&self, id: CreatorID) -> LedgerResult<Creator> {
        self.creators
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(LedgerError::CreatorNotFound(id))
    }

    /// All videos in upload order.
    pub fn feed(&self) -> Vec<VideoItem> {
        let mut records: Vec<(u64, VideoItem)> = self
            .videos
            .iter()
            .map(|entry| (entry.position, entry.item.clone()))
            .collect();
        records.sort_by_key(|(position, _)| *position);
        records.into_iter().map(|(_, item)| item).collect()
    }

    pub fn videos_by_creator(&self, creator_id: CreatorID) -> Vec<VideoItem> {
        let mut records: Vec<(u64, VideoItem)> = self
            .videos
            .iter()
            .filter(|entry| entry.item.creator_id == creator_id)
            .map(|entry| (entry.position, entry.item.clone()))
            .collect();
        records.sort_by_key(|(position, _)| *position);
        records.into_iter().map(|(_, item)| item).collect()
    }

    // ===== Toggles =====

    /// Flip `viewer`'s like membership on `video_id`.
    ///
    /// The entry guard is held across the check and the mutation, so two
    /// concurrent likes on the same video can never both observe `Absent`
    /// and double-increment.
    pub fn toggle_like(
        &self,
        viewer: ViewerID,
        video_id: VideoID,
    ) -> LedgerResult<LikeToggle> {
        let mut entry = self
            .videos
            .get_mut(&video_id)
            .ok_or(LedgerError::VideoNotFound(video_id))?;

        let state = entry.item.likers.toggle(viewer);
        let like_count = entry.item.likers.count();
        debug!(%viewer, %video_id, ?state, like_count, "like toggled");

        Ok(LikeToggle { state, like_count })
    }

    /// Flip `viewer`'s follow membership on `creator_id`. Same atomicity
    /// contract as [`EngagementLedger::toggle_like`].
    pub fn toggle_follow(
        &self,
        viewer: ViewerID,
        creator_id: CreatorID,
    ) -> LedgerResult<FollowToggle> {
        let mut entry = self
            .creators
            .get_mut(&creator_id)
            .ok_or(LedgerError::CreatorNotFound(creator_id))?;

        let state = entry.followers.toggle(viewer);
        let follower_ids = entry.followers.members().to_vec();
        debug!(
            %viewer,
            %creator_id,
            ?state,
            follower_count = follower_ids.len(),
            "follow toggled"
        );

        Ok(FollowToggle {
            state,
            follower_ids,
        })
    }

    // ===== Snapshots =====

    /// Like membership of a video; count derived from the member list at
    /// the moment of the read.
    pub fn like_snapshot(&self, video_id: VideoID) -> LedgerResult<MembershipSnapshot> {
        self.videos
            .get(&video_id)
            .map(|entry| entry.item.likers.snapshot())
            .ok_or(LedgerError::VideoNotFound(video_id))
    }

    /// Follower membership of a creator.
    pub fn follower_snapshot(
        &self,
        creator_id: CreatorID,
    ) -> LedgerResult<MembershipSnapshot> {
        self.creators
            .get(&creator_id)
            .map(|entry| entry.followers.snapshot())
            .ok_or(LedgerError::CreatorNotFound(creator_id))
    }
}
