//! Optimistic engagement mirror with sequenced reconciliation.
//!
//! The mirror tracks the current viewer's liked/followed membership and the
//! displayed counters. A tap flips local state *before* any network round
//! trip; every toggle request carries a monotonically increasing sequence
//! number per target. Responses reconcile by replacement, last-writer-wins
//! by sequence: a response older than the newest tap on its target is
//! discarded, so an out-of-order completion can never overwrite newer
//! optimistic state. A failed toggle explicitly inverts its optimistic
//! flip instead of leaving the mirror diverged from ledger truth.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use reelbite_model::api::FeedItem;
use reelbite_model::{CreatorID, VideoID, ViewerID};

/// Sequence-stamped like toggle awaiting a ledger round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeRequest {
    pub video_id: VideoID,
    pub seq: u64,
}

/// Sequence-stamped follow toggle awaiting a ledger round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowRequest {
    pub creator_id: CreatorID,
    pub seq: u64,
}

#[derive(Debug)]
pub struct EngagementMirror {
    viewer: ViewerID,
    liked: HashSet<VideoID>,
    like_counts: HashMap<VideoID, u64>,
    followed: HashSet<CreatorID>,
    follower_counts: HashMap<CreatorID, u64>,
    next_seq: u64,
    /// Newest sequence issued per target; responses below it are stale.
    like_latest: HashMap<VideoID, u64>,
    follow_latest: HashMap<CreatorID, u64>,
}

impl EngagementMirror {
    pub fn new(viewer: ViewerID) -> Self {
        Self {
            viewer,
            liked: HashSet::new(),
            like_counts: HashMap::new(),
            followed: HashSet::new(),
            follower_counts: HashMap::new(),
            next_seq: 0,
            like_latest: HashMap::new(),
            follow_latest: HashMap::new(),
        }
    }

    pub fn viewer(&self) -> ViewerID {
        self.viewer
    }

    /// Full reconciliation from a fresh feed snapshot: the liked set and
    /// all counters are re-derived from the authoritative membership
    /// arrays, replacing any optimistic drift. In-flight sequences are
    /// forgotten; their responses will be admitted as authoritative if
    /// they arrive later.
    pub fn sync_from_feed(&mut self, items: &[FeedItem]) {
        self.liked.clear();
        self.like_counts.clear();
        for item in items {
            if item.liker_ids.contains(&self.viewer) {
                self.liked.insert(item.id);
            }
            self.like_counts.insert(item.id, item.like_count);
        }
        self.like_latest.clear();
        self.follow_latest.clear();
    }

    // ===== Likes =====

    pub fn is_liked(&self, video_id: VideoID) -> bool {
        self.liked.contains(&video_id)
    }

    pub fn like_count(&self, video_id: VideoID) -> u64 {
        self.like_counts.get(&video_id).copied().unwrap_or(0)
    }

    /// Optimistic like tap: flip membership and adjust the displayed
    /// counter immediately, then hand back the sequenced request to send.
    pub fn tap_like(&mut self, video_id: VideoID) -> LikeRequest {
        let seq = self.bump_seq();
        self.like_latest.insert(video_id, seq);
        self.flip_like(video_id);
        LikeRequest { video_id, seq }
    }

    /// Authoritative response for a like toggle. Applied only when no newer
    /// tap has superseded it; returns whether it was applied.
    pub fn apply_like_response(
        &mut self,
        video_id: VideoID,
        seq: u64,
        liked: bool,
        like_count: u64,
    ) -> bool {
        if self.is_stale_like(video_id, seq) {
            debug!(%video_id, seq, "discarding stale like response");
            return false;
        }
        if liked {
            self.liked.insert(video_id);
        } else {
            self.liked.remove(&video_id);
        }
        self.like_counts.insert(video_id, like_count);
        true
    }

    /// Failed like toggle: invert the optimistic flip unless a newer tap
    /// already owns the target.
    pub fn fail_like(&mut self, video_id: VideoID, seq: u64) -> bool {
        if self.is_stale_like(video_id, seq) {
            return false;
        }
        self.flip_like(video_id);
        true
    }

    fn flip_like(&mut self, video_id: VideoID) {
        let count = self.like_counts.entry(video_id).or_insert(0);
        if self.liked.remove(&video_id) {
            *count = count.saturating_sub(1);
        } else {
            self.liked.insert(video_id);
            *count += 1;
        }
    }

    fn is_stale_like(&self, video_id: VideoID, seq: u64) -> bool {
        self.like_latest
            .get(&video_id)
            .is_some_and(|latest| seq < *latest)
    }

    // ===== Follows =====

    pub fn is_following(&self, creator_id: CreatorID) -> bool {
        self.followed.contains(&creator_id)
    }

    pub fn follower_count(&self, creator_id: CreatorID) -> u64 {
        self.follower_counts.get(&creator_id).copied().unwrap_or(0)
    }

    /// Seed follower state for a creator from an authoritative membership
    /// array (profile load).
    pub fn sync_followers(&mut self, creator_id: CreatorID, follower_ids: &[ViewerID]) {
        if follower_ids.contains(&self.viewer) {
            self.followed.insert(creator_id);
        } else {
            self.followed.remove(&creator_id);
        }
        self.follower_counts
            .insert(creator_id, follower_ids.len() as u64);
    }

    pub fn tap_follow(&mut self, creator_id: CreatorID) -> FollowRequest {
        let seq = self.bump_seq();
        self.follow_latest.insert(creator_id, seq);
        self.flip_follow(creator_id);
        FollowRequest { creator_id, seq }
    }

    /// Authoritative response for a follow toggle; membership is re-derived
    /// from the returned follower array, not merged.
    pub fn apply_follow_response(
        &mut self,
        creator_id: CreatorID,
        seq: u64,
        follower_ids: &[ViewerID],
    ) -> bool {
        if self.is_stale_follow(creator_id, seq) {
            debug!(%creator_id, seq, "discarding stale follow response");
            return false;
        }
        self.sync_followers(creator_id, follower_ids);
        true
    }

    pub fn fail_follow(&mut self, creator_id: CreatorID, seq: u64) -> bool {
        if self.is_stale_follow(creator_id, seq) {
            return false;
        }
        self.flip_follow(creator_id);
        true
    }

    fn flip_follow(&mut self, creator_id: CreatorID) {
        let count = self.follower_counts.entry(creator_id).or_insert(0);
        if self.followed.remove(&creator_id) {
            *count = count.saturating_sub(1);
        } else {
            self.followed.insert(creator_id);
            *count += 1;
        }
    }

    fn is_stale_follow(&self, creator_id: CreatorID, seq: u64) -> bool {
        self.follow_latest
            .get(&creator_id)
            .is_some_and(|latest| seq < *latest)
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror() -> (EngagementMirror, VideoID) {
        (EngagementMirror::new(ViewerID::new()), VideoID::new())
    }

    #[test]
    fn tap_flips_before_any_response() {
        let (mut mirror, video) = mirror();
        assert!(!mirror.is_liked(video));

        mirror.tap_like(video);
        assert!(mirror.is_liked(video));
        assert_eq!(mirror.like_count(video), 1);

        mirror.tap_like(video);
        assert!(!mirror.is_liked(video));
        assert_eq!(mirror.like_count(video), 0);
    }

    #[test]
    fn response_reconciles_counter_drift() {
        let (mut mirror, video) = mirror();
        let request = mirror.tap_like(video);

        // Another viewer liked concurrently; the ledger reports 5.
        assert!(mirror.apply_like_response(video, request.seq, true, 5));
        assert!(mirror.is_liked(video));
        assert_eq!(mirror.like_count(video), 5);
    }

    #[test]
    fn stale_response_is_discarded() {
        let (mut mirror, video) = mirror();
        let first = mirror.tap_like(video); // liked
        let _second = mirror.tap_like(video); // unliked again

        // First response arrives after the second tap; applying it would
        // resurrect the like the viewer already withdrew.
        assert!(!mirror.apply_like_response(video, first.seq, true, 1));
        assert!(!mirror.is_liked(video));
        assert_eq!(mirror.like_count(video), 0);
    }

    #[test]
    fn failure_inverts_the_optimistic_flip() {
        let (mut mirror, video) = mirror();
        let request = mirror.tap_like(video);
        assert!(mirror.is_liked(video));

        assert!(mirror.fail_like(video, request.seq));
        assert!(!mirror.is_liked(video));
        assert_eq!(mirror.like_count(video), 0);
    }

    #[test]
    fn stale_failure_does_not_invert_newer_state() {
        let (mut mirror, video) = mirror();
        let first = mirror.tap_like(video);
        let _second = mirror.tap_like(video);
        let _third = mirror.tap_like(video); // net: liked

        assert!(!mirror.fail_like(video, first.seq));
        assert!(mirror.is_liked(video));
    }

    #[test]
    fn follow_round_trip_derives_from_member_array() {
        let viewer = ViewerID::new();
        let mut mirror = EngagementMirror::new(viewer);
        let creator = CreatorID::new();

        let request = mirror.tap_follow(creator);
        assert!(mirror.is_following(creator));

        let others = [ViewerID::new(), viewer, ViewerID::new()];
        assert!(mirror.apply_follow_response(creator, request.seq, &others));
        assert!(mirror.is_following(creator));
        assert_eq!(mirror.follower_count(creator), 3);

        let request = mirror.tap_follow(creator);
        assert!(!mirror.is_following(creator));
        assert_eq!(mirror.follower_count(creator), 2);

        let remaining = [ViewerID::new(), ViewerID::new()];
        assert!(mirror.apply_follow_response(creator, request.seq, &remaining));
        assert!(!mirror.is_following(creator));
        assert_eq!(mirror.follower_count(creator), 2);
    }
}
