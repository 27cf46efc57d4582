//! Per-item playback coordination.
//!
//! Invariant: at most one item is in the `Playing` state at any instant.
//! The only way an item starts playing is through [`PlaybackCoordinator::activate`]
//! or a tap on the already-active item, and both pause the previous item in
//! the same transition.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
}

#[derive(Debug)]
pub struct PlaybackCoordinator {
    states: Vec<PlayState>,
    active: Option<usize>,
    muted: bool,
}

impl PlaybackCoordinator {
    pub fn new(item_count: usize) -> Self {
        Self {
            states: vec![PlayState::Paused; item_count],
            active: None,
            muted: true,
        }
    }

    /// Make `index` the single active item: pause whatever was playing,
    /// play the new item, record it as active. A no-op when `index` is
    /// already active.
    pub fn activate(&mut self, index: usize) {
        if self.states.is_empty() || index >= self.states.len() {
            return;
        }
        if self.active == Some(index) {
            return;
        }

        if let Some(previous) = self.active
            && let Some(state) = self.states.get_mut(previous)
        {
            *state = PlayState::Paused;
        }
        self.states[index] = PlayState::Playing;
        self.active = Some(index);
        trace!(index, "feed item activated");
    }

    /// Tap on the active item: pause if playing, resume if paused. Taps on
    /// non-active items are ignored so a second item can never start.
    pub fn toggle_active(&mut self, index: usize) {
        if self.active != Some(index) {
            return;
        }
        let state = &mut self.states[index];
        *state = match *state {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused => PlayState::Playing,
        };
    }

    /// Reset for a replaced feed snapshot, keeping the active index when it
    /// is still in range.
    pub fn resize(&mut self, item_count: usize) {
        let was_active = self.active.filter(|&index| index < item_count);
        self.states = vec![PlayState::Paused; item_count];
        self.active = None;
        if let Some(index) = was_active {
            self.activate(index);
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_playing(&self, index: usize) -> bool {
        self.states.get(index) == Some(&PlayState::Playing)
    }

    /// Number of items currently playing; by construction never above 1.
    pub fn playing_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == PlayState::Playing)
            .count()
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_plays_before_first_activation() {
        let playback = PlaybackCoordinator::new(4);
        assert_eq!(playback.playing_count(), 0);
        assert_eq!(playback.active_index(), None);
    }

    #[test]
    fn activation_pauses_the_previous_item() {
        let mut playback = PlaybackCoordinator::new(4);
        playback.activate(0);
        playback.activate(2);

        assert!(playback.is_playing(2));
        assert!(!playback.is_playing(0));
        assert_eq!(playback.playing_count(), 1);
    }

    #[test]
    fn at_most_one_playing_across_random_walk() {
        let mut playback = PlaybackCoordinator::new(6);
        for index in [0usize, 3, 1, 5, 5, 2, 0, 4] {
            playback.activate(index);
            assert!(playback.playing_count() <= 1);
        }
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let mut playback = PlaybackCoordinator::new(3);
        playback.activate(7);
        assert_eq!(playback.playing_count(), 0);
        assert_eq!(playback.active_index(), None);
    }

    #[test]
    fn tap_pauses_and_resumes_only_the_active_item() {
        let mut playback = PlaybackCoordinator::new(3);
        playback.activate(1);

        playback.toggle_active(1);
        assert_eq!(playback.playing_count(), 0);

        // Tapping a non-active item must not start it.
        playback.toggle_active(2);
        assert_eq!(playback.playing_count(), 0);

        playback.toggle_active(1);
        assert!(playback.is_playing(1));
    }

    #[test]
    fn resize_keeps_active_when_still_in_range() {
        let mut playback = PlaybackCoordinator::new(5);
        playback.activate(2);
        playback.resize(4);
        assert_eq!(playback.active_index(), Some(2));
        assert_eq!(playback.playing_count(), 1);

        playback.resize(2);
        assert_eq!(playback.active_index(), None);
        assert_eq!(playback.playing_count(), 0);
    }
}
