//! Engagement membership primitives.
//!
//! A membership set is the canonical record of which viewers hold an
//! engagement edge (like, follow) against a single target, together with a
//! materialized cardinality counter. The counter is strictly derived: it is
//! only ever updated inside the same mutation that changes the set, so
//! `count == members.len()` holds at every observable instant.

use crate::ids::ViewerID;

/// Membership state of a single (viewer, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MembershipState {
    Present,
    Absent,
}

impl MembershipState {
    pub fn is_present(self) -> bool {
        matches!(self, MembershipState::Present)
    }

    /// The state a toggle transitions into from `self`.
    pub fn flipped(self) -> Self {
        match self {
            MembershipState::Present => MembershipState::Absent,
            MembershipState::Absent => MembershipState::Present,
        }
    }
}

/// Point-in-time read of a membership set. `count` is derived from the
/// member list at the moment of the read, never a separately tracked value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MembershipSnapshot {
    pub members: Vec<ViewerID>,
    pub count: u64,
}

/// Ordered member set plus materialized counter.
///
/// The only mutation is [`MembershipSet::toggle`], which applies the set
/// change and the counter change as one unit. Callers that need the
/// atomicity guarantee across threads must hold the owning entry
/// exclusively for the duration of the call; the type itself is not
/// internally synchronized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MembershipSet {
    members: Vec<ViewerID>,
    count: u64,
}

impl MembershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the membership of `viewer` and return the state it landed in.
    ///
    /// `ABSENT → PRESENT` inserts the viewer and increments the counter by
    /// exactly one; `PRESENT → ABSENT` removes the viewer and decrements by
    /// exactly one, clamped at zero.
    pub fn toggle(&mut self, viewer: ViewerID) -> MembershipState {
        if let Some(pos) = self.members.iter().position(|m| *m == viewer) {
            self.members.remove(pos);
            self.count = self.count.saturating_sub(1);
            MembershipState::Absent
        } else {
            self.members.push(viewer);
            self.count += 1;
            MembershipState::Present
        }
    }

    pub fn state_of(&self, viewer: ViewerID) -> MembershipState {
        if self.members.contains(&viewer) {
            MembershipState::Present
        } else {
            MembershipState::Absent
        }
    }

    pub fn contains(&self, viewer: ViewerID) -> bool {
        self.members.contains(&viewer)
    }

    /// Materialized cardinality. Equal to `members().len()` by construction.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn members(&self) -> &[ViewerID] {
        &self.members
    }

    /// Snapshot with the count re-derived from the member list.
    pub fn snapshot(&self) -> MembershipSnapshot {
        MembershipSnapshot {
            members: self.members.clone(),
            count: self.members.len() as u64,
        }
    }
}
