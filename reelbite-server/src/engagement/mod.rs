//! Engagement ledger and its HTTP surface.

pub mod handlers;
pub mod ledger;

pub use ledger::{
    EngagementLedger, FollowToggle, LedgerError, LedgerResult, LikeToggle,
};
