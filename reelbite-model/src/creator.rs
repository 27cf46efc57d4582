use crate::engagement::MembershipSet;
use crate::ids::CreatorID;

/// A food partner who uploads video items and accumulates followers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creator {
    pub id: CreatorID,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    /// Canonical follower membership; mutated only through the ledger toggle.
    pub followers: MembershipSet,
}

impl Creator {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            id: CreatorID::new(),
            name: name.into(),
            email: email.into(),
            address,
            followers: MembershipSet::new(),
        }
    }

    pub fn follower_count(&self) -> u64 {
        self.followers.count()
    }
}
