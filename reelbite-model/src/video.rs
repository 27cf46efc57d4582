use url::Url;

use crate::engagement::MembershipSet;
use crate::error::{ModelError, Result};
use crate::ids::{CreatorID, VideoID};

/// Validate an upload payload before it is handed to the storage
/// collaborator. The bytes themselves stay opaque.
pub fn validate_media(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(ModelError::InvalidMedia("media payload is empty".into()));
    }
    Ok(())
}

/// A single uploaded short-form video.
///
/// The media locator is opaque here; the upload collaborator owns the bytes.
/// The liker set and its counter are mutated only through the ledger toggle,
/// never directly, which is what keeps `like_count == likers.len()` true at
/// every observable instant.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoItem {
    pub id: VideoID,
    pub name: String,
    pub description: Option<String>,
    pub media_uri: Url,
    pub creator_id: CreatorID,
    /// Canonical like membership for this video.
    pub likers: MembershipSet,
}

impl VideoItem {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        media_uri: Url,
        creator_id: CreatorID,
    ) -> Self {
        Self {
            id: VideoID::new(),
            name: name.into(),
            description,
            media_uri,
            creator_id,
            likers: MembershipSet::new(),
        }
    }

    pub fn like_count(&self) -> u64 {
        self.likers.count()
    }
}
