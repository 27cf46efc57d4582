use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed ID for viewers
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ViewerID(pub Uuid);

impl Default for ViewerID {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerID {
    pub fn new() -> Self {
        ViewerID(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        let uuid = id
            .parse()
            .map_err(|_| ModelError::InvalidId(format!("viewer id `{id}` is not a uuid")))?;
        Ok(ViewerID(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ViewerID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ViewerID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for creators (partners who upload videos)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CreatorID(pub Uuid);

impl Default for CreatorID {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatorID {
    pub fn new() -> Self {
        CreatorID(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        let uuid = id
            .parse()
            .map_err(|_| ModelError::InvalidId(format!("creator id `{id}` is not a uuid")))?;
        Ok(CreatorID(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for CreatorID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CreatorID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for video items
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VideoID(pub Uuid);

impl Default for VideoID {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoID {
    pub fn new() -> Self {
        VideoID(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        let uuid = id
            .parse()
            .map_err(|_| ModelError::InvalidId(format!("video id `{id}` is not a uuid")))?;
        Ok(VideoID(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for VideoID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for VideoID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for comments
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommentID(pub Uuid);

impl Default for CommentID {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentID {
    pub fn new() -> Self {
        CommentID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for CommentID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CommentID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_rejects_garbage() {
        assert!(ViewerID::from_string("not-a-uuid").is_err());
        assert!(VideoID::from_string("").is_err());
    }

    #[test]
    fn from_string_round_trips() {
        let id = VideoID::new();
        let parsed = VideoID::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }
}
