use crate::ids::ViewerID;

/// A registered viewer. Created at registration and immutable thereafter;
/// profile mutation is not part of this surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewer {
    pub id: ViewerID,
    pub full_name: String,
    pub email: String,
}

impl Viewer {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ViewerID::new(),
            full_name: full_name.into(),
            email: email.into(),
        }
    }
}
