//! Identity collaborator stand-in: account registry plus opaque session
//! tokens. Credential storage and token issuance mechanics are outside the
//! engagement core; this module keeps just enough state to resolve a bearer
//! token to a viewer or creator id, failing closed with `Unauthenticated`.

use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use reelbite_model::{CreatorID, Viewer, ViewerID};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("account with this email already exists")]
    DuplicateEmail,
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// The principal a session token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Viewer(ViewerID),
    Creator(CreatorID),
}

impl Identity {
    pub fn viewer_id(self) -> Option<ViewerID> {
        match self {
            Identity::Viewer(id) => Some(id),
            Identity::Creator(_) => None,
        }
    }

    pub fn creator_id(self) -> Option<CreatorID> {
        match self {
            Identity::Creator(id) => Some(id),
            Identity::Viewer(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
struct ViewerAccount {
    viewer: Viewer,
    // Opaque credential blob owned by the external identity collaborator;
    // compared verbatim here.
    secret: String,
}

#[derive(Debug, Clone)]
struct CreatorAccount {
    creator_id: CreatorID,
    secret: String,
}

/// Registered accounts, indexed by email for login and uniqueness.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    viewers: DashMap<String, ViewerAccount>,
    creators: DashMap<String, CreatorAccount>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a viewer account. The email entry is claimed atomically, so
    /// two concurrent registrations with the same address cannot both win.
    pub fn register_viewer(
        &self,
        full_name: &str,
        email: &str,
        secret: &str,
    ) -> Result<Viewer, AuthError> {
        let entry = self.viewers.entry(email.to_string());
        match entry {
            dashmap::Entry::Occupied(_) => Err(AuthError::DuplicateEmail),
            dashmap::Entry::Vacant(vacant) => {
                let viewer = Viewer::new(full_name, email);
                vacant.insert(ViewerAccount {
                    viewer: viewer.clone(),
                    secret: secret.to_string(),
                });
                Ok(viewer)
            }
        }
    }

    pub fn register_creator(
        &self,
        creator_id: CreatorID,
        email: &str,
        secret: &str,
    ) -> Result<(), AuthError> {
        let entry = self.creators.entry(email.to_string());
        match entry {
            dashmap::Entry::Occupied(_) => Err(AuthError::DuplicateEmail),
            dashmap::Entry::Vacant(vacant) => {
                vacant.insert(CreatorAccount {
                    creator_id,
                    secret: secret.to_string(),
                });
                Ok(())
            }
        }
    }

    pub fn login_viewer(&self, email: &str, secret: &str) -> Result<Viewer, AuthError> {
        self.viewers
            .get(email)
            .filter(|account| account.secret == secret)
            .map(|account| account.viewer.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    pub fn login_creator(&self, email: &str, secret: &str) -> Result<CreatorID, AuthError> {
        self.creators
            .get(email)
            .filter(|account| account.secret == secret)
            .map(|account| account.creator_id)
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Live sessions: opaque token → principal.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Identity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, identity: Identity) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), identity);
        token
    }

    pub fn resolve(&self, token: &str) -> Option<Identity> {
        self.sessions.get(token).map(|entry| *entry)
    }

    pub fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }
}
