//! Upload collaborator: accepts raw media bytes and hands back a stable
//! URI. The ledger only ever stores the URI.

use async_trait::async_trait;
use dashmap::DashMap;
use url::Url;
use uuid::Uuid;

/// Abstraction over the media storage collaborator.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persist `bytes` under `key` and return a stable locator for them.
    async fn store(&self, bytes: Vec<u8>, key: Uuid) -> anyhow::Result<Url>;

    /// Fetch previously stored bytes, if the key is known.
    async fn fetch(&self, key: Uuid) -> Option<Vec<u8>>;
}

/// Process-local storage keyed by upload id. Stands in for the real object
/// store; URIs it mints stay valid for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryStorage {
    base: Url,
    blobs: DashMap<Uuid, Vec<u8>>,
}

impl InMemoryStorage {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            blobs: DashMap::new(),
        }
    }
}

#[async_trait]
impl MediaStorage for InMemoryStorage {
    async fn store(&self, bytes: Vec<u8>, key: Uuid) -> anyhow::Result<Url> {
        let uri = self.base.join(&format!("media/{key}"))?;
        self.blobs.insert(key, bytes);
        Ok(uri)
    }

    async fn fetch(&self, key: Uuid) -> Option<Vec<u8>> {
        self.blobs.get(&key).map(|entry| entry.clone())
    }
}
