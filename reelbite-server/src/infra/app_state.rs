use std::{fmt, sync::Arc};

use url::Url;

use crate::auth::{AccountRegistry, SessionStore};
use crate::comments::CommentBoard;
use crate::engagement::EngagementLedger;
use crate::infra::config::Config;
use crate::storage::{InMemoryStorage, MediaStorage};

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<EngagementLedger>,
    pub comments: Arc<CommentBoard>,
    pub accounts: Arc<AccountRegistry>,
    pub sessions: Arc<SessionStore>,
    pub storage: Arc<dyn MediaStorage>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage = InMemoryStorage::new(config.public_base_url.clone());
        Self::with_storage(config, Arc::new(storage))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn MediaStorage>) -> Self {
        Self {
            ledger: Arc::new(EngagementLedger::new()),
            comments: Arc::new(CommentBoard::new()),
            accounts: Arc::new(AccountRegistry::new()),
            sessions: Arc::new(SessionStore::new()),
            storage,
            config: Arc::new(config),
        }
    }

    pub fn media_base(&self) -> &Url {
        &self.config.public_base_url
    }
}
