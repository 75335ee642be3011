use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::entry::EntryStore;
use super::keys::LIST_KEY;
use crate::application::ports::{CacheStorePort, ClockPort};
use crate::domain::article::ArticleListEntry;

/// The assembled article list under a single key. Any registry mutation
/// must call [`ListCache::invalidate`].
#[derive(Clone)]
pub struct ListCache {
    entries: EntryStore,
    ttl: Duration,
}

impl ListCache {
    pub fn new(store: Arc<CacheStorePort>, clock: Arc<ClockPort>, ttl: Duration) -> Self {
        Self {
            entries: EntryStore::new(store, clock),
            ttl,
        }
    }

    pub async fn get(&self) -> Option<Vec<ArticleListEntry>> {
        self.entries.read(LIST_KEY).await
    }

    pub async fn put(&self, list: &[ArticleListEntry]) {
        self.put_with_ttl(list, self.ttl).await;
    }

    pub async fn put_with_ttl(&self, list: &[ArticleListEntry], ttl: Duration) {
        self.entries.write(LIST_KEY, list, ttl).await;
    }

    pub async fn invalidate(&self) {
        self.entries.remove(LIST_KEY).await;
        info!("invalidated cached article list");
    }
}
