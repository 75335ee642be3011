use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::entry::EntryStore;
use super::keys::{content_key, metadata_key};
use crate::application::ports::{CacheStorePort, ClockPort};
use crate::domain::article::{ArticleContent, ArticleMetadata, ExternalPostRef};

/// Content and list metadata of external posts, keyed by
/// `(workspace, post id)`. Both entries are written and removed together.
#[derive(Clone)]
pub struct ContentCache {
    entries: EntryStore,
    ttl: Duration,
}

impl ContentCache {
    pub fn new(store: Arc<CacheStorePort>, clock: Arc<ClockPort>, ttl: Duration) -> Self {
        Self {
            entries: EntryStore::new(store, clock),
            ttl,
        }
    }

    pub async fn get(&self, target: &ExternalPostRef) -> Option<ArticleContent> {
        self.entries.read(&content_key(target)).await
    }

    pub async fn get_metadata(&self, target: &ExternalPostRef) -> Option<ArticleMetadata> {
        self.entries.read(&metadata_key(target)).await
    }

    pub async fn put(&self, target: &ExternalPostRef, content: &ArticleContent) {
        self.put_with_ttl(target, content, self.ttl).await;
    }

    pub async fn put_with_ttl(
        &self,
        target: &ExternalPostRef,
        content: &ArticleContent,
        ttl: Duration,
    ) {
        let metadata = ArticleMetadata::project(target.clone(), content);
        self.entries.write(&content_key(target), content, ttl).await;
        self.entries.write(&metadata_key(target), &metadata, ttl).await;
    }

    pub async fn invalidate(&self, target: &ExternalPostRef) {
        self.entries.remove(&content_key(target)).await;
        self.entries.remove(&metadata_key(target)).await;
        info!(target = %target, "invalidated cached article content");
    }
}
