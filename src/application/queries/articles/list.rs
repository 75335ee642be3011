use futures::future::join_all;
use tracing::debug;

use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleListItemDto, error::ApplicationResult},
    domain::article::ArticleListEntry,
};

impl ArticleQueryService {
    /// Published articles for list views. Never fetches content: entries
    /// without cached metadata fall back to slug-derived titles.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleListItemDto>> {
        if let Some(entries) = self.list_cache.get().await {
            return Ok(entries.into_iter().map(Into::into).collect());
        }

        let registrations = self.read_repo.list_all().await?;
        let metadata = join_all(
            registrations
                .iter()
                .map(|registration| self.content_cache.get_metadata(registration.target())),
        )
        .await;
        let entries: Vec<ArticleListEntry> = registrations
            .into_iter()
            .zip(metadata)
            .map(|(registration, metadata)| ArticleListEntry::new(registration, metadata))
            .collect();

        self.list_cache.put(&entries).await;
        debug!(count = entries.len(), "rebuilt article list");
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
