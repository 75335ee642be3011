use tracing::{info, warn};

use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleRegistrationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct RefreshArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Drops cached content for `slug` and repopulates it from the provider.
    pub async fn refresh_article(
        &self,
        command: RefreshArticleCommand,
    ) -> ApplicationResult<ArticleRegistrationDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let registration = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let target = registration.target();

        self.content_cache.invalidate(target).await;
        let fetched = self.provider.fetch_post(target).await;
        if let Ok(content) = &fetched {
            self.content_cache.put(target, content).await;
        }
        // the cached list may hold metadata of the dropped entry either way
        self.list_cache.invalidate().await;

        if let Err(err) = fetched {
            warn!(slug = %slug, target = %target, error = %err, "refresh fetch failed");
            return Err(ApplicationError::from(err));
        }

        info!(slug = %slug, target = %target, "refreshed article content");
        Ok(registration.into())
    }
}
