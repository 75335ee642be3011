use tracing::{debug, error, info};

use super::ArticleQueryService;
use crate::{
    application::{
        cache::keys::content_key,
        dto::ArticlePageDto,
        error::{ApplicationError, ApplicationResult},
        ports::content_provider::ProviderError,
    },
    domain::article::{ArticleContent, ArticleSlug, ExternalPostRef},
};

pub struct GetArticlePageQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_page(
        &self,
        query: GetArticlePageQuery,
    ) -> ApplicationResult<ArticlePageDto> {
        // a malformed slug can never be registered
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let registration = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = self
            .load_content(registration.target())
            .await?
            .ok_or_else(|| ApplicationError::not_found("article content not found"))?;

        let rendered = self.pipeline.render(&content)?;
        Ok(ArticlePageDto::assemble(slug.as_str(), content, rendered))
    }

    /// Cache-aside read of one post. `Ok(None)` means the provider does not
    /// know the post; that outcome is never cached.
    pub(super) async fn load_content(
        &self,
        target: &ExternalPostRef,
    ) -> ApplicationResult<Option<ArticleContent>> {
        if let Some(content) = self.content_cache.get(target).await {
            return Ok(Some(content));
        }

        let mut flight = self.flights.acquire(&content_key(target)).await;
        if let Some(content) = flight.shared() {
            debug!(target = %target, "content handed over by concurrent request");
            return Ok(Some(content.clone()));
        }
        if let Some(content) = self.content_cache.get(target).await {
            debug!(target = %target, "content filled by concurrent request");
            return Ok(Some(content));
        }

        match self.provider.fetch_post(target).await {
            Ok(content) => {
                self.content_cache.put(target, &content).await;
                flight.publish(content.clone());
                info!(target = %target, "fetched article content from provider");
                Ok(Some(content))
            }
            Err(ProviderError::NotFound) => {
                info!(target = %target, "provider has no such post");
                Ok(None)
            }
            Err(err) => {
                error!(target = %target, error = %err, "provider fetch failed");
                Err(err.into())
            }
        }
    }
}
