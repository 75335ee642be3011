use tracing::info;

use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleRegistrationDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleSlug, ExternalUrl, RegistrationUpdate},
};

pub struct UpdateRegistrationCommand {
    pub id: i64,
    pub external_url: Option<String>,
    pub slug: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_registration(
        &self,
        command: UpdateRegistrationCommand,
    ) -> ApplicationResult<ArticleRegistrationDto> {
        let id = ArticleId::new(command.id)?;
        let registration = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let slug = command.slug.map(ArticleSlug::new).transpose()?;
        let external_url = command.external_url.map(ExternalUrl::new).transpose()?;

        let mut update = RegistrationUpdate::new(id, self.clock.now());
        if let Some(slug) = slug {
            update = update.with_slug(slug);
        }
        if let Some(external_url) = external_url {
            update = update.with_external_url(external_url);
        }
        if update.is_empty() {
            return Ok(registration.into());
        }

        let previous_target = registration.target();
        let updated = self.write_repo.update(update).await?;

        // entries are keyed by the mapping as it was before this update
        self.content_cache.invalidate(previous_target).await;
        if updated.target() != previous_target {
            self.content_cache.invalidate(updated.target()).await;
        }
        self.list_cache.invalidate().await;

        info!(
            id = i64::from(updated.id),
            slug = %updated.slug,
            target = %updated.target(),
            previous_target = %previous_target,
            "updated article registration"
        );
        Ok(updated.into())
    }
}
