use tracing::info;

use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleRegistrationDto, error::ApplicationResult},
    domain::article::{ArticleSlug, ExternalUrl, NewArticleRegistration},
};

pub struct CreateRegistrationCommand {
    pub external_url: String,
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn create_registration(
        &self,
        command: CreateRegistrationCommand,
    ) -> ApplicationResult<ArticleRegistrationDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let external_url = ExternalUrl::new(command.external_url)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewArticleRegistration {
                slug,
                external_url,
                created_at: now,
                updated_at: now,
            })
            .await?;

        // the post may have been registered before under another slug
        self.content_cache.invalidate(created.target()).await;
        self.list_cache.invalidate().await;

        info!(
            id = i64::from(created.id),
            slug = %created.slug,
            target = %created.target(),
            "registered article"
        );
        Ok(created.into())
    }
}
