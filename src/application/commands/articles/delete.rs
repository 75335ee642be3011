use tracing::info;

use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteRegistrationCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_registration(
        &self,
        command: DeleteRegistrationCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let registration = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(id).await?;
        self.content_cache.invalidate(registration.target()).await;
        self.list_cache.invalidate().await;

        info!(
            id = i64::from(id),
            slug = %registration.slug,
            "deleted article registration"
        );
        Ok(())
    }
}
