use super::ArticleQueryService;
use crate::application::{dto::ArticleRegistrationDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn list_registrations(&self) -> ApplicationResult<Vec<ArticleRegistrationDto>> {
        let registrations = self.read_repo.list_all().await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }
}
