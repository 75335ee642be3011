use crate::domain::article::entity::{ArticleRegistration, NewArticleRegistration, RegistrationUpdate};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, registration: NewArticleRegistration) -> DomainResult<ArticleRegistration>;
    async fn update(&self, update: RegistrationUpdate) -> DomainResult<ArticleRegistration>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleRegistration>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRegistration>>;
    /// Every registration, newest first.
    async fn list_all(&self) -> DomainResult<Vec<ArticleRegistration>>;
}
