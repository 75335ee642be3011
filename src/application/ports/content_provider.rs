// src/application/ports/content_provider.rs
use crate::domain::article::{ArticleContent, ExternalPostRef};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The post does not exist or is not visible to our credentials. Never
    /// cached: the next request asks the provider again.
    #[error("post not found on provider")]
    NotFound,
    #[error("provider rejected credentials: {0}")]
    Unauthorized(String),
    #[error("provider request failed: {0}")]
    Transport(String),
    #[error("provider response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch_post(&self, target: &ExternalPostRef) -> Result<ArticleContent, ProviderError>;
}
