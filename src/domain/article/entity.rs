// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ExternalPostRef, ExternalUrl};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maps a local slug onto a post of the external knowledge-base service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRegistration {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub external_url: ExternalUrl,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleRegistration {
    pub const fn target(&self) -> &ExternalPostRef {
        self.external_url.target()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticleRegistration {
    pub slug: ArticleSlug,
    pub external_url: ExternalUrl,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RegistrationUpdate {
    pub id: ArticleId,
    pub slug: Option<ArticleSlug>,
    pub external_url: Option<ExternalUrl>,
    pub updated_at: DateTime<Utc>,
}

impl RegistrationUpdate {
    pub const fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            external_url: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_external_url(mut self, external_url: ExternalUrl) -> Self {
        self.external_url = Some(external_url);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.slug.is_none() && self.external_url.is_none()
    }
}
