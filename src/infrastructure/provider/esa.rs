// src/infrastructure/provider/esa.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::application::ports::content_provider::{ContentProvider, ProviderError};
use crate::domain::article::{ArticleAuthor, ArticleContent, ExternalPostRef};

pub const DEFAULT_API_BASE: &str = "https://api.esa.io/v1";

/// Client for the esa.io v1 posts API.
#[derive(Clone)]
pub struct EsaContentProvider {
    client: Client,
    api_base: String,
    access_token: String,
}

impl EsaContentProvider {
    pub fn new(
        api_base: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    fn post_url(&self, target: &ExternalPostRef) -> String {
        format!(
            "{}/teams/{}/posts/{}",
            self.api_base, target.workspace, target.post_id
        )
    }
}

#[async_trait]
impl ContentProvider for EsaContentProvider {
    async fn fetch_post(&self, target: &ExternalPostRef) -> Result<ArticleContent, ProviderError> {
        let url = self.post_url(target);
        debug!(url = %url, "requesting post from esa");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => return Err(ProviderError::NotFound),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ProviderError::Unauthorized(status.to_string()));
            }
            status if !status.is_success() => {
                return Err(ProviderError::Transport(format!(
                    "unexpected status {status}"
                )));
            }
            _ => {}
        }

        let post: EsaPost = response
            .json()
            .await
            .map_err(|err| ProviderError::Decode(err.to_string()))?;
        Ok(post.into())
    }
}

#[derive(Debug, Deserialize)]
struct EsaPost {
    name: String,
    #[serde(default)]
    body_md: String,
    #[serde(default)]
    body_html: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, alias = "created_by")]
    user: Option<EsaUser>,
}

#[derive(Debug, Deserialize)]
struct EsaUser {
    name: String,
    screen_name: String,
    #[serde(default)]
    icon: Option<String>,
}

impl From<EsaPost> for ArticleContent {
    fn from(post: EsaPost) -> Self {
        Self {
            title: post.name,
            body_markdown: post.body_md,
            body_html: post.body_html,
            category: post.category.filter(|category| !category.is_empty()),
            tags: post.tags.into_iter().collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            author: post.user.map(|user| ArticleAuthor {
                name: user.name,
                screen_name: user.screen_name,
                icon: user.icon,
            }),
        }
    }
}
