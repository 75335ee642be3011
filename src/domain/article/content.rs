// src/domain/article/content.rs
use crate::domain::article::entity::ArticleRegistration;
use crate::domain::article::value_objects::ExternalPostRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleAuthor {
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Article body as served by the external provider. Never authoritative: it
/// can always be fetched again by its [`ExternalPostRef`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    pub body_markdown: String,
    pub body_html: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<ArticleAuthor>,
}

impl ArticleContent {
    pub fn has_code_blocks(&self) -> bool {
        self.body_html.contains("<code") || self.body_html.contains("<pre")
    }
}

/// Small projection of [`ArticleContent`] used by list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub target: ExternalPostRef,
    pub title: String,
    pub excerpt: String,
    pub tags: BTreeSet<String>,
    pub category: Option<String>,
    /// Timestamp of the external content, not of the local registration.
    pub updated_at: DateTime<Utc>,
}

impl ArticleMetadata {
    pub fn project(target: ExternalPostRef, content: &ArticleContent) -> Self {
        Self {
            target,
            title: content.title.clone(),
            excerpt: excerpt(&content.body_markdown, EXCERPT_CHARS),
            tags: content.tags.clone(),
            category: content.category.clone(),
            updated_at: content.updated_at,
        }
    }
}

/// First `limit` characters of `text`, cut on a char boundary.
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListEntry {
    pub registration: ArticleRegistration,
    #[serde(default)]
    pub metadata: Option<ArticleMetadata>,
}

impl ArticleListEntry {
    pub fn new(registration: ArticleRegistration, metadata: Option<ArticleMetadata>) -> Self {
        // metadata cached under another post identity belongs to a stale mapping
        let metadata = metadata.filter(|meta| &meta.target == registration.target());
        Self {
            registration,
            metadata,
        }
    }

    pub fn display_title(&self) -> String {
        self.metadata.as_ref().map_or_else(
            || self.registration.slug.display_title(),
            |meta| meta.title.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ExternalUrl};
    use chrono::Duration;

    fn sample_content() -> ArticleContent {
        let created = Utc::now() - Duration::days(3);
        ArticleContent {
            title: "Deploying the edge cache".into(),
            body_markdown: "x".repeat(450),
            body_html: "<p>hello</p>".into(),
            category: Some("ops/infra".into()),
            tags: ["cache", "edge"].into_iter().map(String::from).collect(),
            created_at: created,
            updated_at: created + Duration::hours(5),
            author: None,
        }
    }

    fn sample_registration(url: &str) -> ArticleRegistration {
        let now = Utc::now();
        ArticleRegistration {
            id: ArticleId::new(3).unwrap(),
            slug: ArticleSlug::new("edge-cache").unwrap(),
            external_url: ExternalUrl::new(url).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn metadata_projection_truncates_excerpt_and_keeps_content_timestamp() {
        let content = sample_content();
        let registration = sample_registration("https://docs.esa.io/posts/5");
        let meta = ArticleMetadata::project(registration.target().clone(), &content);

        assert_eq!(meta.excerpt.chars().count(), EXCERPT_CHARS);
        assert_eq!(meta.updated_at, content.updated_at);
        assert_ne!(meta.updated_at, registration.updated_at);
        assert_eq!(meta.tags.len(), 2);
    }

    #[test]
    fn excerpt_respects_multibyte_boundaries() {
        let text = "日本語のテキスト";
        assert_eq!(excerpt(text, 3), "日本語");
        assert_eq!(excerpt(text, 100), text);
    }

    #[test]
    fn list_entry_falls_back_to_slug_title() {
        let entry = ArticleListEntry::new(sample_registration("https://docs.esa.io/posts/5"), None);
        assert_eq!(entry.display_title(), "Edge Cache");
    }

    #[test]
    fn list_entry_drops_metadata_of_another_post() {
        let content = sample_content();
        let stale_target = sample_registration("https://docs.esa.io/posts/99")
            .target()
            .clone();
        let meta = ArticleMetadata::project(stale_target, &content);
        let entry = ArticleListEntry::new(
            sample_registration("https://docs.esa.io/posts/5"),
            Some(meta),
        );
        assert!(entry.metadata.is_none());
    }

    #[test]
    fn code_block_detection() {
        let mut content = sample_content();
        assert!(!content.has_code_blocks());
        content.body_html = "<pre><code>fn main() {}</code></pre>".into();
        assert!(content.has_code_blocks());
    }
}
