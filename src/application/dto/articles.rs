use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::render::{PageEffect, RenderedArticle, ScopedStyle, ScriptFragment};
use crate::domain::article::{
    ArticleAuthor, ArticleContent, ArticleListEntry, ArticleRegistration, content::excerpt,
};

const DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRegistrationDto {
    pub id: i64,
    pub slug: String,
    pub external_url: String,
    pub workspace: String,
    pub external_post_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleRegistration> for ArticleRegistrationDto {
    fn from(registration: ArticleRegistration) -> Self {
        let target = registration.target();
        Self {
            id: registration.id.into(),
            workspace: target.workspace.as_str().to_string(),
            external_post_id: target.post_id.into(),
            slug: registration.slug.as_str().to_string(),
            external_url: registration.external_url.as_str().to_string(),
            created_at: registration.created_at,
            updated_at: registration.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListItemDto {
    pub id: i64,
    pub slug: String,
    pub display_title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Last change of the external content, when its metadata is cached.
    #[serde(default)]
    pub content_updated_at: Option<DateTime<Utc>>,
    pub registered_at: DateTime<Utc>,
}

impl From<ArticleListEntry> for ArticleListItemDto {
    fn from(entry: ArticleListEntry) -> Self {
        let display_title = entry.display_title();
        let ArticleListEntry {
            registration,
            metadata,
        } = entry;
        let (excerpt, tags, category, content_updated_at) = match metadata {
            Some(meta) => (
                Some(meta.excerpt),
                meta.tags.into_iter().collect(),
                meta.category,
                Some(meta.updated_at),
            ),
            None => (None, Vec::new(), None, None),
        };
        Self {
            id: registration.id.into(),
            slug: registration.slug.as_str().to_string(),
            display_title,
            excerpt,
            tags,
            category,
            content_updated_at,
            registered_at: registration.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleHeaderDto {
    pub title: String,
    #[serde(default)]
    pub author: Option<ArticleAuthor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeadDto {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePageDto {
    pub slug: String,
    pub header: ArticleHeaderDto,
    pub head: PageHeadDto,
    pub markup: String,
    pub styles: Vec<ScopedStyle>,
    pub scripts: Vec<ScriptFragment>,
    pub has_code_blocks: bool,
    pub mount: Vec<PageEffect>,
    pub teardown: Vec<PageEffect>,
}

impl ArticlePageDto {
    pub fn assemble(slug: &str, content: ArticleContent, rendered: RenderedArticle) -> Self {
        let mount = rendered.mount_plan();
        let teardown = rendered.teardown_plan();
        let head = PageHeadDto {
            title: content.title.clone(),
            description: format!("{}...", excerpt(&content.body_markdown, DESCRIPTION_CHARS)),
        };
        let header = ArticleHeaderDto {
            title: content.title,
            author: content.author,
            created_at: content.created_at,
            updated_at: content.updated_at,
            category: content.category,
            tags: content.tags.into_iter().collect(),
        };
        Self {
            slug: slug.to_string(),
            header,
            head,
            markup: rendered.markup,
            styles: rendered.styles,
            scripts: rendered.scripts,
            has_code_blocks: rendered.has_code_blocks,
            mount,
            teardown,
        }
    }
}
