// tests/support/builders.rs
use chrono::TimeDelta;
use scopepress::domain::article::{
    ArticleAuthor, ArticleContent, ExternalPostId, ExternalPostRef, Workspace,
};

use super::mocks::fixed_now;

pub fn target(workspace: &str, post_id: i64) -> ExternalPostRef {
    ExternalPostRef::new(
        Workspace::new(workspace).unwrap(),
        ExternalPostId::new(post_id).unwrap(),
    )
}

pub fn post_url(workspace: &str, post_id: i64) -> String {
    format!("https://{workspace}.esa.io/posts/{post_id}")
}

pub struct ContentBuilder {
    title: String,
    body_markdown: String,
    body_html: String,
    category: Option<String>,
    tags: Vec<String>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            body_markdown: "# Test Article\n\nBody text.".into(),
            body_html: "<h1>Test Article</h1><p>Body text.</p>".into(),
            category: Some("notes".into()),
            tags: vec!["test".into()],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.body_html = html.into();
        self
    }

    pub fn markdown(mut self, markdown: impl Into<String>) -> Self {
        self.body_markdown = markdown.into();
        self
    }

    pub fn build(self) -> ArticleContent {
        let created = fixed_now() - TimeDelta::days(30);
        ArticleContent {
            title: self.title,
            body_markdown: self.body_markdown,
            body_html: self.body_html,
            category: self.category,
            tags: self.tags.into_iter().collect(),
            created_at: created,
            updated_at: created + TimeDelta::days(2),
            author: Some(ArticleAuthor {
                name: "Test Author".into(),
                screen_name: "tester".into(),
                icon: None,
            }),
        }
    }
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
