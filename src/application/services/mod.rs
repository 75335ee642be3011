// src/application/services/mod.rs
mod admin;

use std::sync::Arc;
use std::time::Duration;

pub use admin::AdminCredential;

use crate::{
    application::{
        ApplicationResult,
        cache::{ContentCache, ListCache},
        commands::articles::ArticleCommandService,
        ports::{CacheStorePort, ClockPort, ContentProviderPort},
        queries::articles::ArticleQueryService,
        render::RenderPipeline,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// Deployment knobs the services need; read from configuration by the binary.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub content_ttl: Duration,
    pub list_ttl: Duration,
    pub scope_selector: String,
    pub admin_token: String,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    admin_credential: AdminCredential,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        cache_store: Arc<CacheStorePort>,
        provider: Arc<ContentProviderPort>,
        clock: Arc<ClockPort>,
        settings: ServiceSettings,
    ) -> Self {
        let content_cache = ContentCache::new(
            Arc::clone(&cache_store),
            Arc::clone(&clock),
            settings.content_ttl,
        );
        let list_cache = ListCache::new(cache_store, Arc::clone(&clock), settings.list_ttl);

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            content_cache.clone(),
            list_cache.clone(),
            Arc::clone(&provider),
            clock,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            content_cache,
            list_cache,
            provider,
            RenderPipeline::new(settings.scope_selector),
        ));

        Self {
            article_commands,
            article_queries,
            admin_credential: AdminCredential::new(&settings.admin_token),
        }
    }

    /// Checks a raw bearer token against the configured admin credential.
    pub fn authenticate_admin(&self, token: &str) -> ApplicationResult<()> {
        self.admin_credential.verify(token)
    }
}
